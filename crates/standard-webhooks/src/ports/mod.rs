//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that senders and receivers call
//! - **Outbound (Driven)**: Collaborators this crate reads from

pub mod inbound;
pub mod outbound;

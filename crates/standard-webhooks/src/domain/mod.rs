//! # Domain Layer
//!
//! Pure signing logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod asymmetric;
pub mod codec;
pub mod config;
pub mod engine;
pub mod errors;
pub mod keys;
pub mod message;
pub mod symmetric;
pub mod tolerance;

//! Core library for the todo backend
//!
//! This crate contains the business logic, including:
//! - The task entity and store abstraction
//! - The filter and sort engines
//! - The task service consumed by the transport layer

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

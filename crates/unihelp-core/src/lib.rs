//! UniHelp Core - Domain models, request lifecycle, and configuration
//!
//! This crate contains the domain logic shared by the UniHelp client and CLI:
//! the request/viewer data model, the role-gated lifecycle decision functions,
//! and the layered configuration.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;

pub use error::{Result, UnihelpError};

//! Shared utilities

pub mod error;

pub use error::{DashboardError, Result};

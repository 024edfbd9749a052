//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP search client, command-line configuration
//! and log output setup.

pub mod config;
pub mod http;
pub mod logging;

pub use config::*;
pub use http::*;
pub use logging::*;

//! reelgrid - Terminal Movie Browser Library
//!
//! Filter state, fetch reconciliation and terminal rendering for browsing
//! pages of movies from a search endpoint.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;

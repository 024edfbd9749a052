//! Application layer managing state and the fetch workflow.
//!
//! This module sits between the domain layer and the presentation layer:
//! it owns the filter state, issues search requests, and reconciles their
//! results into the movie list the UI renders.

pub mod dispatcher;
pub mod reconciler;
pub mod state;

pub use dispatcher::*;
pub use reconciler::*;
pub use state::*;

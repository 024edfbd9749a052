pub mod models;
pub mod filters;
pub mod services;
pub mod errors;

pub use models::*;
pub use filters::*;
pub use services::*;
pub use errors::*;

pub mod aggregate;
pub mod args;
pub mod error;
pub mod formats;
pub mod model;
pub mod request;
pub mod score;

pub use error::EngineError;
pub use request::{EngineRequest, run_request};

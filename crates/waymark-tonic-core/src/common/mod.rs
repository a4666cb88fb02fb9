pub mod error;
pub mod geo;

pub use error::{Error, Result};

pub mod error;

pub use error::{GectorError, GectorResult};

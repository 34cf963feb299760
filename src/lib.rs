pub mod error;
pub mod optional_value;

pub use error::*;
pub use optional_value::*;

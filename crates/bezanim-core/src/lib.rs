pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{BezanimError, Result};
pub use tolerance::Tolerance;

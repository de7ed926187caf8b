pub mod error;
pub mod version;

pub use error::{StrataError, StrataResult};
pub use version::{CompatibilityResult, RuntimeVersion};

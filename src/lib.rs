pub mod descriptor;
pub mod error;
pub mod ui;
pub mod version;

pub use error::{PomVersionError, Result};

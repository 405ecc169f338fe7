pub mod bootstrap;
pub mod branch;
pub mod ci;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod reporter;
pub mod shell;
pub mod types;

pub use error::{DevflowError, Result};

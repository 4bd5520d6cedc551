pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod server;

pub use error::{Error, Result};

pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{engine::GreetEngine, greeter::greet, greeter::SimpleGreeter};
pub use crate::domain::model::{Greeting, GreetingRequest, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Greeter};
pub use crate::utils::error::{GreetError, Result};

pub mod engine;
pub mod greeter;

pub use crate::domain::model::{Greeting, GreetingRequest, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Greeter};
pub use crate::utils::error::Result;

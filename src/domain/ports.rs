use crate::domain::model::{Greeting, GreetingRequest, OutputFormat};

pub trait Greeter: Send + Sync {
    fn greet(&self, request: &GreetingRequest) -> Greeting;
}

pub trait ConfigProvider: Send + Sync {
    fn name(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

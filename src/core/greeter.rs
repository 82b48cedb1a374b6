use crate::core::{Greeter, Greeting, GreetingRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleGreeter;

impl Greeter for SimpleGreeter {
    fn greet(&self, request: &GreetingRequest) -> Greeting {
        tracing::debug!("Formatting greeting for name: {:?}", request.name);

        Greeting {
            message: format!("Hello, {} from Hassan Khalil!", request.name),
        }
    }
}

/// Convenience wrapper for callers that only need the formatted string.
pub fn greet(name: &str) -> String {
    SimpleGreeter
        .greet(&GreetingRequest {
            name: name.to_string(),
        })
        .message
}

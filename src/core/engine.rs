use crate::core::{ConfigProvider, Greeter, GreetingRequest, OutputFormat, Result};

pub struct GreetEngine<G: Greeter, C: ConfigProvider> {
    greeter: G,
    config: C,
}

impl<G: Greeter, C: ConfigProvider> GreetEngine<G, C> {
    pub fn new(greeter: G, config: C) -> Self {
        Self { greeter, config }
    }

    pub fn run(&self) -> Result<String> {
        let request = GreetingRequest {
            name: self.config.name().to_string(),
        };
        tracing::debug!("Built greeting request for name: {:?}", request.name);

        let greeting = self.greeter.greet(&request);

        let rendered = match self.config.output_format() {
            OutputFormat::Text => greeting.message,
            OutputFormat::Json => serde_json::to_string(&greeting)?,
        };
        tracing::debug!("Rendered greeting ({} bytes)", rendered.len());

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::greeter::SimpleGreeter;
    use crate::core::Greeting;

    struct MockGreeter;

    impl Greeter for MockGreeter {
        fn greet(&self, request: &GreetingRequest) -> Greeting {
            Greeting {
                message: format!("hi {}", request.name),
            }
        }
    }

    struct MockConfig {
        name: String,
        output_format: OutputFormat,
    }

    impl MockConfig {
        fn new(name: &str, output_format: OutputFormat) -> Self {
            Self {
                name: name.to_string(),
                output_format,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn name(&self) -> &str {
            &self.name
        }

        fn output_format(&self) -> OutputFormat {
            self.output_format
        }
    }

    #[test]
    fn test_run_renders_text() {
        let engine = GreetEngine::new(MockGreeter, MockConfig::new("Ada", OutputFormat::Text));

        let output = engine.run().unwrap();

        assert_eq!(output, "hi Ada");
    }

    #[test]
    fn test_run_renders_json() {
        let engine = GreetEngine::new(MockGreeter, MockConfig::new("Ada", OutputFormat::Json));

        let output = engine.run().unwrap();

        assert_eq!(output, r#"{"message":"hi Ada"}"#);
    }

    #[test]
    fn test_run_passes_configured_name_through() {
        let engine = GreetEngine::new(
            SimpleGreeter,
            MockConfig::new("World", OutputFormat::Text),
        );

        let output = engine.run().unwrap();

        assert_eq!(output, "Hello, World from Hassan Khalil!");
    }

    #[test]
    fn test_run_with_empty_name() {
        let engine = GreetEngine::new(SimpleGreeter, MockConfig::new("", OutputFormat::Text));

        let output = engine.run().unwrap();

        assert_eq!(output, "Hello,  from Hassan Khalil!");
    }
}

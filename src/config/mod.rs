use crate::core::{ConfigProvider, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greeter")]
#[command(about = "A small CLI that prints a personalized greeting")]
pub struct CliConfig {
    #[arg(long, default_value = "World")]
    pub name: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

use clap::Parser;
use greeter::utils::logger;
use greeter::{CliConfig, GreetEngine, SimpleGreeter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greeter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = GreetEngine::new(SimpleGreeter, config);

    match engine.run() {
        Ok(greeting) => {
            println!("{}", greeting);
        }
        Err(e) => {
            tracing::error!("Rendering greeting failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

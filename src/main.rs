use clap::Parser;
use emoji_codegen::utils::{logger, validation::Validate};
use emoji_codegen::{CliConfig, CodegenEngine, EmojiPipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting emoji-codegen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let pipeline = EmojiPipeline::new(config);
    let engine = CodegenEngine::new(pipeline);

    match engine.run().await {
        Ok(artifact) => {
            // The artifact is the whole deliverable; stdout carries nothing else.
            print!("{}", artifact);
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

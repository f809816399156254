//! Scenecraft CLI binary.
//!
//! - Generate a structured video prompt from a form file
//! - Preview the request parts a form produces
//! - Print the response schema and preference presets

use clap::Parser;
use scenecraft::ScenecraftConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, FormSource, load_form, print_parts, print_presets, print_schema,
        run_generate, write_output,
    };

    // Pick up GEMINI_API_KEY and friends from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    scenecraft::telemetry::init_console_telemetry(cli.verbose);

    match cli.command {
        Commands::Generate {
            form,
            image,
            camera,
            tone,
            output,
            model,
        } => {
            let source = FormSource::new(form, image, camera, tone);
            let outcome = match &cli.config {
                Some(path) => ScenecraftConfig::from_file(path),
                None => ScenecraftConfig::load(),
            };
            let outcome = match outcome {
                Ok(config) => run_generate(&config, &source, model.as_deref()).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(prompt) => write_output(prompt.pretty(), output.as_deref())?,
                Err(e) => {
                    tracing::debug!(error = %e, "Generation failed");
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }

        Commands::Parts {
            form,
            image,
            camera,
            tone,
        } => {
            let source = FormSource::new(form, image, camera, tone);
            match load_form(&source) {
                Ok(form) => print_parts(&form),
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }

        Commands::Schema => print_schema()?,

        Commands::Presets => print_presets(),
    }

    Ok(())
}

//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scenecraft - structured video prompts from timed actions, dialogue and a reference image
#[derive(Parser, Debug)]
#[command(name = "scenecraft")]
#[command(about = "Generate structured video prompts with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video prompt from a form file
    Generate {
        /// Path to the form file (TOML or JSON)
        #[arg(long)]
        form: PathBuf,

        /// Reference image (JPEG, PNG or WebP), replacing any image in the form
        #[arg(long)]
        image: Option<PathBuf>,

        /// Camera movement preference, a preset or free text
        #[arg(long)]
        camera: Option<String>,

        /// Tone preference, a preset or free text
        #[arg(long)]
        tone: Option<String>,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Model to use instead of the configured one
        #[arg(long)]
        model: Option<String>,
    },

    /// Print the request parts a form produces, without calling the model
    Parts {
        /// Path to the form file (TOML or JSON)
        #[arg(long)]
        form: PathBuf,

        /// Reference image (JPEG, PNG or WebP)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Camera movement preference
        #[arg(long)]
        camera: Option<String>,

        /// Tone preference
        #[arg(long)]
        tone: Option<String>,
    },

    /// Print the response schema sent to the model
    Schema,

    /// List camera movement and tone presets
    Presets,
}

pub mod detect;
pub mod format;
pub mod prompt;
pub mod review;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use snafu::ResultExt;

use crate::error::devally_error::IoSnafu;
use crate::error::Result;

#[derive(Parser)]
#[command(
    name = "devally",
    version,
    about = "AI code-review assistant: prompts, language detection, styled HTML"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a raw AI markdown response into styled comment HTML
    Format {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Detect the language of a code snippet
    Detect {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Skip the cheap first-pass detector and use weighted scoring only
        #[arg(long)]
        weighted: bool,
    },

    /// Print the instruction text for a review task without calling the LLM
    Prompt {
        /// Task id (unknown ids fall back to explain_code_flow)
        #[arg(long, default_value = "explain_code_flow")]
        task: String,

        /// Language hint for the content
        #[arg(long, default_value = "")]
        language: String,

        /// Task-specific parameter (functionality, recommendation, platform, ...)
        #[arg(long, default_value = "")]
        param: String,

        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Full review loop: build prompt, call the LLM, print formatted HTML
    Review {
        /// Task id (unknown ids fall back to explain_code_flow)
        #[arg(long, default_value = "explain_code_flow")]
        task: String,

        /// Language hint for the content
        #[arg(long, default_value = "")]
        language: String,

        /// Task-specific parameter (functionality, recommendation, platform, ...)
        #[arg(long, default_value = "")]
        param: String,

        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Read the content under review from a file or stdin.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).context(IoSnafu),
        None => std::io::read_to_string(std::io::stdin()).context(IoSnafu),
    }
}

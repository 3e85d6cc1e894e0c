use clap::Parser;
use devally::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format { file } => devally::cli::format::run(file),
        Commands::Detect { file, weighted } => devally::cli::detect::run(file, weighted),
        Commands::Prompt {
            task,
            language,
            param,
            file,
        } => devally::cli::prompt::run(task, language, param, file),
        Commands::Review {
            task,
            language,
            param,
            file,
        } => devally::cli::review::run(task, language, param, file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

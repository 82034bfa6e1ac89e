// ABOUTME: Main entry point for the kidase-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kidase_slides::{read_workbook, Config, KidaseCreator};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the liturgy deck
    Build(BuildArgs),

    /// List the languages available in the liturgy workbook
    Languages(LanguagesArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing the liturgy workbook
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path to output PPTX file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Languages to show, in column order (1 to 4, comma separated)
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Presentation title
    #[arg(long)]
    title: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Args)]
struct LanguagesArgs {
    /// Directory containing the liturgy workbook
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build(args)) => {
            info!("Executing build command...");
            build(args)
        }
        Some(Commands::Languages(args)) => list_languages(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn build(args: BuildArgs) -> anyhow::Result<()> {
    let mut config = Config::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(languages) = args.languages {
        config.languages = languages
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
    }
    if let Some(title) = args.title {
        config.title = title;
    }

    let creator = KidaseCreator::new(
        &config.data_dir,
        &config.languages,
        config.slide_settings(!args.no_progress),
    )
    .with_context(|| format!("Failed to load the liturgy from {:?}", config.data_dir))?;
    let count = creator
        .write_presentation(&config.output)
        .with_context(|| format!("Failed to write presentation to {:?}", config.output))?;

    println!(
        "Presentation with {} slides written to {:?}",
        count, config.output
    );
    Ok(())
}

fn list_languages(args: LanguagesArgs) -> anyhow::Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(|| Config::from_env().data_dir);
    let sheet = read_workbook(&data_dir)
        .with_context(|| format!("Failed to read the liturgy workbook in {:?}", data_dir))?;
    for header in sheet.headers.iter().filter(|h| !h.is_empty()) {
        println!("{}", header);
    }
    Ok(())
}

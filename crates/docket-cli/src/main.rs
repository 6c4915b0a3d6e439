mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docket",
    version,
    about = "Text extraction tool for inspection report and quote PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every page as cleaned text sections
    Pages {
        /// Path to the PDF file
        pdf_file: PathBuf,

        /// Custom JSON extraction config
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Ignore phrase(s), replacing the built-in list
        #[arg(short, long = "ignore", value_name = "PHRASE")]
        ignore: Vec<String>,

        /// Split this page into left/right columns (default: page 3)
        #[arg(long, value_name = "PAGE")]
        split_page: Option<usize>,

        /// Column split point as a fraction of page width (default: 0.5)
        #[arg(long, value_name = "RATIO", requires = "split_page")]
        split_ratio: Option<f32>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted sections to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract quote line items from a vendor's item region
    Items {
        /// Path to the PDF file
        pdf_file: PathBuf,

        /// Built-in vendor profile(s): billroy, cps (default: all, in order)
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Vec<String>,

        /// Custom JSON vendor profile file(s)
        #[arg(short = 'P', long = "profile", value_name = "FILE")]
        profile: Vec<PathBuf>,

        /// Explicit region start marker (skips vendor detection)
        #[arg(long, value_name = "TEXT", requires = "end_marker")]
        start_marker: Option<String>,

        /// Explicit region end marker (skips vendor detection)
        #[arg(long, value_name = "TEXT", requires = "start_marker")]
        end_marker: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted items to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect vendor profiles
    Vendors {
        #[command(subcommand)]
        action: VendorsAction,
    },
}

#[derive(Subcommand)]
enum VendorsAction {
    /// List built-in vendor profiles
    List,
    /// Explain a vendor profile in plain language
    Explain {
        /// Profile name (e.g., "billroy")
        name: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom vendor profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pages {
            pdf_file,
            config,
            ignore,
            split_page,
            split_ratio,
            output,
            out,
        } => commands::pages::run(pdf_file, config, ignore, split_page, split_ratio, &output, out),
        Commands::Items {
            pdf_file,
            preset,
            profile,
            start_marker,
            end_marker,
            output,
            out,
        } => commands::items::run(
            pdf_file,
            preset,
            profile,
            start_marker,
            end_marker,
            &output,
            out,
        ),
        Commands::Vendors { action } => match action {
            VendorsAction::List => commands::vendors::list(),
            VendorsAction::Explain { name } => commands::vendors::explain(&name),
            VendorsAction::Schema => commands::vendors::schema(),
            VendorsAction::Validate { file } => commands::vendors::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

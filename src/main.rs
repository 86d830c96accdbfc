use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use calcrostic::commands::{generate_puzzle, parse_response, GenerateOptions};
use calcrostic::error::CalcrosticError;
use calcrostic::models::{ConfigOverrides, OutputFormat};

/// calcrostic - fetch letter-arithmetic puzzles and split them into puzzle, solution and mapping
#[derive(Parser)]
#[command(name = "calcrostic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a new puzzle from the service
    Generate {
        /// Allow the digit 0
        #[arg(long)]
        allow_zero: Option<bool>,

        /// Allow two-digit cell values
        #[arg(long)]
        allow_two_digit: Option<bool>,

        /// Allow division operators
        #[arg(long)]
        allow_division: Option<bool>,

        /// Minimum number of distinct letters
        #[arg(long)]
        letters_min: Option<u32>,

        /// Maximum number of distinct letters
        #[arg(long)]
        letters_max: Option<u32>,

        /// Override the puzzle service URL
        #[arg(long)]
        url: Option<String>,

        /// Override the request timeout in seconds (0 = no timeout)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the parsed fields as JSON
        #[arg(long)]
        json: bool,

        /// Print the request URL without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Split a saved service response into puzzle, solution and mapping
    Parse {
        /// Response file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Print the parsed fields as JSON
        #[arg(long)]
        json: bool,
    },
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

async fn run(command: Commands) -> Result<(), CalcrosticError> {
    let project_root = std::env::current_dir()?;

    match command {
        Commands::Generate {
            allow_zero,
            allow_two_digit,
            allow_division,
            letters_min,
            letters_max,
            url,
            timeout,
            json,
            dry_run,
        } => {
            let options = GenerateOptions {
                overrides: ConfigOverrides {
                    url,
                    timeout,
                    allow_zero,
                    allow_two_digit,
                    allow_division,
                    letters_min,
                    letters_max,
                },
                format: output_format(json),
                dry_run,
            };
            generate_puzzle(&project_root, options).await
        }

        Commands::Parse { input, json } => parse_response(&project_root, input, output_format(json)),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for rendered output
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

use clap::{Parser as ClapParser, Subcommand};
use oaql_lang::cli::{self, CheckOptions, CheckResult, CliError, TokensOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(ClapParser)]
#[command(name = "oaql")]
#[command(about = "OAQL - scan and validate SQL-like queries for document stores")]
#[command(version)]
struct Cli {
    /// Log scanner and parser activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query
    Check {
        /// The query (reads --file or stdin if not provided)
        query: Option<String>,

        /// Read the query from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the tokens of a query
    Tokens {
        /// The query (reads --file or stdin if not provided)
        query: Option<String>,

        /// Read the query from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit one JSON object per token
        #[arg(long)]
        json: bool,
    },

    /// Show the accepted grammar and token codes
    Grammar,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { query, file } => run_check(query, file),
        Commands::Tokens { query, file, json } => run_tokens(query, file, json),
        Commands::Grammar => {
            print!("{}", cli::get_grammar_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "oaql_lang=debug"
    } else {
        "oaql_lang=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Fall back to piped stdin when neither an argument nor a file is given.
fn query_or_stdin(
    query: Option<String>,
    file: Option<&PathBuf>,
) -> Result<Option<String>, CliError> {
    if query.is_some() || file.is_some() || atty::is(atty::Stream::Stdin) {
        return Ok(query);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn run_check(query: Option<String>, file: Option<PathBuf>) -> Result<(), CliError> {
    let query = query_or_stdin(query, file.as_ref())?;
    let options = CheckOptions { query, file };

    match cli::execute_check(&options)? {
        CheckResult::Valid => println!("VALID"),
        CheckResult::Invalid(e) => {
            println!("INVALID: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_tokens(query: Option<String>, file: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let query = query_or_stdin(query, file.as_ref())?;
    let options = TokensOptions { query, file, json };
    cli::execute_tokens(&options, &mut io::stdout().lock())
}

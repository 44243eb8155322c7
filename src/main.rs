use clap::{Parser as ClapParser, Subcommand};
use sqltree_json::{
    RenderOptions,
    cli::{self, CliError, RenderInput},
    serializer::DEFAULT_MAX_DEPTH,
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sqltree")]
#[command(about = "sqltree - Render parsed SQL statement trees as JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an encoded statement tree as a JSON document
    Render {
        /// File holding the encoded statement tree (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Deepest nesting accepted before giving up
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// List label tables, or the labels of one table
    Kinds {
        /// Table name (use 'sqltree kinds' to list tables)
        table: Option<String>,
    },
}

fn main() {
    // Diagnostics go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            pretty,
            max_depth,
        } => run_render(input, pretty, max_depth),
        Commands::Kinds { table: None } => {
            print!("{}", cli::get_kinds_overview());
            Ok(())
        }
        Commands::Kinds { table: Some(table) } => cli::get_kind_table(&table).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_render(input: Option<PathBuf>, pretty: bool, max_depth: usize) -> Result<(), CliError> {
    let input = match input {
        Some(path) => Some(fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let request = RenderInput {
        input,
        options: RenderOptions { pretty, max_depth },
    };

    println!("{}", cli::execute_render(&request)?);
    Ok(())
}

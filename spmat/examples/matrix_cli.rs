#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use spmat::{
    cli::{self, DEFAULT_LHS_PATH, DEFAULT_RHS_PATH, PROMPT},
    OutputFormat, ReadConfig,
};

#[cfg(feature = "cli")]
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
struct Cli {
    /// Operation to perform: add, subtract or multiply (prompted for if omitted)
    action: Option<String>,

    /// Left-hand matrix file
    #[arg(long, default_value = DEFAULT_LHS_PATH)]
    lhs: PathBuf,

    /// Right-hand matrix file
    #[arg(long, default_value = DEFAULT_RHS_PATH)]
    rhs: PathBuf,

    /// Print each entry to stderr as it is read
    #[arg(long, short)]
    verbose: bool,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let action = match cli.action {
        Some(action) => action,
        None => prompt_action()?,
    };

    let config = ReadConfig::default().with_echo_entries(cli.verbose);
    let outcome = cli::run(&action, &cli.lhs, &cli.rhs, &config, cli.format);
    for line in outcome.lines() {
        println!("{line}");
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example matrix_cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn prompt_action() -> io::Result<String> {
    print!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

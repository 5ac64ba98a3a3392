mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{candidates, compile, CandidatesArgs, CompileArgs};

/// Framecast CLI - compile design-tool scene exports to static HTML and CSS
#[derive(Parser, Debug)]
#[command(name = "framecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a scene export to an HTML page and stylesheet
    Compile(CompileArgs),

    /// List node ids that need substitute raster images
    Candidates(CandidatesArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Compile(args) => compile(args),
        Command::Candidates(args) => candidates(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

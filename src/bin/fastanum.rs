use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use fastanum::annotate::annotate_file;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "usage: fastanum <input.fasta> <output.fasta>";

#[derive(Parser, Debug)]
#[command(
    name = "fastanum",
    about = "Append a sequential number to every FASTA header"
)]
struct Cli {
    #[arg(value_name = "input.fasta")]
    input: PathBuf,

    #[arg(value_name = "output.fasta")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => err.exit(),
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    };

    let stats = annotate_file(&cli.input, &cli.output)?;

    println!("wrote output: {}", cli.output.display());
    println!("total_lines\t{}", stats.total_lines);
    println!("header_lines\t{}", stats.header_lines);

    Ok(())
}

//! CLI entry point for the procedural kanji generator

use clap::Parser;
use kanjigen::io::cli::{Cli, GenerationRunner};

fn main() -> kanjigen::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.run()
}

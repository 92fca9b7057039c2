//! Command-line interface for batch glyph generation

use crate::compose::selector::Selector;
use crate::corpus::config::load_corpus;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_DATA_FILE};
use crate::io::error::{file_system_error, Result};
use crate::io::progress::ProgressManager;
use crate::svg::node::Node;
use crate::svg::write::serialize;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kanjigen")]
#[command(
    author,
    version,
    about = "Procedurally generate kanji by compositing radical and character SVGs"
)]
/// Command-line arguments for the generation tool
pub struct Cli {
    /// Number of kanji to generate
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Directory to write generated kanji into; with a count of 1 this is
    /// treated as the target file path instead
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Data file driving generation; fragment directories resolve relative
    /// to its location
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Radicals (by data file name) to choose among; default is all
    #[arg(short, long)]
    pub radical: Vec<String>,

    /// Characters (by glyph or filename) to choose among; default is all
    /// except the excluded set
    #[arg(short = 'C', long = "character")]
    pub characters: Vec<String>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }

    fn filter(values: &[String]) -> Option<&[String]> {
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }
}

/// Orchestrates corpus loading and batch image generation
pub struct GenerationRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));
        Self { cli, progress }
    }

    /// Load the corpus and generate the requested images
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; generation stops at a failed
    /// image rather than skipping past it.
    pub fn run(&mut self) -> Result<()> {
        let corpus = load_corpus(&self.cli.data)?;
        let selector = Selector::new(
            &corpus,
            Cli::filter(&self.cli.radical),
            Cli::filter(&self.cli.characters),
        )?;

        let mut rng = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        if self.cli.count == 1 {
            let document = selector.generate(&mut rng)?;
            return write_document(&self.cli.output, &document);
        }

        let index_width = index_width(self.cli.count);
        for index in 0..self.cli.count {
            let document = selector.generate(&mut rng)?;
            let path = self.cli.output.join(format!("{index:0index_width$}.svg"));
            write_document(&path, &document)?;

            if let Some(ref progress) = self.progress {
                progress.complete_image();
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }
        Ok(())
    }
}

/// Width of zero-padded sequential filenames for a batch of `count` images
pub fn index_width(count: usize) -> usize {
    (((count + 1) as f64).log10().ceil()) as usize
}

fn write_document(path: &Path, document: &Node) -> Result<()> {
    let bytes = serialize(document).map_err(|err| file_system_error(path, "serialize", err))?;
    std::fs::write(path, bytes).map_err(|err| file_system_error(path, "write", err))
}

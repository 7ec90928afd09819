//! CoNLL 2000 Conversion Tool
//!
//! Converts the CoNLL 2000 chunking `train.txt` / `test.txt` files into
//! `train.txt`, `val.txt`, `test.txt` and `labels.txt` ready for training.
//! The training file is shuffled with a fixed seed and split 90/10 into
//! train and validation sets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chunkprep_core::pipeline::{
    DEFAULT_SOURCE_FOLDER, DEFAULT_TARGET_FOLDER, DEFAULT_TEST_FILE, DEFAULT_TRAIN_FILE,
};
use chunkprep_core::split::{DEFAULT_SEED, DEFAULT_TRAIN_RATIO};
use chunkprep_core::{ConvertConfig, SourceLayout, SplitConfig, TrailingSentence, convert};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "conll-convert")]
#[command(about = "Convert CoNLL 2000 chunking data into tab-separated training files")]
#[command(version)]
struct Cli {
    /// Folder holding the CoNLL 2000 train and test files
    #[arg(short, long, env = "CHUNKPREP_SOURCE_FOLDER", default_value = DEFAULT_SOURCE_FOLDER)]
    source_folder: PathBuf,

    /// Folder receiving the converted files (created if missing)
    #[arg(short, long, env = "CHUNKPREP_TARGET_FOLDER", default_value = DEFAULT_TARGET_FOLDER)]
    target_folder: PathBuf,

    /// Name of the training file inside the source folder
    #[arg(long, env = "CHUNKPREP_TRAIN_FILE", default_value = DEFAULT_TRAIN_FILE)]
    train_file: String,

    /// Name of the test file inside the source folder
    #[arg(long, env = "CHUNKPREP_TEST_FILE", default_value = DEFAULT_TEST_FILE)]
    test_file: String,

    /// Seed for the train/validation shuffle
    #[arg(long, env = "CHUNKPREP_SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Share of training sentences kept for training (rest goes to validation)
    #[arg(long, env = "CHUNKPREP_TRAIN_RATIO", default_value_t = DEFAULT_TRAIN_RATIO)]
    train_ratio: f64,

    /// Drop a final sentence that is not followed by a blank line
    #[arg(long)]
    drop_unterminated: bool,

    /// Print the conversion report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        ConvertConfig {
            source: SourceLayout {
                folder: self.source_folder,
                train_file: self.train_file,
                test_file: self.test_file,
            },
            target_folder: self.target_folder,
            split: SplitConfig {
                seed: self.seed,
                train_ratio: self.train_ratio,
            },
            trailing: if self.drop_unterminated {
                TrailingSentence::Drop
            } else {
                TrailingSentence::Keep
            },
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config = cli.into_config();

    let report = convert(&config).with_context(|| {
        format!(
            "failed to convert {} into {}",
            config.source.folder.display(),
            config.target_folder.display()
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Conversion failed: {e:#}");
        std::process::exit(1);
    }
}

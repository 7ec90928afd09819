//! # Conversion Pipeline
//!
//! Reads the two source files, counts labels, splits the training data and
//! writes `train.txt`, `val.txt`, `test.txt` and `labels.txt`.

use std::fmt::Display;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::corpus::{SourceRole, Split};
use crate::error::Result;
use crate::reader::{SourceLayout, TrailingSentence, read_corpus};
use crate::split::{SplitConfig, shuffle_and_split};
use crate::vocab::{LabelCount, LabelVocabulary};
use crate::writer::{ensure_target_dir, write_labels, write_split};

/// Default location of the CoNLL 2000 source files.
pub const DEFAULT_SOURCE_FOLDER: &str = "data/sources/conll2000";
/// Default output location.
pub const DEFAULT_TARGET_FOLDER: &str = "data/ready/chunk/conll2000";
/// Default name of the training source file.
pub const DEFAULT_TRAIN_FILE: &str = "train.txt";
/// Default name of the test source file.
pub const DEFAULT_TEST_FILE: &str = "test.txt";

/// Everything a conversion run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub source: SourceLayout,
    pub target_folder: PathBuf,
    pub split: SplitConfig,
    pub trailing: TrailingSentence,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source: SourceLayout {
                folder: PathBuf::from(DEFAULT_SOURCE_FOLDER),
                train_file: DEFAULT_TRAIN_FILE.to_string(),
                test_file: DEFAULT_TEST_FILE.to_string(),
            },
            target_folder: PathBuf::from(DEFAULT_TARGET_FOLDER),
            split: SplitConfig::default(),
            trailing: TrailingSentence::default(),
        }
    }
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<()> {
        self.split.validate()
    }
}

/// Counts for one written split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub split: Split,
    pub path: PathBuf,
    pub sentences: usize,
    pub tokens: usize,
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub source_folder: PathBuf,
    pub target_folder: PathBuf,
    pub total_sentences: usize,
    pub total_tokens: usize,
    pub labels: Vec<LabelCount>,
    pub splits: Vec<SplitReport>,
    pub labels_path: PathBuf,
}

impl ConversionReport {
    pub fn split(&self, split: Split) -> Option<&SplitReport> {
        self.splits.iter().find(|r| r.split == split)
    }
}

/// Run the whole conversion.
///
/// Both source files are fully read before the target folder is touched,
/// so configuration and parse errors leave no output behind.
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport> {
    config.validate()?;

    info!("Source folder: {}", config.source.folder.display());
    info!("Target folder: {}", config.target_folder.display());

    let mut corpus = read_corpus(&config.source, config.trailing)?;
    let vocab = LabelVocabulary::from_corpus(&corpus);
    let total_sentences = corpus.sentence_count();
    let total_tokens = corpus.token_count();

    info!("total sentences: {}", thousands(total_sentences));
    info!("total tokens: {}", thousands(total_tokens));
    info!(
        "labels with occurrence counts: [{}]",
        vocab
            .entries()
            .iter()
            .map(|e| format!("({}, {})", e.label, thousands(e.count)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    // `read_corpus` returns exactly one file per role.
    let train_source = corpus
        .take(SourceRole::Train)
        .map(|f| f.sentences)
        .unwrap_or_default();
    let test = corpus
        .take(SourceRole::Test)
        .map(|f| f.sentences)
        .unwrap_or_default();
    let (train, val) = shuffle_and_split(train_source, &config.split);

    ensure_target_dir(&config.target_folder)?;

    let mut splits = Vec::with_capacity(Split::all().len());
    for (split, sentences) in [(Split::Train, &train), (Split::Val, &val), (Split::Test, &test)] {
        let stats = write_split(&config.target_folder, split, sentences)?;
        info!(
            "{} sentences ({} tokens) written to {}",
            thousands(stats.sentences),
            thousands(stats.tokens),
            stats.path.display()
        );
        splits.push(SplitReport {
            split,
            path: stats.path,
            sentences: stats.sentences,
            tokens: stats.tokens,
        });
    }

    let labels_path = write_labels(&config.target_folder, vocab.labels())?;
    info!("{} labels written to {}", vocab.len(), labels_path.display());

    Ok(ConversionReport {
        source_folder: config.source.folder.clone(),
        target_folder: config.target_folder.clone(),
        total_sentences,
        total_tokens,
        labels: vocab.entries(),
        splits,
        labels_path,
    })
}

/// Format a count with `,` between groups of three digits.
pub fn thousands(n: impl Display) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

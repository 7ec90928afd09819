//! # Corpus Types
//!
//! Token/label pairs, sentences and the per-file sentence lists the
//! reader produces.

use std::fmt;

use serde::Serialize;

/// A token and the chunk label attached to it (e.g. `("Rockwell", "B-NP")`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenLabel {
    pub token: String,
    pub label: String,
}

impl TokenLabel {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

/// An ordered, non-empty run of token/label pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    pairs: Vec<TokenLabel>,
}

impl Sentence {
    /// Build a sentence; returns `None` for an empty pair list.
    pub fn new(pairs: Vec<TokenLabel>) -> Option<Self> {
        if pairs.is_empty() {
            None
        } else {
            Some(Self { pairs })
        }
    }

    pub fn pairs(&self) -> &[TokenLabel] {
        &self.pairs
    }

    /// Number of tokens (always at least one).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.token.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.label.as_str())
    }
}

/// The part a source file plays in the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceRole {
    /// Shuffled and split into the train and val outputs.
    Train,
    /// Copied unchanged to the test output.
    Test,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRole::Train => write!(f, "train"),
            SourceRole::Test => write!(f, "test"),
        }
    }
}

/// One of the three output partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in the order they are written.
    pub fn all() -> &'static [Split] {
        &[Split::Train, Split::Val, Split::Test]
    }

    /// Output file name inside the target folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Split::Train => "train.txt",
            Split::Val => "val.txt",
            Split::Test => "test.txt",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Val => write!(f, "val"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// Sentences parsed from a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub role: SourceRole,
    pub file_name: String,
    pub sentences: Vec<Sentence>,
}

impl SourceFile {
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

/// Every source file read for a conversion run, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    files: Vec<SourceFile>,
}

impl Corpus {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Remove and return the file filling `role`.
    pub fn take(&mut self, role: SourceRole) -> Option<SourceFile> {
        let idx = self.files.iter().position(|f| f.role == role)?;
        Some(self.files.remove(idx))
    }

    pub fn get(&self, role: SourceRole) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.role == role)
    }

    pub fn sentence_count(&self) -> usize {
        self.files.iter().map(|f| f.sentences.len()).sum()
    }

    pub fn token_count(&self) -> usize {
        self.files.iter().map(SourceFile::token_count).sum()
    }
}

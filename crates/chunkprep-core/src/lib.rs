//! # Chunkprep Core
//!
//! Turns a CoNLL 2000 chunking corpus into the tab-separated training format
//! used by sequence-labeling trainers: one sentence per line, tokens and
//! labels separated by a tab.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use chunkprep_core::reader::{parse_sentences, TrailingSentence};
//! use chunkprep_core::writer::format_line;
//!
//! let text = "Rockwell NNP B-NP\nInternational NNP I-NP\nis VBZ B-VP\n\n";
//! let sentences = parse_sentences(text, Path::new("train.txt"), TrailingSentence::Keep).unwrap();
//!
//! assert_eq!(sentences.len(), 1);
//! assert_eq!(format_line(&sentences[0]), "Rockwell International is\tB-NP I-NP B-VP");
//! ```
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod split;
pub mod vocab;
pub mod writer;

// Re-export primary API
pub use corpus::{Corpus, Sentence, SourceFile, SourceRole, Split, TokenLabel};
pub use error::{ChunkprepError, Result};
pub use pipeline::{ConversionReport, ConvertConfig, SplitReport, convert};
pub use reader::{SourceLayout, TrailingSentence};
pub use split::SplitConfig;
pub use vocab::{LabelCount, LabelVocabulary};

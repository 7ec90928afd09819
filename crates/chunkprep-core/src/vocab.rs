//! Label occurrence counting.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::corpus::{Corpus, Sentence};

/// A label with the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Distinct labels of a corpus, ordered by their byte representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelVocabulary {
    counts: BTreeMap<String, usize>,
}

impl LabelVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every label of every sentence of every source file.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut vocab = Self::new();
        for file in corpus.files() {
            vocab.add_sentences(&file.sentences);
        }
        vocab
    }

    pub fn add_sentences<'a>(&mut self, sentences: impl IntoIterator<Item = &'a Sentence>) {
        for sentence in sentences {
            for label in sentence.labels() {
                self.add(label);
            }
        }
    }

    pub fn add(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(label, count)` entries in ascending label order.
    pub fn entries(&self) -> Vec<LabelCount> {
        self.counts
            .iter()
            .map(|(label, &count)| LabelCount {
                label: label.clone(),
                count,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

//! Tab-separated output files.
//!
//! Each sentence becomes one line: the tokens joined by single spaces, a tab,
//! then the labels joined by single spaces.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::corpus::{Sentence, Split};
use crate::error::{ChunkprepError, Result};

/// Name of the label vocabulary file.
pub const LABELS_FILE: &str = "labels.txt";

/// Counts for one written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStats {
    pub path: PathBuf,
    pub sentences: usize,
    pub tokens: usize,
}

/// Render a sentence as `tokens\tlabels` without the trailing newline.
pub fn format_line(sentence: &Sentence) -> String {
    let tokens: Vec<&str> = sentence.tokens().collect();
    let labels: Vec<&str> = sentence.labels().collect();
    format!("{}\t{}", tokens.join(" "), labels.join(" "))
}

/// Create the target folder and any missing parents.
pub fn ensure_target_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ChunkprepError::io(dir, e))
}

/// Write the sentences of one split to `<dir>/<split file name>`, replacing
/// any existing file.
pub fn write_split(dir: &Path, split: Split, sentences: &[Sentence]) -> Result<WriteStats> {
    let path = dir.join(split.file_name());
    let mut tokens = 0;

    write_lines(&path, |out| {
        for sentence in sentences {
            writeln!(out, "{}", format_line(sentence))?;
            tokens += sentence.len();
        }
        Ok(())
    })?;

    Ok(WriteStats {
        path,
        sentences: sentences.len(),
        tokens,
    })
}

/// Write one label per line to `<dir>/labels.txt`. Returns the file path.
pub fn write_labels<'a>(dir: &Path, labels: impl IntoIterator<Item = &'a str>) -> Result<PathBuf> {
    let path = dir.join(LABELS_FILE);
    write_lines(&path, |out| {
        for label in labels {
            writeln!(out, "{label}")?;
        }
        Ok(())
    })?;
    Ok(path)
}

fn write_lines<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| ChunkprepError::io(path, e))?;
    let mut out = BufWriter::new(file);
    body(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| ChunkprepError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TokenLabel;

    fn sentence(pairs: &[(&str, &str)]) -> Sentence {
        Sentence::new(pairs.iter().map(|(t, l)| TokenLabel::new(*t, *l)).collect()).unwrap()
    }

    #[test]
    fn test_format_line() {
        let s = sentence(&[("Rockwell", "B-NP"), ("International", "I-NP"), ("is", "B-VP")]);
        assert_eq!(format_line(&s), "Rockwell International is\tB-NP I-NP B-VP");
    }

    #[test]
    fn test_write_split_counts_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let sentences = vec![
            sentence(&[("He", "B-NP"), ("reckons", "B-VP")]),
            sentence(&[("déjà", "O")]),
        ];

        let stats = write_split(dir.path(), Split::Val, &sentences).unwrap();
        assert_eq!(stats.path, dir.path().join("val.txt"));
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.tokens, 3);

        let written = fs::read_to_string(&stats.path).unwrap();
        assert_eq!(written, "He reckons\tB-NP B-VP\ndéjà\tO\n");
    }

    #[test]
    fn test_write_split_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test.txt"), "stale content\nmore\n").unwrap();

        write_split(dir.path(), Split::Test, &[sentence(&[("a", "O")])]).unwrap();
        let written = fs::read_to_string(dir.path().join("test.txt")).unwrap();
        assert_eq!(written, "a\tO\n");
    }

    #[test]
    fn test_write_empty_split() {
        let dir = tempfile::tempdir().unwrap();
        let stats = write_split(dir.path(), Split::Train, &[]).unwrap();
        assert_eq!((stats.sentences, stats.tokens), (0, 0));
        assert_eq!(fs::read_to_string(stats.path).unwrap(), "");
    }

    #[test]
    fn test_write_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_labels(dir.path(), ["B-NP", "I-NP", "O"]).unwrap();
        assert_eq!(path, dir.path().join(LABELS_FILE));
        assert_eq!(fs::read_to_string(path).unwrap(), "B-NP\nI-NP\nO\n");
    }

    #[test]
    fn test_ensure_target_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("ready").join("chunk").join("conll2000");
        ensure_target_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent.
        ensure_target_dir(&nested).unwrap();
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_split(&missing, Split::Train, &[]).unwrap_err();
        assert!(matches!(err, ChunkprepError::Io { .. }));
    }
}

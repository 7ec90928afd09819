//! Loading of CoNLL 2000 chunking files.
//!
//! Each non-blank line holds space-separated columns
//! (`Rockwell NNP B-NP`); the even-indexed columns are the token and its
//! chunk label. Blank lines end a sentence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::corpus::{Corpus, Sentence, SourceFile, SourceRole, TokenLabel};
use crate::error::{ChunkprepError, Result};

/// What to do with a sentence that is still open when the file ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingSentence {
    /// Emit it like any other sentence.
    #[default]
    Keep,
    /// Discard it, matching files converted by older tooling.
    Drop,
}

/// Where the two source files live and what they are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub folder: PathBuf,
    pub train_file: String,
    pub test_file: String,
}

impl SourceLayout {
    pub fn file_name(&self, role: SourceRole) -> &str {
        match role {
            SourceRole::Train => &self.train_file,
            SourceRole::Test => &self.test_file,
        }
    }

    pub fn path(&self, role: SourceRole) -> PathBuf {
        self.folder.join(self.file_name(role))
    }
}

/// Split one non-blank line into its token/label pair.
///
/// Returns `None` when the even-indexed columns are not exactly two.
pub fn parse_line(line: &str) -> Option<TokenLabel> {
    let mut fields = line.split(' ').step_by(2);
    let token = fields.next()?;
    let label = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(TokenLabel::new(token, label))
}

/// Group the lines of `text` into sentences.
///
/// `path` is only used for error reporting.
pub fn parse_sentences(
    text: &str,
    path: &Path,
    trailing: TrailingSentence,
) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut running = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(sentence) = Sentence::new(std::mem::take(&mut running)) {
                sentences.push(sentence);
            }
            continue;
        }

        let pair = parse_line(line).ok_or_else(|| ChunkprepError::MalformedLine {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.to_string(),
        })?;
        running.push(pair);
    }

    if !running.is_empty() {
        match trailing {
            TrailingSentence::Keep => sentences.extend(Sentence::new(running)),
            TrailingSentence::Drop => warn!(
                tokens = running.len(),
                "dropping unterminated final sentence in {}",
                path.display()
            ),
        }
    }

    Ok(sentences)
}

/// Read and parse a single chunking file.
pub fn read_sentences<P: AsRef<Path>>(path: P, trailing: TrailingSentence) -> Result<Vec<Sentence>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ChunkprepError::io(path, e))?;
    parse_sentences(&text, path, trailing)
}

/// Read both role files from the source folder.
///
/// Both files are checked for existence before either is parsed.
pub fn read_corpus(layout: &SourceLayout, trailing: TrailingSentence) -> Result<Corpus> {
    if !layout.folder.is_dir() {
        return Err(ChunkprepError::SourceFolderMissing {
            path: layout.folder.clone(),
        });
    }

    let roles = [SourceRole::Train, SourceRole::Test];
    for role in roles {
        let path = layout.path(role);
        if !path.is_file() {
            return Err(ChunkprepError::SourceFileMissing { role, path });
        }
    }

    let mut files = Vec::with_capacity(roles.len());
    for role in roles {
        let path = layout.path(role);
        info!("processing data from {}", path.display());

        let sentences = read_sentences(&path, trailing)?;
        let file = SourceFile {
            role,
            file_name: layout.file_name(role).to_string(),
            sentences,
        };
        debug!(
            %role,
            sentences = file.sentences.len(),
            tokens = file.token_count(),
            "parsed {}",
            file.file_name
        );
        files.push(file);
    }

    Ok(Corpus::new(files))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Rockwell NNP B-NP\nInternational NNP I-NP\nis VBZ B-VP\n\n";

    fn parse(text: &str, trailing: TrailingSentence) -> Vec<Sentence> {
        parse_sentences(text, Path::new("sample.txt"), trailing).unwrap()
    }

    #[test]
    fn test_parse_line_keeps_even_columns() {
        let pair = parse_line("Rockwell NNP B-NP").unwrap();
        assert_eq!(pair, TokenLabel::new("Rockwell", "B-NP"));

        // Four columns still leave two even-indexed fields.
        let pair = parse_line("Confidence NN B-NP extra").unwrap();
        assert_eq!(pair, TokenLabel::new("Confidence", "B-NP"));
    }

    #[test]
    fn test_parse_line_rejects_bad_shapes() {
        assert!(parse_line("lonely").is_none());
        assert!(parse_line("only two").is_none());
        assert!(parse_line("a b c d e").is_none());
    }

    #[test]
    fn test_parse_single_sentence() {
        let sentences = parse(SAMPLE, TrailingSentence::Keep);
        assert_eq!(sentences.len(), 1);
        assert_eq!(
            sentences[0].pairs(),
            &[
                TokenLabel::new("Rockwell", "B-NP"),
                TokenLabel::new("International", "I-NP"),
                TokenLabel::new("is", "B-VP"),
            ]
        );
    }

    #[test]
    fn test_repeated_blank_lines_do_not_create_empty_sentences() {
        let text = "\n\nA DT B-NP\n\n\n\nB NN I-NP\n\n";
        let sentences = parse(text, TrailingSentence::Keep);
        assert_eq!(sentences.len(), 2);
        assert!(sentences.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_counts_match_line_structure() {
        let text = "a X O\nb X O\n\nc X O\n\nd X O\ne X O\nf X O\n\n";
        let sentences = parse(text, TrailingSentence::Keep);
        let non_blank = text.lines().filter(|l| !l.is_empty()).count();
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences.iter().map(Sentence::len).sum::<usize>(), non_blank);
    }

    #[test]
    fn test_trailing_sentence_kept_by_default() {
        let sentences = parse("a X O\n\nb X B-NP\nc X I-NP", TrailingSentence::Keep);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].len(), 2);
    }

    #[test]
    fn test_trailing_sentence_dropped_in_legacy_mode() {
        let sentences = parse("a X O\n\nb X B-NP\nc X I-NP", TrailingSentence::Drop);
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let sentences = parse("a X O\r\nb X O\r\n\r\n", TrailingSentence::Keep);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].labels().collect::<Vec<_>>(), vec!["O", "O"]);
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let err = parse_sentences("a X O\nbroken\n\n", Path::new("train.txt"), TrailingSentence::Keep)
            .unwrap_err();
        match err {
            ChunkprepError::MalformedLine { path, line, content } => {
                assert_eq!(path, PathBuf::from("train.txt"));
                assert_eq!(line, 2);
                assert_eq!(content, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_layout_paths() {
        let layout = SourceLayout {
            folder: PathBuf::from("corpus"),
            train_file: "train.txt".into(),
            test_file: "test.txt".into(),
        };
        assert_eq!(layout.path(SourceRole::Train), PathBuf::from("corpus/train.txt"));
        assert_eq!(layout.file_name(SourceRole::Test), "test.txt");
    }
}

use crate::error::{LseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

lazy_static! {
    static ref TRAILING_PUNCT: Regex = Regex::new(r"[.,?:;!]+$").expect("valid regex");
    static ref LETTERS: Regex = Regex::new(r"^\p{L}+$").expect("valid regex");
}

/// Words that are never keywords. Entries are stored verbatim (no case folding).
#[derive(Debug, Clone, Default)]
pub struct NoiseWords(HashSet<String>);

impl NoiseWords {
    /// One word per line; surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        Self(words)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| LseError::from_input_open(path, e))?;
        let mut lines = Vec::new();
        for line in BufReader::new(f).lines() {
            lines.push(line?);
        }
        let noise = Self::from_lines(lines);
        tracing::debug!(path = %path.display(), words = noise.len(), "loaded noise words");
        Ok(noise)
    }

    pub fn contains(&self, word: &str) -> bool { self.0.contains(word) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Turns raw whitespace-delimited tokens into keywords.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    noise: NoiseWords,
}

impl Normalizer {
    pub fn new(noise: NoiseWords) -> Self { Self { noise } }

    /// Returns the lower-cased keyword for `raw`, or `None` if the token is not one.
    ///
    /// Trailing `. , ? : ; !` are stripped (leading and interior punctuation is
    /// kept and therefore rejects the token); what remains must be non-empty,
    /// consist only of letters, and not be a noise word once lower-cased.
    pub fn keyword(&self, raw: &str) -> Option<String> {
        let stripped = TRAILING_PUNCT.replace(raw, "");
        if !LETTERS.is_match(&stripped) {
            return None;
        }
        let word = stripped.to_lowercase();
        if self.noise.contains(&word) {
            return None;
        }
        Some(word)
    }
}

use crate::error::{LseError, Result};
use crate::index::Occurrence;
use crate::normalize::Normalizer;
use std::collections::hash_map::{self, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Keyword counts for a single document, consumed once by [`crate::IndexBuilder::merge`].
#[derive(Debug, Clone)]
pub struct DocumentKeywords {
    document: String,
    occurrences: HashMap<String, Occurrence>,
}

impl DocumentKeywords {
    pub fn new(document: impl Into<String>) -> Self {
        Self { document: document.into(), occurrences: HashMap::new() }
    }

    pub fn document(&self) -> &str { &self.document }

    pub fn get(&self, keyword: &str) -> Option<&Occurrence> { self.occurrences.get(keyword) }

    pub fn len(&self) -> usize { self.occurrences.len() }

    pub fn is_empty(&self) -> bool { self.occurrences.is_empty() }

    fn record(&mut self, keyword: String) {
        match self.occurrences.entry(keyword) {
            hash_map::Entry::Occupied(mut e) => e.get_mut().frequency += 1,
            hash_map::Entry::Vacant(e) => {
                e.insert(Occurrence::new(self.document.clone(), 1));
            }
        }
    }
}

impl IntoIterator for DocumentKeywords {
    type Item = (String, Occurrence);
    type IntoIter = hash_map::IntoIter<String, Occurrence>;

    fn into_iter(self) -> Self::IntoIter { self.occurrences.into_iter() }
}

/// Counts the keywords of one document from a single pass over its raw tokens.
pub fn scan<I, S>(document: impl Into<String>, tokens: I, normalizer: &Normalizer) -> DocumentKeywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kws = DocumentKeywords::new(document);
    for token in tokens {
        if let Some(keyword) = normalizer.keyword(token.as_ref()) {
            kws.record(keyword);
        }
    }
    kws
}

/// Scans the file at `path`, streaming it line by line, under the id `document`.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which is not a letter, so the
/// token holding them is dropped and the rest of the document is still indexed.
pub fn scan_file(document: impl Into<String>, path: &Path, normalizer: &Normalizer) -> Result<DocumentKeywords> {
    let f = File::open(path).map_err(|e| LseError::from_document_open(path, e))?;
    let mut reader = BufReader::new(f);
    let mut kws = DocumentKeywords::new(document);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LseError::DocumentUnreadable { path: path.to_path_buf(), source })?;
        if n == 0 {
            break;
        }
        for token in String::from_utf8_lossy(&buf).split_whitespace() {
            if let Some(keyword) = normalizer.keyword(token) {
                kws.record(keyword);
            }
        }
    }
    tracing::debug!(document = kws.document(), keywords = kws.len(), "scanned document");
    Ok(kws)
}

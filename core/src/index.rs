use crate::query::merge_ranked;
use crate::scan::DocumentKeywords;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How many times one keyword appears in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Moves the last element of `occs` into place, given that `occs[..n-1]` is
/// already sorted by descending frequency.
///
/// The slot is found by binary search over `occs[..n-1]`. The search stops at the
/// first probe with an equal frequency; the new occurrence is then placed after
/// the run of equal frequencies that follows that probe. Returns the probed
/// midpoints in order, or `None` when the list has at most one element.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }
    let new = occs.pop()?;
    let mut probes = Vec::new();
    // half-open [lo, hi)
    let mut lo = 0;
    let mut hi = occs.len();
    while lo < hi {
        let mid = lo + (hi - lo - 1) / 2;
        probes.push(mid);
        if new.frequency == occs[mid].frequency {
            let run = occs[mid + 1..]
                .iter()
                .position(|o| o.frequency != new.frequency)
                .unwrap_or(occs.len() - mid - 1);
            occs.insert(mid + 1 + run, new);
            return Some(probes);
        }
        if new.frequency > occs[mid].frequency {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    occs.insert(lo, new);
    Some(probes)
}

/// Write phase of the index. Sealing it yields a read-only [`KeywordIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    keywords: HashMap<String, Vec<Occurrence>>,
    documents: Vec<String>,
    seen: HashSet<String>,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Folds one document's keyword counts into the index.
    ///
    /// A document id that was already merged is ignored so that no keyword list
    /// ever holds the same document twice.
    pub fn merge(&mut self, kws: DocumentKeywords) {
        let document = kws.document().to_string();
        if !self.seen.insert(document.clone()) {
            tracing::warn!(%document, "document already indexed, skipping");
            return;
        }
        self.documents.push(document.clone());
        let mut merged = 0usize;
        for (keyword, occ) in kws {
            let list = self.keywords.entry(keyword).or_default();
            list.push(occ);
            insert_last_occurrence(list);
            merged += 1;
        }
        tracing::debug!(%document, keywords = merged, "merged document");
    }

    pub fn documents(&self) -> &[String] { &self.documents }

    pub fn seal(self) -> KeywordIndex {
        KeywordIndex { keywords: self.keywords, documents: self.documents }
    }
}

/// Read-only keyword index: keyword to occurrences sorted by descending frequency.
#[derive(Debug, Default, Serialize)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    documents: Vec<String>,
}

impl KeywordIndex {
    /// Occurrences of `keyword`, empty if it was never indexed.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ { self.keywords.keys().map(String::as_str) }

    /// Documents in the order they were indexed.
    pub fn documents(&self) -> &[String] { &self.documents }

    pub fn document_count(&self) -> usize { self.documents.len() }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    /// Documents containing `kw1` or `kw2`, at most `limit`, best first.
    /// Keywords are matched case-insensitively.
    pub fn top_k(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
        let occ1 = self.occurrences(&kw1.to_lowercase());
        let occ2 = self.occurrences(&kw2.to_lowercase());
        merge_ranked(occ1, occ2, limit)
    }
}

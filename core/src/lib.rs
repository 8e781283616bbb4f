//! Keyword indexing and ranked two-keyword retrieval.
//!
//! Documents are scanned into per-document keyword counts, folded into a
//! [`KeywordIndex`] whose occurrence lists are always sorted by descending
//! frequency, and queried with a bounded "kw1 OR kw2" merge.

pub mod corpus;
pub mod error;
pub mod index;
pub mod normalize;
pub mod query;
pub mod scan;

pub use corpus::{make_index, read_document_list};
pub use error::{LseError, Result};
pub use index::{insert_last_occurrence, IndexBuilder, KeywordIndex, Occurrence};
pub use normalize::{NoiseWords, Normalizer};
pub use query::{merge_ranked, SearchConfig, DEFAULT_LIMIT};
pub use scan::{scan, scan_file, DocumentKeywords};

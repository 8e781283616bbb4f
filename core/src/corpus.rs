use crate::error::{LseError, Result};
use crate::index::{IndexBuilder, KeywordIndex};
use crate::normalize::{NoiseWords, Normalizer};
use crate::scan::scan_file;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads a document list: one filename per line, trimmed, blank lines skipped.
pub fn read_document_list<P: AsRef<Path>>(docs_file: P) -> Result<Vec<String>> {
    let path = docs_file.as_ref();
    let f = File::open(path).map_err(|e| LseError::from_input_open(path, e))?;
    let mut docs = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            docs.push(name.to_string());
        }
    }
    Ok(docs)
}

/// Builds the index for every document named in `docs_file`, skipping noise
/// words from `noise_file`. Any missing file aborts the whole run.
pub fn make_index<P: AsRef<Path>, Q: AsRef<Path>>(docs_file: P, noise_file: Q) -> Result<KeywordIndex> {
    let normalizer = Normalizer::new(NoiseWords::from_file(noise_file)?);
    let docs_file = docs_file.as_ref();
    let base = docs_file.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut builder = IndexBuilder::new();
    for name in read_document_list(docs_file)? {
        let path = resolve(&base, &name);
        let kws = scan_file(name, &path, &normalizer)?;
        builder.merge(kws);
    }

    let index = builder.seal();
    tracing::info!(documents = index.document_count(), keywords = index.len(), "index build complete");
    Ok(index)
}

/// Relative document names are taken relative to the document list's directory.
fn resolve(base: &Path, name: &str) -> PathBuf {
    let p = Path::new(name);
    if p.is_absolute() { p.to_path_buf() } else { base.join(p) }
}

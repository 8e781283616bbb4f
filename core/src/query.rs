use crate::index::Occurrence;

/// Result size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self { Self { limit: DEFAULT_LIMIT } }
}

/// Merges two occurrence lists, each sorted by descending frequency, into at
/// most `limit` distinct document ids.
///
/// At every step the list whose current frequency is higher goes first, and
/// `occ1` wins ties. When the preferred document is already in the result the
/// other list's current document is tried instead; taking that fallback (or
/// finding both already present) advances both cursors.
pub fn merge_ranked(occ1: &[Occurrence], occ2: &[Occurrence], limit: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(limit.min(occ1.len() + occ2.len()));
    if occ1.is_empty() || occ2.is_empty() {
        let only = if occ1.is_empty() { occ2 } else { occ1 };
        out.extend(only.iter().take(limit).map(|o| o.document.clone()));
        return out;
    }

    let (mut i, mut j) = (0, 0);
    while out.len() < limit {
        match (occ1.get(i), occ2.get(j)) {
            (Some(a), Some(b)) => {
                let first_is_left = a.frequency >= b.frequency;
                let (first, second) = if first_is_left { (a, b) } else { (b, a) };
                if !contains(&out, &first.document) {
                    out.push(first.document.clone());
                    if first_is_left { i += 1 } else { j += 1 }
                } else {
                    if !contains(&out, &second.document) {
                        out.push(second.document.clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
            (Some(a), None) => {
                if !contains(&out, &a.document) {
                    out.push(a.document.clone());
                }
                i += 1;
            }
            (None, Some(b)) => {
                if !contains(&out, &b.document) {
                    out.push(b.document.clone());
                }
                j += 1;
            }
            (None, None) => break,
        }
    }
    out
}

fn contains(out: &[String], document: &str) -> bool { out.iter().any(|d| d == document) }

#[cfg(test)]
mod tests {
    use super::*;

    fn occs(pairs: &[(&str, u32)]) -> Vec<Occurrence> {
        pairs.iter().map(|&(d, f)| Occurrence::new(d, f)).collect()
    }

    #[test]
    fn tie_favors_first_keyword() {
        let a = occs(&[("d1", 5), ("d2", 3)]);
        let b = occs(&[("d3", 5), ("d2", 4)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d1", "d3", "d2"]);
    }

    #[test]
    fn second_keyword_leads_when_strictly_greater() {
        let a = occs(&[("d1", 2)]);
        let b = occs(&[("d2", 7), ("d3", 1)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d2", "d1", "d3"]);
    }

    #[test]
    fn falls_back_to_other_list_and_advances_both() {
        // d1 is taken from occ1 first; at the next step occ2's d1 (freq 4) beats
        // occ1's d2 (freq 3) but is a duplicate, so d2 is taken and both advance.
        let a = occs(&[("d1", 5), ("d2", 3), ("d4", 1)]);
        let b = occs(&[("d1", 4), ("d3", 2)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d1", "d2", "d3", "d4"]);
    }

    #[test]
    fn both_present_advances_without_appending() {
        let a = occs(&[("d1", 5), ("d2", 4), ("d4", 1)]);
        let b = occs(&[("d2", 5), ("d1", 3), ("d3", 2)]);
        // d1 (tie, left), then d2 from occ2 (5 > 4), then left d2 (4 >= 3) and
        // right d1 are both present: skip both, then d3 beats d4 (2 > 1).
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d1", "d2", "d3", "d4"]);
    }

    #[test]
    fn drains_the_remaining_list_without_duplicates() {
        let a = occs(&[("d1", 9), ("d2", 8), ("d3", 1)]);
        let b = occs(&[("d3", 2)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d1", "d2", "d3"]);

        let a = occs(&[("d1", 1)]);
        let b = occs(&[("d2", 9), ("d1", 8), ("d4", 3)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["d2", "d1", "d4"]);
    }

    #[test]
    fn caps_at_limit() {
        let a = occs(&[("a", 9), ("b", 7), ("c", 5), ("d", 3)]);
        let b = occs(&[("e", 8), ("f", 6), ("g", 4)]);
        assert_eq!(merge_ranked(&a, &b, 5), vec!["a", "e", "b", "f", "c"]);
        assert!(merge_ranked(&a, &b, 0).is_empty());
    }

    #[test]
    fn single_list_is_copied_up_to_limit() {
        let a = occs(&[("d1", 2), ("d2", 1)]);
        assert_eq!(merge_ranked(&a, &[], 5), vec!["d1", "d2"]);
        assert_eq!(merge_ranked(&[], &a, 1), vec!["d1"]);
    }

    #[test]
    fn no_matches_is_empty() {
        assert!(merge_ranked(&[], &[], DEFAULT_LIMIT).is_empty());
    }
}

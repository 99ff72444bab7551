//! Small string utilities shared by the diagnostic passes.

/// Maximum edit distance for "did you mean" suggestions.
pub const DEFAULT_SUGGESTION_THRESHOLD: usize = 3;

/// Simple edit distance for fuzzy matching (Levenshtein).
///
/// Insert, delete and substitute all cost 1. Meant for short names, not
/// for large strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Find the closest candidate within `max_distance`, ignoring case.
///
/// Candidates whose length differs from `name` by more than `max_distance`
/// are skipped without computing the distance. On ties the candidate seen
/// first wins.
pub fn find_similar<'a, I>(name: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = name.to_lowercase();
    let needle_len = needle.chars().count();

    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let lowered = candidate.to_lowercase();
        if lowered.chars().count().abs_diff(needle_len) > max_distance {
            continue;
        }
        let distance = edit_distance(&needle, &lowered);
        if distance > max_distance {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(c, _)| c)
}

/// Strip a single leading sigil (`#`, `$`, `@`) from a name.
pub fn strip_sigil(name: &str) -> &str {
    name.strip_prefix(['#', '$', '@']).unwrap_or(name)
}

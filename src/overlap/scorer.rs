/// Length of the longest suffix of `a` that equals a prefix of `b`.
///
/// Returns a value in `0..=min(a.len(), b.len())`; `0` when nothing matches,
/// including when either input is empty.
///
/// Runs in linear time: the prefix function of `b` is computed once and the
/// tail of `a` is streamed through it. [`overlap_naive`] gives the same
/// answer by trying every candidate length.
///
/// # Examples
///
/// ```
/// use olc_assembler::overlap::overlap;
///
/// assert_eq!(overlap(b"ABCDEF", b"DEFGHI"), 3);
/// assert_eq!(overlap(b"ABC", b"XYZ"), 0);
/// assert_eq!(overlap(b"", b"X"), 0);
/// ```
#[must_use]
pub fn overlap<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let max_len = a.len().min(b.len());
    if max_len == 0 {
        return 0;
    }

    // No overlap can be longer than max_len, so only that much of b matters
    // and only that much of a's tail can contribute.
    let pattern = &b[..max_len];
    let failure = prefix_function(pattern);

    let mut matched = 0;
    for symbol in &a[a.len() - max_len..] {
        while matched > 0 && (matched == max_len || pattern[matched] != *symbol) {
            matched = failure[matched - 1];
        }
        if pattern[matched] == *symbol {
            matched += 1;
        }
    }
    matched
}

/// Brute-force overlap: try every length from 1 up and keep the last match.
#[must_use]
pub fn overlap_naive<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let max_len = a.len().min(b.len());
    (1..=max_len)
        .filter(|&k| a[a.len() - k..] == b[..k])
        .last()
        .unwrap_or(0)
}

/// `failure[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    for i in 1..pattern.len() {
        let mut k = failure[i - 1];
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_examples() {
        assert_eq!(overlap(b"ABCDEF", b"DEFGHI"), 3);
        assert_eq!(overlap(b"ABC", b"XYZ"), 0);
        assert_eq!(overlap(b"", b"X"), 0);
        assert_eq!(overlap(b"X", b""), 0);
    }

    #[test]
    fn test_overlap_full_length() {
        assert_eq!(overlap(b"ACGT", b"ACGT"), 4);
        assert_eq!(overlap(b"AAAA", b"AAAA"), 4);
    }

    #[test]
    fn test_overlap_prefers_longest() {
        // "A" and "ABA" both qualify; the longer wins
        assert_eq!(overlap(b"XXABA", b"ABAYY"), 3);
        assert_eq!(overlap(b"AAAB", b"ABBB"), 2);
    }

    #[test]
    fn test_overlap_unequal_lengths() {
        assert_eq!(overlap(b"GGGACG", b"ACGTT"), 3);
        assert_eq!(overlap(b"CG", b"CGTTTT"), 2);
        assert_eq!(overlap(b"TTTTCG", b"CG"), 2);
    }

    #[test]
    fn test_overlap_generic_symbols() {
        assert_eq!(overlap(&[1u32, 2, 3, 4], &[3, 4, 5]), 2);
        assert_eq!(overlap(&["x", "y"], &["y", "z"]), 1);
    }

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(b"ABABACA"), vec![0, 0, 1, 2, 3, 0, 1]);
        assert!(prefix_function::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_overlap_matches_naive_on_binary_strings() {
        // Every string over {A, B} up to length 5
        let mut words: Vec<Vec<u8>> = vec![Vec::new()];
        for len in 1..=5u32 {
            for bits in 0..(1u32 << len) {
                let word = (0..len)
                    .map(|i| if bits & (1 << i) == 0 { b'A' } else { b'B' })
                    .collect();
                words.push(word);
            }
        }

        for a in &words {
            for b in &words {
                assert_eq!(
                    overlap(a, b),
                    overlap_naive(a, b),
                    "mismatch for {:?} / {:?}",
                    String::from_utf8_lossy(a),
                    String::from_utf8_lossy(b)
                );
            }
        }
    }
}

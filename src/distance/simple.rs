//! The simplest SIFT4 variant.
//!
//! No transposition tracking and no strategy functions: tokens are compared
//! with `==` and every match weighs 1. It is noticeably faster than the
//! general engine and is what the token-level presets in
//! [`evaluator`](crate::distance::evaluator) use internally.

/// Compute the simple SIFT4 distance between two sequences.
///
/// After a mismatch both cursors fall back to the lower of the two, then up
/// to `max_offset` positions ahead are searched for a token that lines the
/// sequences up again.
pub fn simple<T: PartialEq>(s1: &[T], s2: &[T], max_offset: usize) -> usize {
    let l1 = s1.len();
    let l2 = s2.len();

    if l1 == 0 {
        return l2;
    }
    if l2 == 0 {
        return l1;
    }

    let mut c1 = 0;
    let mut c2 = 0;
    let mut lcss = 0;
    let mut local_cs = 0;

    while c1 < l1 && c2 < l2 {
        if s1[c1] == s2[c2] {
            local_cs += 1;
        } else {
            lcss += local_cs;
            local_cs = 0;
            if c1 != c2 {
                c1 = c1.min(c2);
                c2 = c1;
            }

            for i in 0..max_offset {
                if c1 + i >= l1 && c2 + i >= l2 {
                    break;
                }
                if c1 + i < l1 && s1[c1 + i] == s2[c2] {
                    c1 += i;
                    local_cs += 1;
                    break;
                }
                if c2 + i < l2 && s1[c1] == s2[c2 + i] {
                    c2 += i;
                    local_cs += 1;
                    break;
                }
            }
        }
        c1 += 1;
        c2 += 1;
    }

    lcss += local_cs;
    l1.max(l2).saturating_sub(lcss)
}

/// [`simple`] over the characters of two strings.
pub fn simple_str(s1: &str, s2: &str, max_offset: usize) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    simple(&s1, &s2, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_empty() {
        assert_eq!(simple_str("", "", 5), 0);
        assert_eq!(simple_str("", "abc", 5), 3);
        assert_eq!(simple_str("abcd", "", 5), 4);
    }

    #[test]
    fn test_simple_distance() {
        assert_eq!(simple_str("abc", "abc", 5), 0);
        assert_eq!(simple_str("kitten", "sitting", 5), 3);
        assert_eq!(simple_str("hello", "helo", 5), 1);
        assert_eq!(simple_str("search", "serach", 5), 1);
        assert_eq!(
            simple_str("This is the first string", "And this is another string", 5),
            7
        );
    }

    #[test]
    fn test_simple_without_lookahead() {
        assert_eq!(simple_str("ab", "ba", 0), 2);
        assert_eq!(simple_str("hello", "helo", 0), 2);
    }

    #[test]
    fn test_simple_generic_tokens() {
        let a = [1u32, 2, 3, 4, 5];
        let b = [1u32, 2, 4, 5];
        assert_eq!(simple(&a, &b, 3), 1);

        let words_a = ["the", "quick", "brown", "fox"];
        let words_b = ["the", "quick", "red", "fox"];
        assert_eq!(simple(&words_a, &words_b, 3), 1);
    }

    #[test]
    fn test_simple_recovers_from_insertion() {
        let a = "abcdefgh".repeat(4);
        let b = format!("{}X{}", "abcdefgh".repeat(2), "abcdefgh".repeat(2));
        assert_eq!(simple_str(&a, &b, 5), 1);
        assert_eq!(simple_str(&a, &b, 0), 17);
    }
}

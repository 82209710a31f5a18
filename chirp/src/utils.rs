//! Text helpers.

use std::borrow::Cow;

/// Helpers for truncating text.
pub trait Truncatable {
    /// Shortens the text to at most `max_len` characters, ending it with `suffix` when anything
    /// had to be cut. Text that already fits is returned as is.
    fn truncate_with_suffix(&self, max_len: usize, suffix: &str) -> Cow<'_, str>;
}

impl Truncatable for String {
    fn truncate_with_suffix(&self, max_len: usize, suffix: &str) -> Cow<'_, str> {
        self.as_str().truncate_with_suffix(max_len, suffix)
    }
}

impl Truncatable for str {
    fn truncate_with_suffix(&self, max_len: usize, suffix: &str) -> Cow<'_, str> {
        if self.chars().count() <= max_len {
            return Cow::Borrowed(self);
        }

        let keep = max_len.saturating_sub(suffix.chars().count());
        let byte_idx = self.char_indices().nth(keep).map_or(self.len(), |(idx, _)| idx);
        let mut truncated = String::with_capacity(byte_idx + suffix.len());
        truncated.push_str(&self[..byte_idx]);
        truncated.push_str(suffix);

        Cow::Owned(truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_string_with_suffix() {
        let string: String = "this is a very long string".to_string();

        assert_eq!(string.truncate_with_suffix(10, "…"), "this is a…");
        assert_eq!(
            string.truncate_with_suffix(250, "…"),
            "this is a very long string"
        );
    }

    #[test]
    fn truncate_str_with_suffix() {
        let s: &str = "this is a very long string";

        assert_eq!(s.truncate_with_suffix(10, "..."), "this is...");
        // should not copy when the text fits
        assert!(matches!(s.truncate_with_suffix(26, "…"), Cow::Borrowed(_)));
        // should copy when truncating
        assert!(matches!(s.truncate_with_suffix(25, "…"), Cow::Owned(_)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let s = "æøå æøå æøå";

        assert_eq!(s.truncate_with_suffix(5, "…"), "æøå …");
        assert_eq!(s.truncate_with_suffix(5, "…").chars().count(), 5);
    }
}

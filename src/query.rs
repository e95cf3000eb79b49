//! Query normalization.

/// A query after trimming and lower-casing.
///
/// All matching is literal substring containment against this text, so the
/// normalized form is the only thing the tiers ever look at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedQuery {
  text: String,
}

impl NormalizedQuery {
  /// Trims surrounding whitespace and lower-cases the rest.
  pub fn new(raw: &str) -> Self {
    Self {
      text: raw.trim().to_lowercase(),
    }
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// `true` for empty and whitespace-only input.
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Whitespace-separated words of at least `min_len` characters.
  ///
  /// Short words such as "a" or "to" would match almost every description, so
  /// they are dropped.
  pub fn keywords(&self, min_len: usize) -> Vec<&str> {
    self
      .text
      .split_whitespace()
      .filter(|word| word.chars().count() >= min_len)
      .collect()
  }
}

impl From<&str> for NormalizedQuery {
  fn from(raw: &str) -> Self {
    Self::new(raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize() {
    let query = NormalizedQuery::new("  Wireless EARBUDS \t");
    assert_eq!(query.as_str(), "wireless earbuds");
    assert!(!query.is_empty());
  }

  #[test]
  fn test_whitespace_only_is_empty() {
    assert!(NormalizedQuery::new(" \n\t ").is_empty());
    assert!(NormalizedQuery::new("").is_empty());
  }

  #[test]
  fn test_keywords_drop_short_words() {
    let query = NormalizedQuery::new("a sound to go   with TV");
    assert_eq!(query.keywords(3), vec!["sound", "with"]);
  }

  #[test]
  fn test_keywords_count_chars_not_bytes() {
    // "été" is three characters but five bytes.
    let query = NormalizedQuery::new("été ça");
    assert_eq!(query.keywords(3), vec!["été"]);
  }
}

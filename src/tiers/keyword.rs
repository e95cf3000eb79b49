//! Keyword matches against the name and description.

use super::{scan, Tier, TierContext, TierKind};
use crate::types::{Mode, Product};

/// Selects products whose name or description contains any query word.
///
/// Only words of at least `min_len` characters take part. The name and
/// description are joined with a space before matching, so a word never
/// matches across the boundary between the two.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTier {
  min_len: usize,
}

impl KeywordTier {
  pub fn new(min_len: usize) -> Self {
    Self { min_len }
  }

  /// Returns `true` if any of `words` occurs in the product's searchable text.
  pub fn matches(product: &Product, words: &[&str]) -> bool {
    let text = format!("{} {}", product.name, product.description).to_lowercase();
    words.iter().any(|word| text.contains(word))
  }
}

impl Default for KeywordTier {
  fn default() -> Self {
    Self::new(3)
  }
}

impl Tier for KeywordTier {
  fn kind(&self) -> TierKind {
    TierKind::Keyword
  }

  fn applies_to(&self, mode: Mode) -> bool {
    mode == Mode::Full
  }

  fn select<'a>(&self, context: &TierContext<'a>) -> Vec<&'a Product> {
    let words = context.query.keywords(self.min_len);
    if words.is_empty() {
      return Vec::new();
    }

    scan(context.catalog, |p| {
      !context.is_selected(p.id) && Self::matches(p, &words)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::sample::storefront_catalog;
  use crate::query::NormalizedQuery;

  fn select_ids(raw: &str) -> Vec<u32> {
    let catalog = storefront_catalog();
    let query = NormalizedQuery::new(raw);
    let context = TierContext::new(&catalog, &query, Mode::Full);
    KeywordTier::default().select(&context).iter().map(|p| p.id).collect()
  }

  #[test]
  fn test_matches_description_words() {
    // "sound" appears in the descriptions of 1, 7 and 9.
    assert_eq!(select_ids("sound"), vec![1, 7, 9]);
  }

  #[test]
  fn test_any_word_matches() {
    assert_eq!(select_ids("portable laptop"), vec![3, 7]);
  }

  #[test]
  fn test_short_words_ignored() {
    // "tv" alone is too short to count.
    assert!(select_ids("tv").is_empty());
    assert!(select_ids("a to of").is_empty());
  }

  #[test]
  fn test_only_full_mode() {
    let tier = KeywordTier::default();
    assert!(tier.applies_to(Mode::Full));
    assert!(!tier.applies_to(Mode::Compact));
  }
}

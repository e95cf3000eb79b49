//! Category propagation: products sharing a category with a direct match.

use super::{scan, Tier, TierContext, TierKind};
use crate::types::Product;
use std::collections::HashSet;

/// Selects products whose category equals the category of some direct match.
///
/// Category comparison is exact string equality, unlike the direct predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTier;

impl Tier for CategoryTier {
  fn kind(&self) -> TierKind {
    TierKind::Category
  }

  fn select<'a>(&self, context: &TierContext<'a>) -> Vec<&'a Product> {
    let categories: HashSet<&str> = context
      .direct()
      .iter()
      .map(|p| p.category.as_str())
      .collect();

    if categories.is_empty() {
      return Vec::new();
    }

    scan(context.catalog, |p| {
      !context.is_selected(p.id) && categories.contains(p.category.as_str())
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::sample::storefront_catalog;
  use crate::query::NormalizedQuery;
  use crate::tiers::DirectTier;
  use crate::types::Mode;

  #[test]
  fn test_propagates_from_direct_categories() {
    let catalog = storefront_catalog();
    let query = NormalizedQuery::new("earbuds");
    let mut context = TierContext::new(&catalog, &query, Mode::Full);
    let direct = DirectTier.select(&context);
    context.record_direct(&direct);

    let ids: Vec<_> = CategoryTier.select(&context).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 7, 10]);
  }

  #[test]
  fn test_nothing_without_direct_matches() {
    let catalog = storefront_catalog();
    let query = NormalizedQuery::new("xyz-nonexistent");
    let context = TierContext::new(&catalog, &query, Mode::Full);
    assert!(CategoryTier.select(&context).is_empty());
  }
}

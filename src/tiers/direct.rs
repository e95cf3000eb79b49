//! Direct matches: the query is a substring of the name or the category.

use super::{scan, Tier, TierContext, TierKind};
use crate::query::NormalizedQuery;
use crate::types::Product;

/// Selects products whose lower-cased name or category contains the query.
///
/// Containment is literal: no tokenization and no fuzzy matching. An empty
/// query is contained in every string, so an empty query selects the whole
/// catalog. The resolver only lets that happen in full mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectTier;

impl DirectTier {
  /// The direct-match predicate for a single product.
  pub fn matches(product: &Product, query: &NormalizedQuery) -> bool {
    let needle = query.as_str();
    product.name.to_lowercase().contains(needle)
      || product.category.to_lowercase().contains(needle)
  }
}

impl Tier for DirectTier {
  fn kind(&self) -> TierKind {
    TierKind::Direct
  }

  fn select<'a>(&self, context: &TierContext<'a>) -> Vec<&'a Product> {
    let query = context.query;
    scan(context.catalog, |p| {
      !context.is_selected(p.id) && Self::matches(p, query)
    })
  }
}

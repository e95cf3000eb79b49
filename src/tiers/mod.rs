//! The tiers a query resolution is composed from.
//!
//! Each tier selects products from the catalog given what earlier tiers have
//! already selected. The [`QueryResolver`](crate::resolver::QueryResolver)
//! runs them in a fixed order:
//!
//! - [`DirectTier`]: name or category contains the query.
//! - [`CategoryTier`]: shares a category with a direct match.
//! - [`KeywordTier`]: name or description contains a query word (full mode only).
//!
//! Every tier returns products in catalog order and never returns a product an
//! earlier tier already selected.

pub mod category;
pub mod context;
pub mod direct;
pub mod keyword;

pub use category::CategoryTier;
pub use context::TierContext;
pub use direct::DirectTier;
pub use keyword::KeywordTier;

use crate::catalog::Catalog;
use crate::types::{Mode, Product};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Identifies a tier in logs and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
  Direct,
  Category,
  Keyword,
}

/// A selection step of query resolution.
pub trait Tier: Send + Sync {
  fn kind(&self) -> TierKind;

  /// Whether the tier runs for the given mode.
  fn applies_to(&self, _mode: Mode) -> bool {
    true
  }

  /// Selects products in catalog order.
  ///
  /// Implementations must skip every product for which
  /// [`TierContext::is_selected`] is `true`.
  fn select<'a>(&self, context: &TierContext<'a>) -> Vec<&'a Product>;
}

/// Filters the catalog with `keep`, preserving catalog order.
pub(crate) fn scan<'a, F>(catalog: &'a Catalog, keep: F) -> Vec<&'a Product>
where
  F: Fn(&Product) -> bool + Send + Sync,
{
  #[cfg(feature = "parallel")]
  {
    catalog.products().par_iter().filter(|p| keep(*p)).collect()
  }

  #[cfg(not(feature = "parallel"))]
  {
    catalog.iter().filter(|p| keep(*p)).collect()
  }
}

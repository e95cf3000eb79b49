//! State shared by the tiers of one resolution.

use crate::catalog::Catalog;
use crate::query::NormalizedQuery;
use crate::types::{Mode, Product, ProductId};
use std::collections::HashSet;

/// What a tier can see while it selects products.
///
/// The context carries the catalog and the normalized query, and accumulates
/// what earlier tiers selected so later tiers can skip those products.
pub struct TierContext<'a> {
  pub catalog: &'a Catalog,
  pub query: &'a NormalizedQuery,
  pub mode: Mode,
  direct: Vec<&'a Product>,
  selected: HashSet<ProductId>,
}

impl<'a> TierContext<'a> {
  pub fn new(catalog: &'a Catalog, query: &'a NormalizedQuery, mode: Mode) -> Self {
    Self {
      catalog,
      query,
      mode,
      direct: Vec::new(),
      selected: HashSet::new(),
    }
  }

  /// The uncapped direct matches, in catalog order.
  pub fn direct(&self) -> &[&'a Product] {
    &self.direct
  }

  /// `true` if an earlier tier already selected the product.
  pub fn is_selected(&self, id: ProductId) -> bool {
    self.selected.contains(&id)
  }

  pub(crate) fn record_direct(&mut self, products: &[&'a Product]) {
    self.direct.extend_from_slice(products);
    self.record(products);
  }

  pub(crate) fn record(&mut self, products: &[&'a Product]) {
    self.selected.extend(products.iter().map(|p| p.id));
  }
}

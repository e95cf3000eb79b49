//! Core data types for storefront search.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product, unique within a [`Catalog`](crate::catalog::Catalog).
pub type ProductId = u32;

/// A price held as an integer amount of minor currency units (cents).
///
/// Prices are never stored as strings. Formatting happens only when a value is
/// rendered, through the `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
  /// Creates a price from an amount of cents.
  pub const fn from_cents(cents: u64) -> Self {
    Self(cents)
  }

  /// Creates a price from a whole number of dollars. Amounts beyond
  /// `u64::MAX` cents saturate.
  pub const fn from_dollars(dollars: u64) -> Self {
    Self(dollars.saturating_mul(100))
  }

  /// The amount in cents.
  pub const fn cents(self) -> u64 {
    self.0
  }
}

impl fmt::Display for Price {
  /// Formats as `$199` for whole amounts and `$79.50` otherwise.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let dollars = self.0 / 100;
    let cents = self.0 % 100;
    if cents == 0 {
      write!(f, "${dollars}")
    } else {
      write!(f, "${dollars}.{cents:02}")
    }
  }
}

/// A single catalog entry.
///
/// Products are created once when the catalog is built and are never mutated
/// afterwards. The invariants on `rating` and `category` are checked by
/// [`Catalog::new`](crate::catalog::Catalog::new), not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  /// Unique identifier within the catalog.
  pub id: ProductId,
  /// Display name. Participates in direct and keyword matching.
  pub name: String,
  pub price: Price,
  /// Opaque reference to a display asset (URL or path).
  pub image: String,
  /// Score between 0.0 and 5.0 inclusive.
  pub rating: f32,
  /// Non-empty category label. Participates in direct matching and in
  /// category propagation.
  pub category: String,
  /// Free text used only for keyword matching.
  #[serde(default)]
  pub description: String,
}

impl Product {
  /// Creates a product with an empty image reference, zero rating and empty
  /// description. Use the `with_*` methods to fill in the rest.
  pub fn new(
    id: ProductId,
    name: impl Into<String>,
    category: impl Into<String>,
    price: Price,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      price,
      image: String::new(),
      rating: 0.0,
      category: category.into(),
      description: String::new(),
    }
  }

  pub fn with_image(mut self, image: impl Into<String>) -> Self {
    self.image = image.into();
    self
  }

  pub fn with_rating(mut self, rating: f32) -> Self {
    self.rating = rating;
    self
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }
}

/// Which surface a query is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  /// The inline live-suggestion panel. Direct and related results share one
  /// combined cap and no keyword tier is computed. An empty query is a
  /// precondition violation in this mode.
  Compact,
  /// The dedicated results page. Related results have their own cap, the
  /// keyword tier is included, and an empty query shows the whole catalog.
  Full,
}

/// The outcome of resolving one query.
///
/// `direct` and `related` never share an id and neither contains duplicates.
/// Both are in catalog order within their own tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
  /// Products whose name or category contains the query.
  pub direct: Vec<Product>,
  /// Products pulled in through a shared category or a shared keyword.
  pub related: Vec<Product>,
}

impl ResultSet {
  /// Returns `true` when neither tier has any product.
  pub fn is_empty(&self) -> bool {
    self.direct.is_empty() && self.related.is_empty()
  }

  /// Total number of products across both tiers.
  pub fn len(&self) -> usize {
    self.direct.len() + self.related.len()
  }

  /// Iterates direct results first, then related results.
  pub fn iter(&self) -> impl Iterator<Item = &Product> {
    self.direct.iter().chain(self.related.iter())
  }
}

//! The static product catalog.

pub mod sample;

use crate::error::CatalogError;
use crate::types::{Product, ProductId};
use std::collections::HashSet;

/// An immutable, ordered list of products.
///
/// Insertion order is preserved and is the only tie-break used when ordering
/// results. A `Catalog` can only be obtained through [`Catalog::new`] or
/// [`Catalog::from_json`], so every instance satisfies the data-model
/// invariants: unique ids, ratings within `0.0..=5.0`, and non-empty
/// categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// Builds a catalog, validating every product.
  pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
    if let Err(err) = validate(&products) {
      tracing::warn!(error = %err, "rejecting catalog");
      return Err(err);
    }
    Ok(Self { products })
  }

  /// Parses a JSON array of products and validates it.
  pub fn from_json(json: &str) -> Result<Self, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Self::new(products)
  }

  /// All products in catalog order.
  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Product> {
    self.products.iter()
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// Looks up a product by id.
  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Distinct categories in order of first appearance.
  pub fn categories(&self) -> Vec<&str> {
    let mut seen = HashSet::new();
    self
      .products
      .iter()
      .map(|p| p.category.as_str())
      .filter(|c| seen.insert(*c))
      .collect()
  }

  /// Products shown next to a product's detail view: every other product in
  /// exactly the same category, in catalog order.
  pub fn related_to(&self, product: &Product) -> Vec<&Product> {
    self
      .products
      .iter()
      .filter(|p| p.category == product.category && p.id != product.id)
      .collect()
  }
}

impl<'a> IntoIterator for &'a Catalog {
  type Item = &'a Product;
  type IntoIter = std::slice::Iter<'a, Product>;

  fn into_iter(self) -> Self::IntoIter {
    self.products.iter()
  }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
  let mut ids = HashSet::with_capacity(products.len());
  for product in products {
    if !ids.insert(product.id) {
      return Err(CatalogError::DuplicateId(product.id));
    }
    // NaN fails the range check as well.
    if !(0.0..=5.0).contains(&product.rating) {
      return Err(CatalogError::RatingOutOfRange {
        id: product.id,
        rating: product.rating,
      });
    }
    if product.category.is_empty() {
      return Err(CatalogError::EmptyCategory(product.id));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Price;

  fn product(id: ProductId, name: &str, category: &str) -> Product {
    Product::new(id, name, category, Price::from_dollars(10)).with_rating(4.0)
  }

  #[test]
  fn test_rejects_duplicate_ids() {
    let err = Catalog::new(vec![product(1, "A", "X"), product(1, "B", "Y")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(1)));
  }

  #[test]
  fn test_rejects_rating_out_of_range() {
    let bad = product(3, "A", "X").with_rating(5.5);
    let err = Catalog::new(vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::RatingOutOfRange { id: 3, .. }));

    let nan = product(4, "A", "X").with_rating(f32::NAN);
    assert!(Catalog::new(vec![nan]).is_err());
  }

  #[test]
  fn test_rejects_empty_category() {
    let err = Catalog::new(vec![product(2, "A", "")]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyCategory(2)));
  }

  #[test]
  fn test_preserves_order_and_lookup() {
    let catalog = Catalog::new(vec![product(9, "A", "X"), product(2, "B", "Y")]).unwrap();
    let ids: Vec<_> = catalog.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![9, 2]);
    assert_eq!(catalog.get(2).map(|p| p.name.as_str()), Some("B"));
    assert!(catalog.get(5).is_none());
  }

  #[test]
  fn test_categories_first_appearance() {
    let catalog = Catalog::new(vec![
      product(1, "A", "Y"),
      product(2, "B", "X"),
      product(3, "C", "Y"),
    ])
    .unwrap();
    assert_eq!(catalog.categories(), vec!["Y", "X"]);
  }

  #[test]
  fn test_related_to_excludes_self() {
    let catalog = Catalog::new(vec![
      product(1, "A", "X"),
      product(2, "B", "Y"),
      product(3, "C", "X"),
    ])
    .unwrap();
    let target = catalog.get(3).unwrap().clone();
    let related: Vec<_> = catalog.related_to(&target).iter().map(|p| p.id).collect();
    assert_eq!(related, vec![1]);
  }

  #[test]
  fn test_from_json() {
    let json = r#"[
      {"id": 1, "name": "Lamp", "price": 2500, "image": "/lamp.png",
       "rating": 4.1, "category": "Home"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    let lamp = catalog.get(1).unwrap();
    assert_eq!(lamp.price.cents(), 2500);
    assert!(lamp.description.is_empty());
  }
}

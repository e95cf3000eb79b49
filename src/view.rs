//! View models handed to the UI shell.
//!
//! This is the render boundary: prices become labels here and nowhere else.

use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::types::{Product, ProductId, ResultSet};
use serde::Serialize;

/// Image shown when a product has no asset reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product as the shell renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
  pub id: ProductId,
  pub name: String,
  pub category: String,
  pub description: String,
  pub price_label: String,
  pub image: String,
  pub rating: f32,
}

impl From<&Product> for ProductCard {
  fn from(product: &Product) -> Self {
    let image = if product.image.is_empty() {
      PLACEHOLDER_IMAGE.to_string()
    } else {
      product.image.clone()
    };
    Self {
      id: product.id,
      name: product.name.clone(),
      category: product.category.clone(),
      description: product.description.clone(),
      price_label: product.price.to_string(),
      image,
      rating: product.rating,
    }
  }
}

fn cards<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard> {
  products.into_iter().map(ProductCard::from).collect()
}

/// The inline panel under the search box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionPanel {
  pub direct: Vec<ProductCard>,
  /// Shown under a "Related Items" divider.
  pub related: Vec<ProductCard>,
  /// Set when there is nothing to show.
  pub empty_message: Option<String>,
  /// Set when the compact result filled every slot, hinting that the full
  /// results page has more.
  pub show_see_all: bool,
}

impl SuggestionPanel {
  /// Builds the panel from a compact-mode result.
  pub fn new(query: &str, results: &ResultSet, config: &ResolverConfig) -> Self {
    let empty_message = results
      .is_empty()
      .then(|| format!("No products found for \"{query}\""));
    Self {
      direct: cards(results.direct.iter().take(config.suggestion_direct_rows)),
      related: cards(results.related.iter().take(config.suggestion_related_rows)),
      empty_message,
      show_see_all: results.len() >= config.compact_total_cap,
    }
  }
}

/// The dedicated results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPage {
  pub heading: String,
  /// Count line, e.g. `3 direct matches • 2 related items`.
  pub summary: String,
  pub direct: Vec<ProductCard>,
  pub related: Vec<ProductCard>,
}

impl ResultsPage {
  /// Builds the page from a full-mode result.
  pub fn new(query: &str, results: &ResultSet) -> Self {
    let query = query.trim();
    let heading = if query.is_empty() {
      "Featured Products".to_string()
    } else {
      format!("Search Results for \"{query}\"")
    };

    let mut summary = format!("{} direct matches", results.direct.len());
    if !query.is_empty() && !results.related.is_empty() {
      summary.push_str(&format!(" • {} related items", results.related.len()));
    }

    Self {
      heading,
      summary,
      direct: cards(&results.direct),
      related: cards(&results.related),
    }
  }
}

/// A single product with the other products in its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
  pub product: ProductCard,
  pub related: Vec<ProductCard>,
}

impl ProductDetail {
  pub fn new(catalog: &Catalog, product: &Product) -> Self {
    Self {
      product: ProductCard::from(product),
      related: cards(catalog.related_to(product)),
    }
  }
}

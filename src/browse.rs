//! Category browsing and the department menu.

use crate::catalog::Catalog;
use crate::types::Product;
use serde::{Deserialize, Serialize};

/// Returns the products whose category equals `category` exactly.
///
/// `subcategory` is accepted so callers can pass along what the menu selection
/// carried, but it does not narrow the result. An unknown category yields an
/// empty list.
pub fn products_by_category<'a>(
  catalog: &'a Catalog,
  category: &str,
  subcategory: Option<&str>,
) -> Vec<&'a Product> {
  let products: Vec<_> = catalog.iter().filter(|p| p.category == category).collect();
  tracing::debug!(category, ?subcategory, matches = products.len(), "browsed category");
  products
}

/// One top-level entry of the department menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
  pub name: String,
  pub subcategories: Vec<String>,
}

impl MenuCategory {
  pub fn new(name: impl Into<String>, subcategories: &[&str]) -> Self {
    Self {
      name: name.into(),
      subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
    }
  }

  pub fn has_subcategory(&self, subcategory: &str) -> bool {
    self.subcategories.iter().any(|s| s == subcategory)
  }
}

/// The ordered list of departments shown in the category sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMenu {
  pub categories: Vec<MenuCategory>,
}

impl CategoryMenu {
  /// The storefront's department menu.
  pub fn standard() -> Self {
    Self {
      categories: vec![
        MenuCategory::new(
          "Electronics",
          &["Smartphones", "Laptops", "Headphones", "Cameras", "Gaming", "Smart Home"],
        ),
        MenuCategory::new(
          "Fashion",
          &["Men's Clothing", "Women's Clothing", "Shoes", "Accessories", "Jewelry", "Bags"],
        ),
        MenuCategory::new(
          "Home & Garden",
          &["Furniture", "Kitchen", "Bathroom", "Garden", "Decor", "Storage"],
        ),
        MenuCategory::new(
          "Sports & Outdoors",
          &["Fitness", "Outdoor Gear", "Sports Equipment", "Athletic Wear", "Camping", "Water Sports"],
        ),
        MenuCategory::new(
          "Books & Media",
          &["Books", "Movies", "Music", "Games", "Magazines", "E-books"],
        ),
        MenuCategory::new(
          "Health & Beauty",
          &["Skincare", "Makeup", "Hair Care", "Supplements", "Personal Care", "Wellness"],
        ),
      ],
    }
  }

  pub fn get(&self, name: &str) -> Option<&MenuCategory> {
    self.categories.iter().find(|c| c.name == name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.categories.iter().map(|c| c.name.as_str())
  }
}

impl Default for CategoryMenu {
  fn default() -> Self {
    Self::standard()
  }
}

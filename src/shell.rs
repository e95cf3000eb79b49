//! The storefront controller that owns navigation state.
//!
//! The shell feeds user actions in as [`StorefrontEvent`]s and asks the
//! controller for whatever the current view needs. Category selection travels
//! as a typed [`CategorySelection`] payload inside an event, never as a global
//! broadcast.

use crate::browse::{products_by_category, CategoryMenu};
use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::resolver::QueryResolver;
use crate::types::{Mode, Product, ProductId};
use crate::view::{ProductDetail, ResultsPage, SuggestionPanel};
use serde::{Deserialize, Serialize};

/// A department picked from the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
  pub category: String,
  /// Carried for display only; browsing ignores it.
  pub subcategory: Option<String>,
}

impl CategorySelection {
  pub fn new(category: impl Into<String>) -> Self {
    Self {
      category: category.into(),
      subcategory: None,
    }
  }

  pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
    self.subcategory = Some(subcategory.into());
    self
  }
}

/// The page the storefront is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
  Home,
  Results,
  Category(CategorySelection),
  ProductDetail { id: ProductId },
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum StorefrontEvent {
  /// The search box text changed.
  QueryEdited(String),
  /// Enter was pressed, or a live suggestion was clicked.
  QuerySubmitted,
  /// Opens the results page whatever the query holds. A blank query shows
  /// the featured catalog.
  ShopNow,
  /// The logo returns to a clean home page.
  LogoClicked,
  MenuOpened,
  MenuClosed,
  CategorySelected(CategorySelection),
  /// A product card on the results page or a detail page was clicked.
  ProductSelected(ProductId),
  Back,
  /// A click landed outside the search box and its panel.
  ClickedOutside,
}

/// Navigation state plus the catalog and resolver it renders from.
pub struct Storefront {
  catalog: Catalog,
  resolver: QueryResolver,
  menu: CategoryMenu,
  query: String,
  view: View,
  /// Where `Back` leads from a product detail page.
  detail_origin: View,
  live_panel: bool,
  menu_open: bool,
}

impl Storefront {
  pub fn new(catalog: Catalog, resolver: QueryResolver) -> Self {
    Self {
      catalog,
      resolver,
      menu: CategoryMenu::standard(),
      query: String::new(),
      view: View::Home,
      detail_origin: View::Home,
      live_panel: false,
      menu_open: false,
    }
  }

  pub fn with_menu(mut self, menu: CategoryMenu) -> Self {
    self.menu = menu;
    self
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn view(&self) -> &View {
    &self.view
  }

  pub fn menu(&self) -> &CategoryMenu {
    &self.menu
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// `true` while the live-suggestion panel should be drawn. Only ever set
  /// while the query has non-whitespace content.
  pub fn live_panel_visible(&self) -> bool {
    self.live_panel
  }

  pub fn menu_open(&self) -> bool {
    self.menu_open
  }

  /// Applies one user action.
  pub fn handle(&mut self, event: StorefrontEvent) {
    match event {
      StorefrontEvent::QueryEdited(text) => {
        self.live_panel = !text.trim().is_empty();
        self.query = text;
        if !matches!(self.view, View::Category(_)) {
          self.navigate(View::Home);
        }
      }
      StorefrontEvent::QuerySubmitted => {
        if !self.query.trim().is_empty() {
          self.live_panel = false;
          self.navigate(View::Results);
        }
      }
      StorefrontEvent::ShopNow => {
        self.live_panel = false;
        self.navigate(View::Results);
      }
      StorefrontEvent::LogoClicked => {
        self.query.clear();
        self.live_panel = false;
        self.navigate(View::Home);
      }
      StorefrontEvent::MenuOpened => self.menu_open = true,
      StorefrontEvent::MenuClosed => self.menu_open = false,
      StorefrontEvent::CategorySelected(selection) => {
        self.menu_open = false;
        self.live_panel = false;
        self.navigate(View::Category(selection));
      }
      StorefrontEvent::ProductSelected(id) => {
        if self.catalog.get(id).is_none() {
          tracing::warn!(id, "ignoring selection of unknown product");
          return;
        }
        // Moving between detail pages keeps the page the first one came from.
        if !matches!(self.view, View::ProductDetail { .. }) {
          self.detail_origin = self.view.clone();
        }
        self.live_panel = false;
        self.navigate(View::ProductDetail { id });
      }
      StorefrontEvent::Back => {
        let target = match self.view {
          View::ProductDetail { .. } => std::mem::replace(&mut self.detail_origin, View::Home),
          _ => View::Home,
        };
        self.navigate(target);
      }
      StorefrontEvent::ClickedOutside => self.live_panel = false,
    }
  }

  fn navigate(&mut self, view: View) {
    if self.view != view {
      tracing::debug!(from = ?self.view, to = ?view, "changing view");
      self.view = view;
    }
  }

  /// The live-suggestion panel, if it is visible.
  pub fn suggestions(&self) -> Result<Option<SuggestionPanel>, ResolveError> {
    if !self.live_panel {
      return Ok(None);
    }
    let results = self.resolver.resolve(&self.catalog, &self.query, Mode::Compact)?;
    Ok(Some(SuggestionPanel::new(
      &self.query,
      &results,
      self.resolver.config(),
    )))
  }

  /// The full results page, if that is the current view.
  pub fn results_page(&self) -> Result<Option<ResultsPage>, ResolveError> {
    if self.view != View::Results {
      return Ok(None);
    }
    let results = self.resolver.resolve(&self.catalog, &self.query, Mode::Full)?;
    Ok(Some(ResultsPage::new(&self.query, &results)))
  }

  /// Products of the selected department, if that is the current view.
  pub fn category_products(&self) -> Option<Vec<&Product>> {
    match &self.view {
      View::Category(selection) => Some(products_by_category(
        &self.catalog,
        &selection.category,
        selection.subcategory.as_deref(),
      )),
      _ => None,
    }
  }

  /// The selected product and its category siblings, if that is the current view.
  pub fn product_detail(&self) -> Option<ProductDetail> {
    match self.view {
      View::ProductDetail { id } => self
        .catalog
        .get(id)
        .map(|product| ProductDetail::new(&self.catalog, product)),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::sample::storefront_catalog;

  fn storefront() -> Storefront {
    Storefront::new(storefront_catalog(), QueryResolver::default())
  }

  #[test]
  fn test_typing_shows_live_panel() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::QueryEdited("   ".into()));
    assert!(!shop.live_panel_visible());
    assert!(shop.suggestions().unwrap().is_none());

    shop.handle(StorefrontEvent::QueryEdited("ear".into()));
    assert!(shop.live_panel_visible());
    let panel = shop.suggestions().unwrap().unwrap();
    // "Wearables" and "Wireless Earbuds" both contain "ear".
    let names: Vec<_> = panel.direct.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Smart Fitness Watch", "Wireless Earbuds"]);
  }

  #[test]
  fn test_submit_requires_text() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::QuerySubmitted);
    assert_eq!(shop.view(), &View::Home);

    shop.handle(StorefrontEvent::QueryEdited("camera".into()));
    shop.handle(StorefrontEvent::QuerySubmitted);
    assert_eq!(shop.view(), &View::Results);
    assert!(!shop.live_panel_visible());
    let page = shop.results_page().unwrap().unwrap();
    assert_eq!(page.direct.len(), 1);
  }

  #[test]
  fn test_click_outside_hides_live_panel() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::QueryEdited("smart".into()));
    shop.handle(StorefrontEvent::ClickedOutside);
    assert!(!shop.live_panel_visible());
    assert_eq!(shop.query(), "smart");
  }

  #[test]
  fn test_results_view_never_shows_live_panel() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::QueryEdited("smart".into()));
    shop.handle(StorefrontEvent::QuerySubmitted);
    assert!(!shop.live_panel_visible());

    // Editing the query leaves the results page before the panel reopens.
    shop.handle(StorefrontEvent::QueryEdited("smart tv".into()));
    assert_eq!(shop.view(), &View::Home);
    assert!(shop.live_panel_visible());
  }

  #[test]
  fn test_detail_to_detail_keeps_origin() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::QueryEdited("speaker".into()));
    shop.handle(StorefrontEvent::QuerySubmitted);
    shop.handle(StorefrontEvent::ProductSelected(7));
    shop.handle(StorefrontEvent::ProductSelected(9));
    shop.handle(StorefrontEvent::Back);
    assert_eq!(shop.view(), &View::Results);
  }

  #[test]
  fn test_unknown_product_ignored() {
    let mut shop = storefront();
    shop.handle(StorefrontEvent::ProductSelected(404));
    assert_eq!(shop.view(), &View::Home);
    assert!(shop.product_detail().is_none());
  }
}

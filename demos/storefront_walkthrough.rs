//! Walks through a typical storefront session and prints what each surface shows.
//!
//! Run with `RUST_LOG=storefront_search=debug` to see resolver tracing.

use storefront_search::catalog::sample::storefront_catalog;
use storefront_search::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_cards(label: &str, cards: &[ProductCard]) {
  if cards.is_empty() {
    return;
  }
  println!("  {label}:");
  for card in cards {
    println!(
      "    #{:<2} {:<30} {:>7}  {} ({:.1})",
      card.id, card.name, card.price_label, card.category, card.rating
    );
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let config = ResolverConfig::from_json(r#"{ "full_related_cap": 6 }"#)?;
  let resolver = QueryResolver::builder().config(config).build();
  let mut shop = Storefront::new(storefront_catalog(), resolver);

  shop.handle(StorefrontEvent::ShopNow);
  if let Some(page) = shop.results_page()? {
    println!("{}\n  {}\n", page.heading, page.summary);
  }

  for partial in ["w", "wi", "wireless"] {
    shop.handle(StorefrontEvent::QueryEdited(partial.to_string()));
    if let Some(panel) = shop.suggestions()? {
      println!("Suggestions for {partial:?}");
      if let Some(message) = &panel.empty_message {
        println!("  {message}");
      }
      print_cards("Direct", &panel.direct);
      print_cards("Related Items", &panel.related);
      if panel.show_see_all {
        println!("  Press Enter to see all results");
      }
    }
  }

  shop.handle(StorefrontEvent::QuerySubmitted);
  if let Some(page) = shop.results_page()? {
    println!("\n{}\n  {}", page.heading, page.summary);
    print_cards("Direct Matches", &page.direct);
    print_cards("Related Products You Might Like", &page.related);
  }

  shop.handle(StorefrontEvent::ProductSelected(9));
  if let Some(detail) = shop.product_detail() {
    println!("\n{} - {}", detail.product.name, detail.product.price_label);
    print_cards("Related Products", &detail.related);
  }

  shop.handle(StorefrontEvent::CategorySelected(
    CategorySelection::new("Gaming").with_subcategory("Accessories"),
  ));
  if let Some(products) = shop.category_products() {
    println!("\nGaming");
    for product in products {
      println!("    {} {}", product.name, product.price);
    }
  }

  Ok(())
}

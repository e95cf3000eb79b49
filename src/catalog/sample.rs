//! Built-in catalogs used by the storefront surfaces and by tests.

use super::Catalog;
use crate::types::{Price, Product};

fn item(
  id: u32,
  name: &str,
  dollars: u64,
  image: &str,
  rating: f32,
  category: &str,
  description: &str,
) -> Product {
  Product::new(id, name, category, Price::from_dollars(dollars))
    .with_image(image)
    .with_rating(rating)
    .with_description(description)
}

/// The products searched by the live-suggestion panel and the results page.
pub fn storefront_products() -> Vec<Product> {
  vec![
    item(1, "Premium Wireless Headphones", 199, "/premium-wireless-headphones.png", 4.8, "Electronics", "High-quality sound with noise cancellation"),
    item(2, "Smart Fitness Watch", 299, "/smart-fitness-watch.png", 4.6, "Wearables", "Track your health and fitness goals"),
    item(3, "Ultra-thin Laptop", 1299, "/placeholder-6e48b.png", 4.9, "Computers", "Powerful performance in a sleek design"),
    item(4, "Professional Camera", 899, "/professional-camera.png", 4.7, "Photography", "Capture stunning photos and videos"),
    item(5, "Running Sneakers", 149, "/running-sneakers.png", 4.5, "Footwear", "Comfortable and durable for daily runs"),
    item(6, "Designer Sunglasses", 199, "/designer-sunglasses.png", 4.4, "Accessories", "Stylish protection for your eyes"),
    item(7, "Bluetooth Speaker", 79, "/placeholder-1dhp3.png", 4.3, "Electronics", "Portable sound for any occasion"),
    item(8, "Gaming Mouse", 59, "/placeholder-yzyat.png", 4.6, "Gaming", "Precision gaming at your fingertips"),
    item(9, "Wireless Earbuds", 129, "/wireless-earbuds.png", 4.5, "Electronics", "Compact and crystal clear sound"),
    item(10, "Smart TV", 599, "/smart-tv-living-room.png", 4.7, "Electronics", "4K Ultra HD with smart features"),
    item(11, "Mechanical Keyboard", 149, "/mechanical-keyboard.png", 4.8, "Gaming", "Tactile switches for gaming precision"),
  ]
}

/// The products listed on the department pages, one block per menu category.
pub fn department_products() -> Vec<Product> {
  vec![
    item(1, "iPhone 15 Pro", 999, "/modern-laptop.png", 4.8, "Electronics", ""),
    item(2, "MacBook Air M2", 1199, "/modern-laptop.png", 4.9, "Electronics", ""),
    item(3, "AirPods Pro", 249, "/wireless-earbuds.png", 4.7, "Electronics", ""),
    item(4, "Samsung 4K TV", 799, "/smart-tv-living-room.png", 4.6, "Electronics", ""),
    item(5, "Designer Jacket", 299, "/placeholder-1dhp3.png", 4.5, "Fashion", ""),
    item(6, "Running Shoes", 129, "/placeholder-yzyat.png", 4.4, "Fashion", ""),
    item(7, "Leather Handbag", 199, "/placeholder-1dhp3.png", 4.6, "Fashion", ""),
    item(8, "Coffee Maker", 89, "/placeholder-yzyat.png", 4.3, "Home & Garden", ""),
    item(9, "Garden Tools Set", 149, "/placeholder-1dhp3.png", 4.5, "Home & Garden", ""),
    item(10, "Yoga Mat", 39, "/placeholder-yzyat.png", 4.4, "Sports & Outdoors", ""),
    item(11, "Camping Tent", 199, "/placeholder-1dhp3.png", 4.7, "Sports & Outdoors", ""),
    item(12, "Best Seller Novel", 19, "/placeholder-yzyat.png", 4.8, "Books & Media", ""),
    item(13, "Programming Guide", 49, "/placeholder-1dhp3.png", 4.6, "Books & Media", ""),
    item(14, "Skincare Set", 79, "/placeholder-yzyat.png", 4.5, "Health & Beauty", ""),
    item(15, "Hair Dryer", 129, "/placeholder-1dhp3.png", 4.4, "Health & Beauty", ""),
  ]
}

/// [`storefront_products`] as a catalog.
pub fn storefront_catalog() -> Catalog {
  Catalog {
    products: storefront_products(),
  }
}

/// [`department_products`] as a catalog.
pub fn department_catalog() -> Catalog {
  Catalog {
    products: department_products(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_samples_are_valid() {
    assert_eq!(Catalog::new(storefront_products()).unwrap().len(), 11);
    assert_eq!(Catalog::new(department_products()).unwrap().len(), 15);
  }

  #[test]
  fn test_department_categories_match_menu_order() {
    let catalog = department_catalog();
    assert_eq!(
      catalog.categories(),
      vec![
        "Electronics",
        "Fashion",
        "Home & Garden",
        "Sports & Outdoors",
        "Books & Media",
        "Health & Beauty",
      ]
    );
  }
}

//! Storefront search - query resolution and result composition for a shop's
//! search box and results page.
//!
//! A [`QueryResolver`](resolver::QueryResolver) takes a raw query and a
//! [`Mode`](types::Mode) and returns a [`ResultSet`](types::ResultSet) split
//! into direct matches and related products. The same resolver serves the
//! inline suggestion panel (`Mode::Compact`) and the full results page
//! (`Mode::Full`).

pub mod types;
pub mod error;
pub mod config;
pub mod query;
pub mod catalog;
pub mod tiers;
pub mod resolver;
pub mod browse;
pub mod view;
pub mod shell;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::types::*;
  pub use crate::error::*;
  pub use crate::config::*;
  pub use crate::query::*;
  pub use crate::catalog::Catalog;
  pub use crate::resolver::*;
  pub use crate::browse::*;
  pub use crate::view::*;
  pub use crate::shell::*;
}

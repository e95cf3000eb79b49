//! Error types.

use crate::types::ProductId;
use thiserror::Error;

/// Raised when a query is resolved in violation of a mode precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// The live-suggestion surface must never be asked to resolve a blank query.
  #[error("compact mode requires a non-empty query")]
  EmptyCompactQuery,
}

/// Raised when a catalog violates a data-model invariant.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("duplicate product id {0}")]
  DuplicateId(ProductId),

  #[error("product {id} has rating {rating}, expected 0.0..=5.0")]
  RatingOutOfRange { id: ProductId, rating: f32 },

  #[error("product {0} has an empty category")]
  EmptyCategory(ProductId),

  #[error("invalid catalog json: {0}")]
  Parse(#[from] serde_json::Error),
}

/// Raised when resolver configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid config json: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("`{0}` must be greater than zero")]
  ZeroCap(&'static str),
}

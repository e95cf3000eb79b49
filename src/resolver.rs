//! The query resolver that composes tiers into a result set.

use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::query::NormalizedQuery;
use crate::tiers::{CategoryTier, DirectTier, KeywordTier, Tier, TierContext};
use crate::types::{Mode, Product, ResultSet};

/// Resolves queries against a catalog for both search surfaces.
///
/// The live-suggestion panel and the results page both go through this one
/// resolver and differ only in the [`Mode`] they pass. Caps and the keyword
/// length threshold come from [`ResolverConfig`].
///
/// Create one with [`QueryResolver::new`] or [`QueryResolver::builder`].
///
/// # Examples
///
/// ```rust
/// use storefront_search::prelude::*;
/// use storefront_search::catalog::sample::storefront_catalog;
///
/// let catalog = storefront_catalog();
/// let resolver = QueryResolver::builder()
///     .config(ResolverConfig::default().full_related_cap(2))
///     .build();
///
/// let results = resolver.resolve(&catalog, "earbuds", Mode::Full).unwrap();
/// assert_eq!(results.direct[0].name, "Wireless Earbuds");
/// assert_eq!(results.related.len(), 2);
/// ```
pub struct QueryResolver {
  config: ResolverConfig,
  direct: DirectTier,
  /// Related tiers in the order their output is concatenated.
  related: Vec<Box<dyn Tier>>,
}

impl QueryResolver {
  pub fn new(config: ResolverConfig) -> Self {
    let related: Vec<Box<dyn Tier>> = vec![
      Box::new(CategoryTier),
      Box::new(KeywordTier::new(config.min_keyword_len)),
    ];
    Self {
      config,
      direct: DirectTier,
      related,
    }
  }

  pub fn builder() -> QueryResolverBuilder {
    QueryResolverBuilder::default()
  }

  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  /// Resolves `query` against `catalog` for the surface named by `mode`.
  ///
  /// ## Resolution steps
  ///
  /// 1.  **Normalization**: the query is trimmed and lower-cased.
  /// 2.  **Precondition**: a blank query in [`Mode::Compact`] is rejected with
  ///     [`ResolveError::EmptyCompactQuery`].
  /// 3.  **Direct tier**: every product whose name or category contains the
  ///     query. A blank query in [`Mode::Full`] selects the whole catalog.
  /// 4.  **Category tier**: products sharing a category with any direct match.
  /// 5.  **Keyword tier** (full mode only): products whose name or description
  ///     contains a query word of at least `min_keyword_len` characters.
  /// 6.  **Capping**: in compact mode direct and related share
  ///     `compact_total_cap` slots, direct first. In full mode only related is
  ///     capped, at `full_related_cap`.
  ///
  /// Within each tier products stay in catalog order. A query that matches
  /// nothing yields an empty [`ResultSet`], not an error.
  pub fn resolve(
    &self,
    catalog: &Catalog,
    query: &str,
    mode: Mode,
  ) -> Result<ResultSet, ResolveError> {
    let query = NormalizedQuery::new(query);
    if mode == Mode::Compact && query.is_empty() {
      return Err(ResolveError::EmptyCompactQuery);
    }

    let mut context = TierContext::new(catalog, &query, mode);

    let mut direct = self.direct.select(&context);
    tracing::trace!(tier = ?self.direct.kind(), matches = direct.len(), "tier selected");
    context.record_direct(&direct);

    let mut related = Vec::new();
    for tier in self.related.iter().filter(|t| t.applies_to(mode)) {
      let picked = tier.select(&context);
      tracing::trace!(tier = ?tier.kind(), matches = picked.len(), "tier selected");
      context.record(&picked);
      related.extend(picked);
    }

    match mode {
      Mode::Compact => {
        let cap = self.config.compact_total_cap;
        direct.truncate(cap);
        related.truncate(cap - direct.len());
      }
      Mode::Full => related.truncate(self.config.full_related_cap),
    }

    tracing::debug!(
      ?mode,
      query = query.as_str(),
      direct = direct.len(),
      related = related.len(),
      "resolved query"
    );

    Ok(ResultSet {
      direct: owned(direct),
      related: owned(related),
    })
  }
}

impl Default for QueryResolver {
  fn default() -> Self {
    Self::new(ResolverConfig::default())
  }
}

fn owned(products: Vec<&Product>) -> Vec<Product> {
  products.into_iter().cloned().collect()
}

/// Resolves with the default configuration.
///
/// Shorthand for `QueryResolver::default().resolve(catalog, query, mode)`.
pub fn resolve(catalog: &Catalog, query: &str, mode: Mode) -> Result<ResultSet, ResolveError> {
  QueryResolver::default().resolve(catalog, query, mode)
}

/// A builder for [`QueryResolver`].
#[derive(Debug, Default)]
pub struct QueryResolverBuilder {
  config: Option<ResolverConfig>,
}

impl QueryResolverBuilder {
  /// Sets the configuration. Defaults to [`ResolverConfig::default`].
  pub fn config(mut self, config: ResolverConfig) -> Self {
    self.config = Some(config);
    self
  }

  pub fn build(self) -> QueryResolver {
    QueryResolver::new(self.config.unwrap_or_default())
  }
}

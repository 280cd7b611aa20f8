//! Digital archive catalog and faceted filtering.
//!
//! # Responsibility
//! - Load the archive catalog once and serve conjunctive facet filters over
//!   it for the archive browser.
//!
//! # Invariants
//! - Facet matching is case-insensitive substring; a blank facet means "no
//!   filter" and the empty query returns the full catalog.
//! - Result ordering is catalog load order.

use crate::model::archive::{ArchiveItem, ArchiveValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load-time error for archive catalogs.
#[derive(Debug)]
pub enum CatalogError {
    /// Dataset is not valid JSON of the expected shape.
    Decode(serde_json::Error),
    /// An item violates the required-field contract.
    Item {
        index: usize,
        source: ArchiveValidationError,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid archive dataset: {err}"),
            Self::Item { index, source } => {
                write!(f, "invalid archive item at index {index}: {source}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Item { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Facet filter for the archive browser.
///
/// All facets are optional and combined conjunctively. The default value is
/// the "reset filters" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveQuery {
    /// Matches item title or description.
    pub keyword: Option<String>,
    /// Matches the item's content category.
    pub content_type: Option<String>,
    /// Matches the item's historical period label.
    pub era: Option<String>,
    /// Matches the item's monastery of origin.
    pub monastery: Option<String>,
}

/// Immutable archive catalog loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ArchiveCatalog {
    items: Vec<ArchiveItem>,
}

impl ArchiveCatalog {
    /// Builds a catalog from item records, validating each one.
    ///
    /// # Errors
    /// Returns [`CatalogError::Item`] for the first invalid record.
    pub fn from_items(items: Vec<ArchiveItem>) -> CatalogResult<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate()
                .map_err(|source| CatalogError::Item { index, source })?;
        }
        Ok(Self { items })
    }

    /// Decodes a JSON array of archive items into a catalog.
    ///
    /// # Side effects
    /// - Emits `catalog_load` logging events with item count and duration.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let started_at = Instant::now();

        let result = serde_json::from_str::<Vec<ArchiveItem>>(json)
            .map_err(CatalogError::from)
            .and_then(Self::from_items);

        match &result {
            Ok(catalog) => info!(
                "event=catalog_load module=archive status=ok items={} duration_ms={}",
                catalog.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=catalog_load module=archive status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    /// Filters the catalog, preserving load order.
    pub fn filter(&self, query: &ArchiveQuery) -> Vec<&ArchiveItem> {
        self.items
            .iter()
            .filter(|item| {
                keyword_matches(&query.keyword, item)
                    && facet_matches(&query.content_type, &item.content_type)
                    && facet_matches(&query.era, &item.era)
                    && facet_matches(&query.monastery, &item.monastery)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchiveItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Keyword facet: matches title or description.
fn keyword_matches(filter: &Option<String>, item: &ArchiveItem) -> bool {
    match active_filter(filter) {
        None => true,
        Some(needle) => {
            contains_ignore_case(&item.title, &needle)
                || contains_ignore_case(&item.description, &needle)
        }
    }
}

fn facet_matches(filter: &Option<String>, value: &str) -> bool {
    match active_filter(filter) {
        None => true,
        Some(needle) => contains_ignore_case(value, &needle),
    }
}

/// Normalizes a facet; blank input means the facet is inactive.
fn active_filter(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

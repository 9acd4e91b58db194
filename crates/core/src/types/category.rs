//! Product category identifiers.
//!
//! The storefront carries a small fixed set of categories. Each category has
//! a stable slug (used in URLs, filters, and persisted image override keys)
//! and a human-readable label. Filtering compares enum values, never display
//! strings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`] from its slug.
#[derive(thiserror::Error, Debug, Clone)]
pub enum CategoryError {
    /// The slug does not name a known category.
    #[error("unknown category slug: {0}")]
    UnknownSlug(String),
}

/// One of the store's product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HealthWellness,
    BeautyPersonalCare,
    ElectronicsGadgets,
    HomeLiving,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::HealthWellness,
        Self::BeautyPersonalCare,
        Self::ElectronicsGadgets,
        Self::HomeLiving,
    ];

    /// The stable slug identifying this category.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::HealthWellness => "health-wellness",
            Self::BeautyPersonalCare => "beauty-personal-care",
            Self::ElectronicsGadgets => "electronics-gadgets",
            Self::HomeLiving => "home-living",
        }
    }

    /// The human-readable label shown in filter and listing views.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HealthWellness => "Health & Wellness",
            Self::BeautyPersonalCare => "Beauty & Personal Care",
            Self::ElectronicsGadgets => "Electronics & Gadgets",
            Self::HomeLiving => "Home & Living",
        }
    }

    /// Parse a category from its slug.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::UnknownSlug`] if the slug names no category.
    pub fn from_slug(slug: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .ok_or_else(|| CategoryError::UnknownSlug(slug.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()).unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert!(matches!(
            Category::from_slug("toys-games"),
            Err(CategoryError::UnknownSlug(_))
        ));
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::HealthWellness).unwrap();
        assert_eq!(json, "\"health-wellness\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::HealthWellness);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(Category::HomeLiving.to_string(), "Home & Living");
    }
}

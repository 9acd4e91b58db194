//! Image URL resolution layer.
//!
//! Views ask for an image by semantic slot (hero banner, category tile,
//! product thumbnail, logo) rather than by URL. Admin-entered overrides
//! take precedence; otherwise each slot falls back to a placeholder sized
//! for its expected aspect ratio.
//!
//! Overrides are stored as-is: any string is accepted, malformed URLs
//! included. A failed image fetch is the view's problem to report.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, keys};

/// A named image placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSlot {
    /// Full-bleed banner on the home screen.
    HomeHero,
    /// Banner on the about screen.
    AboutHero,
    /// Category tile; keyed by category slug.
    Category,
    /// Product thumbnail; keyed by product id.
    Product,
    /// Site logo.
    Logo,
}

impl ImageSlot {
    /// Whether this slot is keyed (category and product slots are; the
    /// rest ignore any key).
    #[must_use]
    pub const fn requires_key(&self) -> bool {
        matches!(self, Self::Category | Self::Product)
    }

    /// The hard-coded fallback for this slot, sized to its expected
    /// aspect ratio.
    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        match self {
            Self::HomeHero => "/placeholder.svg?height=1080&width=1920",
            Self::AboutHero => "/placeholder.svg?height=800&width=1920",
            Self::Category => "/placeholder.svg?height=600&width=400",
            Self::Product => "/placeholder.svg?height=400&width=300",
            Self::Logo => "/placeholder.svg?height=40&width=40",
        }
    }

    const fn slug(&self) -> &'static str {
        match self {
            Self::HomeHero => "home-hero",
            Self::AboutHero => "about-hero",
            Self::Category => "category",
            Self::Product => "product",
            Self::Logo => "logo",
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for ImageSlot {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home-hero" => Ok(Self::HomeHero),
            "about-hero" => Ok(Self::AboutHero),
            "category" => Ok(Self::Category),
            "product" => Ok(Self::Product),
            "logo" => Ok(Self::Logo),
            other => Err(ImageError::UnknownSlot(other.to_owned())),
        }
    }
}

/// Errors that can occur when editing image overrides.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// A keyed slot was edited without a key.
    #[error("slot {0} requires a key")]
    MissingKey(ImageSlot),

    /// An unkeyed slot was edited with a key.
    #[error("slot {0} does not take a key")]
    UnexpectedKey(ImageSlot),

    /// A slot name did not parse.
    #[error("unknown image slot: {0}")]
    UnknownSlot(String),
}

/// The persisted image override engine.
///
/// Hero and logo overrides are stored as plain URL strings under their own
/// keys; category and product overrides are each a serialized map under one
/// key per slot family.
pub struct ImageStore {
    home_hero: Option<String>,
    about_hero: Option<String>,
    logo: Option<String>,
    category: BTreeMap<String, String>,
    product: BTreeMap<String, String>,
    store: Arc<dyn KeyValueStore>,
}

impl ImageStore {
    /// Load all persisted overrides.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let home_hero = load_plain(store.as_ref(), keys::HOME_HERO_IMAGE_URL);
        let about_hero = load_plain(store.as_ref(), keys::ABOUT_HERO_IMAGE_URL);
        let logo = load_plain(store.as_ref(), keys::LOGO_IMAGE_URL);
        let category = storage::load_json_or_default(store.as_ref(), keys::CATEGORY_IMAGE_URLS);
        let product = storage::load_json_or_default(store.as_ref(), keys::PRODUCT_IMAGE_URLS);

        Self {
            home_hero,
            about_hero,
            logo,
            category,
            product,
            store,
        }
    }

    /// Resolve a slot (and key, for keyed slots) to a URL.
    ///
    /// Never fails: a missing override, a keyed slot queried without a
    /// key, and an unknown key all resolve to the slot's fallback. Unkeyed
    /// slots ignore any key passed.
    #[must_use]
    pub fn resolve(&self, slot: ImageSlot, key: Option<&str>) -> String {
        let found = match slot {
            ImageSlot::HomeHero => self.home_hero.as_deref(),
            ImageSlot::AboutHero => self.about_hero.as_deref(),
            ImageSlot::Logo => self.logo.as_deref(),
            ImageSlot::Category => key.and_then(|k| self.category.get(k)).map(String::as_str),
            ImageSlot::Product => key.and_then(|k| self.product.get(k)).map(String::as_str),
        };
        found.unwrap_or(slot.fallback()).to_owned()
    }

    /// Store an override, replacing any previous value for the same slot
    /// and key. The URL is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::MissingKey`] for a keyed slot without a key,
    /// or [`ImageError::UnexpectedKey`] for an unkeyed slot with one.
    pub fn set_override(
        &mut self,
        slot: ImageSlot,
        key: Option<&str>,
        url: impl Into<String>,
    ) -> Result<(), ImageError> {
        let url = url.into();
        tracing::debug!(%slot, key, "Setting image override");
        match (slot, key) {
            (ImageSlot::HomeHero, None) => {
                self.home_hero = Some(url);
                self.persist_plain(keys::HOME_HERO_IMAGE_URL, self.home_hero.as_deref());
            }
            (ImageSlot::AboutHero, None) => {
                self.about_hero = Some(url);
                self.persist_plain(keys::ABOUT_HERO_IMAGE_URL, self.about_hero.as_deref());
            }
            (ImageSlot::Logo, None) => {
                self.logo = Some(url);
                self.persist_plain(keys::LOGO_IMAGE_URL, self.logo.as_deref());
            }
            (ImageSlot::Category, Some(key)) => {
                self.category.insert(key.to_owned(), url);
                storage::persist_json(self.store.as_ref(), keys::CATEGORY_IMAGE_URLS, &self.category);
            }
            (ImageSlot::Product, Some(key)) => {
                self.product.insert(key.to_owned(), url);
                storage::persist_json(self.store.as_ref(), keys::PRODUCT_IMAGE_URLS, &self.product);
            }
            (ImageSlot::Category | ImageSlot::Product, None) => {
                return Err(ImageError::MissingKey(slot));
            }
            (_, Some(_)) => return Err(ImageError::UnexpectedKey(slot)),
        }
        Ok(())
    }

    /// Remove an override, restoring the slot's fallback.
    ///
    /// # Errors
    ///
    /// Same key rules as [`ImageStore::set_override`].
    pub fn remove_override(&mut self, slot: ImageSlot, key: Option<&str>) -> Result<(), ImageError> {
        tracing::debug!(%slot, key, "Removing image override");
        match (slot, key) {
            (ImageSlot::HomeHero, None) => {
                self.home_hero = None;
                self.persist_plain(keys::HOME_HERO_IMAGE_URL, None);
            }
            (ImageSlot::AboutHero, None) => {
                self.about_hero = None;
                self.persist_plain(keys::ABOUT_HERO_IMAGE_URL, None);
            }
            (ImageSlot::Logo, None) => {
                self.logo = None;
                self.persist_plain(keys::LOGO_IMAGE_URL, None);
            }
            (ImageSlot::Category, Some(key)) => {
                self.category.remove(key);
                storage::persist_json(self.store.as_ref(), keys::CATEGORY_IMAGE_URLS, &self.category);
            }
            (ImageSlot::Product, Some(key)) => {
                self.product.remove(key);
                storage::persist_json(self.store.as_ref(), keys::PRODUCT_IMAGE_URLS, &self.product);
            }
            (ImageSlot::Category | ImageSlot::Product, None) => {
                return Err(ImageError::MissingKey(slot));
            }
            (_, Some(_)) => return Err(ImageError::UnexpectedKey(slot)),
        }
        Ok(())
    }

    /// All stored overrides as (slot, key, url) rows, for the admin
    /// listing.
    #[must_use]
    pub fn overrides(&self) -> Vec<(ImageSlot, Option<String>, String)> {
        let mut rows = Vec::new();
        if let Some(url) = &self.home_hero {
            rows.push((ImageSlot::HomeHero, None, url.clone()));
        }
        if let Some(url) = &self.about_hero {
            rows.push((ImageSlot::AboutHero, None, url.clone()));
        }
        if let Some(url) = &self.logo {
            rows.push((ImageSlot::Logo, None, url.clone()));
        }
        for (key, url) in &self.category {
            rows.push((ImageSlot::Category, Some(key.clone()), url.clone()));
        }
        for (key, url) in &self.product {
            rows.push((ImageSlot::Product, Some(key.clone()), url.clone()));
        }
        rows
    }

    /// Hero/logo values are raw URL strings in the store, not JSON.
    fn persist_plain(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(url) => self.store.set(key, url),
            None => self.store.remove(key),
        };
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Failed to persist image override");
        }
    }
}

fn load_plain(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read image override");
            None
        }
    }
}

//! Site configuration documents
//!
//! A [`SiteConfig`] is the full tree of customizable content for one landing
//! page: navbar, hero, bottom navigation, content rows, modal labels and the
//! shows those rows point at. It is the unit the editor mutates, the preview
//! frame renders, and the preview store persists.
//!
//! Field names serialize in camelCase so documents can be exchanged with the
//! browser editor unchanged.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full configuration document for one site instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub navbar: Navbar,
    pub hero: Hero,
    pub bottom_nav: BottomNav,
    #[serde(default)]
    pub content_rows: Vec<ContentRow>,
    pub modal: ModalLabels,
    #[serde(default)]
    pub shows: Vec<Show>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub logo: String,
    /// Accent color, usually a `#rrggbb` string
    pub profile_color: String,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub image: String,
    #[serde(default)]
    pub mobile_image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub genre_tags: Vec<String>,
    pub maturity_rating: String,
    pub play_button_label: String,
    pub my_list_button_label: String,
    pub more_info_button_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomNav {
    #[serde(default)]
    pub items: Vec<BottomNavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomNavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub avatar: bool,
}

/// A titled, ordered row of show references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ContentRowItem>,
}

/// Reference to a show by id
///
/// The id should exist in [`SiteConfig::shows`], but a dangling reference is
/// kept as-is and skipped by [`SiteConfig::resolve_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRowItem {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ContentRowItem {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: None,
            image: None,
        }
    }
}

/// Display strings used by the show detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalLabels {
    pub series_badge_label: String,
    pub play_button_label: String,
    pub add_to_list_label: String,
    pub like_label: String,
    pub volume_label: String,
    pub close_label: String,
    pub cast_label: String,
    pub genres_label: String,
    pub mood_label: String,
    pub more_label: String,
    pub hd_badge: String,
    pub ad_badge: String,
}

/// One content item referenced by content rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Unique within a document
    pub id: u32,
    pub title: String,
    pub image: String,
    /// Promotional tag such as "Top 10" or "New Season"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub match_percent: u32,
    pub year: u32,
    pub rating: String,
    pub episodes: String,
    pub headline: String,
    pub synopsis: String,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub mood: String,
}

impl Show {
    /// A placeholder show as the editor creates it, id assigned on insert
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            image: String::new(),
            tag: None,
            match_percent: 90,
            year: 2024,
            rating: "TV-14".to_string(),
            episodes: "1 Season".to_string(),
            headline: String::new(),
            synopsis: String::new(),
            cast: Vec::new(),
            genres: Vec::new(),
            mood: String::new(),
        }
    }
}

/// A content row with its references resolved against the shows collection
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow<'a> {
    pub title: &'a str,
    pub shows: Vec<&'a Show>,
}

impl SiteConfig {
    /// Check document invariants
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = HashSet::with_capacity(self.shows.len());
        for show in &self.shows {
            if !seen.insert(show.id) {
                return Err(DocumentError::DuplicateShowId(show.id));
            }
        }
        Ok(())
    }

    pub fn find_show(&self, id: u32) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    /// Next free show id: one past the current maximum, starting at 1
    pub fn next_show_id(&self) -> u32 {
        self.shows.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Append a show under a freshly assigned id and return that id
    pub fn add_show(&mut self, mut show: Show) -> u32 {
        let id = self.next_show_id();
        show.id = id;
        self.shows.push(show);
        id
    }

    /// Remove a show and every content-row reference to it
    pub fn remove_show(&mut self, id: u32) -> Option<Show> {
        let index = self.shows.iter().position(|s| s.id == id)?;
        for row in &mut self.content_rows {
            row.items.retain(|item| item.id != id);
        }
        Some(self.shows.remove(index))
    }

    pub fn add_content_row(&mut self, title: impl Into<String>) {
        self.content_rows.push(ContentRow {
            title: title.into(),
            items: Vec::new(),
        });
    }

    pub fn remove_content_row(&mut self, index: usize) -> Result<ContentRow, DocumentError> {
        if index >= self.content_rows.len() {
            return Err(DocumentError::RowOutOfRange {
                index,
                len: self.content_rows.len(),
            });
        }
        Ok(self.content_rows.remove(index))
    }

    /// Resolve every row's references, silently dropping dangling ids
    pub fn resolve_rows(&self) -> Vec<ResolvedRow<'_>> {
        self.content_rows
            .iter()
            .map(|row| ResolvedRow {
                title: &row.title,
                shows: row
                    .items
                    .iter()
                    .filter_map(|item| self.find_show(item.id))
                    .collect(),
            })
            .collect()
    }

    /// Empty every image-bearing field
    pub fn clear_images(&mut self) {
        self.hero.image.clear();
        self.hero.mobile_image.clear();
        for show in &mut self.shows {
            show.image.clear();
        }
        for row in &mut self.content_rows {
            for item in &mut row.items {
                item.image = None;
            }
        }
    }
}

use std::collections::{BTreeMap, BTreeSet};

use bank::utils::sanitize_category;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::{error::StoreError, store::KeyValueStore};

pub const LIKED_JOKES_KEY: &str = "likedJokes";
pub const COMMENTS_KEY: &str = "comments";
pub const SELECTED_CATEGORIES_KEY: &str = "selectedCategories";

pub const COMMENT_AUTHOR: &str = "User";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub timestamp: String,
    pub author: String,
}

impl Comment {
    /// Comment posted `now`, `None` when the text is blank.
    pub fn new(text: &str, now: DateTime<Local>) -> Option<Self> {
        let text = text.trim();

        if text.is_empty() {
            return None;
        }

        Some(Self {
            id: now.timestamp_millis(),
            text: text.to_string(),
            timestamp: now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            author: COMMENT_AUTHOR.to_string(),
        })
    }
}

/// Everything the user chose, keyed by joke setup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub liked: BTreeSet<String>,
    pub comments: BTreeMap<String, Vec<Comment>>,
    pub selected_categories: Vec<String>,
}

impl Preferences {
    /// Reads every key, a missing or corrupted entry falls back to empty.
    ///
    /// Saved categories are sanitized again so hand edits still match card categories.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut selected_categories = Vec::new();

        for category in load_key::<Vec<String>>(store, SELECTED_CATEGORIES_KEY) {
            let category = sanitize_category(&category);

            if !category.is_empty() && !selected_categories.contains(&category) {
                selected_categories.push(category);
            }
        }

        Self {
            liked: load_key(store, LIKED_JOKES_KEY),
            comments: load_key(store, COMMENTS_KEY),
            selected_categories,
        }
    }

    pub fn save_liked<S: KeyValueStore>(&self, store: &mut S) -> Result<(), StoreError> {
        save_key(store, LIKED_JOKES_KEY, &self.liked)
    }

    pub fn save_comments<S: KeyValueStore>(&self, store: &mut S) -> Result<(), StoreError> {
        save_key(store, COMMENTS_KEY, &self.comments)
    }

    pub fn save_categories<S: KeyValueStore>(&self, store: &mut S) -> Result<(), StoreError> {
        save_key(store, SELECTED_CATEGORIES_KEY, &self.selected_categories)
    }
}

fn load_key<T: DeserializeOwned + Default>(store: &impl KeyValueStore, key: &str) -> T {
    let Some(json) = store.get(key) else {
        return T::default();
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!("Ignoring corrupted {key}: {e}");
        T::default()
    })
}

fn save_key<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.set(key, &serde_json::to_string(value)?)
}

//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Shopping list entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub emoji: String,
    pub added_at: String,
    pub completed: bool,
}

/// Form state for a not-yet-persisted item (matches the backend add payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub emoji: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: "general".to_string(),
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

pub const DEFAULT_EMOJI: &str = "🛒";

/// Category options for the add form: wire value + label
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("general", "Allgemein"),
    ("dairy", "Milchprodukte"),
    ("bakery", "Backwaren"),
    ("fruits", "Obst"),
    ("vegetables", "Gemüse"),
    ("meat", "Fleisch"),
    ("grains", "Getreide"),
];

/// Emoji palette for the add form
pub const EMOJI_OPTIONS: &[&str] = &[
    "🛒", "🥛", "🍞", "🥚", "🍌", "🍗", "🍚", "🍅", "🧀",
    "🥕", "🥩", "🐟", "🍎", "🍊", "🥬", "🧂", "🫖", "☕",
];

//! Shopping Item Entity

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Fixed set of item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Dairy,
    Bakery,
    Fruits,
    Vegetables,
    Meat,
    Grains,
}

/// A persisted shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier, assigned by the repository on create
    pub id: u32,
    /// Item name
    pub name: String,
    /// How many to buy
    pub quantity: u32,
    /// Category the item belongs to
    pub category: Category,
    /// Display glyph
    pub emoji: String,
    /// RFC 3339 creation timestamp, never mutated afterwards
    pub added_at: String,
    /// Completion status
    pub completed: bool,
}

/// Payload for creating an item; id and timestamp are assigned server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default = "default_emoji")]
    pub emoji: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_emoji() -> String {
    "🛒".to_string()
}

impl NewItem {
    /// Reject payloads that would break the collection invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be blank".to_string()));
        }
        if self.quantity == 0 {
            return Err(DomainError::InvalidInput("quantity must be positive".to_string()));
        }
        Ok(())
    }
}

impl ShoppingItem {
    /// Build a not-yet-persisted item from a request. The repository
    /// assigns the real id on create.
    pub fn from_request(req: NewItem) -> Self {
        Self {
            id: 0,
            name: req.name,
            quantity: req.quantity,
            category: req.category,
            emoji: req.emoji,
            added_at: chrono::Local::now().to_rfc3339(),
            completed: false,
        }
    }
}

impl Entity for ShoppingItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Starter catalog served by /api/defaults
pub fn default_catalog() -> Vec<NewItem> {
    let entries: [(&str, u32, Category, &str); 8] = [
        ("Milk", 1, Category::Dairy, "🥛"),
        ("Bread", 1, Category::Bakery, "🍞"),
        ("Eggs", 12, Category::Dairy, "🥚"),
        ("Bananas", 6, Category::Fruits, "🍌"),
        ("Chicken", 1, Category::Meat, "🍗"),
        ("Rice", 1, Category::Grains, "🍚"),
        ("Tomatoes", 4, Category::Vegetables, "🍅"),
        ("Cheese", 1, Category::Dairy, "🧀"),
    ];
    entries
        .into_iter()
        .map(|(name, quantity, category, emoji)| NewItem {
            name: name.to_string(),
            quantity,
            category,
            emoji: emoji.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() {
        let item = ShoppingItem::from_request(NewItem {
            name: "Milk".to_string(),
            quantity: 2,
            category: Category::Dairy,
            emoji: "🥛".to_string(),
        });
        assert_eq!(item.id, 0);
        assert_eq!(item.name, "Milk");
        assert!(!item.completed);
        assert!(!item.added_at.is_empty());
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&Category::Bakery).unwrap();
        assert_eq!(json, "\"bakery\"");
        let parsed: Category = serde_json::from_str("\"vegetables\"").unwrap();
        assert_eq!(parsed, Category::Vegetables);
    }

    #[test]
    fn test_validation() {
        let mut req = NewItem {
            name: "Milk".to_string(),
            quantity: 1,
            category: Category::Dairy,
            emoji: "🥛".to_string(),
        };
        assert!(req.validate().is_ok());

        req.name = "   ".to_string();
        assert!(matches!(req.validate(), Err(DomainError::InvalidInput(_))));

        req.name = "Milk".to_string();
        req.quantity = 0;
        assert!(matches!(req.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].name, "Milk");
        assert_eq!(catalog[0].category, Category::Dairy);
        assert!(catalog.iter().all(|draft| draft.validate().is_ok()));
    }

    #[test]
    fn test_request_defaults_from_json() {
        let req: NewItem = serde_json::from_str(r#"{"name":"Salz"}"#).unwrap();
        assert_eq!(req.quantity, 1);
        assert_eq!(req.category, Category::General);
        assert_eq!(req.emoji, "🛒");
    }
}

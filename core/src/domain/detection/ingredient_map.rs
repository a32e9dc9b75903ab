//! Dish-to-ingredient mapping.
//!
//! Coverage is deliberately partial: labels without an entry contribute no
//! ingredients to a detection result. Keys are canonical dish labels
//! (lowercase, underscores) matching [`super::labels::DISH_LABELS`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Main ingredients per dish. Extend as new dishes get curated.
const DISH_INGREDIENTS: &[(&str, &[&str])] = &[
    ("apple_pie", &["apple", "flour", "sugar", "butter"]),
    ("garlic_bread", &["bread", "garlic", "butter"]),
    (
        "spaghetti_bolognese",
        &["spaghetti", "tomato", "beef", "onion", "garlic"],
    ),
    ("grilled_cheese_sandwich", &["bread", "cheese", "butter"]),
    ("samosa", &["potato", "peas", "flour", "spices"]),
    (
        "chicken_biriyani",
        &["chicken", "rice", "spices", "onion", "tomato"],
    ),
    ("payasam", &["milk", "rice", "sugar", "cardamom", "cashew"]),
    ("banana_fritters", &["banana", "flour", "sugar", "oil"]),
    ("jackfruit_curry", &["jackfruit", "coconut", "spices", "onion"]),
    ("mango", &["mango"]),
    ("pineapple", &["pineapple"]),
    ("omelette", &["egg", "tomato", "onion"]),
    ("fried_rice", &["rice", "garlic", "onion"]),
    ("chicken_curry", &["chicken", "tomato", "onion", "garlic"]),
    ("pancakes", &["milk", "egg", "flour"]),
    ("pizza", &["flour", "tomato", "cheese", "capsicum"]),
    (
        "pad_thai",
        &["rice noodles", "egg", "tofu", "peanuts", "bean sprouts"],
    ),
    ("risotto", &["rice", "cheese", "butter", "mushroom"]),
    ("paella", &["rice", "seafood", "chicken", "saffron"]),
    (
        "greek_salad",
        &["tomato", "cucumber", "onion", "feta", "olive"],
    ),
    ("caprese_salad", &["tomato", "mozzarella", "basil"]),
    ("frozen_yogurt", &["milk", "sugar", "yogurt"]),
    ("ceviche", &["fish", "lime", "onion", "cilantro"]),
    ("cheese_plate", &["cheese", "crackers", "grapes"]),
];

static INGREDIENTS_BY_DISH: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| DISH_INGREDIENTS.iter().copied().collect());

/// Ingredients for a canonical dish label, or `None` for unmapped dishes.
pub fn ingredients_for(dish: &str) -> Option<&'static [&'static str]> {
    INGREDIENTS_BY_DISH.get(dish).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::detection::{labels::DISH_LABELS, value_objects::normalize_label};

    #[test]
    fn every_key_is_a_known_label() {
        for (dish, _) in DISH_INGREDIENTS {
            assert!(DISH_LABELS.contains(dish), "unknown dish {dish}");
        }
    }

    #[test]
    fn keys_survive_normalization_unchanged() {
        for (dish, _) in DISH_INGREDIENTS {
            assert_eq!(normalize_label(dish), *dish);
        }
    }

    #[test]
    fn ingredient_lists_are_non_empty() {
        for (dish, ingredients) in DISH_INGREDIENTS {
            assert!(!ingredients.is_empty(), "{dish} has no ingredients");
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(
            ingredients_for("omelette"),
            Some(["egg", "tomato", "onion"].as_slice())
        );
        assert_eq!(ingredients_for("baklava"), None);
    }
}

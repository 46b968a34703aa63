//! # Jokes
//!
//! Two shapes of joke live in the bank.
//!
//! - Daily jokes: the fixed one-liners served by `GET /api/jokes`, `{ id, joke }` with ids 1 through 10.
//! - Cards: `{ setup, punchline, category }` records used by the card page. The punchline stays hidden
//!   until the reveal engine on the client lets it through.
//!
//! ## Categories
//! - Card categories are sanitized on load so `"Knock Knock"` and `"knock_knock"` both land on `knock-knock`
//! - Missing categories default to `general`
//! - Filtering by a category nobody has is an empty listing, not an error
use serde::{Deserialize, Serialize};

use crate::{BankError, utils::sanitize_category};

pub const DEFAULT_CATEGORY: &str = "general";

const DAILY_JOKES: [(u32, &str); 10] = [
    (1, "Why don't scientists trust atoms? Because they make up everything!"),
    (2, "Why did the scarecrow win an award? Because he was outstanding in his field!"),
    (3, "Why don't skeletons fight each other? They don't have the guts."),
    (4, "What do you call fake spaghetti? An impasta!"),
    (5, "What do you get when you cross a snowman and a vampire? Frostbite."),
    (6, "Why was the math book sad? Because it had too many problems."),
    (7, "Why did the bicycle fall over? Because it was two-tired!"),
    (8, "Why don't programmers like nature? It has too many bugs."),
    (9, "How do you organize a space party? You planet."),
    (10, "Why did the coffee file a police report? It got mugged."),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyJoke {
    pub id: u32,
    pub joke: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
    #[serde(alias = "type", default = "default_category")]
    pub category: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bank {
    pub cards: Vec<Joke>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

pub fn daily_jokes() -> Vec<DailyJoke> {
    DAILY_JOKES
        .iter()
        .map(|&(id, joke)| DailyJoke {
            id,
            joke: joke.to_string(),
        })
        .collect()
}

impl Joke {
    pub fn new(setup: &str, punchline: &str, category: &str) -> Self {
        let mut joke = Self {
            setup: setup.trim().to_string(),
            punchline: punchline.trim().to_string(),
            category: category.to_string(),
        };
        joke.sanitize();

        joke
    }

    fn sanitize(&mut self) {
        self.category = sanitize_category(&self.category);

        if self.category.is_empty() {
            self.category = default_category();
        }
    }

    /// Text used when the joke leaves the app, setup and punchline on one line.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.setup, self.punchline)
    }
}

impl Bank {
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let mut bank: Bank = serde_json::from_str(json)?;
        bank.cards.iter_mut().for_each(Joke::sanitize);

        Ok(bank)
    }

    /// Cards in bank order, optionally narrowed to one category.
    pub fn cards(&self, category: Option<&str>) -> Vec<Joke> {
        let Some(category) = category.map(sanitize_category) else {
            return self.cards.clone();
        };

        self.cards
            .iter()
            .filter(|joke| joke.category == category)
            .cloned()
            .collect()
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();

        for joke in &self.cards {
            if !categories.contains(&joke.category) {
                categories.push(joke.category.clone());
            }
        }

        categories
    }

    /// Appends jokes whose setup is not already banked, returning how many were new.
    pub fn merge(&mut self, jokes: impl IntoIterator<Item = Joke>) -> usize {
        let mut new_items = 0;

        for joke in jokes {
            if joke.setup.is_empty() || joke.punchline.is_empty() {
                continue;
            }

            if self.cards.iter().any(|banked| banked.setup == joke.setup) {
                continue;
            }

            self.cards.push(joke);
            new_items += 1;
        }

        new_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        Bank::from_json(
            r#"{ "cards": [
                { "setup": "a", "punchline": "b", "type": "Knock Knock" },
                { "setup": "c", "punchline": "d", "category": "food" },
                { "setup": "e", "punchline": "f" },
                { "setup": "g", "punchline": "h", "category": "food" }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_daily_jokes_fixed() {
        let jokes = daily_jokes();

        assert_eq!(jokes.len(), 10);
        for (index, joke) in jokes.iter().enumerate() {
            assert_eq!(joke.id, index as u32 + 1);
            assert!(!joke.joke.is_empty());
        }
    }

    #[test]
    fn test_categories_sanitized_and_defaulted() {
        let bank = bank();

        assert_eq!(bank.cards[0].category, "knock-knock");
        assert_eq!(bank.cards[2].category, DEFAULT_CATEGORY);
        assert_eq!(bank.categories(), vec!["knock-knock", "food", "general"]);
    }

    #[test]
    fn test_filter_by_category() {
        let bank = bank();

        assert_eq!(bank.cards(None).len(), 4);
        assert_eq!(bank.cards(Some("FOOD")).len(), 2);
        assert_eq!(bank.cards(Some("knock_knock")).len(), 1);
        assert!(bank.cards(Some("pirate")).is_empty());
    }

    #[test]
    fn test_merge_skips_known_and_blank() {
        let mut bank = bank();

        let new_items = bank.merge([
            Joke::new("a", "again", "food"),
            Joke::new("  ", "no setup", "food"),
            Joke::new("new", "joke", "Sport"),
        ]);

        assert_eq!(new_items, 1);
        assert_eq!(bank.cards.len(), 5);
        assert_eq!(bank.cards[4].category, "sport");
    }

    #[test]
    fn test_full_text() {
        let joke = Joke::new("Setup?", "Punchline.", "");

        assert_eq!(joke.full_text(), "Setup? Punchline.");
        assert_eq!(joke.category, DEFAULT_CATEGORY);
    }
}

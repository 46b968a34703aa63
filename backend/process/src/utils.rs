use bank::jokes::Joke;

use crate::models::RawJoke;

/// Splits `"Why? Because."` into setup and punchline at the first question or exclamation mark.
pub fn split_one_liner(joke: &str) -> Option<(&str, &str)> {
    let end = joke.find(['?', '!'])? + 1;
    let (setup, punchline) = joke.split_at(end);

    let (setup, punchline) = (setup.trim(), punchline.trim());
    if setup.is_empty() || punchline.is_empty() {
        return None;
    }

    Some((setup, punchline))
}

pub fn to_joke(raw: RawJoke, fallback_category: &str) -> Option<Joke> {
    match raw {
        RawJoke::Card {
            setup,
            punchline,
            category,
        } => Some(Joke::new(
            &setup,
            &punchline,
            category.as_deref().unwrap_or(fallback_category),
        )),
        RawJoke::OneLiner { joke } => {
            let (setup, punchline) = split_one_liner(&joke)?;

            Some(Joke::new(setup, punchline, fallback_category))
        }
    }
}

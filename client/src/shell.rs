//! # Presentation Shell
//!
//! All state of the card page in one place: which jokes are loaded, which one is showing, the reveal
//! engine for it, and the user's preferences.
//!
//! Every change of the joke on screen (next, previous, random, a new filter, a reload) resets the
//! reveal engine. Preference changes are written through to the store right away; a failed write is
//! logged and the in-memory state carries on.
use std::time::Duration;

use bank::{jokes::Joke, utils::sanitize_category};
use chrono::{DateTime, Local};
use rand::Rng;
use tracing::{debug, warn};

use crate::{
    config::RevealConfig,
    error::StoreError,
    prefs::{Comment, Preferences},
    reveal::{
        RevealEngine, RevealState,
        motion::{Acceleration, MotionCapability, Shake},
    },
    share::{Clipboard, ShareOutcome, SharePlatform, share},
    source::JokeSource,
    store::KeyValueStore,
};

pub struct Shell<S: KeyValueStore> {
    store: S,
    prefs: Preferences,
    jokes: Vec<Joke>,
    index: usize,
    engine: RevealEngine,
    loading: bool,
    error: Option<String>,
    page_url: String,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(store: S, config: RevealConfig, capability: MotionCapability) -> Self {
        let prefs = Preferences::load(&store);

        Self {
            store,
            prefs,
            jokes: Vec::new(),
            index: 0,
            engine: RevealEngine::new(config, capability),
            loading: false,
            error: None,
            page_url: String::new(),
        }
    }

    /// Address of the page itself, used by the Facebook share link.
    pub fn with_page_url(mut self, page_url: &str) -> Self {
        self.page_url = page_url.to_string();
        self
    }

    pub async fn load(&mut self, source: &impl JokeSource) {
        self.loading = true;

        // always the full listing, filter changes only narrow `visible`
        let listing = source.list_jokes(None).await;

        debug!("Loaded {} jokes", listing.jokes.len());

        self.jokes = listing.jokes;
        self.error = listing.error;
        self.loading = false;
        self.show(0);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loaded jokes that pass the category filter. No selection means every category.
    pub fn visible(&self) -> Vec<&Joke> {
        let selected = &self.prefs.selected_categories;

        self.jokes
            .iter()
            .filter(|joke| selected.is_empty() || selected.contains(&joke.category))
            .collect()
    }

    pub fn current(&self) -> Option<&Joke> {
        self.visible().get(self.index).copied()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        let count = self.visible().len();

        if count > 0 {
            self.show((self.index + 1) % count);
        }
    }

    pub fn previous(&mut self) {
        let count = self.visible().len();

        if count > 0 {
            self.show((self.index + count - 1) % count);
        }
    }

    pub fn random(&mut self, rng: &mut impl Rng) {
        let count = self.visible().len();

        if count > 0 {
            self.show(rng.gen_range(0..count));
        }
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.engine.reset();
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.prefs.selected_categories
    }

    pub fn toggle_category(&mut self, category: &str) {
        let category = sanitize_category(category);

        if category.is_empty() {
            return;
        }

        let selected = &mut self.prefs.selected_categories;
        match selected.iter().position(|c| *c == category) {
            Some(position) => {
                selected.remove(position);
            }
            None => selected.push(category),
        }

        self.persist(Preferences::save_categories);
        self.show(0);
    }

    pub fn clear_categories(&mut self) {
        self.prefs.selected_categories.clear();

        self.persist(Preferences::save_categories);
        self.show(0);
    }

    pub fn is_liked(&self, joke: &Joke) -> bool {
        self.prefs.liked.contains(&joke.setup)
    }

    /// Flips the like on the current joke, returning whether it is now liked.
    pub fn toggle_like(&mut self) -> bool {
        let Some(setup) = self.current().map(|joke| joke.setup.clone()) else {
            return false;
        };

        let liked = if self.prefs.liked.remove(&setup) {
            false
        } else {
            self.prefs.liked.insert(setup)
        };

        self.persist(Preferences::save_liked);

        liked
    }

    /// Adds a comment to the current joke. Blank text, or no joke on screen, is ignored.
    pub fn add_comment(&mut self, text: &str, now: DateTime<Local>) -> bool {
        let Some(setup) = self.current().map(|joke| joke.setup.clone()) else {
            return false;
        };
        let Some(comment) = Comment::new(text, now) else {
            return false;
        };

        self.prefs.comments.entry(setup).or_default().push(comment);
        self.persist(Preferences::save_comments);

        true
    }

    pub fn comments(&self, joke: &Joke) -> &[Comment] {
        self.prefs
            .comments
            .get(&joke.setup)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn share(
        &self,
        platform: SharePlatform,
        clipboard: &mut impl Clipboard,
    ) -> Option<ShareOutcome> {
        let joke = self.current()?;

        Some(share(platform, &joke.full_text(), &self.page_url, clipboard))
    }

    pub fn start_scratch(&mut self) {
        self.engine.start_scratch();
    }

    pub fn scratch_move(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.current().is_some() && self.engine.record_pointer_move(x, y, width, height)
    }

    pub fn end_scratch(&mut self) {
        self.engine.end_scratch();
    }

    pub fn motion_sample(&mut self, acceleration: Acceleration, now: Duration) -> Option<Shake> {
        self.current()?;

        self.engine.record_motion_sample(acceleration, now)
    }

    pub fn show_punchline(&mut self) {
        self.engine.force_reveal();
    }

    pub fn reveal_config(&self) -> &RevealConfig {
        self.engine.config()
    }

    pub fn reveal_state(&self) -> RevealState {
        self.engine.state()
    }

    pub fn reveal_progress(&self) -> f64 {
        self.engine.combined_progress()
    }

    /// The punchline of the current joke, once revealed.
    pub fn punchline(&self) -> Option<&str> {
        if !self.engine.is_revealed() {
            return None;
        }

        self.current().map(|joke| joke.punchline.as_str())
    }

    fn persist(&mut self, save: fn(&Preferences, &mut S) -> Result<(), StoreError>) {
        if let Err(e) = save(&self.prefs, &mut self.store) {
            warn!("Failed to persist preferences: {e}");
        }
    }
}

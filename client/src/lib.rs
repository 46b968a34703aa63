//! # Client
//!
//! Logic behind the card page, runtime agnostic. A browser build wires DOM events in, a terminal build
//! (see `tester`) scripts them.
//!
//! ## Overall Payloads
//!
//! Responses from the backend.
//!
//! ### Cards
//! - `GET /api/cards`, JSON list of `{ setup, punchline, category }`
//! - Always the full list, category picks filter locally so changing them never needs a refetch
//! - Fetch fails? Empty list plus "Failed to load jokes. Please try again later.", no retry
//!
//! ### Local Storage
//! Keys
//! - `likedJokes`: JSON list of joke setups
//! - `comments`: JSON map of joke setup to a list of `{ id, text, timestamp, author }`
//! - `selectedCategories`: JSON list of category ids
//!
//! Garbage under any key reads as empty. We never throw on bad storage.
//!
//!
//!
//! ## Reveal
//!
//! - Punchline is hidden under a scratch surface
//! - Drag over it to scratch, every grid cell counts once
//! - Or shake the phone, strong enough and not too often
//! - Whichever gets there first reveals, and it stays revealed until the card changes
//! - "Show punchline" button skips all of it
//!
//! Devices without motion sensors just never shake. Scratching still works.
//!
//!
//!
//! ## Sharing
//!
//! - WhatsApp, Twitter, Facebook get a link with the joke URL encoded
//! - Copy writes to the clipboard, if the clipboard says no we show a notice instead of failing
pub mod config;
pub mod error;
pub mod prefs;
pub mod reveal;
pub mod share;
pub mod shell;
pub mod source;
pub mod store;

pub use config::RevealConfig;
pub use reveal::{RevealEngine, RevealState};
pub use shell::Shell;

//! # samurai_deck
//!
//! Seeded 52-card decks and procedural card artwork for the samurai card
//! games, fully offline and deterministic.
//!
//! Everything derives from a seed string. The same seed always gives the same
//! deck order and the same SVG for every card, so a stored seed (or a daily
//! one) reproduces a whole session's art.
//!
//! ## How it works
//!
//! 1. The seed is hashed (FNV-1a, 32-bit) into a mulberry32 generator that
//!    shuffles the canonical deck.
//! 2. For each card, `seed|cardId` is hashed again and salted once per visual
//!    feature (torn edge, paper fibers, ink wash), giving every feature its own
//!    generator.
//! 3. The generated primitives are layered with the clan icon, glyph and rank
//!    text into a standalone SVG document.
//!
//! ## Quick start
//!
//! ```rust
//! use samurai_deck::{build_deck, render_card_back, render_card_face, ArtSession, GameKind};
//!
//! // Minimal: free functions with the default config.
//! let mut deck = build_deck("123456");
//! let card = deck.deal();
//! let face = render_card_face(&card, "123456");
//! assert!(face.as_str().starts_with("<svg"));
//! let back = render_card_back();
//! assert_ne!(face, back);
//!
//! // Session: one seed and config, the back rendered once.
//! let session = ArtSession::new("daily-2026-10-18");
//! let mut duel = session.game_deck(GameKind::Duel);
//! let hand = duel.deal_n(5);
//! let uris: Vec<String> = hand.iter().map(|c| session.face(c).to_data_uri()).collect();
//! assert_eq!(uris.len(), 5);
//! ```

pub mod card_art;
pub mod manifest;

// Convenience re-exports so callers can use `samurai_deck::build_deck`
// directly without reaching into `card_art::`.
pub use card_art::{
    build_deck, build_game_deck, daily_seed, render_card_back, render_card_face, ArtConfig,
    ArtError, ArtResult, ArtSession, Card, Clan, Deck, GameKind, Rank, SvgDocument, DEFAULT_SEED,
};
pub use manifest::{deck_manifest, hand_manifest, opening_hand_manifest};

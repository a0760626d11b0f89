//! Card-art engine: seeded decks and procedural card artwork.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `rng`     | FNV-1a seed hash, mulberry32 generator, per-feature sub-seeds |
//! | `models`  | Clans, ranks, cards and game kinds |
//! | `deck`    | Canonical 52-card deck, Fisher-Yates shuffle, dealing |
//! | `texture` | Torn-edge outline, fiber strokes, ink-wash blobs |
//! | `icons`   | The four clan icons |
//! | `svg`     | SVG document artifact, escaping, data URIs |
//! | `render`  | Face and back composition, `ArtSession` |
//! | `config`  | Palette, fonts and torn-edge parameters |
//! | `error`   | `ArtError` / `ArtResult` |

pub mod config;
pub mod deck;
pub mod error;
pub mod icons;
pub mod models;
pub mod render;
pub mod rng;
pub mod svg;
pub mod texture;

pub use config::{ArtConfig, Palette, Rgb, TornEdgeParams};
pub use deck::{build_deck, build_game_deck, sort_by_value, Deck};
pub use error::{ArtError, ArtResult};
pub use models::{Card, Clan, GameKind, Rank};
pub use render::{
    daily_seed, render_back, render_card_back, render_card_face, render_face, ArtSession,
    DEFAULT_SEED,
};
pub use rng::{derive_sub_seed, hash32, ArtKey, Feature, Mulberry32, SeededRng};
pub use svg::SvgDocument;
pub use texture::TexturePrimitives;

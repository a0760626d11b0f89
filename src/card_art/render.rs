//! Card face and card back composition.
//!
//! A face is layered bottom to top:
//!
//! | # | Layer |
//! |---|-------|
//! | 1 | Paper gradient with drop shadow |
//! | 2 | Noise, wash, fibers and ink blobs, masked by the torn edge |
//! | 3 | Inner panel |
//! | 4 | Large faint clan glyph |
//! | 5 | Rank/title and clan lines, top left |
//! | 6 | Clan icon |
//! | 7 | Rank medallion, bottom right |
//!
//! The back is the same for every card of every seed.

use crate::card_art::{
    config::{ArtConfig, Rgb},
    deck::{build_deck, build_game_deck, Deck},
    icons::icon_svg,
    models::{Card, GameKind},
    rng::{feature_rng, ArtKey, Feature, CARD_BACK_KEY},
    svg::{escape_xml, SvgDocument},
    texture::{fiber_strokes, TexturePrimitives},
};

pub const CARD_WIDTH: u32 = 220;
pub const CARD_HEIGHT: u32 = 308;

/// Seed the games fall back to when none has been stored.
pub const DEFAULT_SEED: &str = "123456";

/// Seed string for a daily deck, e.g. `daily-2026-10-18`.
pub fn daily_seed(year: u16, month: u8, day: u8) -> String {
    format!("daily-{year:04}-{month:02}-{day:02}")
}

const PAPER_MATRIX: &str = "0.9 0 0 0 0.08 0 0.9 0 0 0.08 0 0 0.85 0 0.07 0 0 0 1 0";

fn svg_open() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    )
}

fn shared_defs(cfg: &ArtConfig, noise_frequency: f64, noise_seed: u32) -> String {
    let p = &cfg.palette;
    format!(
        concat!(
            r#"<filter id="softShadow" x="-20%" y="-20%" width="140%" height="140%"><feDropShadow dx="0" dy="10" stdDeviation="12" flood-color="{shadow}"/></filter>"#,
            r#"<filter id="paperNoise"><feTurbulence type="fractalNoise" baseFrequency="{freq}" numOctaves="2" stitchTiles="stitch" seed="{nseed}"/><feColorMatrix type="matrix" values="{matrix}"/></filter>"#,
            r#"<linearGradient id="paperBase" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{light}"/><stop offset="1" stop-color="{dark}"/></linearGradient>"#,
        ),
        shadow = Rgb(0, 0, 0).rgba(0.35),
        freq = noise_frequency,
        nseed = noise_seed,
        matrix = PAPER_MATRIX,
        light = p.paper_light.hex(),
        dark = p.paper_dark.hex(),
    )
}

fn paper_base() -> String {
    format!(
        r#"<rect x="10" y="10" width="200" height="288" rx="22" fill="url(#paperBase)" stroke="{}" stroke-width="2" filter="url(#softShadow)"/>"#,
        Rgb(0, 0, 0).rgba(0.18),
    )
}

/// Compose one card face.
#[tracing::instrument(skip(card, cfg), fields(card_id = %card))]
pub fn render_face(card: &Card, seed: &str, cfg: &ArtConfig) -> SvgDocument {
    compose_face(card, card.icon_key(), seed, cfg)
}

/// Face with an explicit icon key. An unknown key drops the icon layer and
/// leaves the rest of the card intact.
fn compose_face(card: &Card, icon_key: &str, seed: &str, cfg: &ArtConfig) -> SvgDocument {
    let key = ArtKey::new(seed, card.id());
    let tex = TexturePrimitives::for_key(&key, cfg.torn_edge);
    tracing::debug!(fibers = tex.fibers.len(), blobs = tex.blobs.len(), "texture generated");

    let p = &cfg.palette;
    let font = escape_xml(&cfg.font_family);

    let icon = icon_svg(icon_key, p).unwrap_or_else(|| {
        tracing::warn!(icon = icon_key, "unknown icon key, icon layer omitted");
        String::new()
    });

    let mut svg = svg_open();
    svg.push_str("<defs>");
    svg.push_str(&shared_defs(cfg, 0.8, 9));
    svg.push_str(concat!(
        r#"<filter id="inkBleed"><feGaussianBlur stdDeviation="0.45"/></filter>"#,
        r#"<filter id="washBlur"><feGaussianBlur stdDeviation="2.8"/></filter>"#,
    ));
    svg.push_str(&format!(
        r#"<mask id="tornMask"><rect width="{w}" height="{h}" fill="black"/><path d="{d}" fill="white"/></mask>"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        d = tex.torn_edge.path_data(),
    ));
    svg.push_str("</defs>");

    // 1
    svg.push_str(&paper_base());

    // 2
    svg.push_str(&format!(
        concat!(
            r#"<g mask="url(#tornMask)">"#,
            r#"<rect x="12" y="12" width="196" height="284" rx="20" filter="url(#paperNoise)" opacity="0.35"/>"#,
            r#"<rect x="12" y="12" width="196" height="284" rx="20" fill="{wash}" opacity="0.55"/>"#,
            r#"<g opacity="0.72">{fibers}</g>"#,
            r#"<g filter="url(#washBlur)">{ink}</g>"#,
            "</g>",
        ),
        wash = Rgb(255, 255, 255).rgba(0.22),
        fibers = tex.fibers_svg(p.ink),
        ink = tex.ink_svg(p.accent),
    ));

    // 3
    svg.push_str(&format!(
        r#"<rect x="22" y="22" width="176" height="264" rx="18" fill="{}" stroke="{}" stroke-width="2"/>"#,
        Rgb(255, 255, 255).rgba(0.42),
        Rgb(0, 0, 0).rgba(0.08),
    ));

    // 4
    svg.push_str(&format!(
        r#"<text x="110" y="210" text-anchor="middle" font-family="{font}" font-size="160" font-weight="900" fill="{fill}">{glyph}</text>"#,
        fill = p.ink.rgba(0.06),
        glyph = escape_xml(card.glyph()),
    ));

    // 5
    svg.push_str(&format!(
        concat!(
            r#"<g filter="url(#inkBleed)">"#,
            r#"<text x="36" y="56" font-family="{font}" font-size="16" font-weight="1000" fill="{strong}">{top}</text>"#,
            r#"<text x="36" y="76" font-family="{font}" font-size="12" font-weight="900" fill="{soft}">{clan}</text>"#,
            "</g>",
        ),
        font = font,
        strong = p.ink.rgba(0.88),
        soft = p.ink.rgba(0.60),
        top = escape_xml(&format!("{} • {}", card.symbol(), card.title())),
        clan = escape_xml(&format!("{} Clan", card.clan_name())),
    ));

    // 6
    svg.push_str(&icon);

    // 7
    svg.push_str(&format!(
        concat!(
            r#"<g transform="translate(182 262)">"#,
            r#"<circle cx="0" cy="0" r="22" fill="{bg}" stroke="{ring}" stroke-width="2"/>"#,
            r#"<text x="0" y="7" text-anchor="middle" font-family="{font}" font-size="20" font-weight="1000" fill="{fg}">{rank}</text>"#,
            "</g>",
        ),
        bg = p.accent.rgba(0.10),
        ring = p.accent.rgba(0.30),
        fg = p.accent.rgba(0.60),
        font = font,
        rank = escape_xml(card.symbol()),
    ));

    svg.push_str("</svg>");
    SvgDocument::new(svg)
}

/// Compose the shared card back. Takes no seed.
#[tracing::instrument(skip(cfg))]
pub fn render_back(cfg: &ArtConfig) -> SvgDocument {
    let p = &cfg.palette;
    let fibers: String = fiber_strokes(&mut feature_rng(CARD_BACK_KEY, Feature::CardBack))
        .iter()
        .map(|f| f.to_svg(p.ink))
        .collect();

    let mut svg = svg_open();
    svg.push_str("<defs>");
    svg.push_str(&shared_defs(cfg, 0.75, 13));
    svg.push_str(r#"<filter id="brush"><feGaussianBlur stdDeviation="1.7"/></filter>"#);
    svg.push_str("</defs>");

    svg.push_str(&paper_base());
    svg.push_str(r#"<rect x="12" y="12" width="196" height="284" rx="20" filter="url(#paperNoise)" opacity="0.35"/>"#);
    svg.push_str(&format!(r#"<g opacity="0.5">{fibers}</g>"#));

    svg.push_str(&format!(
        concat!(
            r#"<g filter="url(#brush)" opacity="0.55">"#,
            r#"<path d="M30 86 C70 60, 110 64, 190 94 C170 140, 132 170, 30 210 C42 172, 50 138, 30 86 Z" fill="{swash}"/>"#,
            "</g>",
            r#"<g transform="translate(110 160)">"#,
            r#"<circle cx="0" cy="0" r="54" fill="{disc}" stroke="{ring}" stroke-width="2"/>"#,
            r#"<path d="M0 -30 L18 0 L0 30 L-18 0 Z" fill="{mark}"/>"#,
            r#"<circle cx="0" cy="0" r="10" fill="{mark}"/>"#,
            "</g>",
            r#"<text x="110" y="270" text-anchor="middle" font-family="{font}" font-size="16" font-weight="1000" fill="{title_fill}">{title}</text>"#,
        ),
        swash = p.accent.rgba(1.0),
        disc = Rgb(0, 0, 0).rgba(0.10),
        ring = Rgb(0, 0, 0).rgba(0.18),
        mark = p.ink.rgba(0.55),
        font = escape_xml(&cfg.font_family),
        title_fill = p.ink.rgba(0.70),
        title = escape_xml(&cfg.back_title),
    ));

    svg.push_str("</svg>");
    SvgDocument::new(svg)
}

/// Face art for `card` under `seed`, default config.
pub fn render_card_face(card: &Card, seed: &str) -> SvgDocument {
    render_face(card, seed, &ArtConfig::default())
}

/// The card back, default config.
pub fn render_card_back() -> SvgDocument {
    render_back(&ArtConfig::default())
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One game session: the seed, the art config, and the card back rendered
/// once up front.
///
/// Sessions hold no shared state, so any number can live side by side.
#[derive(Debug, Clone)]
pub struct ArtSession {
    seed: String,
    config: ArtConfig,
    back: SvgDocument,
}

impl ArtSession {
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_config(seed, ArtConfig::default())
    }

    pub fn with_config(seed: impl Into<String>, config: ArtConfig) -> Self {
        let config = config.clamped();
        let back = render_back(&config);
        ArtSession { seed: seed.into(), config, back }
    }

    /// Session on today's daily seed.
    pub fn daily(year: u16, month: u8, day: u8) -> Self {
        Self::new(daily_seed(year, month, day))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    pub fn deck(&self) -> Deck {
        build_deck(&self.seed)
    }

    pub fn game_deck(&self, game: GameKind) -> Deck {
        build_game_deck(&self.seed, game)
    }

    pub fn key(&self, card: &Card) -> ArtKey {
        ArtKey::new(self.seed.clone(), card.id())
    }

    pub fn textures(&self, card: &Card) -> TexturePrimitives {
        TexturePrimitives::for_key(&self.key(card), self.config.torn_edge)
    }

    pub fn face(&self, card: &Card) -> SvgDocument {
        render_face(card, &self.seed, &self.config)
    }

    pub fn back(&self) -> &SvgDocument {
        &self.back
    }
}

impl Default for ArtSession {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_art::config::Palette;
    use crate::card_art::models::{Clan, Rank};

    fn ace() -> Card {
        Card::new(Rank(14), Clan::Blade)
    }

    #[test]
    fn face_is_deterministic() {
        assert_eq!(render_card_face(&ace(), "123456"), render_card_face(&ace(), "123456"));
    }

    #[test]
    fn face_depends_on_seed_and_card() {
        let base = render_card_face(&ace(), "123456");
        assert_ne!(base, render_card_face(&ace(), "654321"));
        assert_ne!(base, render_card_face(&Card::new(Rank(13), Clan::Blade), "123456"));
    }

    #[test]
    fn face_carries_card_text() {
        let svg = render_card_face(&Card::new(Rank(12), Clan::Wagasa), "s").into_string();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">Q • Daimyo</text>"));
        assert!(svg.contains(">Umbrella Clan</text>"));
        assert!(svg.contains(">傘</text>"));
        assert!(svg.contains(r#"<mask id="tornMask">"#));
    }

    #[test]
    fn every_face_has_its_icon() {
        for clan in Clan::ALL {
            let svg = render_card_face(&Card::new(Rank(5), clan), "icons").into_string();
            assert!(svg.contains(r#"<g transform="translate(110 165)">"#), "{clan} icon missing");
        }
    }

    #[test]
    fn unknown_icon_key_omits_only_the_icon_layer() {
        let cfg = ArtConfig::default();
        let card = Card::new(Rank(5), Clan::Fan);
        let known = compose_face(&card, card.icon_key(), "icons", &cfg);
        let unknown = compose_face(&card, "kite", "icons", &cfg).into_string();

        assert_eq!(known, render_face(&card, "icons", &cfg));
        assert!(!unknown.contains(r#"<g transform="translate(110 165)">"#));
        assert!(unknown.contains(">5 • Spearman</text>"));
        assert!(unknown.contains(r#"<g transform="translate(182 262)">"#));
        assert!(unknown.ends_with("</svg>"));

        let icon = icon_svg(card.icon_key(), &cfg.palette).unwrap();
        assert_eq!(known.as_str().replacen(&icon, "", 1), unknown);
    }

    #[test]
    fn back_ignores_the_session_seed() {
        let a = ArtSession::new("alpha");
        let b = ArtSession::new("beta");
        assert_eq!(a.back(), b.back());
        assert_eq!(a.back(), &render_card_back());
    }

    #[test]
    fn back_uses_configured_title() {
        let cfg = ArtConfig { back_title: "A & B".into(), ..ArtConfig::default() };
        let svg = render_back(&cfg).into_string();
        assert!(svg.contains(">A &amp; B</text>"));
    }

    #[test]
    fn palette_changes_the_face() {
        let cfg = ArtConfig {
            palette: Palette { accent: Rgb(0, 90, 200), ..Palette::default() },
            ..ArtConfig::default()
        };
        let svg = render_face(&ace(), "123456", &cfg).into_string();
        assert!(svg.contains("rgba(0,90,200,"));
        assert!(!svg.contains("rgba(185,28,28,"));
    }

    #[test]
    fn session_face_matches_free_function() {
        let session = ArtSession::new("123456");
        assert_eq!(session.face(&ace()), render_card_face(&ace(), "123456"));
        assert_eq!(session.key(&ace()).to_string(), "123456|A-BLADE");
    }

    #[test]
    fn session_clamps_its_config() {
        let mut cfg = ArtConfig::default();
        cfg.torn_edge.steps = 0;
        let session = ArtSession::with_config("x", cfg);
        assert_eq!(session.config().torn_edge.steps, 1);
        assert_eq!(session.textures(&ace()).torn_edge.points.len(), 8);
    }

    #[test]
    fn daily_seed_format() {
        assert_eq!(daily_seed(2026, 3, 7), "daily-2026-03-07");
        assert_eq!(ArtSession::daily(2026, 10, 18).seed(), "daily-2026-10-18");
    }

    #[test]
    fn default_session_uses_default_seed() {
        let session = ArtSession::default();
        assert_eq!(session.seed(), DEFAULT_SEED);
        assert_eq!(session.deck().deal(), build_deck(DEFAULT_SEED).deal());
    }
}

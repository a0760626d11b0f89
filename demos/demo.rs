//! End-to-end tour of the deck and card-art API.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Deck** — the seeded deck for the default seed, and the opening hands
//!    two different games deal from that same seed.
//! 2. **Art** — one card face rendered twice (identical), its texture
//!    primitive counts, and the shared back.
//! 3. **Manifest** — the JSON payload a browser client would receive.

use samurai_deck::{
    build_deck, hand_manifest, render_card_back, render_card_face, ArtSession, Card, GameKind,
    DEFAULT_SEED,
};

fn hand_str(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() {
    tracing_subscriber::fmt::init();

    // ── Deck ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Deck for seed {DEFAULT_SEED:?} ══");
    let mut deck = build_deck(DEFAULT_SEED);
    println!("  First five: {}", hand_str(&deck.deal_n(5)));
    println!("  Remaining:  {}", deck.remaining());

    let session = ArtSession::new(DEFAULT_SEED);
    for game in [GameKind::Duel, GameKind::Showdown] {
        let hand = session.game_deck(game).deal_n(5);
        println!("  {:<10} opening hand: {}", game.to_string(), hand_str(&hand));
    }

    // ── Art ────────────────────────────────────────────────────────────────
    println!();
    println!("══ Card art ══");
    let card = session.deck().deal();
    let a = render_card_face(&card, DEFAULT_SEED);
    let b = render_card_face(&card, DEFAULT_SEED);
    let tex = session.textures(&card);
    println!("  {} ({} • {}, {} Clan)", card, card.symbol(), card.title(), card.clan_name());
    println!("  Key:       {}", session.key(&card));
    println!("  SVG bytes: {}  reproducible: {}", a.len(), a == b);
    println!(
        "  Texture:   {} edge points, {} fibers, {} ink blobs ({} dripping)",
        tex.torn_edge.points.len(),
        tex.fibers.len(),
        tex.blobs.len(),
        tex.blobs.iter().filter(|b| b.drip.is_some()).count(),
    );
    println!("  Back bytes: {}  same as session back: {}", render_card_back().len(), session.back() == &render_card_back());

    // ── Manifest ───────────────────────────────────────────────────────────
    println!();
    println!("══ Manifest (faces truncated) ══");
    let hand = session.deck().deal_n(2);
    match hand_manifest(&session, &hand) {
        Ok(mut v) => {
            for entry in v["cards"].as_array_mut().into_iter().flatten() {
                entry["face"] = "data:image/svg+xml;…".into();
            }
            v["back"] = "data:image/svg+xml;…".into();
            println!("{}", serde_json::to_string_pretty(&v).unwrap_or_default());
        }
        Err(err) => eprintln!("manifest failed: {err}"),
    }
}

//! Write every card face of a seeded deck, plus the back, as SVG files.
//!
//! Run with: `cargo run --example gallery -- [SEED] [OUT_DIR]`
//!
//! Defaults to seed `123456` and `./gallery`. Files are named by card id
//! (`A-BLADE.svg`, …) and the back is `back.svg`. Running twice with the
//! same seed rewrites byte-identical files.

use std::fs;
use std::path::PathBuf;

use samurai_deck::{ArtSession, DEFAULT_SEED};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().unwrap_or_else(|| DEFAULT_SEED.to_string());
    let out = PathBuf::from(args.next().unwrap_or_else(|| "gallery".to_string()));
    fs::create_dir_all(&out)?;

    let session = ArtSession::new(seed);
    let deck = session.deck();
    for card in deck.cards() {
        fs::write(out.join(format!("{}.svg", card.id())), session.face(card).as_str())?;
    }
    fs::write(out.join("back.svg"), session.back().as_str())?;

    println!(
        "wrote {} faces and the back for seed {:?} to {}",
        deck.cards().len(),
        session.seed(),
        out.display()
    );
    Ok(())
}

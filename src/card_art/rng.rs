//! Seed hashing, the mulberry32 generator and per-feature sub-seeds.
//!
//! Every random decision in the crate flows through this module:
//!
//! 1. A seed string is folded into a `u32` with [`hash32`] (FNV-1a).
//! 2. That integer, optionally XORed with a salt, seeds a [`Mulberry32`].
//! 3. Card art never reuses the deck generator. Each visual feature gets its
//!    own generator from [`derive_sub_seed`], keyed on `seed|cardId`.
//!
//! None of this is cryptographically secure. It only has to be reproducible.

use std::fmt;

use rand::{RngCore, SeedableRng};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 32-bit FNV-1a over the UTF-16 code units of `s`.
///
/// Code units rather than bytes so that hashes agree with what a browser
/// computes from `charCodeAt`, which keeps stored seeds portable.
pub fn hash32(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// A source of uniform floats in `[0, 1)`.
///
/// Texture generators and the deck shuffle only ever need this one
/// capability, so they take `R: SeededRng` and tests can drive them with a
/// scripted stub.
pub trait SeededRng {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[lo, lo + span)`.
    fn range(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_f64() * span
    }

    /// Uniform value in `[-1, 1)`.
    fn signed_unit(&mut self) -> f64 {
        -1.0 + self.next_f64() * 2.0
    }

    /// Uniform index in `0..n`, computed as `floor(next * n)`.
    fn below(&mut self, n: usize) -> usize {
        // next_f64 < 1.0 so the product never reaches n; min() guards n == 0.
        ((self.next_f64() * n as f64) as usize).min(n.saturating_sub(1))
    }
}

/// mulberry32: a 32-bit state, one add and two multiply-xorshift rounds per
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generator seeded directly from a string hash.
    pub fn from_str_seed(seed: &str) -> Self {
        Self::new(hash32(seed))
    }

    /// Generator seeded from a string hash XORed with `salt`.
    pub fn salted(seed: &str, salt: u32) -> Self {
        Self::new(hash32(seed) ^ salt)
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl SeededRng for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

// ---------------------------------------------------------------------------
// Sub-seeds
// ---------------------------------------------------------------------------

/// The independently seeded visual features of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    TornEdge,
    Fiber,
    InkWash,
    CardBack,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::TornEdge,
        Feature::Fiber,
        Feature::InkWash,
        Feature::CardBack,
    ];

    pub fn salt(self) -> u32 {
        match self {
            Feature::TornEdge => 0xA5A5_A5A5,
            Feature::Fiber    => 0x33CC_AA11,
            Feature::InkWash  => 0x1B87_3593,
            Feature::CardBack => 0x5BD1_E995,
        }
    }
}

/// Key under which a card face is generated: `seed|cardId`.
///
/// Two renders with equal keys are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtKey {
    pub seed: String,
    pub card_id: String,
}

impl ArtKey {
    pub fn new(seed: impl Into<String>, card_id: impl Into<String>) -> Self {
        Self { seed: seed.into(), card_id: card_id.into() }
    }
}

impl fmt::Display for ArtKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.seed, self.card_id)
    }
}

/// Fixed key the card back derives its texture from. No seed and no card id
/// take part, so the back is identical everywhere.
pub const CARD_BACK_KEY: &str = "card-back";

/// `hash32(key) ^ salt(feature)`.
pub fn derive_sub_seed(key: &str, feature: Feature) -> u32 {
    hash32(key) ^ feature.salt()
}

/// Fresh generator for one feature of one key.
pub fn feature_rng(key: &str, feature: Feature) -> Mulberry32 {
    Mulberry32::new(derive_sub_seed(key, feature))
}

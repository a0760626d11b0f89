//! Procedural paper texture: torn-edge outline, fiber strokes, ink wash.
//!
//! Each generator is a pure function of the generator it is handed. Given the
//! same [`SeededRng`] sequence it returns the same primitives, and each
//! primitive formats itself with fixed precision, so the SVG text is
//! reproducible too.
//!
//! Every card seeds the three generators separately (see
//! [`crate::card_art::rng::derive_sub_seed`]), so e.g. the number of fibers on
//! a card says nothing about where its ink blobs land.

use std::f64::consts::TAU;

use crate::card_art::{
    config::{Rgb, TornEdgeParams},
    rng::{feature_rng, ArtKey, Feature, SeededRng},
    svg::{f1, f2, f3},
};

/// Outline walked by the torn edge: a rounded rectangle inset into the card.
const EDGE_X: f64 = 14.0;
const EDGE_Y: f64 = 14.0;
const EDGE_W: f64 = 192.0;
const EDGE_H: f64 = 280.0;
const EDGE_R: f64 = 20.0;

const FIBER_MIN: usize = 28;
const FIBER_SPREAD: usize = 18;

const BLOB_MIN: usize = 3;
const BLOB_SPREAD: usize = 3;
const DRIP_CHANCE: f64 = 0.55;

// ---------------------------------------------------------------------------
// Torn edge
// ---------------------------------------------------------------------------

/// Closed, jittered polygon used as the card's clip mask.
#[derive(Debug, Clone, PartialEq)]
pub struct TornEdge {
    pub start: (f64, f64),
    pub points: Vec<(f64, f64)>,
}

impl TornEdge {
    /// Walk top, right, bottom, then left side, `steps + 1` points per side.
    pub fn generate<R: SeededRng>(rng: &mut R, params: TornEdgeParams) -> Self {
        let TornEdgeParams { steps, jitter } = params.clamped();
        let mut jit = || rng.signed_unit() * jitter;
        let span_w = EDGE_W - 2.0 * EDGE_R;
        let span_h = EDGE_H - 2.0 * EDGE_R;

        let mut points = Vec::with_capacity(4 * (steps as usize + 1));
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            points.push((EDGE_X + EDGE_R + t * span_w + jit(), EDGE_Y + jit()));
        }
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            points.push((EDGE_X + EDGE_W + jit(), EDGE_Y + EDGE_R + t * span_h + jit()));
        }
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            points.push((EDGE_X + EDGE_W - EDGE_R - t * span_w + jit(), EDGE_Y + EDGE_H + jit()));
        }
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            points.push((EDGE_X + jit(), EDGE_Y + EDGE_H - EDGE_R - t * span_h + jit()));
        }

        TornEdge { start: (EDGE_X + EDGE_R, EDGE_Y), points }
    }

    /// SVG path data, `M … L … Z`.
    pub fn path_data(&self) -> String {
        let mut d = format!("M {} {}", f1(self.start.0), f1(self.start.1));
        for &(x, y) in &self.points {
            d.push_str(" L ");
            d.push_str(&f1(x));
            d.push(' ');
            d.push_str(&f1(y));
        }
        d.push_str(" Z");
        d
    }
}

// ---------------------------------------------------------------------------
// Fibers
// ---------------------------------------------------------------------------

/// A short, faint line in the paper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiberStroke {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
    pub width: f64,
}

impl FiberStroke {
    pub fn to_svg(&self, ink: Rgb) -> String {
        format!(
            r#"<path d="M {} {} L {} {}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            f1(self.from.0), f1(self.from.1), f1(self.to.0), f1(self.to.1),
            ink.rgba(self.opacity), f2(self.width),
        )
    }
}

/// 28 to 45 strokes scattered over the card body.
pub fn fiber_strokes<R: SeededRng>(rng: &mut R) -> Vec<FiberStroke> {
    let n = FIBER_MIN + rng.below(FIBER_SPREAD);
    (0..n)
        .map(|_| {
            let x1 = rng.range(18.0, 184.0);
            let y1 = rng.range(18.0, 272.0);
            let len = rng.range(10.0, 24.0);
            let ang = rng.next_f64() * TAU;
            let opacity = rng.range(0.03, 0.05);
            let width = rng.range(0.6, 0.9);
            FiberStroke {
                from: (x1, y1),
                to: (x1 + ang.cos() * len, y1 + ang.sin() * len),
                opacity,
                width,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ink wash
// ---------------------------------------------------------------------------

/// Thin run of ink below a blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drip {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

/// Soft closed curve of three cubic segments around `centre`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkBlob {
    pub centre: (f64, f64),
    pub size: f64,
    pub opacity: f64,
    /// Control-point offsets `(dx1, dy1, dx2, dy2)`.
    pub offsets: (f64, f64, f64, f64),
    pub drip: Option<Drip>,
}

impl InkBlob {
    pub fn path_data(&self) -> String {
        let (x, y) = self.centre;
        let s = self.size;
        let (dx1, dy1, dx2, dy2) = self.offsets;
        let p = |px: f64, py: f64| format!("{} {}", f2(px), f2(py));
        format!(
            "M {} C {}, {}, {} C {}, {}, {} C {}, {}, {} Z",
            p(x, y),
            p(x + dx1, y - dy1), p(x + s, y - s * 0.2), p(x + s * 0.6, y + s * 0.2),
            p(x + s * 0.2, y + s * 0.7), p(x - dx2, y + s * 0.4), p(x - s * 0.4, y + s * 0.1),
            p(x - s * 0.9, y - s * 0.2), p(x - dx1, y - dy2), p(x, y),
        )
    }

    pub fn to_svg(&self, accent: Rgb) -> String {
        let fill = accent.rgba(1.0);
        let mut out = format!(
            r#"<path d="{}" fill="{}" opacity="{}"/>"#,
            self.path_data(), fill, f3(self.opacity),
        );
        if let Some(drip) = self.drip {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" opacity="{}"/>"#,
                f1(drip.x), f1(drip.y), f1(drip.width), f1(drip.height), fill, f3(drip.opacity),
            ));
        }
        out
    }
}

/// 3 to 5 blobs, roughly half of them dripping.
pub fn ink_wash<R: SeededRng>(rng: &mut R) -> Vec<InkBlob> {
    let n = BLOB_MIN + rng.below(BLOB_SPREAD);
    (0..n)
        .map(|_| {
            let x = rng.range(44.0, 132.0);
            let y = rng.range(70.0, 182.0);
            let s = rng.range(22.0, 34.0);
            let opacity = rng.range(0.06, 0.12);

            let dx1 = rng.signed_unit() * s * 0.6;
            let dy1 = rng.signed_unit() * s * 0.4;
            let dx2 = rng.signed_unit() * s * 0.5;
            let dy2 = rng.signed_unit() * s * 0.6;

            let drip = (rng.next_f64() < DRIP_CHANCE).then(|| {
                let dx = rng.range(-12.0, 24.0);
                let height = rng.range(18.0, 40.0);
                let width = rng.range(2.0, 3.0);
                Drip { x: x + dx, y: y + s * 0.25, width, height, opacity: opacity * 0.55 }
            });

            InkBlob { centre: (x, y), size: s, opacity, offsets: (dx1, dy1, dx2, dy2), drip }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-card bundle
// ---------------------------------------------------------------------------

/// Everything procedural on one card face.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePrimitives {
    pub torn_edge: TornEdge,
    pub fibers: Vec<FiberStroke>,
    pub blobs: Vec<InkBlob>,
}

impl TexturePrimitives {
    /// Generate from the card's key, one sub-seeded generator per feature.
    pub fn for_key(key: &ArtKey, torn_edge: TornEdgeParams) -> Self {
        let key = key.to_string();
        TexturePrimitives {
            torn_edge: TornEdge::generate(&mut feature_rng(&key, Feature::TornEdge), torn_edge),
            fibers: fiber_strokes(&mut feature_rng(&key, Feature::Fiber)),
            blobs: ink_wash(&mut feature_rng(&key, Feature::InkWash)),
        }
    }

    pub fn fibers_svg(&self, ink: Rgb) -> String {
        self.fibers.iter().map(|f| f.to_svg(ink)).collect()
    }

    pub fn ink_svg(&self, accent: Rgb) -> String {
        self.blobs.iter().map(|b| b.to_svg(accent)).collect()
    }
}

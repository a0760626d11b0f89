//! The four clan icons, hand-drawn paths centred on the card body.

use crate::card_art::config::{Palette, Rgb};

/// Icon variants. One per clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Sword,
    Umbrella,
    Fan,
    Mask,
}

impl IconKind {
    pub const ALL: [IconKind; 4] = [IconKind::Sword, IconKind::Umbrella, IconKind::Fan, IconKind::Mask];

    pub fn key(self) -> &'static str {
        match self {
            IconKind::Sword    => "sword",
            IconKind::Umbrella => "umbrella",
            IconKind::Fan      => "fan",
            IconKind::Mask     => "mask",
        }
    }

    pub fn from_key(key: &str) -> Option<IconKind> {
        IconKind::ALL.into_iter().find(|k| k.key() == key)
    }

    /// SVG group for this icon.
    pub fn to_svg(self, palette: &Palette) -> String {
        let ink = palette.ink;
        let shine = Rgb(255, 255, 255);
        let body = match self {
            IconKind::Sword => format!(
                r#"<path d="M-10 -55 L10 -55 L8 22 L-8 22 Z" fill="{ink72}"/><path d="M-12 -55 L0 -84 L12 -55 Z" fill="{ink72}"/><rect x="-30" y="22" width="60" height="10" rx="5" fill="{ink70}"/><rect x="-6" y="32" width="12" height="34" rx="6" fill="{ink58}"/><circle cx="0" cy="22" r="3" fill="{shine18}"/>"#,
                ink72 = ink.rgba(0.72),
                ink70 = ink.rgba(0.70),
                ink58 = ink.rgba(0.58),
                shine18 = shine.rgba(0.18),
            ),
            IconKind::Umbrella => format!(
                r#"<path d="M-72 -10 Q0 -84 72 -10 Q0 12 -72 -10 Z" fill="{ink68}"/><path d="M-72 -10 Q-48 12 -26 -10 Q-4 12 0 -10 Q4 12 26 -10 Q48 12 72 -10" fill="none" stroke="{shine18}" stroke-width="2"/><rect x="-3" y="-10" width="6" height="82" rx="3" fill="{ink58}"/><path d="M3 70 q12 0 12 12 q0 12 -12 12" fill="none" stroke="{ink58}" stroke-width="6" stroke-linecap="round"/>"#,
                ink68 = ink.rgba(0.68),
                ink58 = ink.rgba(0.58),
                shine18 = shine.rgba(0.18),
            ),
            IconKind::Fan => format!(
                r#"<path d="M0 70 L-74 -12 Q0 -78 74 -12 Z" fill="{ink68}"/><path d="M0 70 L0 -68" stroke="{shine20}" stroke-width="2"/><path d="M0 70 L-44 -50" stroke="{shine18}" stroke-width="2"/><path d="M0 70 L44 -50" stroke="{shine18}" stroke-width="2"/><circle cx="0" cy="70" r="7" fill="{ink72}"/>"#,
                ink68 = ink.rgba(0.68),
                ink72 = ink.rgba(0.72),
                shine18 = shine.rgba(0.18),
                shine20 = shine.rgba(0.20),
            ),
            IconKind::Mask => format!(
                r#"<path d="M-62 -34 Q0 -86 62 -34 Q56 56 0 78 Q-56 56 -62 -34 Z" fill="{ink68}"/><path d="M-26 -12 Q-12 -28 0 -12 Q12 -28 26 -12" fill="none" stroke="{shine20}" stroke-width="3" stroke-linecap="round"/><ellipse cx="-18" cy="10" rx="10" ry="12" fill="{shine14}"/><ellipse cx="18" cy="10" rx="10" ry="12" fill="{shine14}"/><path d="M-16 44 Q0 60 16 44" stroke="{accent38}" stroke-width="3" fill="none" stroke-linecap="round"/>"#,
                ink68 = ink.rgba(0.68),
                shine20 = shine.rgba(0.20),
                shine14 = shine.rgba(0.14),
                accent38 = palette.accent.rgba(0.38),
            ),
        };
        format!(r#"<g transform="translate(110 165)">{body}</g>"#)
    }
}

/// Icon group for `key`, or `None` for a key outside the four known icons.
/// Callers skip the layer rather than fail.
pub fn icon_svg(key: &str, palette: &Palette) -> Option<String> {
    IconKind::from_key(key).map(|kind| kind.to_svg(palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_art::models::Clan;

    #[test]
    fn every_clan_has_an_icon() {
        for clan in Clan::ALL {
            assert!(IconKind::from_key(clan.icon_key()).is_some(), "{clan} has no icon");
        }
    }

    #[test]
    fn unknown_key_has_no_icon() {
        assert!(icon_svg("lantern", &Palette::default()).is_none());
        assert!(icon_svg("", &Palette::default()).is_none());
        assert!(icon_svg("Sword", &Palette::default()).is_none());
    }

    #[test]
    fn icons_are_distinct_and_centred() {
        let palette = Palette::default();
        let all: Vec<String> = IconKind::ALL.iter().map(|k| k.to_svg(&palette)).collect();
        for (i, a) in all.iter().enumerate() {
            assert!(a.starts_with(r#"<g transform="translate(110 165)">"#));
            assert!(a.ends_with("</g>"));
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn icons_follow_the_palette_ink() {
        let palette = Palette { ink: Rgb(1, 2, 3), ..Palette::default() };
        let svg = IconKind::Sword.to_svg(&palette);
        assert!(svg.contains("rgba(1,2,3,0.72)"));
        assert!(!svg.contains("rgba(17,24,39"));
    }
}

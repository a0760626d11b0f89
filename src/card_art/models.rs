use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card_art::error::{ArtError, ArtResult};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// A suit. The games call them clans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Clan {
    Blade,
    Wagasa,
    Fan,
    Mask,
}

impl Clan {
    /// Canonical deck order.
    pub const ALL: [Clan; 4] = [Clan::Blade, Clan::Wagasa, Clan::Fan, Clan::Mask];

    pub fn key(self) -> &'static str {
        match self {
            Clan::Blade  => "BLADE",
            Clan::Wagasa => "WAGASA",
            Clan::Fan    => "FAN",
            Clan::Mask   => "MASK",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Clan::Blade  => "Blade",
            Clan::Wagasa => "Umbrella",
            Clan::Fan    => "Fan",
            Clan::Mask   => "Mask",
        }
    }

    /// Key into the icon set, see [`crate::card_art::icons`].
    pub fn icon_key(self) -> &'static str {
        match self {
            Clan::Blade  => "sword",
            Clan::Wagasa => "umbrella",
            Clan::Fan    => "fan",
            Clan::Mask   => "mask",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Clan::Blade  => "刀",
            Clan::Wagasa => "傘",
            Clan::Fan    => "扇",
            Clan::Mask   => "鬼",
        }
    }

    pub fn from_key(key: &str) -> Option<Clan> {
        Clan::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Clan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rank 2..=14 where 14 = Ace.
///
/// Only the values in [`Rank::ALL`] name real cards. Other values format as
/// `"?"` and their ids do not parse back, so build ranks from outside input
/// with [`Rank::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank(2), Rank(3), Rank(4), Rank(5), Rank(6), Rank(7), Rank(8),
        Rank(9), Rank(10), Rank(11), Rank(12), Rank(13), Rank(14),
    ];

    /// `Some` for 2..=14.
    pub fn new(value: u8) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.0 == value)
    }

    pub fn is_valid(self) -> bool {
        (2..=14).contains(&self.0)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "10",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Flavour title printed next to the symbol.
    pub fn title(self) -> &'static str {
        match self.0 {
            2  => "Ashigaru",
            3  => "Scout",
            4  => "Guard",
            5  => "Spearman",
            6  => "Archer",
            7  => "Ronin",
            8  => "Duelist",
            9  => "Captain",
            10 => "Warlord",
            11 => "Sensei",
            12 => "Daimyo",
            13 => "Shogun",
            14 => "Legend",
            _  => "Unknown",
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the 52 cards.
///
/// Serializes as the flat record the browser client reads
/// (`id`, `rank`, `value`, `title`, `clanKey`, `clanName`, `icon`, `kanji`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRecord", try_from = "CardRecord")]
pub struct Card {
    pub rank: Rank,
    pub clan: Clan,
}

impl Card {
    /// `rank` must be one of [`Rank::ALL`]. Use [`Card::try_new`] for ranks
    /// from outside input.
    pub fn new(rank: Rank, clan: Clan) -> Self {
        debug_assert!(rank.is_valid(), "rank {} out of range", rank.0);
        Card { rank, clan }
    }

    /// Checked constructor: fails with `UnknownCard` on a rank outside 2..=14.
    pub fn try_new(rank: Rank, clan: Clan) -> ArtResult<Self> {
        if !rank.is_valid() {
            return Err(ArtError::unknown_card(format!("{}-{}", rank.0, clan.key())));
        }
        Ok(Card { rank, clan })
    }

    /// Composite identifier, e.g. `"A-BLADE"` or `"10-MASK"`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.rank.symbol(), self.clan.key())
    }

    pub fn symbol(&self) -> &'static str { self.rank.symbol() }
    pub fn value(&self) -> u8 { self.rank.value() }
    pub fn title(&self) -> &'static str { self.rank.title() }
    pub fn clan_key(&self) -> &'static str { self.clan.key() }
    pub fn clan_name(&self) -> &'static str { self.clan.name() }
    pub fn icon_key(&self) -> &'static str { self.clan.icon_key() }
    pub fn glyph(&self) -> &'static str { self.clan.glyph() }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank.symbol(), self.clan.key())
    }
}

impl FromStr for Card {
    type Err = ArtError;

    fn from_str(id: &str) -> ArtResult<Self> {
        let (symbol, clan) = id
            .split_once('-')
            .ok_or_else(|| ArtError::unknown_card(id))?;
        let rank = Rank::from_symbol(symbol).ok_or_else(|| ArtError::unknown_card(id))?;
        let clan = Clan::from_key(clan).ok_or_else(|| ArtError::unknown_card(id))?;
        Ok(Card { rank, clan })
    }
}

/// Wire form of [`Card`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    id: String,
    rank: String,
    value: u8,
    title: String,
    clan_key: String,
    clan_name: String,
    icon: String,
    kanji: String,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        CardRecord {
            id: card.id(),
            rank: card.symbol().to_string(),
            value: card.value(),
            title: card.title().to_string(),
            clan_key: card.clan_key().to_string(),
            clan_name: card.clan_name().to_string(),
            icon: card.icon_key().to_string(),
            kanji: card.glyph().to_string(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = ArtError;

    // The id is authoritative; the other fields are derived data.
    fn try_from(record: CardRecord) -> ArtResult<Self> {
        record.id.parse()
    }
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// The mini-games sharing one seed. Each draws its own shuffle of the seeded
/// deck so two games started on the same seed do not deal the same cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Duel,
    Tricks,
    Relics,
    Showdown,
    Lanes,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Duel,
        GameKind::Tricks,
        GameKind::Relics,
        GameKind::Showdown,
        GameKind::Lanes,
    ];

    /// XORed into the seed hash for this game's shuffle.
    pub fn salt(self) -> u32 {
        match self {
            GameKind::Duel     => 0x1111,
            GameKind::Tricks   => 0x2222,
            GameKind::Relics   => 0x3333,
            GameKind::Showdown => 0x4444,
            GameKind::Lanes    => 0x5555,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameKind::Duel     => "Iai Duel",
            GameKind::Tricks   => "Tricks",
            GameKind::Relics   => "Relics",
            GameKind::Showdown => "Showdown",
            GameKind::Lanes    => "Lanes",
        };
        write!(f, "{}", s)
    }
}

use serde_json::{json, Value};

use crate::card_art::{ArtResult, ArtSession, Card, GameKind};

/// One card as the browser client reads it: the flat card record plus its
/// face art as a data URI.
fn card_entry(session: &ArtSession, card: &Card) -> ArtResult<Value> {
    let mut entry = serde_json::to_value(card)?;
    if let Value::Object(map) = &mut entry {
        map.insert("face".to_string(), Value::String(session.face(card).to_data_uri()));
    }
    Ok(entry)
}

fn card_entries(session: &ArtSession, cards: &[Card]) -> ArtResult<Vec<Value>> {
    cards.iter().map(|c| card_entry(session, c)).collect()
}

/// Payload for a set of cards on screen (a hand, a market row, a trick).
///
/// ```json
/// { "seed": "...", "back": "data:...", "cards": [ { "id": "A-BLADE", ..., "face": "data:..." } ] }
/// ```
pub fn hand_manifest(session: &ArtSession, cards: &[Card]) -> ArtResult<Value> {
    Ok(json!({
        "seed": session.seed(),
        "back": session.back().to_data_uri(),
        "cards": card_entries(session, cards)?,
    }))
}

/// Payload for the whole seeded deck, in deal order.
pub fn deck_manifest(session: &ArtSession) -> ArtResult<Value> {
    let deck = session.deck();
    hand_manifest(session, deck.cards())
}

/// Deal the opening hand of `game` and describe it, along with how many
/// cards are left to draw.
pub fn opening_hand_manifest(
    session: &ArtSession,
    game: GameKind,
    hand_size: usize,
) -> ArtResult<Value> {
    let mut deck = session.game_deck(game);
    let hand = deck.deal_n(hand_size);
    let mut payload = hand_manifest(session, &hand)?;
    if let Value::Object(map) = &mut payload {
        map.insert("game".to_string(), json!(game));
        map.insert("title".to_string(), json!(game.to_string()));
        map.insert("remaining".to_string(), json!(deck.remaining()));
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_manifest_lists_cards_with_faces() {
        let session = ArtSession::new("123456");
        let cards: Vec<Card> = ["A-BLADE", "10-MASK"].iter().map(|id| id.parse().unwrap()).collect();
        let v = hand_manifest(&session, &cards).unwrap();

        assert_eq!(v["seed"], "123456");
        assert!(v["back"].as_str().unwrap().starts_with("data:image/svg+xml;charset=utf-8,"));
        let entries = v["cards"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "A-BLADE");
        assert_eq!(entries[0]["title"], "Legend");
        assert_eq!(entries[1]["rank"], "10");
        assert_eq!(
            entries[1]["face"].as_str().unwrap(),
            session.face(&cards[1]).to_data_uri()
        );
    }

    #[test]
    fn deck_manifest_follows_deal_order() {
        let session = ArtSession::new("123456");
        let v = deck_manifest(&session).unwrap();
        let entries = v["cards"].as_array().unwrap();
        assert_eq!(entries.len(), 52);
        assert_eq!(entries[0]["id"], "9-BLADE");
        assert_eq!(entries[1]["id"], "5-MASK");
    }

    #[test]
    fn opening_hand_reports_remaining_cards() {
        let session = ArtSession::new("123456");
        let v = opening_hand_manifest(&session, GameKind::Duel, 5).unwrap();
        assert_eq!(v["game"], "Duel");
        assert_eq!(v["title"], "Iai Duel");
        assert_eq!(v["remaining"], 47);
        assert_eq!(v["cards"][0]["id"], "10-BLADE");
    }

    #[test]
    fn manifest_cards_deserialize_back() {
        let session = ArtSession::new("round");
        let hand = session.deck().deal_n(3);
        let v = hand_manifest(&session, &hand).unwrap();
        let parsed: Vec<Card> = serde_json::from_value(v["cards"].clone()).unwrap();
        assert_eq!(parsed, hand);
    }
}

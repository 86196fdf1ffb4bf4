//! First pipeline stage: reduce raw header maps to the uniform records the
//! aggregation consumes. Pure transformation; malformed games are skipped
//! and counted, never fatal.

use crate::model::{GameRecord, Outcome};
use crate::pgn::Headers;

// Required tags, matched exactly (PGN tag names are case-sensitive).
const TAG_ECO: &str = "ECO";
const TAG_RESULT: &str = "Result";
const TAG_WHITE: &str = "White";
const TAG_BLACK: &str = "Black";

/// Output of [`normalize`]: the surviving records in input order, plus the
/// number of games dropped along the way.
pub struct Normalized {
    pub records: Vec<GameRecord>,
    /// Games missing a required tag or carrying an undecided result.
    pub malformed: u64,
}

/// Reduce each raw header map to (eco, outcome, white, black).
///
/// The ECO value passes through untouched; classification of odd values
/// happens at aggregation time. A game missing any of the four tags, or
/// whose `Result` is not a finished one, is dropped and counted.
pub fn normalize(raw: &[Headers]) -> Normalized {
    let mut records = Vec::with_capacity(raw.len());
    let mut malformed = 0u64;

    for (idx, headers) in raw.iter().enumerate() {
        match record_from_headers(headers) {
            Some(rec) => records.push(rec),
            None => {
                malformed += 1;
                log::warn!("game {}: required header missing or result undecided, skipped", idx + 1);
            }
        }
    }

    Normalized { records, malformed }
}

fn record_from_headers(h: &Headers) -> Option<GameRecord> {
    let eco = h.get(TAG_ECO)?;
    let outcome = Outcome::from_tag(h.get(TAG_RESULT)?)?;
    let white = h.get(TAG_WHITE)?;
    let black = h.get(TAG_BLACK)?;
    Some(GameRecord {
        eco: eco.clone(),
        outcome,
        white: white.clone(),
        black: black.clone(),
    })
}

//! Builds the per-opening statistics table for one subject player, and dumps
//! it as CSV when asked.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::eco::{self, EcoNames};
use crate::model::{GameRecord, OpeningStat, Side};

/// Per-opening statistics for one player. Built once per run by
/// [`build_table`]; read-only afterwards.
///
/// Codes keep their first-seen order for iteration; the ranking queries in
/// [`crate::rank`] impose their own ordering on top.
#[derive(Debug, Default)]
pub struct OpeningTable {
    stats: HashMap<String, OpeningStat>,
    order: Vec<String>,
    total_games: u64,
    foreign_games: u64,
}

impl OpeningTable {
    pub fn get(&self, code: &str) -> Option<&OpeningStat> {
        self.stats.get(code)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpeningStat)> {
        self.order.iter().map(|code| (code.as_str(), &self.stats[code]))
    }

    /// Number of distinct opening codes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of records aggregated, foreign ones included. This is the
    /// corpus size the significance filter scales against.
    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    /// Records where neither player name matched the subject. Their opening
    /// still counted as played, but no outcome counter moved.
    pub fn foreign_games(&self) -> u64 {
        self.foreign_games
    }
}

/// One pass over the records. Every record bumps its opening's game count;
/// records where the subject actually sat at the board also bump the
/// per-color outcome counters.
pub fn build_table(records: &[GameRecord], subject: &str) -> OpeningTable {
    let mut stats: HashMap<String, OpeningStat> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut foreign_games = 0u64;

    for rec in records {
        let code = eco::table_key(&rec.eco);
        if !stats.contains_key(code) {
            order.push(code.to_string());
        }
        let entry = stats.entry(code.to_string()).or_default();
        entry.games += 1;

        match rec.side_of(subject) {
            Some(side) => entry.add(side, rec.outcome),
            None => {
                foreign_games += 1;
                log::warn!(
                    "{} vs {}: subject {:?} on neither side; {} counted without an outcome",
                    rec.white,
                    rec.black,
                    subject,
                    code
                );
            }
        }
    }

    OpeningTable {
        stats,
        order,
        total_games: records.len() as u64,
        foreign_games,
    }
}

/// Write the table as CSV, most-played openings first (ties by code).
/// Undefined win rates become empty cells rather than zeros.
pub fn write_csv(table: &OpeningTable, names: &EcoNames, out_path: &Path) -> io::Result<()> {
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|(ca, sa), (cb, sb)| sb.games.cmp(&sa.games).then_with(|| ca.cmp(cb)));

    let mut f = File::create(out_path)?;
    writeln!(
        f,
        "eco,name,games,wins_white,losses_white,draws_white,wins_black,losses_black,draws_black,win_rate_white,win_rate_black"
    )?;
    for (code, s) in entries {
        writeln!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{}",
            code,
            escape_csv(names.name_of(code).unwrap_or("")),
            s.games,
            s.wins_white,
            s.losses_white,
            s.draws_white,
            s.wins_black,
            s.losses_black,
            s.draws_black,
            fmt_rate(s.win_rate(Side::White)),
            fmt_rate(s.win_rate(Side::Black)),
        )?;
    }
    Ok(())
}

fn fmt_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{:.3}", r)).unwrap_or_default()
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outcome;

    fn rec(eco: &str, outcome: Outcome, white: &str, black: &str) -> GameRecord {
        GameRecord {
            eco: eco.into(),
            outcome,
            white: white.into(),
            black: black.into(),
        }
    }

    fn counter_sum(s: &OpeningStat) -> u64 {
        s.wins_white + s.losses_white + s.draws_white + s.wins_black + s.losses_black + s.draws_black
    }

    #[test]
    fn games_equal_counter_sums_when_subject_always_plays() {
        let records = vec![
            rec("B90", Outcome::WhiteWin, "alice", "bob"),
            rec("B90", Outcome::BlackWin, "carol", "alice"),
            rec("C20", Outcome::Draw, "alice", "dave"),
        ];
        let table = build_table(&records, "alice");
        for (code, stat) in table.iter() {
            assert_eq!(stat.games, counter_sum(stat), "invariant broken for {code}");
        }
        assert_eq!(table.total_games(), 3);
        assert_eq!(table.foreign_games(), 0);
    }

    #[test]
    fn two_wins_one_loss_as_white_gives_two_thirds() {
        let records = vec![
            rec("B90", Outcome::WhiteWin, "A", "x"),
            rec("B90", Outcome::WhiteWin, "A", "y"),
            rec("B90", Outcome::BlackWin, "A", "z"),
        ];
        let table = build_table(&records, "A");
        let stat = table.get("B90").unwrap();
        assert_eq!(stat.wins_white, 2);
        assert_eq!(stat.losses_white, 1);
        let rate = stat.win_rate(Side::White).unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", rate), "66.67");
    }

    #[test]
    fn foreign_records_count_the_opening_but_no_outcome() {
        let records = vec![
            rec("E60", Outcome::WhiteWin, "carol", "dave"),
            rec("E60", Outcome::BlackWin, "alice", "dave"),
        ];
        let table = build_table(&records, "alice");
        let stat = table.get("E60").unwrap();
        assert_eq!(stat.games, 2);
        assert_eq!(counter_sum(stat), 1);
        assert_eq!(table.foreign_games(), 1);
        assert_eq!(table.total_games(), 2);
    }

    #[test]
    fn odd_codes_collapse_into_the_unclassified_bucket() {
        let records = vec![
            rec("", Outcome::WhiteWin, "alice", "bob"),
            rec("?", Outcome::BlackWin, "bob", "alice"),
            rec("B90", Outcome::Draw, "alice", "bob"),
        ];
        let table = build_table(&records, "alice");
        assert_eq!(table.len(), 2);
        let bucket = table.get(eco::UNCLASSIFIED).unwrap();
        assert_eq!(bucket.games, 2);
        assert_eq!(bucket.wins_white, 1);
        assert_eq!(bucket.wins_black, 1);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut records = vec![
            rec("B90", Outcome::WhiteWin, "alice", "bob"),
            rec("C20", Outcome::Draw, "bob", "alice"),
            rec("B90", Outcome::BlackWin, "alice", "bob"),
            rec("A00", Outcome::BlackWin, "carol", "alice"),
        ];
        let forward = build_table(&records, "alice");
        records.reverse();
        let backward = build_table(&records, "alice");

        assert_eq!(forward.total_games(), backward.total_games());
        assert_eq!(forward.len(), backward.len());
        for (code, stat) in forward.iter() {
            assert_eq!(Some(stat), backward.get(code), "stats differ for {code}");
        }
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let records = vec![
            rec("C20", Outcome::Draw, "alice", "bob"),
            rec("A00", Outcome::Draw, "alice", "bob"),
            rec("C20", Outcome::Draw, "alice", "bob"),
            rec("B90", Outcome::Draw, "alice", "bob"),
        ];
        let table = build_table(&records, "alice");
        let codes: Vec<&str> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, ["C20", "A00", "B90"]);
    }

    #[test]
    fn empty_input_builds_an_empty_table() {
        let table = build_table(&[], "alice");
        assert!(table.is_empty());
        assert_eq!(table.total_games(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn csv_escaping_quotes_commas_and_quotes() {
        assert_eq!(escape_csv("Sicilian"), "Sicilian");
        assert_eq!(escape_csv("Sicilian, Najdorf"), "\"Sicilian, Najdorf\"");
        assert_eq!(escape_csv("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn undefined_rates_render_as_empty_cells() {
        assert_eq!(fmt_rate(None), "");
        assert_eq!(fmt_rate(Some(200.0 / 3.0)), "66.667");
    }
}

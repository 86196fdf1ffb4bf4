//! Ranking and usage queries over a built [`OpeningTable`]. Pure reads; the
//! table is never mutated and an empty table just yields empty output.

use crate::aggregator::OpeningTable;
use crate::model::Side;

/// Direction of a win-rate ranking.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RankOrder {
    /// Highest win rate first.
    Best,
    /// Lowest win rate first.
    Worst,
}

/// One row of a win-rate ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct RankRow {
    pub eco: String,
    pub games: u64,
    pub win_rate: f64,
}

/// Openings ranked by win rate for one side.
///
/// Openings with at most `total_games * min_sample_fraction` games are
/// dropped as statistically insignificant, and openings with no decided
/// games for the side never appear; their rate is undefined, not zero.
/// Ties break by ascending ECO code so output is reproducible regardless
/// of input order.
pub fn rank(
    table: &OpeningTable,
    side: Side,
    order: RankOrder,
    min_sample_fraction: f64,
    limit: usize,
) -> Vec<RankRow> {
    let threshold = table.total_games() as f64 * min_sample_fraction;

    let mut rows: Vec<RankRow> = table
        .iter()
        .filter(|(_, stat)| stat.games as f64 > threshold)
        .filter_map(|(code, stat)| {
            stat.win_rate(side).map(|win_rate| RankRow {
                eco: code.to_string(),
                games: stat.games,
                win_rate,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        let by_rate = match order {
            RankOrder::Best => b.win_rate.total_cmp(&a.win_rate),
            RankOrder::Worst => a.win_rate.total_cmp(&b.win_rate),
        };
        by_rate.then_with(|| a.eco.cmp(&b.eco))
    });
    rows.truncate(limit);
    rows
}

/// Openings by how often they were played, most-played first, ties broken
/// by ascending ECO code.
pub fn most_used(table: &OpeningTable, limit: usize) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = table
        .iter()
        .map(|(code, stat)| (code.to_string(), stat.games))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows.truncate(limit);
    rows
}

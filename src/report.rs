//! Plain-text rendering of a finished analysis: player block, best/worst
//! openings per color, most-used openings, and the diagnostic tail.

use std::io::{self, Write};

use chrono::Utc;

use crate::aggregator::OpeningTable;
use crate::eco::EcoNames;
use crate::model::Side;
use crate::rank::{self, RankOrder, RankRow};
use crate::remote::UserProfile;

const RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

pub struct ReportParams {
    pub min_sample_fraction: f64,
    pub rank_limit: usize,
}

/// Render the whole report. Progress/log output goes to stderr elsewhere;
/// this is the program's actual product on stdout.
pub fn write_report<W: Write>(
    w: &mut W,
    subject: &str,
    profile: Option<&UserProfile>,
    table: &OpeningTable,
    names: &EcoNames,
    params: &ReportParams,
    malformed: u64,
) -> io::Result<()> {
    writeln!(w, "{}", RULE)?;
    writeln!(
        w,
        "Opening report for {} (generated {})",
        subject,
        Utc::now().to_rfc3339()
    )?;
    writeln!(w, "{}", RULE)?;

    if let Some(p) = profile {
        write_profile(w, p)?;
    }

    let limit = params.rank_limit;
    let fraction = params.min_sample_fraction;

    write_ranking(
        w,
        &format!("Best {} openings for White:", limit),
        &rank::rank(table, Side::White, RankOrder::Best, fraction, limit),
        names,
    )?;
    write_ranking(
        w,
        &format!("Worst {} openings for White:", limit),
        &rank::rank(table, Side::White, RankOrder::Worst, fraction, limit),
        names,
    )?;
    write_ranking(
        w,
        &format!("Best {} openings for Black:", limit),
        &rank::rank(table, Side::Black, RankOrder::Best, fraction, limit),
        names,
    )?;
    write_ranking(
        w,
        &format!("Worst {} openings for Black:", limit),
        &rank::rank(table, Side::Black, RankOrder::Worst, fraction, limit),
        names,
    )?;

    write_most_used(w, table, names, limit)?;

    writeln!(w)?;
    writeln!(
        w,
        "Games considered: {} ({} distinct openings)",
        table.total_games(),
        table.len()
    )?;
    if malformed > 0 {
        writeln!(w, "Skipped as malformed: {}", malformed)?;
    }
    if table.foreign_games() > 0 {
        writeln!(
            w,
            "Games where {} sat on neither side: {} (opening counted, result ignored)",
            subject,
            table.foreign_games()
        )?;
    }
    writeln!(
        w,
        "Rankings cover openings with more than {} games ({}% of the corpus).",
        table.total_games() as f64 * fraction,
        fraction * 100.0
    )?;
    Ok(())
}

fn write_profile<W: Write>(w: &mut W, p: &UserProfile) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Player: {}", p.username)?;
    writeln!(
        w,
        "  games  {} ({} wins, {} losses, {} draws)",
        p.count.all, p.count.win, p.count.loss, p.count.draw
    )?;
    for (perf, stats) in &p.perfs {
        let Some(rating) = stats.rating else { continue };
        if stats.games == 0 {
            continue;
        }
        writeln!(w, "  {:<14} rating {} over {} games", perf, rating, stats.games)?;
    }
    Ok(())
}

fn write_ranking<W: Write>(
    w: &mut W,
    title: &str,
    rows: &[RankRow],
    names: &EcoNames,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", RULE)?;
    if rows.is_empty() {
        writeln!(w, "  (no openings qualify)")?;
        return Ok(());
    }
    for row in rows {
        writeln!(
            w,
            "  {:<5} {:>5} games {:>8.2}%  {}",
            row.eco,
            row.games,
            row.win_rate,
            names.name_of(&row.eco).unwrap_or("")
        )?;
    }
    Ok(())
}

fn write_most_used<W: Write>(
    w: &mut W,
    table: &OpeningTable,
    names: &EcoNames,
    limit: usize,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w, "Most used openings:")?;
    writeln!(w, "{}", RULE)?;
    let rows = rank::most_used(table, limit);
    if rows.is_empty() {
        writeln!(w, "  (no games)")?;
        return Ok(());
    }
    for (code, games) in rows {
        writeln!(
            w,
            "  {:<5} {:>5} games  {}",
            code,
            games,
            names.name_of(&code).unwrap_or("")
        )?;
    }
    Ok(())
}

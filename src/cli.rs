use std::path::PathBuf;

pub struct Cli {
    pub user: Option<String>,    // subject player (overrides config)
    pub games: Option<u32>,      // max games to download
    pub file: Option<PathBuf>,   // read PGN from a local file, skip the API
    pub out: Option<PathBuf>,    // CSV output path
    pub limit: Option<usize>,    // rows per ranking table
    pub verbose: bool,
    pub help: bool,
}

pub fn parse() -> Cli {
    let mut user: Option<String> = None;
    let mut games: Option<u32> = None;
    let mut file: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut limit: Option<usize> = None;
    let mut verbose = false;
    let mut help = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--user" | "-u" => {
                if let Some(u) = it.next() { user = Some(u); }
            }
            "--games" | "-n" => {
                if let Some(n) = it.next() { games = n.parse().ok(); }
            }
            "--file" | "-f" => {
                if let Some(p) = it.next() { file = Some(PathBuf::from(p)); }
            }
            "--out" | "-o" => {
                if let Some(p) = it.next() { out = Some(PathBuf::from(p)); }
            }
            "--limit" => {
                if let Some(n) = it.next() { limit = n.parse().ok(); }
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => help = true,
            _ => {}
        }
    }

    Cli { user, games, file, out, limit, verbose, help }
}

pub fn print_help() {
    eprintln!(
r#"ecostats: per-opening win/loss report for one lichess player

Usage:
  Download and analyze:
    ecostats --user NAME [--games N] [--out stats.csv] [-v]

  Analyze a saved export (no network):
    ecostats --user NAME --file lichess_NAME.pgn [--out stats.csv] [-v]

Options:
  --user, -u NAME   Player to analyze (also settable in config.toml).
  --games, -n N     Max games to download (default 500).
  --file, -f PATH   Read PGN from PATH instead of the export API.
  --out, -o PATH    Also write the full statistics table as CSV.
  --limit N         Rows per ranking table (default 10).
  -v, --verbose     Detailed timings/logs.
  -h, --help        Show this help.

Notes:
  • Downloads are kept as lichess_NAME.pgn for offline reruns with --file.
  • Set LICHESS_TOKEN (env or .env) to raise the lichess rate limits.
  • Defaults live in config.toml; command-line flags override them.
"#);
}

mod aggregator;
mod cli;
mod config;
mod eco;
mod model;
mod normalize;
mod pgn;
mod rank;
mod remote;
mod report;

use std::path::Path;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = cli::parse();
    if args.help {
        cli::print_help();
        return Ok(());
    }

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let cfg = config::Config::load();

    // CLI overrides config
    let username = match args.user.clone() {
        Some(u) => u,
        None if !cfg.username.is_empty() => cfg.username.clone(),
        None => {
            cli::print_help();
            anyhow::bail!("no player given (use --user or set username in config.toml)");
        }
    };
    let num_games = args.games.unwrap_or(cfg.num_games);
    let rank_limit = args.limit.unwrap_or(cfg.rank_limit);

    // PGN source: a local file when given, the export API otherwise
    let (pgn_text, profile) = match args.file.as_deref() {
        Some(path) => {
            log::info!("loading games from {}", path.display());
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            (text, None)
        }
        None => {
            eprintln!(
                "Loading {} games for {}... (this might take a while)",
                num_games, username
            );
            let saved = remote::saved_games_path(&username);
            let text = remote::download_and_save(&cfg.api_url, &username, num_games, &saved)?;
            let profile = match remote::fetch_profile(&cfg.api_url, &username) {
                Ok(p) => Some(p),
                Err(err) => {
                    log::warn!("profile unavailable: {:#}", err);
                    None
                }
            };
            (text, profile)
        }
    };

    let raw = pgn::parse_games(&pgn_text);
    log::debug!("parsed {} games", raw.len());

    let normalized = normalize::normalize(&raw);
    let table = aggregator::build_table(&normalized.records, &username);
    if table.is_empty() {
        eprintln!("No analyzable games found for {}.", username);
    }

    let names = eco::EcoNames::load(Path::new(&cfg.eco_file)).unwrap_or_else(|err| {
        log::warn!("opening names unavailable: {:#}", err);
        eco::EcoNames::default()
    });
    if names.is_empty() {
        log::warn!("reports will show ECO codes without opening names");
    } else {
        log::debug!("{} opening names loaded from {}", names.len(), cfg.eco_file);
    }

    let params = report::ReportParams {
        min_sample_fraction: cfg.min_sample_fraction,
        rank_limit,
    };
    let stdout = std::io::stdout();
    report::write_report(
        &mut stdout.lock(),
        &username,
        profile.as_ref(),
        &table,
        &names,
        &params,
        normalized.malformed,
    )?;

    if let Some(out) = args.out.as_deref() {
        aggregator::write_csv(&table, &names, out)
            .with_context(|| format!("writing {}", out.display()))?;
        eprintln!("CSV written to {}", out.display());
    }

    Ok(())
}

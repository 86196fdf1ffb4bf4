use serde::Deserialize;

/// Analysis defaults, read from `config.toml` in the working directory.
/// Every field can be overridden on the command line.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub username: String,         // subject player; empty = must come from CLI
    pub num_games: u32,           // games requested from the export API
    pub min_sample_fraction: f64, // significance filter for rankings
    pub rank_limit: usize,        // rows per ranking table
    pub api_url: String,          // lichess-compatible API root
    pub eco_file: String,         // local ECO name database
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: String::new(),
            num_games: 500,
            min_sample_fraction: 0.01,
            rank_limit: 10,
            api_url: "https://lichess.org".to_string(),
            eco_file: "eco.json".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match std::fs::read_to_string("config.toml") {
            Ok(s) => toml::from_str(&s).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.num_games, 500);
        assert!((cfg.min_sample_fraction - 0.01).abs() < f64::EPSILON);
        assert_eq!(cfg.rank_limit, 10);
        assert_eq!(cfg.api_url, "https://lichess.org");
        assert_eq!(cfg.eco_file, "eco.json");
        assert!(cfg.username.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("username = \"alice\"\nnum_games = 50\n").unwrap();
        assert_eq!(cfg.username, "alice");
        assert_eq!(cfg.num_games, 50);
        assert_eq!(cfg.rank_limit, 10);
    }
}

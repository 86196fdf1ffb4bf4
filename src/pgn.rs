//! Minimal PGN intake: split a multi-game export into games and read the
//! header tag pairs. Move text is never interpreted; the analysis only
//! looks at headers.

use std::collections::HashMap;

/// Raw header tags of one game (Tag -> Value).
pub type Headers = HashMap<String, String>;

/// A `[Event ...]` line starts the next game in a multi-game export.
pub fn is_game_start(line: &str) -> bool {
    line.starts_with("[Event ")
}

/// Split an export into games and parse each game's headers.
/// Chunks that yield no tags at all (file preamble, blank runs) are dropped.
pub fn parse_games(text: &str) -> Vec<Headers> {
    let mut games = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if is_game_start(line) && !current.is_empty() {
            push_game(&mut games, &current);
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        push_game(&mut games, &current);
    }

    games
}

fn push_game(games: &mut Vec<Headers>, lines: &[&str]) {
    let headers = parse_headers(lines);
    if !headers.is_empty() {
        games.push(headers);
    }
}

/// Parse `[Tag "Value"]` pairs from one game's lines.
fn parse_headers(lines: &[&str]) -> Headers {
    let mut map = Headers::new();
    for line in lines {
        let line = line.trim();
        if !(line.starts_with('[') && line.ends_with(']')) {
            // move text
            continue;
        }
        let Some(space) = line.find(' ') else { continue };
        let tag = &line[1..space];
        let (Some(open_rel), Some(close)) = (line[space..].find('"'), line.rfind('"')) else {
            continue;
        };
        let open = space + open_rel;
        if close > open {
            map.insert(tag.to_string(), line[open + 1..close].to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_GAME: &str = r#"[Event "Rated Blitz game"]
[Site "https://lichess.org/abcd1234"]
[White "alice"]
[Black "bob"]
[Result "1-0"]
[ECO "B90"]

1. e4 c5 2. Nf3 d6 1-0"#;

    #[test]
    fn parses_headers_of_a_single_game() {
        let games = parse_games(ONE_GAME);
        assert_eq!(games.len(), 1);
        let h = &games[0];
        assert_eq!(h.get("White").map(String::as_str), Some("alice"));
        assert_eq!(h.get("ECO").map(String::as_str), Some("B90"));
        assert_eq!(h.get("Result").map(String::as_str), Some("1-0"));
        // move text never lands in the map
        assert!(!h.contains_key("1. e4 c5 2. Nf3 d6 1-0"));
    }

    #[test]
    fn splits_on_event_tag() {
        let two = format!("{}\n\n{}", ONE_GAME, ONE_GAME.replace("alice", "carol"));
        let games = parse_games(&two);
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].get("White").map(String::as_str), Some("carol"));
    }

    #[test]
    fn values_keep_inner_spaces_and_quotes_are_bounded() {
        let games = parse_games("[Event \"Casual Correspondence game\"]\n[Opening \"Sicilian, Najdorf\"]\n");
        assert_eq!(
            games[0].get("Opening").map(String::as_str),
            Some("Sicilian, Najdorf")
        );
    }

    #[test]
    fn preamble_and_blank_chunks_are_dropped() {
        let text = format!("; export comment\n\n{}", ONE_GAME);
        let games = parse_games(&text);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].get("Black").map(String::as_str), Some("bob"));
    }

    #[test]
    fn empty_input_yields_no_games() {
        assert!(parse_games("").is_empty());
        assert!(parse_games("\n\n").is_empty());
    }
}

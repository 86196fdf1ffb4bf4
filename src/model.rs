/// Which color the subject played in a game.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    White,
    Black,
}

/// Final result of a finished game, seen from White's side of the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    Draw,
}

impl Outcome {
    /// Parse a PGN `Result` tag. `*` (aborted/ongoing) and anything else
    /// unrecognized yields `None`.
    pub fn from_tag(tag: &str) -> Option<Outcome> {
        match tag {
            "1-0" => Some(Outcome::WhiteWin),
            "0-1" => Some(Outcome::BlackWin),
            "1/2-1/2" => Some(Outcome::Draw),
            _ => None,
        }
    }
}

/// One finished game reduced to the fields the aggregation reads.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub eco: String,
    pub outcome: Outcome,
    pub white: String,
    pub black: String,
}

impl GameRecord {
    /// The side the subject played, or `None` when neither name matches.
    /// If the same name fills both seats, the White seat wins.
    pub fn side_of(&self, subject: &str) -> Option<Side> {
        if self.white == subject {
            Some(Side::White)
        } else if self.black == subject {
            Some(Side::Black)
        } else {
            None
        }
    }
}

/// Per-opening counters for one subject, split by the color they played.
///
/// `games` counts every record seen for the opening; the six outcome
/// counters only move for records where the subject actually played, so
/// `games >= sum(counters)`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OpeningStat {
    pub games: u64,
    pub wins_white: u64,
    pub losses_white: u64,
    pub draws_white: u64,
    pub wins_black: u64,
    pub losses_black: u64,
    pub draws_black: u64,
}

impl OpeningStat {
    /// Classify one outcome for the side the subject played.
    pub fn add(&mut self, side: Side, outcome: Outcome) {
        match (side, outcome) {
            (Side::White, Outcome::WhiteWin) => self.wins_white += 1,
            (Side::White, Outcome::BlackWin) => self.losses_white += 1,
            (Side::White, Outcome::Draw) => self.draws_white += 1,
            (Side::Black, Outcome::BlackWin) => self.wins_black += 1,
            (Side::Black, Outcome::WhiteWin) => self.losses_black += 1,
            (Side::Black, Outcome::Draw) => self.draws_black += 1,
        }
    }

    /// Win rate for one side as a percentage. Draws stay out of the
    /// denominator; with zero decided games there is no rate at all.
    pub fn win_rate(&self, side: Side) -> Option<f64> {
        let (wins, losses) = match side {
            Side::White => (self.wins_white, self.losses_white),
            Side::Black => (self.wins_black, self.losses_black),
        };
        let decided = wins + losses;
        if decided == 0 {
            None
        } else {
            Some(wins as f64 / decided as f64 * 100.0)
        }
    }
}

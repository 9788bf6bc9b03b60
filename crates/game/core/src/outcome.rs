//! Outcome of a finished game as reported by the rule engine.
//!
//! The rule engine itself lives outside this workspace. It hands over a
//! [`GameResult`] once a game concludes; this module only gives that pair a
//! type so the history layer can validate and persist it.

use strum::{Display, EnumIter, EnumString};

/// Party credited with the outcome of a game.
///
/// `None` is what the rule engine reports for a game that has not been
/// decided yet. Such a result is never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum WinningParty {
    PlayerA,
    PlayerB,
    Draw,
    None,
}

impl WinningParty {
    /// Returns true if the game reached a final outcome (win or draw).
    pub const fn is_decided(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Line that decided the game, or the surrender marker.
///
/// Rows, columns and diagonals refer to the macro board (the 3x3 grid of
/// sections).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum WinningLine {
    TopRow,
    MiddleRow,
    BottomRow,
    LeftColumn,
    CenterColumn,
    RightColumn,
    Diagonal,
    AntiDiagonal,
    /// The losing party gave up before a line was completed.
    Surrender,
}

/// `(winning party, winning line)` pair.
///
/// Serialized as a two element JSON array, e.g. `["playerA", "surrender"]` or
/// `["draw", null]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult(pub WinningParty, pub Option<WinningLine>);

impl GameResult {
    pub const fn new(party: WinningParty, line: Option<WinningLine>) -> Self {
        Self(party, line)
    }

    /// Result reported for a game that is still in progress.
    pub const fn undecided() -> Self {
        Self(WinningParty::None, None)
    }

    /// Win for `party` because the opponent surrendered.
    pub const fn surrender(party: WinningParty) -> Self {
        Self(party, Some(WinningLine::Surrender))
    }

    pub const fn party(&self) -> WinningParty {
        self.0
    }

    pub const fn line(&self) -> Option<WinningLine> {
        self.1
    }

    pub const fn is_decided(&self) -> bool {
        self.0.is_decided()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn only_none_is_undecided() {
        let undecided: Vec<_> = WinningParty::iter().filter(|p| !p.is_decided()).collect();
        assert_eq!(undecided, vec![WinningParty::None]);
        assert!(!GameResult::undecided().is_decided());
        assert!(GameResult::surrender(WinningParty::PlayerB).is_decided());
    }

    #[test]
    fn names_parse_back() {
        for line in WinningLine::iter() {
            assert_eq!(WinningLine::from_str(&line.to_string()).unwrap(), line);
        }
        assert_eq!(WinningParty::from_str("playerA").unwrap(), WinningParty::PlayerA);
        assert!(WinningParty::from_str("playerC").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn result_is_a_json_pair() {
        let result = GameResult::surrender(WinningParty::PlayerA);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"["playerA","surrender"]"#);

        let draw: GameResult = serde_json::from_str(r#"["draw",null]"#).unwrap();
        assert_eq!(draw, GameResult::new(WinningParty::Draw, None));
    }
}

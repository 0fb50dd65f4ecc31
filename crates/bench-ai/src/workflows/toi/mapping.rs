use crate::workflows::roster::domain::Position;

use super::normalizer::normalize_token;

/// Map a position token from the TOI report to a roster position.
///
/// Exports from the stats crew are inconsistent: some carry single-letter
/// codes, some full words, some wing/center splits. Everything that skates
/// outside the defensive pairings folds into Forward.
pub(crate) fn position_for_token(token: &str) -> Option<Position> {
    match normalize_token(token).as_str() {
        "d" | "def" | "defense" | "defence" | "defenseman" | "defenceman" => {
            Some(Position::Defenseman)
        }
        "f" | "fwd" | "forward" | "c" | "center" | "centre" | "w" | "wing" | "winger" | "lw"
        | "rw" => Some(Position::Forward),
        "g" | "goalie" | "goaltender" => Some(Position::Goaltender),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(token: &str) -> Option<Position> {
    position_for_token(token)
}

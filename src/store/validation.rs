use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and underscores only, starting with a letter, 2-30 chars.
const NAME_PATTERN: &str = r"^[a-zA-Z][a-zA-Z_]{1,29}$";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_PATTERN).expect("player name pattern compiles"));

pub fn is_valid_player_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

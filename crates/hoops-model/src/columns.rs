//! Column names shared by the input tables and every feature table.
//!
//! Observation rows are keyed on (`player_link`, `boxscore_link`, `team`),
//! games on `boxscore_link` and players on `player_link`. Every feature table
//! carries [`PLAYER_LINK`] and [`BOXSCORE_LINK`] so it can be joined back into
//! a master table.

/// Player identity.
pub const PLAYER_LINK: &str = "player_link";
/// Game identity.
pub const BOXSCORE_LINK: &str = "boxscore_link";
/// Team the player appeared for.
pub const TEAM: &str = "team";
/// Minutes played, used to order duplicate boxscore rows.
pub const MINUTES: &str = "minutes";
/// Raw game identity column name used by the crawler output.
pub const GAME_URL: &str = "game_url";

/// Calendar date of a game.
pub const DATE: &str = "date";
/// Season identity of a game.
pub const SEASON_LINK: &str = "season_link";
/// Whether a game belongs to the playoffs.
pub const PLAYOFFS: &str = "playoffs";
pub const START: &str = "start";
pub const NOTES: &str = "notes";
pub const OVERTIME: &str = "overtime";
pub const ATTENDANCE: &str = "attendance";

/// Game columns kept by the loader, in output order.
pub const GAME_COLUMNS: [&str; 8] = [
    BOXSCORE_LINK,
    SEASON_LINK,
    START,
    NOTES,
    OVERTIME,
    ATTENDANCE,
    DATE,
    PLAYOFFS,
];

pub const BIRTH_DATE: &str = "birth_date";
/// Height in feet once cleaned (`"6-7"` on the way in).
pub const HEIGHT: &str = "height";
/// Raw position label such as `"G-F"`.
pub const POSITION: &str = "pos";
/// Number of positions a player is listed at.
pub const POSITION_COUNT: &str = "n_pos";

/// Position letters encoded as indicator columns.
pub const POSITION_CODES: [char; 3] = ['F', 'C', 'G'];

/// Indicator column for a position letter, e.g. `pos_f`.
pub fn position_indicator(code: char) -> String {
    format!("pos_{}", code.to_ascii_lowercase())
}

/// Indicator weight scaled by [`POSITION_COUNT`], e.g. `pos_f_scaled`.
pub fn position_weight(code: char) -> String {
    format!("{}_scaled", position_indicator(code))
}

/// Derived counter and age columns.
pub const SEASON_GAME_COUNT: &str = "season_game_count";
pub const GAME_COUNT: &str = "game_count";
pub const AGE_IN_DAYS: &str = "age_in_days";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_column_names() {
        assert_eq!(position_indicator('F'), "pos_f");
        assert_eq!(position_weight('G'), "pos_g_scaled");
    }
}

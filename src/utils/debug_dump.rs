//! Diagnostic text dumps of rosters and move lists.

use crate::board::roster::Roster;
use crate::game::chess_move::Move;

/// Tabular dump of a roster: slot, role, square, value, has-moved flag.
/// Captured pieces show `--` for their square.
pub fn format_roster(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str("slot  role                square  value  moved\n");
    for (slot, record) in roster.records().iter().enumerate() {
        let square = match record.square {
            Some(sq) => sq.to_string(),
            None => "--".to_string(),
        };
        out.push_str(&format!(
            "{:>4}  {:<18}  {:>6}  {:>5}  {}\n",
            slot,
            format!("{:?}", record.role),
            square,
            record.value(),
            record.has_moved
        ));
    }
    out
}

/// One move per line in coordinate form, with a count header.
pub fn format_move_list(moves: &[Move]) -> String {
    let mut out = format!("{} moves\n", moves.len());
    for mv in moves {
        out.push_str(&format!("  {mv}\n"));
    }
    out
}

/// Scored moves, one per line, as produced by the one-ply move scan.
pub fn format_move_scores(scored: &[(Move, i32)]) -> String {
    let mut out = String::new();
    for (mv, score) in scored {
        out.push_str(&format!("  {mv}: {score}\n"));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::piece::Side;
    use crate::game::game_state::GameState;
    use crate::movegen::legal::generate_legal_moves;

    #[test]
    fn roster_dump_lists_all_sixteen_slots() {
        let state = GameState::new_game();
        let dump = format_roster(&state.light);
        // Header plus sixteen rows.
        assert_eq!(dump.lines().count(), 17);
        assert!(dump.contains("King"));
        assert!(dump.contains("e1"));
    }

    #[test]
    fn move_list_header_carries_the_count() {
        let state = GameState::new_game();
        let moves = generate_legal_moves(&state, Side::Light);
        let listing = format_move_list(&moves);
        assert!(listing.starts_with("20 moves\n"));
        assert!(listing.contains("  e2e4\n"));
    }
}

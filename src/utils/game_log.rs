//! Game-record text output.
//!
//! Serializes a played move sequence to a PGN-style record: a header block
//! followed by numbered coordinate movetext. Good enough for interchange
//! with tooling that accepts coordinate moves, and for keeping a human
//! readable log of a finished game.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game::chess_move::Move;

/// Write a record with the default headers for a locally played game.
pub fn write_game_record(moves: &[Move], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Quince Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Light".to_owned());
    headers.insert("Black".to_owned(), "Dark".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_game_record_with_headers(moves, &headers)
}

pub fn write_game_record_with_headers(
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, mv) in moves.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, mv));
        } else {
            movetext_parts.push(mv.to_string());
        }
    }

    let result = headers
        .get("Result")
        .map(|r| normalize_result(r))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn normalize_result(raw: &str) -> &str {
    match raw {
        "1-0" | "0-1" | "1/2-1/2" => raw,
        _ => "*",
    }
}

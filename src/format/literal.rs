//! Both file dialects are JSON arrays once the bare wall letters are quoted.

use crate::error::{MazeError, Result};
use crate::grid::Direction;
use serde::de::DeserializeOwned;

/// Wraps every bare wall letter (`R`, `T`, `L`, `B`) in double quotes.
///
/// Quoted strings are copied through untouched; any other bare word is left as is, and the
/// parser will reject it.
///
/// # Examples
///
/// ```
/// use maze_editor::format::literal::quote_wall_letters;
///
/// assert_eq!(quote_wall_letters("[[R,T], [\"L\"]]"), "[[\"R\",\"T\"], [\"L\"]]");
/// ```
pub fn quote_wall_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            out.push(c);
            for inner in chars.by_ref() {
                out.push(inner);
                if inner == '"' {
                    break;
                }
            }
        } else if c.is_alphanumeric() || c == '_' {
            let mut word = String::from(c);
            while let Some(&next) = chars.peek() {
                if !(next.is_alphanumeric() || next == '_') {
                    break;
                }
                word.push(next);
                chars.next();
            }
            let mut letters = word.chars();
            match (letters.next().and_then(Direction::from_letter), letters.next()) {
                (Some(_), None) => {
                    out.push('"');
                    out.push_str(&word);
                    out.push('"');
                }
                _ => out.push_str(&word),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Deserialize an already quoted document
///
/// # Examples
///
/// ```
/// use maze_editor::format::literal::parse;
///
/// let pairs: Vec<[i64; 2]> = parse("[[0, 3], [3, 0]]").unwrap();
/// assert_eq!(pairs, vec![[0, 3], [3, 0]]);
/// ```
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| MazeError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cells = Vec<Vec<Vec<String>>>;

    #[test]
    fn quoting_only_touches_wall_letters() {
        assert_eq!(quote_wall_letters("[R, T,L,B]"), "[\"R\", \"T\",\"L\",\"B\"]");
        assert_eq!(quote_wall_letters("[RT, X, 12]"), "[RT, X, 12]");
        assert_eq!(quote_wall_letters("[\"R\", \"B\"]"), "[\"R\", \"B\"]");
        assert_eq!(quote_wall_letters("[]"), "[]");
    }

    #[test]
    fn quoted_maze_is_json() {
        let cells: Cells = parse(&quote_wall_letters("[[[R,B], [L]],\n [[],    [T]]]")).unwrap();
        assert_eq!(
            cells,
            vec![
                vec![vec!["R".to_string(), "B".to_string()], vec!["L".to_string()]],
                vec![vec![], vec!["T".to_string()]],
            ]
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "",
            "[",
            "[[[]]",
            "]",
            "[[[R] [L]]]",
            "[[[R],,[L]]]",
            "[[[X]]]",
            "[[['R']]]",
            "[[[R]]] [[[R]]]",
            "[[[R],]]",
            "[[[1]]]",
        ] {
            assert!(
                matches!(
                    parse::<Cells>(&quote_wall_letters(text)),
                    Err(MazeError::MalformedDocument(_))
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn pairs_must_have_two_integers() {
        for text in ["[[1]]", "[[1,2,3]]", "[[1,\"a\"]]", "[1,2]", "[[99999999999999999999,0]]"] {
            assert!(parse::<Vec<[i64; 2]>>(text).is_err(), "{text:?} should not parse");
        }
        assert_eq!(parse::<Vec<[i64; 2]>>("[[-1, 4]]").unwrap(), vec![[-1, 4]]);
    }
}

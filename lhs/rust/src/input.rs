use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{token}' is not a valid integer")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unbalanced delimiters in '{0}'")]
    UnbalancedDelimiters(String),
}

type Error = InputError;
type Result<T> = std::result::Result<T, Error>;

const DELIMITERS: [(char, char); 2] = [('[', ']'), ('{', '}')];

/// Parses a list of integers separated by commas and/or whitespace.
///
/// The list may be wrapped in `[...]` or `{...}`.
///
/// ```
/// use lhs::input::parse_sequence;
///
/// assert_eq!(parse_sequence("{1, 3, 2}").unwrap(), vec![1, 3, 2]);
/// assert_eq!(parse_sequence("-1 0 0").unwrap(), vec![-1, 0, 0]);
/// assert!(parse_sequence("[]").unwrap().is_empty());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let inner = strip_delimiters(text.trim())?;

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|source| InputError::InvalidInteger {
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

fn strip_delimiters(text: &str) -> Result<&str> {
    let unbalanced = || InputError::UnbalancedDelimiters(text.to_owned());

    let inner = match DELIMITERS.iter().find(|(open, _)| text.starts_with(*open)) {
        Some(&(open, close)) => text
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
            .ok_or_else(unbalanced)?,
        None => text,
    };

    if inner.contains(|c: char| DELIMITERS.iter().any(|&(open, close)| c == open || c == close)) {
        return Err(unbalanced());
    }

    Ok(inner)
}

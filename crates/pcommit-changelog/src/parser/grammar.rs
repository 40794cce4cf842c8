//! Left-to-right grammar: type, short description, files, long description

use super::{ParseError, BREAK_MARKER};
use crate::types::{CommitRecord, CommitType};

/// Parse one raw commit summary into a [`CommitRecord`].
///
/// Only the type is validated; a short description of any length is accepted.
pub fn parse(line: &str) -> Result<CommitRecord, ParseError> {
    let (commit_type, rest) = parse_type(line)?;
    let (short_description, rest) = parse_short_description(rest);
    let (files, rest) = parse_files(rest);

    Ok(CommitRecord {
        commit_type,
        short_description,
        files,
        long_description: rest.to_string(),
    })
}

fn parse_type(line: &str) -> Result<(CommitType, &str), ParseError> {
    let (token, rest) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingSeparator {
            line: line.to_string(),
        })?;

    let token = token.trim();
    let commit_type = token
        .parse::<CommitType>()
        .map_err(|_| ParseError::UnknownType {
            token: token.to_string(),
            line: line.to_string(),
        })?;

    Ok((commit_type, rest))
}

fn parse_short_description(text: &str) -> (String, &str) {
    match text.split_once(BREAK_MARKER) {
        Some((short, rest)) => (short.trim().to_string(), rest),
        None => (text.trim().to_string(), ""),
    }
}

fn parse_files(text: &str) -> (Vec<String>, &str) {
    let Some((label, rest)) = text.split_once(':') else {
        return (Vec::new(), text);
    };
    // The label is compared as-is: " Files" is not a file list.
    if !label.eq_ignore_ascii_case("files") {
        return (Vec::new(), text);
    }

    let (list, rest) = rest.split_once(BREAK_MARKER).unwrap_or((rest, ""));
    let files = list.split(',').map(|f| f.trim().to_string()).collect();
    (files, rest)
}

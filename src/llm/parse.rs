use lazy_static::lazy_static;
use regex::Regex;

use crate::llm::LlmError;

pub const COMMENT_COUNT: usize = 3;

lazy_static! {
    // Leading "1. " numbering or a bullet marker.
    static ref LEADING_MARKER: Regex = Regex::new(r"^\s*(?:\d+\.|[-*•])\s*").expect("valid pattern");
}

/// Extract exactly three comments from the model's free-text output.
///
/// The model is asked to number its comments, so numbered lines are
/// preferred; if fewer than three show up the plain non-empty lines are
/// used instead.
pub fn parse_comments(raw: &str) -> Result<Vec<String>, LlmError> {
    let numbered: Vec<String> = raw
        .lines()
        .filter(|line| LEADING_MARKER.is_match(line))
        .map(clean_comment)
        .filter(|comment| !comment.is_empty())
        .collect();

    let mut comments = if numbered.len() >= COMMENT_COUNT {
        numbered
    } else {
        raw.lines()
            .map(clean_comment)
            .filter(|comment| !comment.is_empty())
            .collect()
    };

    if comments.len() < COMMENT_COUNT {
        return Err(LlmError::Unparsable(format!(
            "expected {} comments, found {}",
            COMMENT_COUNT,
            comments.len()
        )));
    }

    comments.truncate(COMMENT_COUNT);
    Ok(comments)
}

fn clean_comment(line: &str) -> String {
    let stripped = LEADING_MARKER.replace(line.trim(), "");
    let stripped = stripped.trim();

    // The model sometimes wraps comments in quotes.
    let unquoted = stripped
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(stripped);

    unquoted.trim().to_string()
}

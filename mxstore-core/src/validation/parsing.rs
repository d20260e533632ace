//! Parsing of textual index sequences
//!
//! Front ends describe range-shaped index sets such as "lines 3..9" as
//! short strings; these are turned into [`IndexSequence`]s here.

use crate::{IndexSequence, MatrixError, Result};

/// Parse `"start:end"`, `"start:end:step"` or `"start-end"` (end exclusive)
pub fn parse_sequence(text: &str) -> Result<IndexSequence> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid("empty sequence"));
    }

    // Try colon separator first
    if text.contains(':') {
        let mut parts = text.split(':');
        let start = parse_usize(parts.next())?;
        let end = parse_usize(parts.next())?;
        let step = match parts.next() {
            Some(step) => parse_usize(Some(step))?,
            None => 1,
        };
        if parts.next().is_some() {
            return Err(invalid("too many separators"));
        }
        return build(start, end, step);
    }

    // Try dash separator
    if let Some((start, end)) = text.split_once('-') {
        return build(parse_usize(Some(start))?, parse_usize(Some(end))?, 1);
    }

    Err(invalid("missing separator"))
}

fn build(start: usize, end: usize, step: usize) -> Result<IndexSequence> {
    if start > end {
        return Err(invalid("start exceeds end"));
    }
    if step == 0 {
        return Err(invalid("step must be positive"));
    }
    let count = (end - start).div_ceil(step);
    IndexSequence::new(start, step, count)
}

fn parse_usize(part: Option<&str>) -> Result<usize> {
    let part = part.map(str::trim).unwrap_or_default();
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid("expected an unsigned integer"));
    }
    part.parse::<usize>()
        .map_err(|_| invalid("integer overflows usize"))
}

const fn invalid(reason: &'static str) -> MatrixError {
    MatrixError::InvalidSequence { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        // Valid colon format
        assert_eq!(parse_sequence("3:9"), Ok(IndexSequence::from(3..9)));
        assert_eq!(parse_sequence(" 0:10 "), Ok(IndexSequence::from(0..10)));
        assert_eq!(
            parse_sequence("0:10:3"),
            Ok(IndexSequence::new(0, 3, 4).unwrap())
        );

        // Valid dash format
        assert_eq!(parse_sequence("5-15"), Ok(IndexSequence::from(5..15)));

        // Empty ranges are allowed
        assert_eq!(parse_sequence("4:4").map(|s| s.len()), Ok(0));
    }

    #[test]
    fn test_parse_sequence_rejects() {
        for bad in ["", "10:5", "abc:def", "10", "10:", ":10", "0:4:0", "1:2:3:4", "-3-4"] {
            assert!(
                matches!(parse_sequence(bad), Err(MatrixError::InvalidSequence { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(parse_sequence("99999999999999999999999:1").is_err());
    }
}

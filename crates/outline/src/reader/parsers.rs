//! Library of parser functions

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{multispace1, space0, space1};
use nom::combinator::{eof, peek};
use nom::number::complete::double;
use nom::sequence::{preceded, separated_pair, terminated};
use nom::IResult;

/// Check for lines starting with `#`
pub fn is_comment(i: &str) -> bool {
    i.trim_start().starts_with('#')
}

/// Extract the leading `x y` pair from a line
///
/// Both values must be complete whitespace-delimited tokens, so `12abc 4` is
/// rejected rather than read as `12 4`. Non-finite values such as `nan` or
/// `inf` are also rejected.
///
/// ```rust
/// # use seistools_outline::reader::parse_coordinate_line;
/// assert_eq!(parse_coordinate_line("  1.5   -2e3 label"), Some((1.5, -2000.0)));
/// assert_eq!(parse_coordinate_line("1.5"), None);
/// assert_eq!(parse_coordinate_line("nan 2.0"), None);
/// ```
pub fn parse_coordinate_line(i: &str) -> Option<(f64, f64)> {
    let (_, (x, y)) = coordinate_pair(i).ok()?;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

/// Two whitespace separated doubles, each followed by whitespace or the end
fn coordinate_pair(i: &str) -> IResult<&str, (f64, f64)> {
    preceded(space0, separated_pair(token, space1, token))(i)
}

/// A double that is not immediately followed by other characters
fn token(i: &str) -> IResult<&str, f64> {
    terminated(double, peek(alt((multispace1, eof))))(i)
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_comment_hint() {
        assert!(is_comment("# x y"));
        assert!(is_comment("   #indented"));
        assert!(!is_comment("1.0 2.0 # trailing"));
    }

    #[test]
    fn test_coordinate_pair() {
        assert_eq!(coordinate_pair("1 2"), Ok(("", (1.0, 2.0))));
        assert_eq!(coordinate_pair("1\t2\t3"), Ok(("\t3", (1.0, 2.0))));
        assert_eq!(
            coordinate_pair("4468503.12 5333780.55"),
            Ok(("", (4468503.12, 5333780.55)))
        );
        assert_eq!(coordinate_pair("+1.0E+02 -3.5e-1"), Ok(("", (100.0, -0.35))));
    }

    #[test]
    fn test_run_on_tokens_rejected() {
        assert!(coordinate_pair("12abc 4").is_err());
        assert!(coordinate_pair("1 4,5").is_err());
        assert!(coordinate_pair("1,4 5").is_err());
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(parse_coordinate_line(""), None);
        assert_eq!(parse_coordinate_line("7.0"), None);
        assert_eq!(parse_coordinate_line("x y"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_coordinate_line("inf 1.0"), None);
        assert_eq!(parse_coordinate_line("1.0 NaN"), None);
    }
}

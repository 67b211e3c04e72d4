use super::error::{BookError, ReviewError};
use super::requests::RatingInput;

/// Lowest accepted review rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted review rating.
pub const MAX_RATING: i64 = 5;

/// Parses a book id taken from a URL path segment.
///
/// The whole trimmed segment must be an integer. A numeric prefix followed by
/// other characters (`1abc`) is rejected rather than read as book 1.
pub fn parse_book_id(raw: &str) -> Result<i64, BookError> {
    raw.trim().parse::<i64>().map_err(|_| BookError::InvalidId)
}

/// Returns the field when it was supplied and is not the empty string.
///
/// An empty string is treated the same as an absent field; a whitespace-only
/// value is kept so the caller can report it as empty.
pub fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

/// Resolves a rating from any of the accepted JSON representations.
///
/// Integers are taken as-is, floats are truncated toward zero and strings use
/// their leading integer part (`"4 stars"` is 4). The result must fall within
/// `MIN_RATING..=MAX_RATING`.
pub fn parse_rating(input: &RatingInput) -> Result<i64, ReviewError> {
    let value = match input {
        RatingInput::Integer(n) => Some(*n),
        RatingInput::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        RatingInput::Float(_) => None,
        RatingInput::Text(s) => leading_integer(s),
        RatingInput::Other(_) => None,
    };

    value
        .filter(|n| (MIN_RATING..=MAX_RATING).contains(n))
        .ok_or(ReviewError::InvalidRating)
}

/// Parses an optionally signed run of ASCII digits at the start of `s`,
/// ignoring leading whitespace.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_id_valid() {
        assert_eq!(parse_book_id("42"), Ok(42));
        assert_eq!(parse_book_id(" 7 "), Ok(7));
    }

    #[test]
    fn test_parse_book_id_invalid() {
        assert_eq!(parse_book_id("abc"), Err(BookError::InvalidId));
        assert_eq!(parse_book_id(""), Err(BookError::InvalidId));
        assert_eq!(parse_book_id("1.5"), Err(BookError::InvalidId));
        assert_eq!(parse_book_id("12abc"), Err(BookError::InvalidId));
        assert_eq!(parse_book_id("1abc"), Err(BookError::InvalidId));
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("   ")), Some("   "));
        assert_eq!(present(Some("Dune")), Some("Dune"));
    }

    #[test]
    fn test_parse_rating_integer_bounds() {
        assert_eq!(parse_rating(&RatingInput::Integer(1)), Ok(1));
        assert_eq!(parse_rating(&RatingInput::Integer(5)), Ok(5));
        assert_eq!(
            parse_rating(&RatingInput::Integer(0)),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Integer(6)),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Integer(-3)),
            Err(ReviewError::InvalidRating)
        );
    }

    #[test]
    fn test_parse_rating_float_truncates() {
        assert_eq!(parse_rating(&RatingInput::Float(4.9)), Ok(4));
        assert_eq!(
            parse_rating(&RatingInput::Float(0.5)),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Float(f64::NAN)),
            Err(ReviewError::InvalidRating)
        );
    }

    #[test]
    fn test_parse_rating_text() {
        assert_eq!(parse_rating(&RatingInput::Text("3".to_string())), Ok(3));
        assert_eq!(
            parse_rating(&RatingInput::Text(" 4 stars".to_string())),
            Ok(4)
        );
        assert_eq!(
            parse_rating(&RatingInput::Text("five".to_string())),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Text(String::new())),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Text("-2".to_string())),
            Err(ReviewError::InvalidRating)
        );
    }

    #[test]
    fn test_parse_rating_other_json() {
        assert_eq!(
            parse_rating(&RatingInput::Other(serde_json::json!(true))),
            Err(ReviewError::InvalidRating)
        );
        assert_eq!(
            parse_rating(&RatingInput::Other(serde_json::json!([5]))),
            Err(ReviewError::InvalidRating)
        );
    }
}

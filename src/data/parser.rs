use crate::error::ParseError;
use crate::state::number_store::Number;

/// Convert a single pre-trimmed token into a number.
///
/// Integers are tried first so that `"10"` stays integral; anything that
/// fails both the integer and the real parse is rejected with the original text.
pub fn parse(token: &str) -> Result<Number, ParseError> {
    if let Ok(i) = token.parse::<i128>() {
        return Ok(Number::Int(i));
    }
    token
        .parse::<f64>()
        .map(Number::Real)
        .map_err(|_| ParseError::new(token))
}

/// Split `text` on any whitespace and parse every token in order.
///
/// Bad tokens are collected separately; the good ones are still returned.
pub fn parse_batch(text: &str) -> (Vec<Number>, Vec<ParseError>) {
    let mut numbers = Vec::new();
    let mut errors = Vec::new();
    for token in text.split_whitespace() {
        match parse(token) {
            Ok(n) => numbers.push(n),
            Err(e) => errors.push(e),
        }
    }
    (numbers, errors)
}

use crate::error::DrillError;

/// Longest answer the keypad accepts. 144 is the largest product.
pub const MAX_INPUT_LEN: usize = 4;

/// Parse a submitted answer. Surrounding whitespace and a leading sign are
/// allowed; anything else that is not a plain integer is rejected.
pub fn parse_answer(raw: &str) -> Result<i64, DrillError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DrillError::InvalidInput {
            raw: raw.to_string(),
        })
}

/// Append a keypad digit. Returns false if the key was ignored.
pub fn push_digit(input: &mut String, ch: char) -> bool {
    if !ch.is_ascii_digit() || input.len() >= MAX_INPUT_LEN {
        return false;
    }
    input.push(ch);
    true
}

pub fn backspace(input: &mut String) {
    input.pop();
}

pub fn clear(input: &mut String) {
    input.clear();
}

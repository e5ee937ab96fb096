//! Digit handling for OCR output, which mixes ASCII and full-width numerals.

const FULLWIDTH_ZERO: u32 = '０' as u32;

/// Value of a single decimal digit, ASCII (`0`-`9`) or full-width (`０`-`９`).
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        '０'..='９' => Some(c as u32 - FULLWIDTH_ZERO),
        _ => None,
    }
}

/// Parse a run of digits such as a regex capture; `None` for any other character.
pub fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}


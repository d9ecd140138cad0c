//! National ID number (CPF) validation.
//!
//! A CPF is an 11-digit number whose last two digits are check digits over the
//! preceding ones. Attendees type the number with display punctuation
//! ("529.982.247-25"), so callers normalize before validating and before any
//! store comparison; registrations persist the digits-only form.

/// Strip everything but ASCII digits from `raw`.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a CPF, tolerating display punctuation in the input.
///
/// Rejects values that do not normalize to exactly 11 digits, the 11
/// repeated-digit sequences (all checksum-consistent but not issued), and any
/// number whose check digits do not match.
pub fn validate(raw: &str) -> bool {
    let normalized = normalize(raw);

    if normalized.len() != 11 {
        return false;
    }

    let digits: Vec<u32> = normalized.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}

/// Compute the check digit over a 9- or 10-digit prefix.
///
/// Digits are weighted positionally, highest weight first (10..=2 for the
/// first check digit, 11..=2 for the second); the weighted sum times 10 is
/// reduced mod 11, folding 10 to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top_weight - i as u32))
        .sum();

    let rest = (sum * 10) % 11;

    if rest >= 10 {
        0
    } else {
        rest
    }
}

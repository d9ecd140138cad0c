/// A CPF whose check digits are valid, used across lookup tests.
pub static VALID_ID_NUMBER: &str = "52998224725";

/// The same CPF with the display punctuation attendees usually type.
pub static VALID_ID_NUMBER_FORMATTED: &str = "529.982.247-25";

/// Another checksum-valid CPF for multi-registration tests.
pub static VALID_ID_NUMBER_ALT: &str = "11144477735";

pub static TEST_BADGE_CODE: &str = "AB12";
pub static TEST_FULL_NAME: &str = "Maria Silva";

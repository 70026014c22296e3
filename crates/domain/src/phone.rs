/// US phone number validation and normalization for contact submissions.
/// The SMS gateway wants E.164, customers type whatever they want.

pub fn validate_phone_number(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match cleaned.len() {
        10 => is_valid_nanp(&cleaned),
        11 if cleaned.starts_with('1') => is_valid_nanp(&cleaned[1..]),
        _ => false,
    }
}

// Area code and exchange code may not start with 0 or 1
fn is_valid_nanp(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    bytes.len() == 10 && bytes[0] >= b'2' && bytes[3] >= b'2'
}

/// Formats a phone number as `+1XXXXXXXXXX`. Numbers already carrying a
/// leading `+` are passed through untouched.
pub fn format_phone_number(phone: &str) -> String {
    if phone.starts_with('+') {
        return phone.to_string();
    }

    let cleaned: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match cleaned.len() {
        10 => format!("+1{}", cleaned),
        11 if cleaned.starts_with('1') => format!("+{}", cleaned),
        _ => format!("+{}", cleaned),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_ten_digit_numbers() {
        assert!(validate_phone_number("2025550123"));
        assert!(validate_phone_number("(202) 555-0123"));
        assert!(validate_phone_number("202-555-0123"));
    }

    #[test]
    fn accepts_eleven_digits_with_country_code() {
        assert!(validate_phone_number("12025550123"));
        assert!(validate_phone_number("+1 202 555 0123"));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(!validate_phone_number("12345"));
        assert!(!validate_phone_number("0025550123")); // area code starts with 0
        assert!(!validate_phone_number("5551230001")); // exchange code starts with 1
        assert!(!validate_phone_number("202155012")); // too short
    }

    #[test]
    fn formats_to_e164() {
        assert_eq!(format_phone_number("2025550123"), "+12025550123");
        assert_eq!(format_phone_number("1-202-555-0123"), "+12025550123");
        assert_eq!(format_phone_number("+12025550123"), "+12025550123");
    }
}

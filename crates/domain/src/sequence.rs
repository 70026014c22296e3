use chrono::NaiveDate;

/// Per-day sequence spaces for human readable record identifiers.
///
/// Each entity type has its own independent space, identified by a short
/// prefix. The numeric suffix is handed out by an atomic counter scoped by
/// `(prefix, day)`, so two concurrent submissions can never end up with the
/// same number.
pub const BOOKING_SEQUENCE_PREFIX: &str = "BK";
pub const CONTACT_SEQUENCE_PREFIX: &str = "CT";

/// `BK{yymmdd}{seq:04}`, e.g. `BK2608300001`
pub fn format_booking_number(day: NaiveDate, sequence: i64) -> String {
    format!("{}{}{:04}", BOOKING_SEQUENCE_PREFIX, day.format("%y%m%d"), sequence)
}

/// `CT-{yyyymmdd}-{seq:03}`, e.g. `CT-20260830-001`
pub fn format_contact_number(day: NaiveDate, sequence: i64) -> String {
    format!(
        "{}-{}-{:03}",
        CONTACT_SEQUENCE_PREFIX,
        day.format("%Y%m%d"),
        sequence
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn booking_number_is_zero_padded_to_four_digits() {
        assert_eq!(format_booking_number(day(), 1), "BK2608300001");
        assert_eq!(format_booking_number(day(), 42), "BK2608300042");
        assert_eq!(format_booking_number(day(), 9999), "BK2608309999");
    }

    #[test]
    fn contact_number_is_zero_padded_to_three_digits() {
        assert_eq!(format_contact_number(day(), 1), "CT-20260830-001");
        assert_eq!(format_contact_number(day(), 217), "CT-20260830-217");
    }

    #[test]
    fn numbers_sort_lexicographically_within_a_day() {
        let first = format_booking_number(day(), 7);
        let second = format_booking_number(day(), 8);
        assert!(first < second);
    }
}

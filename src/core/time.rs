use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub fn parse_rfc3339(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

/// Ordering key for submission timestamps. Unparseable values sort before
/// every valid timestamp, deterministically.
pub fn submitted_sort_key(value: &str) -> i128 {
    parse_rfc3339(value).map(OffsetDateTime::unix_timestamp_nanos).unwrap_or(i128::MIN)
}

pub fn format_offset(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rfc3339_accepts_utc_z() {
        let parsed = parse_rfc3339("2024-01-02T10:20:30Z").expect("timestamp");
        assert_eq!(parsed.unix_timestamp(), 1_704_190_830);
    }

    #[test]
    fn sort_key_orders_chronologically() {
        let earlier = submitted_sort_key("2024-01-01T00:00:00Z");
        let later = submitted_sort_key("2024-01-02T00:00:00Z");
        assert!(earlier < later);
    }

    #[test]
    fn sort_key_puts_garbage_first() {
        assert!(submitted_sort_key("not a date") < submitted_sort_key("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn format_offset_round_trips() {
        let parsed = parse_rfc3339("2024-06-01T12:00:00Z").expect("timestamp");
        assert_eq!(format_offset(parsed), "2024-06-01T12:00:00Z");
    }
}

/// Utilities for date and time formatting used by the list screens.

/// Format a backend timestamp (`YYYY-MM-DD HH:MM:SS` or ISO `T` separator)
/// to `DD/MM/YYYY HH:MM`.
/// Example: "2025-06-01 14:02:26" -> "01/06/2025 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim();
    let (date_part, time_part) = match trimmed.split_once([' ', 'T']) {
        Some(parts) => parts,
        None => return trimmed.to_string(),
    };
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            let mut clock = time_part.split(':');
            if let (Some(h), Some(m)) = (clock.next(), clock.next()) {
                return format!("{}/{}/{} {}:{}", day, month, year, h, m);
            }
        }
    }
    trimmed.to_string()
}

/// Format a date or timestamp to `DD/MM/YYYY`, dropping any time part.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str
        .trim()
        .split([' ', 'T'])
        .next()
        .unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-06-01 14:02:26"), "01/06/2025 14:02");
        assert_eq!(
            format_datetime("2025-12-31T23:59:59.123Z"),
            "31/12/2025 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-01"), "01/06/2025");
        assert_eq!(format_date("2025-06-01 14:02:26"), "01/06/2025");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}

//! Comma-separated export assembly.
//!
//! All exports in the dashboard are client-generated: fixed header row,
//! comma separator, fields quoted when they could break the format.

/// Quote a field if it contains a separator, a quote or a line break.
/// Embedded quotes are doubled.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Assemble a CSV document from a header and data rows.
pub fn build_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&header.join(","));
    out.push('\n');
    for row in rows {
        let escaped: Vec<String> = row.iter().map(|cell| escape_field(cell)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_stay_unquoted() {
        assert_eq!(escape_field("MH12AB1234"), "MH12AB1234");
    }

    #[test]
    fn comma_field_is_wrapped_in_quotes() {
        assert_eq!(escape_field("Pune, Hinjewadi"), "\"Pune, Hinjewadi\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(escape_field("he said \"go\""), "\"he said \"\"go\"\"\"");
    }

    #[test]
    fn row_count_matches_input() {
        let rows = vec![
            vec!["a".to_string(), "b,c".to_string()],
            vec!["d".to_string(), "e".to_string()],
        ];
        let csv = build_csv(&["X", "Y"], &rows);
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "X,Y");
        assert_eq!(lines[1], "a,\"b,c\"");
    }
}

use crate::domain::error::{AppError, Result};
use crate::domain::record::RawRecord;

/// Serialize records back to RFC-4180 CSV under a fixed header order.
/// Used for snapshot dumps and to exercise the parse round-trip.
pub fn write_records(headers: &[String], records: &[RawRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| AppError::IoError(format!("Failed to write CSV header: {}", e)))?;

    for record in records {
        let row: Vec<&str> = headers.iter().map(|h| record.get(h)).collect();
        writer
            .write_record(&row)
            .map_err(|e| AppError::IoError(format!("Failed to write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::IoError(format!("Failed to flush CSV writer: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::IoError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::csv::parser::parse_records;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trip_preserves_awkward_values() {
        let headers = headers(&["name", "note"]);
        let records = vec![
            RawRecord::from_row(
                &headers,
                &["comma, inc".to_string(), "says \"hi\"".to_string()],
            ),
            RawRecord::from_row(
                &headers,
                &["newline".to_string(), "line one\nline two".to_string()],
            ),
        ];

        let text = write_records(&headers, &records).unwrap();
        let parsed = parse_records(&text);

        assert_eq!(parsed, records);
    }

    #[test]
    fn test_plain_values_are_unquoted() {
        let headers = headers(&["a", "b"]);
        let records = vec![RawRecord::from_row(
            &headers,
            &["1".to_string(), "2".to_string()],
        )];
        let text = write_records(&headers, &records).unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }
}

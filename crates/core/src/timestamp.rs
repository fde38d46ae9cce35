use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff`.
pub fn format_timestamp(moment: NaiveDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted for insertion into the buffer.
pub fn local_timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_with_microseconds() {
        let moment = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_micro_opt(7, 5, 30, 42))
            .unwrap();
        assert_eq!(format_timestamp(moment), "2024-03-09 07:05:30.000042");
    }

    #[test]
    fn local_timestamp_has_fixed_width() {
        assert_eq!(local_timestamp().len(), "2024-03-09 07:05:30.000042".len());
    }
}

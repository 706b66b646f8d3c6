use chrono::NaiveDate;

pub struct DateUtils;

impl DateUtils {
    /// ISO `YYYY-MM-DD`, surrounding whitespace ignored. Blank or malformed
    /// input yields `None`.
    pub fn parse(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }

    pub fn format(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(DateUtils::parse(" 2026-01-03 "), NaiveDate::from_ymd_opt(2026, 1, 3));
        assert_eq!(DateUtils::parse(""), None);
        assert_eq!(DateUtils::parse("03/01/2026"), None);
    }

    #[test]
    fn test_format() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        assert_eq!(DateUtils::format(date), "2026-02-07");
    }
}

use chrono::NaiveDate;

/// Today's date in the browser's local timezone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// "March 2024" style heading for the monthly spend card
pub fn month_heading(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Short display form of a backend date string; unparsable input is shown as-is
pub fn display_date(raw: &str) -> String {
    match shared::transaction::parse_transaction_date(raw) {
        Some(parsed) => parsed.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_heading() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(month_heading(date), "March 2024");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-05"), "05 Jan 2024");
        assert_eq!(display_date("2024-01-05T10:00:00Z"), "05 Jan 2024");
        assert_eq!(display_date("someday"), "someday");
    }
}

//! 时间工具函数
//!
//! 预订日期是时区无关的日历日期 (YYYY-MM-DD)；
//! 时间戳统一使用 UTC。

use chrono::{Datelike, NaiveDate, Utc};

/// 今天的日期 (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 邮件中的人类可读日期，如 "Monday, March 2, 2026"
pub fn humanize_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        date.year()
    )
}

/// "YYYY-MM" 月份键，用于报表月度分桶
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_date_matches_email_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(humanize_date(date), "Monday, March 2, 2026");
    }

    #[test]
    fn month_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(month_key(date), "2026-03");
    }
}

//! # 나이 계산 유틸리티
//!
//! `yyyyMMdd` 형식 날짜를 기준으로 만 나이, 한국식 나이, 특정 나이가 되는 날짜를 계산합니다.

use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::date_utils::{self, DATE_PATTERN, DATE_PATTERN_DASH};

fn field(date: &str, range: std::ops::Range<usize>, op: &str) -> AppResult<i32> {
    date.get(range)
        .ok_or_else(|| AppError::invalid_format(op, date, "expected yyyyMMdd"))?
        .parse::<i32>()
        .format_context(op, date)
}

/// 기준일의 만 나이를 계산합니다.
///
/// 연도 차이에서, 기준일의 월일이 생일 월일보다 앞서면 1을 뺍니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(full_age("19740608", "20090607")?, 34);
/// assert_eq!(full_age("19740608", "20090608")?, 35);
/// ```
pub fn full_age(birth: &str, base: &str) -> AppResult<i32> {
    let op = "full_age";
    let mut age = field(base, 0..4, op)? - field(birth, 0..4, op)?;

    if age > 0 && field(birth, 4..8, op)? > field(base, 4..8, op)? {
        age -= 1;
    }

    Ok(age)
}

/// 한국식 나이(연도 차이 + 1)를 계산합니다.
pub fn korean_age(birth: &str, base: &str) -> AppResult<i32> {
    let op = "korean_age";
    Ok(field(base, 0..4, op)? - field(birth, 0..4, op)? + 1)
}

/// `date`에 `age`살인 사람이 `target_age`살이 되는 날짜를 `yyyy-MM-dd`로 반환합니다.
pub fn date_by_age(date: &str, age: i32, target_age: i32) -> AppResult<String> {
    let dashed = date_utils::convert_pattern(date, DATE_PATTERN, DATE_PATTERN_DASH)?;
    date_utils::add_years(&dashed, i64::from(target_age - age), DATE_PATTERN_DASH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_age_around_birthday() {
        assert_eq!(full_age("19740608", "20090607").unwrap(), 34);
        assert_eq!(full_age("19740608", "20090608").unwrap(), 35);
        assert_eq!(full_age("19740608", "20090609").unwrap(), 35);
    }

    #[test]
    fn test_full_age_same_year() {
        // 연도 차이가 0이면 생일 전이라도 빼지 않음
        assert_eq!(full_age("20090608", "20090101").unwrap(), 0);
    }

    #[test]
    fn test_korean_age() {
        assert_eq!(korean_age("19740608", "20090101").unwrap(), 36);
        assert!(korean_age("1974", "20090101").is_ok());
        assert!(korean_age("19", "20090101").is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(full_age("1974", "20090101"), Err(AppError::InvalidFormat { .. })));
        assert!(full_age("abcd0608", "20090101").is_err());
    }

    #[test]
    fn test_date_by_age() {
        assert_eq!(date_by_age("20090608", 35, 40).unwrap(), "2014-06-08");
        assert_eq!(date_by_age("20090608", 35, 35).unwrap(), "2009-06-08");
        assert!(date_by_age("2009-06-08", 35, 40).is_err());
    }
}

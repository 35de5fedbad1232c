//! # 날짜/시간 유틸리티
//!
//! `chrono` 기반의 날짜 계산, 변환, 검증 함수들입니다.
//! 모든 패턴은 `strftime` 형식(`%Y-%m-%d` 등)을 사용하며, 현재 시각이 필요한 함수는
//! [`TimeConfig`](crate::config::TimeConfig)의 시간대 오프셋(기본 +09:00)을 따릅니다.
//!
//! 잘못된 패턴은 사용 전에 `AppError::InvalidFormat`으로 거부되므로 포맷 중 패닉이 발생하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::date_utils::{self, DATE_PATTERN_DASH};
//!
//! assert_eq!(date_utils::add_days("2024-02-28", 1, DATE_PATTERN_DASH)?, "2024-02-29");
//! assert!(date_utils::is_date("2024-02-29", DATE_PATTERN_DASH));
//! assert!(!date_utils::is_date("2023-02-29", DATE_PATTERN_DASH));
//! ```

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc, Weekday,
};

use crate::config::TimeConfig;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::locale::Locale;

pub const HOURS_24: i64 = 24;
pub const MINUTES_60: i64 = 60;
pub const SECONDS_60: i64 = 60;
pub const MILLI_SECONDS_1000: i64 = 1000;

pub const DATE_PATTERN_DASH: &str = "%Y-%m-%d";
pub const TIME_PATTERN: &str = "%H:%M";
pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_HMS_PATTERN: &str = "%Y%m%d%H%M%S";
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const YEAR_PATTERN: &str = "%Y";
pub const MONTH_PATTERN: &str = "%m";
pub const DAY_PATTERN: &str = "%d";
pub const DATE_PATTERN: &str = "%Y%m%d";
pub const TIME_HMS_PATTERN: &str = "%H%M%S";
pub const TIME_HMS_PATTERN_COLON: &str = "%H:%M:%S";

const YEAR_MONTH_PATTERN: &str = "%Y-%m";

// 패턴에 없는 필드를 채우기 위한 보조 입력/패턴 쌍
const FILLERS: [(&str, &str); 7] = [
    ("", ""),
    ("|01", "|%d"),
    ("|01|01", "|%m|%d"),
    ("|1970", "|%Y"),
    ("|1970|01", "|%Y|%d"),
    ("|1970|01", "|%Y|%m"),
    ("|1970|01|01", "|%Y|%m|%d"),
];

fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

/// 패턴이 유효한 strftime 형식인지 검사합니다.
fn validate_pattern(pattern: &str) -> AppResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::invalid_format(
            "date_pattern",
            pattern,
            "not a valid strftime pattern",
        ));
    }
    Ok(())
}

/// 문자열을 패턴에 맞게 파싱합니다.
///
/// 패턴에 없는 필드는 기본값으로 채워집니다.
/// 날짜만 있으면 자정, 시간만 있으면 1970-01-01, 연/월만 있으면 1일이 사용됩니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 패턴이 잘못되었거나 문자열이 패턴과 맞지 않는 경우
pub fn parse_date_time(s: &str, pattern: &str) -> AppResult<NaiveDateTime> {
    validate_pattern(pattern)?;

    for (value_fill, pattern_fill) in FILLERS {
        let value = format!("{}{}", s, value_fill);
        let full_pattern = format!("{}{}", pattern, pattern_fill);

        if let Ok(dt) = NaiveDateTime::parse_from_str(&value, &full_pattern) {
            return Ok(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&value, &full_pattern) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(s, pattern) {
        return Ok(epoch_date().and_time(time));
    }

    Err(AppError::invalid_format(
        "parse_date_time",
        s,
        format!("does not match pattern '{}'", pattern),
    ))
}

/// 날짜/시간을 패턴 문자열로 변환합니다.
pub fn format_date_time(dt: &NaiveDateTime, pattern: &str) -> AppResult<String> {
    validate_pattern(pattern)?;

    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .format_context("format_date_time", pattern)?;
    Ok(out)
}

/// 날짜 문자열의 패턴을 변환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(convert_pattern("20240315", DATE_PATTERN, DATE_PATTERN_DASH)?, "2024-03-15");
/// ```
pub fn convert_pattern(s: &str, from: &str, to: &str) -> AppResult<String> {
    let dt = parse_date_time(s, from)?;
    format_date_time(&dt, to)
}

fn round_trips(s: &str, pattern: &str) -> bool {
    parse_date_time(s, pattern)
        .and_then(|dt| format_date_time(&dt, pattern))
        .map(|formatted| formatted == s)
        .unwrap_or(false)
}

/// 문자열이 패턴에 맞는 유효한 날짜인지 확인합니다.
///
/// 파싱 실패 또는 다시 포맷한 결과가 원본과 다르면 `false`입니다.
pub fn is_date(date: &str, pattern: &str) -> bool {
    round_trips(date, pattern)
}

/// 문자열이 패턴에 맞는 유효한 시간인지 확인합니다.
pub fn is_time(time: &str, pattern: &str) -> bool {
    round_trips(time, pattern)
}

fn shift_months(dt: NaiveDateTime, months: i64, op: &str, date: &str) -> AppResult<NaiveDateTime> {
    let amount = u32::try_from(months.unsigned_abs())
        .map_err(|_| AppError::invalid_format(op, date, "month offset out of range"))?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(amount))
    } else {
        dt.checked_sub_months(Months::new(amount))
    };
    shifted.ok_or_else(|| AppError::invalid_format(op, date, "result out of range"))
}

fn shift_days(dt: NaiveDateTime, days: i64, op: &str, date: &str) -> AppResult<NaiveDateTime> {
    let shifted = if days >= 0 {
        dt.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        dt.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| AppError::invalid_format(op, date, "result out of range"))
}

/// 날짜에 일 수를 더합니다. 0이면 입력을 그대로 반환합니다.
pub fn add_days(date: &str, days: i64, pattern: &str) -> AppResult<String> {
    if days == 0 {
        return Ok(date.to_string());
    }
    let dt = parse_date_time(date, pattern)?;
    format_date_time(&shift_days(dt, days, "add_days", date)?, pattern)
}

/// 날짜에 개월 수를 더합니다.
///
/// 결과 월에 해당 일이 없으면 월말로 맞춥니다 (`2024-01-31` + 1개월 = `2024-02-29`).
pub fn add_months(date: &str, months: i64, pattern: &str) -> AppResult<String> {
    if months == 0 {
        return Ok(date.to_string());
    }
    let dt = parse_date_time(date, pattern)?;
    format_date_time(&shift_months(dt, months, "add_months", date)?, pattern)
}

/// 날짜에 연 수를 더합니다.
pub fn add_years(date: &str, years: i64, pattern: &str) -> AppResult<String> {
    if years == 0 {
        return Ok(date.to_string());
    }
    let dt = parse_date_time(date, pattern)?;
    let months = years
        .checked_mul(12)
        .ok_or_else(|| AppError::invalid_format("add_years", date, "year offset out of range"))?;
    format_date_time(&shift_months(dt, months, "add_years", date)?, pattern)
}

/// `yyyy-MM-dd` 날짜에 연, 월, 일을 차례로 더합니다.
pub fn add_year_month_day(date: &str, years: i64, months: i64, days: i64) -> AppResult<String> {
    let op = "add_year_month_day";
    let mut dt = parse_date_time(date, DATE_PATTERN_DASH)?;

    if years != 0 {
        let total = years
            .checked_mul(12)
            .ok_or_else(|| AppError::invalid_format(op, date, "year offset out of range"))?;
        dt = shift_months(dt, total, op, date)?;
    }
    if months != 0 {
        dt = shift_months(dt, months, op, date)?;
    }
    if days != 0 {
        dt = shift_days(dt, days, op, date)?;
    }

    format_date_time(&dt, DATE_PATTERN_DASH)
}

fn first_of_month(dt: &NaiveDateTime) -> NaiveDateTime {
    let date = dt.date();
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .unwrap_or(date)
        .and_time(NaiveTime::MIN)
}

/// 해당 월의 첫 날짜를 반환합니다.
pub fn first_date_of_month(date: &str, pattern: &str) -> AppResult<String> {
    let dt = parse_date_time(date, pattern)?;
    format_date_time(&first_of_month(&dt), pattern)
}

/// 해당 월의 마지막 날짜를 반환합니다.
pub fn last_date_of_month(date: &str, pattern: &str) -> AppResult<String> {
    let op = "last_date_of_month";
    let first = first_of_month(&parse_date_time(date, pattern)?);
    let last = shift_days(shift_months(first, 1, op, date)?, -1, op, date)?;
    format_date_time(&last, pattern)
}

/// 이전 달의 첫 날짜를 반환합니다.
pub fn first_date_of_prev_month(date: &str, pattern: &str) -> AppResult<String> {
    let first = first_of_month(&parse_date_time(date, pattern)?);
    format_date_time(&shift_months(first, -1, "first_date_of_prev_month", date)?, pattern)
}

/// 이전 달의 마지막 날짜를 반환합니다.
pub fn last_date_of_prev_month(date: &str, pattern: &str) -> AppResult<String> {
    let first = first_of_month(&parse_date_time(date, pattern)?);
    format_date_time(&shift_days(first, -1, "last_date_of_prev_month", date)?, pattern)
}

/// `yyyy-MM-dd` 날짜의 요일 이름을 반환합니다.
///
/// # Arguments
///
/// * `date` - `yyyy-MM-dd` 형식 날짜
/// * `abbreviation` - `true`면 약어(`월`, `Mon`), `false`면 전체 이름(`월요일`, `Monday`)
/// * `locale` - 표기 로케일
pub fn day_of_week(date: &str, abbreviation: bool, locale: Locale) -> AppResult<String> {
    let weekday = parse_date_time(date, DATE_PATTERN_DASH)?.weekday();
    Ok(weekday_name(weekday, abbreviation, locale))
}

fn weekday_name(weekday: Weekday, abbreviation: bool, locale: Locale) -> String {
    match locale {
        Locale::Korean => {
            let short = match weekday {
                Weekday::Mon => "월",
                Weekday::Tue => "화",
                Weekday::Wed => "수",
                Weekday::Thu => "목",
                Weekday::Fri => "금",
                Weekday::Sat => "토",
                Weekday::Sun => "일",
            };
            if abbreviation {
                short.to_string()
            } else {
                format!("{}요일", short)
            }
        }
        Locale::English => {
            if abbreviation {
                weekday.to_string()
            } else {
                match weekday {
                    Weekday::Mon => "Monday",
                    Weekday::Tue => "Tuesday",
                    Weekday::Wed => "Wednesday",
                    Weekday::Thu => "Thursday",
                    Weekday::Fri => "Friday",
                    Weekday::Sat => "Saturday",
                    Weekday::Sun => "Sunday",
                }
                .to_string()
            }
        }
    }
}

/// 두 날짜 사이의 일 수를 반환합니다 (`end - start`, 달력 기준).
pub fn days_between(start: &str, end: &str, pattern: &str) -> AppResult<i64> {
    let start = parse_date_time(start, pattern)?;
    let end = parse_date_time(end, pattern)?;
    Ok((end.date() - start.date()).num_days())
}

/// 두 시각 사이의 일 수를 반환합니다 (분 차이를 하루 단위로 내림).
pub fn days_between_times(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    minutes_between_times(start, end) / (HOURS_24 * MINUTES_60)
}

/// 두 시각 사이의 분 수를 반환합니다.
pub fn minutes_between_times(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    (*end - *start).num_minutes()
}

/// `yyyyMMddHHmmss` 형식 두 문자열 사이의 분 수를 반환합니다.
pub fn minutes_between(start: &str, end: &str) -> AppResult<i64> {
    let start = parse_compact(start)?;
    let end = parse_compact(end)?;
    Ok(minutes_between_times(&start, &end))
}

/// `yyyyMMddHHmmss` 형식(14자 이상, 앞 14자 사용) 문자열을 파싱합니다.
pub fn parse_compact(s: &str) -> AppResult<NaiveDateTime> {
    let head = s
        .get(..14)
        .ok_or_else(|| AppError::invalid_format("parse_compact", s, "need at least 14 characters"))?;
    NaiveDateTime::parse_from_str(head, DATE_HMS_PATTERN).format_context("parse_compact", s)
}

/// 시각을 `yyyyMMddHHmmss` + `"000"` 형식으로 변환합니다.
pub fn format_compact_millis(dt: &NaiveDateTime) -> String {
    format!("{}000", dt.format(DATE_HMS_PATTERN))
}

/// 시각이 패턴 문자열이 나타내는 시각과 같은지 비교합니다.
pub fn is_same(dt: &NaiveDateTime, other: &str, pattern: &str) -> AppResult<bool> {
    Ok(*dt == parse_date_time(other, pattern)?)
}

/// 시각이 패턴 문자열이 나타내는 시각보다 뒤인지 비교합니다.
pub fn is_after(dt: &NaiveDateTime, other: &str, pattern: &str) -> AppResult<bool> {
    Ok(*dt > parse_date_time(other, pattern)?)
}

/// 시작일부터 종료일까지(양 끝 포함) 날짜 목록을 반환합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 종료일이 시작일보다 앞선 경우
pub fn dates_between(start: &str, end: &str, pattern: &str) -> AppResult<Vec<String>> {
    let op = "dates_between";
    let start_dt = parse_date_time(start, pattern)?;
    let end_dt = parse_date_time(end, pattern)?;

    if end_dt < start_dt {
        return Err(AppError::invalid_format(
            op,
            format!("{} ~ {}", start, end),
            "end date is before start date",
        ));
    }

    let mut result = Vec::new();
    let mut current = start_dt;
    while current <= end_dt {
        result.push(format_date_time(&current, pattern)?);
        current = shift_days(current, 1, op, start)?;
    }

    Ok(result)
}

/// 윤년 여부를 반환합니다.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 날짜 문자열 앞 4자리 연도의 윤년 여부를 반환합니다.
pub fn is_leap_year_of(date: &str) -> AppResult<bool> {
    let year = date
        .get(..4)
        .ok_or_else(|| AppError::invalid_format("is_leap_year_of", date, "need a 4-digit year"))?
        .parse::<i32>()
        .format_context("is_leap_year_of", date)?;
    Ok(is_leap_year(year))
}

/// 설정된 시간대의 현재 시각
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&TimeConfig::offset())
}

/// 현재 시각을 패턴 문자열로 반환합니다.
pub fn current_date_time(pattern: &str) -> AppResult<String> {
    format_date_time(&now().naive_local(), pattern)
}

/// 이번 달(`yyyy-MM`)
pub fn this_month() -> AppResult<String> {
    current_date_time(YEAR_MONTH_PATTERN)
}

/// 올해(`yyyy`)
pub fn this_year() -> AppResult<String> {
    current_date_time(YEAR_PATTERN)
}

/// 어제 날짜를 패턴 문자열로 반환합니다.
pub fn yesterday(pattern: &str) -> AppResult<String> {
    let today = now().naive_local();
    format_date_time(&shift_days(today, -1, "yesterday", "now")?, pattern)
}

/// 현재 시각을 밀리초까지 포함한 문자열로 반환합니다.
pub fn current_timestamp() -> AppResult<String> {
    current_date_time(TIMESTAMP_PATTERN)
}

/// 설정된 시간대 기준 날짜 문자열을 epoch 밀리초로 변환합니다.
pub fn to_epoch_millis(s: &str, pattern: &str) -> AppResult<i64> {
    let naive = parse_date_time(s, pattern)?;
    TimeConfig::offset()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| AppError::invalid_format("to_epoch_millis", s, "ambiguous local time"))
}

/// epoch 밀리초를 12자리 16진수 문자열로 변환합니다.
pub fn millis_to_hex(millis: i64) -> String {
    format!("{:012x}", millis)
}

/// 현재 epoch 밀리초를 12자리 16진수 문자열로 변환합니다.
pub fn current_millis_hex() -> String {
    millis_to_hex(Utc::now().timestamp_millis())
}

/// 16진수 epoch 밀리초를 설정된 시간대의 날짜 문자열로 변환합니다.
pub fn hex_millis_to_string(hex: &str, pattern: &str) -> AppResult<String> {
    let op = "hex_millis_to_string";
    let millis = i64::from_str_radix(hex, 16).format_context(op, hex)?;
    let dt = Utc
        .timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| AppError::invalid_format(op, hex, "timestamp out of range"))?;
    format_date_time(&dt.with_timezone(&TimeConfig::offset()).naive_local(), pattern)
}

/// 시간대가 있는 시각을 UTC 기준 `yyyy-MM-dd HH:mm:ss` 문자열로 변환합니다.
pub fn to_utc_string(dt: &DateTime<FixedOffset>) -> String {
    dt.with_timezone(&Utc).format(DATE_TIME_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATE_TIME_PATTERN).unwrap()
    }

    #[test]
    fn test_parse_partial_patterns() {
        assert_eq!(parse_date_time("2024-03-15", DATE_PATTERN_DASH).unwrap(), dt("2024-03-15 00:00:00"));
        assert_eq!(parse_date_time("2024-03", YEAR_MONTH_PATTERN).unwrap(), dt("2024-03-01 00:00:00"));
        assert_eq!(parse_date_time("2024", YEAR_PATTERN).unwrap(), dt("2024-01-01 00:00:00"));
        assert_eq!(parse_date_time("13:45", TIME_PATTERN).unwrap(), dt("1970-01-01 13:45:00"));
        assert_eq!(
            parse_date_time("20240315101112", DATE_HMS_PATTERN).unwrap(),
            dt("2024-03-15 10:11:12")
        );
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(matches!(
            parse_date_time("2024", "%Q"),
            Err(AppError::InvalidFormat { .. })
        ));
        assert!(format_date_time(&dt("2024-01-01 00:00:00"), "%Q").is_err());
    }

    #[test]
    fn test_is_date_and_is_time() {
        assert!(is_date("2024-02-29", DATE_PATTERN_DASH));
        assert!(!is_date("2023-02-29", DATE_PATTERN_DASH));
        assert!(!is_date("2024-2-9", DATE_PATTERN_DASH));
        assert!(!is_date("abc", DATE_PATTERN_DASH));
        assert!(is_time("23:59", TIME_PATTERN));
        assert!(!is_time("24:00", TIME_PATTERN));
        assert!(is_time("235959", TIME_HMS_PATTERN));
    }

    #[test]
    fn test_round_trip_formatting() {
        let s = "2024-07-01 08:09:10";
        let parsed = parse_date_time(s, DATE_TIME_PATTERN).unwrap();
        let formatted = format_date_time(&parsed, DATE_TIME_PATTERN).unwrap();
        assert!(is_date(&formatted, DATE_TIME_PATTERN));
        assert_eq!(convert_pattern("20240315", DATE_PATTERN, DATE_PATTERN_DASH).unwrap(), "2024-03-15");
    }

    #[test]
    fn test_add_days_months_years() {
        assert_eq!(add_days("2024-02-28", 1, DATE_PATTERN_DASH).unwrap(), "2024-02-29");
        assert_eq!(add_days("2024-03-01", -1, DATE_PATTERN_DASH).unwrap(), "2024-02-29");
        assert_eq!(add_days("not a date", 0, DATE_PATTERN_DASH).unwrap(), "not a date");
        assert_eq!(add_months("2024-01-31", 1, DATE_PATTERN_DASH).unwrap(), "2024-02-29");
        assert_eq!(add_months("2024-03-31", -1, DATE_PATTERN_DASH).unwrap(), "2024-02-29");
        assert_eq!(add_years("2024-02-29", 1, DATE_PATTERN_DASH).unwrap(), "2025-02-28");
        assert_eq!(add_years("20240101", -10, DATE_PATTERN).unwrap(), "20140101");
        assert_eq!(add_year_month_day("2024-01-31", 1, 1, 1).unwrap(), "2025-03-01");
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(first_date_of_month("2024-02-17", DATE_PATTERN_DASH).unwrap(), "2024-02-01");
        assert_eq!(last_date_of_month("2024-02-17", DATE_PATTERN_DASH).unwrap(), "2024-02-29");
        assert_eq!(last_date_of_month("20231205", DATE_PATTERN).unwrap(), "20231231");
        assert_eq!(first_date_of_prev_month("2024-01-17", DATE_PATTERN_DASH).unwrap(), "2023-12-01");
        assert_eq!(last_date_of_prev_month("2024-03-10", DATE_PATTERN_DASH).unwrap(), "2024-02-29");
    }

    #[test]
    fn test_day_of_week() {
        // 2024-03-18은 월요일
        assert_eq!(day_of_week("2024-03-18", true, Locale::Korean).unwrap(), "월");
        assert_eq!(day_of_week("2024-03-18", false, Locale::Korean).unwrap(), "월요일");
        assert_eq!(day_of_week("2024-03-24", true, Locale::English).unwrap(), "Sun");
        assert_eq!(day_of_week("2024-03-24", false, Locale::English).unwrap(), "Sunday");
        assert!(day_of_week("2024/03/24", true, Locale::English).is_err());
    }

    #[test]
    fn test_differences() {
        assert_eq!(days_between("2024-02-01", "2024-03-01", DATE_PATTERN_DASH).unwrap(), 29);
        assert_eq!(days_between("2024-03-01", "2024-02-01", DATE_PATTERN_DASH).unwrap(), -29);
        assert_eq!(minutes_between("20240101000000", "20240101013000").unwrap(), 90);
        assert!(minutes_between("2024010100", "20240101013000").is_err());

        let a = dt("2024-01-01 00:00:00");
        let b = dt("2024-01-02 23:59:00");
        assert_eq!(days_between_times(&a, &b), 1);
        assert_eq!(minutes_between_times(&a, &b), 2879);
    }

    #[test]
    fn test_compact_format() {
        let parsed = parse_compact("20240315101112999").unwrap();
        assert_eq!(parsed, dt("2024-03-15 10:11:12"));
        assert_eq!(format_compact_millis(&parsed), "20240315101112000");
    }

    #[test]
    fn test_comparisons() {
        let base = dt("2024-03-15 00:00:00");
        assert!(is_same(&base, "2024-03-15", DATE_PATTERN_DASH).unwrap());
        assert!(is_after(&base, "2024-03-14", DATE_PATTERN_DASH).unwrap());
        assert!(!is_after(&base, "2024-03-15", DATE_PATTERN_DASH).unwrap());
        assert!(is_same(&base, "bad", DATE_PATTERN_DASH).is_err());
    }

    #[test]
    fn test_dates_between() {
        let dates = dates_between("2024-02-27", "2024-03-01", DATE_PATTERN_DASH).unwrap();
        assert_eq!(dates, vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);

        let single = dates_between("2024-02-27", "2024-02-27", DATE_PATTERN_DASH).unwrap();
        assert_eq!(single, vec!["2024-02-27"]);

        // 종료일이 앞서면 무한 루프 대신 에러
        assert!(dates_between("2024-03-01", "2024-02-27", DATE_PATTERN_DASH).is_err());
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year_of("20240101").unwrap());
        assert!(is_leap_year_of("20").is_err());
    }

    #[test]
    fn test_hex_millis() {
        assert_eq!(millis_to_hex(0), "000000000000");
        assert_eq!(millis_to_hex(255), "0000000000ff");
        assert_eq!(current_millis_hex().len(), 12);

        let offset_hours = TimeConfig::utc_offset_hours() as i64;
        let hex = millis_to_hex((24 - offset_hours) * 3600 * 1000);
        assert_eq!(hex_millis_to_string(&hex, DATE_TIME_PATTERN).unwrap(), "1970-01-02 00:00:00");
        assert!(hex_millis_to_string("xyz", DATE_TIME_PATTERN).is_err());
    }

    #[test]
    fn test_epoch_millis_and_utc() {
        let offset_hours = TimeConfig::utc_offset_hours() as i64;
        let millis = to_epoch_millis("1970-01-01 00:00:00", DATE_TIME_PATTERN).unwrap();
        assert_eq!(millis, -offset_hours * 3600 * 1000);

        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = kst.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        assert_eq!(to_utc_string(&local), "2024-03-15 00:30:00");
    }

    #[test]
    fn test_clock_functions_follow_patterns() {
        assert!(is_date(&current_date_time(DATE_PATTERN_DASH).unwrap(), DATE_PATTERN_DASH));
        assert!(is_date(&this_month().unwrap(), YEAR_MONTH_PATTERN));
        assert_eq!(this_year().unwrap().len(), 4);
        assert!(is_date(&yesterday(DATE_PATTERN).unwrap(), DATE_PATTERN));
        assert_eq!(current_timestamp().unwrap().len(), "2024-01-01 00:00:00.000".len());
    }
}

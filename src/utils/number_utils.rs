//! # 숫자 유틸리티
//!
//! 숫자 문자열의 종류(양수/음수/정수/실수) 판별과 패턴 기반 숫자 포맷팅,
//! 로케일별 통화 표기를 제공합니다.
//!
//! ## 포맷 패턴
//!
//! | 기호 | 의미 |
//! |------|------|
//! | `0` | 정수부: 최소 자릿수 / 소수부: 반드시 표시하는 자리 |
//! | `#` | 정수부: 선택 자릿수 / 소수부: 0이면 생략하는 자리 |
//! | `,` | 자릿수 구분. 그룹 크기는 마지막 `,` 뒤의 자릿수 |
//! | `.` | 소수점 |
//!
//! 소수부는 가장 가까운 값으로 반올림하며, 정확히 중간인 경우 짝수 쪽으로 맞춥니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::number_utils::{self, CURRENCY_BELOW_THE_DECIMAL2};
//!
//! assert_eq!(number_utils::format_number(1234.5, CURRENCY_BELOW_THE_DECIMAL2)?, "1,234.50");
//! assert_eq!(number_utils::format_integer(1234567, "#,####")?, "123,4567");
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::utils::locale::Locale;
use crate::utils::string_utils;

pub const CURRENCY_BELOW_THE_DECIMAL1: &str = "#,##0.0";
pub const CURRENCY_BELOW_THE_DECIMAL2: &str = "#,##0.00";
pub const CURRENCY_BELOW_THE_DECIMAL3: &str = "#,##0.000";
pub const CURRENCY_BELOW_THE_DECIMAL4: &str = "#,##0.0000";
pub const CURRENCY_BELOW_THE_DECIMAL5: &str = "#,##0.00000";
pub const CURRENCY_NO_DECIMAL_POINT: &str = "#,##0";
pub const NO_EFFECT_FORMAT: &str = "#";

type Pattern = Lazy<Result<Regex, regex::Error>>;

static POSITIVE: Pattern =
    Lazy::new(|| Regex::new(r"^\+?(?:[1-9][0-9]*|[1-9][0-9]*\.[0-9]*|0?\.[0-9]*[1-9][0-9]*)$"));
static NEGATIVE: Pattern =
    Lazy::new(|| Regex::new(r"^-(?:[1-9][0-9]*|[1-9][0-9]*\.[0-9]*|0?\.[0-9]*[1-9][0-9]*)$"));
static WHOLE: Pattern = Lazy::new(|| Regex::new(r"^[+-]?[1-9][0-9]*$"));
static REAL: Pattern = Lazy::new(|| Regex::new(r"^[+-]?(?:[1-9][0-9]*\.[0-9]*|0?\.[0-9]*[1-9][0-9]*)$"));

/// 숫자 문자열 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    /// 0보다 큰 수 (정수/실수)
    Positive,
    /// 0보다 작은 수 (정수/실수)
    Negative,
    /// 0이 아닌 정수
    Whole,
    /// 소수점이 있는 0이 아닌 실수
    Real,
}

impl FromStr for NumberType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(NumberType::Positive),
            "negative" => Ok(NumberType::Negative),
            "whole" => Ok(NumberType::Whole),
            "real" => Ok(NumberType::Real),
            _ => Err(AppError::unsupported("number_type", s)),
        }
    }
}

/// 문자열이 지정한 종류의 숫자 표기인지 확인합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(check_number_type("+12.5", NumberType::Positive));
/// assert!(check_number_type("-7", NumberType::Whole));
/// assert!(!check_number_type("0", NumberType::Whole));
/// ```
pub fn check_number_type(s: &str, number_type: NumberType) -> bool {
    let pattern = match number_type {
        NumberType::Positive => &POSITIVE,
        NumberType::Negative => &NEGATIVE,
        NumberType::Whole => &WHOLE,
        NumberType::Real => &REAL,
    };
    pattern.as_ref().is_ok_and(|regex| regex.is_match(s))
}

/// 해석된 포맷 패턴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberPattern {
    min_int: usize,
    grouping: Option<usize>,
    min_frac: usize,
    max_frac: usize,
}

impl NumberPattern {
    const KRW: NumberPattern = NumberPattern {
        min_int: 1,
        grouping: Some(3),
        min_frac: 0,
        max_frac: 0,
    };
    const USD: NumberPattern = NumberPattern {
        min_int: 1,
        grouping: Some(3),
        min_frac: 2,
        max_frac: 2,
    };

    fn parse(pattern: &str) -> AppResult<Self> {
        let invalid = |reason: &str| AppError::invalid_format("number_pattern", pattern, reason);

        let (int_part, frac_part) = match pattern.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (pattern, None),
        };

        if int_part.is_empty() && frac_part.is_none() {
            return Err(invalid("empty pattern"));
        }
        if !int_part.chars().all(|c| matches!(c, '#' | '0' | ',')) {
            return Err(invalid("integer part allows only '#', '0', ','"));
        }

        let grouping = match int_part.rfind(',') {
            Some(pos) => {
                let size = int_part.len() - pos - 1;
                if size == 0 {
                    return Err(invalid("grouping separator must be followed by digits"));
                }
                Some(size)
            }
            None => None,
        };

        let (min_frac, max_frac) = match frac_part {
            Some(frac) if !frac.chars().all(|c| matches!(c, '#' | '0')) => {
                return Err(invalid("fraction part allows only '#', '0'"));
            }
            Some(frac) => (frac.matches('0').count(), frac.len()),
            None => (0, 0),
        };

        Ok(NumberPattern {
            min_int: int_part.matches('0').count(),
            grouping,
            min_frac,
            max_frac,
        })
    }

    /// 부호, 정수부 숫자열, 소수부 숫자열을 패턴에 맞춰 조립합니다.
    fn assemble(&self, negative: bool, int_digits: &str, frac_digits: &str) -> String {
        let significant = int_digits.trim_start_matches('0');
        let mut int_text = "0".repeat(self.min_int.saturating_sub(significant.len()));
        int_text.push_str(significant);
        if int_text.is_empty() {
            int_text.push('0');
        }

        let grouped = match self.grouping {
            Some(size) => group_digits(&int_text, size),
            None => int_text,
        };

        let is_zero = significant.is_empty() && frac_digits.bytes().all(|b| b == b'0');
        let mut out = String::new();
        if negative && !is_zero {
            out.push('-');
        }
        out.push_str(&grouped);
        if !frac_digits.is_empty() {
            out.push('.');
            out.push_str(frac_digits);
        }
        out
    }

    fn render_float(&self, value: f64) -> String {
        let text = format!("{:.*}", self.max_frac, value.abs());
        let (int_digits, frac_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut frac = frac_digits.to_string();
        while frac.len() > self.min_frac && frac.ends_with('0') {
            frac.pop();
        }

        self.assemble(value.is_sign_negative(), int_digits, &frac)
    }

    fn render_integer(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        self.assemble(value < 0, &digits, &"0".repeat(self.min_frac))
    }
}

fn group_digits(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 실수를 패턴에 맞춰 포맷합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 패턴이 잘못되었거나 값이 유한수가 아닌 경우
pub fn format_number(value: f64, pattern: &str) -> AppResult<String> {
    let parsed = NumberPattern::parse(pattern)?;
    if !value.is_finite() {
        return Err(AppError::invalid_format("format_number", value, "value must be finite"));
    }
    Ok(parsed.render_float(value))
}

/// 정수를 패턴에 맞춰 포맷합니다. 부동소수점을 거치지 않으므로 모든 `i64` 값이 정확합니다.
pub fn format_integer(value: i64, pattern: &str) -> AppResult<String> {
    Ok(NumberPattern::parse(pattern)?.render_integer(value))
}

/// 숫자 문자열(`,` 포함 가능)을 패턴에 맞춰 다시 포맷합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - `,`와 `.` 외의 문자가 섞여 숫자로 해석할 수 없는 경우
pub fn format_number_str(s: &str, pattern: &str) -> AppResult<String> {
    let required = string_utils::validate_required_string(s, "number")?;
    let cleaned = string_utils::remove_char(&required, ',');

    if let Ok(integer) = cleaned.parse::<i64>() {
        return format_integer(integer, pattern);
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => format_number(value, pattern),
        _ => Err(AppError::invalid_format(
            "format_number_str",
            s,
            "only digits, ',' and '.' are allowed",
        )),
    }
}

/// 로케일의 통화 표기로 금액을 포맷합니다.
///
/// * `Korean` - `₩1,234`
/// * `English` - `$1,234.00`
pub fn format_currency(value: i64, locale: Locale) -> String {
    let (symbol, pattern) = match locale {
        Locale::Korean => ("₩", NumberPattern::KRW),
        Locale::English => ("$", NumberPattern::USD),
    };

    let body = pattern.render_integer(value);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", symbol, abs),
        None => format!("{}{}", symbol, body),
    }
}

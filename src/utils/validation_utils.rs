//! # 입력값 검증 유틸리티
//!
//! 주민등록번호, 법인등록번호, 사업자등록번호의 형식과 체크섬 검증,
//! 전화번호/휴대폰번호/이메일/카드번호 형식 검증, 사용자 정의 포맷 검증을 제공합니다.
//!
//! 고정 정규식은 최초 사용 시 한 번만 컴파일됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation_utils;
//!
//! assert!(validation_utils::is_resident_reg_number("871224-1237613"));
//! assert!(validation_utils::is_cellphone_number("010-1234-5678"));
//! assert!(validation_utils::is_user_format("AB-123", "SS-###"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CharsetConfig;
use crate::errors::{AppResult, ErrorContext};
use crate::utils::string_utils;

type Pattern = Lazy<Result<Regex, regex::Error>>;

fn is_match(pattern: &Pattern, s: &str) -> bool {
    pattern.as_ref().is_ok_and(|regex| regex.is_match(s))
}

static RESIDENT_REG_NUMBER: Pattern =
    Lazy::new(|| Regex::new(r"^[0-9]{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])-[1-4][0-9]{6}$"));
static INCORP_CERT_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{6}-[0-9]{7}$"));
static BIZ_REG_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{5}$"));
static TELEPHONE_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{2,4}-[0-9]{3,4}-[0-9]{4}$"));
static CELLPHONE_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^01[016789]-[0-9]{3,4}-[0-9]{4}$"));
static EMAIL_ADDRESS: Pattern = Lazy::new(|| Regex::new(r"^[\w.-]+@(?:\w+\.)+[a-zA-Z]{2,4}$"));
static CARD_NUMBER: Pattern =
    Lazy::new(|| Regex::new(r"^[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}$"));

const SPECIAL_CHARS: &str = "~!@#$%<>^&*()-=+_'";

fn digits(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// 주민등록번호(`YYMMDD-GNNNNNN`)의 형식과 체크섬을 검증합니다.
///
/// 앞 12자리에 가중치 `2,3,4,5,6,7,8,9,2,3,4,5`를 곱해 더하고,
/// `(11 - 합 % 11) % 10`이 마지막 자리와 같아야 합니다.
pub fn is_resident_reg_number(reg_number: &str) -> bool {
    if !is_match(&RESIDENT_REG_NUMBER, reg_number) {
        return false;
    }

    const WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];
    let d = digits(reg_number);
    let sum: u32 = d.iter().zip(WEIGHTS).map(|(digit, weight)| digit * weight).sum();

    (11 - sum % 11) % 10 == d[12]
}

/// 법인등록번호(`NNNNNN-NNNNNNN`)의 형식과 체크섬을 검증합니다.
///
/// 앞 12자리에 가중치 1, 2를 번갈아 곱해 더하고, `(10 - 합 % 10) % 10`이 마지막 자리와 같아야 합니다.
pub fn is_incorp_cert_number(corp_number: &str) -> bool {
    if !is_match(&INCORP_CERT_NUMBER, corp_number) {
        return false;
    }

    let d = digits(corp_number);
    let sum: u32 = d[..12]
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * if i % 2 == 0 { 1 } else { 2 })
        .sum();

    (10 - sum % 10) % 10 == d[12]
}

/// 사업자등록번호(`NNN-NN-NNNNN`)의 형식과 체크섬을 검증합니다.
pub fn is_biz_reg_number(biz_number: &str) -> bool {
    if !is_match(&BIZ_REG_NUMBER, biz_number) {
        return false;
    }

    const WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];
    let d = digits(biz_number);
    let mut sum: u32 = d.iter().zip(WEIGHTS).map(|(digit, weight)| digit * weight).sum();
    sum += (d[8] * 5) / 10;

    (10 - sum % 10) % 10 == d[9]
}

/// 일반 전화번호 형식 (`02-123-4567`, `031-1234-5678`)
pub fn is_telephone_number(phone_number: &str) -> bool {
    is_match(&TELEPHONE_NUMBER, phone_number)
}

/// 휴대폰번호 형식 (식별번호 010/011/016/017/018/019)
pub fn is_cellphone_number(cellphone_number: &str) -> bool {
    is_match(&CELLPHONE_NUMBER, cellphone_number)
}

pub fn is_email_address(email: &str) -> bool {
    is_match(&EMAIL_ADDRESS, email)
}

/// 16자리 카드번호 형식. 4자리마다 공백이나 `-` 구분자를 허용합니다.
pub fn is_card_number(card_number: &str) -> bool {
    is_match(&CARD_NUMBER, card_number)
}

/// 문자 수가 `[min, max]` 범위인지 확인합니다.
pub fn is_range_length(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

/// 기본 문자셋으로 인코딩한 바이트 수가 `[min, max]` 범위인지 확인합니다.
pub fn is_range_byte_length(s: &str, min: usize, max: usize) -> bool {
    string_utils::byte_length(s, &CharsetConfig::default_charset()).is_ok_and(|len| (min..=max).contains(&len))
}

/// 사용자 정의 포맷과 일치하는지 확인합니다.
///
/// `#`은 숫자 하나, `S`는 영문자 하나와 일치하고, 나머지 문자는 그대로 비교합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(is_user_format("AB-1234", "SS-####"));
/// assert!(!is_user_format("A1-1234", "SS-####"));
/// ```
pub fn is_user_format(s: &str, pattern: &str) -> bool {
    s.chars().count() == pattern.chars().count()
        && s.chars().zip(pattern.chars()).all(|(c, p)| match p {
            '#' => c.is_ascii_digit(),
            'S' => c.is_ascii_alphabetic(),
            _ => c == p,
        })
}

/// 문자열 전체가 정규식과 일치하는지 확인합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 정규식이 잘못된 경우
pub fn is_regex_pattern_match(s: &str, regex: &str) -> AppResult<bool> {
    let anchored = Regex::new(&format!("^(?:{})$", regex)).format_context("is_regex_pattern_match", regex)?;
    Ok(anchored.is_match(s))
}

/// `*`를 임의 문자열로 해석해 문자열 전체와 비교합니다. 나머지는 정규식 문법을 따릅니다.
pub fn is_pattern_matching(s: &str, pattern: &str) -> AppResult<bool> {
    is_regex_pattern_match(s, &pattern.replace('*', ".*"))
}

/// 문자열의 일부가 정규식과 일치하는지 확인합니다.
pub fn is_regex_pattern_include(s: &str, regex: &str) -> AppResult<bool> {
    let compiled = Regex::new(regex).format_context("is_regex_pattern_include", regex)?;
    Ok(compiled.is_match(s))
}

fn is_hangul(c: char) -> bool {
    matches!(c, 'ㄱ'..='ㅎ' | 'ㅏ'..='ㅣ' | '가'..='힣')
}

/// 플래그로 지정한 문자 종류가 모두 포함되어 있는지 확인합니다.
///
/// * `s` - 특수문자 (`~!@#$%<>^&*()-=+_'`)
/// * `k` - 한글
/// * `e` - 영문자
/// * `n` - 숫자
///
/// 알 수 없는 플래그는 무시하며, 플래그가 없으면 `true`입니다.
pub fn is_pattern_include(s: &str, flags: &str) -> bool {
    flags.chars().all(|flag| match flag {
        's' => s.chars().any(|c| SPECIAL_CHARS.contains(c)),
        'k' => s.chars().any(is_hangul),
        'e' => s.chars().any(|c| c.is_ascii_alphabetic()),
        'n' => s.chars().any(|c| c.is_ascii_digit()),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_resident_reg_number() {
        assert!(is_resident_reg_number("871224-1237613"));

        // 한 자리 변경은 실패
        assert!(!is_resident_reg_number("871224-1237614"));
        assert!(!is_resident_reg_number("871225-1237613"));
        assert!(!is_resident_reg_number("871224-1237623"));
        assert!(!is_resident_reg_number("871224-2237613"));

        // 형식 오류
        assert!(!is_resident_reg_number("8712241237613"));
        assert!(!is_resident_reg_number("871324-1237613"));
        assert!(!is_resident_reg_number("871224-5237613"));
        assert!(!is_resident_reg_number("871224-|237613"));
    }

    #[test]
    fn test_incorp_cert_number() {
        assert!(is_incorp_cert_number("110111-1234569"));
        assert!(!is_incorp_cert_number("110111-1234560"));
        assert!(!is_incorp_cert_number("110111-123456"));
    }

    #[test]
    fn test_biz_reg_number() {
        assert!(is_biz_reg_number("220-81-62517"));
        assert!(!is_biz_reg_number("220-81-62518"));
        assert!(!is_biz_reg_number("2208162517"));
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_telephone_number("02-123-4567"));
        assert!(is_telephone_number("031-1234-5678"));
        assert!(!is_telephone_number("02-12-4567"));

        assert!(is_cellphone_number("010-1234-5678"));
        assert!(is_cellphone_number("017-123-4567"));
        assert!(!is_cellphone_number("012-1234-5678"));
    }

    #[test]
    fn test_email_and_card() {
        assert!(is_email_address("user.name-1@example.co.kr"));
        assert!(!is_email_address("user@localhost"));
        assert!(!is_email_address("@example.com"));

        assert!(is_card_number("1234-5678-9012-3456"));
        assert!(is_card_number("1234 5678 9012 3456"));
        assert!(is_card_number("1234567890123456"));
        assert!(!is_card_number("1234-5678-9012-345"));
    }

    #[test]
    fn test_range_length() {
        assert!(is_range_length("한글", 2, 2));
        assert!(!is_range_length("abc", 4, 10));
        // 기본 문자셋(UTF-8)에서 한글은 3바이트
        assert!(is_range_byte_length("한글", 6, 6));
        assert!(!is_range_byte_length("한글", 1, 4));
    }

    #[test]
    fn test_user_format() {
        assert!(is_user_format("AB-1234", "SS-####"));
        assert!(!is_user_format("A1-1234", "SS-####"));
        assert!(is_user_format("(02)123.4", "(##)###.#"));
        assert!(!is_user_format("AB-12345", "SS-####"));
    }

    #[test]
    fn test_regex_patterns() {
        assert!(is_regex_pattern_match("abc123", "[a-z]+[0-9]+").unwrap());
        assert!(!is_regex_pattern_match("abc123x", "[a-z]+[0-9]+").unwrap());
        assert!(matches!(is_regex_pattern_match("a", "("), Err(AppError::InvalidFormat { .. })));

        assert!(is_pattern_matching("report_2024.pdf", "report*pdf").unwrap());
        assert!(!is_pattern_matching("summary.pdf", "report*").unwrap());

        assert!(is_regex_pattern_include("id=42;", "[0-9]+").unwrap());
        assert!(!is_regex_pattern_include("none", "[0-9]+").unwrap());
    }

    #[test]
    fn test_pattern_include() {
        assert!(is_pattern_include("pass!", "s"));
        assert!(is_pattern_include("비밀번호", "k"));
        assert!(is_pattern_include("ㄱㄴ", "k"));
        assert!(is_pattern_include("abc1", "en"));
        assert!(!is_pattern_include("abc", "en"));
        assert!(!is_pattern_include("abc", "s"));
        assert!(is_pattern_include("anything", ""));
    }
}

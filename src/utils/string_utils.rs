//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::errors::{AppError, AppResult};
use crate::utils::charset;

/// 공백을 걷어낸 입력값을 돌려주고, 남는 것이 없으면 거부합니다.
///
/// `number_utils::format_number_str`처럼 빈 입력을 받아선 안 되는 함수의 첫 단계로 씁니다.
///
/// # Arguments
///
/// * `value` - 사용자 입력
/// * `field_name` - 에러의 `target`에 기록할 이름
///
/// # Errors
///
/// * `AppError::InvalidFormat` - op `validate_required_string`, reason `value is required`
///
/// # Examples
///
/// ```rust,ignore
/// let amount = validate_required_string(" 1,000 ", "amount")?; // "1,000"
/// assert!(matches!(
///     validate_required_string("\t\n", "amount"),
///     Err(AppError::InvalidFormat { .. })
/// ));
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format(
            "validate_required_string",
            field_name,
            "value is required",
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백 외의 문자가 하나라도 있으면 `true`.
///
/// 환경 변수처럼 비어 있으면 기본값으로 대체할 입력을 거를 때 씁니다
/// (`CharsetConfig::default_charset` 참고).
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 문자열에서 지정한 문자를 모두 제거합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(remove_char("1,234,567", ','), "1234567");
/// ```
pub fn remove_char(value: &str, target: char) -> String {
    value.chars().filter(|c| *c != target).collect()
}

/// 문자열을 지정 문자셋으로 인코딩했을 때의 바이트 수
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(byte_length("한글", "EUC-KR")?, 4);
/// assert_eq!(byte_length("한글", "UTF-8")?, 6);
/// ```
pub fn byte_length(value: &str, charset_name: &str) -> AppResult<usize> {
    Ok(charset::encode(value, charset_name)?.len())
}

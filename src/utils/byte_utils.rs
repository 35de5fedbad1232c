//! # 바이트 배열 유틸리티
//!
//! 바이트 배열과 16진수 문자열, 진법 문자열, 고정 길이 정수(big-endian),
//! 문자셋 문자열 사이의 변환을 제공합니다.

use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::charset;

const RADIX_16: u32 = 16;
const RADIX_10: u32 = 10;
const RADIX_8: u32 = 8;

/// 두 바이트 배열이 같은지 비교합니다.
///
/// 둘 다 `None`이면 같은 것으로 봅니다.
pub fn equals(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    a == b
}

/// 16진수 문자열을 바이트 배열로 변환합니다.
///
/// 대소문자를 모두 허용하며, 실패 시 부분 결과를 반환하지 않습니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 홀수 자릿수이거나 16진수가 아닌 문자가 있는 경우
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(hex_to_bytes("0aff")?, vec![0x0a, 0xff]);
/// assert!(hex_to_bytes("abc").is_err());
/// ```
pub fn hex_to_bytes(digits: &str) -> AppResult<Vec<u8>> {
    if digits.len() % 2 == 1 {
        return Err(AppError::invalid_format(
            "hex_to_bytes",
            digits,
            "the number of digits must be even",
        ));
    }

    hex::decode(digits).format_context("hex_to_bytes", digits)
}

/// 진법 문자열을 바이트 배열로 변환합니다.
///
/// 16진수는 2자리, 8진수와 10진수는 3자리씩 끊어 한 바이트로 해석합니다.
///
/// # Errors
///
/// * `AppError::Unsupported` - 8, 10, 16 이외의 진법
/// * `AppError::InvalidFormat` - 자릿수가 단위로 나누어떨어지지 않거나,
///   숫자가 아니거나, 255를 넘는 값
pub fn radix_to_bytes(digits: &str, radix: u32) -> AppResult<Vec<u8>> {
    let width = match radix {
        RADIX_16 => 2,
        RADIX_10 | RADIX_8 => 3,
        _ => return Err(AppError::unsupported("radix_to_bytes", format!("radix {}", radix))),
    };

    if !digits.is_ascii() || digits.len() % width != 0 {
        return Err(AppError::invalid_format(
            "radix_to_bytes",
            digits,
            format!("length must be a multiple of {}", width),
        ));
    }

    digits
        .as_bytes()
        .chunks(width)
        .map(|chunk| {
            // is_ascii 검사를 통과했으므로 항상 유효한 UTF-8
            let unit = std::str::from_utf8(chunk).unwrap_or_default();
            let value = u16::from_str_radix(unit, radix).format_context("radix_to_bytes", unit)?;
            u8::try_from(value)
                .map_err(|_| AppError::invalid_format("radix_to_bytes", unit, "value exceeds 255"))
        })
        .collect()
}

/// 바이트 하나를 2자리 소문자 16진수로 변환합니다.
pub fn byte_to_hex(b: u8) -> String {
    format!("{:02x}", b)
}

/// 바이트 배열을 소문자 16진수 문자열로 변환합니다.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// 바이트 배열의 일부 구간을 16진수 문자열로 변환합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 구간이 배열 범위를 벗어난 경우
pub fn bytes_to_hex_range(bytes: &[u8], offset: usize, len: usize) -> AppResult<String> {
    let end = offset.checked_add(len).filter(|end| *end <= bytes.len()).ok_or_else(|| {
        AppError::invalid_format(
            "bytes_to_hex_range",
            format!("{}..{}+{}", bytes.len(), offset, len),
            "range out of bounds",
        )
    })?;

    Ok(hex::encode(&bytes[offset..end]))
}

/// 바이트 배열을 덤프 형식의 16진수 문자열로 변환합니다.
///
/// 바이트마다 `"xx "`, 8바이트마다 공백 하나를 더하고, 16바이트마다 `"\r\n"`으로 줄을 바꿉니다.
pub fn pretty_hex(bytes: &[u8]) -> String {
    layout_hex_units(&bytes_to_hex(bytes))
}

/// 16진수 문자열을 덤프 형식으로 변환합니다. 입력의 대소문자는 유지됩니다.
pub fn pretty_hex_str(hex_str: &str) -> AppResult<String> {
    hex_to_bytes(hex_str)?;
    Ok(layout_hex_units(hex_str))
}

fn layout_hex_units(hex_str: &str) -> String {
    let mut result = String::with_capacity(hex_str.len() * 2);

    for (i, unit) in hex_str.as_bytes().chunks(2).enumerate() {
        let n = i + 1;
        result.extend(unit.iter().map(|b| *b as char));
        result.push(' ');

        if n % 16 == 0 {
            result.push_str("\r\n");
        } else if n % 8 == 0 {
            result.push(' ');
        }
    }

    result
}

/// 32비트 정수를 big-endian 4바이트로 변환합니다.
pub fn int_to_bytes(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// 64비트 정수를 big-endian 8바이트로 변환합니다.
pub fn long_to_bytes(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

/// 32비트 정수를 `dest[pos..pos + 4]`에 기록합니다.
pub fn write_int(value: i32, dest: &mut [u8], pos: usize) -> AppResult<()> {
    write_be(&value.to_be_bytes(), dest, pos, "write_int")
}

/// 64비트 정수를 `dest[pos..pos + 8]`에 기록합니다.
pub fn write_long(value: i64, dest: &mut [u8], pos: usize) -> AppResult<()> {
    write_be(&value.to_be_bytes(), dest, pos, "write_long")
}

fn write_be(src: &[u8], dest: &mut [u8], pos: usize, op: &str) -> AppResult<()> {
    let target = dest
        .get_mut(pos..pos.saturating_add(src.len()))
        .ok_or_else(|| AppError::invalid_format(op, format!("position {}", pos), "destination too short"))?;
    target.copy_from_slice(src);
    Ok(())
}

/// big-endian 4바이트를 32비트 정수로 변환합니다.
pub fn bytes_to_int(src: &[u8]) -> AppResult<i32> {
    bytes_to_int_at(src, 0)
}

/// `src[pos..pos + 4]`의 big-endian 값을 32비트 정수로 변환합니다.
pub fn bytes_to_int_at(src: &[u8], pos: usize) -> AppResult<i32> {
    let raw: [u8; 4] = read_be(src, pos, "bytes_to_int")?;
    Ok(i32::from_be_bytes(raw))
}

/// big-endian 8바이트를 64비트 정수로 변환합니다.
pub fn bytes_to_long(src: &[u8]) -> AppResult<i64> {
    bytes_to_long_at(src, 0)
}

/// `src[pos..pos + 8]`의 big-endian 값을 64비트 정수로 변환합니다.
pub fn bytes_to_long_at(src: &[u8], pos: usize) -> AppResult<i64> {
    let raw: [u8; 8] = read_be(src, pos, "bytes_to_long")?;
    Ok(i64::from_be_bytes(raw))
}

fn read_be<const N: usize>(src: &[u8], pos: usize, op: &str) -> AppResult<[u8; N]> {
    src.get(pos..pos.saturating_add(N))
        .and_then(|slice| <[u8; N]>::try_from(slice).ok())
        .ok_or_else(|| {
            AppError::invalid_format(op, format!("position {}", pos), format!("need {} bytes", N))
        })
}

/// 부호 있는 바이트를 부호 없는 값(0..=255)으로 변환합니다.
pub fn unsigned_byte(b: i8) -> u8 {
    b as u8
}

/// 10진수 문자열을 부호 있는 바이트로 파싱합니다.
pub fn parse_byte(value: &str) -> AppResult<i8> {
    value.trim().parse::<i8>().format_context("parse_byte", value)
}

/// 문자열을 지정된 문자셋의 바이트 배열로 변환합니다.
pub fn string_to_bytes(data: &str, charset: &str) -> AppResult<Vec<u8>> {
    charset::encode(data, charset)
}

/// 바이트 배열을 지정된 문자셋의 문자열로 변환합니다.
pub fn bytes_to_string(bytes: &[u8], charset: &str) -> AppResult<String> {
    charset::decode(bytes, charset)
}

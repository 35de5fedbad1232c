//! # 문자셋 변환
//!
//! 이름으로 지정된 문자셋(`UTF-8`, `EUC-KR`, `UTF-16BE` 등)과 Rust 문자열 사이의
//! 인코딩/디코딩을 담당합니다. 레이블 해석은 `encoding_rs`(WHATWG 레이블)를 따릅니다.
//!
//! 인코딩 시 대상 문자셋에 없는 문자는 `?`로, 디코딩 시 잘못된 바이트열은
//! U+FFFD로 대체됩니다.

use encoding_rs::{EncoderResult, Encoding, UTF_16BE, UTF_16LE};

use crate::errors::{AppError, AppResult};

/// 문자셋 레이블로 인코딩을 찾습니다.
///
/// # Errors
///
/// * `AppError::Unsupported` - 알 수 없는 레이블
pub fn lookup(charset: &str) -> AppResult<&'static Encoding> {
    Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| AppError::unsupported("charset_lookup", charset))
}

/// 문자셋의 정규 이름을 반환합니다.
pub fn canonical_name(charset: &str) -> AppResult<&'static str> {
    lookup(charset).map(Encoding::name)
}

/// 문자열을 지정된 문자셋의 바이트열로 인코딩합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(encode("한", "EUC-KR")?, vec![0xC7, 0xD1]);
/// assert_eq!(encode("한", "UTF-8")?.len(), 3);
/// ```
pub fn encode(s: &str, charset: &str) -> AppResult<Vec<u8>> {
    let encoding = lookup(charset)?;

    if encoding == UTF_16BE {
        return Ok(s.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }
    if encoding == UTF_16LE {
        return Ok(s.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }

    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(s.len() + 16);
    let mut rest = s;

    loop {
        let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        rest = &rest[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => out.reserve(rest.len() * 4 + 16),
            EncoderResult::Unmappable(_) => {
                out.reserve(1);
                out.push(b'?');
            }
        }
    }

    Ok(out)
}

/// 바이트열을 지정된 문자셋으로 디코딩합니다.
///
/// BOM은 제거하지 않고 그대로 문자로 취급합니다.
pub fn decode(bytes: &[u8], charset: &str) -> AppResult<String> {
    let encoding = lookup(charset)?;
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}

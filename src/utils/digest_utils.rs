//! # 메시지 다이제스트 / 인코딩 유틸리티
//!
//! Base64 인코딩/디코딩과 단방향 패스워드 해시(MD5, SHA-1, SHA-256)를 제공합니다.
//! Base64 디코딩은 어떤 입력에도 실패하지 않는 전함수입니다.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::errors::{AppError, AppResult};
use crate::utils::charset;

/// 패딩 유무와 남는 비트를 허용하는 디코딩 엔진
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 문자열을 지정 문자셋으로 인코딩했다가 다시 디코딩합니다.
///
/// 문자셋에 없는 문자는 `?`로 바뀝니다.
pub fn encode_charset(s: &str, charset_name: &str) -> AppResult<String> {
    let bytes = charset::encode(s, charset_name)?;
    charset::decode(&bytes, charset_name)
}

/// 바이트 배열을 Base64 문자열로 인코딩합니다.
pub fn encode_base64_string(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// 바이트 배열을 Base64 바이트 배열로 인코딩합니다.
pub fn encode_base64_bytes(data: &[u8]) -> Vec<u8> {
    STANDARD.encode(data).into_bytes()
}

/// Base64 입력을 디코딩합니다.
///
/// 알파벳 밖의 문자(공백, 줄바꿈 등)는 건너뛰고, URL-safe 문자(`-`, `_`)도 허용합니다.
/// 패딩은 있어도 없어도 되며, 첫 `=`에서 데이터가 끝난 것으로 보고 이후 입력은 무시합니다.
/// 4로 나눈 나머지가 1인 마지막 한 글자는 버립니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(decode_base64_bytes("aGVsbG8="), b"hello");
/// assert_eq!(decode_base64_bytes("aGVs\nbG8"), b"hello");
/// assert_eq!(decode_base64_bytes("!!!"), b"");
/// assert_eq!(decode_base64_bytes("QQ==QQ=="), b"A");
/// ```
pub fn decode_base64_bytes(input: impl AsRef<[u8]>) -> Vec<u8> {
    let mut cleaned: Vec<u8> = input
        .as_ref()
        .iter()
        .take_while(|b| **b != b'=')
        .filter_map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => Some(*b),
            b'-' => Some(b'+'),
            b'_' => Some(b'/'),
            _ => None,
        })
        .collect();

    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }

    LENIENT.decode(&cleaned).unwrap_or_default()
}

/// Base64 입력을 디코딩해 UTF-8 문자열로 반환합니다. 잘못된 UTF-8은 U+FFFD로 대체됩니다.
pub fn decode_base64_string(input: impl AsRef<[u8]>) -> String {
    String::from_utf8_lossy(&decode_base64_bytes(input)).into_owned()
}

/// 패스워드 해시 알고리즘
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secure {
    Md5,
    Sha1,
    Sha256,
}

impl Secure {
    pub fn algorithm(&self) -> &'static str {
        match self {
            Secure::Md5 => "md5",
            Secure::Sha1 => "sha-1",
            Secure::Sha256 => "sha-256",
        }
    }
}

impl fmt::Display for Secure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm())
    }
}

impl FromStr for Secure {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Secure::Md5),
            "sha-1" | "sha1" => Ok(Secure::Sha1),
            "sha-256" | "sha256" => Ok(Secure::Sha256),
            _ => Err(AppError::unsupported("digest_algorithm", s)),
        }
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// 패스워드를 지정 알고리즘으로 해시해 소문자 16진수 문자열로 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(
///     encode_password("abc", Secure::Md5),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub fn encode_password(password: &str, secure: Secure) -> String {
    let data = password.as_bytes();
    match secure {
        Secure::Md5 => hex_digest::<Md5>(data),
        Secure::Sha1 => hex_digest::<Sha1>(data),
        Secure::Sha256 => hex_digest::<Sha256>(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode() {
        assert_eq!(encode_base64_string(b"hello"), "aGVsbG8=");
        assert_eq!(encode_base64_bytes(b"hi"), b"aGk=".to_vec());
        assert_eq!(encode_base64_string(b""), "");
    }

    #[test]
    fn test_base64_decode_lenient() {
        assert_eq!(decode_base64_bytes("aGVsbG8="), b"hello".to_vec());
        assert_eq!(decode_base64_bytes("aGVsbG8"), b"hello".to_vec());
        assert_eq!(decode_base64_bytes("aGVs\r\nbG8="), b"hello".to_vec());
        assert_eq!(decode_base64_bytes(b"aGk="), b"hi".to_vec());
        // 남는 한 글자는 버림
        assert_eq!(decode_base64_bytes("aGVsx"), b"hel".to_vec());
        assert_eq!(decode_base64_bytes("!!!"), Vec::<u8>::new());
        assert_eq!(decode_base64_string("7ZWc6riA"), "한글");
    }

    #[test]
    fn test_base64_decode_stops_at_padding() {
        assert_eq!(decode_base64_bytes("QQ==QQ=="), b"A".to_vec());
        assert_eq!(decode_base64_bytes("aGk=aGVsbG8="), b"hi".to_vec());
        assert_eq!(decode_base64_bytes("=aGk="), Vec::<u8>::new());
    }

    #[test]
    fn test_base64_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_base64_bytes(encode_base64_string(&data)), data);
    }

    #[test]
    fn test_encode_password() {
        assert_eq!(encode_password("abc", Secure::Md5), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            encode_password("abc", Secure::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            encode_password("abc", Secure::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_secure_from_str() {
        assert_eq!("SHA-256".parse::<Secure>().unwrap(), Secure::Sha256);
        assert_eq!("md5".parse::<Secure>().unwrap(), Secure::Md5);
        assert_eq!(Secure::Sha1.to_string(), "sha-1");
        assert!(matches!("sha-512".parse::<Secure>(), Err(AppError::Unsupported { .. })));
    }

    #[test]
    fn test_encode_charset() {
        assert_eq!(encode_charset("한글abc", "EUC-KR").unwrap(), "한글abc");
        assert_eq!(encode_charset("a😀", "EUC-KR").unwrap(), "a?");
        assert!(encode_charset("abc", "bogus").is_err());
    }
}

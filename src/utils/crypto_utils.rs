//! # 대칭키 암호화 유틸리티 (Triple-DES)
//!
//! 24바이트 Triple-DES(EDE3) 키 생성과 암복호화를 제공합니다.
//! 키는 48자리 16진수 문자열로 주고받습니다.
//!
//! ## 보안 주의
//!
//! 이 모듈은 **ECB 모드 + PKCS#7 패딩, IV 없음** 구성을 사용합니다.
//! 같은 평문 블록은 항상 같은 암호문 블록이 되므로 패턴이 노출되는 약한 구성입니다.
//! 기존에 암호화된 데이터와의 호환을 위해 유지하며, 새 데이터 보호에는 AEAD 암호를 사용해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::crypto_utils;
//!
//! let key = crypto_utils::generate_hex_des_key();
//! let cipher_hex = crypto_utils::encrypt_string_by_des(&key, "안녕하세요", "UTF-8")?;
//! let plain = crypto_utils::decrypt_string_by_des(&key, &cipher_hex, "UTF-8")?;
//! assert_eq!(plain, "안녕하세요");
//! ```

use des::TdesEde3;
use ecb::cipher::block_padding::Pkcs7;
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use rand::RngCore;

use crate::errors::{AppError, AppResult};
use crate::utils::{byte_utils, charset};

type TdesEcbEnc = ecb::Encryptor<TdesEde3>;
type TdesEcbDec = ecb::Decryptor<TdesEde3>;

/// Triple-DES 키 길이(바이트)
pub const DES_EDE_KEY_LEN: usize = 24;

/// 각 바이트의 최하위 비트를 조정해 1의 개수를 홀수로 맞춥니다.
fn adjust_odd_parity(key: &mut [u8]) {
    for b in key.iter_mut() {
        let high = *b & 0xFE;
        *b = if high.count_ones() % 2 == 0 { high | 1 } else { high };
    }
}

/// 스레드 로컬 난수 생성기로 Triple-DES 키를 생성합니다.
///
/// # Returns
///
/// 48자리 소문자 16진수 키 문자열
pub fn generate_hex_des_key() -> String {
    generate_hex_des_key_with(&mut rand::thread_rng())
}

/// 주어진 난수 생성기로 Triple-DES 키를 생성합니다.
///
/// 시드를 고정한 생성기를 넘기면 같은 키가 만들어집니다.
pub fn generate_hex_des_key_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut key = [0u8; DES_EDE_KEY_LEN];
    rng.fill_bytes(&mut key);
    adjust_odd_parity(&mut key);
    byte_utils::bytes_to_hex(&key)
}

/// 16진수 키를 디코딩해 앞 24바이트를 사용합니다. 더 긴 키의 나머지는 무시합니다.
fn key_from_hex(key_hex: &str, op: &str) -> AppResult<Vec<u8>> {
    let mut key = byte_utils::hex_to_bytes(key_hex)
        .map_err(|_| AppError::invalid_format(op, "key", "key is not a valid hex string"))?;

    if key.len() < DES_EDE_KEY_LEN {
        return Err(AppError::invalid_format(
            op,
            "key",
            format!("key must be at least {} bytes, got {}", DES_EDE_KEY_LEN, key.len()),
        ));
    }

    key.truncate(DES_EDE_KEY_LEN);
    Ok(key)
}

/// 바이트 배열을 암호화합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 키가 16진수가 아니거나 24바이트보다 짧은 경우
pub fn encrypt_by_des(key_hex: &str, data: &[u8]) -> AppResult<Vec<u8>> {
    let op = "encrypt_by_des";
    let key = key_from_hex(key_hex, op)?;
    let cipher = TdesEcbEnc::new_from_slice(&key).map_err(|e| AppError::crypto(op, e))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
}

/// 바이트 배열을 복호화합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 키가 16진수가 아니거나 24바이트보다 짧은 경우
/// * `AppError::Crypto` - 블록 길이나 패딩이 맞지 않는 경우 (다른 키로 암호화된 데이터 포함)
pub fn decrypt_by_des(key_hex: &str, data: &[u8]) -> AppResult<Vec<u8>> {
    let op = "decrypt_by_des";
    let key = key_from_hex(key_hex, op)?;
    let cipher = TdesEcbDec::new_from_slice(&key).map_err(|e| AppError::crypto(op, e))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| AppError::crypto(op, "invalid block length or padding"))
}

/// 문자열을 지정 문자셋으로 인코딩해 암호화하고, 암호문을 16진수 문자열로 반환합니다.
pub fn encrypt_string_by_des(key_hex: &str, data: &str, encoding: &str) -> AppResult<String> {
    let plain = charset::encode(data, encoding)?;
    let encrypted = encrypt_by_des(key_hex, &plain)?;
    Ok(byte_utils::bytes_to_hex(&encrypted))
}

/// 16진수 암호문을 복호화해 지정 문자셋의 문자열로 반환합니다.
pub fn decrypt_string_by_des(key_hex: &str, data_hex: &str, encoding: &str) -> AppResult<String> {
    let encrypted = byte_utils::hex_to_bytes(data_hex)?;
    let decrypted = decrypt_by_des(key_hex, &encrypted)?;
    charset::decode(&decrypted, encoding)
}

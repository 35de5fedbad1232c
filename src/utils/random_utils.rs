//! # 난수 문자열 유틸리티
//!
//! 영문자, 한글 음절, 지정 범위 문자로 이루어진 난수 문자열을 만듭니다.
//! 모든 함수는 난수 생성기를 인자로 받으므로, 테스트에서는 [`seeded_rng`]로
//! 결과를 고정할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::random_utils;
//!
//! let mut rng = random_utils::seeded_rng(42);
//! let token = random_utils::alphabetic(&mut rng, 16);
//! let name = random_utils::korean(&mut rng, 3);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::{AppError, AppResult};
use crate::utils::digest_utils;

const ALPHAS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 한글 음절 시작 코드 (`가`)
const HANGUL_BASE: u32 = 0xAC00;
/// 한글 음절 개수 (`가`..=`힣`)
const HANGUL_COUNT: u32 = 11_172;

/// 시드를 고정한 재현 가능한 난수 생성기
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// 영문 대소문자로 이루어진 `count` 글자 문자열
pub fn alphabetic<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(ALPHAS[rng.gen_range(0..ALPHAS.len())]))
        .collect()
}

/// 길이가 `[min, max)` 범위에서 무작위로 정해지는 영문 문자열
///
/// # Errors
///
/// * `AppError::InvalidFormat` - `min >= max`인 경우
pub fn alphabetic_between<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> AppResult<String> {
    if min >= max {
        return Err(AppError::invalid_format(
            "alphabetic_between",
            format!("{}..{}", min, max),
            "min must be less than max",
        ));
    }

    let length = rng.gen_range(min..max);
    Ok(alphabetic(rng, length))
}

/// `start..=end` 코드 범위 안의 영문자만으로 이루어진 문자열
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 범위 안에 영문자가 하나도 없는 경우
pub fn alphabetic_in_range<R: Rng + ?Sized>(rng: &mut R, count: usize, start: char, end: char) -> AppResult<String> {
    let letters: Vec<char> = (start..=end).filter(char::is_ascii_alphabetic).collect();
    if letters.is_empty() {
        return Err(AppError::invalid_format(
            "alphabetic_in_range",
            format!("{}..={}", start, end),
            "range contains no letters",
        ));
    }

    Ok((0..count).map(|_| letters[rng.gen_range(0..letters.len())]).collect())
}

/// 한글 음절(U+AC00..U+D7A3)로 이루어진 `count` 글자 문자열
pub fn korean<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .filter_map(|_| char::from_u32(HANGUL_BASE + rng.gen_range(0..HANGUL_COUNT)))
        .collect()
}

/// 영문 난수 문자열을 지정 문자셋으로 인코딩/디코딩한 결과
pub fn string_by_charset<R: Rng + ?Sized>(rng: &mut R, count: usize, charset_name: &str) -> AppResult<String> {
    digest_utils::encode_charset(&alphabetic(rng, count), charset_name)
}

/// 스레드 로컬 난수 생성기로 만든 영문 문자열
pub fn get_string(count: usize) -> String {
    alphabetic(&mut rand::thread_rng(), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic() {
        let mut rng = seeded_rng(1);
        let s = alphabetic(&mut rng, 32);
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(alphabetic(&mut rng, 0), "");
    }

    #[test]
    fn test_seeded_is_deterministic() {
        assert_eq!(alphabetic(&mut seeded_rng(9), 20), alphabetic(&mut seeded_rng(9), 20));
        assert_ne!(alphabetic(&mut seeded_rng(9), 20), alphabetic(&mut seeded_rng(10), 20));
    }

    #[test]
    fn test_alphabetic_between() {
        let mut rng = seeded_rng(2);
        for _ in 0..100 {
            let len = alphabetic_between(&mut rng, 3, 6).unwrap().len();
            assert!((3..6).contains(&len));
        }
        assert!(matches!(alphabetic_between(&mut rng, 5, 5), Err(AppError::InvalidFormat { .. })));
    }

    #[test]
    fn test_alphabetic_in_range() {
        let mut rng = seeded_rng(3);
        let s = alphabetic_in_range(&mut rng, 50, 'X', 'c').unwrap();
        // '[', '\\', ']', '^', '_', '`'는 제외됨
        assert!(s.chars().all(|c| matches!(c, 'X'..='Z' | 'a'..='c')));

        assert!(matches!(alphabetic_in_range(&mut rng, 5, '0', '9'), Err(AppError::InvalidFormat { .. })));
    }

    #[test]
    fn test_korean() {
        let s = korean(&mut seeded_rng(4), 10);
        assert_eq!(s.chars().count(), 10);
        assert!(s.chars().all(|c| ('가'..='힣').contains(&c)));
    }

    #[test]
    fn test_string_by_charset_and_get_string() {
        let s = string_by_charset(&mut seeded_rng(5), 8, "EUC-KR").unwrap();
        assert_eq!(s.len(), 8);
        assert!(string_by_charset(&mut seeded_rng(5), 8, "nope").is_err());

        assert_eq!(get_string(12).len(), 12);
    }
}

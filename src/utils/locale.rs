//! 날짜/숫자 표기에 사용하는 로케일

use std::str::FromStr;

use crate::errors::AppError;

/// 표기 로케일
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "ko_kr" | "ko-kr" | "korean" => Ok(Locale::Korean),
            "en" | "en_us" | "en-us" | "english" => Ok(Locale::English),
            _ => Err(AppError::unsupported("locale", s)),
        }
    }
}

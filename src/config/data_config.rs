//! 실행 환경 및 유틸리티 기본값 설정 모듈
//!
//! 실행 환경, 시간대 오프셋, I/O 버퍼 크기, 기본 문자셋을 관리합니다.

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use dotenv::dotenv;
use log::{error, info, warn};

use crate::utils::string_utils;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`이며 실패하지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

/// 날짜/시간 계산에 사용하는 시간대 설정
pub struct TimeConfig;

impl TimeConfig {
    /// 기본 시간대 오프셋(시간 단위)
    pub const DEFAULT_OFFSET_HOURS: i32 = 9;

    /// UTC 기준 시간대 오프셋을 반환합니다.
    ///
    /// # Returns
    ///
    /// -23..=23 범위의 시간 값. 기본값: 9 (KST)
    ///
    /// # Environment Variables
    ///
    /// - `UTILS_UTC_OFFSET_HOURS`: 커스텀 오프셋
    pub fn utc_offset_hours() -> i32 {
        if let Ok(value) = env::var("UTILS_UTC_OFFSET_HOURS") {
            match value.trim().parse::<i32>() {
                Ok(hours) if (-23..=23).contains(&hours) => return hours,
                _ => warn!(
                    "UTILS_UTC_OFFSET_HOURS 값이 올바르지 않습니다: {}. 기본값 {} 사용",
                    value,
                    Self::DEFAULT_OFFSET_HOURS
                ),
            }
        }

        Self::DEFAULT_OFFSET_HOURS
    }

    /// 설정된 오프셋을 `FixedOffset`으로 반환합니다.
    pub fn offset() -> FixedOffset {
        Self::offset_for_hours(Self::utc_offset_hours())
    }

    /// 주어진 시간 오프셋에 대한 `FixedOffset`을 만듭니다.
    ///
    /// 범위를 벗어난 값은 기본 오프셋으로 대체됩니다.
    pub fn offset_for_hours(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600)
            .or_else(|| FixedOffset::east_opt(Self::DEFAULT_OFFSET_HOURS * 3600))
            .unwrap_or_else(|| Utc.fix())
    }
}

/// 스트림 복사 설정
pub struct IoConfig;

impl IoConfig {
    pub const DEFAULT_BUFFER_SIZE: usize = 4096;
    const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

    /// 스트림 복사에 사용할 버퍼 크기를 반환합니다.
    ///
    /// # Returns
    ///
    /// 1 바이트 ~ 16 MiB 범위의 버퍼 크기. 기본값: 4096
    ///
    /// # Environment Variables
    ///
    /// - `UTILS_IO_BUFFER_SIZE`: 커스텀 버퍼 크기
    pub fn buffer_size() -> usize {
        env::var("UTILS_IO_BUFFER_SIZE")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|size| (1..=Self::MAX_BUFFER_SIZE).contains(size))
            .unwrap_or(Self::DEFAULT_BUFFER_SIZE)
    }
}

/// 문자셋 설정
pub struct CharsetConfig;

impl CharsetConfig {
    pub const DEFAULT_CHARSET: &'static str = "UTF-8";

    /// 문자셋 인자가 생략되었을 때 사용할 기본 문자셋을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `UTILS_DEFAULT_CHARSET`: 문자셋 레이블 (예: `EUC-KR`)
    pub fn default_charset() -> String {
        match env::var("UTILS_DEFAULT_CHARSET") {
            Ok(label) if !string_utils::is_valid_string(&label) => Self::DEFAULT_CHARSET.to_string(),
            Ok(label) if encoding_rs::Encoding::for_label(label.trim().as_bytes()).is_some() => {
                label.trim().to_string()
            }
            Ok(label) => {
                warn!("알 수 없는 문자셋 레이블: {}. 기본값 UTF-8 사용", label);
                Self::DEFAULT_CHARSET.to_string()
            }
            Err(_) => Self::DEFAULT_CHARSET.to_string(),
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("stage".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("unknown".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_time_config_defaults() {
        if env::var("UTILS_UTC_OFFSET_HOURS").is_err() {
            assert_eq!(TimeConfig::utc_offset_hours(), 9);
            assert_eq!(TimeConfig::offset().local_minus_utc(), 9 * 3600);
        }
    }

    #[test]
    fn test_offset_for_hours() {
        assert_eq!(TimeConfig::offset_for_hours(0).local_minus_utc(), 0);
        assert_eq!(TimeConfig::offset_for_hours(-5).local_minus_utc(), -5 * 3600);
        // 범위를 벗어나면 기본값으로 대체
        assert_eq!(TimeConfig::offset_for_hours(99).local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_io_and_charset_defaults() {
        if env::var("UTILS_IO_BUFFER_SIZE").is_err() {
            assert_eq!(IoConfig::buffer_size(), 4096);
        }

        if env::var("UTILS_DEFAULT_CHARSET").is_err() {
            assert_eq!(CharsetConfig::default_charset(), "UTF-8");
        }
    }
}

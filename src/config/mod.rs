//! # Configuration Module
//!
//! 유틸리티 함수들이 공유하는 기본값을 관리하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 값이 없거나 잘못된 경우 항상 안전한 기본값으로 동작합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 시간대, I/O 버퍼, 문자셋 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{CharsetConfig, IoConfig, TimeConfig};
//!
//! let offset = TimeConfig::offset();          // 기본 +09:00
//! let buffer = IoConfig::buffer_size();       // 기본 4096
//! let charset = CharsetConfig::default_charset(); // 기본 "UTF-8"
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"       # development, test, staging, production
//! export UTILS_UTC_OFFSET_HOURS="9"      # -23..=23
//! export UTILS_IO_BUFFER_SIZE="8192"     # 1..=16777216
//! export UTILS_DEFAULT_CHARSET="EUC-KR"  # encoding 레이블
//! ```

pub mod data_config;

pub use data_config::*;

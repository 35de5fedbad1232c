//! 라이브러리 전역에서 사용하는 에러 시스템
//!
//! 유틸리티 함수들을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 모든 실패를 하나의 타입으로 표현하며,
//! 각 변형은 실패한 작업 이름(`op`), 대상(경로/값), 원인을 함께 담습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult, IoContext};
//!
//! fn load(path: &Path) -> AppResult<Vec<u8>> {
//!     if !path.exists() {
//!         return Err(AppError::not_found("load", path.display()));
//!     }
//!
//!     std::fs::read(path).io_context("load", path.display())
//! }
//! ```

use std::fmt::Display;
use std::io;

use thiserror::Error;

/// 라이브러리 전역 에러 타입
///
/// 유틸리티 함수에서 발생할 수 있는 모든 종류의 실패를 포괄하는 열거형입니다.
/// 권한 거부나 읽기 전용 파일 같은 경우는 `Io` 변형의
/// `io::ErrorKind::PermissionDenied`로 표현됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 대상 경로가 존재하지 않음
    #[error("{op}: '{target}' does not exist")]
    NotFound { op: String, target: String },

    /// 디렉토리가 필요한 위치에 다른 것이 있음
    #[error("{op}: '{target}' is not a directory")]
    NotADirectory { op: String, target: String },

    /// 일반 파일이 필요한 위치에 다른 것이 있음
    #[error("{op}: '{target}' is not a file")]
    NotAFile { op: String, target: String },

    /// 파싱/포맷/길이 검증 실패
    #[error("{op}: invalid format '{target}': {reason}")]
    InvalidFormat {
        op: String,
        target: String,
        reason: String,
    },

    /// 지원하지 않는 진법, 알고리즘, 문자셋, 옵션
    #[error("{op}: unsupported '{target}'")]
    Unsupported { op: String, target: String },

    /// 암호화 키/패딩/암복호화 실패
    #[error("{op}: crypto error: {reason}")]
    Crypto { op: String, reason: String },

    /// 로컬 네트워크 정보 조회 실패
    #[error("{op}: network error: {reason}")]
    Network { op: String, reason: String },

    /// 인터럽트 가능한 대기가 중단됨
    #[error("{op}: interrupted")]
    Interrupted { op: String },

    /// 그 밖의 I/O 실패
    #[error("{op}: I/O error on '{target}': {source}")]
    Io {
        op: String,
        target: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn not_found(op: &str, target: impl Display) -> Self {
        AppError::NotFound {
            op: op.to_string(),
            target: target.to_string(),
        }
    }

    pub fn not_a_directory(op: &str, target: impl Display) -> Self {
        AppError::NotADirectory {
            op: op.to_string(),
            target: target.to_string(),
        }
    }

    pub fn not_a_file(op: &str, target: impl Display) -> Self {
        AppError::NotAFile {
            op: op.to_string(),
            target: target.to_string(),
        }
    }

    pub fn invalid_format(op: &str, target: impl Display, reason: impl Display) -> Self {
        AppError::InvalidFormat {
            op: op.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported(op: &str, target: impl Display) -> Self {
        AppError::Unsupported {
            op: op.to_string(),
            target: target.to_string(),
        }
    }

    pub fn crypto(op: &str, reason: impl Display) -> Self {
        AppError::Crypto {
            op: op.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network(op: &str, reason: impl Display) -> Self {
        AppError::Network {
            op: op.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn interrupted(op: &str) -> Self {
        AppError::Interrupted { op: op.to_string() }
    }

    pub fn io(op: &str, target: impl Display, source: io::Error) -> Self {
        AppError::Io {
            op: op.to_string(),
            target: target.to_string(),
            source,
        }
    }

    /// 읽기 전용 파일 등 권한 문제로 실패한 경우를 만듭니다.
    pub fn permission_denied(op: &str, target: impl Display, detail: &str) -> Self {
        AppError::io(
            op,
            target,
            io::Error::new(io::ErrorKind::PermissionDenied, detail.to_string()),
        )
    }

    /// 에러를 발생시킨 작업 이름
    pub fn op(&self) -> &str {
        match self {
            AppError::NotFound { op, .. }
            | AppError::NotADirectory { op, .. }
            | AppError::NotAFile { op, .. }
            | AppError::InvalidFormat { op, .. }
            | AppError::Unsupported { op, .. }
            | AppError::Crypto { op, .. }
            | AppError::Network { op, .. }
            | AppError::Interrupted { op }
            | AppError::Io { op, .. } => op,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// `std::io::Result`를 AppResult로 변환하는 확장 trait
pub trait IoContext<T> {
    /// 작업 이름과 대상 정보를 붙여 에러를 변환합니다.
    fn io_context(self, op: &str, target: impl Display) -> AppResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context(self, op: &str, target: impl Display) -> AppResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::not_found(op, target),
            _ => AppError::io(op, target, e),
        })
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 작업 이름과 대상 값을 붙여 `InvalidFormat`으로 변환합니다.
    fn format_context(self, op: &str, target: impl Display) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Display,
{
    fn format_context(self, op: &str, target: impl Display) -> AppResult<T> {
        self.map_err(|e| AppError::invalid_format(op, target, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message() {
        let error = AppError::not_found("copy_file", "/tmp/none.txt");

        assert_eq!(error.to_string(), "copy_file: '/tmp/none.txt' does not exist");
        assert_eq!(error.op(), "copy_file");
    }

    #[test]
    fn test_io_context_keeps_source() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        let app_result = result.io_context("write", "a.txt");

        match app_result {
            Err(error @ AppError::Io { .. }) => {
                assert!(error.to_string().contains("disk full"));
                assert!(error.source().is_some());
            }
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_io_context_maps_not_found() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert!(matches!(
            result.io_context("read", "b.txt"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_permission_denied_is_io_kind() {
        let error = AppError::permission_denied("open_output_stream", "c.txt", "read-only");

        if let AppError::Io { source, .. } = error {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io");
        }
    }

    #[test]
    fn test_format_context_trait() {
        let result: Result<i32, std::num::ParseIntError> = "x1".parse::<i32>();
        let app_result = result.format_context("parse_byte", "x1");

        if let Err(AppError::InvalidFormat { op, target, .. }) = app_result {
            assert_eq!(op, "parse_byte");
            assert_eq!(target, "x1");
        } else {
            panic!("Expected InvalidFormat");
        }
    }
}

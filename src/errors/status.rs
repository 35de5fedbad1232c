//! 처리 결과 상태값
//!
//! 호출마다 새로 만들어지는 불변 상태값입니다. 공유되거나 변경되지 않습니다.

use serde::Serialize;

use super::AppResult;

/// 처리 결과 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "PascalCase")]
pub enum Status {
    Success,
    Fail { message: String },
    True,
    False,
    Empty,
}

impl Status {
    /// 상태 코드 문자열
    pub fn code(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Fail { .. } => "Fail",
            Status::True => "True",
            Status::False => "False",
            Status::Empty => "Empty",
        }
    }

    /// 상태 메시지
    ///
    /// `Fail`은 실패 원인을, 나머지는 고정 메시지를 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            Status::Success => "RESULT_SUCCESS",
            Status::Fail { message } => message,
            Status::True => "RESULT_TRUE",
            Status::False => "RESULT_FALSE",
            Status::Empty => "RESULT_EMPTY",
        }
    }

    pub fn from_result<T>(result: &AppResult<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(e) => Status::Fail {
                message: e.to_string(),
            },
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value { Status::True } else { Status::False }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success | Status::True)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_status_from_result() {
        let ok: AppResult<()> = Ok(());
        assert_eq!(Status::from_result(&ok), Status::Success);

        let err: AppResult<()> = Err(AppError::not_found("delete_file", "x.txt"));
        let status = Status::from_result(&err);
        assert_eq!(status.code(), "Fail");
        assert_eq!(status.message(), "delete_file: 'x.txt' does not exist");
        assert!(!status.is_success());
    }

    #[test]
    fn test_status_values_are_independent() {
        // 한 호출의 실패가 다른 호출의 결과에 영향을 주지 않아야 함
        let first = Status::Fail {
            message: "first".to_string(),
        };
        let second = Status::Fail {
            message: "second".to_string(),
        };

        assert_eq!(first.message(), "first");
        assert_eq!(second.message(), "second");
    }

    #[test]
    fn test_status_serialize() {
        let json = serde_json::to_value(Status::Fail {
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "code": "Fail", "message": "boom" }));

        let json = serde_json::to_value(Status::from_bool(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "True" }));
    }
}

//! 에러 타입과 처리 결과 상태값

pub mod errors;
pub mod status;

pub use errors::{AppError, AppResult, ErrorContext, IoContext};
pub use status::Status;

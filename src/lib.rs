//! 공통 유틸리티 라이브러리
//!
//! 애플리케이션 전반에서 반복되는 작업을 위한 상태 없는 함수 모음입니다.
//! 각 모듈은 표준 라이브러리나 검증된 외부 크레이트에 위임하는 독립 함수들로 구성됩니다.
//!
//! # Features
//!
//! - **바이트/문자셋**: 16진수·진법 변환, 빅엔디언 정수, 문자셋 인코딩
//! - **날짜/시간**: strftime 패턴 기반 파싱·포맷·연산, 나이 계산
//! - **암호화/다이제스트**: Triple-DES, Base64, MD5/SHA-1/SHA-256
//! - **파일/스트림**: 복사·이동·삭제·목록 조회, 스트림 복사와 문자셋 변환
//! - **검증**: 주민등록번호·사업자등록번호·법인등록번호 체크섬, 전화번호·이메일 형식
//! - **기타**: 숫자 포맷, 난수 문자열, 네트워크 정보, 시간 단위 sleep
//!
//! # Structure
//!
//! ```text
//! ┌─────────────────┐
//! │     utils       │ ← 관심사별 자유 함수 모듈
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ errors + config │ ← AppError/Status, 환경변수 기반 설정
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use common_utils::errors::{AppResult, Status};
//! use common_utils::utils::{crypto_utils, file_utils};
//!
//! let key = crypto_utils::generate_hex_des_key();
//! let cipher = crypto_utils::encrypt_string_by_des(&key, "비밀", "UTF-8")?;
//!
//! let result = file_utils::copy_file("a.txt", "backup/a.txt", true);
//! println!("{}", Status::from_result(&result).message());
//! ```

pub mod config;
pub mod errors;
pub mod utils;

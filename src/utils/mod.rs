//! 공통 유틸리티 함수 모듈
//!
//! 상태를 갖지 않는 자유 함수들을 관심사별 모듈로 나누어 제공합니다.
//! 모듈 간 재사용은 직접 함수 호출로만 이루어집니다.
//!
//! # Modules
//!
//! - [`byte_utils`] - 16진수/진법 변환, 고정 길이 정수 직렬화
//! - [`charset`] - 이름으로 지정한 문자셋 인코딩/디코딩
//! - [`date_utils`] - 날짜 파싱, 포맷, 연산, 검증
//! - [`age_utils`] - 만 나이, 한국식 나이
//! - [`crypto_utils`] - Triple-DES 키 생성과 암복호화
//! - [`digest_utils`] - Base64, 패스워드 해시
//! - [`file_utils`] - 파일/디렉토리 복사, 이동, 삭제, 목록 조회
//! - [`file_filter`] - 와일드카드/접미사 파일 필터
//! - [`file_name_utils`] - 경로 문자열 처리
//! - [`io_utils`] - 스트림 복사, 읽기, 쓰기
//! - [`validation_utils`] - 주민/사업자/법인 번호, 전화번호 등 검증
//! - [`number_utils`] - 숫자 종류 판별, 패턴 포맷, 통화 표기
//! - [`random_utils`] - 난수 문자열
//! - [`net_utils`] - 로컬 IP, MAC 주소, 호스트명
//! - [`thread_utils`] - 시간 단위 sleep
//! - [`string_utils`] - 필수 문자열 검증, 문자 제거, 바이트 길이
//! - [`locale`] - 날짜/숫자 표기 로케일
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::{date_utils, validation_utils};
//!
//! let tomorrow = date_utils::add_days("2024-02-28", 1, date_utils::DATE_PATTERN_DASH)?;
//! assert_eq!(tomorrow, "2024-02-29");
//! assert!(validation_utils::is_resident_reg_number("871224-1237613"));
//! ```

pub mod age_utils;
pub mod byte_utils;
pub mod charset;
pub mod crypto_utils;
pub mod date_utils;
pub mod digest_utils;
pub mod file_filter;
pub mod file_name_utils;
pub mod file_utils;
pub mod io_utils;
pub mod locale;
pub mod net_utils;
pub mod number_utils;
pub mod random_utils;
pub mod string_utils;
pub mod thread_utils;
pub mod validation_utils;

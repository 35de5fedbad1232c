//! 공통 유틸리티 점검용 실행 파일
//!
//! 현재 호스트에서 환경 설정, 네트워크 정보, 시각, 암호화 키 생성을
//! 한 번씩 호출해 결과를 로그로 출력합니다. 수동 점검 용도입니다.

use env_logger::Env;
use log::{error, info};

use common_utils::config::{self, CharsetConfig, Environment, TimeConfig};
use common_utils::errors::AppResult;
use common_utils::utils::{crypto_utils, date_utils, file_utils, net_utils};

fn main() {
    config::load_env_file();
    init_logging();

    info!("🚀 공통 유틸리티 점검 시작...");
    info!(
        "⚙️ 환경: {:?}, UTC 오프셋: {}시간, 기본 문자셋: {}",
        Environment::current(),
        TimeConfig::utc_offset_hours(),
        CharsetConfig::default_charset()
    );

    if let Err(e) = report() {
        error!("❌ 점검 실패: {}", e);
        std::process::exit(1);
    }

    info!("✅ 점검 완료");
}

/// 호스트 정보와 샘플 값을 로그로 출력합니다
fn report() -> AppResult<()> {
    info!("🖥️ 호스트명: {}", net_utils::hostname()?);

    match net_utils::local_ip() {
        Ok(ip) => info!("🌐 로컬 IP: {}", ip),
        Err(e) => error!("로컬 IP 조회 실패: {}", e),
    }
    match net_utils::mac_address() {
        Ok(mac) => info!("🔌 MAC 주소: {}", mac),
        Err(e) => error!("MAC 주소 조회 실패: {}", e),
    }

    info!("🕒 현재 시각: {}", date_utils::current_date_time(date_utils::DATE_TIME_PATTERN)?);
    info!("📂 작업 디렉토리: {}", file_utils::current_dir()?.display());
    info!("🔑 샘플 Triple-DES 키: {}", crypto_utils::generate_hex_des_key());

    Ok(())
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// # Examples
///
/// ```bash
/// # 파일 작업 debug 로그까지 출력
/// RUST_LOG=common_utils=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

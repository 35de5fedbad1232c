//! # 네트워크 정보 유틸리티
//!
//! 로컬 호스트의 IP 주소, MAC 주소, 호스트명을 조회합니다.

use std::net::IpAddr;

use log::warn;

use crate::errors::{AppError, AppResult};

/// 외부로 나가는 기본 경로에 사용되는 로컬 IP 주소
///
/// # Errors
///
/// * `AppError::Network` - 네트워크 인터페이스를 조회할 수 없는 경우
pub fn local_ip() -> AppResult<IpAddr> {
    local_ip_address::local_ip().map_err(|e| AppError::network("local_ip", e))
}

/// MAC 주소를 `AA-BB-CC-DD-EE-FF` 형식으로 반환합니다.
fn format_mac(bytes: [u8; 6]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join("-")
}

/// 로컬 IP를 가진 인터페이스의 MAC 주소를 반환합니다.
///
/// 해당 인터페이스를 찾지 못하면 첫 번째 하드웨어 주소를 사용합니다.
///
/// # Returns
///
/// `AA-BB-CC-DD-EE-FF` 형식의 대문자 MAC 주소
///
/// # Errors
///
/// * `AppError::Network` - 하드웨어 주소를 가진 인터페이스가 없는 경우
pub fn mac_address() -> AppResult<String> {
    let op = "mac_address";

    if let Some(mac) = mac_of_local_ip() {
        return Ok(format_mac(mac));
    }

    warn!("로컬 IP 인터페이스의 MAC 주소를 찾지 못해 첫 번째 하드웨어 주소를 사용합니다");
    match mac_address::get_mac_address() {
        Ok(Some(mac)) => Ok(format_mac(mac.bytes())),
        Ok(None) => Err(AppError::network(op, "no hardware address found")),
        Err(e) => Err(AppError::network(op, e)),
    }
}

fn mac_of_local_ip() -> Option<[u8; 6]> {
    let ip = local_ip_address::local_ip().ok()?;
    let interfaces = local_ip_address::list_afinet_netifas().ok()?;
    let (name, _) = interfaces.into_iter().find(|(_, addr)| *addr == ip)?;

    mac_address::mac_address_by_name(&name)
        .ok()
        .flatten()
        .map(|mac| mac.bytes())
}

/// 로컬 호스트명
///
/// # Errors
///
/// * `AppError::Network` - 호스트명이 비어 있거나 UTF-8이 아닌 경우
pub fn hostname() -> AppResult<String> {
    let op = "hostname";
    let name = gethostname::gethostname()
        .into_string()
        .map_err(|_| AppError::network(op, "hostname is not valid UTF-8"))?;

    if name.is_empty() {
        return Err(AppError::network(op, "hostname is empty"));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mac() {
        assert_eq!(format_mac([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]), "00-1A-2B-3C-4D-5E");
        assert_eq!(format_mac([0xFF; 6]), "FF-FF-FF-FF-FF-FF");
    }

    #[test]
    fn test_hostname_is_not_empty() {
        let name = hostname().unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn test_lookups_return_network_errors() {
        // 네트워크 환경에 따라 실패할 수 있으나, 실패는 항상 Network 에러
        match local_ip() {
            Ok(ip) => assert!(!ip.is_unspecified()),
            Err(e) => assert!(matches!(e, AppError::Network { .. })),
        }

        match mac_address() {
            Ok(mac) => {
                assert_eq!(mac.len(), 17);
                assert_eq!(mac.matches('-').count(), 5);
            }
            Err(e) => assert!(matches!(e, AppError::Network { .. })),
        }
    }
}

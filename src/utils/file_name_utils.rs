//! # 파일 이름 유틸리티
//!
//! 경로 문자열을 다루는 함수들입니다. 파일 시스템에 접근하지 않으며,
//! `/`와 `\`를 모두 구분자로 취급합니다.
//!
//! 경로는 접두사(`C:\`, `/`, `~user/`, `\\server\`), 경로, 이름으로 나뉩니다.
//!
//! ```text
//! C:\a\b\c.txt   접두사 "C:\"  경로 "a\b\"  이름 "c.txt"
//! /a/b/c.txt     접두사 "/"    경로 "a/b/"  이름 "c.txt"
//! ```

use std::path::MAIN_SEPARATOR;

const UNIX_SEPARATOR: char = '/';
const WINDOWS_SEPARATOR: char = '\\';
const EXTENSION_SEPARATOR: char = '.';

fn is_separator(c: char) -> bool {
    c == UNIX_SEPARATOR || c == WINDOWS_SEPARATOR
}

fn index_of_last_separator(filename: &str) -> Option<usize> {
    filename.rfind(is_separator)
}

fn index_of_extension(filename: &str) -> Option<usize> {
    let extension_pos = filename.rfind(EXTENSION_SEPARATOR)?;
    match index_of_last_separator(filename) {
        Some(sep) if sep > extension_pos => None,
        _ => Some(extension_pos),
    }
}

/// 파일 이름에서 접두사 길이를 반환합니다.
///
/// 접두사가 잘못된 경우(`:` 시작, 서버 이름이 없는 UNC 등) `None`을 반환합니다.
/// `~user`처럼 구분자 없이 끝나는 경우 문자열 길이 + 1을 반환합니다.
pub fn get_prefix_length(filename: &str) -> Option<usize> {
    let chars: Vec<char> = filename.chars().collect();
    let len = chars.len();

    if len == 0 {
        return Some(0);
    }

    let ch0 = chars[0];
    if ch0 == ':' {
        return None;
    }

    if len == 1 {
        if ch0 == '~' {
            return Some(2);
        }
        return Some(usize::from(is_separator(ch0)));
    }

    if ch0 == '~' {
        return match chars[1..].iter().position(|c| is_separator(*c)) {
            Some(pos) => Some(pos + 2),
            None => Some(len + 1),
        };
    }

    let ch1 = chars[1];
    if ch1 == ':' {
        let drive = ch0.to_ascii_uppercase();
        if drive.is_ascii_uppercase() {
            if len == 2 || !is_separator(chars[2]) {
                return Some(2);
            }
            return Some(3);
        }
        return None;
    }

    if is_separator(ch0) && is_separator(ch1) {
        return match chars[2..].iter().position(|c| is_separator(*c)) {
            Some(0) | None => None,
            Some(pos) => Some(pos + 3),
        };
    }

    Some(usize::from(is_separator(ch0)))
}

// 접두사 계산은 문자 단위이므로 바이트 위치로 바꿔서 자릅니다.
fn char_prefix(filename: &str, char_count: usize) -> &str {
    match filename.char_indices().nth(char_count) {
        Some((idx, _)) => &filename[..idx],
        None => filename,
    }
}

/// 접두사를 반환합니다. `~user`는 `~user/`가 됩니다.
pub fn get_prefix(filename: &str) -> Option<String> {
    let len = get_prefix_length(filename)?;
    if len > filename.chars().count() {
        return Some(format!("{}{}", filename, UNIX_SEPARATOR));
    }
    Some(char_prefix(filename, len).to_string())
}

fn do_get_path(filename: &str, separator_add: usize) -> Option<String> {
    let prefix = char_prefix(filename, get_prefix_length(filename)?).len();
    let Some(index) = index_of_last_separator(filename) else {
        return Some(String::new());
    };
    let end = index + separator_add;

    if prefix >= filename.len() || prefix >= end {
        return Some(String::new());
    }
    Some(filename[prefix..end].to_string())
}

/// 접두사를 제외한 경로를 끝 구분자와 함께 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(get_path("C:\\a\\b\\c.txt").as_deref(), Some("a\\b\\"));
/// assert_eq!(get_path("/a/b/c.txt").as_deref(), Some("a/b/"));
/// assert_eq!(get_path("a.txt").as_deref(), Some(""));
/// ```
pub fn get_path(filename: &str) -> Option<String> {
    do_get_path(filename, 1)
}

/// 접두사를 제외한 경로를 끝 구분자 없이 반환합니다.
pub fn get_path_no_end_separator(filename: &str) -> Option<String> {
    do_get_path(filename, 0)
}

fn do_get_full_path(filename: &str, include_separator: bool) -> Option<String> {
    let prefix_chars = get_prefix_length(filename)?;
    if prefix_chars >= filename.chars().count() {
        if include_separator {
            return get_prefix(filename);
        }
        return Some(filename.to_string());
    }

    let prefix = char_prefix(filename, prefix_chars).len();
    let Some(index) = index_of_last_separator(filename) else {
        return Some(filename[..prefix].to_string());
    };

    let mut end = index + usize::from(include_separator);
    if end == 0 {
        end += 1;
    }
    Some(filename[..end].to_string())
}

/// 접두사를 포함한 전체 경로를 끝 구분자와 함께 반환합니다.
pub fn get_full_path(filename: &str) -> Option<String> {
    do_get_full_path(filename, true)
}

/// 접두사를 포함한 전체 경로를 끝 구분자 없이 반환합니다.
pub fn get_full_path_no_end_separator(filename: &str) -> Option<String> {
    do_get_full_path(filename, false)
}

/// 마지막 구분자 뒤의 이름을 반환합니다.
pub fn get_name(filename: &str) -> String {
    match index_of_last_separator(filename) {
        Some(index) => filename[index + 1..].to_string(),
        None => filename.to_string(),
    }
}

/// 확장자를 뺀 이름을 반환합니다.
pub fn get_base_name(filename: &str) -> String {
    remove_extension(&get_name(filename))
}

/// 확장자(점 제외)를 반환합니다. 없으면 빈 문자열입니다.
pub fn get_extension(filename: &str) -> String {
    match index_of_extension(filename) {
        Some(index) => filename[index + 1..].to_string(),
        None => String::new(),
    }
}

/// 확장자를 제거한 경로를 반환합니다.
pub fn remove_extension(filename: &str) -> String {
    match index_of_extension(filename) {
        Some(index) => filename[..index].to_string(),
        None => filename.to_string(),
    }
}

/// `file://`, `sftp://`, `ftp://`, `smb://` 접두사를 제거한 경로를 반환합니다.
///
/// 알려진 접두사가 아니면 빈 문자열을 반환합니다.
pub fn get_path_without_prefix(uri: &str) -> String {
    ["file://", "sftp://", "ftp://", "smb://"]
        .iter()
        .find_map(|scheme| uri.strip_prefix(scheme))
        .unwrap_or_default()
        .to_string()
}

/// 구분자를 `/`로 바꿉니다.
pub fn separators_to_unix(path: &str) -> String {
    path.replace(WINDOWS_SEPARATOR, "/")
}

/// 구분자를 `\`로 바꿉니다.
pub fn separators_to_windows(path: &str) -> String {
    path.replace(UNIX_SEPARATOR, "\\")
}

/// 구분자를 현재 시스템의 구분자로 바꿉니다.
pub fn separators_to_system(path: &str) -> String {
    if MAIN_SEPARATOR == WINDOWS_SEPARATOR {
        separators_to_windows(path)
    } else {
        separators_to_unix(path)
    }
}

/// 시스템 구분자로 끝나지 않으면 덧붙입니다.
pub fn append_file_separator(path: &str) -> String {
    if path.ends_with(MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", path, MAIN_SEPARATOR)
    }
}

/// Windows 구분자로 바꾼 뒤 `\`로 끝나도록 합니다.
pub fn append_windows_file_separator(path: &str) -> String {
    let path = separators_to_windows(path);
    if path.ends_with(WINDOWS_SEPARATOR) {
        path
    } else {
        format!("{}{}", path, WINDOWS_SEPARATOR)
    }
}

/// Unix 구분자로 바꾼 뒤 `/`로 끝나도록 합니다.
pub fn append_unix_file_separator(path: &str) -> String {
    let path = separators_to_unix(path);
    if path.ends_with(UNIX_SEPARATOR) {
        path
    } else {
        format!("{}{}", path, UNIX_SEPARATOR)
    }
}

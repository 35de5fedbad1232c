//! # 파일 필터
//!
//! 파일 목록 조회와 디렉토리 복사에 사용하는 필터들입니다.
//! 필터는 경로의 파일 이름(마지막 구성요소)을 기준으로 판단합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::file_filter::{FileFilter, WildcardExcludeFileFilter};
//!
//! let filter = WildcardExcludeFileFilter::new(["seq-*.*"]);
//! assert!(!filter.accept(Path::new("seq-001.txt")));
//! assert!(filter.accept(Path::new("report.txt")));
//! ```

use std::fmt;
use std::path::Path;

/// 경로 수락 여부를 판단하는 필터
pub trait FileFilter {
    fn accept(&self, path: &Path) -> bool;
}

impl<F> FileFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// 파일 이름 비교 시 대소문자 구분 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoCase {
    #[default]
    Sensitive,
    Insensitive,
    /// Windows에서는 구분하지 않고, 그 밖의 시스템에서는 구분합니다.
    System,
}

impl IoCase {
    pub fn is_case_sensitive(&self) -> bool {
        match self {
            IoCase::Sensitive => true,
            IoCase::Insensitive => false,
            IoCase::System => !cfg!(windows),
        }
    }

    fn fold(&self, s: &str) -> Vec<char> {
        if self.is_case_sensitive() {
            s.chars().collect()
        } else {
            s.chars().flat_map(char::to_lowercase).collect()
        }
    }

    /// 대소문자 구분 방식에 따라 `name`이 `suffix`로 끝나는지 확인합니다.
    pub fn ends_with(&self, name: &str, suffix: &str) -> bool {
        let name = self.fold(name);
        let suffix = self.fold(suffix);
        name.ends_with(&suffix)
    }
}

/// 파일 이름이 와일드카드 패턴과 일치하는지 확인합니다.
///
/// `?`는 정확히 한 글자, `*`는 0개 이상의 글자와 일치합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(wildcard_match("seq-001.txt", "seq-*.*", IoCase::Sensitive));
/// assert!(wildcard_match("A.TXT", "a.t?t", IoCase::Insensitive));
/// ```
pub fn wildcard_match(name: &str, pattern: &str, case: IoCase) -> bool {
    let text = case.fold(name);
    let pat = case.fold(pattern);

    let (mut t, mut p) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut star_text = 0usize;

    while t < text.len() {
        if p < pat.len() && (pat[p] == '?' || pat[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pat.len() && pat[p] == '*' {
            star = Some(p);
            star_text = t;
            p += 1;
        } else if let Some(star_pos) = star {
            p = star_pos + 1;
            star_text += 1;
            t = star_text;
        } else {
            return false;
        }
    }

    pat[p..].iter().all(|c| *c == '*')
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, items: &[String]) -> fmt::Result {
    write!(f, "{}({})", name, items.join(","))
}

/// 와일드카드 중 하나라도 일치하는 파일을 수락하는 필터
#[derive(Debug, Clone)]
pub struct WildcardFileFilter {
    wildcards: Vec<String>,
    case: IoCase,
}

impl WildcardFileFilter {
    pub fn new<I, S>(wildcards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wildcards: wildcards.into_iter().map(Into::into).collect(),
            case: IoCase::Sensitive,
        }
    }

    pub fn with_case(mut self, case: IoCase) -> Self {
        self.case = case;
        self
    }
}

impl FileFilter for WildcardFileFilter {
    fn accept(&self, path: &Path) -> bool {
        let name = file_name(path);
        self.wildcards.iter().any(|w| wildcard_match(&name, w, self.case))
    }
}

impl fmt::Display for WildcardFileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "WildcardFileFilter", &self.wildcards)
    }
}

/// 어떤 와일드카드와도 일치하지 않는 파일만 수락하는 필터
#[derive(Debug, Clone)]
pub struct WildcardExcludeFileFilter {
    wildcards: Vec<String>,
    case: IoCase,
}

impl WildcardExcludeFileFilter {
    pub fn new<I, S>(wildcards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wildcards: wildcards.into_iter().map(Into::into).collect(),
            case: IoCase::Sensitive,
        }
    }

    pub fn with_case(mut self, case: IoCase) -> Self {
        self.case = case;
        self
    }
}

impl FileFilter for WildcardExcludeFileFilter {
    fn accept(&self, path: &Path) -> bool {
        let name = file_name(path);
        !self.wildcards.iter().any(|w| wildcard_match(&name, w, self.case))
    }
}

impl fmt::Display for WildcardExcludeFileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "WildcardExcludeFileFilter", &self.wildcards)
    }
}

/// 파일 이름이 접미사 중 하나로 끝나면 수락하는 필터
#[derive(Debug, Clone)]
pub struct SuffixFileFilter {
    suffixes: Vec<String>,
    case: IoCase,
}

impl SuffixFileFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            case: IoCase::Sensitive,
        }
    }

    pub fn with_case(mut self, case: IoCase) -> Self {
        self.case = case;
        self
    }
}

impl FileFilter for SuffixFileFilter {
    fn accept(&self, path: &Path) -> bool {
        let name = file_name(path);
        self.suffixes.iter().any(|s| self.case.ends_with(&name, s))
    }
}

impl fmt::Display for SuffixFileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "SuffixFileFilter", &self.suffixes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_match() {
        assert!(wildcard_match("seq-001.txt", "seq-*.*", IoCase::Sensitive));
        assert!(wildcard_match("abc", "a?c", IoCase::Sensitive));
        assert!(wildcard_match("abc", "*", IoCase::Sensitive));
        assert!(wildcard_match("", "*", IoCase::Sensitive));
        assert!(wildcard_match("a.tar.gz", "*.gz", IoCase::Sensitive));
        assert!(!wildcard_match("abc", "a?", IoCase::Sensitive));
        assert!(!wildcard_match("ABC.txt", "abc.*", IoCase::Sensitive));
        assert!(wildcard_match("ABC.txt", "abc.*", IoCase::Insensitive));
        assert!(wildcard_match("한글파일.txt", "한*.txt", IoCase::Sensitive));
    }

    #[test]
    fn test_wildcard_exclude_filter() {
        let filter = WildcardExcludeFileFilter::new(["seq-*.*"]);
        assert!(!filter.accept(Path::new("/data/seq-001.txt")));
        assert!(filter.accept(Path::new("/data/report.txt")));
        assert_eq!(filter.to_string(), "WildcardExcludeFileFilter(seq-*.*)");

        let filter = WildcardExcludeFileFilter::new(vec!["*.LOG", "tmp*"]).with_case(IoCase::Insensitive);
        assert!(!filter.accept(Path::new("a.log")));
        assert!(!filter.accept(Path::new("TMP1")));
        assert!(filter.accept(Path::new("a.txt")));
        assert_eq!(filter.to_string(), "WildcardExcludeFileFilter(*.LOG,tmp*)");
    }

    #[test]
    fn test_wildcard_and_suffix_filters() {
        let wildcard = WildcardFileFilter::new(["*.txt"]);
        assert!(wildcard.accept(Path::new("x/a.txt")));
        assert!(!wildcard.accept(Path::new("x/a.csv")));

        let suffix = SuffixFileFilter::new([".JPG"]).with_case(IoCase::Insensitive);
        assert!(suffix.accept(Path::new("photo.jpg")));
        assert!(!suffix.accept(Path::new("photo.png")));
        assert_eq!(suffix.to_string(), "SuffixFileFilter(.JPG)");
    }

    #[test]
    fn test_closure_filter() {
        let only_rs = |p: &Path| p.extension().is_some_and(|e| e == "rs");
        assert!(only_rs.accept(Path::new("lib.rs")));
        assert!(!only_rs.accept(Path::new("lib.toml")));
    }
}

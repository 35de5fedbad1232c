//! # 파일/디렉토리 유틸리티
//!
//! 파일과 디렉토리의 복사, 이동, 삭제, 생성, 목록 조회, 열기, 읽기를 제공합니다.
//! 모든 작업은 먼저 원본/대상의 존재 여부와 종류를 확인하고,
//! 필요한 대상 디렉토리는 자동으로 생성합니다.
//!
//! 목록 조회 결과는 절대 경로이며 경로 순으로 정렬됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::file_utils::{self, CopyFilter};
//!
//! file_utils::copy_dir("/data/in", "/data/backup", CopyFilter::All, true)?;
//! let logs = file_utils::list_files_by_wildcard("/data/backup", &["*.log"], true)?;
//! for name in file_utils::path_names(&logs) {
//!     println!("{}", name);
//! }
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::CharsetConfig;
use crate::errors::{AppError, AppResult, IoContext};
use crate::utils::file_filter::{FileFilter, IoCase, SuffixFileFilter, WildcardExcludeFileFilter, WildcardFileFilter};
use crate::utils::{charset, file_name_utils};
use crate::utils::io_utils::{self, CharsetWriter};

pub const ONE_KB: u64 = 1024;
pub const ONE_MB: u64 = ONE_KB * ONE_KB;
pub const ONE_GB: u64 = ONE_KB * ONE_MB;
pub const ONE_TB: u64 = ONE_KB * ONE_GB;
pub const ONE_PB: u64 = ONE_KB * ONE_TB;
pub const ONE_EB: u64 = ONE_KB * ONE_PB;

/// 디렉토리 복사 시 복사할 항목의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFilter {
    /// 하위 트리 전체
    #[default]
    All,
    /// 최상위 파일만 (하위 디렉토리는 복사하지 않음)
    FilesOnly,
    /// 디렉토리 구조만 (파일 제외)
    DirsOnly,
}

impl CopyFilter {
    fn accept(&self, is_dir: bool) -> bool {
        match self {
            CopyFilter::All => true,
            CopyFilter::FilesOnly => !is_dir,
            CopyFilter::DirsOnly => is_dir,
        }
    }
}

impl FromStr for CopyFilter {
    type Err = AppError;

    /// `""` → `All`, `"file"` → `FilesOnly`, `"dir"` → `DirsOnly` (대소문자 무시)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(CopyFilter::All),
            "file" => Ok(CopyFilter::FilesOnly),
            "dir" => Ok(CopyFilter::DirsOnly),
            _ => Err(AppError::unsupported("copy_filter", s)),
        }
    }
}

fn require_dir(op: &str, dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        return Err(AppError::not_found(op, dir.display()));
    }
    if !dir.is_dir() {
        return Err(AppError::not_a_directory(op, dir.display()));
    }
    Ok(())
}

fn require_file(op: &str, file: &Path) -> AppResult<()> {
    if !file.exists() {
        return Err(AppError::not_found(op, file.display()));
    }
    if !file.is_file() {
        return Err(AppError::not_a_file(op, file.display()));
    }
    Ok(())
}

/// 대상 디렉토리가 없으면 만들고, 디렉토리인지 확인합니다.
fn ensure_dir(op: &str, dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).io_context(op, dir.display())?;
    }
    if !dir.is_dir() {
        return Err(AppError::not_a_directory(op, dir.display()));
    }
    Ok(())
}

fn ensure_parent(op: &str, path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(op, parent),
        _ => Ok(()),
    }
}

fn file_name_of(op: &str, path: &Path) -> AppResult<PathBuf> {
    let absolute = std::path::absolute(path).io_context(op, path.display())?;
    absolute
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| AppError::invalid_format(op, path.display(), "path has no file name"))
}

/// 심볼릭 링크와 상대 경로를 풀어낸 경로. 아직 없는 경로는 존재하는 조상 기준으로 만듭니다.
fn resolve_path(op: &str, path: &Path) -> AppResult<PathBuf> {
    if path.exists() {
        return fs::canonicalize(path).io_context(op, path.display());
    }
    let absolute = std::path::absolute(path).io_context(op, path.display())?;
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(resolve_path(op, parent)?.join(name)),
        _ => Ok(absolute),
    }
}

fn is_same_file(op: &str, src: &Path, dest: &Path) -> AppResult<bool> {
    Ok(dest.exists() && resolve_path(op, src)? == resolve_path(op, dest)?)
}

fn walk_error(op: &str, root: &Path, error: walkdir::Error) -> AppError {
    let target = error.path().unwrap_or(root).display().to_string();
    match error.into_io_error() {
        Some(source) => AppError::io(op, target, source),
        None => AppError::io(op, target, io::Error::other("filesystem loop detected")),
    }
}

/// 바이트 수를 사람이 읽기 쉬운 크기로 표시합니다 (정수 나눗셈).
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(byte_count_to_display_size(1023), "1023 bytes");
/// assert_eq!(byte_count_to_display_size(1536), "1 KB");
/// ```
pub fn byte_count_to_display_size(size: u64) -> String {
    const UNITS: [(u64, &str); 6] = [
        (ONE_EB, "EB"),
        (ONE_PB, "PB"),
        (ONE_TB, "TB"),
        (ONE_GB, "GB"),
        (ONE_MB, "MB"),
        (ONE_KB, "KB"),
    ];

    UNITS
        .iter()
        .find(|(unit, _)| size / unit > 0)
        .map(|(unit, name)| format!("{} {}", size / unit, name))
        .unwrap_or_else(|| format!("{} bytes", size))
}

/// 파일 크기(디렉토리는 하위 파일 크기 합)를 표시용 문자열로 반환합니다.
pub fn display_size_of(path: impl AsRef<Path>) -> AppResult<String> {
    let op = "display_size_of";
    let path = path.as_ref();
    if !path.exists() {
        return Err(AppError::not_found(op, path.display()));
    }

    let size = if path.is_dir() {
        let mut total = 0u64;
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|e| walk_error(op, path, e))?;
            if entry.file_type().is_file() {
                total += entry.metadata().map_err(|e| walk_error(op, path, e))?.len();
            }
        }
        total
    } else {
        fs::metadata(path).io_context(op, path.display())?.len()
    };

    Ok(byte_count_to_display_size(size))
}

/// 디렉토리 자체는 남기고 내용만 모두 삭제합니다.
pub fn clean_dir(dir: impl AsRef<Path>) -> AppResult<()> {
    let op = "clean_dir";
    let dir = dir.as_ref();
    require_dir(op, dir)?;

    for entry in fs::read_dir(dir).io_context(op, dir.display())? {
        let path = entry.io_context(op, dir.display())?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).io_context(op, path.display())?;
        } else {
            fs::remove_file(&path).io_context(op, path.display())?;
        }
    }

    debug!("🧹 디렉토리 비움: {}", dir.display());
    Ok(())
}

/// 디렉토리를 (상위 디렉토리까지 포함해) 생성합니다. 이미 있으면 성공입니다.
///
/// # Errors
///
/// * `AppError::NotADirectory` - 같은 이름의 파일이 이미 있는 경우
pub fn create_dir(dir: impl AsRef<Path>) -> AppResult<()> {
    let op = "create_dir";
    let dir = dir.as_ref();
    if dir.exists() && !dir.is_dir() {
        return Err(AppError::not_a_directory(op, dir.display()));
    }

    fs::create_dir_all(dir).io_context(op, dir.display())?;
    debug!("📁 디렉토리 생성: {}", dir.display());
    Ok(())
}

/// 디렉토리와 그 하위 내용을 모두 삭제합니다.
pub fn delete_dir(dir: impl AsRef<Path>) -> AppResult<()> {
    let op = "delete_dir";
    let dir = dir.as_ref();
    require_dir(op, dir)?;

    fs::remove_dir_all(dir).io_context(op, dir.display())?;
    debug!("🗑️ 디렉토리 삭제: {}", dir.display());
    Ok(())
}

pub fn delete_file(file: impl AsRef<Path>) -> AppResult<()> {
    let op = "delete_file";
    let file = file.as_ref();
    require_file(op, file)?;

    fs::remove_file(file).io_context(op, file.display())?;
    debug!("🗑️ 파일 삭제: {}", file.display());
    Ok(())
}

pub fn exists_dir(dir: impl AsRef<Path>) -> bool {
    dir.as_ref().is_dir()
}

pub fn exists_file(file: impl AsRef<Path>) -> bool {
    file.as_ref().is_file()
}

/// 원본 하위 항목 목록을 먼저 만든 뒤 대상에 재현합니다.
///
/// 대상이 원본 트리 안에 있어도 목록에서 대상 디렉토리를 제외하므로 무한 복사가 생기지 않습니다.
/// `accept`가 거부한 디렉토리의 하위 항목은 복사하지 않습니다.
fn copy_tree(
    op: &str,
    src: &Path,
    dest: &Path,
    preserve_file_date: bool,
    accept: &dyn Fn(&Path, bool) -> bool,
) -> AppResult<()> {
    let dest_canonical = fs::canonicalize(dest).ok();
    let is_dest = |entry: &DirEntry| {
        dest_canonical
            .as_deref()
            .is_some_and(|d| fs::canonicalize(entry.path()).is_ok_and(|p| p.as_path() == d))
    };

    let entries: Vec<(PathBuf, bool)> = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_dir();
            !(is_dir && is_dest(entry)) && accept(entry.path(), is_dir)
        })
        .map(|entry| entry.map(|e| (e.path().to_path_buf(), e.file_type().is_dir())))
        .collect::<Result<_, walkdir::Error>>()
        .map_err(|e| walk_error(op, src, e))?;

    for (path, is_dir) in entries {
        let relative = path
            .strip_prefix(src)
            .map_err(|e| AppError::invalid_format(op, path.display(), e))?;
        let target = dest.join(relative);

        if is_dir {
            fs::create_dir_all(&target).io_context(op, target.display())?;
        } else {
            copy_contents(op, &path, &target, preserve_file_date)?;
        }
    }

    Ok(())
}

/// 파일 내용을 복사하고 필요하면 수정 시각을 원본과 맞춥니다.
fn copy_contents(op: &str, src: &Path, dest: &Path, preserve_file_date: bool) -> AppResult<()> {
    ensure_parent(op, dest)?;
    fs::copy(src, dest).io_context(op, src.display())?;

    if preserve_file_date {
        let modified = fs::metadata(src)
            .and_then(|m| m.modified())
            .io_context(op, src.display())?;
        let target = OpenOptions::new()
            .write(true)
            .open(dest)
            .or_else(|_| File::open(dest))
            .io_context(op, dest.display())?;
        target.set_modified(modified).io_context(op, dest.display())?;
    }

    Ok(())
}

/// 디렉토리 내용을 대상 디렉토리로 복사합니다.
///
/// # Arguments
///
/// * `src` - 원본 디렉토리
/// * `dest` - 대상 디렉토리 (없으면 생성)
/// * `filter` - 복사할 항목 종류
/// * `preserve_file_date` - 파일 수정 시각 보존 여부
///
/// # Errors
///
/// * `AppError::NotFound` - 원본이 없는 경우
/// * `AppError::NotADirectory` - 원본 또는 대상이 디렉토리가 아닌 경우
pub fn copy_dir(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    filter: CopyFilter,
    preserve_file_date: bool,
) -> AppResult<()> {
    let op = "copy_dir";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_dir(op, src)?;
    ensure_dir(op, dest)?;

    copy_tree(op, src, dest, preserve_file_date, &|_, is_dir| filter.accept(is_dir))?;
    debug!("📋 디렉토리 복사: {} -> {} ({:?})", src.display(), dest.display(), filter);
    Ok(())
}

/// 디렉토리 구조와, 이름이 주어진 접미사 중 하나로 끝나는 파일만 복사합니다 (대소문자 무시).
pub fn copy_dir_with_extensions<S: AsRef<str>>(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    preserve_file_date: bool,
    extensions: &[S],
) -> AppResult<()> {
    let op = "copy_dir_with_extensions";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_dir(op, src)?;
    ensure_dir(op, dest)?;

    let suffixes = SuffixFileFilter::new(extensions.iter().map(|e| e.as_ref().to_string())).with_case(IoCase::Insensitive);
    copy_tree(op, src, dest, preserve_file_date, &|path, is_dir| is_dir || suffixes.accept(path))?;
    debug!("📋 디렉토리 복사: {} -> {} ({})", src.display(), dest.display(), suffixes);
    Ok(())
}

/// 원본 디렉토리를 `dest_parent/<원본 이름>`으로 복사합니다.
pub fn copy_dir_to_dir(src: impl AsRef<Path>, dest_parent: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "copy_dir_to_dir";
    let (src, dest_parent) = (src.as_ref(), dest_parent.as_ref());
    require_dir(op, src)?;
    ensure_dir(op, dest_parent)?;

    let dest = dest_parent.join(file_name_of(op, src)?);
    copy_dir(src, dest, CopyFilter::All, preserve_file_date)
}

/// 파일을 복사합니다.
///
/// 대상 파일이 이미 있으면 교체하고, 대상의 상위 디렉토리가 없으면 생성합니다.
/// 원본과 대상이 같은 파일이면 아무것도 하지 않고 성공합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 원본이 없는 경우
/// * `AppError::NotAFile` - 원본이 파일이 아니거나 대상이 디렉토리인 경우
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "copy_file";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_file(op, src)?;

    if dest.exists() {
        if dest.is_dir() {
            return Err(AppError::not_a_file(op, dest.display()));
        }
        if is_same_file(op, src, dest)? {
            debug!("원본과 대상이 같은 파일: {}", src.display());
            return Ok(());
        }
        fs::remove_file(dest).io_context(op, dest.display())?;
    }

    copy_contents(op, src, dest, preserve_file_date)?;
    debug!("📋 파일 복사: {} -> {}", src.display(), dest.display());
    Ok(())
}

/// 파일을 `dest_dir/<원본 이름>`으로 복사합니다.
pub fn copy_file_to_dir(src: impl AsRef<Path>, dest_dir: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "copy_file_to_dir";
    let (src, dest_dir) = (src.as_ref(), dest_dir.as_ref());
    require_file(op, src)?;
    ensure_dir(op, dest_dir)?;

    copy_file(src, dest_dir.join(file_name_of(op, src)?), preserve_file_date)
}

/// 디렉토리를 이동합니다. 대상이 이미 있으면 먼저 삭제합니다.
///
/// 같은 파일시스템 안에서는 이름 변경으로 처리하고, 실패하면 복사 후 원본을 삭제합니다.
/// 원본과 대상이 같은 디렉토리이면 아무것도 하지 않고 성공합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 원본이 없는 경우
/// * `AppError::InvalidFormat` - 대상이 원본 하위에 있거나 원본을 포함하는 경우
pub fn move_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "move_dir";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_dir(op, src)?;

    let (resolved_src, resolved_dest) = (resolve_path(op, src)?, resolve_path(op, dest)?);
    if resolved_src == resolved_dest {
        debug!("원본과 대상이 같은 디렉토리: {}", src.display());
        return Ok(());
    }
    if resolved_dest.starts_with(&resolved_src) {
        return Err(AppError::invalid_format(op, dest.display(), "destination is inside the source directory"));
    }
    if resolved_src.starts_with(&resolved_dest) {
        return Err(AppError::invalid_format(op, dest.display(), "destination contains the source directory"));
    }

    if dest.exists() {
        delete_dir(dest)?;
    }
    ensure_parent(op, dest)?;

    if let Err(e) = fs::rename(src, dest) {
        warn!("이름 변경 실패, 복사 후 삭제로 대체: {} ({})", src.display(), e);
        copy_dir(src, dest, CopyFilter::All, preserve_file_date)?;
        delete_dir(src)?;
    }

    debug!("🚚 디렉토리 이동: {} -> {}", src.display(), dest.display());
    Ok(())
}

/// 디렉토리를 `dest_parent/<원본 이름>`으로 이동합니다.
pub fn move_dir_to_dir(src: impl AsRef<Path>, dest_parent: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "move_dir_to_dir";
    let (src, dest_parent) = (src.as_ref(), dest_parent.as_ref());
    require_dir(op, src)?;
    ensure_dir(op, dest_parent)?;

    move_dir(src, dest_parent.join(file_name_of(op, src)?), preserve_file_date)
}

/// 파일을 이동합니다. 대상 파일이 이미 있으면 교체합니다.
///
/// 원본과 대상이 같은 파일이면 아무것도 하지 않고 성공합니다.
pub fn move_file(src: impl AsRef<Path>, dest: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "move_file";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_file(op, src)?;

    if dest.exists() {
        if dest.is_dir() {
            return Err(AppError::not_a_file(op, dest.display()));
        }
        if is_same_file(op, src, dest)? {
            debug!("원본과 대상이 같은 파일: {}", src.display());
            return Ok(());
        }
        delete_file(dest)?;
    }
    ensure_parent(op, dest)?;

    if let Err(e) = fs::rename(src, dest) {
        warn!("이름 변경 실패, 복사 후 삭제로 대체: {} ({})", src.display(), e);
        copy_contents(op, src, dest, preserve_file_date)?;
        delete_file(src)?;
    }

    debug!("🚚 파일 이동: {} -> {}", src.display(), dest.display());
    Ok(())
}

/// 파일을 `dest_dir/<원본 이름>`으로 이동합니다.
pub fn move_file_to_dir(src: impl AsRef<Path>, dest_dir: impl AsRef<Path>, preserve_file_date: bool) -> AppResult<()> {
    let op = "move_file_to_dir";
    let (src, dest_dir) = (src.as_ref(), dest_dir.as_ref());
    require_file(op, src)?;
    ensure_dir(op, dest_dir)?;

    move_file(src, dest_dir.join(file_name_of(op, src)?), preserve_file_date)
}

/// 파일 이름을 바꿉니다. 대상 파일이 이미 있으면 교체합니다.
///
/// 이름 변경이 불가능하면 복사 후 원본을 삭제하며,
/// 원본 삭제에 실패하면 복사한 대상을 지우고 에러를 반환합니다.
/// 원본과 대상이 같은 파일이면 아무것도 하지 않습니다.
pub fn rename(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> AppResult<()> {
    let op = "rename";
    let (src, dest) = (src.as_ref(), dest.as_ref());
    require_file(op, src)?;

    if is_same_file(op, src, dest)? {
        debug!("원본과 대상이 같은 파일: {}", src.display());
        return Ok(());
    }
    if exists_file(dest) {
        delete_file(dest)?;
    }

    if fs::rename(src, dest).is_err() {
        copy_file(src, dest, false)?;
        if let Err(e) = delete_file(src) {
            if let Err(cleanup) = fs::remove_file(dest) {
                warn!("복사된 대상 정리 실패: {} ({})", dest.display(), cleanup);
            }
            return Err(e);
        }
    }

    debug!("✏️ 이름 변경: {} -> {}", src.display(), dest.display());
    Ok(())
}

pub fn current_dir() -> AppResult<PathBuf> {
    std::env::current_dir().io_context("current_dir", ".")
}

pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

pub fn user_home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::not_found("user_home_dir", "$HOME"))
}

pub fn parent(path: impl AsRef<Path>) -> Option<PathBuf> {
    path.as_ref().parent().map(Path::to_path_buf)
}

/// 작업용 임시 파일 경로를 만듭니다 (`name.ext` → `name_temp.ext`).
///
/// 확장자가 없으면 `name_temp`가 됩니다.
pub fn temp_file_path(path: &str) -> String {
    let base = file_name_utils::remove_extension(path);
    let extension = file_name_utils::get_extension(path);

    if extension.is_empty() {
        format!("{}_temp", base)
    } else {
        format!("{}_temp.{}", base, extension)
    }
}

/// 디렉토리 트리를 순회해 조건에 맞는 항목의 절대 경로를 정렬해 반환합니다.
fn collect_entries(
    op: &str,
    dir: &Path,
    recursive: bool,
    include_root: bool,
    accept: &dyn Fn(&DirEntry) -> bool,
) -> AppResult<Vec<PathBuf>> {
    require_dir(op, dir)?;
    let root = std::path::absolute(dir).io_context(op, dir.display())?;

    let mut walker = WalkDir::new(&root).min_depth(if include_root { 0 } else { 1 });
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(op, &root, e))?;
        if accept(&entry) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}

/// 하위 파일과 디렉토리를 모두 나열합니다.
pub fn list_files_and_dirs(dir: impl AsRef<Path>, include_root: bool) -> AppResult<Vec<PathBuf>> {
    collect_entries("list_files_and_dirs", dir.as_ref(), true, include_root, &|_| true)
}

/// 하위 디렉토리를 모두 나열합니다.
pub fn list_dirs(dir: impl AsRef<Path>, include_root: bool) -> AppResult<Vec<PathBuf>> {
    collect_entries("list_dirs", dir.as_ref(), true, include_root, &|e| e.file_type().is_dir())
}

pub fn list_files(dir: impl AsRef<Path>, recursive: bool) -> AppResult<Vec<PathBuf>> {
    collect_entries("list_files", dir.as_ref(), recursive, false, &|e| e.file_type().is_file())
}

/// 필터가 수락한 파일만 나열합니다.
pub fn list_files_with(dir: impl AsRef<Path>, recursive: bool, filter: &impl FileFilter) -> AppResult<Vec<PathBuf>> {
    collect_entries("list_files_with", dir.as_ref(), recursive, false, &|e| {
        e.file_type().is_file() && filter.accept(e.path())
    })
}

/// 확장자(`.ext`)가 일치하는 파일만 나열합니다 (대소문자 구분).
pub fn list_files_include_ext<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    recursive: bool,
    extensions: &[S],
) -> AppResult<Vec<PathBuf>> {
    let filter = SuffixFileFilter::new(extensions.iter().map(|e| format!(".{}", e.as_ref())));
    list_files_with(dir, recursive, &filter)
}

/// 이름이 주어진 접미사로 끝나지 않는 파일만 나열합니다 (대소문자 무시).
pub fn list_files_exclude_ext<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    recursive: bool,
    extensions: &[S],
) -> AppResult<Vec<PathBuf>> {
    let suffixes = SuffixFileFilter::new(extensions.iter().map(|e| e.as_ref().to_string())).with_case(IoCase::Insensitive);
    list_files_with(dir, recursive, &|path: &Path| !suffixes.accept(path))
}

/// 와일드카드 중 하나와 일치하는 파일을 나열합니다 (대소문자 무시).
pub fn list_files_by_wildcard<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    wildcards: &[S],
    recursive: bool,
) -> AppResult<Vec<PathBuf>> {
    let filter = WildcardFileFilter::new(wildcards.iter().map(|w| w.as_ref().to_string())).with_case(IoCase::Insensitive);
    list_files_with(dir, recursive, &filter)
}

/// 어떤 와일드카드와도 일치하지 않는 파일을 나열합니다 (대소문자 무시).
pub fn list_files_excluding_wildcard<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    wildcards: &[S],
    recursive: bool,
) -> AppResult<Vec<PathBuf>> {
    let filter = WildcardExcludeFileFilter::new(wildcards.iter().map(|w| w.as_ref().to_string())).with_case(IoCase::Insensitive);
    list_files_with(dir, recursive, &filter)
}

/// 경로 목록을 문자열 목록으로 변환합니다.
pub fn path_names(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// 읽기용으로 파일을 엽니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 파일이 없는 경우
/// * `AppError::NotAFile` - 디렉토리인 경우
pub fn open_input_stream(path: impl AsRef<Path>) -> AppResult<File> {
    let op = "open_input_stream";
    let path = path.as_ref();
    require_file(op, path)?;
    File::open(path).io_context(op, path.display())
}

/// 쓰기 가능 여부를 확인하고, 파일이 없으면 상위 디렉토리를 만듭니다.
fn prepare_for_write(op: &str, path: &Path) -> AppResult<()> {
    if path.exists() {
        if path.is_dir() {
            return Err(AppError::not_a_file(op, path.display()));
        }
        let metadata = fs::metadata(path).io_context(op, path.display())?;
        if metadata.permissions().readonly() {
            return Err(AppError::permission_denied(op, path.display(), "file is read-only"));
        }
        Ok(())
    } else {
        ensure_parent(op, path)
    }
}

/// 쓰기용으로 파일을 엽니다. `append`가 아니면 기존 내용을 지웁니다.
///
/// # Errors
///
/// * `AppError::NotAFile` - 디렉토리인 경우
/// * `AppError::Io` (`PermissionDenied`) - 읽기 전용 파일인 경우
pub fn open_output_stream(path: impl AsRef<Path>, append: bool) -> AppResult<File> {
    let op = "open_output_stream";
    let path = path.as_ref();
    prepare_for_write(op, path)?;

    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path).io_context(op, path.display())
}

pub fn open_reader(path: impl AsRef<Path>) -> AppResult<BufReader<File>> {
    open_input_stream(path).map(BufReader::new)
}

pub fn open_writer(path: impl AsRef<Path>, append: bool) -> AppResult<BufWriter<File>> {
    open_output_stream(path, append).map(BufWriter::new)
}

/// 지정 문자셋으로 문자열을 쓰는 버퍼링 writer를 엽니다.
///
/// # Examples
///
/// ```rust,ignore
/// let mut writer = open_buffer_writer("out/report.txt", "EUC-KR", false)?;
/// writer.write_line("보고서")?;
/// writer.flush()?;
/// ```
pub fn open_buffer_writer(
    path: impl AsRef<Path>,
    charset_name: &str,
    append: bool,
) -> AppResult<CharsetWriter<BufWriter<File>>> {
    charset::lookup(charset_name)?;
    let writer = open_writer(path, append)?;
    CharsetWriter::new(writer, charset_name)
}

pub fn read_file_to_bytes(path: impl AsRef<Path>) -> AppResult<Vec<u8>> {
    let mut file = open_input_stream(path)?;
    io_utils::to_byte_array(&mut file)
}

/// 파일 전체를 문자열로 읽습니다. 문자셋을 생략하면 설정된 기본 문자셋을 사용합니다.
pub fn read_file_to_string(path: impl AsRef<Path>, charset_name: Option<&str>) -> AppResult<String> {
    let charset_name = charset_name.map(str::to_string).unwrap_or_else(CharsetConfig::default_charset);
    let mut file = open_input_stream(path)?;
    io_utils::to_string(&mut file, &charset_name)
}

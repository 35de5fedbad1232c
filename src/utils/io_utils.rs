//! # 스트림 I/O 유틸리티
//!
//! `Read`/`Write` 구현체 사이의 복사, 문자셋 변환, 전체 읽기, 줄 단위 읽기/쓰기를 제공합니다.
//! 모든 바이트 수는 `u64`로 세므로 2GB를 넘는 복사도 정확히 집계됩니다.
//!
//! 함수는 전달받은 스트림을 닫지 않습니다. 스트림의 수명은 호출자가 소유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::io::Cursor;
//! use crate::utils::io_utils;
//!
//! let mut input = Cursor::new(b"hello".to_vec());
//! let mut output = Vec::new();
//! let copied = io_utils::copy(&mut input, &mut output)?;
//! assert_eq!(copied, 5);
//! ```

use std::io::{self, BufRead, BufReader, Cursor, Read, Write};

use crate::config::IoConfig;
use crate::errors::{AppError, AppResult, IoContext};
use crate::utils::charset;

/// 플랫폼 줄바꿈 문자열
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// 중단(`Interrupted`)된 읽기를 재시도하며 한 번 읽습니다.
fn read_once<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8], op: &str) -> AppResult<usize> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(AppError::io(op, "reader", e)),
        }
    }
}

/// 설정된 버퍼 크기로 reader의 내용을 writer에 모두 복사합니다.
///
/// # Returns
///
/// 복사한 바이트 수
pub fn copy<R, W>(reader: &mut R, writer: &mut W) -> AppResult<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; IoConfig::buffer_size()];
    copy_large_with_buffer(reader, writer, &mut buffer)
}

/// 호출자가 제공한 버퍼로 reader의 내용을 writer에 모두 복사합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 버퍼가 비어 있는 경우
/// * `AppError::Io` - 읽기/쓰기 실패
pub fn copy_large_with_buffer<R, W>(reader: &mut R, writer: &mut W, buffer: &mut [u8]) -> AppResult<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let op = "copy_large";
    if buffer.is_empty() {
        return Err(AppError::invalid_format(op, "buffer", "buffer must not be empty"));
    }

    let mut count = 0u64;
    loop {
        let n = read_once(reader, buffer, op)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n]).io_context(op, "writer")?;
        count += n as u64;
    }

    Ok(count)
}

/// `input_offset` 바이트를 건너뛴 뒤 최대 `length` 바이트를 복사합니다.
///
/// `length`가 `None`이면 끝까지 복사합니다. 입력이 먼저 끝나면 그때까지 복사한 양을 반환합니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 건너뛸 바이트보다 입력이 짧거나 버퍼가 비어 있는 경우
pub fn copy_large_range<R, W>(
    reader: &mut R,
    writer: &mut W,
    input_offset: u64,
    length: Option<u64>,
    buffer: &mut [u8],
) -> AppResult<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let op = "copy_large_range";
    if input_offset > 0 {
        skip_fully(reader, input_offset)?;
    }

    let Some(length) = length else {
        return copy_large_with_buffer(reader, writer, buffer);
    };
    if length == 0 {
        return Ok(0);
    }
    if buffer.is_empty() {
        return Err(AppError::invalid_format(op, "buffer", "buffer must not be empty"));
    }

    let mut total = 0u64;
    while total < length {
        let want = (length - total).min(buffer.len() as u64) as usize;
        let n = read_once(reader, &mut buffer[..want], op)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n]).io_context(op, "writer")?;
        total += n as u64;
    }

    Ok(total)
}

/// `from_charset`으로 읽은 텍스트를 `to_charset`으로 다시 인코딩해 씁니다.
///
/// # Returns
///
/// writer에 쓴 바이트 수
pub fn transcode<R, W>(reader: &mut R, writer: &mut W, from_charset: &str, to_charset: &str) -> AppResult<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let text = to_string(reader, from_charset)?;
    let bytes = charset::encode(&text, to_charset)?;
    writer.write_all(&bytes).io_context("transcode", "writer")?;
    Ok(bytes.len() as u64)
}

/// 버퍼가 가득 차거나 입력이 끝날 때까지 읽습니다.
///
/// # Returns
///
/// 실제로 읽은 바이트 수 (입력이 짧으면 버퍼 길이보다 작음)
pub fn read<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> AppResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = read_once(reader, &mut buf[filled..], "read")?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// 버퍼를 정확히 채웁니다.
///
/// # Errors
///
/// * `AppError::InvalidFormat` - 버퍼를 채우기 전에 입력이 끝난 경우
pub fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> AppResult<()> {
    let n = read(reader, buf)?;
    if n < buf.len() {
        return Err(AppError::invalid_format(
            "read_fully",
            "reader",
            format!("expected {} bytes, got {}", buf.len(), n),
        ));
    }
    Ok(())
}

/// 최대 `n` 바이트를 읽어 버립니다.
///
/// # Returns
///
/// 실제로 건너뛴 바이트 수
pub fn skip<R: Read + ?Sized>(reader: &mut R, n: u64) -> AppResult<u64> {
    io::copy(&mut (&mut *reader).take(n), &mut io::sink()).io_context("skip", "reader")
}

/// 정확히 `n` 바이트를 건너뜁니다. 입력이 짧으면 `InvalidFormat`입니다.
pub fn skip_fully<R: Read + ?Sized>(reader: &mut R, n: u64) -> AppResult<()> {
    let skipped = skip(reader, n)?;
    if skipped < n {
        return Err(AppError::invalid_format(
            "skip_fully",
            "reader",
            format!("expected to skip {} bytes, skipped {}", n, skipped),
        ));
    }
    Ok(())
}

pub fn to_byte_array<R: Read + ?Sized>(reader: &mut R) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).io_context("to_byte_array", "reader")?;
    Ok(bytes)
}

/// 정확히 `size` 바이트를 읽어 반환합니다.
pub fn to_byte_array_sized<R: Read + ?Sized>(reader: &mut R, size: usize) -> AppResult<Vec<u8>> {
    let mut bytes = vec![0u8; size];
    read_fully(reader, &mut bytes)?;
    Ok(bytes)
}

/// 입력 전체를 지정 문자셋으로 디코딩합니다.
pub fn to_string<R: Read + ?Sized>(reader: &mut R, charset_name: &str) -> AppResult<String> {
    let bytes = to_byte_array(reader)?;
    charset::decode(&bytes, charset_name)
}

/// 문자열을 지정 문자셋으로 인코딩한 메모리 스트림을 만듭니다.
pub fn to_input_stream(s: &str, charset_name: &str) -> AppResult<Cursor<Vec<u8>>> {
    Ok(Cursor::new(charset::encode(s, charset_name)?))
}

pub fn to_buffered_reader<R: Read>(reader: R) -> BufReader<R> {
    BufReader::new(reader)
}

/// 줄 단위 지연 반복자를 만듭니다. 줄 끝의 `\n`, `\r\n`은 제거됩니다.
pub fn line_iterator<R: BufRead>(reader: R) -> impl Iterator<Item = AppResult<String>> {
    reader.lines().map(|line| line.io_context("line_iterator", "reader"))
}

/// UTF-8 입력을 줄 단위로 모두 읽습니다.
pub fn read_lines<R: Read>(reader: R) -> AppResult<Vec<String>> {
    line_iterator(BufReader::new(reader)).collect()
}

/// 지정 문자셋 입력을 줄 단위로 모두 읽습니다.
pub fn read_lines_with_charset<R: Read + ?Sized>(reader: &mut R, charset_name: &str) -> AppResult<Vec<String>> {
    let text = to_string(reader, charset_name)?;
    Ok(text.lines().map(String::from).collect())
}

pub fn write<W: Write + ?Sized>(data: &[u8], writer: &mut W) -> AppResult<()> {
    writer.write_all(data).io_context("write", "writer")
}

/// 문자열을 지정 문자셋으로 인코딩해 씁니다.
pub fn write_str<W: Write + ?Sized>(s: &str, writer: &mut W, charset_name: &str) -> AppResult<()> {
    let bytes = charset::encode(s, charset_name)?;
    writer.write_all(&bytes).io_context("write_str", "writer")
}

/// 각 줄 뒤에 줄바꿈을 붙여 씁니다.
///
/// # Arguments
///
/// * `lines` - 쓸 줄들
/// * `line_ending` - 줄바꿈 문자열. `None`이면 [`LINE_SEPARATOR`]
/// * `writer` - 출력 대상
/// * `charset_name` - 인코딩할 문자셋
pub fn write_lines<I, S, W>(lines: I, line_ending: Option<&str>, writer: &mut W, charset_name: &str) -> AppResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let ending = line_ending.unwrap_or(LINE_SEPARATOR);
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push_str(ending);
    }
    write_str(&text, writer, charset_name)
}

/// 문자열을 지정 문자셋으로 인코딩해 내부 writer에 쓰는 래퍼
///
/// # Examples
///
/// ```rust,ignore
/// let mut writer = CharsetWriter::new(Vec::new(), "EUC-KR")?;
/// writer.write_line("한글")?;
/// let bytes = writer.into_inner();
/// ```
#[derive(Debug)]
pub struct CharsetWriter<W: Write> {
    inner: W,
    charset: &'static str,
}

impl<W: Write> CharsetWriter<W> {
    /// # Errors
    ///
    /// * `AppError::Unsupported` - 알 수 없는 문자셋
    pub fn new(inner: W, charset_name: &str) -> AppResult<Self> {
        let charset = charset::canonical_name(charset_name)?;
        Ok(Self { inner, charset })
    }

    pub fn charset(&self) -> &str {
        self.charset
    }

    pub fn write_str(&mut self, s: &str) -> AppResult<()> {
        write_str(s, &mut self.inner, self.charset)
    }

    /// 문자열 뒤에 [`LINE_SEPARATOR`]를 붙여 씁니다.
    pub fn write_line(&mut self, s: &str) -> AppResult<()> {
        self.write_str(s)?;
        self.write_str(LINE_SEPARATOR)
    }

    pub fn flush(&mut self) -> AppResult<()> {
        self.inner.flush().io_context("flush", "writer")
    }

    /// 래퍼를 풀어 내부 writer를 돌려줍니다. 버퍼링 writer라면 호출 전에 `flush` 하십시오.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

//! In-place HTTP response parser.
//!
//! Works directly on the bytes the collector stored. Every field of the
//! resulting [`Response`] is a slice of the input; nothing is copied and
//! nothing is allocated. Truncated or malformed input is tolerated: once the
//! input is long enough to hold a status line, whatever can be recognised is
//! filled in and everything else keeps its cleared value.

use super::request::Header;
use super::response::Response;
use crate::network::error::Error;

/// `HTTP/1.0`
const HTTP_VERSION_LEN: usize = 8;
const HTTP_STATUS_CODE_LEN: usize = 3;
/// Shortest input worth parsing: version, status code and one separator.
const MIN_RESPONSE_LEN: usize = HTTP_VERSION_LEN + HTTP_STATUS_CODE_LEN + 1;

const CRLF_CRLF: &[u8] = b"\r\n\r\n";
const LF_LF: &[u8] = b"\n\n";

/// Parses a collected response.
///
/// Fails only when `raw` is shorter than the smallest possible status line.
/// The header section ends at the first `\r\n\r\n`, or the first `\n\n` for
/// servers that use bare line feeds, provided at least one byte follows it.
/// The body is exactly `Content-Length` bytes from there (clamped to what was
/// received) and empty when the header is missing.
///
/// # Examples
///
/// ```rust
/// use iothttp::http::{parse, Response};
///
/// let raw = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
/// let response: Response<'_, 8> = parse(raw).unwrap();
///
/// assert_eq!(response.status, 200);
/// assert_eq!(response.version, Some("HTTP/1.1"));
/// assert_eq!(response.reason, Some("OK"));
/// assert_eq!(response.text(), Some("hello"));
/// ```
pub fn parse<'buf, const H: usize>(raw: &'buf [u8]) -> Result<Response<'buf, H>, Error> {
    let mut response = Response::new();
    parse_into(raw, &mut response)?;
    Ok(response)
}

pub(crate) fn parse_into<'buf, const H: usize>(
    raw: &'buf [u8],
    response: &mut Response<'buf, H>,
) -> Result<(), Error> {
    trace!("parsing response...");

    if raw.len() < MIN_RESPONSE_LEN {
        warn!("parsing response failed: {=usize} bytes", raw.len());
        return Err(Error::MalformedResponse);
    }

    let boundary = find_boundary(raw);
    let head = match boundary {
        Some((at, _)) => &raw[..at],
        None => raw,
    };

    let mut lines = head
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty());

    if let Some(status_line) = lines.next() {
        parse_status_line(status_line, response);
    }
    debug!(
        "got status line: {} {=i32} {}",
        response.version,
        response.status,
        response.reason
    );

    let mut content_len = 0usize;
    for line in lines {
        let Some(header) = parse_header(line) else {
            continue;
        };
        if response.headers.push(header).is_err() {
            break;
        }
        if header.key.eq_ignore_ascii_case("Content-Length") {
            content_len = usize::try_from(leading_int(header.value)).unwrap_or(0);
        }
        trace!("got header: {=str}: {=str}", header.key, header.value);
    }

    if let Some((at, delimiter)) = boundary {
        let start = at + delimiter;
        let end = start.saturating_add(content_len).min(raw.len());
        response.body = Some(&raw[start..end]);
        debug!("got body: {=usize} bytes", end - start);
    }

    trace!("parsing response succeeded");
    Ok(())
}

/// Position and length of the header/body delimiter.
///
/// Only the first occurrence of each delimiter is considered, and it counts
/// only when at least one byte follows it.
fn find_boundary(raw: &[u8]) -> Option<(usize, usize)> {
    [CRLF_CRLF, LF_LF].into_iter().find_map(|delimiter| {
        let at = find_slice(raw, delimiter)?;
        (raw.len() - at > delimiter.len()).then_some((at, delimiter.len()))
    })
}

/// `<version> <status> <reason>`
fn parse_status_line<'buf, const H: usize>(line: &'buf [u8], response: &mut Response<'buf, H>) {
    let Ok(line) = core::str::from_utf8(line) else {
        return;
    };
    let line = line.trim_start_matches(' ');
    let (version, rest) = line.split_once(' ').unwrap_or((line, ""));
    if !version.is_empty() {
        response.version = Some(version);
    }

    let rest = rest.trim_start_matches(' ');
    let (status, reason) = rest.split_once(' ').unwrap_or((rest, ""));
    if !status.is_empty() {
        response.status = leading_int(status);
    }

    let reason = reason.trim_start_matches(' ');
    if !reason.is_empty() {
        response.reason = Some(reason);
    }
}

/// `<key>:<value>`, with one leading space of the value dropped.
///
/// Lines without a colon, with an empty key or with an empty value yield
/// `None`.
fn parse_header(line: &[u8]) -> Option<Header<'_>> {
    let line = core::str::from_utf8(line).ok()?;
    let (key, value) = line.split_once(':')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    let value = value.strip_prefix(' ').unwrap_or(value);
    Some(Header::new(key, value))
}

/// Integer value of the leading digits of `s`, like C's `atoi`: leading
/// whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and no digits gives 0. Saturates instead of overflowing.
pub(crate) fn leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i32::from(digit - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

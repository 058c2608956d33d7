//! Block parser
//!
//! Splits SSH config lines into a header block followed by host blocks.
//! Each step takes the full line slice plus a start index and returns the
//! parsed block together with the index where the next block begins.

use super::block::{Block, HeaderBlock, HostBlock, is_host_line, is_hostname_line};
use super::error::SshConfigError;

/// Split file content into lines
///
/// A single trailing newline terminates the last line rather than starting
/// an empty one, so `render` reproduces the input exactly.
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n').map(str::to_string).collect()
}

/// Parse a full line sequence into `[Header, Host*]`
pub fn parse_lines(lines: &[String]) -> Result<Vec<Block>, SshConfigError> {
    let (header, mut next) = parse_header_block(lines, 0);
    let mut blocks = vec![Block::Header(header)];

    while next < lines.len() {
        let (host, after) = parse_host_block(lines, next)?;
        tracing::debug!(
            "Parsed host block '{}' (lines {}..{}, HostName at +{})",
            host.host,
            next,
            after,
            host.pos
        );
        blocks.push(Block::Host(host));
        next = after;
    }

    Ok(blocks)
}

/// Collect lines from `start` up to the first `Host` line
pub fn parse_header_block(lines: &[String], start: usize) -> (HeaderBlock, usize) {
    let end = next_host_line(lines, start);
    let header = HeaderBlock {
        lines: lines[start..end].to_vec(),
    };
    (header, end)
}

/// Parse the host block whose `Host` line sits at `start`
pub fn parse_host_block(
    lines: &[String],
    start: usize,
) -> Result<(HostBlock, usize), SshConfigError> {
    let host_line = lines
        .get(start)
        .ok_or_else(|| SshConfigError::MalformedHost("<end of file>".to_string()))?;

    if !is_host_line(host_line) {
        return Err(SshConfigError::MalformedHost(host_line.trim().to_string()));
    }
    let host = host_line.trim()[4..].trim().to_string();
    if host.is_empty() {
        return Err(SshConfigError::MalformedHost(host_line.trim().to_string()));
    }

    let end = next_host_line(lines, start + 1);
    let block_lines = lines[start..end].to_vec();

    let (pos, hostname) = block_lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| is_hostname_line(line))
        .map(|(pos, line)| (pos, hostname_value(line)))
        .ok_or_else(|| SshConfigError::MissingHostName(host.clone()))?;

    let block = HostBlock {
        host,
        hostname,
        pos,
        lines: block_lines,
    };
    Ok((block, end))
}

/// Index of the first `Host` line at or after `from`, or `lines.len()`
fn next_host_line(lines: &[String], from: usize) -> usize {
    lines[from..]
        .iter()
        .position(|line| is_host_line(line))
        .map_or(lines.len(), |offset| from + offset)
}

/// Text after the directive keyword, trimmed
fn hostname_value(line: &str) -> String {
    line.trim()
        .split_once(' ')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_header_stops_at_first_host_line() {
        let input = lines(&["# comment", "", "ServerAliveInterval 60", "Host a", "  HostName x"]);
        let (header, next) = parse_header_block(&input, 0);
        assert_eq!(header.lines, lines(&["# comment", "", "ServerAliveInterval 60"]));
        assert_eq!(next, 3);
    }

    #[test]
    fn test_header_may_be_empty() {
        let input = lines(&["Host a", "  HostName x"]);
        let (header, next) = parse_header_block(&input, 0);
        assert!(header.lines.is_empty());
        assert_eq!(next, 0);
    }

    #[test]
    fn test_host_block_ends_at_next_host() {
        let input = lines(&[
            "Host a",
            "  User me",
            "  HostName 10.0.0.5",
            "",
            "Host b",
            "  HostName y",
        ]);
        let (block, next) = parse_host_block(&input, 0).unwrap();
        assert_eq!(block.host, "a");
        assert_eq!(block.hostname, "10.0.0.5");
        assert_eq!(block.pos, 2);
        assert_eq!(block.lines.len(), 4);
        assert_eq!(next, 4);
    }

    #[test]
    fn test_first_hostname_line_wins() {
        let input = lines(&["Host a", "  HostName first", "  HostName second"]);
        let (block, _) = parse_host_block(&input, 0).unwrap();
        assert_eq!(block.pos, 1);
        assert_eq!(block.hostname, "first");
    }

    #[test]
    fn test_hostname_value_is_trimmed_after_first_space() {
        let input = lines(&["Host a", "    hostname   wsl.local  "]);
        let (block, _) = parse_host_block(&input, 0).unwrap();
        assert_eq!(block.hostname, "wsl.local");
    }

    #[test]
    fn test_host_value_keeps_patterns_verbatim() {
        let input = lines(&["  HOST  web-*  db  ", "HostName x"]);
        let (block, _) = parse_host_block(&input, 0).unwrap();
        assert_eq!(block.host, "web-*  db");
        assert_eq!(block.lines[0], "  HOST  web-*  db  ");
    }

    #[test]
    fn test_missing_hostname_is_fatal() {
        let input = lines(&["Host lonely", "  User me"]);
        let err = parse_host_block(&input, 0).unwrap_err();
        assert!(matches!(err, SshConfigError::MissingHostName(ref h) if h == "lonely"));
    }

    #[test]
    fn test_non_host_line_is_malformed() {
        let input = lines(&["User me"]);
        let err = parse_host_block(&input, 0).unwrap_err();
        assert!(matches!(err, SshConfigError::MalformedHost(_)));

        let err = parse_host_block(&input, 5).unwrap_err();
        assert!(matches!(err, SshConfigError::MalformedHost(_)));
    }

    #[test]
    fn test_parse_lines_orders_blocks() {
        let input = lines(&["# top", "Host a", "  HostName x", "Host b", "  HostName y", ""]);
        let blocks = parse_lines(&input).unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Header(h) if h.lines == lines(&["# top"])));
        let names: Vec<_> = blocks
            .iter()
            .filter_map(Block::as_host)
            .map(|h| h.host.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        // The trailing empty element stays with the last host block
        assert_eq!(blocks[2].lines().last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_lines_pos_points_at_hostname() {
        let input = lines(&[
            "Host a",
            "  # HostName commented",
            "  Port 22",
            "  hostName x",
            "Host b",
            "HostName y",
        ]);
        for block in parse_lines(&input).unwrap().iter().filter_map(Block::as_host) {
            assert!(block.lines[block.pos].trim().to_lowercase().starts_with("hostname "));
        }
    }

    #[test]
    fn test_parse_lines_empty_input() {
        let blocks = parse_lines(&[]).unwrap();
        assert_eq!(blocks, vec![Block::Header(HeaderBlock::default())]);
    }
}

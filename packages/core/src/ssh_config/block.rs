//! Block model for SSH config files
//!
//! A config file is one header block followed by host blocks. Blocks own
//! their lines verbatim so the file can be written back unchanged.

/// Everything before the first `Host` line: comments, global options, blanks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    pub lines: Vec<String>,
}

/// A `Host <value>` line and every line up to the next `Host` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBlock {
    /// Value following the `Host` keyword, trimmed
    pub host: String,
    /// Value of the block's HostName directive
    pub hostname: String,
    /// Index into `lines` of the HostName directive
    pub pos: usize,
    /// Original lines, starting with the `Host` line itself
    pub lines: Vec<String>,
}

/// One structural piece of an SSH config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(HeaderBlock),
    Host(HostBlock),
}

impl Block {
    /// Lines owned by this block, in file order
    pub fn lines(&self) -> &[String] {
        match self {
            Block::Header(header) => &header.lines,
            Block::Host(host) => &host.lines,
        }
    }

    pub fn as_host(&self) -> Option<&HostBlock> {
        match self {
            Block::Host(host) => Some(host),
            Block::Header(_) => None,
        }
    }

    pub fn as_host_mut(&mut self) -> Option<&mut HostBlock> {
        match self {
            Block::Host(host) => Some(host),
            Block::Header(_) => None,
        }
    }
}

impl HostBlock {
    /// The raw HostName line, as it appears in the file
    pub fn hostname_line(&self) -> &str {
        &self.lines[self.pos]
    }

    /// Replace the HostName directive with `HostName <hostname>`
    ///
    /// Only the leading whitespace of the old line survives, plus a trailing
    /// `\r` on CRLF files. Keyword casing, extra spacing and trailing comments
    /// are dropped.
    pub fn set_hostname(&mut self, hostname: &str) {
        let old = &self.lines[self.pos];
        let indent = leading_whitespace(old);
        let eol = if old.ends_with('\r') { "\r" } else { "" };
        self.lines[self.pos] = format!("{indent}HostName {hostname}{eol}");
        self.hostname = hostname.to_string();
    }
}

/// Whether a line opens a new host block (`Host <value>`, any case)
pub fn is_host_line(line: &str) -> bool {
    starts_with_keyword(line, "host ")
}

/// Whether a line is a HostName directive (`HostName <value>`, any case)
pub fn is_hostname_line(line: &str) -> bool {
    starts_with_keyword(line, "hostname ")
}

fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.trim().to_ascii_lowercase().starts_with(keyword)
}

/// Leading run of whitespace characters
fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(idx, _)| idx);
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_block(lines: &[&str], pos: usize) -> HostBlock {
        HostBlock {
            host: "devbox".to_string(),
            hostname: "x".to_string(),
            pos,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_set_hostname_collapses_spacing_and_keeps_indent() {
        let mut block = host_block(&["Host devbox", "    HostName  x"], 1);
        block.set_hostname("y");
        assert_eq!(block.lines[1], "    HostName y");
        assert_eq!(block.hostname, "y");
    }

    #[test]
    fn test_set_hostname_drops_inline_comment_and_casing() {
        let mut block = host_block(&["Host devbox", "\t hostname 1.2.3.4 # wsl"], 1);
        block.set_hostname("10.0.0.5");
        assert_eq!(block.lines[1], "\t HostName 10.0.0.5");
    }

    #[test]
    fn test_set_hostname_only_touches_pos() {
        let mut block = host_block(&["Host devbox", "  User me", "  HostName x", "  Port 22"], 2);
        block.set_hostname("y");
        assert_eq!(block.lines, vec!["Host devbox", "  User me", "  HostName y", "  Port 22"]);
    }

    #[test]
    fn test_set_hostname_keeps_crlf() {
        let mut block = host_block(&["Host devbox\r", "  HostName x # old\r", "  User u\r"], 1);
        block.set_hostname("y");
        assert_eq!(block.lines[1], "  HostName y\r");
        assert_eq!(block.hostname, "y");
    }

    #[test]
    fn test_line_classification() {
        assert!(is_host_line("Host a"));
        assert!(is_host_line("  HOST a"));
        assert!(!is_host_line("HostName a"));
        assert!(!is_host_line("Host"));
        assert!(is_hostname_line("   hostname a"));
        assert!(!is_hostname_line("HostNameX a"));
        assert!(!is_hostname_line("# HostName a"));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("  \tx y"), "  \t");
        assert_eq!(leading_whitespace("x"), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }

    #[test]
    fn test_block_lines_and_variant_access() {
        let header = Block::Header(HeaderBlock {
            lines: vec!["# global".to_string()],
        });
        assert_eq!(header.lines(), ["# global".to_string()]);
        assert!(header.as_host().is_none());

        let host = Block::Host(host_block(&["Host devbox", "  HostName x"], 1));
        assert_eq!(host.as_host().map(HostBlock::hostname_line), Some("  HostName x"));
    }
}

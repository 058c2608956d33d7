//! Parsed SSH config document
//!
//! Wraps the block list with parse/render so callers never handle raw
//! line vectors directly.

use std::collections::HashSet;

use super::block::{Block, HostBlock};
use super::error::SshConfigError;
use super::lookup::{find_host, find_host_mut};
use super::parser::{parse_lines, split_lines};

/// An SSH config file as a header block plus host blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    blocks: Vec<Block>,
}

impl SshConfig {
    /// Parse file content
    pub fn parse(content: &str) -> Result<Self, SshConfigError> {
        Self::from_lines(&split_lines(content))
    }

    /// Parse an already split line sequence
    pub fn from_lines(lines: &[String]) -> Result<Self, SshConfigError> {
        let blocks = parse_lines(lines)?;
        warn_duplicate_hosts(&blocks);
        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Host blocks in file order
    pub fn hosts(&self) -> impl Iterator<Item = &HostBlock> {
        self.blocks.iter().filter_map(Block::as_host)
    }

    pub fn host(&self, name: &str) -> Result<&HostBlock, SshConfigError> {
        find_host(&self.blocks, name)
    }

    pub fn host_mut(&mut self, name: &str) -> Result<&mut HostBlock, SshConfigError> {
        find_host_mut(&mut self.blocks, name)
    }

    /// Serialize back to file content
    pub fn render(&self) -> String {
        render_blocks(&self.blocks)
    }
}

fn warn_duplicate_hosts(blocks: &[Block]) {
    let mut seen = HashSet::new();
    for host in blocks.iter().filter_map(Block::as_host) {
        if !seen.insert(host.host.as_str()) {
            tracing::warn!(
                "Duplicate Host '{}' in SSH config; only the first is used",
                host.host
            );
        }
    }
}

/// Every line of every block, each terminated by a newline
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for line in blocks.iter().flat_map(Block::lines) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

//! Host lookup over a parsed block list
//!
//! Matching is exact and case-sensitive: `Host` values are compared as
//! written, without SSH pattern expansion. The first match wins.

use super::block::{Block, HostBlock};
use super::error::SshConfigError;

/// Find the first host block named `name`
pub fn find_host<'a>(blocks: &'a [Block], name: &str) -> Result<&'a HostBlock, SshConfigError> {
    blocks
        .iter()
        .filter_map(Block::as_host)
        .find(|block| block.host == name)
        .ok_or_else(|| SshConfigError::HostNotFound(name.to_string()))
}

/// Find the first host block named `name` for in-place update
pub fn find_host_mut<'a>(
    blocks: &'a mut [Block],
    name: &str,
) -> Result<&'a mut HostBlock, SshConfigError> {
    blocks
        .iter_mut()
        .filter_map(Block::as_host_mut)
        .find(|block| block.host == name)
        .ok_or_else(|| SshConfigError::HostNotFound(name.to_string()))
}

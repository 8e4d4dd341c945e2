//! Program Image Loader.
//!
//! This module reads a program image from disk into instruction words. It
//! performs:
//! 1. **File reading:** The image is a flat sequence of 32-bit words, one
//!    instruction per word, with no header.
//! 2. **Byte-order conversion:** Words are stored big-endian; each is
//!    normalized to the host representation before entering memory.
//!
//! Capacity against the instruction segment is enforced when the words are
//! placed into [`crate::core::Memory`], not here.

use std::fs;
use tracing::info;

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;

/// Reads a program image file into instruction words.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// Returns [`SimError::Image`] when the file cannot be read, or
/// [`SimError::TruncatedImage`] when its length is not a whole number of
/// words.
pub fn load_image(path: &str) -> Result<Vec<u32>, SimError> {
    let bytes = fs::read(path).map_err(|source| SimError::Image {
        path: path.to_owned(),
        source,
    })?;
    let words = words_from_be_bytes(&bytes).ok_or(SimError::TruncatedImage {
        path: path.to_owned(),
        len: bytes.len(),
    })?;

    info!(path, words = words.len(), "loaded program image");
    Ok(words)
}

/// Converts big-endian image bytes into host-order words.
///
/// Returns `None` when the byte count is not a multiple of the word size.
pub fn words_from_be_bytes(bytes: &[u8]) -> Option<Vec<u32>> {
    let chunks = bytes.chunks_exact(WORD_BYTES as usize);
    if !chunks.remainder().is_empty() {
        return None;
    }
    Some(
        chunks
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect(),
    )
}

//! Transport-safe text chunking.
//!
//! Long replies are split so no chunk exceeds the transport's limit,
//! preferring to break at the last newline inside the window, then the
//! last space, then a hard cut. Limits count characters, not bytes, so a
//! cut never lands inside a multi-byte sequence.

/// Default chunk limit. Telegram caps messages at 4096 characters; keep
/// headroom below it.
pub const MAX_CHUNK_LEN: usize = 4000;

/// Split text into an ordered, non-empty sequence of chunks.
///
/// Concatenating the chunks (modulo trimmed boundary whitespace)
/// reconstructs the trimmed input. Empty input yields a single
/// empty-string chunk, never zero chunks, so the delivery protocol always
/// has a first chunk for the placeholder edit.
pub fn split(text: &str, max_len: usize) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    let mut rest = trimmed;

    loop {
        // Byte offset of the first character past the window; None means
        // the remainder fits.
        let hard = match rest.char_indices().nth(max_len) {
            Some((idx, _)) => idx,
            None => break,
        };
        let window = &rest[..hard];

        // `rest` starts non-whitespace, so a found boundary is never 0.
        let cut = window
            .rfind('\n')
            .or_else(|| window.rfind(' '))
            .unwrap_or(hard);

        out.push(window[..cut].trim_end().to_string());
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() || out.is_empty() {
        out.push(rest.to_string());
    }
    out
}

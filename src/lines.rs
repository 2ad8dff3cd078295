use crate::vector::GrowVec;

/// Split raw source bytes into lines on `\n`.
///
/// A final line without a terminating newline is still emitted; a
/// buffer ending in `\n` does not produce an extra empty line. Lines
/// keep their raw bytes so that columns index the source exactly.
#[must_use]
pub fn split_lines(bytes: &[u8]) -> GrowVec<Vec<u8>> {
    let mut lines = GrowVec::new();
    let mut rest = bytes;

    while !rest.is_empty() {
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        lines.push(rest[..end].to_vec());
        rest = rest.get(end + 1..).unwrap_or_default();
    }

    lines
}

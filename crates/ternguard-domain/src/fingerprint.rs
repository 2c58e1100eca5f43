use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a located finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - path (repo-relative)
/// - start and end position, `line:col-end_line:end_col`
pub fn fingerprint_for_span(
    check_id: &str,
    code: &str,
    path: &str,
    start: (u32, u32),
    end: (u32, u32),
) -> String {
    let span = format!("{}:{}-{}:{}", start.0, start.1, end.0, end.1);
    let canonical = [check_id, code, path, span.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

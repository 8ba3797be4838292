/// Compare a caller-supplied API key against the configured one.
///
/// Runs in time proportional to the key length regardless of where the first
/// mismatch is.
pub fn api_key_matches(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

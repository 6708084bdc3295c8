//! Version extraction from tool banners.
//!
//! Tools print wildly different version banners; some print to stderr.
//! The extraction rule is: take the first line, return its first
//! dotted-numeric token.

/// Pick the banner text: stdout, falling back to stderr.
pub fn banner_text(stdout: &str, stderr: &str) -> String {
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };
    text.lines().next().unwrap_or_default().trim().to_string()
}

/// Extract the first dotted-numeric token from a banner line.
///
/// `"git version 2.43.0"` yields `"2.43.0"`; `"v20.10.0"` yields
/// `"20.10.0"`; a line with no such token yields `None`.
pub fn extract_version(line: &str) -> Option<String> {
    for word in line.split_whitespace() {
        let token = word.trim_start_matches('v').trim_end_matches([',', ';']);
        if looks_like_version(token) {
            return Some(token.to_string());
        }
    }
    None
}

fn looks_like_version(token: &str) -> bool {
    token.contains('.')
        && token.chars().next().is_some_and(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

//! Utility helpers — data directory and secret masking.

use std::path::PathBuf;

/// Get the Notegram data directory (e.g. `~/.notegram/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".notegram")
}

/// Show only the first few characters of a secret.
/// Unicode-safe.
pub fn mask_secret(secret: &str, visible: usize) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let shown: String = secret.chars().take(visible).collect();
    if secret.chars().count() <= visible {
        shown
    } else {
        format!("{}...", shown)
    }
}

/// Helper to get home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_secret() {
        assert_eq!(mask_secret("abc", 10), "abc");
    }

    #[test]
    fn test_mask_long_secret() {
        assert_eq!(mask_secret("123456789:AAbbCCdd", 6), "123456...");
    }

    #[test]
    fn test_mask_empty() {
        assert_eq!(mask_secret("", 4), "");
    }

    #[test]
    fn test_data_path_ends_with_notegram() {
        assert!(get_data_path().ends_with(".notegram"));
    }
}

//! Version information for hackreg

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "hackreg";

/// Full version string including the application name
pub fn full_version() -> String {
    format!("{} {}", APP_NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "hackreg");
    }

    #[test]
    fn test_version_functions() {
        let full = full_version();
        assert!(full.contains(APP_NAME));
        assert!(full.contains(VERSION));
    }
}

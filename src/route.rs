//! Route-path parser
//!
//! Maps a path like `/event/schedule/day1#details` onto named segments:
//! the first three tokens become route, method and query, and everything
//! after `#` becomes the hash.

/// Parsed route path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePath {
    pub route: Option<String>,
    pub method: Option<String>,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl RoutePath {
    /// Parse a path with optional hash fragment into a `RoutePath`.
    ///
    /// Leading and trailing slashes are ignored; missing segments stay `None`.
    pub fn parse(path: &str) -> Self {
        let mut parsed = Self::default();

        let (path, hash) = match path.split_once('#') {
            Some((p, h)) => (p, Some(h)),
            None => (path, None),
        };

        let trimmed = path.trim_matches('/');
        if !trimmed.is_empty() {
            let mut tokens = trimmed.split('/');
            parsed.route = tokens.next().map(str::to_string);
            parsed.method = tokens.next().map(str::to_string);
            parsed.query = tokens.next().map(str::to_string);
        }

        if let Some(hash) = hash {
            if !hash.is_empty() {
                parsed.hash = Some(hash.to_string());
            }
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_path() {
        let route = RoutePath::parse("/event/schedule/day1#details");
        assert_eq!(route.route.as_deref(), Some("event"));
        assert_eq!(route.method.as_deref(), Some("schedule"));
        assert_eq!(route.query.as_deref(), Some("day1"));
        assert_eq!(route.hash.as_deref(), Some("details"));
    }

    #[test]
    fn test_parse_trims_slashes() {
        let route = RoutePath::parse("/register/");
        assert_eq!(route.route.as_deref(), Some("register"));
        assert_eq!(route.method, None);
        assert_eq!(route.query, None);
        assert_eq!(route.hash, None);
    }

    #[test]
    fn test_parse_empty_path() {
        assert_eq!(RoutePath::parse(""), RoutePath::default());
        assert_eq!(RoutePath::parse("/"), RoutePath::default());
    }

    #[test]
    fn test_parse_hash_only() {
        let route = RoutePath::parse("#challenges");
        assert_eq!(route.route, None);
        assert_eq!(route.hash.as_deref(), Some("challenges"));
    }

    #[test]
    fn test_parse_empty_hash_is_none() {
        let route = RoutePath::parse("/register#");
        assert_eq!(route.route.as_deref(), Some("register"));
        assert_eq!(route.hash, None);
    }
}

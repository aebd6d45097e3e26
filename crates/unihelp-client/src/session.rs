/// Authentication context passed explicitly into the client
///
/// Replaces the original app's process-wide auth store: whoever constructs
/// the client decides which base URL and token it carries, and nothing else
/// can reach in and change them.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: Option<String>,
}

impl Session {
    /// Create an anonymous session against the given base URL
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            token: None,
        }
    }

    /// Create an authenticated session with a bearer token
    pub fn authenticated(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            token: Some(token.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for a backend path like `/api/post/3`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let session = Session::anonymous("http://localhost:8080/");
        assert_eq!(session.url("/api/post"), "http://localhost:8080/api/post");
    }

    #[test]
    fn test_anonymous_has_no_token() {
        let session = Session::anonymous("http://localhost:8080");
        assert!(session.token().is_none());
    }

    #[test]
    fn test_authenticated_carries_token() {
        let session = Session::authenticated("http://localhost:8080", "abc123");
        assert_eq!(session.token(), Some("abc123"));
    }
}

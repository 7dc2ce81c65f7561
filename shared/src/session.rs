use std::rc::Rc;

/// Marker contained in the name of the session cookie set by the dog-search service.
pub const SESSION_COOKIE_MARKER: &str = "fetch-session-id";

/// Read access to the cookie jar, as a `name=value; name=value` header string.
pub trait CookieSource {
    fn cookie_header(&self) -> String;
}

impl<T: CookieSource + ?Sized> CookieSource for Rc<T> {
    fn cookie_header(&self) -> String {
        (**self).cookie_header()
    }
}

/// Presence check only: no expiry or signature validation.
pub fn session_present(cookie_header: &str, marker: &str) -> bool {
    !marker.is_empty() && cookie_header.contains(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_present() {
        let header = "theme=dark; fetch-session-id=abc123; lang=en";
        assert!(session_present(header, SESSION_COOKIE_MARKER));
        assert!(session_present("fetch-session-id=", SESSION_COOKIE_MARKER));
    }

    #[test]
    fn test_session_absent() {
        assert!(!session_present("", SESSION_COOKIE_MARKER));
        assert!(!session_present("theme=dark; lang=en", SESSION_COOKIE_MARKER));
        assert!(!session_present("fetch-session=abc", SESSION_COOKIE_MARKER));
    }

    #[test]
    fn test_empty_marker_never_matches() {
        assert!(!session_present("fetch-session-id=abc", ""));
    }
}

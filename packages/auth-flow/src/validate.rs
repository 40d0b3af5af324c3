//! Local input validation shared by both wizards. Nothing here touches the
//! network.

/// Basic email syntax check: one `@`, a non-empty local part, and a domain
/// with a dot. Anything stricter belongs to the backend.
pub fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Interests input as the profile form produces it: either a
/// comma-separated string or an already-split list.
#[derive(Debug, Clone)]
pub enum Interests {
    Text(String),
    List(Vec<String>),
}

impl Interests {
    /// Normalize into an ordered list: split on commas (text form), trim
    /// every element, drop empties. Both forms go through the same trim so
    /// `"a, b , c"` and `["a", "b", "c"]` come out identical.
    pub fn normalize(&self) -> Vec<String> {
        let items: Vec<&str> = match self {
            Interests::Text(s) => s.split(',').collect(),
            Interests::List(v) => v.iter().map(String::as_str).collect(),
        };
        items
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for Interests {
    fn from(s: &str) -> Self {
        Interests::Text(s.to_string())
    }
}

impl From<String> for Interests {
    fn from(s: String) -> Self {
        Interests::Text(s)
    }
}

impl From<Vec<String>> for Interests {
    fn from(v: Vec<String>) -> Self {
        Interests::List(v)
    }
}

impl From<Vec<&str>> for Interests {
    fn from(v: Vec<&str>) -> Self {
        Interests::List(v.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("@x.com"));
        assert!(!valid_email("a@nodot"));
        assert!(!valid_email("a@.com"));
        assert!(!valid_email("a@x.com."));
        assert!(!valid_email("a@b@x.com"));
    }

    #[test]
    fn test_interests_text_normalization() {
        let interests: Interests = "a, b , c".into();
        assert_eq!(interests.normalize(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_interests_list_matches_text_form() {
        let from_text: Interests = "a, b , c".into();
        let from_list: Interests = vec!["a", "b", "c"].into();
        assert_eq!(from_text.normalize(), from_list.normalize());
    }

    #[test]
    fn test_interests_empty_segments_are_dropped() {
        let interests: Interests = "hiking,, , biking".into();
        assert_eq!(interests.normalize(), vec!["hiking", "biking"]);

        let interests: Interests = vec!["", "  ", "reading"].into();
        assert_eq!(interests.normalize(), vec!["reading"]);
    }

    #[test]
    fn test_interests_order_is_preserved() {
        let interests: Interests = "z, a, m".into();
        assert_eq!(interests.normalize(), vec!["z", "a", "m"]);
    }
}

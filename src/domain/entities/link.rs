//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `short_code` is unique across all links and stored upper-cased.
/// `image_payload` is attached after creation and may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub image_payload: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_code: String,
        image_payload: Option<Vec<u8>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_code,
            image_payload,
            created_at,
        }
    }

    /// Returns true once the scannable image has been attached.
    pub fn has_image(&self) -> bool {
        self.image_payload.is_some()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub long_url: String,
    pub short_code: String,
}

/// The `(short_code, long_url)` pair returned by administrative listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkSummary {
    pub short_code: String,
    pub long_url: String,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.short_code,
            long_url: link.long_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "ABC123".to_string(),
            None,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "ABC123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert!(!link.has_image());
    }

    #[test]
    fn test_link_with_image() {
        let link = Link::new(
            2,
            "https://example.com".to_string(),
            "QWERTY".to_string(),
            Some(vec![0, 255, 0]),
            Utc::now(),
        );

        assert!(link.has_image());
    }

    #[test]
    fn test_summary_from_link() {
        let link = Link::new(
            3,
            "https://rust-lang.org".to_string(),
            "RUST01".to_string(),
            Some(vec![1, 2, 3]),
            Utc::now(),
        );

        let summary = LinkSummary::from(link);

        assert_eq!(summary.short_code, "RUST01");
        assert_eq!(summary.long_url, "https://rust-lang.org");
    }
}

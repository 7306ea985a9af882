use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One news item as returned by the upstream API.
///
/// Every field is optional: the API omits or nulls fields freely, and a record
/// with neither title nor description is still shown (with placeholder text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    #[serde(rename = "pubDateTZ")]
    pub pub_date_tz: Option<String>,
    pub source_id: Option<String>,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub country: Option<Vec<String>>,
}

impl ArticleRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("No Title")
    }

    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available.")
    }

    pub fn display_source(&self) -> &str {
        self.source_id.as_deref().unwrap_or("Unknown")
    }

    /// "2024-05-01 10:00:00 (UTC)", or "N/A" when no date was sent
    pub fn published_label(&self) -> String {
        let date = self.pub_date.as_deref().unwrap_or("N/A");
        match &self.pub_date_tz {
            Some(tz) => format!("{} ({})", date, tz),
            None => date.to_string(),
        }
    }

    /// Upper-cased country codes, or `None` when the API sent no country list
    pub fn country_label(&self) -> Option<String> {
        self.country.as_ref().map(|codes| {
            if codes.is_empty() {
                "N/A".to_string()
            } else {
                codes
                    .iter()
                    .map(|c| c.to_uppercase())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        })
    }

    pub fn published_at(&self) -> Option<NaiveDateTime> {
        let raw = self.pub_date.as_deref()?;
        NaiveDateTime::parse_from_str(raw.trim(), PUB_DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn titled(title: &str) -> ArticleRecord {
        ArticleRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_title_only() {
        let article: ArticleRecord = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(article, titled("A"));
        assert_eq!(article.link, None);
        assert_eq!(article.country, None);
    }

    #[test]
    fn test_decode_empty_object_is_valid() {
        let article: ArticleRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(article, ArticleRecord::default());
        assert_eq!(article.display_title(), "No Title");
        assert_eq!(article.display_description(), "No description available.");
    }

    #[test]
    fn test_decode_explicit_nulls() {
        let json = r#"{"title":null,"description":null,"country":null,"pubDateTZ":null}"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article, ArticleRecord::default());
    }

    #[test]
    fn test_decode_all_fields_with_upstream_names() {
        let json = r#"{
            "title": "Launch day",
            "link": "https://example.com/a",
            "description": "Rocket goes up",
            "image_url": "https://example.com/a.png",
            "pubDate": "2024-05-01 10:30:00",
            "pubDateTZ": "UTC",
            "source_id": "example",
            "source_name": "Example News",
            "source_url": "https://example.com",
            "country": ["us", "gb"]
        }"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();

        assert_eq!(article.image_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(article.pub_date.as_deref(), Some("2024-05-01 10:30:00"));
        assert_eq!(article.pub_date_tz.as_deref(), Some("UTC"));
        assert_eq!(article.source_name.as_deref(), Some("Example News"));
        assert_eq!(article.country, Some(vec!["us".to_string(), "gb".to_string()]));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{"title":"A","article_id":"xyz","keywords":["k"],"ai_tag":{"x":1}}"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article, titled("A"));
    }

    #[test]
    fn test_serialize_uses_upstream_names() {
        let article = ArticleRecord {
            pub_date: Some("2024-05-01 10:30:00".to_string()),
            pub_date_tz: Some("UTC".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["pubDate"], "2024-05-01 10:30:00");
        assert_eq!(value["pubDateTZ"], "UTC");
    }

    #[test]
    fn test_display_source_falls_back() {
        let mut article = ArticleRecord::default();
        assert_eq!(article.display_source(), "Unknown");
        article.source_id = Some("bbc".to_string());
        assert_eq!(article.display_source(), "bbc");
    }

    #[test]
    fn test_published_label() {
        let mut article = ArticleRecord::default();
        assert_eq!(article.published_label(), "N/A");

        article.pub_date = Some("2024-05-01 10:30:00".to_string());
        assert_eq!(article.published_label(), "2024-05-01 10:30:00");

        article.pub_date_tz = Some("UTC".to_string());
        assert_eq!(article.published_label(), "2024-05-01 10:30:00 (UTC)");
    }

    #[test]
    fn test_country_label() {
        let mut article = ArticleRecord::default();
        assert_eq!(article.country_label(), None);

        article.country = Some(vec![]);
        assert_eq!(article.country_label(), Some("N/A".to_string()));

        article.country = Some(vec!["us".to_string(), "in".to_string()]);
        assert_eq!(article.country_label(), Some("US, IN".to_string()));
    }

    #[test]
    fn test_published_at_parses_upstream_format() {
        let article = ArticleRecord {
            pub_date: Some("2024-05-01 10:30:15".to_string()),
            ..Default::default()
        };
        let parsed = article.published_at().unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 5);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.second(), 15);
    }

    #[test]
    fn test_published_at_rejects_other_formats() {
        let article = ArticleRecord {
            pub_date: Some("May 1st, 2024".to_string()),
            ..Default::default()
        };
        assert_eq!(article.published_at(), None);
        assert_eq!(ArticleRecord::default().published_at(), None);
    }
}

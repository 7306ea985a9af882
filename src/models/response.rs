use serde::{Deserialize, Serialize};

use super::ArticleRecord;

/// One page of the upstream news endpoint.
///
/// `results.len()` need not match `total_results`; only the first page is ever
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    pub results: Vec<ArticleRecord>,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_titles() {
        let json = r#"{"status":"success","totalResults":2,"results":[{"title":"A"},{"title":"B"}]}"#;
        let result: FetchResult = serde_json::from_str(json).unwrap();

        assert!(result.is_success());
        assert_eq!(result.total_results, 2);
        let titles: Vec<_> = result.results.iter().map(|a| a.display_title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(result.results[0].description, None);
    }

    #[test]
    fn test_total_results_may_exceed_page() {
        let json = r#"{"status":"success","totalResults":1234,"results":[{"title":"only"}]}"#;
        let result: FetchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_results, 1234);
        assert_eq!(result.results.len(), 1);
    }

    #[test]
    fn test_unknown_top_level_fields_ignored() {
        let json = r#"{"status":"success","totalResults":0,"results":[],"nextPage":"abc","extra":{"a":[1,2]}}"#;
        let result: FetchResult = serde_json::from_str(json).unwrap();
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_missing_structural_field_fails() {
        let missing_total = r#"{"status":"success","results":[]}"#;
        assert!(serde_json::from_str::<FetchResult>(missing_total).is_err());

        let missing_status = r#"{"totalResults":0,"results":[]}"#;
        assert!(serde_json::from_str::<FetchResult>(missing_status).is_err());
    }

    #[test]
    fn test_error_payload_does_not_decode() {
        // The API reports failures with an object in place of the result list
        let json = r#"{"status":"error","results":{"message":"API key invalid","code":"Unauthorized"}}"#;
        assert!(serde_json::from_str::<FetchResult>(json).is_err());
    }

    #[test]
    fn test_reserialized_results_keep_order() {
        let json = r#"{"status":"success","totalResults":3,"results":[
            {"title":"third","link":"c"},{"title":"first"},{"description":"untitled"}
        ]}"#;
        let result: FetchResult = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&result.results).unwrap();
        let reparsed: Vec<crate::models::ArticleRecord> = serde_json::from_value(value).unwrap();

        assert_eq!(reparsed, result.results);
        assert_eq!(reparsed[0].title.as_deref(), Some("third"));
        assert_eq!(reparsed[2].description.as_deref(), Some("untitled"));
    }

    #[test]
    fn test_status_other_than_success() {
        let result = FetchResult {
            status: "error".to_string(),
            total_results: 0,
            results: vec![],
        };
        assert!(!result.is_success());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    // A missing keyword is handled the same way as an empty one.
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub keyword: String,
    pub generated_comments: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keyword_defaults_to_empty() {
        let request: CommentRequest = serde_json::from_str("{}").expect("valid JSON");
        assert_eq!(request.keyword, "");
    }

    #[test]
    fn test_response_shape() {
        let response = CommentResponse {
            keyword: "coffee".to_string(),
            generated_comments: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(json["keyword"], "coffee");
        assert_eq!(json["generated_comments"].as_array().map(|a| a.len()), Some(3));
    }
}

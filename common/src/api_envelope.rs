//! JSON envelope shapes of the upstream wiki API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub total_entries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMeta {
    pub pagination: Option<PaginationMeta>,
}

/// Upstream error messages come back as one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiMessage {
    pub fn joined(&self) -> String {
        match self {
            ApiMessage::One(message) => message.clone(),
            ApiMessage::Many(messages) => messages.join(", "),
        }
    }
}

/// Either `{ data, meta? }` or the error shape `{ message }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success {
        data: T,
        #[serde(default)]
        meta: Option<ApiMeta>,
    },
    Error {
        message: ApiMessage,
    },
}

impl<T> ApiResponse<T> {
    /// Surfaces the error shape as an error string the caller wraps.
    pub fn into_result(self) -> Result<(T, Option<ApiMeta>), String> {
        match self {
            ApiResponse::Success { data, meta } => Ok((data, meta)),
            ApiResponse::Error { message } => Err(message.joined()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_parses_with_pagination_meta() {
        let json = r#"{
            "status": 200,
            "message": "OK",
            "data": [1, 2, 3],
            "meta": {
                "pagination": {
                    "pageSize": 20,
                    "currentPage": 3,
                    "totalPages": 9,
                    "totalItems": 170,
                    "totalEntries": 170
                }
            }
        }"#;
        let response: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        let (data, meta) = response.into_result().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(meta.unwrap().pagination.unwrap().current_page, 3);
    }

    #[test]
    fn error_envelope_joins_message_lists() {
        let json = r#"{ "message": ["limit too large", "unknown sort"] }"#;
        let response: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            "limit too large, unknown sort"
        );

        let json = r#"{ "message": "not found" }"#;
        let response: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap_err(), "not found");
    }

    #[test]
    fn success_envelope_without_meta_parses() {
        let json = r#"{ "data": ["Common", "Rare"] }"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        let (data, meta) = response.into_result().unwrap();
        assert_eq!(data, vec!["Common", "Rare"]);
        assert!(meta.is_none());
    }
}

//! Error Body - JSON shape of every error response

use serde::{Deserialize, Serialize};

/// エラーレスポンスの本文
///
/// すべてのエラーは `{"error": "<message>"}` の形でクライアントに返されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    /// ユーザー向けのエラーメッセージ
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let body = ErrorBody {
            error: "Birthdate cannot be in the future".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "Birthdate cannot be in the future" })
        );
    }
}

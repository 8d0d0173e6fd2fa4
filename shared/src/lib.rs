use serde::{Deserialize, Serialize};
use std::fmt;

pub mod analytics;
pub mod config;
pub mod error;
pub mod forms;
pub mod requests;
pub mod transaction;

pub use analytics::{AnalyticsSnapshot, CategorizationStats, CategoryTotal, TimelinePoint};
pub use config::ClientConfig;
pub use error::ClientError;
pub use transaction::{
    Category, CategoryType, Direction, RawAmount, RawCategory, RawTransaction, Transaction,
};

/// Currency assumed when a user record carries none
pub const DEFAULT_CURRENCY: &str = "INR";

/// User record as returned by `/api/users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUser {
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub currency_preference: Option<String>,
}

/// A registered user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO 4217 code, `INR` when the backend sent none
    pub currency: String,
}

impl RawUser {
    /// Users without an id cannot be acted on and are dropped
    pub fn normalize(self) -> Option<User> {
        let id = self.user_id?;
        Some(self.into_user(id))
    }

    /// Normalize a single-user response, using `id` when the body lacks one
    pub fn normalize_or(self, id: i64) -> User {
        let id = self.user_id.unwrap_or(id);
        self.into_user(id)
    }

    fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            currency: self
                .currency_preference
                .filter(|code| !code.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }
}

pub fn normalize_users(raw: Vec<RawUser>) -> Vec<User> {
    raw.into_iter().filter_map(RawUser::normalize).collect()
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Case-insensitive email lookup used by the login form
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    let wanted = email.trim();
    users
        .iter()
        .find(|user| user.email.eq_ignore_ascii_case(wanted))
}

/// Request for creating a new user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Request for updating an existing user. A blank password is omitted so
/// the backend keeps the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub currency_preference: String,
}

/// Manually entered transaction; the backend categorizes it from `note`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTransactionRequest {
    pub user_id: i64,
    pub amount: f64,
    pub note: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
}

/// User correction of an automatically assigned category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFeedbackRequest {
    pub transaction_id: i64,
    pub user_id: i64,
    pub corrected_category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    pub category_name: String,
    pub category_type: CategoryType,
    pub user_id: i64,
}

/// Which document an upload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Receipt,
    Statement,
}

impl UploadKind {
    pub fn path(&self) -> &'static str {
        match self {
            UploadKind::Receipt => "/api/files/upload-receipt",
            UploadKind::Statement => "/api/files/upload-statement",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UploadKind::Receipt => "Upload Receipt",
            UploadKind::Statement => "Upload Statement",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Receipt => write!(f, "receipt"),
            UploadKind::Statement => write!(f, "statement"),
        }
    }
}

/// Result of a receipt or statement upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileUploadResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub file_id: Option<i64>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub processed_rows: Option<i64>,
    pub successful_transactions: Option<i64>,
    pub failed_transactions: Option<i64>,
    pub errors: Option<Vec<String>>,
}

impl FileUploadResponse {
    /// Only an explicit `success: false` counts as a failed upload
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Server message, or "<kind> uploaded" when there is none
    pub fn summary(&self, kind: UploadKind) -> String {
        self.message
            .clone()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("{} uploaded", kind))
    }
}

/// Error body produced by the backend's exception handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, email: &str) -> User {
        RawUser {
            user_id: Some(id),
            email: Some(email.to_string()),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    #[test]
    fn test_user_normalization_defaults_currency() {
        let raw: RawUser = serde_json::from_str(
            r#"{"userId": 4, "email": "anika@example.com", "firstName": "Anika", "lastName": "Rao"}"#,
        )
        .unwrap();
        let user = raw.normalize().unwrap();

        assert_eq!(user.id, 4);
        assert_eq!(user.currency, "INR");
        assert_eq!(user.full_name(), "Anika Rao");
    }

    #[test]
    fn test_user_without_id() {
        let raw: RawUser = serde_json::from_str(r#"{"email": "x@example.com"}"#).unwrap();
        assert!(raw.clone().normalize().is_none());
        assert_eq!(raw.normalize_or(12).id, 12);
    }

    #[test]
    fn test_find_user_by_email_ignores_case() {
        let users = vec![user(1, "Anika@Example.com"), user(2, "bo@example.com")];
        assert_eq!(find_user_by_email(&users, "anika@example.COM").map(|u| u.id), Some(1));
        assert_eq!(find_user_by_email(&users, " bo@example.com ").map(|u| u.id), Some(2));
        assert!(find_user_by_email(&users, "nobody@example.com").is_none());
    }

    #[test]
    fn test_update_request_omits_blank_password() {
        let request = UpdateUserRequest {
            first_name: "Anika".to_string(),
            last_name: "Rao".to_string(),
            email: "anika@example.com".to_string(),
            password: None,
            currency_preference: "USD".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["currencyPreference"], "USD");
        assert_eq!(json["firstName"], "Anika");
    }

    #[test]
    fn test_request_wire_names() {
        let feedback = TransactionFeedbackRequest {
            transaction_id: 9,
            user_id: 2,
            corrected_category_name: "Groceries".to_string(),
        };
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["transactionId"], 9);
        assert_eq!(json["correctedCategoryName"], "Groceries");

        let category = CategoryCreateRequest {
            category_name: "Transport".to_string(),
            category_type: CategoryType::Expense,
            user_id: 2,
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["categoryType"], "EXPENSE");
    }

    #[test]
    fn test_upload_response_summary() {
        let empty = FileUploadResponse::default();
        assert!(!empty.is_failure());
        assert_eq!(empty.summary(UploadKind::Receipt), "receipt uploaded");

        let failed: FileUploadResponse = serde_json::from_str(
            r#"{"success": false, "message": "Error processing receipt: unreadable", "errors": ["x"]}"#,
        )
        .unwrap();
        assert!(failed.is_failure());
        assert_eq!(
            failed.summary(UploadKind::Statement),
            "Error processing receipt: unreadable"
        );
    }

    #[test]
    fn test_upload_paths() {
        assert_eq!(UploadKind::Receipt.path(), "/api/files/upload-receipt");
        assert_eq!(UploadKind::Statement.path(), "/api/files/upload-statement");
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount as the backend may send it: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Coerce to a finite number, zero when the value is unusable
    pub fn coerce(&self) -> f64 {
        match self {
            RawAmount::Number(value) if value.is_finite() => *value,
            RawAmount::Number(_) => 0.0,
            RawAmount::Text(text) => parse_amount(text),
        }
    }
}

/// Parse user or backend text as a number. Empty, unparsable and
/// non-finite input all become zero.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse a transaction date. Accepts plain ISO dates, naive timestamps and
/// RFC 3339 timestamps; anything else is `None`.
pub fn parse_transaction_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Money direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Money leaving the account (an expense)
    Debit,
    /// Money coming in (income or refund)
    Credit,
}

impl Direction {
    /// Absent type means debit. Any reported type other than exactly `DEBIT`
    /// is not a debit, so `"debit"` counts as credit.
    pub fn from_reported(reported: Option<&str>) -> Self {
        match reported {
            None | Some("DEBIT") => Direction::Debit,
            Some(_) => Direction::Credit,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Direction::Debit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Debit => write!(f, "DEBIT"),
            Direction::Credit => write!(f, "CREDIT"),
        }
    }
}

/// Transaction exactly as it comes off the wire. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTransaction {
    pub transaction_id: Option<i64>,
    pub user_id: Option<i64>,
    pub date: Option<String>,
    pub amount: Option<RawAmount>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub merchant_name: Option<String>,
    pub category_confidence: Option<f64>,
    pub is_ai_categorized: Option<bool>,
    pub is_user_categorized: Option<bool>,
}

/// Normalized transaction used everywhere past the API boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    /// Date text as reported by the backend
    pub date: String,
    /// Parsed form of `date`, `None` when unparsable
    pub parsed_date: Option<NaiveDateTime>,
    /// Always finite
    pub amount: f64,
    pub direction: Direction,
    /// Type label as reported, kept for display
    pub reported_type: Option<String>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub merchant_name: Option<String>,
    /// Categorization confidence in [0, 1]
    pub confidence: Option<f64>,
    pub ai_categorized: bool,
    pub user_categorized: bool,
}

impl RawTransaction {
    pub fn normalize(self) -> Transaction {
        let date = self.date.unwrap_or_default();
        let parsed_date = parse_transaction_date(&date);
        let direction = Direction::from_reported(self.transaction_type.as_deref());

        Transaction {
            id: self.transaction_id,
            user_id: self.user_id,
            date,
            parsed_date,
            amount: self.amount.as_ref().map(RawAmount::coerce).unwrap_or(0.0),
            direction,
            reported_type: self.transaction_type,
            category_id: self.category_id,
            description: non_empty(self.description),
            merchant_name: non_empty(self.merchant_name),
            confidence: self
                .category_confidence
                .filter(|value| value.is_finite())
                .map(|value| value.clamp(0.0, 1.0)),
            ai_categorized: self.is_ai_categorized.unwrap_or(false),
            user_categorized: self.is_user_categorized.unwrap_or(false),
        }
    }
}

/// Normalize a whole list payload
pub fn normalize_transactions(raw: Vec<RawTransaction>) -> Vec<Transaction> {
    raw.into_iter().map(RawTransaction::normalize).collect()
}

impl Transaction {
    /// Display label: merchant, then description, then a generic fallback
    pub fn label(&self) -> &str {
        self.merchant_name
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or(crate::analytics::DEFAULT_TIMELINE_LABEL)
    }

    /// Negative for debits, positive otherwise
    pub fn signed_amount(&self) -> f64 {
        if self.direction.is_debit() {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// Kind of category as the backend classifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryType {
    #[default]
    Expense,
    Income,
    Transfer,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [CategoryType::Expense, CategoryType::Income, CategoryType::Transfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Expense => "EXPENSE",
            CategoryType::Income => "INCOME",
            CategoryType::Transfer => "TRANSFER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCategory {
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_type: Option<String>,
    pub is_user_defined: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub category_type: CategoryType,
    pub user_defined: bool,
}

impl RawCategory {
    /// A category without an id cannot be referenced by any transaction,
    /// so it is dropped.
    pub fn normalize(self) -> Option<Category> {
        let id = self.category_id?;
        Some(Category {
            id,
            name: self.category_name.unwrap_or_default(),
            category_type: self
                .category_type
                .as_deref()
                .and_then(CategoryType::parse)
                .unwrap_or_default(),
            user_defined: self.is_user_defined.unwrap_or(false),
        })
    }
}

pub fn normalize_categories(raw: Vec<RawCategory>) -> Vec<Category> {
    raw.into_iter().filter_map(RawCategory::normalize).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount(" 12.50 "), 12.5);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("bad"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_raw_amount_accepts_number_or_text() {
        let number: RawAmount = serde_json::from_str("50").unwrap();
        assert_eq!(number, RawAmount::Number(50.0));
        assert_eq!(number.coerce(), 50.0);

        let text: RawAmount = serde_json::from_str("\"100.25\"").unwrap();
        assert_eq!(text.coerce(), 100.25);

        let bad: RawAmount = serde_json::from_str("\"bad\"").unwrap();
        assert_eq!(bad.coerce(), 0.0);
    }

    #[test]
    fn test_parse_transaction_date_formats() {
        let plain = parse_transaction_date("2024-01-05").unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (2024, 1, 5));

        let naive = parse_transaction_date("2024-02-10T08:30:00").unwrap();
        assert_eq!((naive.month(), naive.hour()), (2, 8));

        let with_fraction = parse_transaction_date("2024-02-10T08:30:00.250").unwrap();
        assert_eq!(with_fraction.minute(), 30);

        let zoned = parse_transaction_date("2024-03-01T23:00:00-05:00").unwrap();
        assert_eq!((zoned.month(), zoned.day()), (3, 1));

        assert!(parse_transaction_date("not a date").is_none());
        assert!(parse_transaction_date("").is_none());
        assert!(parse_transaction_date("2024-13-40").is_none());
    }

    #[test]
    fn test_direction_defaults_to_debit() {
        assert_eq!(Direction::from_reported(None), Direction::Debit);
        assert_eq!(Direction::from_reported(Some("DEBIT")), Direction::Debit);
        assert_eq!(Direction::from_reported(Some("debit")), Direction::Credit);
        assert_eq!(Direction::from_reported(Some(" DEBIT")), Direction::Credit);
        assert_eq!(Direction::from_reported(Some("CREDIT")), Direction::Credit);
        assert_eq!(Direction::from_reported(Some("REFUND")), Direction::Credit);
    }

    #[test]
    fn test_normalize_full_payload() {
        let json = r#"{
            "transactionId": 7,
            "userId": 3,
            "date": "2024-01-05",
            "amount": "100",
            "type": "DEBIT",
            "categoryId": 1,
            "description": "weekly shop",
            "merchantName": "FreshMart",
            "categoryConfidence": 0.87,
            "isAiCategorized": true,
            "isUserCategorized": false
        }"#;
        let raw: RawTransaction = serde_json::from_str(json).unwrap();
        let tx = raw.normalize();

        assert_eq!(tx.id, Some(7));
        assert_eq!(tx.user_id, Some(3));
        assert_eq!(tx.amount, 100.0);
        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.category_id, Some(1));
        assert_eq!(tx.label(), "FreshMart");
        assert_eq!(tx.confidence, Some(0.87));
        assert!(tx.ai_categorized);
        assert!(!tx.user_categorized);
        assert!(tx.parsed_date.is_some());
    }

    #[test]
    fn test_normalize_sparse_payload() {
        let raw: RawTransaction = serde_json::from_str(r#"{"transactionId": 1, "merchantName": ""}"#).unwrap();
        let tx = raw.normalize();

        assert_eq!(tx.amount, 0.0);
        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.reported_type, None);
        assert!(tx.parsed_date.is_none());
        assert_eq!(tx.merchant_name, None);
        assert_eq!(tx.label(), "Transaction");
    }

    #[test]
    fn test_null_fields_are_tolerated() {
        let json = r#"{"transactionId": 2, "amount": null, "type": null, "categoryId": null, "date": null}"#;
        let tx: Transaction = serde_json::from_str::<RawTransaction>(json).unwrap().normalize();
        assert_eq!(tx.amount, 0.0);
        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.category_id, None);
        assert_eq!(tx.date, "");
    }

    #[test]
    fn test_signed_amount() {
        let debit = RawTransaction {
            amount: Some(RawAmount::Number(40.0)),
            ..Default::default()
        }
        .normalize();
        assert_eq!(debit.signed_amount(), -40.0);

        let credit = RawTransaction {
            amount: Some(RawAmount::Number(40.0)),
            transaction_type: Some("CREDIT".to_string()),
            ..Default::default()
        }
        .normalize();
        assert_eq!(credit.signed_amount(), 40.0);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let tx = RawTransaction {
            category_confidence: Some(1.4),
            ..Default::default()
        }
        .normalize();
        assert_eq!(tx.confidence, Some(1.0));
    }

    #[test]
    fn test_normalize_categories() {
        let json = r#"[
            {"categoryId": 1, "categoryName": "Groceries", "categoryType": "EXPENSE", "isUserDefined": false},
            {"categoryId": 2, "categoryName": "Salary", "categoryType": "INCOME"},
            {"categoryName": "Orphan"},
            {"categoryId": 4, "categoryName": "Odd", "categoryType": "SOMETHING"}
        ]"#;
        let raw: Vec<RawCategory> = serde_json::from_str(json).unwrap();
        let categories = normalize_categories(raw);

        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].name, "Groceries");
        assert_eq!(categories[1].category_type, CategoryType::Income);
        assert_eq!(categories[2].category_type, CategoryType::Expense);
    }

    #[test]
    fn test_category_type_round_trip_names() {
        for kind in CategoryType::ALL {
            assert_eq!(CategoryType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(
            serde_json::to_string(&CategoryType::Transfer).unwrap(),
            "\"TRANSFER\""
        );
    }
}

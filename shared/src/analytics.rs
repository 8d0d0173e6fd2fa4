//! Derived analytics for the dashboard.
//!
//! Every function here is pure and total: malformed amounts and dates were
//! already normalized by [`crate::transaction`], and anything still missing
//! (an unknown category, an unparsable date) falls back to a sentinel
//! instead of failing. The views recompute these on every input change.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::transaction::{parse_amount, Category, Transaction};

/// Bucket for debits whose category cannot be resolved
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Timeline label when a transaction has neither merchant nor description
pub const DEFAULT_TIMELINE_LABEL: &str = "Transaction";

/// Category id to category, rebuilt whenever the category list changes
pub type CategoryLookup = HashMap<i64, Category>;

pub fn build_category_lookup(categories: &[Category]) -> CategoryLookup {
    categories
        .iter()
        .map(|category| (category.id, category.clone()))
        .collect()
}

/// Display name for a transaction's category. Unknown ids and categories
/// with a blank name both resolve to [`UNCATEGORIZED`].
pub fn resolve_category_name(category_id: Option<i64>, lookup: &CategoryLookup) -> &str {
    category_id
        .and_then(|id| lookup.get(&id))
        .map(|category| category.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(UNCATEGORIZED)
}

/// Total debit spend for one resolved category name
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
}

/// One point on the signed-amount timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    /// Date text as reported by the backend
    pub date: String,
    /// Negative for debits
    pub amount: f64,
    pub label: String,
}

/// Sum debit amounts per resolved category name.
///
/// Entries come out in first-appearance order. Categories with no debit
/// transactions produce no entry.
pub fn project_category_totals(
    transactions: &[Transaction],
    lookup: &CategoryLookup,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for tx in transactions.iter().filter(|tx| tx.direction.is_debit()) {
        let name = resolve_category_name(tx.category_id, lookup);

        match positions.get(name) {
            Some(&index) => totals[index].total += tx.amount,
            None => {
                positions.insert(name.to_string(), totals.len());
                totals.push(CategoryTotal {
                    name: name.to_string(),
                    total: tx.amount,
                });
            }
        }
    }

    totals
}

/// Chronological signed-amount series.
///
/// The sort is stable and unparsable dates order before every real date.
pub fn project_timeline(transactions: &[Transaction]) -> Vec<TimelinePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    // None < Some(_), so unparsable dates land at the front
    ordered.sort_by_key(|tx| tx.parsed_date);

    ordered
        .into_iter()
        .map(|tx| TimelinePoint {
            date: tx.date.clone(),
            amount: tx.signed_amount(),
            label: tx.label().to_string(),
        })
        .collect()
}

/// Debit spend within the calendar month of `reference`.
///
/// Transactions with unparsable dates are excluded, unlike the timeline
/// which keeps them.
pub fn project_monthly_spend(transactions: &[Transaction], reference: NaiveDate) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.direction.is_debit())
        .filter(|tx| {
            tx.parsed_date.is_some_and(|date| {
                date.year() == reference.year() && date.month() == reference.month()
            })
        })
        .map(|tx| tx.amount)
        .sum()
}

/// Budget figure typed by the user, zero when it is not a number
pub fn parse_budget(budget_text: &str) -> f64 {
    parse_amount(budget_text)
}

/// Signed budget remainder; negative means over budget
pub fn derive_budget_remainder(budget_text: &str, monthly_spend: f64) -> f64 {
    parse_budget(budget_text) - monthly_spend
}

/// Counts shown in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorizationStats {
    pub total: usize,
    pub ai_categorized: usize,
    pub user_categorized: usize,
}

pub fn project_categorization_stats(transactions: &[Transaction]) -> CategorizationStats {
    CategorizationStats {
        total: transactions.len(),
        ai_categorized: transactions.iter().filter(|tx| tx.ai_categorized).count(),
        user_categorized: transactions.iter().filter(|tx| tx.user_categorized).count(),
    }
}

/// Everything the dashboard renders, derived in one pass over the inputs
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub category_totals: Vec<CategoryTotal>,
    pub timeline: Vec<TimelinePoint>,
    pub monthly_spend: f64,
    pub budget: f64,
    pub remaining_budget: f64,
    pub stats: CategorizationStats,
}

impl AnalyticsSnapshot {
    pub fn project(
        transactions: &[Transaction],
        categories: &[Category],
        budget_text: &str,
        today: NaiveDate,
    ) -> Self {
        let lookup = build_category_lookup(categories);
        let monthly_spend = project_monthly_spend(transactions, today);

        Self {
            category_totals: project_category_totals(transactions, &lookup),
            timeline: project_timeline(transactions),
            monthly_spend,
            budget: parse_budget(budget_text),
            remaining_budget: derive_budget_remainder(budget_text, monthly_spend),
            stats: project_categorization_stats(transactions),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{normalize_categories, normalize_transactions, RawCategory, RawTransaction};

    const EPSILON: f64 = 1e-9;

    fn transactions(json: &str) -> Vec<Transaction> {
        let raw: Vec<RawTransaction> = serde_json::from_str(json).unwrap();
        normalize_transactions(raw)
    }

    fn categories(json: &str) -> Vec<Category> {
        let raw: Vec<RawCategory> = serde_json::from_str(json).unwrap();
        normalize_categories(raw)
    }

    fn example_transactions() -> Vec<Transaction> {
        transactions(
            r#"[
                {"transactionId": 1, "amount": "100", "type": "DEBIT", "date": "2024-01-05", "categoryId": 1},
                {"transactionId": 2, "amount": 50, "type": "CREDIT", "date": "2024-01-06"},
                {"transactionId": 3, "amount": "bad", "type": "DEBIT", "date": "2024-01-07", "categoryId": 2}
            ]"#,
        )
    }

    fn example_categories() -> Vec<Category> {
        categories(r#"[{"categoryId": 1, "categoryName": "Groceries", "categoryType": "EXPENSE"}]"#)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_example_category_totals() {
        let lookup = build_category_lookup(&example_categories());
        let totals = project_category_totals(&example_transactions(), &lookup);

        assert_eq!(
            totals,
            vec![
                CategoryTotal { name: "Groceries".to_string(), total: 100.0 },
                CategoryTotal { name: UNCATEGORIZED.to_string(), total: 0.0 },
            ]
        );
    }

    #[test]
    fn test_example_timeline() {
        let timeline = project_timeline(&example_transactions());
        let points: Vec<(&str, f64)> = timeline
            .iter()
            .map(|point| (point.date.as_str(), point.amount))
            .collect();

        assert_eq!(
            points,
            vec![("2024-01-05", -100.0), ("2024-01-06", 50.0), ("2024-01-07", 0.0)]
        );
        assert!(timeline.iter().all(|point| point.label == DEFAULT_TIMELINE_LABEL));
    }

    #[test]
    fn test_category_totals_exclude_credits() {
        let txs = transactions(
            r#"[
                {"amount": 10, "type": "CREDIT", "categoryId": 1},
                {"amount": 20, "type": "CREDIT"},
                {"amount": 5, "categoryId": 1}
            ]"#,
        );
        let lookup = build_category_lookup(&example_categories());
        let totals = project_category_totals(&txs, &lookup);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, "Groceries");
        assert_eq!(totals[0].total, 5.0);
    }

    #[test]
    fn test_category_totals_sum_matches_debit_sum() {
        let txs = transactions(
            r#"[
                {"amount": 12.3, "categoryId": 1},
                {"amount": "45.6", "categoryId": 9},
                {"amount": 7.1, "type": "CREDIT", "categoryId": 1},
                {"amount": "0.01"},
                {"amount": 1000, "type": "DEBIT", "categoryId": 1}
            ]"#,
        );
        let lookup = build_category_lookup(&example_categories());
        let totals = project_category_totals(&txs, &lookup);

        let totals_sum: f64 = totals.iter().map(|t| t.total).sum();
        let debit_sum: f64 = txs
            .iter()
            .filter(|tx| tx.direction.is_debit())
            .map(|tx| tx.amount)
            .sum();
        assert!((totals_sum - debit_sum).abs() < EPSILON);
    }

    #[test]
    fn test_unused_category_has_no_entry() {
        let cats = categories(
            r#"[
                {"categoryId": 1, "categoryName": "Groceries"},
                {"categoryId": 2, "categoryName": "Transport"}
            ]"#,
        );
        let txs = transactions(r#"[{"amount": 30, "categoryId": 1}]"#);
        let totals = project_category_totals(&txs, &build_category_lookup(&cats));

        assert_eq!(totals.len(), 1);
        assert!(totals.iter().all(|t| t.name != "Transport"));
        assert!(totals.iter().all(|t| t.name != UNCATEGORIZED));
    }

    #[test]
    fn test_nameless_category_is_uncategorized() {
        let cats = categories(
            r#"[
                {"categoryId": 1},
                {"categoryId": 2, "categoryName": null},
                {"categoryId": 3, "categoryName": "  "}
            ]"#,
        );
        let txs = transactions(
            r#"[
                {"amount": 10, "categoryId": 1},
                {"amount": 5, "categoryId": 2},
                {"amount": 2, "categoryId": 3}
            ]"#,
        );
        let lookup = build_category_lookup(&cats);

        assert_eq!(
            project_category_totals(&txs, &lookup),
            vec![CategoryTotal { name: UNCATEGORIZED.to_string(), total: 17.0 }]
        );
        assert_eq!(resolve_category_name(Some(2), &lookup), UNCATEGORIZED);
        assert_eq!(resolve_category_name(None, &lookup), UNCATEGORIZED);
    }

    #[test]
    fn test_lowercase_debit_is_not_spend() {
        let txs = transactions(
            r#"[
                {"amount": 40, "type": "debit", "categoryId": 1},
                {"amount": 15, "type": "DEBIT", "categoryId": 1}
            ]"#,
        );
        let totals = project_category_totals(&txs, &build_category_lookup(&example_categories()));

        assert_eq!(totals, vec![CategoryTotal { name: "Groceries".to_string(), total: 15.0 }]);
    }

    #[test]
    fn test_category_totals_empty_input() {
        assert!(project_category_totals(&[], &CategoryLookup::new()).is_empty());
    }

    #[test]
    fn test_timeline_is_stable_sorted_permutation() {
        let txs = transactions(
            r#"[
                {"transactionId": 1, "date": "2024-03-02", "amount": 1},
                {"transactionId": 2, "date": "garbage", "amount": 2},
                {"transactionId": 3, "date": "2024-01-15", "amount": 3},
                {"transactionId": 4, "date": "2024-03-02", "amount": 4},
                {"transactionId": 5, "amount": 5},
                {"transactionId": 6, "date": "2024-02-01T10:00:00Z", "amount": 6}
            ]"#,
        );
        let timeline = project_timeline(&txs);
        assert_eq!(timeline.len(), txs.len());

        let amounts: Vec<f64> = timeline.iter().map(|point| -point.amount).collect();
        // unparsable first in original order, then by date with ties kept in order
        assert_eq!(amounts, vec![2.0, 5.0, 3.0, 6.0, 1.0, 4.0]);
    }

    #[test]
    fn test_timeline_labels() {
        let txs = transactions(
            r#"[
                {"date": "2024-01-01", "merchantName": "Cafe", "description": "latte"},
                {"date": "2024-01-02", "description": "bus fare"},
                {"date": "2024-01-03", "merchantName": "", "description": ""}
            ]"#,
        );
        let labels: Vec<String> = project_timeline(&txs).into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Cafe", "bus fare", "Transaction"]);
    }

    #[test]
    fn test_monthly_spend_filters_month_year_and_direction() {
        let txs = transactions(
            r#"[
                {"date": "2024-05-01", "amount": 10},
                {"date": "2024-05-31T22:00:00", "amount": "15.5"},
                {"date": "2024-05-10", "amount": 99, "type": "CREDIT"},
                {"date": "2024-04-30", "amount": 1000},
                {"date": "2023-05-15", "amount": 1000}
            ]"#,
        );
        let spend = project_monthly_spend(&txs, date(2024, 5, 20));
        assert!((spend - 25.5).abs() < EPSILON);
    }

    #[test]
    fn test_monthly_spend_excludes_unparsable_dates() {
        let txs = transactions(
            r#"[
                {"date": "not-a-date", "amount": 500},
                {"amount": 250},
                {"date": "2024-01-07", "amount": 20}
            ]"#,
        );
        assert_eq!(project_monthly_spend(&txs, date(2024, 1, 31)), 20.0);

        // the timeline still keeps them, at the front
        let timeline = project_timeline(&txs);
        assert_eq!(timeline[0].amount, -500.0);
        assert_eq!(timeline[1].amount, -250.0);
    }

    #[test]
    fn test_budget_remainder() {
        assert_eq!(derive_budget_remainder("2500", 1800.0), 700.0);
        assert_eq!(derive_budget_remainder("abc", 500.0), -500.0);
        assert_eq!(derive_budget_remainder("", 0.0), 0.0);
        assert_eq!(derive_budget_remainder(" 100.5 ", 0.5), 100.0);
    }

    #[test]
    fn test_categorization_stats() {
        let txs = transactions(
            r#"[
                {"isAiCategorized": true},
                {"isAiCategorized": true, "isUserCategorized": true},
                {"isUserCategorized": false},
                {}
            ]"#,
        );
        let stats = project_categorization_stats(&txs);
        assert_eq!(
            stats,
            CategorizationStats { total: 4, ai_categorized: 2, user_categorized: 1 }
        );
    }

    #[test]
    fn test_snapshot_projection() {
        let snapshot = AnalyticsSnapshot::project(
            &example_transactions(),
            &example_categories(),
            "80",
            date(2024, 1, 20),
        );

        assert_eq!(snapshot.monthly_spend, 100.0);
        assert_eq!(snapshot.budget, 80.0);
        assert_eq!(snapshot.remaining_budget, -20.0);
        assert!(snapshot.is_over_budget());
        assert_eq!(snapshot.timeline.len(), 3);
        assert_eq!(snapshot.category_totals.len(), 2);
        assert_eq!(snapshot.stats.total, 3);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let txs = example_transactions();
        let cats = example_categories();
        let first = AnalyticsSnapshot::project(&txs, &cats, "2500", date(2024, 1, 1));
        let second = AnalyticsSnapshot::project(&txs, &cats, "2500", date(2024, 1, 1));
        assert_eq!(first, second);
    }
}

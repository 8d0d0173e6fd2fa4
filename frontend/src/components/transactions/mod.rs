pub mod transaction_table;
pub mod transactions_view;

pub use transactions_view::TransactionsView;

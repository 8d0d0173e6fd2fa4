pub mod use_account;
pub mod use_banner;
pub mod use_entries;
pub mod use_finance_data;

pub use use_account::use_account;
pub use use_banner::use_banner_timeout;
pub use use_entries::use_entries;
pub use use_finance_data::use_finance_data;

pub mod account_form;
pub mod category_form;
pub mod login_form;
pub mod manual_form;
pub mod register_form;

pub use account_form::AccountForm;
pub use category_form::CategoryForm;
pub use login_form::LoginForm;
pub use manual_form::ManualForm;
pub use register_form::RegisterForm;

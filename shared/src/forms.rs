use chrono::NaiveDate;
use thiserror::Error;

use crate::transaction::{parse_amount, CategoryType};
use crate::{
    CategoryCreateRequest, CreateUserRequest, ManualTransactionRequest, TransactionFeedbackRequest,
    UpdateUserRequest, User,
};

/// Library entry that switches the category form to a free-text name
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Currencies offered on the account form
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["INR", "USD", "EUR"];

/// Problems caught before anything is sent to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Enter email (or fallback user ID) to login")]
    MissingLoginIdentity,

    #[error("Fallback user ID must be numeric")]
    FallbackIdNotNumeric,

    #[error("Load or create a user first")]
    UserRequired,

    #[error("Load a user first")]
    AccountRequired,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Fill amount, note, and date before submitting")]
    IncompleteManualEntry,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Choose a file to upload")]
    NoFileChosen,

    #[error("Add a corrected category before sending feedback")]
    EmptyFeedback,

    #[error("Enter a name for the custom category")]
    EmptyCustomCategory,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FirstName,
    LastName,
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn set(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::FirstName => self.first_name = value,
            RegisterField::LastName => self.last_name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
        }
    }

    pub fn to_request(&self) -> Result<CreateUserRequest, FormError> {
        Ok(CreateUserRequest {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            email: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    UserIdFallback,
}

/// Login lookup form. The password is collected but never checked or sent:
/// login only resolves which user record to load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub user_id_fallback: String,
}

/// What the login form asks the client to look up
#[derive(Debug, Clone, PartialEq)]
pub struct LoginIdentity {
    pub email: Option<String>,
    pub fallback_id: Option<String>,
}

impl LoginForm {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
            LoginField::UserIdFallback => self.user_id_fallback = value,
        }
    }

    pub fn identity(&self) -> Result<LoginIdentity, FormError> {
        let email = Some(self.email.trim().to_string()).filter(|email| !email.is_empty());
        let fallback_id =
            Some(self.user_id_fallback.trim().to_string()).filter(|id| !id.is_empty());
        if email.is_none() && fallback_id.is_none() {
            return Err(FormError::MissingLoginIdentity);
        }
        Ok(LoginIdentity { email, fallback_id })
    }
}

/// The fallback id must be a positive integer
pub fn parse_fallback_user_id(text: &str) -> Result<i64, FormError> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(FormError::FallbackIdNotNumeric)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    FirstName,
    LastName,
    Email,
    Password,
    Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Blank keeps the current password
    pub password: String,
    pub currency_preference: String,
}

impl AccountForm {
    pub fn new(default_currency: &str) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            currency_preference: default_currency.to_string(),
        }
    }

    /// Seed the form from a freshly loaded user
    pub fn from_user(user: &User, password: String) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password,
            currency_preference: user.currency.clone(),
        }
    }

    pub fn set(&mut self, field: AccountField, value: String) {
        match field {
            AccountField::FirstName => self.first_name = value,
            AccountField::LastName => self.last_name = value,
            AccountField::Email => self.email = value,
            AccountField::Password => self.password = value,
            AccountField::Currency => self.currency_preference = value,
        }
    }

    pub fn to_request(&self) -> Result<UpdateUserRequest, FormError> {
        Ok(UpdateUserRequest {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            email: required(&self.email, "Email")?,
            password: Some(self.password.clone()).filter(|password| !password.is_empty()),
            currency_preference: self.currency_preference.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Amount,
    Note,
    Date,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualForm {
    pub amount: String,
    pub note: String,
    /// YYYY-MM-DD from the date input
    pub date: String,
}

impl ManualForm {
    pub fn set(&mut self, field: ManualField, value: String) {
        match field {
            ManualField::Amount => self.amount = value,
            ManualField::Note => self.note = value,
            ManualField::Date => self.date = value,
        }
    }

    pub fn to_request(&self, user_id: i64) -> Result<ManualTransactionRequest, FormError> {
        let amount = parse_amount(&self.amount);
        let note = self.note.trim();
        let date = self.date.trim();
        if amount == 0.0 || note.is_empty() || date.is_empty() {
            return Err(FormError::IncompleteManualEntry);
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date.to_string()))?;

        Ok(ManualTransactionRequest {
            user_id,
            amount,
            note: note.to_string(),
            date: date.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Name,
    Type,
    CustomName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    /// Selected library entry, or [`CUSTOM_CATEGORY`]
    pub category_name: String,
    pub category_type: CategoryType,
    pub custom_name: String,
}

impl CategoryForm {
    pub fn new(default_name: &str) -> Self {
        Self {
            category_name: default_name.to_string(),
            category_type: CategoryType::Expense,
            custom_name: String::new(),
        }
    }

    pub fn set(&mut self, field: CategoryField, value: String) {
        match field {
            CategoryField::Name => self.category_name = value,
            CategoryField::Type => {
                self.category_type = CategoryType::parse(&value).unwrap_or_default()
            }
            CategoryField::CustomName => self.custom_name = value,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.category_name == CUSTOM_CATEGORY
    }

    /// Name that will be created: the custom text when "Custom" is picked
    pub fn resolved_name(&self) -> Result<String, FormError> {
        if self.is_custom() {
            let custom = self.custom_name.trim();
            if custom.is_empty() {
                return Err(FormError::EmptyCustomCategory);
            }
            return Ok(custom.to_string());
        }
        required(&self.category_name, "Category name")
    }

    pub fn to_request(&self, user_id: i64) -> Result<CategoryCreateRequest, FormError> {
        Ok(CategoryCreateRequest {
            category_name: self.resolved_name()?,
            category_type: self.category_type,
            user_id,
        })
    }
}

/// Build the feedback payload from the draft chosen in a transaction row
pub fn feedback_request(
    transaction_id: i64,
    user_id: i64,
    draft: Option<&str>,
) -> Result<TransactionFeedbackRequest, FormError> {
    let corrected = draft.map(str::trim).unwrap_or_default();
    if corrected.is_empty() {
        return Err(FormError::EmptyFeedback);
    }
    Ok(TransactionFeedbackRequest {
        transaction_id,
        user_id,
        corrected_category_name: corrected.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_every_field() {
        let mut form = RegisterForm::default();
        assert_eq!(form.to_request(), Err(FormError::MissingField("First name")));

        form.set(RegisterField::FirstName, "Anika".to_string());
        form.set(RegisterField::LastName, "Rao".to_string());
        form.set(RegisterField::Email, " anika@example.com ".to_string());
        assert_eq!(form.to_request(), Err(FormError::MissingField("Password")));

        form.set(RegisterField::Password, "hunter22".to_string());
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "anika@example.com");
    }

    #[test]
    fn test_login_identity() {
        let mut form = LoginForm::default();
        assert_eq!(form.identity(), Err(FormError::MissingLoginIdentity));

        form.set(LoginField::Password, "secret".to_string());
        assert_eq!(form.identity(), Err(FormError::MissingLoginIdentity));

        form.set(LoginField::UserIdFallback, " 42 ".to_string());
        let identity = form.identity().unwrap();
        assert_eq!(identity.email, None);
        assert_eq!(identity.fallback_id.as_deref(), Some("42"));

        form.set(LoginField::Email, "a@example.com".to_string());
        assert_eq!(form.identity().unwrap().email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_parse_fallback_user_id() {
        assert_eq!(parse_fallback_user_id("42"), Ok(42));
        assert_eq!(parse_fallback_user_id(" 7 "), Ok(7));
        assert_eq!(parse_fallback_user_id("0"), Err(FormError::FallbackIdNotNumeric));
        assert_eq!(parse_fallback_user_id("-3"), Err(FormError::FallbackIdNotNumeric));
        assert_eq!(parse_fallback_user_id("abc"), Err(FormError::FallbackIdNotNumeric));
    }

    #[test]
    fn test_account_form_from_user() {
        let user = User {
            id: 1,
            email: "anika@example.com".to_string(),
            first_name: "Anika".to_string(),
            last_name: "Rao".to_string(),
            currency: "EUR".to_string(),
        };
        let form = AccountForm::from_user(&user, String::new());
        let request = form.to_request().unwrap();

        assert_eq!(request.currency_preference, "EUR");
        assert_eq!(request.password, None);

        let mut with_password = form.clone();
        with_password.set(AccountField::Password, "newpassword".to_string());
        assert_eq!(
            with_password.to_request().unwrap().password.as_deref(),
            Some("newpassword")
        );
    }

    #[test]
    fn test_manual_form_validation() {
        let mut form = ManualForm::default();
        assert_eq!(form.to_request(1), Err(FormError::IncompleteManualEntry));

        form.set(ManualField::Amount, "1200".to_string());
        form.set(ManualField::Note, "Team lunch".to_string());
        assert_eq!(form.to_request(1), Err(FormError::IncompleteManualEntry));

        form.set(ManualField::Date, "05/01/2024".to_string());
        assert_eq!(
            form.to_request(1),
            Err(FormError::InvalidDate("05/01/2024".to_string()))
        );

        form.set(ManualField::Date, "2024-05-01".to_string());
        let request = form.to_request(3).unwrap();
        assert_eq!(request.user_id, 3);
        assert_eq!(request.amount, 1200.0);
        assert_eq!(request.note, "Team lunch");

        form.set(ManualField::Amount, "abc".to_string());
        assert_eq!(form.to_request(3), Err(FormError::IncompleteManualEntry));
    }

    #[test]
    fn test_category_form_custom_name() {
        let mut form = CategoryForm::new("Groceries");
        assert_eq!(form.resolved_name(), Ok("Groceries".to_string()));

        form.set(CategoryField::Name, CUSTOM_CATEGORY.to_string());
        assert_eq!(form.resolved_name(), Err(FormError::EmptyCustomCategory));

        form.set(CategoryField::CustomName, "Pets".to_string());
        form.set(CategoryField::Type, "TRANSFER".to_string());
        let request = form.to_request(5).unwrap();
        assert_eq!(request.category_name, "Pets");
        assert_eq!(request.category_type, CategoryType::Transfer);
    }

    #[test]
    fn test_feedback_request_requires_draft() {
        assert_eq!(feedback_request(1, 2, None), Err(FormError::EmptyFeedback));
        assert_eq!(feedback_request(1, 2, Some("  ")), Err(FormError::EmptyFeedback));

        let request = feedback_request(1, 2, Some("Transport")).unwrap();
        assert_eq!(request.corrected_category_name, "Transport");
        assert_eq!(request.transaction_id, 1);
    }
}

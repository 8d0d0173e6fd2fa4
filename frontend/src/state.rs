use std::collections::HashMap;
use std::rc::Rc;

use shared::forms::{
    AccountField, AccountForm, CategoryField, CategoryForm, LoginField, LoginForm, ManualField,
    ManualForm, RegisterField, RegisterForm,
};
use shared::{Category, ClientConfig, FileUploadResponse, Transaction, UploadKind, User};
use yew::prelude::*;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    Dashboard,
    Categories,
    Receipt,
    Statement,
    Manual,
    Transactions,
    Account,
    Admin,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Auth => "Sign in",
            View::Dashboard => "Analytics",
            View::Categories => "Categories",
            View::Receipt => "Upload Receipt",
            View::Statement => "Upload Statement",
            View::Manual => "Manual Entry",
            View::Transactions => "Transactions",
            View::Account => "My Account",
            View::Admin => "Admin Users",
        }
    }

    pub fn upload_kind(&self) -> Option<UploadKind> {
        match self {
            View::Receipt => Some(UploadKind::Receipt),
            View::Statement => Some(UploadKind::Statement),
            _ => None,
        }
    }
}

const USER_VIEWS: [View; 7] = [
    View::Dashboard,
    View::Categories,
    View::Receipt,
    View::Statement,
    View::Manual,
    View::Transactions,
    View::Account,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }

    /// Errors stay until clicked away
    pub fn auto_dismiss(&self) -> bool {
        *self == BannerKind::Success
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// Sequence number; a dismiss only applies to the banner it was scheduled for
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetView(View),
    SetRole(Role),
    SignedIn { user: User, password: String },
    UserUpdated(User),
    SignedOut,

    TransactionsLoading,
    TransactionsLoaded(Vec<Transaction>),
    TransactionsFailed,
    CategoriesLoading,
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed,
    UsersLoading,
    UsersLoaded(Vec<User>),
    UsersFailed,

    SetBudget(String),
    EditRegister(RegisterField, String),
    EditLogin(LoginField, String),
    EditAccount(AccountField, String),
    EditManual(ManualField, String),
    EditCategory(CategoryField, String),
    FeedbackDraft(i64, String),
    FeedbackSent(i64),

    ManualSaved(String),
    CategoryCreated,
    UploadFinished(UploadKind, FileUploadResponse),

    ShowBanner(BannerKind, String),
    DismissBanner(u64),
}

/// Whole client state. Collections sit behind `Rc` so cloning the state
/// on every reduce stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: View,
    pub role: Role,
    pub user: Option<User>,

    pub transactions: Rc<Vec<Transaction>>,
    pub categories: Rc<Vec<Category>>,
    pub users: Rc<Vec<User>>,
    pub loading_transactions: bool,
    pub loading_categories: bool,
    pub loading_users: bool,

    pub budget: String,
    pub register: RegisterForm,
    pub login: LoginForm,
    pub account: AccountForm,
    pub manual: ManualForm,
    pub category: CategoryForm,
    pub feedback_drafts: HashMap<i64, String>,

    pub manual_result: Option<String>,
    pub upload_results: HashMap<UploadKind, String>,

    pub banner: Option<Banner>,
    banner_seq: u64,

    default_currency: String,
    default_category: String,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> Self {
        let default_category = config.first_library_category().to_string();
        Self {
            view: View::Auth,
            role: Role::User,
            user: None,
            transactions: Rc::new(Vec::new()),
            categories: Rc::new(Vec::new()),
            users: Rc::new(Vec::new()),
            loading_transactions: false,
            loading_categories: false,
            loading_users: false,
            budget: config.default_budget.clone(),
            register: RegisterForm::default(),
            login: LoginForm::default(),
            account: AccountForm::new(&config.default_currency),
            manual: ManualForm::default(),
            category: CategoryForm::new(&default_category),
            feedback_drafts: HashMap::new(),
            manual_result: None,
            upload_results: HashMap::new(),
            banner: None,
            banner_seq: 0,
            default_currency: config.default_currency.clone(),
            default_category,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Currency used for every amount on screen
    pub fn currency(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.currency.as_str())
            .unwrap_or(&self.default_currency)
    }

    pub fn show_nav(&self) -> bool {
        self.user.is_some() || self.role == Role::Admin
    }

    pub fn nav_items(&self) -> Vec<View> {
        let mut items = USER_VIEWS.to_vec();
        if self.role == Role::Admin {
            items.push(View::Admin);
        }
        items
    }

    /// Auth forms are shown whenever nobody is signed in outside admin mode
    pub fn show_auth(&self) -> bool {
        self.user.is_none() && self.role == Role::User
    }

    pub fn feedback_draft(&self, transaction_id: i64) -> &str {
        self.feedback_drafts
            .get(&transaction_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn upload_result(&self, kind: UploadKind) -> Option<&str> {
        self.upload_results.get(&kind).map(String::as_str)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetView(view) => self.view = view,
            Action::SetRole(role) => {
                self.role = role;
                self.view = match role {
                    Role::Admin => View::Admin,
                    Role::User => View::Dashboard,
                };
            }
            Action::SignedIn { user, password } => {
                self.account = AccountForm::from_user(&user, password);
                self.user = Some(user);
                self.role = Role::User;
                self.view = View::Dashboard;
                self.register = RegisterForm::default();
                self.login = LoginForm::default();
            }
            Action::UserUpdated(user) => {
                self.user = Some(user);
                self.account.password.clear();
            }
            Action::SignedOut => {
                self.user = None;
                self.transactions = Rc::new(Vec::new());
                self.categories = Rc::new(Vec::new());
                self.loading_transactions = false;
                self.loading_categories = false;
                self.feedback_drafts.clear();
                self.manual_result = None;
                self.upload_results.clear();
                self.account = AccountForm::new(&self.default_currency);
                self.view = View::Auth;
            }

            Action::TransactionsLoading => self.loading_transactions = true,
            Action::TransactionsLoaded(transactions) => {
                self.transactions = Rc::new(transactions);
                self.loading_transactions = false;
            }
            Action::TransactionsFailed => self.loading_transactions = false,
            Action::CategoriesLoading => self.loading_categories = true,
            Action::CategoriesLoaded(categories) => {
                self.categories = Rc::new(categories);
                self.loading_categories = false;
            }
            Action::CategoriesFailed => self.loading_categories = false,
            Action::UsersLoading => self.loading_users = true,
            Action::UsersLoaded(users) => {
                self.users = Rc::new(users);
                self.loading_users = false;
            }
            Action::UsersFailed => self.loading_users = false,

            Action::SetBudget(budget) => self.budget = budget,
            Action::EditRegister(field, value) => self.register.set(field, value),
            Action::EditLogin(field, value) => self.login.set(field, value),
            Action::EditAccount(field, value) => self.account.set(field, value),
            Action::EditManual(field, value) => self.manual.set(field, value),
            Action::EditCategory(field, value) => self.category.set(field, value),
            Action::FeedbackDraft(id, value) => {
                self.feedback_drafts.insert(id, value);
            }
            Action::FeedbackSent(id) => {
                self.feedback_drafts.remove(&id);
            }

            Action::ManualSaved(result) => {
                self.manual = ManualForm::default();
                self.manual_result = Some(result);
            }
            Action::CategoryCreated => self.category = CategoryForm::new(&self.default_category),
            Action::UploadFinished(kind, response) => {
                self.upload_results.insert(kind, response.summary(kind));
            }

            Action::ShowBanner(kind, message) => {
                self.banner_seq += 1;
                self.banner = Some(Banner {
                    kind,
                    message,
                    id: self.banner_seq,
                });
            }
            Action::DismissBanner(id) => {
                if self.banner.as_ref().map(|banner| banner.id) == Some(id) {
                    self.banner = None;
                }
            }
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::Action;

pub mod account_view;
pub mod admin_view;
pub mod auth_view;
pub mod banner;
pub mod categories_view;
pub mod charts;
pub mod dashboard_view;
pub mod forms;
pub mod header;
pub mod nav_bar;
pub mod transactions;
pub mod upload_view;

pub use account_view::AccountView;
pub use admin_view::AdminView;
pub use auth_view::AuthView;
pub use banner::BannerView;
pub use categories_view::CategoriesView;
pub use dashboard_view::DashboardView;
pub use forms::ManualForm;
pub use header::Header;
pub use nav_bar::NavBar;
pub use transactions::TransactionsView;
pub use upload_view::UploadView;

/// Dispatch `make(value)` whenever a text input changes
pub fn on_input<F>(on_action: &Callback<Action>, make: F) -> Callback<InputEvent>
where
    F: Fn(String) -> Action + 'static,
{
    on_action.reform(move |event: InputEvent| {
        make(event.target_unchecked_into::<HtmlInputElement>().value())
    })
}

/// Dispatch `make(value)` whenever a select changes
pub fn on_select<F>(on_action: &Callback<Action>, make: F) -> Callback<Event>
where
    F: Fn(String) -> Action + 'static,
{
    on_action.reform(move |event: Event| {
        make(event.target_unchecked_into::<HtmlSelectElement>().value())
    })
}

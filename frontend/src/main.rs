use std::rc::Rc;

use shared::AnalyticsSnapshot;
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::{
    AccountView, AdminView, AuthView, BannerView, CategoriesView, DashboardView, Header, ManualForm,
    NavBar, TransactionsView, UploadView,
};
use hooks::{use_account, use_banner_timeout, use_entries, use_finance_data};
use services::api::ApiClient;
use services::config::load_config;
use services::date_utils::{month_heading, today};
use state::{Action, AppState, Role, View};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let api_client = use_memo(config.clone(), |config| {
        ApiClient::with_base_url(config.api_base_url.clone())
    });
    let store = {
        let config = config.clone();
        use_reducer(move || AppState::new(&config))
    };

    let loader = use_finance_data(&api_client, &store);
    let account = use_account(&api_client, &store, &loader);
    let entries = use_entries(&api_client, &store, &loader);
    use_banner_timeout(&store, config.banner_duration_ms);

    let now = today();
    let snapshot = use_memo(
        (store.transactions.clone(), store.categories.clone(), store.budget.clone(), now),
        |(transactions, categories, budget, now)| {
            AnalyticsSnapshot::project(transactions, categories, budget, *now)
        },
    );

    let on_action = {
        let dispatcher = store.dispatcher();
        Callback::from(move |action: Action| dispatcher.dispatch(action))
    };
    let currency = store.currency().to_string();
    let signed_in = store.user.is_some();

    let body = if store.show_auth() {
        html! {
            <AuthView
                register={store.register.clone()}
                login={store.login.clone()}
                current_user={store.user.clone()}
                on_action={on_action.clone()}
                on_register={account.register.clone()}
                on_login={account.login.clone()}
            />
        }
    } else {
        match store.view {
            View::Admin if store.role == Role::Admin => html! {
                <AdminView
                    users={store.users.clone()}
                    loading={store.loading_users}
                    on_fetch={account.fetch_users.clone()}
                />
            },
            View::Dashboard if signed_in => html! {
                <DashboardView
                    snapshot={Rc::clone(&snapshot)}
                    budget={store.budget.clone()}
                    currency={currency.clone()}
                    month={month_heading(now)}
                    on_action={on_action.clone()}
                />
            },
            View::Categories if signed_in => html! {
                <CategoriesView
                    categories={store.categories.clone()}
                    loading={store.loading_categories}
                    form={store.category.clone()}
                    library={config.category_library.clone()}
                    on_action={on_action.clone()}
                    on_submit={entries.create_category.clone()}
                />
            },
            View::Receipt | View::Statement if signed_in => {
                store
                    .view
                    .upload_kind()
                    .map(|kind| html! {
                        <UploadView
                            {kind}
                            result={store.upload_result(kind).map(str::to_string)}
                            on_upload={entries.upload.clone()}
                        />
                    })
                    .unwrap_or_default()
            }
            View::Manual if signed_in => html! {
                <ManualForm
                    form={store.manual.clone()}
                    result={store.manual_result.clone()}
                    on_action={on_action.clone()}
                    on_submit={entries.submit_manual.clone()}
                />
            },
            View::Transactions if signed_in => html! {
                <TransactionsView
                    transactions={store.transactions.clone()}
                    categories={store.categories.clone()}
                    loading={store.loading_transactions}
                    drafts={store.feedback_drafts.clone()}
                    currency={currency.clone()}
                    on_action={on_action.clone()}
                    on_feedback={entries.send_feedback.clone()}
                    on_refresh={entries.refresh_transactions.clone()}
                />
            },
            View::Account if signed_in => html! {
                <AccountView
                    form={store.account.clone()}
                    on_action={on_action.clone()}
                    on_update={account.update.clone()}
                    on_delete={account.delete.clone()}
                />
            },
            _ => html! {},
        }
    };

    html! {
        <div class="app">
            <Header stats={snapshot.stats} api_base={config.api_base_url.clone()} />
            {if store.show_nav() {
                html! {
                    <NavBar
                        items={store.nav_items()}
                        view={store.view}
                        role={store.role}
                        on_action={on_action.clone()}
                    />
                }
            } else { html! {} }}
            <BannerView banner={store.banner.clone()} on_action={on_action.clone()} />
            {body}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

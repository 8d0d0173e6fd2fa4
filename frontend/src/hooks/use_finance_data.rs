use std::cell::RefCell;
use std::rc::Rc;

use shared::requests::{RequestTicket, RequestTracker, Resource};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_banner::{show_banner, show_error, Dispatcher};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{Action, AppState, BannerKind};

const COMPONENT: &str = "finance_data";

/// Starts fetches for the remote collections. Every fetch takes a ticket
/// from the shared tracker and its response is dropped unless that ticket
/// is still the newest one for the resource.
#[derive(Clone)]
pub struct DataLoader {
    api_client: ApiClient,
    tracker: Rc<RefCell<RequestTracker>>,
    dispatcher: Dispatcher,
}

impl DataLoader {
    pub fn transactions(&self, user_id: i64) {
        let ticket = self.tracker.borrow_mut().begin(Resource::Transactions);
        let loader = self.clone();
        self.dispatcher.dispatch(Action::TransactionsLoading);

        spawn_local(async move {
            let result = loader.api_client.get_transactions(user_id).await;
            if !loader.still_current(&ticket) {
                return;
            }
            match result {
                Ok(transactions) => {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Loaded {} transactions for user {}", transactions.len(), user_id),
                    );
                    loader.dispatcher.dispatch(Action::TransactionsLoaded(transactions));
                }
                Err(e) => {
                    loader.dispatcher.dispatch(Action::TransactionsFailed);
                    show_error(&loader.dispatcher, &e, "Could not load transactions");
                }
            }
        });
    }

    pub fn categories(&self, user_id: i64) {
        let ticket = self.tracker.borrow_mut().begin(Resource::Categories);
        let loader = self.clone();
        self.dispatcher.dispatch(Action::CategoriesLoading);

        spawn_local(async move {
            let result = loader.api_client.get_categories(user_id).await;
            if !loader.still_current(&ticket) {
                return;
            }
            match result {
                Ok(categories) => loader.dispatcher.dispatch(Action::CategoriesLoaded(categories)),
                Err(e) => {
                    loader.dispatcher.dispatch(Action::CategoriesFailed);
                    show_error(&loader.dispatcher, &e, "Could not load categories");
                }
            }
        });
    }

    /// Admin listing of every user
    pub fn users(&self) {
        let ticket = self.tracker.borrow_mut().begin(Resource::Users);
        let loader = self.clone();
        self.dispatcher.dispatch(Action::UsersLoading);

        spawn_local(async move {
            let result = loader.api_client.get_users().await;
            if !loader.still_current(&ticket) {
                return;
            }
            match result {
                Ok(users) => {
                    loader.dispatcher.dispatch(Action::UsersLoaded(users));
                    show_banner(&loader.dispatcher, BannerKind::Success, "Fetched users (admin view)");
                }
                Err(e) => {
                    loader.dispatcher.dispatch(Action::UsersFailed);
                    show_error(
                        &loader.dispatcher,
                        &e,
                        "Could not fetch users (backend must allow /api/users)",
                    );
                }
            }
        });
    }

    /// Refetch both per-user collections
    pub fn user_data(&self, user_id: i64) {
        self.transactions(user_id);
        self.categories(user_id);
    }

    /// Drop everything in flight; used when the signed-in user goes away
    pub fn cancel_all(&self) {
        self.tracker.borrow_mut().invalidate_all();
    }

    fn still_current(&self, ticket: &RequestTicket) -> bool {
        let current = self.tracker.borrow().is_current(ticket);
        if !current {
            Logger::debug_with_component(
                COMPONENT,
                &format!("Dropping stale {:?} response", ticket.resource()),
            );
        }
        current
    }
}

/// Owns the request tracker and reloads transactions and categories
/// whenever the signed-in user changes.
#[hook]
pub fn use_finance_data(api_client: &ApiClient, store: &UseReducerHandle<AppState>) -> DataLoader {
    let tracker = use_mut_ref(RequestTracker::new);
    let loader = DataLoader {
        api_client: api_client.clone(),
        tracker,
        dispatcher: store.dispatcher(),
    };

    {
        let loader = loader.clone();
        use_effect_with(store.user_id(), move |user_id| {
            match *user_id {
                Some(user_id) => loader.user_data(user_id),
                None => loader.cancel_all(),
            }
            || ()
        });
    }

    loader
}

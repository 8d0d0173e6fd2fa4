use shared::forms::{parse_fallback_user_id, FormError};
use shared::{find_user_by_email, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_banner::{show_banner, show_error, Dispatcher};
use super::use_finance_data::DataLoader;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{Action, AppState, BannerKind};

const COMPONENT: &str = "account";

#[derive(Clone, PartialEq)]
pub struct UseAccountActions {
    pub register: Callback<SubmitEvent>,
    pub login: Callback<SubmitEvent>,
    pub update: Callback<SubmitEvent>,
    pub delete: Callback<MouseEvent>,
    pub fetch_users: Callback<MouseEvent>,
}

fn signed_in(dispatcher: &Dispatcher, user: User, password: String, message: String) {
    Logger::info_with_component(COMPONENT, &format!("Signed in as user {}", user.id));
    dispatcher.dispatch(Action::SignedIn { user, password });
    show_banner(dispatcher, BannerKind::Success, message);
}

#[hook]
pub fn use_account(
    api_client: &ApiClient,
    store: &UseReducerHandle<AppState>,
    loader: &DataLoader,
) -> UseAccountActions {
    let register = {
        let api_client = api_client.clone();
        let store = store.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatcher = store.dispatcher();
            let request = match store.register.to_request() {
                Ok(request) => request,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.create_user(&request).await {
                    Ok(user) => {
                        let message = format!("User created. ID: {}", user.id);
                        signed_in(&dispatcher, user, request.password, message);
                    }
                    Err(e) => show_error(&dispatcher, &e, "Registration failed (backend must be running)"),
                }
            });
        })
    };

    // Lookup only: the entered password is never sent or compared.
    let login = {
        let api_client = api_client.clone();
        let store = store.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatcher = store.dispatcher();
            let identity = match store.login.identity() {
                Ok(identity) => identity,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            Logger::warn_with_component(
                COMPONENT,
                "Login only looks the user up; no password is verified",
            );
            let api_client = api_client.clone();

            spawn_local(async move {
                if let Some(email) = identity.email {
                    match api_client.get_users().await {
                        Ok(users) => {
                            match find_user_by_email(&users, &email) {
                                Some(user) => {
                                    let message = format!("Logged in as {}", user.email);
                                    signed_in(&dispatcher, user.clone(), String::new(), message);
                                }
                                None => show_banner(
                                    &dispatcher,
                                    BannerKind::Error,
                                    "No user found for that email",
                                ),
                            }
                            return;
                        }
                        Err(e) => {
                            show_error(
                                &dispatcher,
                                &e,
                                "Login failed (need backend running and /api/users accessible)",
                            );
                            if identity.fallback_id.is_none() {
                                return;
                            }
                        }
                    }
                }

                if let Some(fallback) = identity.fallback_id {
                    let user_id = match parse_fallback_user_id(&fallback) {
                        Ok(user_id) => user_id,
                        Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
                    };
                    match api_client.get_user(user_id).await {
                        Ok(user) => {
                            let message = format!("Loaded {}", user.email);
                            signed_in(&dispatcher, user, String::new(), message);
                        }
                        Err(e) => show_error(&dispatcher, &e, "Could not load user by ID"),
                    }
                }
            });
        })
    };

    let update = {
        let api_client = api_client.clone();
        let store = store.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatcher = store.dispatcher();
            let Some(user_id) = store.user_id() else {
                return show_banner(&dispatcher, BannerKind::Error, FormError::AccountRequired.to_string());
            };
            let request = match store.account.to_request() {
                Ok(request) => request,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.update_user(user_id, &request).await {
                    Ok(user) => {
                        dispatcher.dispatch(Action::UserUpdated(user));
                        show_banner(&dispatcher, BannerKind::Success, "Account updated");
                    }
                    Err(e) => show_error(&dispatcher, &e, "Update failed"),
                }
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let store = store.clone();

        Callback::from(move |_: MouseEvent| {
            let dispatcher = store.dispatcher();
            let Some(user_id) = store.user_id() else {
                return show_banner(&dispatcher, BannerKind::Error, FormError::AccountRequired.to_string());
            };
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.delete_user(user_id).await {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, &format!("Deleted user {}", user_id));
                        dispatcher.dispatch(Action::SignedOut);
                        show_banner(&dispatcher, BannerKind::Success, "Account deleted");
                    }
                    Err(e) => show_error(&dispatcher, &e, "Delete failed"),
                }
            });
        })
    };

    let fetch_users = {
        let loader = loader.clone();
        Callback::from(move |_: MouseEvent| loader.users())
    };

    UseAccountActions {
        register,
        login,
        update,
        delete,
        fetch_users,
    }
}

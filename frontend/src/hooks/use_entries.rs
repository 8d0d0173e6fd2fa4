use shared::forms::{feedback_request, FormError};
use shared::UploadKind;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::use_banner::{show_banner, show_error, Dispatcher};
use super::use_finance_data::DataLoader;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::{Action, AppState, BannerKind};

const COMPONENT: &str = "entries";

/// Writes that add to or correct the signed-in user's data
#[derive(Clone, PartialEq)]
pub struct UseEntriesActions {
    pub submit_manual: Callback<SubmitEvent>,
    pub upload: Callback<(UploadKind, Option<File>)>,
    pub send_feedback: Callback<i64>,
    pub create_category: Callback<SubmitEvent>,
    pub refresh_transactions: Callback<MouseEvent>,
}

fn require_user(store: &UseReducerHandle<AppState>, dispatcher: &Dispatcher) -> Option<i64> {
    let user_id = store.user_id();
    if user_id.is_none() {
        show_banner(dispatcher, BannerKind::Error, FormError::UserRequired.to_string());
    }
    user_id
}

#[hook]
pub fn use_entries(
    api_client: &ApiClient,
    store: &UseReducerHandle<AppState>,
    loader: &DataLoader,
) -> UseEntriesActions {
    let submit_manual = {
        let api_client = api_client.clone();
        let store = store.clone();
        let loader = loader.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatcher = store.dispatcher();
            let Some(user_id) = require_user(&store, &dispatcher) else {
                return;
            };
            let request = match store.manual.to_request(user_id) {
                Ok(request) => request,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            let api_client = api_client.clone();
            let loader = loader.clone();

            spawn_local(async move {
                match api_client.add_manual_transaction(&request).await {
                    Ok(()) => {
                        show_banner(&dispatcher, BannerKind::Success, "Manual transaction saved");
                        dispatcher.dispatch(Action::ManualSaved(
                            "Saved and ready in transactions list".to_string(),
                        ));
                        loader.transactions(user_id);
                    }
                    Err(e) => show_error(&dispatcher, &e, "Manual transaction failed"),
                }
            });
        })
    };

    let upload = {
        let api_client = api_client.clone();
        let store = store.clone();
        let loader = loader.clone();

        Callback::from(move |(kind, file): (UploadKind, Option<File>)| {
            let dispatcher = store.dispatcher();
            let Some(user_id) = require_user(&store, &dispatcher) else {
                return;
            };
            let Some(file) = file else {
                return show_banner(&dispatcher, BannerKind::Error, FormError::NoFileChosen.to_string());
            };
            let api_client = api_client.clone();
            let loader = loader.clone();

            spawn_local(async move {
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Uploading {} '{}' ({} bytes)", kind, file.name(), file.size()),
                );
                match api_client.upload_file(kind, user_id, &file).await {
                    Ok(response) => {
                        let banner_kind = if response.is_failure() {
                            BannerKind::Error
                        } else {
                            BannerKind::Success
                        };
                        show_banner(&dispatcher, banner_kind, response.summary(kind));
                        dispatcher.dispatch(Action::UploadFinished(kind, response));
                        loader.transactions(user_id);
                    }
                    Err(e) => show_error(&dispatcher, &e, "Upload failed"),
                }
            });
        })
    };

    let send_feedback = {
        let api_client = api_client.clone();
        let store = store.clone();
        let loader = loader.clone();

        Callback::from(move |transaction_id: i64| {
            let dispatcher = store.dispatcher();
            let Some(user_id) = require_user(&store, &dispatcher) else {
                return;
            };
            let draft = store.feedback_draft(transaction_id);
            let request = match feedback_request(transaction_id, user_id, Some(draft)) {
                Ok(request) => request,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            let api_client = api_client.clone();
            let loader = loader.clone();

            spawn_local(async move {
                match api_client.submit_feedback(&request).await {
                    Ok(()) => {
                        show_banner(&dispatcher, BannerKind::Success, "Feedback submitted");
                        dispatcher.dispatch(Action::FeedbackSent(transaction_id));
                        loader.transactions(user_id);
                    }
                    Err(e) => show_error(&dispatcher, &e, "Could not send feedback"),
                }
            });
        })
    };

    let create_category = {
        let api_client = api_client.clone();
        let store = store.clone();
        let loader = loader.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let dispatcher = store.dispatcher();
            let Some(user_id) = require_user(&store, &dispatcher) else {
                return;
            };
            let request = match store.category.to_request(user_id) {
                Ok(request) => request,
                Err(e) => return show_banner(&dispatcher, BannerKind::Error, e.to_string()),
            };
            let api_client = api_client.clone();
            let loader = loader.clone();

            spawn_local(async move {
                match api_client.create_category(&request).await {
                    Ok(()) => {
                        show_banner(&dispatcher, BannerKind::Success, "Category created");
                        dispatcher.dispatch(Action::CategoryCreated);
                        loader.categories(user_id);
                    }
                    Err(e) => show_error(&dispatcher, &e, "Category creation failed"),
                }
            });
        })
    };

    let refresh_transactions = {
        let store = store.clone();
        let loader = loader.clone();

        Callback::from(move |_: MouseEvent| {
            if let Some(user_id) = store.user_id() {
                loader.transactions(user_id);
            }
        })
    };

    UseEntriesActions {
        submit_manual,
        upload,
        send_feedback,
        create_category,
        refresh_transactions,
    }
}

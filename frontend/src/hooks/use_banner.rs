use gloo::timers::future::TimeoutFuture;
use shared::ClientError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::state::{Action, AppState, BannerKind};

pub type Dispatcher = UseReducerDispatcher<AppState>;

/// Show a banner and bring it into view
pub fn show_banner(dispatcher: &Dispatcher, kind: BannerKind, message: impl Into<String>) {
    dispatcher.dispatch(Action::ShowBanner(kind, message.into()));
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Report a failed action. `fallback` names the action; the server's
/// message is appended when it sent one.
pub fn show_error(dispatcher: &Dispatcher, error: &ClientError, fallback: &str) {
    Logger::warn_with_component("banner", &format!("{}: {}", fallback, error));
    show_banner(dispatcher, BannerKind::Error, error.banner_message(fallback));
}

/// Clear success and info banners after `duration_ms`. A newer banner
/// shown in the meantime is left alone.
#[hook]
pub fn use_banner_timeout(store: &UseReducerHandle<AppState>, duration_ms: u32) {
    let dispatcher = store.dispatcher();
    use_effect_with(store.banner.clone(), move |banner| {
        if let Some(banner) = banner.as_ref().filter(|banner| banner.kind.auto_dismiss()) {
            let id = banner.id;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                dispatcher.dispatch(Action::DismissBanner(id));
            });
        }
        || ()
    });
}

use yew::prelude::*;

use crate::state::{Action, Banner};

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub banner: Option<Banner>,
    pub on_action: Callback<Action>,
}

/// Transient status line; clicking it dismisses it
#[function_component(BannerView)]
pub fn banner_view(props: &BannerProps) -> Html {
    let Some(banner) = props.banner.as_ref() else {
        return html! {};
    };
    let id = banner.id;
    let onclick = props.on_action.reform(move |_: MouseEvent| Action::DismissBanner(id));

    html! {
        <div class={classes!("banner", banner.kind.css_class())} {onclick} role="status">
            {&banner.message}
        </div>
    }
}

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{Action, Role, View};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub items: Vec<View>,
    pub view: View,
    pub role: Role,
    pub on_action: Callback<Action>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle_role = props.on_action.reform(|event: Event| {
        let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
        Action::SetRole(if checked { Role::Admin } else { Role::User })
    });

    html! {
        <nav class="top-nav">
            {for props.items.iter().map(|item| {
                let item = *item;
                let class = classes!("nav-btn", (item == props.view).then_some("active"));
                let onclick = props.on_action.reform(move |_: MouseEvent| Action::SetView(item));
                html! {
                    <button {class} {onclick}>{item.label()}</button>
                }
            })}
            <div class="nav-spacer"></div>
            <label class="pill toggle">
                <input
                    type="checkbox"
                    checked={props.role == Role::Admin}
                    onchange={on_toggle_role}
                />
                {"Admin mode"}
            </label>
        </nav>
    }
}

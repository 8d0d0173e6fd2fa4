use shared::forms::{LoginField, LoginForm as LoginDraft};
use shared::User;
use yew::prelude::*;

use crate::components::on_input;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub form: LoginDraft,
    pub current_user: Option<User>,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Email lookup with a developer fallback by user id. The password field
/// stays in the browser.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let edit = |field: LoginField| on_input(&props.on_action, move |value| Action::EditLogin(field, value));

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{"Login"}</h2>
                <p>{"Fetch user by email"}</p>
            </div>
            <form class="form" onsubmit={props.on_submit.clone()}>
                <div class="field-row">
                    <label for="login-email">{"Email"}</label>
                    <input id="login-email" type="email" placeholder="you@example.com"
                        value={props.form.email.clone()}
                        oninput={edit(LoginField::Email)} />
                </div>
                <div class="field-row">
                    <label for="login-password">{"Password"}</label>
                    <input id="login-password" type="password" placeholder="Used only client-side"
                        value={props.form.password.clone()}
                        oninput={edit(LoginField::Password)} />
                </div>
                <details class="muted">
                    <summary>{"Developer fallback: login by user ID"}</summary>
                    <input placeholder="123" inputmode="numeric"
                        value={props.form.user_id_fallback.clone()}
                        oninput={edit(LoginField::UserIdFallback)} />
                    <p class="muted">{"Uses GET /api/users/:id"}</p>
                </details>
                <button type="submit" class="secondary">{"Login"}</button>
            </form>
            {if let Some(user) = props.current_user.as_ref() {
                html! {
                    <div class="summary">
                        <p class="eyebrow">{"Current user"}</p>
                        <strong>{user.full_name()}</strong>
                        <p>{&user.email}</p>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}

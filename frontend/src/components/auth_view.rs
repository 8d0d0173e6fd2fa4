use shared::forms::{LoginForm as LoginDraft, RegisterForm as RegisterDraft};
use shared::User;
use yew::prelude::*;

use super::forms::{LoginForm, RegisterForm};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct AuthViewProps {
    pub register: RegisterDraft,
    pub login: LoginDraft,
    pub current_user: Option<User>,
    pub on_action: Callback<Action>,
    pub on_register: Callback<SubmitEvent>,
    pub on_login: Callback<SubmitEvent>,
}

#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    html! {
        <div class="grid two">
            <RegisterForm
                form={props.register.clone()}
                on_action={props.on_action.clone()}
                on_submit={props.on_register.clone()}
            />
            <LoginForm
                form={props.login.clone()}
                current_user={props.current_user.clone()}
                on_action={props.on_action.clone()}
                on_submit={props.on_login.clone()}
            />
        </div>
    }
}

use shared::forms::{RegisterField, RegisterForm as RegisterDraft};
use yew::prelude::*;

use crate::components::on_input;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub form: RegisterDraft,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let edit = |field: RegisterField| on_input(&props.on_action, move |value| Action::EditRegister(field, value));

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{"Create Account"}</h2>
                <p>{"POST /api/users"}</p>
            </div>
            <form class="form" onsubmit={props.on_submit.clone()}>
                <div class="field-row">
                    <label for="register-first">{"First name"}</label>
                    <input id="register-first" placeholder="Anika" required=true
                        value={props.form.first_name.clone()}
                        oninput={edit(RegisterField::FirstName)} />
                </div>
                <div class="field-row">
                    <label for="register-last">{"Last name"}</label>
                    <input id="register-last" placeholder="Rao" required=true
                        value={props.form.last_name.clone()}
                        oninput={edit(RegisterField::LastName)} />
                </div>
                <div class="field-row">
                    <label for="register-email">{"Email"}</label>
                    <input id="register-email" type="email" placeholder="you@example.com" required=true
                        value={props.form.email.clone()}
                        oninput={edit(RegisterField::Email)} />
                </div>
                <div class="field-row">
                    <label for="register-password">{"Password"}</label>
                    <input id="register-password" type="password" placeholder="Min 8 chars" required=true
                        value={props.form.password.clone()}
                        oninput={edit(RegisterField::Password)} />
                </div>
                <button type="submit" class="primary">{"Sign up"}</button>
            </form>
        </section>
    }
}

use shared::forms::{AccountField, AccountForm as AccountDraft, SUPPORTED_CURRENCIES};
use yew::prelude::*;

use crate::components::{on_input, on_select};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct AccountFormProps {
    pub form: AccountDraft,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(AccountForm)]
pub fn account_form(props: &AccountFormProps) -> Html {
    let edit = |field: AccountField| on_input(&props.on_action, move |value| Action::EditAccount(field, value));
    let on_currency = on_select(&props.on_action, |value| Action::EditAccount(AccountField::Currency, value));

    html! {
        <form class="form" onsubmit={props.on_submit.clone()}>
            <div class="field-row">
                <label for="account-first">{"First name"}</label>
                <input id="account-first" required=true
                    value={props.form.first_name.clone()}
                    oninput={edit(AccountField::FirstName)} />
            </div>
            <div class="field-row">
                <label for="account-last">{"Last name"}</label>
                <input id="account-last" required=true
                    value={props.form.last_name.clone()}
                    oninput={edit(AccountField::LastName)} />
            </div>
            <div class="field-row">
                <label for="account-email">{"Email"}</label>
                <input id="account-email" type="email" required=true
                    value={props.form.email.clone()}
                    oninput={edit(AccountField::Email)} />
            </div>
            <div class="field-row">
                <label for="account-password">{"Password (leave blank to keep)"}</label>
                <input id="account-password" type="password"
                    value={props.form.password.clone()}
                    oninput={edit(AccountField::Password)} />
            </div>
            <div class="field-row">
                <label for="account-currency">{"Currency"}</label>
                <select id="account-currency" onchange={on_currency}>
                    {for SUPPORTED_CURRENCIES.iter().map(|code| html! {
                        <option value={*code} selected={props.form.currency_preference == *code}>{*code}</option>
                    })}
                </select>
            </div>
            <button type="submit" class="primary">{"Update account"}</button>
        </form>
    }
}

use shared::forms::AccountForm as AccountDraft;
use yew::prelude::*;

use super::forms::AccountForm;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct AccountViewProps {
    pub form: AccountDraft,
    pub on_action: Callback<Action>,
    pub on_update: Callback<SubmitEvent>,
    pub on_delete: Callback<MouseEvent>,
}

#[function_component(AccountView)]
pub fn account_view(props: &AccountViewProps) -> Html {
    html! {
        <section class="card">
            <div class="card-header">
                <div>
                    <h2>{"My Account"}</h2>
                    <p>{"Update or delete"}</p>
                </div>
                <button class="secondary" onclick={props.on_delete.clone()}>{"Delete account"}</button>
            </div>
            <AccountForm
                form={props.form.clone()}
                on_action={props.on_action.clone()}
                on_submit={props.on_update.clone()}
            />
        </section>
    }
}

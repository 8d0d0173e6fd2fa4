use shared::forms::{ManualField, ManualForm as ManualDraft};
use yew::prelude::*;

use crate::components::on_input;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct ManualFormProps {
    pub form: ManualDraft,
    pub result: Option<String>,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(ManualForm)]
pub fn manual_form(props: &ManualFormProps) -> Html {
    let edit = |field: ManualField| on_input(&props.on_action, move |value| Action::EditManual(field, value));

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{"Manual Transaction"}</h2>
                <p>{"POST /api/transactions/manual"}</p>
            </div>
            <form class="form" onsubmit={props.on_submit.clone()}>
                <div class="field-row">
                    <label for="manual-amount">{"Amount"}</label>
                    <input id="manual-amount" type="number" min="0" step="0.01" placeholder="1200"
                        value={props.form.amount.clone()}
                        oninput={edit(ManualField::Amount)} />
                </div>
                <div class="field-row">
                    <label for="manual-note">{"Description"}</label>
                    <input id="manual-note" placeholder="Team lunch"
                        value={props.form.note.clone()}
                        oninput={edit(ManualField::Note)} />
                </div>
                <div class="field-row">
                    <label for="manual-date">{"Date"}</label>
                    <input id="manual-date" type="date"
                        value={props.form.date.clone()}
                        oninput={edit(ManualField::Date)} />
                </div>
                <button type="submit" class="primary">{"Save transaction"}</button>
                {if let Some(result) = props.result.as_ref() {
                    html! { <p class="muted">{result}</p> }
                } else { html! {} }}
            </form>
        </section>
    }
}

use std::collections::HashMap;
use std::rc::Rc;

use shared::analytics::{resolve_category_name, CategoryLookup};
use shared::{Category, Transaction};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::date_utils::display_date;
use crate::services::format::{format_confidence, format_currency};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Rc<Vec<Transaction>>,
    pub categories: Rc<Vec<Category>>,
    pub lookup: Rc<CategoryLookup>,
    /// Corrected category chosen so far, per transaction id
    pub drafts: HashMap<i64, String>,
    pub currency: String,
    pub on_action: Callback<Action>,
    pub on_feedback: Callback<i64>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Category"}</th>
                        <th>{"Type"}</th>
                        <th>{"Confidence"}</th>
                        <th>{"Feedback"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().enumerate().map(|(index, tx)| {
                        let category = resolve_category_name(tx.category_id, &props.lookup).to_string();
                        let amount_class = if tx.direction.is_debit() { "debit" } else { "credit" };
                        let description = tx
                            .merchant_name
                            .as_deref()
                            .or(tx.description.as_deref())
                            .unwrap_or("—");
                        let key = tx.id.map(|id| id.to_string()).unwrap_or_else(|| format!("row-{}", index));

                        html! {
                            <tr key={key}>
                                <td>{display_date(&tx.date)}</td>
                                <td>{description.to_string()}</td>
                                <td class={amount_class}>{format_currency(tx.amount, &props.currency)}</td>
                                <td>{category}</td>
                                <td>{tx.reported_type.clone().unwrap_or_else(|| "—".to_string())}</td>
                                <td>{format_confidence(tx.confidence)}</td>
                                <td>{feedback_cell(props, tx.id)}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

/// Category select plus send button. Rows without an id cannot be
/// corrected, so their controls are disabled.
fn feedback_cell(props: &TransactionTableProps, id: Option<i64>) -> Html {
    let Some(id) = id else {
        return html! {
            <div class="feedback-row">
                <select disabled=true><option>{"Select category..."}</option></select>
                <button class="secondary" disabled=true>{"Send"}</button>
            </div>
        };
    };

    let draft = props.drafts.get(&id).map(String::as_str).unwrap_or_default();
    let onchange = props.on_action.reform(move |event: Event| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        Action::FeedbackDraft(id, value)
    });
    let onclick = props.on_feedback.reform(move |_: MouseEvent| id);

    html! {
        <div class="feedback-row">
            <select {onchange}>
                <option value="" selected={draft.is_empty()}>{"Select category..."}</option>
                {for props.categories.iter().map(|category| html! {
                    <option
                        key={category.id}
                        value={category.name.clone()}
                        selected={category.name.as_str() == draft}
                    >
                        {&category.name}
                    </option>
                })}
            </select>
            <button class="secondary" {onclick}>{"Send"}</button>
        </div>
    }
}

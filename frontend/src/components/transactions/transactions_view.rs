use std::collections::HashMap;
use std::rc::Rc;

use shared::analytics::build_category_lookup;
use shared::{Category, Transaction};
use yew::prelude::*;

use super::transaction_table::TransactionTable;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct TransactionsViewProps {
    pub transactions: Rc<Vec<Transaction>>,
    pub categories: Rc<Vec<Category>>,
    pub loading: bool,
    pub drafts: HashMap<i64, String>,
    pub currency: String,
    pub on_action: Callback<Action>,
    pub on_feedback: Callback<i64>,
    pub on_refresh: Callback<MouseEvent>,
}

#[function_component(TransactionsView)]
pub fn transactions_view(props: &TransactionsViewProps) -> Html {
    let lookup = use_memo(props.categories.clone(), |categories| build_category_lookup(categories));

    html! {
        <section class="card wide">
            <div class="card-header">
                <div>
                    <h2>{"Transactions"}</h2>
                    <p>{"GET /api/transactions/user/:userId & feedback"}</p>
                </div>
                <button class="ghost" onclick={props.on_refresh.clone()}>{"Refresh"}</button>
            </div>
            {if props.loading {
                html! { <p class="muted">{"Loading transactions…"}</p> }
            } else if props.transactions.is_empty() {
                html! { <p class="muted">{"No transactions yet. Upload a file or add one manually."}</p> }
            } else {
                html! {
                    <TransactionTable
                        transactions={props.transactions.clone()}
                        categories={props.categories.clone()}
                        lookup={lookup}
                        drafts={props.drafts.clone()}
                        currency={props.currency.clone()}
                        on_action={props.on_action.clone()}
                        on_feedback={props.on_feedback.clone()}
                    />
                }
            }}
        </section>
    }
}

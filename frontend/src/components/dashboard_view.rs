use std::rc::Rc;

use shared::AnalyticsSnapshot;
use yew::prelude::*;

use super::charts::SpendingCharts;
use super::on_input;
use crate::services::format::format_currency;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub snapshot: Rc<AnalyticsSnapshot>,
    pub budget: String,
    pub currency: String,
    /// e.g. "March 2024"
    pub month: String,
    pub on_action: Callback<Action>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let snapshot = &props.snapshot;
    let on_budget = on_input(&props.on_action, Action::SetBudget);
    let over_budget = snapshot.is_over_budget();

    html! {
        <section class="card wide">
            <div class="card-header">
                <h2>{"Dashboard"}</h2>
                <p>{"Spending pulse and budget status"}</p>
            </div>
            <div class="dashboard">
                <div class="metric">
                    <span class="label">{format!("Spend in {}", props.month)}</span>
                    <strong>{format_currency(snapshot.monthly_spend, &props.currency)}</strong>
                </div>
                <div class="metric">
                    <span class="label">{"Monthly budget"}</span>
                    <input
                        type="number"
                        min="0"
                        class="inline-input"
                        value={props.budget.clone()}
                        oninput={on_budget}
                    />
                </div>
                <div class={classes!("metric", if over_budget { "negative" } else { "positive" })}>
                    <span class="label">{"Remaining budget"}</span>
                    <strong>{format_currency(snapshot.remaining_budget.abs(), &props.currency)}</strong>
                    <small>{if over_budget { "Over budget" } else { "Under budget" }}</small>
                </div>
            </div>
            <SpendingCharts snapshot={snapshot.clone()} currency={props.currency.clone()} />
        </section>
    }
}

use shared::CategorizationStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub stats: CategorizationStats,
    /// Shown so it is obvious which backend the client talks to
    pub api_base: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let api_base = if props.api_base.is_empty() {
        "same origin".to_string()
    } else {
        props.api_base.clone()
    };

    html! {
        <header class="hero">
            <div>
                <p class="eyebrow">{"Financial Nudger"}</p>
                <h1>{"Focused flows for users and admins"}</h1>
                <p class="subhead">
                    {"API base "}<span class="pill">{api_base}</span>
                </p>
            </div>
            <div class="hero-stats">
                <div class="stat">
                    <span class="label">{"Transactions"}</span>
                    <strong>{props.stats.total}</strong>
                </div>
                <div class="stat">
                    <span class="label">{"AI categorized"}</span>
                    <strong>{props.stats.ai_categorized}</strong>
                </div>
                <div class="stat">
                    <span class="label">{"User fixed"}</span>
                    <strong>{props.stats.user_categorized}</strong>
                </div>
            </div>
        </header>
    }
}

use std::rc::Rc;

use shared::forms::CategoryForm as CategoryDraft;
use shared::Category;
use yew::prelude::*;

use super::forms::CategoryForm;
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct CategoriesViewProps {
    pub categories: Rc<Vec<Category>>,
    pub loading: bool,
    pub form: CategoryDraft,
    pub library: Vec<String>,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(CategoriesView)]
pub fn categories_view(props: &CategoriesViewProps) -> Html {
    html! {
        <section class="card">
            <div class="card-header">
                <h2>{"Categories"}</h2>
                <p>{"GET /api/categories/user/:userId & POST /api/categories"}</p>
            </div>
            <CategoryForm
                form={props.form.clone()}
                library={props.library.clone()}
                on_action={props.on_action.clone()}
                on_submit={props.on_submit.clone()}
            />
            <div class="pill-row">
                {if props.loading {
                    html! { <span class="pill muted">{"Loading categories…"}</span> }
                } else if props.categories.is_empty() {
                    html! { <span class="pill muted">{"No categories yet"}</span> }
                } else { html! {} }}
                {for props.categories.iter().map(|category| html! {
                    <span key={category.id} class={classes!("pill", category.user_defined.then_some("user-defined"))}>
                        {format!("{} · {}", category.name, category.category_type.as_str())}
                    </span>
                })}
            </div>
        </section>
    }
}

use shared::forms::{CategoryField, CategoryForm as CategoryDraft, CUSTOM_CATEGORY};
use shared::CategoryType;
use yew::prelude::*;

use crate::components::{on_input, on_select};
use crate::state::Action;

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub form: CategoryDraft,
    /// Names offered in the select; "Custom" is always appended
    pub library: Vec<String>,
    pub on_action: Callback<Action>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let on_name = on_select(&props.on_action, |value| Action::EditCategory(CategoryField::Name, value));
    let on_type = on_select(&props.on_action, |value| Action::EditCategory(CategoryField::Type, value));
    let on_custom = on_input(&props.on_action, |value| Action::EditCategory(CategoryField::CustomName, value));

    let names = props
        .library
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(CUSTOM_CATEGORY));

    html! {
        <form class="form inline" onsubmit={props.on_submit.clone()}>
            <select onchange={on_name}>
                {for names.map(|name| html! {
                    <option value={name.to_string()} selected={props.form.category_name == name}>{name.to_string()}</option>
                })}
            </select>
            {if props.form.is_custom() {
                html! {
                    <input placeholder="Custom name" required=true
                        value={props.form.custom_name.clone()}
                        oninput={on_custom} />
                }
            } else { html! {} }}
            <select onchange={on_type}>
                {for CategoryType::ALL.iter().map(|kind| html! {
                    <option value={kind.as_str()} selected={props.form.category_type == *kind}>{kind.as_str()}</option>
                })}
            </select>
            <button type="submit" class="secondary">{"Create"}</button>
        </form>
    }
}

use shared::UploadKind;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadViewProps {
    pub kind: UploadKind,
    pub result: Option<String>,
    pub on_upload: Callback<(UploadKind, Option<File>)>,
}

/// File picker for receipts and statements. The chosen file lives only in
/// this component until it is handed to `on_upload`.
#[function_component(UploadView)]
pub fn upload_view(props: &UploadViewProps) -> Html {
    let file = use_state(|| Option::<File>::None);

    {
        // Switching between receipt and statement starts with no file
        let file = file.clone();
        use_effect_with(props.kind, move |_| {
            file.set(None);
            || ()
        });
    }

    let on_change = {
        let file = file.clone();
        Callback::from(move |event: Event| {
            let input = event.target_unchecked_into::<HtmlInputElement>();
            file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_click = {
        let file = file.clone();
        let kind = props.kind;
        let on_upload = props.on_upload.clone();
        Callback::from(move |_: MouseEvent| on_upload.emit((kind, (*file).clone())))
    };

    html! {
        <section class="card">
            <div class="card-header">
                <h2>{props.kind.title()}</h2>
                <p>{format!("POST {}", props.kind.path())}</p>
            </div>
            <div class="form">
                <input type="file" onchange={on_change} />
                {if let Some(file) = file.as_ref() {
                    html! { <p class="muted">{format!("Selected: {}", file.name())}</p> }
                } else { html! {} }}
                <button class="primary" onclick={on_click}>{props.kind.title()}</button>
                {if let Some(result) = props.result.as_ref() {
                    html! { <p class="muted">{result}</p> }
                } else { html! {} }}
            </div>
        </section>
    }
}

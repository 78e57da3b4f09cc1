//! Labelled input with inline validation feedback.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<&'static str>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(FormField)]
pub(crate) fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let error_id = format!("{}-error", props.name);
    html! {
        <label class={classes!("form-field", props.error.map(|_| "invalid"))}>
            <span>{props.label.clone()}</span>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={error_id.clone()}
                {oninput}
            />
            {props.error.map(|message| html! {
                <small id={error_id} class="error">{message}</small>
            }).unwrap_or_default()}
        </label>
    }
}

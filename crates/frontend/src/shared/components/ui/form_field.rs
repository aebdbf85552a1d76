use leptos::prelude::*;

/// Text input with label and inline validation message
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    /// Form field key, used as the element id
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Validation message; the field is highlighted while set
    #[prop(into)]
    error: Signal<Option<String>>,
    /// "text" (default), "email", "number"...
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                id=id
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="form__error">{message}</p>
            })}
        </div>
    }
}

/// Select with label and inline validation message.
/// `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Leading empty option, e.g. "Select a type"
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <select
                id=id
                class="form__select"
                class:form__input--invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|message| view! {
                <p class="form__error">{message}</p>
            })}
        </div>
    }
}

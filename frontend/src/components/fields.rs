//! Shared form field builders for the create screens.
//!
//! The app this one replaces carried several hand-copied variants of the same
//! labeled input; the builders here are the single rendition all screens use.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::entity_ref::EntityRef;

/// A labeled single-line input. `numeric` switches the mobile keyboard to
/// digits, it does not restrict what can be typed.
pub fn text_field(
    label: &str,
    placeholder: &str,
    value: &str,
    numeric: bool,
    on_change: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    });
    html! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                class="field-input"
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                inputmode={if numeric { "numeric" } else { "text" }}
                {oninput}
            />
        </div>
    }
}

/// A labeled dropdown over identifier-backed options. Emits the selected id
/// as text, or the empty string while the placeholder row is active.
pub fn select_field(
    label: &str,
    placeholder: &str,
    options: &[EntityRef],
    selected: &str,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(select.value());
    });
    html! {
        <div class="field">
            <label class="field-label">{label}</label>
            <select class="field-input" {onchange}>
                <option value="" selected={selected.is_empty()}>{placeholder}</option>
                { for options.iter().map(|option| {
                    let value = option.id.to_string();
                    html! {
                        <option value={value.clone()} selected={value == selected}>
                            { option.nome.clone() }
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}

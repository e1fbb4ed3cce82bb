//! Form controls: text input, textarea, checkbox and select.
//!
//! All of them are controlled: the page passes the current value in and gets
//! every change back through a handler.

use dioxus::prelude::*;

use super::class_list;

/// Element id derived from a label, so `<label for>` links without state.
pub fn field_id(prefix: &str, label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{prefix}-{slug}")
}

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// text, email, password, number, date, tel
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| field_id("input", props.label.as_deref().unwrap_or("field")));
    let input_class = class_list("input-field", props.class.as_deref());
    let oninput = props.oninput;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| field_id("textarea", props.label.as_deref().unwrap_or("field")));
    let oninput = props.oninput;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub checked: bool,
    pub onchange: EventHandler<bool>,
    pub label: String,
    #[props(default)]
    pub id: Option<String>,
}

/// Checkbox with a clickable label
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| field_id("checkbox", &props.label));
    let onchange = props.onchange;

    rsx! {
        div { class: "checkbox-field",
            input {
                id: "{id}",
                class: "checkbox",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            label { class: "checkbox-label", r#for: "{id}", "{props.label}" }
        }
    }
}

/// One `<option>`: submitted value and visible label
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Selected value, empty for none
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub id: Option<String>,
}

/// Drop-down with a disabled placeholder entry
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| field_id("select", props.label.as_deref().unwrap_or("field")));
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            select {
                id: "{id}",
                class: "input-field select",
                value: "{props.value}",
                onchange: move |e| onchange.call(e.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    "{props.placeholder}"
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_from_label() {
        assert_eq!(field_id("input", "Retype Password"), "input-retype-password");
        assert_eq!(field_id("select", "Category *"), "select-category");
        assert_eq!(field_id("input", "Goal ($)"), "input-goal");
    }

    #[test]
    fn select_option_new() {
        let opt = SelectOption::new("health", "Health");
        assert_eq!(opt.value, "health");
        assert_eq!(opt.label, "Health");
    }
}

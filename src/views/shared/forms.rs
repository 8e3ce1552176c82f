use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_change, on_input, ElementBuilder};

fn field_shell(label: &str, error: Option<&str>) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class(if error.is_some() { "form-group has-error" } else { "form-group" })
        .build();
    let label = ElementBuilder::new("label")?.class("form-label").text(label).build();
    append_child(&group, &label)?;
    Ok(group)
}

fn append_error(group: &Element, error: Option<&str>) -> Result<(), JsValue> {
    if let Some(message) = error {
        let hint = ElementBuilder::new("p")?.class("field-error").text(message).build();
        append_child(group, &hint)?;
    }
    Ok(())
}

/// `<input>` of `input_type`; `on_value` gets every keystroke
pub fn render_text_field<F>(
    label: &str,
    input_type: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = field_shell(label, error)?;
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("value", value)?
        .flag("disabled", disabled)?
        .build();
    on_input(&input, on_value)?;
    append_child(&group, &input)?;
    append_error(&group, error)?;
    Ok(group)
}

pub fn render_textarea<F>(
    label: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = field_shell(label, error)?;
    let area = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("rows", "3")?
        .flag("disabled", disabled)?
        .text(value)
        .build();
    on_input(&area, on_value)?;
    append_child(&group, &area)?;
    append_error(&group, error)?;
    Ok(group)
}

/// One `<option>`: value, label, disabled
pub type SelectOption = (String, String, bool);

/// `<select>` with a leading placeholder option whose value is empty
pub fn render_select<F>(
    label: &str,
    placeholder: &str,
    options: &[SelectOption],
    selected: &str,
    error: Option<&str>,
    disabled: bool,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = field_shell(label, error)?;
    let select = ElementBuilder::new("select")?
        .class("form-input")
        .flag("disabled", disabled)?
        .build();

    let blank = ElementBuilder::new("option")?
        .attr("value", "")?
        .flag("selected", selected.is_empty())?
        .text(placeholder)
        .build();
    append_child(&select, &blank)?;

    for (value, text, option_disabled) in options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .flag("selected", value == selected)?
            .flag("disabled", *option_disabled)?
            .text(text)
            .build();
        append_child(&select, &option)?;
    }

    on_change(&select, on_value)?;
    append_child(&group, &select)?;
    append_error(&group, error)?;
    Ok(group)
}

/// Submit button showing `busy_label` while a request is in flight
pub fn render_submit_button(label: &str, busy_label: &str, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", busy)?
        .text(if busy { busy_label } else { label })
        .build())
}

/// `Some(id)` for a non-empty numeric select value
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

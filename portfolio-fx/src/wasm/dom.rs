//! Optional element lookups and small style helpers.
//!
//! Lookups return `Option`: an element that is missing, or is not of the
//! expected type, disables whatever depended on it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::effects::modal::MessageForm;
use crate::effects::Rect;
use crate::error::FxError;

pub(super) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(super) fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(found) => found?.dyn_into::<T>().ok(),
        Err(e) => {
            log::warn!("bad selector '{selector}': {}", js_message(&e));
            None
        }
    }
}

pub(super) fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector '{selector}': {}", js_message(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(super) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("cannot set {property}: {}", js_message(&e));
    }
}

pub(super) fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("cannot toggle class {class}: {}", js_message(&e));
    }
}

pub(super) fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Append a `<style>` block to the document head.
pub(super) fn inject_style(document: &Document, css: &str) -> Result<Element, FxError> {
    let head = document
        .head()
        .ok_or_else(|| FxError::host("document has no <head>"))?;
    let style = document.create_element("style").map_err(host_error)?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(host_error)?;
    Ok(style)
}

pub(super) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(super) fn host_error(value: JsValue) -> FxError {
    FxError::host(js_message(&value))
}

/// A text field of the message form.
#[derive(Clone)]
pub(super) enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    pub(super) fn lookup(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Some(Field::TextArea(area)),
            Err(element) => element.dyn_into::<HtmlInputElement>().ok().map(Field::Input),
        }
    }

    fn value(&self) -> String {
        match self {
            Field::Input(input) => input.value(),
            Field::TextArea(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Field::Input(input) => input.set_value(value),
            Field::TextArea(area) => area.set_value(value),
        }
    }
}

/// The three fields of the message form; any of them may be absent.
#[derive(Clone)]
pub(super) struct FormFields {
    pub(super) name: Option<Field>,
    pub(super) email: Option<Field>,
    pub(super) message: Option<Field>,
}

impl FormFields {
    pub(super) fn read(&self) -> MessageForm {
        let read = |f: &Option<Field>| f.as_ref().map(Field::value).unwrap_or_default();
        MessageForm::new(read(&self.name), read(&self.email), read(&self.message))
    }

    pub(super) fn write(&self, form: &MessageForm) {
        for (field, value) in [
            (&self.name, &form.name),
            (&self.email, &form.email),
            (&self.message, &form.message),
        ] {
            if let Some(field) = field {
                field.set_value(value);
            }
        }
    }
}

//! Utility functions for the schema builder component.
//!
//! - **Form callbacks**: turning input, checkbox and select events into
//!   `Msg`s without repeating the DOM casting in every field of the view.
//! - **User feedback**: displaying temporary "toast" notifications.
//! - **Clipboard**: writing the schema through `navigator.clipboard`.
//! - **Highlighting**: colouring the generated TypeScript for the preview.

use std::str::FromStr;
use std::sync::OnceLock;

use js_sys::{Function, Promise, Reflect};
use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SchemaBuilderComponent;

/// Callback for `<input>` text/number fields, fed with the current value.
pub fn text_input_callback(
    link: &Scope<SchemaBuilderComponent>,
    to_msg: impl Fn(String) -> Msg + 'static,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| to_msg(e.target_unchecked_into::<HtmlInputElement>().value()))
}

/// Callback for `<textarea>` fields.
pub fn textarea_callback(
    link: &Scope<SchemaBuilderComponent>,
    to_msg: impl Fn(String) -> Msg + 'static,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        to_msg(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    })
}

/// Callback for checkboxes, fed with the new checked state.
pub fn checkbox_callback(
    link: &Scope<SchemaBuilderComponent>,
    to_msg: impl Fn(bool) -> Msg + 'static,
) -> Callback<Event> {
    link.callback(move |e: Event| to_msg(e.target_unchecked_into::<HtmlInputElement>().checked()))
}

/// Callback for `<select>` boxes whose option values parse into `T`.
/// Values that do not parse are dropped.
pub fn select_callback<T: FromStr + 'static>(
    link: &Scope<SchemaBuilderComponent>,
    to_msg: impl Fn(T) -> Msg + 'static,
) -> Callback<Event> {
    link.batch_callback(move |e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>()
            .value()
            .parse::<T>()
            .ok()
            .map(&to_msg)
    })
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` that removes itself after
/// three seconds.
pub fn show_toast(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_class_name("toast");
        toast.set_inner_html(&format!(
            "<strong>{}</strong><div>{}</div>",
            escape_html(title),
            escape_html(description)
        ));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("right", "20px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Writes `text` to the system clipboard with `navigator.clipboard.writeText`.
///
/// Goes through `Reflect` so it works on browsers and `web-sys` builds that do
/// not expose the Clipboard API bindings; any missing piece is reported as an
/// error string.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(describe)?;
    if clipboard.is_undefined() {
        return Err("navigator.clipboard is not available".to_string());
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe)?
        .dyn_into()
        .map_err(describe)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe)?
        .dyn_into()
        .map_err(describe)?;
    JsFuture::from(promise).await.map(drop).map_err(describe)
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Escapes special HTML characters in a string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const TOKEN_PATTERN: &str = r#"(?P<comment>//[^\n]*)|(?P<string>'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*")|(?P<keyword>\b(?:import|from|const|export|default|as|undefined|null)\b)|(?P<number>\b\d+(?:\.\d+)?\b)|(?P<call>\b[A-Za-z_$][\w$]*)\("#;

fn token_regex() -> Option<&'static Regex> {
    static TOKENS: OnceLock<Option<Regex>> = OnceLock::new();
    TOKENS.get_or_init(|| Regex::new(TOKEN_PATTERN).ok()).as_ref()
}

/// Returns `code` as HTML with comments, strings, keywords, numbers and
/// function calls wrapped in `<span class="tok-*">`. All other text is only
/// escaped.
pub fn highlight_typescript(code: &str) -> String {
    let Some(tokens) = token_regex() else {
        return escape_html(code);
    };

    let mut out = String::with_capacity(code.len() * 2);
    let mut last = 0;
    for caps in tokens.captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&escape_html(&code[last..whole.start()]));

        let (class, token) = ["comment", "string", "keyword", "number", "call"]
            .into_iter()
            .find_map(|name| caps.name(name).map(|m| (name, m)))
            .unwrap_or(("plain", whole));
        out.push_str(&format!(
            "<span class=\"tok-{class}\">{}</span>",
            escape_html(token.as_str())
        ));
        out.push_str(&escape_html(&code[token.end()..whole.end()]));
        last = whole.end();
    }
    out.push_str(&escape_html(&code[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn highlights_tokens_and_keeps_the_text() {
        let html = highlight_typescript("const a = Yup.string().min(3, \"Min <3\");");

        assert!(html.starts_with("<span class=\"tok-keyword\">const</span> a = Yup."));
        assert!(html.contains("<span class=\"tok-call\">string</span>()"));
        assert!(html.contains("<span class=\"tok-number\">3</span>"));
        assert!(html.contains("<span class=\"tok-string\">&quot;Min &lt;3&quot;</span>"));
        assert!(html.ends_with(");"));
    }

    #[test]
    fn highlighted_default_schema_has_no_raw_markup_from_input() {
        let html = highlight_typescript(common::schema::DEFAULT_SCHEMA);
        assert!(html.contains("<span class=\"tok-string\">&#39;yup&#39;</span>"));
        assert!(!html.contains("'yup'"));
    }
}

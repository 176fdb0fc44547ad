//! User-facing notices.
//!
//! Every outcome a screen reports goes through a short-lived toast injected
//! into the DOM, the web stand-in for a mobile alert box. Success and error
//! notices differ only in tint; transport error detail goes to the developer
//! console, never into the toast text.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, PartialEq)]
pub enum Notice {
    Success,
    Error,
}

/// Shows `message` near the bottom of the screen and removes it after a few
/// seconds. The message is inserted as text, never as markup.
pub fn show_toast(kind: Notice, message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let background = match kind {
                    Notice::Success => "rgba(46, 125, 50, 0.92)",
                    Notice::Error => "rgba(198, 40, 40, 0.92)",
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                // Clears the footer nav bar.
                style.set_property("bottom", "72px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

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
    }
}

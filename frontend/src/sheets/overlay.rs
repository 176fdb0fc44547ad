use uuid::Uuid;
use web_sys::js_sys;
use yew::{Component, Context, Html, NodeRef, Properties, html};

/// Full-screen overlay container toggled through the `show` CSS class.
///
/// The container is always rendered so children can hold `NodeRef`s to nodes
/// inside it even while hidden. Callers flip visibility with [`open_overlay`]
/// and [`close_overlay`] against the `node_ref` they passed in.
pub struct Overlay {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for Overlay {
    type Message = ();
    type Properties = OverlayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("overlay-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_overlay(overlay_ref: &NodeRef) {
    toggle_overlay(overlay_ref, "add");
}

pub fn close_overlay(overlay_ref: &NodeRef) {
    toggle_overlay(overlay_ref, "remove");
}

// The class flip runs through a deferred callback so the transition plays
// even when the overlay was mounted in the same tick.
fn toggle_overlay(overlay_ref: &NodeRef, verb: &str) {
    if let Some(overlay) = overlay_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            overlay.id(),
            verb
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}

use common::model::user::CurrentUser;

use crate::app::{App, AppProps};

mod app;
mod components;
mod nav;
mod sheets;
mod toast;

fn main() {
    // Stands in for authentication until the catalog API grows one; every
    // product created in this session is attributed to this name.
    let current_user = CurrentUser::new("Osvaldo");
    yew::Renderer::<App>::with_props(AppProps { current_user }).render();
}

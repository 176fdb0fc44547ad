use yew::{Callback, Component, Context, Html, Properties, classes, html};

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

/// Footer navigation bar, one button per screen.
pub struct NavBar;

impl Component for NavBar {
    type Message = ();
    type Properties = NavBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NavBar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="footer-nav">
                { nav_button(props, Route::Products, "home", "Produtos") }
                { nav_button(props, Route::AddProduct, "add_circle", "Produto") }
                { nav_button(props, Route::AddLocation, "map", "Local") }
                { nav_button(props, Route::AddCategory, "grid_view", "Categoria") }
            </div>
        }
    }
}

fn nav_button(props: &NavBarProps, route: Route, icon: &str, label: &str) -> Html {
    let on_navigate = props.on_navigate.clone();
    let onclick = Callback::from(move |_| on_navigate.emit(route));
    let active = if props.active == route { "active" } else { "" };
    html! {
        <button class={classes!("nav-btn", active)} {onclick}>
            <i class="material-icons">{icon}</i>
            <span class="nav-label">{label}</span>
        </button>
    }
}

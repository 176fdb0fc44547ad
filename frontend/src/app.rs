use common::model::user::CurrentUser;
use yew::{Component, Context, Html, Properties, html};

use crate::components::categories::create::CategoryCreate;
use crate::components::locations::create::LocationCreate;
use crate::components::products::create::ProductCreate;
use crate::components::products::list::ProductList;
use crate::nav::NavBar;

/// Screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Products,
    AddProduct,
    AddLocation,
    AddCategory,
}

pub enum Msg {
    Navigate(Route),
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub current_user: CurrentUser,
}

/// Navigation shell. Owns the active route and swaps the matching screen
/// component in and out, so each screen's state lives exactly as long as its
/// mount.
pub struct App {
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::Products,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if self.route != route {
                    self.route = route;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let screen = match self.route {
            Route::Products => html! { <ProductList on_navigate={on_navigate.clone()} /> },
            Route::AddProduct => html! {
                <ProductCreate
                    current_user={ctx.props().current_user.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::AddLocation => html! { <LocationCreate on_navigate={on_navigate.clone()} /> },
            Route::AddCategory => html! { <CategoryCreate on_navigate={on_navigate.clone()} /> },
        };

        html! {
            <div class="app-root">
                <div class="screen">{ screen }</div>
                <NavBar active={self.route} on_navigate={on_navigate} />
            </div>
        }
    }
}

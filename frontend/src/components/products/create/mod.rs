//! Create-product screen: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the multipart encoder.
//!
//! On first render the screen fires two independent lookups for the category
//! and location dropdowns. They complete in either order and write disjoint
//! state; a failed lookup leaves the form usable (submitting then simply
//! fails required-field validation).

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductCreateProps;
pub use state::ProductCreate;

use common::api;
use common::model::entity_ref::EntityRef;

impl Component for ProductCreate {
    type Message = Msg;
    type Properties = ProductCreateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductCreate::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_options(&api::categories_url()).await {
                    Ok(categorias) => link.send_message(Msg::CategoriasLoaded(categorias)),
                    Err(detail) => link.send_message(Msg::CategoriasFailed(detail)),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_options(&api::locations_url()).await {
                    Ok(locais) => link.send_message(Msg::LocaisLoaded(locais)),
                    Err(detail) => link.send_message(Msg::LocaisFailed(detail)),
                }
            });
        }
    }
}

async fn fetch_options(url: &str) -> Result<Vec<EntityRef>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    response
        .json::<Vec<EntityRef>>()
        .await
        .map_err(|err| err.to_string())
}

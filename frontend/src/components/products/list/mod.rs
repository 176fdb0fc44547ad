//! Product list screen: one fetch on mount, narrowed client-side by the
//! search box.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductListProps;
pub use state::ProductList;

use common::api;
use common::model::product::Product;

impl Component for ProductList {
    type Message = Msg;
    type Properties = ProductListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductList::new()
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
                match fetch_produtos().await {
                    Ok(produtos) => link.send_message(Msg::ProdutosLoaded(produtos)),
                    Err(detail) => link.send_message(Msg::LoadFailed(detail)),
                }
            });
        }
    }
}

async fn fetch_produtos() -> Result<Vec<Product>, String> {
    let response = Request::get(&api::products_url())
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    response
        .json::<Vec<Product>>()
        .await
        .map_err(|err| err.to_string())
}

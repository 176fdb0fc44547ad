//! Update logic for the product list screen. A failed fetch surfaces one
//! generic notice and leaves the empty collection in place; there is no retry
//! affordance beyond navigating back to the screen.

use gloo_console::error;
use yew::prelude::*;

use crate::toast::{Notice, show_toast};

use super::messages::Msg;
use super::state::ProductList;

pub fn update(component: &mut ProductList, _ctx: &Context<ProductList>, msg: Msg) -> bool {
    match msg {
        Msg::ProdutosLoaded(produtos) => {
            component.produtos = produtos;
            true
        }
        Msg::LoadFailed(detail) => {
            error!("Erro ao buscar produtos:", detail);
            show_toast(
                Notice::Error,
                "Não foi possível carregar os produtos. Tente novamente.",
            );
            false
        }
        Msg::UpdateQuery(query) => {
            component.query = query;
            true
        }
    }
}

//! Rendering of the product list and its live filter.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::api;
use common::model::product::{Product, filter_by_name};

use crate::app::Route;

use super::messages::Msg;
use super::state::ProductList;

pub fn view(component: &ProductList, ctx: &Context<ProductList>) -> Html {
    let link = ctx.link();
    let filtered = filter_by_name(&component.produtos, &component.query);

    let on_navigate = ctx.props().on_navigate.clone();
    let add_product = Callback::from(move |_| on_navigate.emit(Route::AddProduct));

    html! {
        <div class="screen-body">
            <input
                class="field-input search"
                placeholder="Buscar Produto"
                value={component.query.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateQuery(input.value())
                })}
            />

            {
                if filtered.is_empty() {
                    html! { <p class="empty-list">{"Nenhum produto encontrado."}</p> }
                } else {
                    html! {
                        <div class="product-list">
                            { for filtered.iter().map(|produto| product_card(produto)) }
                        </div>
                    }
                }
            }

            <button class="button" onclick={add_product}>{"Adicionar Produto"}</button>
        </div>
    }
}

fn product_card(produto: &Product) -> Html {
    let categoria = produto
        .category
        .as_ref()
        .map(|c| c.nome.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let local = produto
        .location
        .as_ref()
        .map(|l| l.nome.clone())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="product-card" key={produto.id.to_string()}>
            <span class="product-name">{ produto.nome.clone() }</span>
            <span class="product-price">{ format!("R$ {}", produto.preco) }</span>
            {
                match &produto.image {
                    Some(image) => html! {
                        <img
                            class="product-image"
                            src={api::image_url(image)}
                            alt={produto.nome.clone()}
                        />
                    },
                    None => html! {},
                }
            }
            <span class="product-details">{ format!("Categoria: {}", categoria) }</span>
            <span class="product-details">{ format!("Local: {}", local) }</span>
        </div>
    }
}

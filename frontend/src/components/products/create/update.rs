//! Update logic for the create-product screen.
//!
//! Submission validates the typed payload first; nothing goes on the wire
//! while a required field is missing. A 2xx answer navigates back to the
//! product list, anything else keeps the screen and its state untouched and
//! logs the detail for the developer.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::api;

use crate::app::Route;
use crate::toast::{Notice, show_toast};

use super::helpers::encode_product_form;
use super::messages::Msg;
use super::state::ProductCreate;

pub fn update(component: &mut ProductCreate, ctx: &Context<ProductCreate>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateNome(value) => {
            component.nome = value;
            true
        }
        Msg::UpdatePreco(value) => {
            component.preco = value;
            true
        }
        Msg::UpdateDescricao(value) => {
            component.descricao = value;
            true
        }
        Msg::SelectCategoria(value) => {
            component.categoria_id = value;
            true
        }
        Msg::SelectLocal(value) => {
            component.local_id = value;
            true
        }
        Msg::CategoriasLoaded(categorias) => {
            component.categorias = categorias;
            true
        }
        Msg::CategoriasFailed(detail) => {
            error!("Erro ao carregar categorias:", detail);
            show_toast(Notice::Error, "Não foi possível carregar as categorias.");
            false
        }
        Msg::LocaisLoaded(locais) => {
            component.locais = locais;
            true
        }
        Msg::LocaisFailed(detail) => {
            error!("Erro ao carregar locais:", detail);
            show_toast(Notice::Error, "Não foi possível carregar os locais.");
            false
        }
        Msg::PhotoCaptured(base64) => {
            component.photo_base64 = Some(base64);
            true
        }
        Msg::Submit => {
            let payload = component.payload(&ctx.props().current_user);
            if let Err(err) = payload.validate(component.photo_base64.is_some()) {
                show_toast(Notice::Error, &err.message);
                return false;
            }
            let Some(photo) = component.photo_base64.clone() else {
                // validate() already rejected a missing photo.
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let form = match encode_product_form(&payload, &photo) {
                    Ok(form) => form,
                    Err(detail) => {
                        link.send_message(Msg::SubmitFailed(detail));
                        return;
                    }
                };
                let request = match Request::post(&api::products_url()).body(form) {
                    Ok(request) => request,
                    Err(err) => {
                        link.send_message(Msg::SubmitFailed(err.to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => link.send_message(Msg::SubmitSucceeded),
                    Ok(response) => {
                        let body = response.text().await.unwrap_or_default();
                        link.send_message(Msg::SubmitFailed(format!(
                            "status {}: {}",
                            response.status(),
                            body
                        )));
                    }
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            false
        }
        Msg::SubmitSucceeded => {
            show_toast(Notice::Success, "Produto cadastrado com sucesso!");
            ctx.props().on_navigate.emit(Route::Products);
            false
        }
        Msg::SubmitFailed(detail) => {
            error!("Erro ao salvar produto:", detail);
            show_toast(Notice::Error, "Não foi possível cadastrar o produto.");
            false
        }
    }
}

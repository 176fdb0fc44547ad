//! Create-category screen, the smallest of the create forms: a single name
//! field posted as JSON.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::api;
use common::requests::NewCategory;

use crate::app::Route;
use crate::components::fields::text_field;
use crate::toast::{Notice, show_toast};

pub enum Msg {
    UpdateNome(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryCreateProps {
    pub on_navigate: Callback<Route>,
}

pub struct CategoryCreate {
    nome: String,
}

impl Component for CategoryCreate {
    type Message = Msg;
    type Properties = CategoryCreateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            nome: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateNome(value) => {
                self.nome = value;
                true
            }
            Msg::Submit => {
                let payload = NewCategory {
                    nome: self.nome.clone(),
                };
                if let Err(err) = payload.validate() {
                    show_toast(Notice::Error, &err.message);
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = match Request::post(&api::categories_add_url()).json(&payload) {
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
                show_toast(Notice::Success, "Categoria adicionada com sucesso!");
                ctx.props().on_navigate.emit(Route::Products);
                false
            }
            Msg::SubmitFailed(detail) => {
                error!("Erro ao adicionar categoria:", detail);
                show_toast(Notice::Error, "Ocorreu um erro ao adicionar a categoria.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="screen-body">
                <h1 class="screen-title">{"Adicionar Categoria"}</h1>

                { text_field("Nome da Categoria", "Digite o nome da categoria", &self.nome, false, link.callback(Msg::UpdateNome)) }

                <button class="button" onclick={link.callback(|_| Msg::Submit)}>
                    {"Salvar"}
                </button>
            </div>
        }
    }
}

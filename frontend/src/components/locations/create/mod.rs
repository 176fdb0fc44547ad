//! Create-location screen. One JSON submit carrying the full address; the
//! CEP rule runs on every submit, before anything touches the network.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::api;
use common::requests::NewLocation;

use crate::app::Route;
use crate::components::fields::text_field;
use crate::toast::{Notice, show_toast};

pub enum Msg {
    UpdateNome(String),
    UpdateCep(String),
    UpdateLogradouro(String),
    UpdateCidade(String),
    UpdateEstado(String),
    UpdateNumero(String),
    UpdateBairro(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LocationCreateProps {
    pub on_navigate: Callback<Route>,
}

pub struct LocationCreate {
    nome: String,
    cep: String,
    logradouro: String,
    cidade: String,
    estado: String,
    numero: String,
    bairro: String,
}

impl LocationCreate {
    fn payload(&self) -> NewLocation {
        NewLocation {
            nome: self.nome.clone(),
            cep: self.cep.clone(),
            logradouro: self.logradouro.clone(),
            cidade: self.cidade.clone(),
            estado: self.estado.clone(),
            numero: self.numero.clone(),
            bairro: self.bairro.clone(),
        }
    }
}

impl Component for LocationCreate {
    type Message = Msg;
    type Properties = LocationCreateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            nome: String::new(),
            cep: String::new(),
            logradouro: String::new(),
            cidade: String::new(),
            estado: String::new(),
            numero: String::new(),
            bairro: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateNome(value) => {
                self.nome = value;
                true
            }
            Msg::UpdateCep(value) => {
                self.cep = value;
                true
            }
            Msg::UpdateLogradouro(value) => {
                self.logradouro = value;
                true
            }
            Msg::UpdateCidade(value) => {
                self.cidade = value;
                true
            }
            Msg::UpdateEstado(value) => {
                self.estado = value;
                true
            }
            Msg::UpdateNumero(value) => {
                self.numero = value;
                true
            }
            Msg::UpdateBairro(value) => {
                self.bairro = value;
                true
            }
            Msg::Submit => {
                let payload = self.payload();
                if let Err(err) = payload.validate() {
                    show_toast(Notice::Error, &err.message);
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = match Request::post(&api::locations_url()).json(&payload) {
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
                show_toast(Notice::Success, "Local adicionado com sucesso!");
                ctx.props().on_navigate.emit(Route::Products);
                false
            }
            Msg::SubmitFailed(detail) => {
                error!("Erro ao adicionar local:", detail);
                show_toast(Notice::Error, "Ocorreu um erro ao adicionar o local.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="screen-body">
                <h1 class="screen-title">{"Adicionar Local"}</h1>

                { text_field("Nome", "Digite o nome do local", &self.nome, false, link.callback(Msg::UpdateNome)) }
                { text_field("CEP", "Digite o CEP", &self.cep, true, link.callback(Msg::UpdateCep)) }
                { text_field("Logradouro", "Digite o logradouro", &self.logradouro, false, link.callback(Msg::UpdateLogradouro)) }
                { text_field("Número", "Digite o número", &self.numero, true, link.callback(Msg::UpdateNumero)) }
                { text_field("Bairro", "Digite o bairro", &self.bairro, false, link.callback(Msg::UpdateBairro)) }
                { text_field("Cidade", "Digite a cidade", &self.cidade, false, link.callback(Msg::UpdateCidade)) }
                { text_field("Estado", "Digite o estado", &self.estado, false, link.callback(Msg::UpdateEstado)) }

                <button class="button" onclick={link.callback(|_| Msg::Submit)}>
                    {"Salvar Local"}
                </button>
            </div>
        }
    }
}

//! Form rendering for the create-product screen.

use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::camera::CameraCapture;
use crate::components::fields::{select_field, text_field};

use super::messages::Msg;
use super::state::ProductCreate;

pub fn view(component: &ProductCreate, ctx: &Context<ProductCreate>) -> Html {
    let link = ctx.link();
    html! {
        <div class="screen-body">
            <h1 class="screen-title">{"Adicionar Produto"}</h1>

            { text_field("Nome", "Digite o nome", &component.nome, false, link.callback(Msg::UpdateNome)) }
            { text_field("Preço", "Digite o preço", &component.preco, true, link.callback(Msg::UpdatePreco)) }
            { select_field("Categoria", "Selecione a categoria", &component.categorias, &component.categoria_id, link.callback(Msg::SelectCategoria)) }
            { select_field("Local", "Selecione o local", &component.locais, &component.local_id, link.callback(Msg::SelectLocal)) }
            { descricao_field(component, link) }

            { photo_preview(component) }

            <CameraCapture on_capture={link.callback(Msg::PhotoCaptured)} />

            <button class="button" onclick={link.callback(|_| Msg::Submit)}>
                {"Salvar Produto"}
            </button>
        </div>
    }
}

fn descricao_field(component: &ProductCreate, link: &Scope<ProductCreate>) -> Html {
    html! {
        <div class="field">
            <label class="field-label">{"Descrição (opcional)"}</label>
            <textarea
                class="field-input"
                placeholder="Digite a descrição"
                value={component.descricao.clone()}
                rows="3"
                oninput={link.callback(|e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::UpdateDescricao(area.value())
                })}
            />
        </div>
    }
}

fn photo_preview(component: &ProductCreate) -> Html {
    match &component.photo_base64 {
        Some(base64) => html! {
            <div class="photo-preview">
                <img
                    src={format!("data:image/jpeg;base64,{}", base64)}
                    alt="Foto do produto"
                    class="photo-preview-image"
                />
            </div>
        },
        None => html! {},
    }
}

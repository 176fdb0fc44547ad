use common::model::entity_ref::EntityRef;

pub enum Msg {
    UpdateNome(String),
    UpdatePreco(String),
    UpdateDescricao(String),
    SelectCategoria(String),
    SelectLocal(String),
    CategoriasLoaded(Vec<EntityRef>),
    CategoriasFailed(String),
    LocaisLoaded(Vec<EntityRef>),
    LocaisFailed(String),
    PhotoCaptured(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

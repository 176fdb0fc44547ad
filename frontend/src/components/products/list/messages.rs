use common::model::product::Product;

pub enum Msg {
    ProdutosLoaded(Vec<Product>),
    LoadFailed(String),
    UpdateQuery(String),
}

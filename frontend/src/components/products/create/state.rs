use common::model::entity_ref::EntityRef;
use common::model::user::CurrentUser;
use common::requests::NewProduct;

/// Form state of the create-product screen. Lives for exactly one mount of
/// the screen and is discarded when the user navigates away.
pub struct ProductCreate {
    pub nome: String,
    pub preco: String,
    pub descricao: String,
    /// Selected option values; empty until the user picks one.
    pub categoria_id: String,
    pub local_id: String,
    /// Dropdown contents, loaded on mount.
    pub categorias: Vec<EntityRef>,
    pub locais: Vec<EntityRef>,
    /// Captured photo as base64 JPEG, also shown as the preview.
    pub photo_base64: Option<String>,
    /// Guard so the mount-time lookups run only once.
    pub loaded: bool,
}

impl ProductCreate {
    pub fn new() -> Self {
        Self {
            nome: String::new(),
            preco: String::new(),
            descricao: String::new(),
            categoria_id: String::new(),
            local_id: String::new(),
            categorias: Vec::new(),
            locais: Vec::new(),
            photo_base64: None,
            loaded: false,
        }
    }

    /// Builds the outbound payload from the current fields. A blank
    /// description is submitted as no description at all.
    pub fn payload(&self, user: &CurrentUser) -> NewProduct {
        let descricao = if self.descricao.trim().is_empty() {
            None
        } else {
            Some(self.descricao.clone())
        };
        NewProduct {
            nome: self.nome.clone(),
            preco: self.preco.clone(),
            descricao,
            usuario: user.nome.clone(),
            category_id: self.categoria_id.clone(),
            location_id: self.local_id.clone(),
        }
    }
}

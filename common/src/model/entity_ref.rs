use serde::{Deserialize, Serialize};

/// Record shape of `GET /locations` and `GET /categories`.
///
/// The create-product screen maps these into its dropdown options: `nome` is
/// the visible label, `id` the value submitted back to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub nome: String,
}

/// Association embedded inside a product record (`Category` / `Location`).
/// Only the display name is guaranteed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityName {
    pub nome: String,
}

/// Identity attributed to records created from this client.
///
/// There is no authentication in front of the catalog API; whoever boots the
/// app decides which name goes into the `usuario` field of new products.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub nome: String,
}

impl CurrentUser {
    pub fn new(nome: impl Into<String>) -> Self {
        Self { nome: nome.into() }
    }
}

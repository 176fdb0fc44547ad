use common::model::product::Product;

/// State of the product list screen: the collection as fetched once on mount
/// plus the live search query. The filtered view is derived from these in
/// `view` on every render, never cached.
pub struct ProductList {
    pub produtos: Vec<Product>,
    pub query: String,
    /// Guard so the mount-time fetch runs only once.
    pub loaded: bool,
}

impl ProductList {
    pub fn new() -> Self {
        Self {
            produtos: Vec::new(),
            query: String::new(),
            loaded: false,
        }
    }
}

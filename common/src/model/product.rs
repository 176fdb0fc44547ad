use serde::{Deserialize, Serialize};

use crate::model::entity_ref::EntityName;

/// One record of `GET /products`.
///
/// `preco` is decimal text exactly as served by the API. The eager-loaded
/// associations arrive under their capitalized wire names and may be absent
/// when a product was stored without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nome: String,
    pub preco: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "Category", default)]
    pub category: Option<EntityName>,
    #[serde(rename = "Location", default)]
    pub location: Option<EntityName>,
    #[serde(default)]
    pub usuario: Option<String>,
}

/// Narrows `products` to the entries whose name contains `query` as a
/// case-insensitive substring. An empty query keeps the whole collection.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.nome.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, nome: &str) -> Product {
        Product {
            id,
            nome: nome.to_string(),
            preco: "10.00".to_string(),
            image: None,
            category: None,
            location: None,
            usuario: None,
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let produtos = vec![product(1, "Café"), product(2, "Leite")];
        let filtered = filter_by_name(&produtos, "");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn match_is_case_insensitive() {
        let produtos = vec![product(1, "Café Torrado"), product(2, "Leite")];
        let filtered = filter_by_name(&produtos, "CAFÉ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn match_is_a_substring_anywhere_in_the_name() {
        let produtos = vec![product(1, "Açúcar Cristal"), product(2, "Cristaleira")];
        let filtered = filter_by_name(&produtos, "cristal");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let produtos = vec![product(1, "Café"), product(2, "Leite")];
        assert!(filter_by_name(&produtos, "arroz").is_empty());
    }

    #[test]
    fn deserializes_a_full_record() {
        let json = r#"{
            "id": 7,
            "nome": "Café",
            "preco": "12.50",
            "image": "uploads/cafe.jpg",
            "Category": { "nome": "Bebidas" },
            "Location": { "nome": "Mercado Central" },
            "usuario": "Osvaldo"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.nome, "Café");
        assert_eq!(p.category.as_ref().unwrap().nome, "Bebidas");
        assert_eq!(p.location.as_ref().unwrap().nome, "Mercado Central");
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{ "id": 1, "nome": "Leite", "preco": "5.00" }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.image.is_none());
        assert!(p.category.is_none());
        assert!(p.location.is_none());
    }
}

use serde::Serialize;

use crate::requests::{ValidationError, is_blank};

/// Payload of `POST /categories/add`, a JSON body with the single name field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub nome: String,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.nome) {
            return Err(ValidationError::new(
                "Por favor, preencha o nome da categoria!",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_named_category() {
        let payload = NewCategory {
            nome: "Bebidas".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_name() {
        let payload = NewCategory {
            nome: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_a_whitespace_only_name() {
        let payload = NewCategory {
            nome: "   ".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn serializes_the_nome_key() {
        let payload = NewCategory {
            nome: "Bebidas".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"nome":"Bebidas"}"#
        );
    }
}

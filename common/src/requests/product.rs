use crate::requests::{ValidationError, is_blank};

/// Multipart field name carrying the photo.
pub const IMAGE_FIELD: &str = "image";

/// File name attached to the photo part.
pub const IMAGE_FILENAME: &str = "produto.jpg";

/// Payload of `POST /products`.
///
/// Goes out as multipart form-data, one part per field plus the photo. The
/// category and location are identifier references picked from the dropdowns,
/// never free text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nome: String,
    pub preco: String,
    pub descricao: Option<String>,
    pub usuario: String,
    pub category_id: String,
    pub location_id: String,
}

impl NewProduct {
    /// Rejects the payload unless every required field is filled and a photo
    /// was captured. `descricao` is the only optional field.
    pub fn validate(&self, has_photo: bool) -> Result<(), ValidationError> {
        let filled = !is_blank(&self.nome)
            && !is_blank(&self.preco)
            && !is_blank(&self.usuario)
            && !is_blank(&self.category_id)
            && !is_blank(&self.location_id);
        if !filled || !has_photo {
            return Err(ValidationError::new(
                "Por favor, preencha todos os campos e adicione uma foto!",
            ));
        }
        Ok(())
    }

    /// Text parts of the multipart body, in wire order. The photo part is
    /// appended separately under [`IMAGE_FIELD`].
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("nome", self.nome.clone()),
            ("preco", self.preco.clone()),
        ];
        if let Some(descricao) = &self.descricao {
            fields.push(("descricao", descricao.clone()));
        }
        fields.push(("usuario", self.usuario.clone()));
        fields.push(("CategoryId", self.category_id.clone()));
        fields.push(("LocationId", self.location_id.clone()));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewProduct {
        NewProduct {
            nome: "Café".to_string(),
            preco: "12.50".to_string(),
            descricao: None,
            usuario: "Osvaldo".to_string(),
            category_id: "3".to_string(),
            location_id: "1".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_payload_with_photo() {
        assert!(filled().validate(true).is_ok());
    }

    #[test]
    fn rejects_without_photo() {
        assert!(filled().validate(false).is_err());
    }

    #[test]
    fn rejects_each_missing_required_field() {
        let blank_outs: [fn(&mut NewProduct); 5] = [
            |p| p.nome.clear(),
            |p| p.preco.clear(),
            |p| p.usuario.clear(),
            |p| p.category_id.clear(),
            |p| p.location_id.clear(),
        ];
        for blank_out in blank_outs {
            let mut payload = filled();
            blank_out(&mut payload);
            assert!(payload.validate(true).is_err());
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut payload = filled();
        payload.nome = "   ".to_string();
        assert!(payload.validate(true).is_err());
    }

    #[test]
    fn descricao_is_optional() {
        let mut payload = filled();
        payload.descricao = None;
        assert!(payload.validate(true).is_ok());
    }

    #[test]
    fn form_fields_use_the_wire_names() {
        let mut payload = filled();
        payload.descricao = Some("torrado".to_string());
        let names: Vec<&str> = payload.form_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["nome", "preco", "descricao", "usuario", "CategoryId", "LocationId"]
        );
    }

    #[test]
    fn form_fields_omit_an_absent_descricao() {
        let names: Vec<&str> = filled().form_fields().iter().map(|(n, _)| *n).collect();
        assert!(!names.contains(&"descricao"));
    }
}

use regex::Regex;
use serde::Serialize;

use crate::requests::{ValidationError, is_blank};

/// Payload of `POST /locations`, sent as a JSON body. The serialized keys
/// match the wire names directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLocation {
    pub nome: String,
    pub cep: String,
    pub logradouro: String,
    pub cidade: String,
    pub estado: String,
    pub numero: String,
    pub bairro: String,
}

impl NewLocation {
    /// Every field is required, and the CEP must be exactly 8 digits. The CEP
    /// rule applies on every submit, not just some copies of the screen.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let filled = !is_blank(&self.nome)
            && !is_blank(&self.cep)
            && !is_blank(&self.logradouro)
            && !is_blank(&self.cidade)
            && !is_blank(&self.estado)
            && !is_blank(&self.numero)
            && !is_blank(&self.bairro);
        if !filled {
            return Err(ValidationError::new("Por favor, preencha todos os campos!"));
        }
        let cep_re = Regex::new(r"^[0-9]{8}$").unwrap();
        if !cep_re.is_match(&self.cep) {
            return Err(ValidationError::new(
                "O CEP deve conter exatamente 8 dígitos numéricos!",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewLocation {
        NewLocation {
            nome: "Mercado Central".to_string(),
            cep: "30190922".to_string(),
            logradouro: "Av. Augusto de Lima".to_string(),
            cidade: "Belo Horizonte".to_string(),
            estado: "MG".to_string(),
            numero: "744".to_string(),
            bairro: "Centro".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn rejects_each_missing_field() {
        let blank_outs: [fn(&mut NewLocation); 7] = [
            |l| l.nome.clear(),
            |l| l.cep.clear(),
            |l| l.logradouro.clear(),
            |l| l.cidade.clear(),
            |l| l.estado.clear(),
            |l| l.numero.clear(),
            |l| l.bairro.clear(),
        ];
        for blank_out in blank_outs {
            let mut payload = filled();
            blank_out(&mut payload);
            assert!(payload.validate().is_err());
        }
    }

    #[test]
    fn rejects_cep_with_seven_digits() {
        let mut payload = filled();
        payload.cep = "3019092".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_cep_with_nine_digits() {
        let mut payload = filled();
        payload.cep = "301909222".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_cep_with_letters_or_punctuation() {
        for cep in ["3019092a", "30190-92", "30 19092", "abcdefgh"] {
            let mut payload = filled();
            payload.cep = cep.to_string();
            assert!(payload.validate().is_err(), "cep {cep:?} should be rejected");
        }
    }

    #[test]
    fn cep_failure_carries_its_own_message() {
        let mut payload = filled();
        payload.cep = "123".to_string();
        let err = payload.validate().unwrap_err();
        assert!(err.message.contains("CEP"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        for key in ["nome", "cep", "logradouro", "cidade", "estado", "numero", "bairro"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}

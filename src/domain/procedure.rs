//! Procedure records served by the public procedures catalogue

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// A single government procedure as listed by the remote catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    /// Catalogue identifier
    #[serde(rename = "tramite_id")]
    pub id: String,
    /// Human-readable procedure name
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Procedure {
    /// Parse a JSON array of procedure records, keeping response order.
    ///
    /// Unknown fields are ignored. Identifiers sent as JSON numbers are
    /// rejected, the catalogue always sends strings.
    pub fn parse_list(body: &str) -> DomainResult<Vec<Self>> {
        serde_json::from_str(body).map_err(|e| DomainError::InvalidRecord {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_catalogue_json_when_parsing_then_keeps_order_and_ignores_extra_fields() {
        let body = r#"[
            {"tramite_id": "42", "nombre": "Renovar pasaporte", "institucion": "X"},
            {"tramite_id": "7", "nombre": "Obtener RUC"}
        ]"#;

        let procedures = Procedure::parse_list(body).unwrap();

        assert_eq!(procedures.len(), 2);
        assert_eq!(procedures[0].name, "Renovar pasaporte");
        assert_eq!(procedures[1].id, "7");
    }

    #[test]
    fn given_record_without_name_when_parsing_then_invalid_record() {
        let err = Procedure::parse_list(r#"[{"tramite_id": "1"}]"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord { .. }));
    }

    #[test]
    fn given_object_instead_of_array_when_parsing_then_invalid_record() {
        assert!(Procedure::parse_list(r#"{"nombre": "x"}"#).is_err());
    }
}

// ============================================================================
// AUTH MODELS - Estructuras compartidas con el backend (login)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Body de POST /api/employees/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Respuesta del login. El backend devuelve el token directamente
/// (`accessToken`) o anidado bajo `data.accessToken` según la versión del
/// API; ambas formas se aceptan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub data: Option<LoginData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginData {
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// Extrae el token de cualquiera de las dos formas de respuesta.
    /// None significa respuesta malformada: el login se trata como fallido.
    pub fn token(&self) -> Option<&str> {
        if let Some(token) = self.access_token.as_deref() {
            return Some(token);
        }
        self.data.as_ref()?.access_token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_at_top_level() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"accessToken": "tok123"}"#).unwrap();
        assert_eq!(response.token(), Some("tok123"));
    }

    #[test]
    fn token_nested_under_data() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"data": {"accessToken": "tok456"}}"#).unwrap();
        assert_eq!(response.token(), Some("tok456"));
    }

    #[test]
    fn missing_token_is_none() {
        let response: LoginResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.token(), None);

        let response: LoginResponse =
            serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert_eq!(response.token(), None);
    }

    #[test]
    fn top_level_wins_over_nested() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken": "a", "data": {"accessToken": "b"}}"#,
        )
        .unwrap();
        assert_eq!(response.token(), Some("a"));
    }
}

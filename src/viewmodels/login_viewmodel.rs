// ============================================================================
// LOGIN VIEWMODEL - Lógica de autenticación
// ============================================================================
// Devuelve valores, la vista actualiza el estado y navega
// ============================================================================

use crate::services::{ApiClient, SessionService};

/// Validación local: ambos campos no vacíos. Si falla no se emite ninguna
/// llamada de red.
pub fn validate_credentials(login: &str, password: &str) -> Result<(), String> {
    if login.trim().is_empty() || password.is_empty() {
        return Err("Zəhmət olmasa bütün sahələri doldurun".to_string());
    }
    Ok(())
}

/// ViewModel de login - SOLO lógica de negocio
pub struct LoginViewModel {
    api_client: ApiClient,
    session_service: SessionService,
}

impl LoginViewModel {
    pub fn new(session_service: SessionService) -> Self {
        Self {
            api_client: ApiClient::new(),
            session_service,
        }
    }

    /// Intercambia credenciales por un token y lo persiste. El token queda
    /// guardado de forma durable antes de devolver: el caller recién navega
    /// cuando esta función retorna Ok.
    pub async fn login(&self, login: String, password: String) -> Result<String, String> {
        let response = self
            .api_client
            .login(&login, &password)
            .await
            .map_err(|e| format!("{}", e))?;

        let token = match response.token() {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => {
                log::error!("❌ [LOGIN] Respuesta sin token");
                return Err("Respuesta sin token".to_string());
            }
        };

        self.session_service.save(&token)?;
        log::info!("✅ [LOGIN] Token persistido para: {}", login);

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("bob", "").is_err());
        assert!(validate_credentials("", "pw1").is_err());
        assert!(validate_credentials("   ", "pw1").is_err());
        assert!(validate_credentials("bob", "pw1").is_ok());
    }
}

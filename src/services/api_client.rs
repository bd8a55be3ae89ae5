// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{ErrorBody, LoginRequest, LoginResponse, ScanContext, SubmitResponse};
use crate::utils::constants::BACKEND_URL;

/// Error de una llamada al backend. Distingue fallo de red (no se llegó al
/// servidor) de rechazo del servidor (HTTP != 2xx, con mensaje opcional en
/// el body).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login de empleado: intercambia credenciales por un bearer token
    pub async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/employees/login", self.base_url);
        let request = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Login de empleado: {}", login);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(format!("{}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{}", e)))?;

        if !response.ok() {
            return Err(Self::server_error(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("{}", e)))
    }

    /// Envía un payload escaneado (ya codificado en base64) con su parámetro
    /// contextual. Body vacío; el token viaja en el header Authorization
    /// cuando existe.
    pub async fn submit_scan(
        &self,
        qr_data_b64: &str,
        context: &ScanContext,
        token: Option<&str>,
    ) -> Result<SubmitResponse, ApiError> {
        let url = format!(
            "{}/api/qrcodes/scanned?qrData={}&{}",
            self.base_url,
            qr_data_b64,
            context.query_param()
        );

        log::info!("📱 Enviando escaneo ({})", context.query_param());

        let mut builder = Request::post(&url).header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Parse(format!("{}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{}", e)))?;

        if !response.ok() {
            return Err(Self::server_error(response).await);
        }

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("{}", e)))
    }

    /// Extrae el mensaje del body de error cuando el servidor lo manda
    async fn server_error(response: gloo_net::http::Response) -> ApiError {
        let status = response.status();
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message),
            Err(_) => None,
        };
        log::warn!("⚠️ Respuesta de error del servidor: HTTP {} ({:?})", status, message);
        ApiError::Server { status, message }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

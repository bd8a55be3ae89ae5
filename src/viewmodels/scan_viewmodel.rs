// ============================================================================
// SCAN VIEWMODEL - Lógica de envío de escaneos
// ============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::AppConfig;
use crate::models::{resolve_context, ScanContext, SubmitResponse};
use crate::services::{ApiClient, ApiError};

/// Envío validado y listo para salir por la red
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    /// Payload escaneado, codificado en base64
    pub qr_data: String,
    pub context: ScanContext,
}

/// Valida payload y parámetro contextual ANTES de cualquier llamada de red,
/// con mensajes distintos por caso. En éxito deja el payload codificado.
pub fn prepare_submission(
    config: &AppConfig,
    payload: Option<&str>,
    table_draft: &str,
) -> Result<PreparedSubmission, String> {
    let payload = match payload {
        Some(data) if !data.is_empty() => data,
        _ => return Err("QR məlumatı tapılmadı.".to_string()),
    };

    let context = resolve_context(config, table_draft)?;

    Ok(PreparedSubmission {
        qr_data: STANDARD.encode(payload),
        context,
    })
}

/// ViewModel de escaneo - SOLO lógica de negocio
pub struct ScanViewModel {
    api_client: ApiClient,
}

impl ScanViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Un request por envío. Sin reintentos: cada error es terminal para el
    /// intento y requiere re-acción del usuario.
    pub async fn submit(
        &self,
        prepared: &PreparedSubmission,
        token: Option<&str>,
    ) -> Result<SubmitResponse, ApiError> {
        self.api_client
            .submit_scan(&prepared.qr_data, &prepared.context, token)
            .await
    }
}

impl Default for ScanViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanContextKind;

    fn table_config() -> AppConfig {
        AppConfig {
            scan_context: ScanContextKind::Table,
            ..AppConfig::default()
        }
    }

    #[test]
    fn missing_payload_blocks_submission() {
        let config = AppConfig::default();
        assert!(prepare_submission(&config, None, "").is_err());
        assert!(prepare_submission(&config, Some(""), "").is_err());
    }

    #[test]
    fn branch_variant_encodes_and_fixes_branch() {
        let config = AppConfig::default();
        let prepared = prepare_submission(&config, Some("12345"), "").unwrap();
        assert_eq!(prepared.qr_data, "MTIzNDU=");
        assert_eq!(prepared.context, ScanContext::BranchId(1));
    }

    #[test]
    fn table_variant_takes_user_table() {
        let config = table_config();
        let prepared = prepare_submission(&config, Some("12345"), "7").unwrap();
        assert_eq!(prepared.qr_data, "MTIzNDU=");
        assert_eq!(prepared.context, ScanContext::TableNo(7));
    }

    #[test]
    fn table_validation_failures_have_distinct_messages() {
        let config = table_config();
        let missing_payload = prepare_submission(&config, None, "7").unwrap_err();
        let missing_table = prepare_submission(&config, Some("12345"), "").unwrap_err();
        let bad_table = prepare_submission(&config, Some("12345"), "siete").unwrap_err();

        assert_ne!(missing_payload, missing_table);
        assert_ne!(missing_table, bad_table);
    }

    #[test]
    fn url_payloads_encode_like_any_data() {
        let config = AppConfig::default();
        let prepared =
            prepare_submission(&config, Some("https://example.com/menu"), "").unwrap();
        assert_eq!(
            STANDARD.decode(prepared.qr_data.as_bytes()).unwrap(),
            b"https://example.com/menu"
        );
    }
}

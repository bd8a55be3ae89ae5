// ============================================================================
// SCAN MODELS - Payload escaneado y parámetro contextual
// ============================================================================

use serde::Deserialize;

use crate::config::{AppConfig, ScanContextKind};

/// Clasificador de payload: URL si empieza con http:// o https://,
/// dato opaco en cualquier otro caso (incluida la cadena vacía).
pub fn is_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Parámetro contextual resuelto que acompaña un envío concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanContext {
    BranchId(u32),
    TableNo(u32),
}

impl ScanContext {
    /// Fragmento de query string para el endpoint de envío
    pub fn query_param(&self) -> String {
        match self {
            ScanContext::BranchId(id) => format!("branchId={}", id),
            ScanContext::TableNo(n) => format!("tableNo={}", n),
        }
    }
}

/// Resuelve el parámetro contextual según la variante configurada.
/// En la variante Table el borrador del número de mesa es obligatorio y
/// debe parsear como entero positivo; cada caso devuelve su propio mensaje.
pub fn resolve_context(config: &AppConfig, table_draft: &str) -> Result<ScanContext, String> {
    match config.scan_context {
        ScanContextKind::Branch => Ok(ScanContext::BranchId(config.branch_id)),
        ScanContextKind::Table => {
            let draft = table_draft.trim();
            if draft.is_empty() {
                return Err("Masa nömrəsini daxil edin".to_string());
            }
            match draft.parse::<u32>() {
                Ok(n) if n > 0 => Ok(ScanContext::TableNo(n)),
                _ => Err("Masa nömrəsi düzgün deyil".to_string()),
            }
        }
    }
}

/// Respuesta del endpoint de envío. El body puede traer un detalle de
/// confirmación en `message`; se muestra al usuario cuando existe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body de error del backend (HTTP != 2xx). `message` se muestra verbatim
/// cuando está presente.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_classifier_accepts_http_prefixes() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com/menu"));
        assert!(is_url("https://"));
    }

    #[test]
    fn url_classifier_rejects_everything_else() {
        assert!(!is_url(""));
        assert!(!is_url("12345"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("HTTPS://example.com"));
        assert!(!is_url("texto con https:// adentro"));
    }

    #[test]
    fn branch_variant_ignores_table_draft() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_context(&config, ""),
            Ok(ScanContext::BranchId(1))
        );
    }

    #[test]
    fn table_variant_requires_numeric_draft() {
        let config = AppConfig {
            scan_context: ScanContextKind::Table,
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_context(&config, "7"),
            Ok(ScanContext::TableNo(7))
        );
        assert!(resolve_context(&config, "").is_err());
        assert!(resolve_context(&config, "abc").is_err());
        assert!(resolve_context(&config, "0").is_err());
        // Mensajes distintos para campo vacío vs no numérico
        assert_ne!(
            resolve_context(&config, "").unwrap_err(),
            resolve_context(&config, "abc").unwrap_err()
        );
    }

    #[test]
    fn query_param_shapes() {
        assert_eq!(ScanContext::BranchId(1).query_param(), "branchId=1");
        assert_eq!(ScanContext::TableNo(7).query_param(), "tableNo=7");
    }
}

use serde::{Deserialize, Serialize};

/// Variante del parámetro contextual que acompaña cada escaneo.
/// Consolida las dos variantes de la app en un único flujo parametrizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanContextKind {
    /// Sucursal fija: `branchId` se envía siempre con el valor configurado
    Branch,
    /// Mesa: el empleado ingresa el número de mesa antes de enviar
    Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    /// Vida útil del token de sesión en minutos. Las fuentes observadas
    /// discrepaban (un comentario decía "30 días" junto a una constante de
    /// 20 minutos); aquí el valor es explícito y configurable.
    pub session_expiry_minutes: u32,
    pub scan_context: ScanContextKind,
    /// ID de sucursal usado cuando scan_context es Branch
    pub branch_id: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            enable_logging: true,
            session_expiry_minutes: 20,
            scan_context: ScanContextKind::Branch,
            branch_id: 1,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("production").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            session_expiry_minutes: option_env!("SESSION_EXPIRY_MINUTES")
                .unwrap_or("20").parse().unwrap_or(20),
            scan_context: match option_env!("SCAN_CONTEXT") {
                Some("table") => ScanContextKind::Table,
                _ => ScanContextKind::Branch,
            },
            branch_id: option_env!("BRANCH_ID")
                .unwrap_or("1").parse().unwrap_or(1),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expiry_is_twenty_minutes() {
        let config = AppConfig::default();
        assert_eq!(config.session_expiry_minutes, 20);
    }

    #[test]
    fn default_context_is_branch_one() {
        let config = AppConfig::default();
        assert_eq!(config.scan_context, ScanContextKind::Branch);
        assert_eq!(config.branch_id, 1);
    }
}

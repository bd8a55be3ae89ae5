/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: API de producción
/// - Override: BACKEND_URL via .env
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://facecardapi.azurewebsites.net",
};

/// Clave de localStorage para el bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// ID del contenedor DOM donde el companion JS monta la cámara
pub const CAMERA_VIEWPORT_ID: &str = "camera-viewport";

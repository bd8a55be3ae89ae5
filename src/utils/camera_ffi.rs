// ============================================================================
// CAMERA FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para el companion JS de cámara/decodificación QR - Sin estado,
// sin lógica. El lado Rust solo consume eventos de decodificación.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Pide permiso de cámara al navegador. Invoca exactamente uno de los
    /// dos callbacks según el resultado.
    #[wasm_bindgen(js_name = requestCameraPermission)]
    pub fn request_camera_permission(
        on_granted: &js_sys::Function,
        on_denied: &js_sys::Function,
    );

    /// Arranca la cámara en el contenedor dado y decodifica códigos QR de
    /// forma continua. `facing` es "front" o "back".
    #[wasm_bindgen(js_name = initQrScanner)]
    pub fn init_qr_scanner(
        container_id: &str,
        facing: &str,
        on_decoded: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    #[wasm_bindgen(js_name = stopQrScanner)]
    pub fn stop_qr_scanner();
}

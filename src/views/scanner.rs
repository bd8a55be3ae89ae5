// ============================================================================
// SCANNER VIEW - Cámara, resultado de escaneo y envío (Rust puro)
// ============================================================================
// Tres estados de render mutuamente excluyentes, derivados de ScanState:
// prompt de permiso, cámara activa, resultado pendiente de decisión.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::config::{ScanContextKind, CONFIG};
use crate::dom::{
    append_child, create_element, on_click, on_input, set_attribute, set_class_name,
    ElementBuilder,
};
use crate::models::is_url;
use crate::state::{AppState, PermissionStatus, ScanPhase, Screen};
use crate::utils::camera_ffi;
use crate::utils::constants::CAMERA_VIEWPORT_ID;
use crate::viewmodels::{prepare_submission, ScanViewModel};
use crate::views::{alert, confirm};

/// Renderizar pantalla de escaneo según la fase actual
pub fn render_scanner(state: &AppState) -> Result<Element, JsValue> {
    match state.scan.phase() {
        ScanPhase::RequestingPermission => render_permission_prompt(state),
        ScanPhase::Scanning => render_camera(state),
        ScanPhase::ResultShown(data) => render_result(state, &data),
    }
}

// ----------------------------------------------------------------------------
// Permiso de cámara
// ----------------------------------------------------------------------------

/// Prompt de permiso con acción de reintento. Mientras el permiso no esté
/// concedido no se monta la cámara: ningún evento de decodificación puede
/// producir un resultado.
fn render_permission_prompt(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?
        .class("permission-screen")
        .build();

    let message = ElementBuilder::new("p")?
        .class("permission-message")
        .text("Kameraya icazə lazımdır")
        .build();
    append_child(&screen, &message)?;

    let retry_btn = ElementBuilder::new("button")?
        .class("btn-permission")
        .text("İcazə ver")
        .build();
    {
        let state = state.clone();
        on_click(&retry_btn, move |_| {
            request_permission(&state);
        })?;
    }
    append_child(&screen, &retry_btn)?;

    // Pedido automático al montar, solo la primera vez. Tras un rechazo
    // explícito queda únicamente la acción de reintento.
    if *state.scan.permission.borrow() == PermissionStatus::Requesting {
        let state = state.clone();
        Timeout::new(100, move || {
            request_permission(&state);
        })
        .forget();
    }

    Ok(screen)
}

fn request_permission(state: &AppState) {
    log::info!("📷 [SCANNER] Pidiendo permiso de cámara...");

    let state_granted = state.clone();
    let on_granted = Closure::wrap(Box::new(move |_: JsValue| {
        log::info!("✅ [SCANNER] Permiso de cámara concedido");
        state_granted.scan.set_permission(PermissionStatus::Granted);
        state_granted.notify_subscribers();
    }) as Box<dyn FnMut(JsValue)>);

    let state_denied = state.clone();
    let on_denied = Closure::wrap(Box::new(move |_: JsValue| {
        log::warn!("⚠️ [SCANNER] Permiso de cámara denegado");
        state_denied.scan.set_permission(PermissionStatus::Denied);
        state_denied.notify_subscribers();
    }) as Box<dyn FnMut(JsValue)>);

    camera_ffi::request_camera_permission(
        on_granted.as_ref().unchecked_ref(),
        on_denied.as_ref().unchecked_ref(),
    );

    on_granted.forget();
    on_denied.forget();
}

// ----------------------------------------------------------------------------
// Cámara activa
// ----------------------------------------------------------------------------

fn render_camera(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?
        .class("scanner-screen")
        .build();

    // Contenedor donde el companion JS monta el stream de video
    let viewport = ElementBuilder::new("div")?
        .id(CAMERA_VIEWPORT_ID)?
        .class("camera-viewport")
        .build();
    append_child(&screen, &viewport)?;

    // Marco de escaneo (cosmético, las esquinas y la línea van por CSS)
    let frame = ElementBuilder::new("div")?
        .class("scan-frame")
        .build();
    for corner in ["top-left", "top-right", "bottom-left", "bottom-right"] {
        let corner_el = ElementBuilder::new("div")?
            .class(&format!("scan-corner scan-corner-{}", corner))
            .build();
        append_child(&frame, &corner_el)?;
    }
    let scan_line = ElementBuilder::new("div")?
        .class("scan-line")
        .build();
    append_child(&frame, &scan_line)?;
    append_child(&screen, &frame)?;

    // Logout (arriba a la derecha), con confirmación
    let logout_btn = ElementBuilder::new("button")?
        .class("btn-logout")
        .text("Çıxış")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            if confirm("Çıxış etmək istədiyinizə əmin olun.") {
                camera_ffi::stop_qr_scanner();
                state.logout();
                state.notify_subscribers();
            }
        })?;
    }
    append_child(&screen, &logout_btn)?;

    // Toggle frontal/trasera (abajo). Solo configuración de cámara, no
    // afecta la máquina de estados.
    let facing_btn = ElementBuilder::new("button")?
        .class("btn-facing")
        .text("Kameranı çevir")
        .build();
    {
        let state = state.clone();
        on_click(&facing_btn, move |_| {
            let facing = state.scan.toggle_facing();
            log::info!("🔄 [SCANNER] Cámara: {}", facing.as_str());
            camera_ffi::stop_qr_scanner();
            start_camera(&state);
        })?;
    }
    append_child(&screen, &facing_btn)?;

    // Arrancar la cámara con delay para asegurar que el DOM esté listo
    {
        let state = state.clone();
        Timeout::new(100, move || {
            start_camera(&state);
        })
        .forget();
    }

    Ok(screen)
}

/// Arranca la cámara y registra el callback de decodificación. El primer
/// decode aceptado detiene la cámara y pasa a la vista de resultado; el
/// resto del stream continuo se ignora en ScanState::on_decode.
fn start_camera(state: &AppState) {
    let facing = *state.scan.facing.borrow();

    let state_decoded = state.clone();
    let on_decoded = Closure::wrap(Box::new(move |decoded: JsValue| {
        if let Some(data) = decoded.as_string() {
            log::info!("📱 [SCANNER] Código detectado: {}", data);
            if state_decoded.scan.on_decode(data) {
                camera_ffi::stop_qr_scanner();
                state_decoded.notify_subscribers();
            }
        }
    }) as Box<dyn FnMut(JsValue)>);

    let on_error = Closure::wrap(Box::new(move |error: JsValue| {
        log::error!("❌ [SCANNER] Error de cámara: {:?}", error);
    }) as Box<dyn FnMut(JsValue)>);

    log::info!("📷 [SCANNER] Inicializando cámara ({})...", facing.as_str());
    camera_ffi::init_qr_scanner(
        CAMERA_VIEWPORT_ID,
        facing.as_str(),
        on_decoded.as_ref().unchecked_ref(),
        on_error.as_ref().unchecked_ref(),
    );

    on_decoded.forget();
    on_error.forget();
}

// ----------------------------------------------------------------------------
// Resultado pendiente de decisión
// ----------------------------------------------------------------------------

fn render_result(state: &AppState, data: &str) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?
        .class("result-screen")
        .build();

    let title_text = if data.trim().is_empty() {
        "Məlumat Tapılmadı"
    } else if is_url(data) {
        "URL Tapıldı:"
    } else {
        "Məlumat Tapıldı:"
    };
    let title = ElementBuilder::new("p")?
        .class("result-title")
        .text(title_text)
        .build();
    append_child(&screen, &title)?;

    let payload = ElementBuilder::new("p")?
        .class("result-payload")
        .text(data)
        .build();
    append_child(&screen, &payload)?;

    let actions = ElementBuilder::new("div")?
        .class("result-actions")
        .build();

    // "Abrir externamente" solo cuando clasifica como URL
    if is_url(data) {
        let open_btn = ElementBuilder::new("button")?
            .class("btn-open-url")
            .text("Sayta get")
            .build();
        {
            let url = data.to_string();
            on_click(&open_btn, move |_| {
                if let Some(win) = web_sys::window() {
                    if let Err(e) = win.open_with_url(&url) {
                        log::error!("❌ [SCANNER] Error abriendo URL: {:?}", e);
                    }
                }
            })?;
        }
        append_child(&actions, &open_btn)?;
    }

    // Número de mesa (solo variante Table), requerido antes de enviar
    if CONFIG.scan_context == ScanContextKind::Table {
        let table_input = create_element("input")?;
        set_attribute(&table_input, "type", "number")?;
        set_attribute(&table_input, "id", "table-no")?;
        set_attribute(&table_input, "placeholder", "Masa nömrəsi")?;
        set_attribute(&table_input, "min", "1")?;
        set_attribute(&table_input, "value", &state.scan.table_draft.borrow())?;
        set_class_name(&table_input, "table-input");
        {
            let state = state.clone();
            on_input(&table_input, move |e: web_sys::InputEvent| {
                if let Some(target) =
                    e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    *state.scan.table_draft.borrow_mut() = target.value();
                }
            })?;
        }
        append_child(&actions, &table_input)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .id("submit-scan")?
        .class("btn-submit")
        .text("Göndər")
        .build();
    if *state.scan.submitting.borrow() {
        set_attribute(&submit_btn, "disabled", "true")?;
    }
    {
        let state = state.clone();
        on_click(&submit_btn, move |_| {
            submit_scan(&state);
        })?;
    }
    append_child(&actions, &submit_btn)?;

    let discard_btn = ElementBuilder::new("button")?
        .class("btn-discard")
        .text("Geri qayıt")
        .build();
    {
        let state = state.clone();
        on_click(&discard_btn, move |_| {
            state.scan.discard();
            state.notify_subscribers();
        })?;
    }
    append_child(&actions, &discard_btn)?;

    append_child(&screen, &actions)?;

    Ok(screen)
}

/// Valida y envía el escaneo. Un solo envío en vuelo: el botón queda
/// deshabilitado vía estado hasta que el intento termina.
fn submit_scan(state: &AppState) {
    if *state.scan.submitting.borrow() {
        return;
    }

    let payload = state.scan.scanned_data.borrow().clone();
    let table_draft = state.scan.table_draft.borrow().clone();

    // Validación local: sin llamada de red si falla
    let prepared = match prepare_submission(&CONFIG, payload.as_deref(), &table_draft) {
        Ok(prepared) => prepared,
        Err(msg) => {
            alert(&msg);
            return;
        }
    };

    *state.scan.submitting.borrow_mut() = true;
    state.notify_subscribers();

    let state = state.clone();
    spawn_local(async move {
        let vm = ScanViewModel::new();
        let token = state.auth.get_token();
        let result = vm.submit(&prepared, token.as_deref()).await;

        // La expiración de sesión pudo forzar el login mientras el request
        // estaba en vuelo: el resultado ya no le pertenece a nadie.
        if state.current_screen() != Screen::Scanner
            || state.scan.scanned_data.borrow().is_none()
        {
            log::warn!("⚠️ [SCANNER] Resultado de envío obsoleto, ignorado");
            return;
        }

        match result {
            Ok(response) => {
                log::info!("✅ [SCANNER] Escaneo enviado");
                match response.message {
                    Some(detail) if !detail.is_empty() => alert(&detail),
                    _ => alert("Uğurla Göndərildi!"),
                }
                state.scan.clear_after_submit();
                state.notify_subscribers();
            }
            Err(crate::services::ApiError::Server { message, status }) => {
                // Mensaje del servidor verbatim cuando existe; el resultado
                // se conserva para reintentar sin re-escanear
                log::error!("❌ [SCANNER] Rechazo del servidor: HTTP {}", status);
                match message {
                    Some(msg) if !msg.is_empty() => alert(&msg),
                    _ => alert("Məlumat göndərilmədi."),
                }
                *state.scan.submitting.borrow_mut() = false;
                state.notify_subscribers();
            }
            Err(e) => {
                log::error!("❌ [SCANNER] Error de conexión: {}", e);
                alert("Serverə qoşulmaq mümkün olmadı.");
                *state.scan.submitting.borrow_mut() = false;
                state.notify_subscribers();
            }
        }
    });
}

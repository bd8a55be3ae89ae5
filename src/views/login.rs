// ============================================================================
// LOGIN VIEW - Pantalla de autenticación (Rust puro)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{
    append_child, create_element, on_input, on_submit, remove_attribute, set_attribute,
    set_class_name, ElementBuilder,
};
use crate::state::AppState;
use crate::utils::camera_ffi;
use crate::viewmodels::{validate_credentials, LoginViewModel};
use crate::views::alert;

/// Renderizar pantalla de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (vive en los closures)
    let login_value = Rc::new(RefCell::new(String::new()));
    let password_value = Rc::new(RefCell::new(String::new()));
    let pending = Rc::new(RefCell::new(false));

    let login_screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();

    let login_container = ElementBuilder::new("div")?
        .class("login-container")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("login-title")
        .text("Daxil ol")
        .build();
    append_child(&login_container, &title)?;

    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let login_group = create_text_input(
        "login",
        "text",
        "İstifadəçi adı",
        login_value.clone(),
    )?;
    let password_group = create_text_input(
        "password",
        "password",
        "Şifrə",
        password_value.clone(),
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .id("login-submit")?
        .class("btn-login")
        .text("Giriş et")
        .build();

    // Submit: validación local primero, una sola llamada en vuelo
    {
        let login_value = login_value.clone();
        let password_value = password_value.clone();
        let pending = pending.clone();
        let submit_btn = submit_btn.clone();
        let state = state.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if *pending.borrow() {
                return;
            }

            let login_val = login_value.borrow().clone();
            let password_val = password_value.borrow().clone();

            if let Err(msg) = validate_credentials(&login_val, &password_val) {
                alert(&msg);
                return;
            }

            *pending.borrow_mut() = true;
            let _ = set_attribute(&submit_btn, "disabled", "true");

            let pending = pending.clone();
            let submit_btn = submit_btn.clone();
            let state = state.clone();

            spawn_local(async move {
                log::info!("🔐 [LOGIN] Iniciando login...");
                let vm = LoginViewModel::new(state.session_service.clone());

                match vm.login(login_val.clone(), password_val).await {
                    Ok(token) => {
                        log::info!("✅ [LOGIN] Login exitoso");

                        // Timer de expiración: se rearma solo acá. Al
                        // disparar fuerza el login sin importar la pantalla
                        // activa (la cámara puede estar corriendo).
                        let state_for_expiry = state.clone();
                        state.session_service.arm_expiry(
                            CONFIG.session_expiry_minutes,
                            move || {
                                camera_ffi::stop_qr_scanner();
                                state_for_expiry.session_expired();
                                state_for_expiry.notify_subscribers();
                            },
                        );

                        alert(&format!("Uğur! Xoş gəldiniz, {}", login_val));

                        state.login_succeeded(login_val, token);
                        state.notify_subscribers();
                    }
                    Err(e) => {
                        // Notificación genérica, los campos se conservan
                        log::error!("❌ [LOGIN] Error en login: {}", e);
                        alert("Giriş zamanı problem baş verdi");
                        *pending.borrow_mut() = false;
                        let _ = remove_attribute(&submit_btn, "disabled");
                    }
                }
            });
        })?;
    }

    append_child(&form, &login_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    append_child(&login_container, &form)?;
    append_child(&login_screen, &login_container)?;

    Ok(login_screen)
}

/// Helper para crear form group con input de texto
fn create_text_input(
    id: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_attribute(&input, "autocapitalize", "none")?;
    set_class_name(&input, "form-input");

    on_input(&input, move |e: web_sys::InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    })?;

    append_child(&group, &input)?;

    Ok(group)
}

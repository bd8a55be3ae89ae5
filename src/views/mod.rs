pub mod app;
pub mod login;
pub mod scanner;

pub use app::render_app;
pub use login::render_login;
pub use scanner::render_scanner;

/// Aviso bloqueante al usuario (equivalente al Alert nativo)
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        win.alert_with_message(message).ok();
    }
}

/// Confirmación bloqueante; false si no hay window disponible
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(win) => win.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}

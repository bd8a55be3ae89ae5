// ============================================================================
// APP VIEW - Routing entre las dos pantallas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::{AppState, Screen};
use crate::views::{render_login, render_scanner};

/// Renderizar la pantalla activa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.current_screen() {
        Screen::Login => render_login(state),
        Screen::Scanner => render_scanner(state),
    }
}

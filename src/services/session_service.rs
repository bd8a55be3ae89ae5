// ============================================================================
// SESSION SERVICE - Ciclo de vida del token de sesión
// ============================================================================
// Un único par clave/valor en localStorage (token → string) más un timer
// one-shot de expiración. Los clones comparten el handle del timer.
//
// El timer NO se persiste: un reinicio de la app pierde el tiempo
// transcurrido y el token almacenado sigue siendo válido hasta el próximo
// logout explícito.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::utils::constants::TOKEN_STORAGE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Servicio de sesión inyectable: load/save/clear + timer de expiración
#[derive(Clone)]
pub struct SessionService {
    expiry_timer: Rc<RefCell<Option<Timeout>>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            expiry_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Persiste el token, pisando cualquier valor anterior. Debe completarse
    /// ANTES de navegar fuera del login.
    pub fn save(&self, token: &str) -> Result<(), String> {
        save_to_storage(TOKEN_STORAGE_KEY, &token.to_string())
    }

    /// Token almacenado, o None si no hay sesión. Se usa una vez al arrancar
    /// para decidir la pantalla inicial.
    pub fn load(&self) -> Option<String> {
        load_from_storage::<String>(TOKEN_STORAGE_KEY)
    }

    /// Elimina el token y cancela el timer de expiración si estaba armado.
    /// Se usa en logout explícito (así el timer no vuelve a limpiar después).
    pub fn clear(&self) -> Result<(), String> {
        self.cancel_expiry();
        remove_from_storage(TOKEN_STORAGE_KEY)
    }

    /// Arma el timer one-shot de expiración. Se rearma solo en login
    /// exitoso. Al disparar limpia el storage incondicionalmente y notifica
    /// al callback (que fuerza la navegación al login, sin importar la
    /// pantalla activa).
    pub fn arm_expiry<F>(&self, minutes: u32, on_expired: F)
    where
        F: Fn() + 'static,
    {
        self.cancel_expiry();

        let millis = minutes.saturating_mul(60_000);
        log::info!("⏱️ [SESSION] Timer de expiración armado: {} minutos", minutes);

        let timer_slot = self.expiry_timer.clone();
        let timeout = Timeout::new(millis, move || {
            log::warn!("⏱️ [SESSION] Sesión expirada, limpiando token...");
            if let Err(e) = remove_from_storage(TOKEN_STORAGE_KEY) {
                log::error!("❌ [SESSION] Error eliminando token: {}", e);
            }
            *timer_slot.borrow_mut() = None;
            on_expired();
        });

        *self.expiry_timer.borrow_mut() = Some(timeout);
    }

    /// Cancela el timer (drop del handle). No toca el storage.
    pub fn cancel_expiry(&self) {
        if let Some(timer) = self.expiry_timer.borrow_mut().take() {
            timer.cancel();
        }
    }

    pub fn has_armed_expiry(&self) -> bool {
        self.expiry_timer.borrow().is_some()
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_service_has_no_armed_timer() {
        let service = SessionService::new();
        assert!(!service.has_armed_expiry());
    }

    #[test]
    fn cancel_without_timer_is_a_noop() {
        let service = SessionService::new();
        service.cancel_expiry();
        assert!(!service.has_armed_expiry());
    }
}

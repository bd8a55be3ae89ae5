// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Mutaciones → notify_subscribers() → re-render completo en app.rs.
// El SessionService vive acá para que ambas pantallas compartan el mismo
// handle del timer de expiración.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::SessionService;
use crate::state::{AuthState, ScanState};

/// Pantalla activa. Dos pantallas componen todo el flujo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Scanner,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub screen: Rc<RefCell<Screen>>,
    pub auth: AuthState,
    pub scan: ScanState,
    pub session_service: SessionService,

    // Reactivity: callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Rc::new(RefCell::new(Screen::Login)),
            auth: AuthState::new(),
            scan: ScanState::new(),
            session_service: SessionService::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_screen(&self) -> Screen {
        *self.screen.borrow()
    }

    pub fn set_screen(&self, screen: Screen) {
        *self.screen.borrow_mut() = screen;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Login exitoso: el token ya fue persistido por el caller ANTES de
    /// navegar (si la persistencia fallara, el próximo arranque volvería al
    /// login incorrectamente).
    pub fn login_succeeded(&self, username: String, token: String) {
        self.auth.set_logged_in(true);
        self.auth.set_username(Some(username));
        self.auth.set_token(Some(token));
        self.scan.reset();
        self.set_screen(Screen::Scanner);
    }

    /// Sesión restaurada desde storage al arrancar. No se rearma el timer
    /// de expiración: el tiempo transcurrido se perdió con el proceso y el
    /// token queda válido hasta el próximo logout explícito.
    pub fn session_restored(&self, token: String) {
        self.auth.set_logged_in(true);
        self.auth.set_token(Some(token));
        self.scan.reset();
        self.set_screen(Screen::Scanner);
    }

    /// Logout explícito: limpia storage (y cancela el timer) y vuelve al login
    pub fn logout(&self) {
        if let Err(e) = self.session_service.clear() {
            log::error!("❌ [STATE] Error limpiando sesión: {}", e);
        }
        self.reset_to_login();
    }

    /// El timer de expiración disparó: el storage ya fue limpiado por el
    /// propio timer; acá solo se fuerza la navegación al login sin importar
    /// la pantalla activa.
    pub fn session_expired(&self) {
        self.reset_to_login();
    }

    fn reset_to_login(&self) {
        self.auth.logout();
        self.scan.reset();
        self.set_screen(Screen::Login);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PermissionStatus, ScanPhase};

    #[test]
    fn starts_unauthenticated_on_login_screen() {
        let state = AppState::new();
        assert_eq!(state.current_screen(), Screen::Login);
        assert!(!state.auth.get_logged_in());
        assert_eq!(state.auth.get_token(), None);
    }

    #[test]
    fn login_succeeded_navigates_with_token() {
        let state = AppState::new();
        state.login_succeeded("bob".to_string(), "tok123".to_string());

        assert_eq!(state.current_screen(), Screen::Scanner);
        assert_eq!(state.auth.get_token(), Some("tok123".to_string()));
        assert_eq!(state.auth.get_username(), Some("bob".to_string()));
    }

    #[test]
    fn expiry_forces_login_mid_scan() {
        let state = AppState::new();
        state.login_succeeded("bob".to_string(), "tok123".to_string());

        // Usuario a mitad de un escaneo
        state.scan.set_permission(PermissionStatus::Granted);
        state.scan.on_decode("12345".to_string());
        assert_eq!(
            state.scan.phase(),
            ScanPhase::ResultShown("12345".to_string())
        );

        state.session_expired();
        assert_eq!(state.current_screen(), Screen::Login);
        assert_eq!(state.auth.get_token(), None);
        assert_eq!(state.scan.phase(), ScanPhase::RequestingPermission);
    }

    #[test]
    fn subscribers_notified_on_demand() {
        let state = AppState::new();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || *hits.borrow_mut() += 1);
        }
        state.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(*hits.borrow(), 2);
    }
}

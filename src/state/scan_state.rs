// ============================================================================
// SCAN STATE - Máquina de estados del flujo de escaneo
// ============================================================================
// RequestingPermission → Scanning → ResultShown → (Scanning | enviado)
// La vista de cámara y la vista de resultado son mutuamente excluyentes:
// ambas derivan de la presencia/ausencia de scanned_data.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Permiso de cámara reportado por el navegador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Requesting,
    Granted,
    Denied,
}

/// Cámara frontal o trasera. No se persiste entre sesiones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }

    /// Valor que espera el companion JS
    pub fn as_str(self) -> &'static str {
        match self {
            CameraFacing::Back => "back",
            CameraFacing::Front => "front",
        }
    }
}

/// Fase derivada del flujo de escaneo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    RequestingPermission,
    Scanning,
    ResultShown(String),
}

/// Estado del flujo de escaneo
#[derive(Clone)]
pub struct ScanState {
    pub permission: Rc<RefCell<PermissionStatus>>,
    pub facing: Rc<RefCell<CameraFacing>>,
    pub scanned_data: Rc<RefCell<Option<String>>>,
    pub table_draft: Rc<RefCell<String>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            permission: Rc::new(RefCell::new(PermissionStatus::Requesting)),
            facing: Rc::new(RefCell::new(CameraFacing::Back)),
            scanned_data: Rc::new(RefCell::new(None)),
            table_draft: Rc::new(RefCell::new(String::new())),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    /// Fase actual, derivada del estado. Sin permiso no hay cámara ni
    /// resultado posible.
    pub fn phase(&self) -> ScanPhase {
        if *self.permission.borrow() != PermissionStatus::Granted {
            return ScanPhase::RequestingPermission;
        }
        match self.scanned_data.borrow().as_ref() {
            Some(data) => ScanPhase::ResultShown(data.clone()),
            None => ScanPhase::Scanning,
        }
    }

    pub fn set_permission(&self, status: PermissionStatus) {
        *self.permission.borrow_mut() = status;
    }

    /// Registra una decodificación de la cámara. Devuelve true si fue
    /// aceptada. Se ignora cuando el permiso no está concedido o cuando ya
    /// hay un resultado activo (el stream de decodificación es continuo y
    /// dispararía duplicados).
    pub fn on_decode(&self, data: String) -> bool {
        if *self.permission.borrow() != PermissionStatus::Granted {
            return false;
        }
        let mut scanned = self.scanned_data.borrow_mut();
        if scanned.is_some() {
            return false;
        }
        *scanned = Some(data);
        true
    }

    /// Descartar el resultado y volver a escanear
    pub fn discard(&self) {
        *self.scanned_data.borrow_mut() = None;
        *self.submitting.borrow_mut() = false;
    }

    /// Limpieza tras un envío exitoso: resultado y número de mesa
    pub fn clear_after_submit(&self) {
        *self.scanned_data.borrow_mut() = None;
        *self.table_draft.borrow_mut() = String::new();
        *self.submitting.borrow_mut() = false;
    }

    pub fn toggle_facing(&self) -> CameraFacing {
        let next = self.facing.borrow().toggled();
        *self.facing.borrow_mut() = next;
        next
    }

    /// Reset completo (logout / expiración de sesión)
    pub fn reset(&self) {
        *self.permission.borrow_mut() = PermissionStatus::Requesting;
        *self.facing.borrow_mut() = CameraFacing::Back;
        self.clear_after_submit();
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ignored_without_permission() {
        let state = ScanState::new();
        assert!(!state.on_decode("12345".to_string()));
        state.set_permission(PermissionStatus::Denied);
        assert!(!state.on_decode("12345".to_string()));
        assert_eq!(state.phase(), ScanPhase::RequestingPermission);
    }

    #[test]
    fn first_decode_wins_until_discarded() {
        let state = ScanState::new();
        state.set_permission(PermissionStatus::Granted);
        assert!(state.on_decode("primero".to_string()));
        // El stream continuo sigue emitiendo: se ignora
        assert!(!state.on_decode("segundo".to_string()));
        assert_eq!(state.phase(), ScanPhase::ResultShown("primero".to_string()));

        state.discard();
        assert_eq!(state.phase(), ScanPhase::Scanning);
        assert!(state.on_decode("segundo".to_string()));
    }

    #[test]
    fn clear_after_submit_clears_result_and_table() {
        let state = ScanState::new();
        state.set_permission(PermissionStatus::Granted);
        state.on_decode("12345".to_string());
        *state.table_draft.borrow_mut() = "7".to_string();
        *state.submitting.borrow_mut() = true;

        state.clear_after_submit();
        assert_eq!(state.phase(), ScanPhase::Scanning);
        assert!(state.table_draft.borrow().is_empty());
        assert!(!*state.submitting.borrow());
    }

    #[test]
    fn failed_submit_keeps_result() {
        let state = ScanState::new();
        state.set_permission(PermissionStatus::Granted);
        state.on_decode("12345".to_string());
        // En fallo solo se baja el flag de envío, el resultado queda
        *state.submitting.borrow_mut() = false;
        assert_eq!(state.phase(), ScanPhase::ResultShown("12345".to_string()));
    }

    #[test]
    fn facing_toggle_flips_without_touching_result() {
        let state = ScanState::new();
        state.set_permission(PermissionStatus::Granted);
        state.on_decode("dato".to_string());

        assert_eq!(state.toggle_facing(), CameraFacing::Front);
        assert_eq!(state.toggle_facing(), CameraFacing::Back);
        assert_eq!(state.phase(), ScanPhase::ResultShown("dato".to_string()));
    }
}

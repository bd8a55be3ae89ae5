// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub username: Rc<RefCell<Option<String>>>,
    pub token: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            username: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        *self.is_logged_in.borrow_mut() = logged_in;
    }

    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn set_username(&self, username: Option<String>) {
        *self.username.borrow_mut() = username;
    }

    pub fn get_username(&self) -> Option<String> {
        self.username.borrow().clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.set_logged_in(false);
        self.set_username(None);
        self.set_token(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

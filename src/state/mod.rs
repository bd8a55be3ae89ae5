pub mod app_state;
pub mod auth_state;
pub mod scan_state;

pub use app_state::{AppState, Screen};
pub use auth_state::AuthState;
pub use scan_state::{CameraFacing, PermissionStatus, ScanPhase, ScanState};

pub mod login_viewmodel;
pub mod scan_viewmodel;

pub use login_viewmodel::{validate_credentials, LoginViewModel};
pub use scan_viewmodel::{prepare_submission, PreparedSubmission, ScanViewModel};

// Utils compartidos

pub mod camera_ffi;
pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::*;

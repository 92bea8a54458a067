//! CLI command implementations
//!
//! Commands return process exit codes:
//! - `0` success
//! - `1` partial success (some log groups failed or stayed rate limited)
//! - `2` configuration error
//! - `4` AWS request error
//! - `5` fatal error

pub mod export;
pub mod init;
pub mod status;
pub mod validate;

use crate::domain::ExporterError;

/// Map an error that stopped a command to its exit code
pub fn exit_code_for(error: &ExporterError) -> i32 {
    match error {
        ExporterError::Configuration(_) => 2,
        ExporterError::ParameterStore(_) | ExporterError::LogService(_) => 4,
        _ => 5,
    }
}

/// Result alias used across the crate.
///
/// Typed failures are raised as [`crate::shared::error::ToolError`] and carried
/// as `anyhow::Error` so callers can attach context on the way up.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

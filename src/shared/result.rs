/// Result alias used by the loading, configuration and output layers.
///
/// The engine services are infallible and do not use it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

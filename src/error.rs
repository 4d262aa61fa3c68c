//! src/error.rs

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Failure modes of the subscription call. Only `Validation` carries a message
/// that is safe to show to the user.
#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{message}")]
    Validation { message: String },
    #[error("Failed to submit the subscription request")]
    Request(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

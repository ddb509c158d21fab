use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid contrast parameter: {arg}={value}. Must be a finite number")]
    InvalidContrast { arg: &'static str, value: f32 },

    #[error(transparent)]
    Trimbox(#[from] trimbox::Error),
}

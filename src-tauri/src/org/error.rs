//! Org Layer - Errors

use thiserror::Error;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failures talking to the org. `Display` is what the user ends up seeing.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Connexion non configurée : {0}")]
    NotConfigured(&'static str),
    #[error("Identifiant invalide : {0}")]
    InvalidId(String),
    #[error("{0}")]
    Api(String),
    #[error("Service injoignable : {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Réponse inattendue : {0}")]
    Decode(String),
}

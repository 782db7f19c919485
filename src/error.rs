use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcoPointError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Photo error: {0}")]
    Photo(String),
}

impl From<gloo_net::Error> for EcoPointError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => EcoPointError::Decode(e.to_string()),
            other => EcoPointError::Network(other.to_string()),
        }
    }
}

impl From<EcoPointError> for String {
    fn from(err: EcoPointError) -> Self {
        err.to_string()
    }
}

/// Render a thrown JS value for logs and error messages.
pub fn js_error(value: wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

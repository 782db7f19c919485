//! Asset path resolution and data URL handling.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

use crate::error::EcoPointError;
use crate::models::Product;

/// Turn a stored asset path into something an `<img>` can load.
///
/// Server paths use backslashes (`uploads\photos\a.png`) and are relative to
/// the API host. Absolute URLs, data URLs and bundled `/images/` assets pass
/// through untouched.
pub fn resolve_asset_url(base: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if is_passthrough(raw) {
        return Some(raw.to_string());
    }

    let normalized = raw.replace('\\', "/");
    let relative = normalized.trim_start_matches('/');
    match base.join(relative) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Some(format!("{}/{}", base.as_str().trim_end_matches('/'), relative)),
    }
}

/// Rewrite every product image in place. Empty images stay empty.
pub fn resolve_product_images(base: &Url, products: &mut [Product]) {
    for product in products {
        if let Some(resolved) = resolve_asset_url(base, &product.image) {
            product.image = resolved;
        }
    }
}

fn is_passthrough(raw: &str) -> bool {
    raw.starts_with("http://")
        || raw.starts_with("https://")
        || raw.starts_with("data:")
        || raw.starts_with("/images/")
}

pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 data URL into its media type and decoded bytes.
pub fn decode_data_url(value: &str) -> Result<(String, Vec<u8>), EcoPointError> {
    let rest = value
        .strip_prefix("data:")
        .ok_or_else(|| EcoPointError::Photo("Not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| EcoPointError::Photo("Data URL has no payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| EcoPointError::Photo("Only base64 data URLs are supported".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| EcoPointError::Photo(format!("Invalid base64 payload: {}", e)))?;
    let mime = if mime.is_empty() { "text/plain" } else { mime };
    Ok((mime.to_string(), bytes))
}

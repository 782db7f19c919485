//! REST client for the EcoPoint backend.

pub mod paths;

use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

use crate::error::{js_error, EcoPointError};
use crate::models::{Envelope, Product, ProfileRecord};
use crate::profile::{ProfilePayload, PHOTO_FILE_NAME};

const PROFILE_PATH: &str = "api/profile";
const WASTE_PATH: &str = "api/waste";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<String, EcoPointError> {
        self.base
            .join(path)
            .map(|u| u.to_string())
            .map_err(|e| EcoPointError::Config(format!("Bad endpoint '{}': {}", path, e)))
    }

    /// Profile of the signed-in user (scoped by the session cookie).
    pub async fn fetch_profile_data(&self) -> Result<ProfileRecord, EcoPointError> {
        let url = self.endpoint(PROFILE_PATH)?;
        debug!("GET {}", url);
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_profile(&self, payload: &ProfilePayload) -> Result<(), EcoPointError> {
        let form = FormData::new().map_err(|e| EcoPointError::Network(js_error(e)))?;
        for (name, value) in payload.text_fields() {
            form.append_with_str(name, value)
                .map_err(|e| EcoPointError::Network(js_error(e)))?;
        }

        if let Some(photo) = &payload.photo {
            let (mime, bytes) = self.photo_bytes(photo).await?;
            let blob = bytes_to_blob(&bytes, &mime)?;
            form.append_with_blob_and_filename("photo", &blob, PHOTO_FILE_NAME)
                .map_err(|e| EcoPointError::Photo(js_error(e)))?;
        }

        let url = self.endpoint(PROFILE_PATH)?;
        info!("PUT {} (photo: {})", url, payload.photo.is_some());
        let response = Request::put(&url)
            .credentials(RequestCredentials::Include)
            .body(form)?
            .send()
            .await?;
        ensure_ok(&response)?;
        Ok(())
    }

    pub async fn fetch_all_waste(&self) -> Result<Vec<Product>, EcoPointError> {
        let url = self.endpoint(WASTE_PATH)?;
        debug!("GET {}", url);
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        let mut products: Vec<Product> = read_json(response).await?;
        paths::resolve_product_images(&self.base, &mut products);
        Ok(products)
    }

    /// Bytes of the current photo: decoded in place for data URLs, fetched
    /// otherwise.
    async fn photo_bytes(&self, photo: &str) -> Result<(String, Vec<u8>), EcoPointError> {
        if paths::is_data_url(photo) {
            return paths::decode_data_url(photo);
        }

        let response = Request::get(photo)
            .send()
            .await
            .map_err(|e| EcoPointError::Photo(e.to_string()))?;
        ensure_ok(&response)?;
        let mime = response
            .headers()
            .get("content-type")
            .unwrap_or_else(|| "image/png".to_string());
        let bytes = response
            .binary()
            .await
            .map_err(|e| EcoPointError::Photo(e.to_string()))?;
        Ok((mime, bytes))
    }
}

fn ensure_ok(response: &Response) -> Result<(), EcoPointError> {
    if response.ok() {
        Ok(())
    } else {
        Err(EcoPointError::Status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, EcoPointError> {
    ensure_ok(&response)?;
    let envelope: Envelope<T> = response.json().await?;
    Ok(envelope.into_inner())
}

fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<Blob, EcoPointError> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| EcoPointError::Photo(js_error(e)))
}

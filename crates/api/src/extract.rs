//! Request extraction for the create/update endpoints.
//!
//! Content endpoints accept the same payload two ways: a plain JSON body, or
//! `multipart/form-data` carrying the JSON in a `data` text field alongside
//! any file fields. [`JsonOrMultipart`] branches on the Content-Type so a
//! handler sees one payload type either way.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// A file received in a multipart request, buffered in memory.
#[derive(Debug)]
pub struct UploadedFile {
    /// The multipart field name the file arrived under (e.g. `"poster"`).
    pub field: String,
    /// The client-supplied filename, used only for its extension.
    pub filename: String,
    /// The raw file bytes.
    pub data: Vec<u8>,
}

/// A deserialized payload plus any uploaded files.
///
/// For JSON requests `files` is always empty. For multipart requests the
/// payload comes from the `data` text field; a missing `data` field is
/// treated as `{}` so a file-only upload still deserializes (every create
/// payload is all-Option for exactly this reason).
#[derive(Debug)]
pub struct JsonOrMultipart<T> {
    pub payload: T,
    pub files: Vec<UploadedFile>,
}

impl<T> JsonOrMultipart<T> {
    /// The first uploaded file for a given field name, if any.
    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field == field)
    }
}

impl<T> FromRequest<AppState> for JsonOrMultipart<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
            return Ok(Self {
                payload,
                files: Vec::new(),
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut data_json: Option<String> = None;
        let mut files = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            let filename = field.file_name().map(|f| f.to_string());

            if let Some(filename) = filename {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push(UploadedFile {
                    field: name,
                    filename,
                    data: data.to_vec(),
                });
            } else if name == "data" {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                data_json = Some(text);
            }
            // other text fields are ignored
        }

        let payload: T = serde_json::from_str(data_json.as_deref().unwrap_or("{}"))
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON in 'data' field: {e}")))?;

        Ok(Self { payload, files })
    }
}

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    ApiReply, LoadedPost, PostListing, PreviewRequest, PreviewResponse, SavePostRequest,
    SavePostResponse, UploadResponse, UPLOAD_FIELD,
};

use crate::config::config;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// `{ "error": "..." }` from the server
    #[error("{0}")]
    Application(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {status} ({detail})")]
    Http { status: u16, detail: String },
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server messages are shown verbatim; everything else gets `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Application(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Interpret a response body. A structured `error` wins regardless of
/// status; a non-2xx without one is an HTTP error.
fn decode_reply<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<ApiReply<T>>(body) {
        Ok(ApiReply::Failure { error }) => Err(ApiError::Application(error)),
        Ok(ApiReply::Success(value)) if ok => Ok(value),
        Ok(ApiReply::Success(_)) => Err(ApiError::Http {
            status,
            detail: body.trim().to_string(),
        }),
        Err(_) if !ok => Err(ApiError::Http {
            status,
            detail: body.trim().to_string(),
        }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_reply(status, ok, &body)
}

pub async fn render_preview(content: &str) -> Result<String, ApiError> {
    let url = config().endpoint("/preview");
    let request = PreviewRequest {
        content: content.to_string(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let data: PreviewResponse = read_reply(response).await?;
    Ok(data.html)
}

pub async fn save_post(request: &SavePostRequest) -> Result<SavePostResponse, ApiError> {
    let url = config().endpoint("/save");

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_reply(response).await
}

pub async fn list_posts() -> Result<PostListing, ApiError> {
    let url = config().endpoint("/posts");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_reply(response).await
}

pub async fn load_post(filename: &str) -> Result<LoadedPost, ApiError> {
    let encoded = js_sys::encode_uri_component(filename)
        .as_string()
        .unwrap_or_else(|| filename.to_string());
    let url = config().endpoint(&format!("/load/{encoded}"));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_reply(response).await
}

/// Upload image bytes as multipart form data.
pub async fn upload_image(filename: &str, bytes: &[u8]) -> Result<UploadResponse, ApiError> {
    let url = config().endpoint("/upload");
    let form = build_upload_form(filename, bytes)
        .map_err(|e| ApiError::Transport(format!("Failed to build form: {e:?}")))?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_reply(response).await
}

fn build_upload_form(
    filename: &str,
    bytes: &[u8],
) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, filename)?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_on_bad_request_is_application_error() {
        let result: Result<SavePostResponse, _> =
            decode_reply(400, false, r#"{"error": "Title is required"}"#);
        assert_eq!(
            result,
            Err(ApiError::Application("Title is required".to_string()))
        );
    }

    #[test]
    fn error_body_on_ok_status_is_still_failure() {
        let result: Result<LoadedPost, _> = decode_reply(200, true, r#"{"error": "nope"}"#);
        assert_eq!(result, Err(ApiError::Application("nope".to_string())));
    }

    #[test]
    fn unstructured_server_error_keeps_status() {
        let result: Result<PostListing, _> = decode_reply(500, false, "boom");
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 500,
                detail: "boom".to_string()
            })
        );
    }

    #[test]
    fn garbage_on_ok_status_is_decode_error() {
        let result: Result<PreviewResponse, _> = decode_reply(200, true, "<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn preview_without_html_is_empty() {
        let result: Result<PreviewResponse, _> = decode_reply(200, true, "{}");
        assert_eq!(result.unwrap().html, "");
    }

    #[test]
    fn user_message_falls_back_for_transport_errors() {
        let err = ApiError::Transport("offline".to_string());
        assert_eq!(err.user_message("Failed to save post"), "Failed to save post");
        let err = ApiError::Application("Content is required".to_string());
        assert_eq!(err.user_message("Failed to save post"), "Content is required");
    }
}

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Failure modes of a single file fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no window available")]
    NoWindow,
    #[error("could not build request for {url}: {message}")]
    Request { url: String, message: String },
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET a same-origin resource and return its body as raw bytes.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: describe(&e),
    })?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network {
            url: url.to_string(),
            message: describe(&e),
        })?;

    let response: Response = response_value.dyn_into().map_err(|e| FetchError::Network {
        url: url.to_string(),
        message: describe(&e),
    })?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body_promise = response.array_buffer().map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: describe(&e),
    })?;
    let buffer = JsFuture::from(body_promise).await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: describe(&e),
    })?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

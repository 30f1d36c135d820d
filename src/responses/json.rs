// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_string(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// Stamp the allowed origin on a response, if one is configured.
pub fn with_cors(mut resp: Response, origin: Option<&str>) -> Response {
    if let Some(value) = origin.and_then(|o| o.parse().ok()) {
        resp.headers_mut()
            .insert("access-control-allow-origin", value);
    }
    resp
}

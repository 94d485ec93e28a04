#![allow(dead_code)]

pub mod temp_db;

use actix_web::body::to_bytes;
use actix_web::dev::ServiceResponse;

/// Read a response body as UTF-8 text.
pub async fn body_text(resp: ServiceResponse) -> String {
    let bytes = to_bytes(resp.into_body()).await.expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

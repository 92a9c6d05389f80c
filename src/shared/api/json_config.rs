// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig};

/// Malformed or mistyped JSON bodies answer with the regular error envelope
/// instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("INVALID_PAYLOAD", &message))
            .into()
    })
}

/// An id segment that is not a UUID cannot name an existing row, so it gets
/// the same 404 envelope as a missing topic or entry.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        let response = match req.match_pattern() {
            Some(pattern) if pattern.contains("{entry_id}") => {
                ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
            }
            _ => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        };
        InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, post, test, web, App, Responder};
    use serde::Deserialize;
    use serde_json::Value;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        text: String,
    }

    #[post("/echo")]
    async fn echo(_payload: web::Json<Payload>) -> impl Responder {
        ApiResponse::success("ok")
    }

    #[get("/topics/{topic_id}")]
    async fn show_topic(_path: web::Path<Uuid>) -> impl Responder {
        ApiResponse::success("ok")
    }

    #[get("/entries/{entry_id}")]
    async fn show_entry(_path: web::Path<Uuid>) -> impl Responder {
        ApiResponse::success("ok")
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(custom_path_config())
                .service(show_topic)
                .service(show_entry),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn malformed_json_is_wrapped_in_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"text\": 42}")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "INVALID_PAYLOAD");
    }

    #[actix_web::test]
    async fn unparsable_topic_id_is_topic_not_found() {
        let (status, json) = get_json("/topics/42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "TOPIC_NOT_FOUND");
        assert_eq!(json["error"]["message"], "Topic not found");
    }

    #[actix_web::test]
    async fn unparsable_entry_id_is_entry_not_found() {
        let (status, json) = get_json("/entries/not-a-uuid").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "ENTRY_NOT_FOUND");
    }
}

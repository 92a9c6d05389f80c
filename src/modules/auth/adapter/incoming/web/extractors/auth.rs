use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::{FutureExt, LocalBoxFuture};
use tracing::error;

use crate::auth::application::{
    domain::entities::UserId,
    services::session_guard::{SessionError, SessionGuard},
};
use crate::shared::api::ApiResponse;

/// A caller that passed the `require_login` gate. Handlers receive the
/// identity explicitly through this parameter.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_staff: bool,
    /// Raw bearer token, kept so logout can revoke it.
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn session_error_response(err: &SessionError) -> HttpResponse {
    match err {
        SessionError::InvalidToken(_) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        SessionError::WrongTokenType => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        SessionError::Revoked => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Token has been revoked")
        }
        SessionError::StoreUnavailable(e) => {
            error!(error = %e, "Token blacklist unavailable");
            ApiResponse::internal_error()
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let guard = req.app_data::<web::Data<SessionGuard>>().cloned();
        let token = extract_token_from_header(req);

        async move {
            let Some(guard) = guard else {
                error!("SessionGuard is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            match guard.authenticate(&token).await {
                Ok(session) => Ok(AuthenticatedUser {
                    user_id: session.user_id,
                    is_staff: session.is_staff,
                    token,
                }),
                Err(e) => Err(create_api_error(session_error_response(&e))),
            }
        }
        .boxed_local()
    }
}

/// An [`AuthenticatedUser`] whose token carries the staff flag.
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub user_id: UserId,
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        async move {
            let user = authenticated.await?;
            if !user.is_staff {
                return Err(create_api_error(ApiResponse::forbidden(
                    "STAFF_ONLY",
                    "Staff access required",
                )));
            }

            Ok(StaffUser {
                user_id: user.user_id,
            })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::token_hasher::hash_token;
    use crate::tests::support::auth_helper::{
        bearer, session_guard, InMemoryTokenRepository, StubTokenProvider,
    };
    use actix_web::{get, http::StatusCode, test, App, HttpResponse, Responder};
    use serde_json::Value;
    use uuid::Uuid;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    #[get("/staff")]
    async fn staff_only(user: StaffUser) -> impl Responder {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    async fn call(
        guard: SessionGuard,
        uri: &str,
        auth: Option<String>,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(guard))
                .service(whoami)
                .service(staff_only),
        )
        .await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some(value) = auth {
            req = req.insert_header(("Authorization", value));
        }
        test::call_service(&app, req.to_request()).await
    }

    async fn error_code(resp: actix_web::dev::ServiceResponse) -> String {
        let body: Value = test::read_body_json(resp).await;
        body["error"]["code"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn valid_token_yields_identity() {
        let user_id = Uuid::new_v4();
        let resp = call(
            session_guard(StubTokenProvider::access(user_id)),
            "/whoami",
            Some(bearer("token")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, user_id.to_string());
    }

    #[actix_web::test]
    async fn missing_header_is_401() {
        let resp = call(
            session_guard(StubTokenProvider::access(Uuid::new_v4())),
            "/whoami",
            None,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_401() {
        let resp = call(
            session_guard(StubTokenProvider::access(Uuid::new_v4())),
            "/whoami",
            Some("Basic YWRhOnB3".to_string()),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn invalid_token_is_401() {
        let resp = call(
            session_guard(StubTokenProvider::invalid()),
            "/whoami",
            Some(bearer("token")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn refresh_token_is_rejected() {
        let resp = call(
            session_guard(StubTokenProvider::refresh(Uuid::new_v4())),
            "/whoami",
            Some(bearer("token")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn revoked_token_is_rejected() {
        let blacklist = InMemoryTokenRepository::default();
        blacklist.revoke(&hash_token("token"));
        let guard = SessionGuard::new(
            std::sync::Arc::new(StubTokenProvider::access(Uuid::new_v4())),
            std::sync::Arc::new(blacklist),
        );

        let resp = call(guard, "/whoami", Some(bearer("token"))).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(resp).await, "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn non_staff_is_forbidden_on_staff_route() {
        let resp = call(
            session_guard(StubTokenProvider::access(Uuid::new_v4())),
            "/staff",
            Some(bearer("token")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(error_code(resp).await, "STAFF_ONLY");
    }

    #[actix_web::test]
    async fn staff_passes_staff_route() {
        let resp = call(
            session_guard(StubTokenProvider::staff(Uuid::new_v4())),
            "/staff",
            Some(bearer("token")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_guard_is_500() {
        let app = test::init_service(App::new().service(whoami)).await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer("token")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

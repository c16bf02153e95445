//! Authorization gate integration tests
//!
//! Drives the middleware through a small Actix app with real makers.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::{App, HttpResponse, ResponseError, web};
    use bank_token::utils::error::ErrorResponse;
    use bank_token::{AuthError, AuthPayload, MakerKind, TokenError};

    use crate::common::test_state;

    /// Mirrors an account lookup that must belong to the caller
    async fn get_account(
        auth: AuthPayload,
        owner: web::Path<String>,
    ) -> Result<HttpResponse, AuthError> {
        auth.ensure_owner(&owner)?;
        Ok(HttpResponse::Ok().body(auth.subject().to_string()))
    }

    macro_rules! gated_app {
        ($state:expr) => {
            actix_test::init_service(
                App::new()
                    .wrap($state.auth_middleware())
                    .route("/accounts/{owner}", web::get().to(get_account)),
            )
            .await
        };
    }

    fn status_and_code(err: &actix_web::Error) -> (StatusCode, String) {
        let response = err.as_response_error();
        let code = err
            .as_error::<AuthError>()
            .map(|e| e.code().to_string())
            .unwrap_or_default();
        (response.status_code(), code)
    }

    #[actix_web::test]
    async fn test_valid_bearer_token_reaches_handler() {
        for kind in [MakerKind::Jwt, MakerKind::Sealed] {
            let state = test_state(kind);
            let app = gated_app!(state);
            let login = state.issue_access_token("alice").unwrap();

            let req = actix_test::TestRequest::get()
                .uri("/accounts/alice")
                .insert_header(("Authorization", format!("Bearer {}", login.access_token)))
                .to_request();
            let resp = actix_test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "{kind}");
            assert_eq!(actix_test::read_body(resp).await, web::Bytes::from_static(b"alice"));
        }
    }

    #[actix_web::test]
    async fn test_other_principal_is_not_owner() {
        let state = test_state(MakerKind::Sealed);
        let app = gated_app!(state);
        let login = state.issue_access_token("alice").unwrap();

        let req = actix_test::TestRequest::get()
            .uri("/accounts/bob")
            .insert_header(("Authorization", format!("bearer {}", login.access_token)))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = actix_test::read_body_json(resp).await;
        assert_eq!(body.error.code, "NOT_OWNER");
    }

    #[actix_web::test]
    async fn test_basic_scheme_rejected() {
        let state = test_state(MakerKind::Jwt);
        let app = gated_app!(state);

        let req = actix_test::TestRequest::get()
            .uri("/accounts/alice")
            .insert_header(("Authorization", "Basic xyz"))
            .to_request();
        let err = actix_test::try_call_service(&app, req).await.unwrap_err();

        assert_eq!(
            status_and_code(&err),
            (StatusCode::UNAUTHORIZED, "UNSUPPORTED_SCHEME".to_string())
        );
    }

    #[actix_web::test]
    async fn test_missing_header_is_distinct() {
        let state = test_state(MakerKind::Jwt);
        let app = gated_app!(state);

        let req = actix_test::TestRequest::get().uri("/accounts/alice").to_request();
        let err = actix_test::try_call_service(&app, req).await.unwrap_err();

        assert_eq!(
            status_and_code(&err),
            (StatusCode::UNAUTHORIZED, "MISSING_CREDENTIAL".to_string())
        );
    }

    #[actix_web::test]
    async fn test_malformed_header_rejected() {
        let state = test_state(MakerKind::Sealed);
        let app = gated_app!(state);
        let login = state.issue_access_token("alice").unwrap();

        let req = actix_test::TestRequest::get()
            .uri("/accounts/alice")
            .insert_header(("Authorization", format!("Bearer {} extra", login.access_token)))
            .to_request();
        let err = actix_test::try_call_service(&app, req).await.unwrap_err();

        assert_eq!(
            status_and_code(&err),
            (StatusCode::UNAUTHORIZED, "MALFORMED_CREDENTIAL".to_string())
        );
    }

    #[actix_web::test]
    async fn test_token_from_other_maker_rejected() {
        let jwt_state = test_state(MakerKind::Jwt);
        let sealed_state = test_state(MakerKind::Sealed);
        let app = gated_app!(sealed_state);
        let login = jwt_state.issue_access_token("alice").unwrap();

        let req = actix_test::TestRequest::get()
            .uri("/accounts/alice")
            .insert_header(("Authorization", format!("Bearer {}", login.access_token)))
            .to_request();
        let err = actix_test::try_call_service(&app, req).await.unwrap_err();

        assert_eq!(
            status_and_code(&err),
            (StatusCode::UNAUTHORIZED, "TOKEN_INVALID".to_string())
        );
    }

    #[test]
    fn test_expired_and_invalid_map_to_same_status() {
        let expired = AuthError::from(TokenError::Expired);
        let invalid = AuthError::from(TokenError::Invalid);

        assert_eq!(expired.status_code(), invalid.status_code());
        assert_ne!(expired.code(), invalid.code());
    }
}

// End-to-end registration against a real HTTP server on loopback
#[cfg(feature = "ssr")]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode, header};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use crate::core::session::{AUTH_TOKEN_KEY, EMAIL_KEY, NAME_KEY};
    use crate::core::transport::ReqwestTransport;
    use crate::core::{
        Config, Field, LoginFlag, MemorySessionStore, RegistrationController, RegistrationError,
        SessionContext, SubmitOutcome,
    };

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    async fn register_handler(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(payload): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push((content_type, payload.clone()));

        let email = payload["email"].as_str().unwrap_or_default();
        if email == "taken@b.com" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Email already registered" })),
            );
        }

        (
            StatusCode::OK,
            Json(json!({
                "authtoken": format!("token-for-{}", payload["firstName"].as_str().unwrap_or_default()),
                "email": email.to_lowercase(),
            })),
        )
    }

    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn auth_backend() -> (String, Seen) {
        let seen = Seen::default();
        let app = Router::new()
            .route("/api/auth/register", post(register_handler))
            .with_state(seen.clone());
        (spawn_backend(app).await, seen)
    }

    struct Harness {
        store: MemorySessionStore,
        login: LoginFlag,
        visited: Arc<Mutex<Vec<String>>>,
    }

    fn controller_for(
        backend_url: &str,
    ) -> (
        RegistrationController<
            ReqwestTransport,
            MemorySessionStore,
            LoginFlag,
            impl Fn(&str) + use<>,
        >,
        Harness,
    ) {
        let store = MemorySessionStore::new();
        let login = LoginFlag::new();
        let visited = Arc::new(Mutex::new(Vec::new()));
        let navigator = {
            let visited = Arc::clone(&visited);
            move |route: &str| visited.lock().unwrap().push(route.to_string())
        };

        let controller = RegistrationController::new(
            &Config::new(backend_url),
            ReqwestTransport::new(),
            SessionContext::new(store.clone(), login.clone()),
            navigator,
        );

        (
            controller,
            Harness {
                store,
                login,
                visited,
            },
        )
    }

    #[tokio::test]
    async fn test_register_over_http_establishes_session() {
        let (url, seen) = auth_backend().await;
        let (controller, harness) = controller_for(&url);

        controller.update_field(Field::FirstName, "Jane");
        controller.update_field(Field::LastName, "Doe");
        controller.update_field(Field::Email, "Jane@B.com");
        controller.update_field(Field::Password, "s3cret");

        let outcome = controller.submit().await;

        assert!(outcome.is_registered());
        assert_eq!(
            harness.store.get(AUTH_TOKEN_KEY).as_deref(),
            Some("token-for-Jane")
        );
        assert_eq!(harness.store.get(NAME_KEY).as_deref(), Some("Jane"));
        // The canonical email comes from the response, not the form
        assert_eq!(harness.store.get(EMAIL_KEY).as_deref(), Some("jane@b.com"));
        assert!(harness.login.is_logged_in());
        assert_eq!(*harness.visited.lock().unwrap(), vec!["/app".to_string()]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("application/json"));
        assert_eq!(
            seen[0].1,
            json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "Jane@B.com",
                "password": "s3cret",
            })
        );
    }

    #[tokio::test]
    async fn test_rejection_body_is_used_despite_error_status() {
        let (url, _) = auth_backend().await;
        let (controller, harness) = controller_for(&url);
        controller.update_field(Field::Email, "taken@b.com");

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Email already registered".to_string())
        );
        assert_eq!(controller.error_message(), "Email already registered");
        assert!(harness.store.is_empty());
        assert!(harness.visited.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_silent_failure() {
        let app = Router::new().route(
            "/api/auth/register",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        );
        let url = spawn_backend(app).await;
        let (controller, harness) = controller_for(&url);

        let outcome = controller.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(RegistrationError::Parse(_))
        ));
        assert_eq!(controller.error_message(), "");
        assert!(harness.store.is_empty());
        assert!(!harness.login.is_logged_in());
    }

    #[tokio::test]
    async fn test_connection_refused_is_silent_failure() {
        // Grab a free port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}", addr);
        let (controller, harness) = controller_for(&url);
        drop(url);

        let outcome = controller.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(RegistrationError::Network(_))
        ));
        assert_eq!(controller.error_message(), "");
        assert!(harness.store.is_empty());
        assert!(harness.visited.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_body_is_parse_failure() {
        // axum answers 404 with an empty body
        let url = spawn_backend(Router::new()).await;
        let (controller, _) = controller_for(&url);

        let outcome = controller.submit().await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(RegistrationError::Parse(_))
        ));
    }
}

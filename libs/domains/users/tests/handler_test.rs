//! Handler tests for the users domain
//!
//! These drive the routers through a real cookie session layer with in-memory
//! gateways:
//! - Request deserialization and error envelopes
//! - Session cookie round-trips (sign-in, one-shot notices)
//! - Member and admin authorization

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum_helpers::create_session_layer;
use core_config::session::SessionConfig;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const PASSWORD: &str = "Abcdef12";

struct TestApp {
    router: Router,
    users: InMemoryUserRepository,
}

impl TestApp {
    fn new() -> Self {
        let users = InMemoryUserRepository::new();
        let policy = RolePolicy::default();

        let router = handlers::router(UserService::new(users.clone(), policy))
            .merge(handlers::role_router(
                RoleService::new(InMemoryRoleRepository::seeded()),
                policy,
            ))
            .layer(create_session_layer(&SessionConfig::default()));

        Self { router, users }
    }

    async fn seed_user(&self, email: &str, role_id: i32) -> User {
        let service = UserService::new(self.users.clone(), RolePolicy::default());
        service
            .create_user(
                NewUser {
                    email: email.to_string(),
                    password: PASSWORD.to_string(),
                    first_name: "Test".to_string(),
                    last_name: "User".to_string(),
                    role_id: Some(role_id),
                },
                PASSWORD,
            )
            .await
            .unwrap()
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Signs in and returns the session cookie
    async fn login(&self, email: &str) -> String {
        let response = self
            .send(
                "POST",
                "/auth/login",
                None,
                Some(json!({ "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response).expect("login sets the session cookie")
    }
}

fn session_cookie(response: &Response) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    raw.split(';').next().map(str::to_string)
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": PASSWORD,
        "confirm_password": PASSWORD,
        "first_name": "John",
        "last_name": "Doe"
    })
}

#[tokio::test]
async fn test_register_login_and_read_notice_once() {
    let app = TestApp::new();

    let response = app
        .send("POST", "/auth/register", None, Some(register_body("john@example.com")))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie(&response).expect("notice stored in session");
    let created = json_body(response).await;
    assert_eq!(created["role_id"], 1);
    assert!(created.get("password_hash").is_none());

    let response = app
        .send(
            "POST",
            "/auth/login",
            Some(&cookie),
            Some(json!({ "email": "john@example.com", "password": PASSWORD })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).expect("session id is cycled on login");

    let dashboard = json_body(app.send("GET", "/dashboard", Some(&cookie), None).await).await;
    assert_eq!(dashboard["principal"]["email"], "john@example.com");
    assert_eq!(dashboard["notices"][0]["kind"], "success");

    let again = json_body(app.send("GET", "/dashboard", Some(&cookie), None).await).await;
    assert_eq!(again["notices"], json!([]));
}

#[tokio::test]
async fn test_register_mismatched_passwords() {
    let app = TestApp::new();
    let mut body = register_body("john@example.com");
    body["confirm_password"] = json!("Abcdef13");

    let response = app.send("POST", "/auth/register", None, Some(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["type"], "PASSWORDS_DO_NOT_MATCH");
    assert_eq!(body["error"]["message"], "The passwords do not match.");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;

    let response = app
        .send("POST", "/auth/register", None, Some(register_body("john@example.com")))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["error"]["type"],
        "EMAIL_ALREADY_EXISTS"
    );
}

#[tokio::test]
async fn test_login_wrong_password_is_generic() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;

    for email in ["john@example.com", "nobody@example.com"] {
        let response = app
            .send(
                "POST",
                "/auth/login",
                None,
                Some(json!({ "email": email, "password": "Wrong1234" })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response).await["error"]["type"],
            "INVALID_CREDENTIALS"
        );
    }
}

#[tokio::test]
async fn test_login_disabled_account() {
    let app = TestApp::new();
    let mut user = app.seed_user("john@example.com", 1).await;
    user.active = false;
    app.users.update(user).await.unwrap();

    let response = app
        .send(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "email": "john@example.com", "password": PASSWORD })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["error"]["type"], "USER_NOT_ACTIVE");
}

#[tokio::test]
async fn test_member_routes_require_session() {
    let app = TestApp::new();

    for uri in ["/dashboard", "/profile"] {
        let response = app.send("GET", uri, None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(json_body(response).await["error"]["type"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_profile_phone_only_update() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;
    let cookie = app.login("john@example.com").await;

    let response = app
        .send(
            "PUT",
            "/profile",
            Some(&cookie),
            Some(json!({
                "first_name": "",
                "email": "",
                "password": "",
                "phone": "0499-123-456"
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_body(response).await;
    assert_eq!(profile["phone"], "0499-123-456");
    assert_eq!(profile["email"], "john@example.com");
    assert_eq!(profile["first_name"], "Test");

    let stored = app.users.find_by_email("john@example.com").await.unwrap().unwrap();
    assert!(domain_users::password::verify_password(PASSWORD, &stored.password_hash));
}

#[tokio::test]
async fn test_profile_update_ignores_admin_fields() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;
    let cookie = app.login("john@example.com").await;

    let response = app
        .send(
            "PUT",
            "/profile",
            Some(&cookie),
            Some(json!({ "role_id": "3", "blacklist": true })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_body(response).await;
    assert_eq!(profile["role_id"], 1);
    assert_eq!(profile["blacklist"], false);
}

#[tokio::test]
async fn test_admin_routes_reject_members() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;
    let cookie = app.login("john@example.com").await;

    for uri in ["/admin/users", "/admin/roles"] {
        let response = app.send("GET", uri, Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(json_body(response).await["error"]["type"], "FORBIDDEN");
    }
}

#[tokio::test]
async fn test_admin_search_and_paginate() {
    let app = TestApp::new();
    app.seed_user("admin@sportcenter.be", 3).await;
    for i in 0..11 {
        app.seed_user(&format!("member{}@example.com", i), 1).await;
    }
    let cookie = app.login("admin@sportcenter.be").await;

    let page = json_body(
        app.send("GET", "/admin/users?search_query=MEMBER&page=2", Some(&cookie), None)
            .await,
    )
    .await;

    assert_eq!(page["total_users"], 11);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["page"], 2);
    assert_eq!(page["users"].as_array().unwrap().len(), 1);

    let beyond = json_body(
        app.send("GET", "/admin/users?page=9", Some(&cookie), None)
            .await,
    )
    .await;
    assert_eq!(beyond["users"], json!([]));
}

#[tokio::test]
async fn test_admin_updates_flags_and_role() {
    let app = TestApp::new();
    app.seed_user("admin@sportcenter.be", 3).await;
    let member = app.seed_user("john@example.com", 1).await;
    let cookie = app.login("admin@sportcenter.be").await;

    let response = app
        .send(
            "PUT",
            &format!("/admin/users/{}", member.id),
            Some(&cookie),
            Some(json!({ "blacklist": true, "active": true, "role_id": "2" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["blacklist"], true);
    assert_eq!(updated["role_id"], 2);

    let response = app
        .send(
            "PUT",
            &format!("/admin/users/{}", member.id),
            Some(&cookie),
            Some(json!({ "role_id": "staff" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"]["type"], "INVALID_ROLE_ID");
}

#[tokio::test]
async fn test_admin_delete_user() {
    let app = TestApp::new();
    app.seed_user("admin@sportcenter.be", 3).await;
    let member = app.seed_user("john@example.com", 1).await;
    let cookie = app.login("admin@sportcenter.be").await;

    let uri = format!("/admin/users/{}", member.id);
    let response = app.send("DELETE", &uri, Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.send("DELETE", &uri, Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"]["type"], "USER_NOT_FOUND");

    let response = app
        .send("DELETE", "/admin/users/abc", Some(&cookie), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_admin_role_crud() {
    let app = TestApp::new();
    app.seed_user("admin@sportcenter.be", 3).await;
    let cookie = app.login("admin@sportcenter.be").await;

    let response = app
        .send("POST", "/admin/roles", Some(&cookie), Some(json!({ "name": " coach " })))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let role = json_body(response).await;
    assert_eq!(role["name"], "coach");

    let response = app
        .send("POST", "/admin/roles", Some(&cookie), Some(json!({ "name": "  " })))
        .await;
    assert_eq!(json_body(response).await["error"]["type"], "INVALID_ROLE");

    let response = app
        .send("DELETE", "/admin/roles/99", Some(&cookie), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let roles = json_body(app.send("GET", "/admin/roles", Some(&cookie), None).await).await;
    assert_eq!(roles.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new();
    app.seed_user("john@example.com", 1).await;
    let cookie = app.login("john@example.com").await;

    let response = app.send("POST", "/auth/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.send("GET", "/dashboard", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

//! Shared test infrastructure for portal integration tests.
//!
//! - `MockApi` - a scriptable stand-in for the results API that records every request
//! - `Browser` - carries the session cookie between requests like a real browser
//! - `portal!` - builds the portal service against a `MockApi`

#![allow(dead_code, unused_macros)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_EMAIL: &str = "admin@board.example";
pub const ADMIN_PASS: &str = "secret";
pub const ADMIN_TOKEN: &str = "tok-admin-1";

// ============================================================================
// MOCK RESULTS API
// ============================================================================

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<Recorded>>,
    responses: Mutex<HashMap<(String, String), (u16, String)>>,
    delays: Mutex<HashMap<String, Duration>>,
}

async fn record(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let method = req.method().to_string();
    let path = req.path().to_string();
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body_json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body: body_json,
    });

    let delay = state.delays.lock().unwrap().get(&path).copied();
    if let Some(d) = delay {
        actix_web::rt::time::sleep(d).await;
    }

    let scripted = state.responses.lock().unwrap().get(&(method.clone(), path.clone())).cloned();
    match scripted {
        Some((status, body)) => HttpResponse::build(StatusCode::from_u16(status).unwrap())
            .content_type("application/json")
            .body(body),
        None => HttpResponse::NotFound().json(json!({"message": format!("No mock for {method} {path}")})),
    }
}

/// Results API stand-in listening on an ephemeral local port.
pub struct MockApi {
    pub base: String,
    state: web::Data<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = web::Data::new(MockState::default());
        let shared = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(shared.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind mock API");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Self { base: format!("http://{addr}"), state }
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
    }

    /// Hold every response for `path` back by `delay`.
    pub fn delay(&self, path: &str, delay: Duration) {
        self.state.delays.lock().unwrap().insert(path.to_string(), delay);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn calls(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.calls(method, path).len()
    }

    /// One course with two parts and one board.
    pub fn with_catalog(&self) {
        self.respond("GET", "/api/courses", 200, json!({
            "courses": {
                "sci": {
                    "courseName": "Science",
                    "parts": {
                        "part1": {"name": "Year 1", "subjects": ["Physics", "Chemistry"]},
                        "part2": {"name": "Year 2", "subjects": ["Biology"]}
                    }
                }
            }
        }));
        self.respond("GET", "/api/boards", 200, json!({
            "boards": {"fb": {"name": "Federal Board", "logoUrl": "https://cdn.example/fb.png"}}
        }));
    }

    pub fn accept_login(&self) {
        self.respond("POST", "/api/admin/login", 200, json!({
            "success": true, "userId": "u1", "email": ADMIN_EMAIL, "token": ADMIN_TOKEN
        }));
    }
}

// ============================================================================
// PORTAL UNDER TEST
// ============================================================================

/// `portal!(api)` or `portal!(api, inflight)` - the initialized portal service.
macro_rules! portal {
    ($api:expr) => {
        portal!($api, results_portal::inflight::InFlight::new())
    };
    ($api:expr, $inflight:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(actix_web::web::Data::new(results_portal::api::ApiClient::new(
                    &$api.base,
                    std::time::Duration::from_secs(5),
                )))
                .app_data(actix_web::web::Data::new($inflight))
                .configure(results_portal::handlers::configure),
        )
        .await
    };
}

// ============================================================================
// BROWSER
// ============================================================================

/// What a page load produced.
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Keeps the session cookie across requests.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str) -> Request {
        self.with_cookie(test::TestRequest::get().uri(uri)).to_request()
    }

    pub fn post(&self, uri: &str, form: &[(&str, &str)]) -> Request {
        let body = serde_urlencoded::to_string(form).unwrap();
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body);
        self.with_cookie(req).to_request()
    }

    fn with_cookie(&self, req: test::TestRequest) -> test::TestRequest {
        match &self.cookie {
            Some(c) => req.cookie(c.clone()),
            None => req,
        }
    }

    /// Remember the session cookie the response set (or cleared).
    pub fn absorb<B>(&mut self, res: &ServiceResponse<B>) {
        if let Some(c) = res.response().cookies().find(|c| c.name() == "id") {
            self.cookie = if c.value().is_empty() { None } else { Some(c.into_owned()) };
        }
    }

    pub async fn send<S, B>(&mut self, app: &S, req: Request) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let res = test::call_service(app, req).await;
        self.absorb(&res);
        read_page(res).await
    }
}

pub async fn read_page<B: MessageBody>(res: ServiceResponse<B>) -> Page {
    let status = res.status();
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    Page { status, location, body }
}

/// The CSRF token embedded in a rendered form.
pub fn csrf_from(body: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(body)
        .map(|c| c[1].to_string())
        .expect("page has no CSRF token")
}

/// Log in through the portal's own login form. The mock must accept the login.
pub async fn login<S, B>(app: &S, browser: &mut Browser)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let page = browser.send(app, browser.get("/admin/login")).await;
    let token = csrf_from(&page.body);
    let req = browser.post(
        "/admin/login",
        &[("email", ADMIN_EMAIL), ("password", ADMIN_PASS), ("csrf_token", &token)],
    );
    let page = browser.send(app, req).await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/admin/results"));
}

/// GET `uri` and return the page's CSRF token.
pub async fn csrf_for<S, B>(app: &S, browser: &mut Browser, uri: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let page = browser.send(app, browser.get(uri)).await;
    csrf_from(&page.body)
}

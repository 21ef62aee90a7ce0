#![allow(dead_code)]

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::web;
use chrono::Duration;
use foodshare::app::AppContext;
use foodshare::db::Database;
use foodshare::session::{SessionGate, SESSION_COOKIE};

pub const ADMIN_PASSWORD: &str = "admin123";

/// Builds the full route table over the given context.
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($ctx.clone())
                .configure(foodshare::app::routes)
                .default_service(actix_web::web::to(foodshare::api::not_found)),
        )
        .await
    };
}

pub async fn test_context() -> web::Data<AppContext> {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    context_with(db)
}

/// Context whose store has no tables, so every insert fails.
pub fn broken_context() -> web::Data<AppContext> {
    context_with(Database::new(":memory:").unwrap())
}

fn context_with(db: Database) -> web::Data<AppContext> {
    let sessions = SessionGate::new(Key::generate(), Duration::hours(1));
    web::Data::new(AppContext::new(db, sessions, ADMIN_PASSWORD))
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn donation(name: &str) -> [(&'static str, String); 4] {
    [
        ("name", name.to_string()),
        ("phone", "555-0100".to_string()),
        ("address", "7 Orchard Lane".to_string()),
        ("food_details", "Fresh bread, 20 loaves".to_string()),
    ]
}

pub fn feedback(name: &str) -> [(&'static str, String); 3] {
    [
        ("name", name.to_string()),
        ("email", "reader@example.com".to_string()),
        ("message", "Keep up the good work".to_string()),
    ]
}

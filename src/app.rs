//! Application context and route table.

use crate::config::Config;
use crate::db::Database;
use crate::error::AppError;
use crate::session::SessionGate;
use crate::{admin, api};
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};

/// Everything a request handler needs, built once at startup and shared
/// with every worker through `web::Data`.
pub struct AppContext {
    pub db: Database,
    pub sessions: SessionGate,
    admin_password: String,
}

impl AppContext {
    pub fn new(db: Database, sessions: SessionGate, admin_password: impl Into<String>) -> Self {
        Self {
            db,
            sessions,
            admin_password: admin_password.into(),
        }
    }

    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let db = Database::new(&config.database_path)?;
        db.create_schema().await?;
        let sessions = SessionGate::new(config.cookie_key(), config.session_ttl);
        Ok(Self::new(db, sessions, config.admin_password.clone()))
    }

    /// Plain equality against the shared admin secret.
    pub fn password_matches(&self, candidate: &str) -> bool {
        candidate == self.admin_password
    }
}

/// Upper bound for a url-encoded submission body.
pub const FORM_LIMIT: usize = 1024 * 1024;

fn form_config() -> web::FormConfig {
    web::FormConfig::default().limit(FORM_LIMIT)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(api::home))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/donate")
            .app_data(form_config())
            .route(web::get().to(api::donate_form))
            .route(web::post().to(api::submit_donation))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/about")
            .route(web::get().to(api::about))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/feedback")
            .app_data(form_config())
            .route(web::get().to(api::feedback_form))
            .route(web::post().to(api::submit_feedback))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/thank-you/{kind}")
            .route(web::get().to(api::thank_you))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/admin")
            .route(web::get().to(admin::admin_page))
            .route(web::post().to(admin::admin_login))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/admin/logout")
            .route(web::get().to(admin::admin_logout))
            .default_service(web::to(api::not_found)),
    );
}

pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub(crate) fn redirect(location: &str, cookie: Option<Cookie<'static>>) -> HttpResponse {
    let mut builder = HttpResponse::Found();
    builder.insert_header((header::LOCATION, location));
    if let Some(cookie) = cookie {
        builder.cookie(cookie);
    }
    builder.finish()
}

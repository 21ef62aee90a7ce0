//! Password-gated review of everything submitted so far.

use crate::app::{html, redirect, AppContext};
use crate::components::admin::{dashboard_document, login_document};
use crate::db::Database;
use crate::error::AppError;
use crate::models::{Donation, Feedback, Notice};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub password: String,
}

/// Both submission lists, each newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminListing {
    pub donations: Vec<Donation>,
    pub feedback: Vec<Feedback>,
}

pub async fn load_listing(db: &Database) -> Result<AdminListing, rusqlite::Error> {
    let donations = db.list_donations().await?;
    let feedback = db.list_feedback().await?;
    Ok(AdminListing {
        donations,
        feedback,
    })
}

pub async fn admin_page(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    let notices = ctx.sessions.take_notices(&req).await;

    if !ctx.sessions.is_admin(&req).await {
        return Ok(html(StatusCode::OK, login_document(notices)));
    }

    let listing = load_listing(&ctx.db).await?;
    info!(
        "[ADMIN] Listing {} donations and {} feedback entries",
        listing.donations.len(),
        listing.feedback.len()
    );
    Ok(html(
        StatusCode::OK,
        dashboard_document(listing.donations, listing.feedback, notices),
    ))
}

pub async fn admin_login(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    form: Result<web::Form<LoginForm>, actix_web::Error>,
) -> HttpResponse {
    let accepted = match &form {
        Ok(form) => ctx.password_matches(&form.password),
        Err(_) => false,
    };

    let cookie = if accepted {
        ctx.sessions.log_in(&req).await
    } else {
        warn!("[ADMIN] Rejected login attempt");
        ctx.sessions
            .push_notice(&req, Notice::error("Incorrect password"))
            .await
    };

    redirect("/admin", cookie)
}

pub async fn admin_logout(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let cookie = ctx
        .sessions
        .log_out(&req, Notice::success("Logged out successfully"))
        .await;
    redirect("/", cookie)
}

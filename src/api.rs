use crate::app::{html, redirect, AppContext};
use crate::components::{
    donate::donate_document,
    feedback::feedback_document,
    pages::{about_document, home_document, not_found_document, thank_you_document},
};
use crate::models::{DonationForm, FeedbackForm, Notice, SubmissionKind};
use actix_web::error::UrlencodedError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use tracing::{error, info, warn};

const STORE_FAILED: &str = "An error occurred. Please try again.";
const INCOMPLETE_FORM: &str = "Your submission was missing required fields. Please fill in the whole form.";
const FORM_TOO_LARGE: &str = "Your submission is too large. Please shorten it and try again.";
const FORM_UNREADABLE: &str = "Your submission could not be read. Please use the form on this page.";

pub async fn home(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let notices = ctx.sessions.take_notices(&req).await;
    html(StatusCode::OK, home_document(notices))
}

pub async fn about(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let notices = ctx.sessions.take_notices(&req).await;
    html(StatusCode::OK, about_document(notices))
}

pub async fn donate_form(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let notices = ctx.sessions.take_notices(&req).await;
    html(StatusCode::OK, donate_document(notices))
}

pub async fn feedback_form(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    let notices = ctx.sessions.take_notices(&req).await;
    html(StatusCode::OK, feedback_document(notices))
}

pub async fn submit_donation(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    form: Result<web::Form<DonationForm>, actix_web::Error>,
) -> HttpResponse {
    let received_at = Utc::now();
    let kind = SubmissionKind::Donation;

    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            warn!("[API] Rejected {} submission: {}", kind, e);
            return back_to_form(&req, &ctx, kind, rejection_notice(&e)).await;
        }
    };

    match ctx.db.insert_donation(&form, received_at).await {
        Ok(donation) => {
            info!("[API] Stored donation {} from {:?}", donation.id, donation.name);
            confirm(&req, &ctx, kind).await
        }
        Err(e) => {
            error!("[API] Failed to store donation: {:?}", e);
            back_to_form(&req, &ctx, kind, STORE_FAILED).await
        }
    }
}

pub async fn submit_feedback(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    form: Result<web::Form<FeedbackForm>, actix_web::Error>,
) -> HttpResponse {
    let received_at = Utc::now();
    let kind = SubmissionKind::Feedback;

    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            warn!("[API] Rejected {} submission: {}", kind, e);
            return back_to_form(&req, &ctx, kind, rejection_notice(&e)).await;
        }
    };

    match ctx.db.insert_feedback(&form, received_at).await {
        Ok(feedback) => {
            info!("[API] Stored feedback {} from {:?}", feedback.id, feedback.name);
            confirm(&req, &ctx, kind).await
        }
        Err(e) => {
            error!("[API] Failed to store feedback: {:?}", e);
            back_to_form(&req, &ctx, kind, STORE_FAILED).await
        }
    }
}

// Only a decode failure means a field was missing; size and content-type
// rejections get their own notice.
fn rejection_notice(e: &actix_web::Error) -> &'static str {
    match e.as_error::<UrlencodedError>() {
        Some(UrlencodedError::Parse(_)) => INCOMPLETE_FORM,
        Some(UrlencodedError::Overflow { .. }) => FORM_TOO_LARGE,
        _ => FORM_UNREADABLE,
    }
}

async fn confirm(req: &HttpRequest, ctx: &AppContext, kind: SubmissionKind) -> HttpResponse {
    let cookie = ctx
        .sessions
        .push_notice(req, Notice::success(kind.success_message()))
        .await;
    redirect(&kind.thank_you_path(), cookie)
}

async fn back_to_form(
    req: &HttpRequest,
    ctx: &AppContext,
    kind: SubmissionKind,
    message: &str,
) -> HttpResponse {
    let cookie = ctx.sessions.push_notice(req, Notice::error(message)).await;
    redirect(kind.form_path(), cookie)
}

pub async fn thank_you(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    kind: web::Path<String>,
) -> HttpResponse {
    match SubmissionKind::parse(&kind) {
        Some(kind) => {
            let notices = ctx.sessions.take_notices(&req).await;
            html(StatusCode::OK, thank_you_document(kind, notices))
        }
        None => not_found(req, ctx).await,
    }
}

pub async fn not_found(req: HttpRequest, ctx: web::Data<AppContext>) -> HttpResponse {
    info!("[API] No route for {} {}", req.method(), req.path());
    let notices = ctx.sessions.take_notices(&req).await;
    html(StatusCode::NOT_FOUND, not_found_document(notices))
}

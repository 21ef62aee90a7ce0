use actix_web::http::{header::ContentType, StatusCode};
use actix_web::test;
use chrono::{SubsecRound, Utc};
use foodshare::admin::load_listing;
use foodshare::app::FORM_LIMIT;

#[macro_use]
mod support;
use support::{body_text, broken_context, donation, feedback, location, session_cookie, test_context};

#[actix_web::test]
async fn donation_is_stored_and_redirects_to_thank_you() {
    let ctx = test_context().await;
    let app = init_app!(ctx);
    let before = Utc::now().trunc_subsecs(6);

    let req = test::TestRequest::post()
        .uri("/donate")
        .set_form(donation("Ada Lovelace"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/thank-you/donation");

    let listing = load_listing(&ctx.db).await.unwrap();
    assert_eq!(listing.donations.len(), 1);
    assert!(listing.feedback.is_empty());

    let stored = &listing.donations[0];
    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(stored.phone, "555-0100");
    assert_eq!(stored.address, "7 Orchard Lane");
    assert_eq!(stored.food_details, "Fresh bread, 20 loaves");
    assert!(stored.timestamp >= before);
}

#[actix_web::test]
async fn thank_you_page_shows_notice_once() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/donate")
        .set_form(donation("Grace"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).expect("notice should start a session");

    let req = test::TestRequest::get()
        .uri("/thank-you/donation")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Thank you for your generous donation! We will contact you soon."));

    let req = test::TestRequest::get()
        .uri("/thank-you/donation")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(!body.contains("Thank you for your generous donation!"));
}

#[actix_web::test]
async fn feedback_is_stored_and_redirects_to_thank_you() {
    let ctx = test_context().await;
    let app = init_app!(ctx);
    let before = Utc::now().trunc_subsecs(6);

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_form(feedback("Linus"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/thank-you/feedback");

    let listing = load_listing(&ctx.db).await.unwrap();
    assert!(listing.donations.is_empty());
    assert_eq!(listing.feedback.len(), 1);
    assert_eq!(listing.feedback[0].name, "Linus");
    assert_eq!(listing.feedback[0].email, "reader@example.com");
    assert_eq!(listing.feedback[0].message, "Keep up the good work");
    assert!(listing.feedback[0].timestamp >= before);
}

#[actix_web::test]
async fn empty_fields_are_accepted() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/donate")
        .set_form([("name", ""), ("phone", ""), ("address", ""), ("food_details", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/thank-you/donation");

    let donations = ctx.db.list_donations().await.unwrap();
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].name, "");
    assert_eq!(donations[0].phone, "");
    assert_eq!(donations[0].address, "");
    assert_eq!(donations[0].food_details, "");
}

#[actix_web::test]
async fn missing_field_returns_to_form_without_storing() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_form([("name", "Half"), ("email", "half@example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/feedback");
    assert!(ctx.db.list_feedback().await.unwrap().is_empty());

    let cookie = session_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/feedback")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("missing required fields"));
}

#[actix_web::test]
async fn storage_failure_returns_to_form_with_error() {
    let ctx = broken_context();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/donate")
        .set_form(donation("Nobody"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/donate");

    let cookie = session_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/donate")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("An error occurred. Please try again."));
}

#[actix_web::test]
async fn form_pages_render_without_side_effects() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    for uri in ["/", "/about", "/donate", "/feedback"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert!(session_cookie(&resp).is_none(), "{uri}");
    }

    let req = test::TestRequest::get().uri("/donate").to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("name=\"food_details\""));

    let listing = load_listing(&ctx.db).await.unwrap();
    assert!(listing.donations.is_empty());
    assert!(listing.feedback.is_empty());
}

#[actix_web::test]
async fn unknown_paths_are_not_found() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/nonexistent").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Page Not Found"));

    let req = test::TestRequest::get().uri("/thank-you/volunteer").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/donate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn concurrent_donations_get_distinct_ids() {
    let ctx = test_context().await;
    let app = init_app!(ctx);
    const K: usize = 16;

    let requests = (0..K).map(|i| {
        let req = test::TestRequest::post()
            .uri("/donate")
            .set_form(donation(&format!("Donor {i}")))
            .to_request();
        test::call_service(&app, req)
    });
    let responses = futures::future::join_all(requests).await;
    assert!(responses.iter().all(|resp| resp.status() == StatusCode::FOUND));

    let mut ids: Vec<i64> = ctx
        .db
        .list_donations()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), K);
}

#[actix_web::test]
async fn long_free_text_is_stored() {
    let ctx = test_context().await;
    let app = init_app!(ctx);
    let message = "x".repeat(20_000);

    let req = test::TestRequest::post()
        .uri("/feedback")
        .set_form([
            ("name", "Verbose"),
            ("email", "verbose@example.com"),
            ("message", message.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/thank-you/feedback");

    let feedback = ctx.db.list_feedback().await.unwrap();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].message.len(), 20_000);
}

#[actix_web::test]
async fn oversized_body_is_not_reported_as_missing_fields() {
    let ctx = test_context().await;
    let app = init_app!(ctx);
    let details = "y".repeat(FORM_LIMIT + 1);

    let req = test::TestRequest::post()
        .uri("/donate")
        .set_form([
            ("name", "Bulk"),
            ("phone", "555-0100"),
            ("address", "Warehouse 4"),
            ("food_details", details.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/donate");
    assert!(ctx.db.list_donations().await.unwrap().is_empty());

    let cookie = session_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/donate")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Your submission is too large."));
    assert!(!body.contains("missing required fields"));
}

#[actix_web::test]
async fn wrong_content_type_is_not_reported_as_missing_fields() {
    let ctx = test_context().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/feedback")
        .insert_header(ContentType::plaintext())
        .set_payload("name=Plain&email=plain@example.com&message=hello")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/feedback");
    assert!(ctx.db.list_feedback().await.unwrap().is_empty());

    let cookie = session_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/feedback")
        .cookie(cookie)
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Your submission could not be read."));
    assert!(!body.contains("missing required fields"));
}

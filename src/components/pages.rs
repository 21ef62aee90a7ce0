use crate::components::{layout::Layout, render_page};
use crate::models::{Notice, SubmissionKind};
use leptos::*;

#[component]
pub fn HomePage(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <section class="hero">
                <h1>"Welcome to FoodShare"</h1>
                <p>"Surplus food should feed people, not landfills. Offer what you have and we will connect it with those in need."</p>
                <a class="button" href="/donate">"Donate Food"</a>
            </section>
        </Layout>
    }
}

#[component]
pub fn AboutPage(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <h1>"About FoodShare"</h1>
            <p>"FoodShare is a community platform that connects households, restaurants and shops holding surplus food with people and shelters who can use it."</p>
            <p>"Donors describe what they can give and where it can be collected. Our volunteers review every offer and arrange pickup."</p>
        </Layout>
    }
}

#[component]
pub fn ThankYouPage(kind: SubmissionKind, notices: Vec<Notice>) -> impl IntoView {
    let message = match kind {
        SubmissionKind::Donation => "Your donation offer has been received. A volunteer will contact you to arrange pickup.",
        SubmissionKind::Feedback => "Your message has been received. We read every piece of feedback.",
    };

    view! {
        <Layout notices=notices>
            <h1>"Thank You!"</h1>
            <p class={format!("thank-you thank-you-{}", kind.as_str())}>{message}</p>
            <a href="/">"Back to home"</a>
        </Layout>
    }
}

#[component]
pub fn NotFoundPage(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <h1>"Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/">"Back to home"</a>
        </Layout>
    }
}

pub fn home_document(notices: Vec<Notice>) -> String {
    render_page("Home", move || view! { <HomePage notices=notices/> })
}

pub fn about_document(notices: Vec<Notice>) -> String {
    render_page("About", move || view! { <AboutPage notices=notices/> })
}

pub fn thank_you_document(kind: SubmissionKind, notices: Vec<Notice>) -> String {
    render_page("Thank You", move || view! { <ThankYouPage kind=kind notices=notices/> })
}

pub fn not_found_document(notices: Vec<Notice>) -> String {
    render_page("Page Not Found", move || view! { <NotFoundPage notices=notices/> })
}

use crate::components::{layout::Layout, render_page};
use crate::models::Notice;
use leptos::*;

#[component]
pub fn FeedbackPage(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <h1>"Share Your Feedback"</h1>
            <form class="submission-form" method="post" action="/feedback">
                <label for="name">"Name"</label>
                <input type="text" id="name" name="name" maxlength="100" required=true/>

                <label for="email">"Email"</label>
                <input type="email" id="email" name="email" maxlength="120" required=true/>

                <label for="message">"Message"</label>
                <textarea id="message" name="message" rows="6" required=true></textarea>

                <button type="submit">"Send Feedback"</button>
            </form>
        </Layout>
    }
}

pub fn feedback_document(notices: Vec<Notice>) -> String {
    render_page("Feedback", move || view! { <FeedbackPage notices=notices/> })
}

use crate::models::Notice;
use leptos::*;

/// Shared page body: navigation, pending notices, then the page content.
#[component]
pub fn Layout(notices: Vec<Notice>, children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <nav class="site-nav">
                <a class="brand" href="/">"FoodShare"</a>
                <a href="/donate">"Donate Food"</a>
                <a href="/feedback">"Feedback"</a>
                <a href="/about">"About"</a>
                <a href="/admin">"Admin"</a>
            </nav>
            <main>
                {notices
                    .into_iter()
                    .map(|notice| view! {
                        <div class={notice.level.css_class()}>{notice.message}</div>
                    })
                    .collect_view()}
                {children()}
            </main>
            <footer>
                <p>"FoodShare connects food donors with those in need."</p>
            </footer>
        </div>
    }
}

pub mod admin;
pub mod donate;
pub mod feedback;
pub mod layout;
pub mod pages;

use leptos::IntoView;

/// Renders a page component inside the HTML document shell.
pub fn render_page<F, N>(title: &'static str, page: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let body = leptos::ssr::render_to_string(page);
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} | FoodShare</title>\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\
         </head>\
         <body>{body}</body>\
         </html>"
    )
}

use crate::components::{layout::Layout, render_page};
use crate::models::Notice;
use leptos::*;

#[component]
pub fn DonatePage(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <h1>"Donate Food"</h1>
            <p>"Tell us what you can share and where to pick it up. We will get in touch to arrange collection."</p>
            <form class="submission-form" method="post" action="/donate">
                <label for="name">"Name"</label>
                <input type="text" id="name" name="name" maxlength="100" required=true/>

                <label for="phone">"Phone"</label>
                <input type="tel" id="phone" name="phone" maxlength="15" required=true/>

                <label for="address">"Pickup address"</label>
                <textarea id="address" name="address" rows="3" required=true></textarea>

                <label for="food_details">"Food details"</label>
                <textarea
                    id="food_details"
                    name="food_details"
                    rows="5"
                    placeholder="Type of food, quantity, best-before date"
                    required=true
                ></textarea>

                <button type="submit">"Submit Donation"</button>
            </form>
        </Layout>
    }
}

pub fn donate_document(notices: Vec<Notice>) -> String {
    render_page("Donate Food", move || view! { <DonatePage notices=notices/> })
}

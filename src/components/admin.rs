use crate::components::{layout::Layout, render_page};
use crate::models::{Donation, Feedback, Notice};
use chrono::{DateTime, Utc};
use leptos::*;

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[component]
pub fn AdminLogin(notices: Vec<Notice>) -> impl IntoView {
    view! {
        <Layout notices=notices>
            <h1>"Admin Login"</h1>
            <form class="login-form" method="post" action="/admin">
                <label for="password">"Password"</label>
                <input type="password" id="password" name="password" required=true/>
                <button type="submit">"Log In"</button>
            </form>
        </Layout>
    }
}

/// Full listing of donations and feedback, newest first as given.
#[component]
pub fn AdminDashboard(
    donations: Vec<Donation>,
    feedback: Vec<Feedback>,
    notices: Vec<Notice>,
) -> impl IntoView {
    let donation_count = donations.len();
    let feedback_count = feedback.len();

    view! {
        <Layout notices=notices>
            <header class="dashboard-header">
                <h1>"Admin Dashboard"</h1>
                <a class="button" href="/admin/logout">"Log Out"</a>
            </header>

            <section class="donations">
                <h2>{format!("Donations ({donation_count})")}</h2>
                {(donation_count == 0).then(|| view! { <p class="empty">"No donations yet."</p> })}
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Phone"</th>
                            <th>"Address"</th>
                            <th>"Food Details"</th>
                            <th>"Received"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {donations
                            .into_iter()
                            .map(|donation| view! {
                                <tr class="donation-row">
                                    <td>{donation.id.to_string()}</td>
                                    <td>{donation.name}</td>
                                    <td>{donation.phone}</td>
                                    <td>{donation.address}</td>
                                    <td>{donation.food_details}</td>
                                    <td>{format_timestamp(&donation.timestamp)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="feedback">
                <h2>{format!("Feedback ({feedback_count})")}</h2>
                {(feedback_count == 0).then(|| view! { <p class="empty">"No feedback yet."</p> })}
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Message"</th>
                            <th>"Received"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {feedback
                            .into_iter()
                            .map(|entry| view! {
                                <tr class="feedback-row">
                                    <td>{entry.id.to_string()}</td>
                                    <td>{entry.name}</td>
                                    <td>{entry.email}</td>
                                    <td>{entry.message}</td>
                                    <td>{format_timestamp(&entry.timestamp)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </Layout>
    }
}

pub fn login_document(notices: Vec<Notice>) -> String {
    render_page("Admin Login", move || view! { <AdminLogin notices=notices/> })
}

pub fn dashboard_document(
    donations: Vec<Donation>,
    feedback: Vec<Feedback>,
    notices: Vec<Notice>,
) -> String {
    render_page("Admin Dashboard", move || {
        view! { <AdminDashboard donations=donations feedback=feedback notices=notices/> }
    })
}

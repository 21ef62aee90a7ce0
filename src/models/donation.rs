use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A stored offer of food. Rows are only ever inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub food_details: String,
    pub timestamp: DateTime<Utc>,
}

/// Fields posted by the donation form. Every field must be present, empty
/// values are accepted as-is.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DonationForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub food_details: String,
}

use crate::models::{Donation, DonationForm, Feedback, FeedbackForm};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, Error, Row};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};


/// Handle to the SQLite file holding the `donors` and `feedback` tables.
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let conn = Connection::open(db_path)?;
        info!("Database connection established at: {}", db_path);
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub async fn create_schema(&self) -> Result<(), Error> {
        let conn = self.conn.lock().await;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS donors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT NOT NULL,
                address TEXT NOT NULL,
                food_details TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            error!("Failed creating donors table: {}", e);
            e
        })?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS feedback (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            error!("Failed creating feedback table: {}", e);
            e
        })?;

        Ok(())
    }

    /// Stores a donation in its own transaction. Nothing is written unless
    /// the commit succeeds.
    pub async fn insert_donation(
        &self,
        form: &DonationForm,
        received_at: DateTime<Utc>,
    ) -> Result<Donation, Error> {
        let timestamp = received_at.trunc_subsecs(6);
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO donors (name, phone, address, food_details, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &form.name,
                &form.phone,
                &form.address,
                &form.food_details,
                encode_timestamp(&timestamp),
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        debug!("[DB] Donation {} committed", id);

        Ok(Donation {
            id,
            name: form.name.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            food_details: form.food_details.clone(),
            timestamp,
        })
    }

    pub async fn insert_feedback(
        &self,
        form: &FeedbackForm,
        received_at: DateTime<Utc>,
    ) -> Result<Feedback, Error> {
        let timestamp = received_at.trunc_subsecs(6);
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO feedback (name, email, message, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &form.name,
                &form.email,
                &form.message,
                encode_timestamp(&timestamp),
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        debug!("[DB] Feedback {} committed", id);

        Ok(Feedback {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            timestamp,
        })
    }

    // Newest first
    pub async fn list_donations(&self) -> Result<Vec<Donation>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, name, phone, address, food_details, timestamp
             FROM donors
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt.query_map([], row_to_donation)?;
        let mut donations = Vec::new();
        for row in rows {
            donations.push(row?);
        }
        debug!("[DB] Fetched {} donations", donations.len());
        Ok(donations)
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, name, email, message, timestamp
             FROM feedback
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt.query_map([], row_to_feedback)?;
        rows.collect()
    }
}

// Fixed-width UTC text so that ordering by the column is chronological.
fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(row: &Row<'_>, idx: usize) -> Result<DateTime<Utc>, Error> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn row_to_donation(row: &Row<'_>) -> Result<Donation, Error> {
    Ok(Donation {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        address: row.get(3)?,
        food_details: row.get(4)?,
        timestamp: decode_timestamp(row, 5)?,
    })
}

fn row_to_feedback(row: &Row<'_>) -> Result<Feedback, Error> {
    Ok(Feedback {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        message: row.get(3)?,
        timestamp: decode_timestamp(row, 4)?,
    })
}

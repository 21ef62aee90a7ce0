//! Server-side sessions keyed by a signed cookie.
//!
//! The browser only ever holds an opaque id signed with the server key. The
//! admin flag and pending notices live in [`SessionRecord`]s inside the gate,
//! so a forged or replayed-after-expiry cookie grants nothing.

use crate::models::Notice;
use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "foodshare_session";

pub type SessionId = Uuid;

/// Expired records are swept from the map once it holds this many entries.
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub admin_authenticated: bool,
    pub notices: Vec<Notice>,
    pub last_seen: DateTime<Utc>,
}

impl SessionRecord {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            admin_authenticated: false,
            notices: Vec::new(),
            last_seen: now,
        }
    }

    pub fn is_live(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_seen <= ttl
    }
}

/// Whether the holder of `token` is the authenticated operator.
pub fn is_authenticated(
    token: Option<&SessionId>,
    record: Option<&SessionRecord>,
    now: DateTime<Utc>,
    ttl: Duration,
) -> bool {
    match (token, record) {
        (Some(_), Some(record)) => record.admin_authenticated && record.is_live(now, ttl),
        _ => false,
    }
}

pub struct SessionGate {
    key: Key,
    ttl: Duration,
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionGate {
    pub fn new(key: Key, ttl: Duration) -> Self {
        Self {
            key,
            ttl,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Session id carried by the request, if its signature checks out.
    pub fn token(&self, req: &HttpRequest) -> Option<SessionId> {
        let cookie = req.cookie(SESSION_COOKIE)?;
        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        let verified = jar.signed(&self.key).get(SESSION_COOKIE)?;
        Uuid::parse_str(verified.value()).ok()
    }

    pub async fn is_admin(&self, req: &HttpRequest) -> bool {
        let token = self.token(req);
        let records = self.records.lock().await;
        let record = token.as_ref().and_then(|id| records.get(id));
        is_authenticated(token.as_ref(), record, Utc::now(), self.ttl)
    }

    /// Applies `f` to the caller's session, creating one when the request has
    /// no live session. Returns the cookie to send when a new id was issued.
    /// The caller's own expired record is dropped here; other expired records
    /// wait for the next sweep.
    pub async fn update<F>(&self, req: &HttpRequest, f: F) -> Option<Cookie<'static>>
    where
        F: FnOnce(&mut SessionRecord),
    {
        let now = Utc::now();
        let token = self.token(req);
        let mut records = self.records.lock().await;

        let ttl = self.ttl;
        if records.len() >= SWEEP_THRESHOLD {
            records.retain(|_, record| record.is_live(now, ttl));
        }

        let live = token.filter(|id| records.get(id).is_some_and(|r| r.is_live(now, ttl)));
        let (id, issued) = match live {
            Some(id) => (id, false),
            None => {
                if let Some(stale) = token {
                    records.remove(&stale);
                }
                let id = Uuid::new_v4();
                records.insert(id, SessionRecord::new(now));
                debug!("[SESSION] Issued session {}", id);
                (id, true)
            }
        };

        if let Some(record) = records.get_mut(&id) {
            f(record);
            record.last_seen = now;
        }

        if issued {
            self.issue_cookie(id)
        } else {
            None
        }
    }

    pub async fn push_notice(&self, req: &HttpRequest, notice: Notice) -> Option<Cookie<'static>> {
        self.update(req, |record| record.notices.push(notice)).await
    }

    pub async fn log_in(&self, req: &HttpRequest) -> Option<Cookie<'static>> {
        info!("[SESSION] Admin authenticated");
        self.update(req, |record| record.admin_authenticated = true)
            .await
    }

    pub async fn log_out(&self, req: &HttpRequest, notice: Notice) -> Option<Cookie<'static>> {
        info!("[SESSION] Admin logged out");
        self.update(req, |record| {
            record.admin_authenticated = false;
            record.notices.push(notice);
        })
        .await
    }

    /// Drains pending notices. Never creates a session.
    pub async fn take_notices(&self, req: &HttpRequest) -> Vec<Notice> {
        let Some(id) = self.token(req) else {
            return Vec::new();
        };

        let now = Utc::now();
        let mut records = self.records.lock().await;
        match records.get_mut(&id) {
            Some(record) if record.is_live(now, self.ttl) => {
                record.last_seen = now;
                std::mem::take(&mut record.notices)
            }
            _ => Vec::new(),
        }
    }

    fn issue_cookie(&self, id: SessionId) -> Option<Cookie<'static>> {
        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(
            Cookie::build(SESSION_COOKIE, id.to_string())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish(),
        );
        jar.get(SESSION_COOKIE).cloned()
    }
}

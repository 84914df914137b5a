//! Opaque identity values.
//!
//! A token carries no comparable payload. The process keeps a registry that
//! hands every token a monotonically increasing registration index the first
//! time it sees it, which happens when the token is minted. Ordering and
//! equality use that index only; the description is for display.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_REGISTRATION: AtomicU64 = AtomicU64::new(0);

/// Tokens minted through [`Token::interned`], keyed by their registry key.
static INTERNED: Lazy<RwLock<HashMap<String, Token>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

#[derive(Clone)]
pub struct Token {
    inner: Arc<TokenInner>,
}

struct TokenInner {
    registration: u64,
    description: Option<String>,
}

impl Token {
    /// Mint a new token. Two calls never return equal tokens, even with the
    /// same description.
    pub fn new(description: impl Into<String>) -> Self {
        Self::register(Some(description.into()))
    }

    /// Mint a token without a description.
    pub fn anonymous() -> Self {
        Self::register(None)
    }

    /// Return the process-wide token registered under `key`, minting it on
    /// first use.
    pub fn interned(key: &str) -> Self {
        if let Some(token) = INTERNED.read().get(key) {
            return token.clone();
        }

        INTERNED
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Self::register(Some(key.to_string())))
            .clone()
    }

    fn register(description: Option<String>) -> Self {
        let registration = NEXT_REGISTRATION.fetch_add(1, AtomicOrdering::Relaxed);
        Self {
            inner: Arc::new(TokenInner {
                registration,
                description,
            }),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Position of this token in the process-wide registration order.
    pub fn registration(&self) -> u64 {
        self.inner.registration
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.inner.registration == other.inner.registration
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.registration.hash(state);
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.registration.cmp(&other.inner.registration)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("registration", &self.inner.registration)
            .field("description", &self.inner.description)
            .finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.description().unwrap_or(""))
    }
}

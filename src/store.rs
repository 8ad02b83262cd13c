//! Application State Store
//!
//! Session and app-wide state with fine-grained reactivity via
//! reactive_stores. The session (token, access level) is injected through
//! context instead of living in an ambient global.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Tag;

/// Which page is showing; routing proper is out of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    ContentList,
    /// `None` creates new content, `Some(id)` edits an existing record
    ContentEdit(Option<i32>),
    UrgencyRules,
    Playground,
    Dashboard,
}

/// Snackbar severity, mapped to a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "snackbar success",
            Severity::Info => "snackbar info",
            Severity::Error => "snackbar error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnackMessage {
    pub text: String,
    pub severity: Severity,
}

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bearer token; `None` means not logged in
    pub token: Option<String>,
    /// "readonly" or "fullaccess"
    pub access_level: String,
    /// Active page
    pub page: Page,
    /// Transient banner message
    pub snackbar: Option<SnackMessage>,
    /// Cached tag list for filters and CSV export
    pub tags: Vec<Tag>,
    /// Bumped to force a content list refetch
    pub content_reload: u32,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_login(store: &AppStore, token: String, access_level: String) {
    store.token().set(Some(token));
    store.access_level().set(access_level);
    store.page().set(Page::ContentList);
}

pub fn store_logout(store: &AppStore) {
    store.token().set(None);
    store.access_level().set(String::new());
    store.tags().set(Vec::new());
}

pub fn store_has_full_access(store: &AppStore) -> bool {
    store.access_level().get() == "fullaccess"
}

pub fn store_show_snack(store: &AppStore, severity: Severity, text: impl Into<String>) {
    store.snackbar().set(Some(SnackMessage {
        text: text.into(),
        severity,
    }));
}

pub fn store_clear_snack(store: &AppStore) {
    store.snackbar().set(None);
}

/// Trigger a refetch of the content list
pub fn store_reload_contents(store: &AppStore) {
    store.content_reload().update(|v| *v += 1);
}

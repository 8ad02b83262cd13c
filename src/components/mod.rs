//! UI Components
//!
//! Reusable Leptos components, one per file.

mod content_card;
mod content_editor;
mod content_page;
mod dashboard;
mod delete_confirm_button;
mod download_modal;
mod login_form;
mod nav_bar;
mod page_navigation;
mod playground;
mod search_bar;
mod snackbar;
mod tag_filter;
mod urgency_rules;

pub use content_card::ContentCard;
pub use content_editor::ContentEditorPage;
pub use content_page::ContentListPage;
pub use dashboard::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use download_modal::DownloadModal;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use page_navigation::PageNavigation;
pub use playground::PlaygroundPage;
pub use search_bar::SearchBar;
pub use snackbar::Snackbar;
pub use tag_filter::TagFilter;
pub use urgency_rules::UrgencyRulesPage;

/// Render a backend UTC timestamp for display; falls back to the raw string
/// when it does not parse.
pub(crate) fn format_datetime(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

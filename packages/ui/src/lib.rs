//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const RECORDS_CSS: Asset = asset!("/assets/records.css");

mod navbar;
pub use navbar::Navbar;

mod client;
pub use client::{use_record_client, ClientProvider, UserService};

mod notify;
pub use notify::notify_failure;

mod attribute_field;
pub use attribute_field::AttributeField;

mod action_button;
pub use action_button::ActionButton;

mod record_editor;
pub use record_editor::{action_label, RecordEditor};

mod record_table;
pub use record_table::RecordTable;

pub mod activity_log;
pub use activity_log::{log_request, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

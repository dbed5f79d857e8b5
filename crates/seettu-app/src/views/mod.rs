//! # View State Module
//!
//! Typed view-state projections of the pool snapshot. Each view is a pure
//! function of the state it is handed: recomputed on every read, never
//! cached, never a source of truth. These types are serializable so a
//! frontend can render or ship them across an FFI boundary unchanged.

pub mod dashboard;
pub mod draw;
pub mod history;
pub mod notifications;
pub mod roster;

pub use dashboard::DashboardView;
pub use draw::DrawView;
pub use history::HistoryView;
pub use notifications::{NotificationsState, Toast, ToastLevel};
pub use roster::RosterView;

//! # Velocity Desk Roster
//!
//! The trader account list and the view state the account screens keep on top of it.
//!
//! Everything here is a plain function or a reducer over in-memory values.
//! Nothing is persisted: view state resets with the session.

pub mod archive;
pub mod error;
pub mod overview;
pub mod sample;
pub mod scope;

pub use archive::{ArchiveCounts, archive_counts, toggle_archive, visible_accounts};
pub use error::RosterError;
pub use overview::{OverviewAction, OverviewState, Selection, ViewMode, reconcile_selection};
pub use sample::mock_accounts;
pub use scope::{
    AccountScope, MetricsScreenAction, MetricsScreenState, MetricsSelection, metrics_target,
    reconcile_metrics_selection, scoped_accounts,
};

//! Shared job listing model.
//!
//! Holds the `Job` type loaded from the remote listing document, the
//! search filter applied to it and the per-company summary shown when no
//! job is selected. Nothing in here performs I/O.

pub mod company;
pub mod job;
pub mod search;

pub use company::{CompanySummary, company_summaries};
pub use job::{Job, JobRecord, present};
pub use search::{FilterKind, ParseFilterKindError, SearchCriterion, filter_jobs};

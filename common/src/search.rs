use crate::job::Job;
use std::fmt;
use std::str::FromStr;

/// The listing field a search is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Location,
    Company,
    JobType,
    Experience,
}

impl FilterKind {
    /// Selector order in the search bar.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Location,
        FilterKind::Company,
        FilterKind::JobType,
        FilterKind::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Location => "location",
            FilterKind::Company => "company",
            FilterKind::JobType => "jobType",
            FilterKind::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Location => "Location",
            FilterKind::Company => "Company",
            FilterKind::JobType => "Job Type",
            FilterKind::Experience => "Experience",
        }
    }

    fn field<'a>(&self, job: &'a Job) -> &'a str {
        match self {
            FilterKind::Location => &job.location,
            FilterKind::Company => &job.company,
            FilterKind::JobType => &job.employment_type,
            FilterKind::Experience => &job.experience,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter kind: {0}")]
pub struct ParseFilterKindError(String);

impl FromStr for FilterKind {
    type Err = ParseFilterKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseFilterKindError(s.to_string()))
    }
}

/// The active (kind, text) pair driving the list view.
///
/// `kind` is `None` when the submitted kind was not recognised; such a
/// criterion matches every job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriterion {
    pub kind: Option<FilterKind>,
    pub value: String,
}

impl Default for SearchCriterion {
    fn default() -> Self {
        Self {
            kind: Some(FilterKind::Location),
            value: String::new(),
        }
    }
}

impl SearchCriterion {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            value: value.into(),
        }
    }

    /// Builds a criterion from raw form input. A missing kind falls back to
    /// location, an unknown one disables filtering.
    pub fn from_input(kind: Option<&str>, value: Option<&str>) -> Self {
        let kind = match kind {
            None | Some("") => Some(FilterKind::Location),
            Some(raw) => raw.parse().ok(),
        };
        Self {
            kind,
            value: value.unwrap_or_default().to_string(),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        let Some(kind) = self.kind else {
            return true;
        };
        let needle = self.value.trim().to_lowercase();
        needle.is_empty() || kind.field(job).to_lowercase().contains(&needle)
    }
}

/// Returns the jobs matching `criterion`, in collection order.
pub fn filter_jobs<'a>(jobs: &'a [Job], criterion: &SearchCriterion) -> Vec<&'a Job> {
    if criterion.value.is_empty() || criterion.kind.is_none() {
        return jobs.iter().collect();
    }
    jobs.iter().filter(|job| criterion.matches(job)).collect()
}

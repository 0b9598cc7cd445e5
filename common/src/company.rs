use crate::job::Job;
use serde::Serialize;
use std::collections::HashMap;

/// Postings per company, shown when no job is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    pub name: String,
    pub openings: usize,
    /// Logo of the company's first posting, which may have none.
    pub logo: Option<String>,
}

impl CompanySummary {
    pub fn openings_label(&self) -> String {
        let plural = if self.openings == 1 { "" } else { "s" };
        format!("{} opening{} available", self.openings, plural)
    }
}

/// Groups `jobs` by company name in order of first appearance.
pub fn company_summaries(jobs: &[Job]) -> Vec<CompanySummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CompanySummary> = Vec::new();

    for job in jobs {
        match positions.get(job.company.as_str()) {
            Some(&index) => summaries[index].openings += 1,
            None => {
                positions.insert(&job.company, summaries.len());
                summaries.push(CompanySummary {
                    name: job.company.clone(),
                    openings: 1,
                    logo: job.company_image_url.clone(),
                });
            }
        }
    }

    summaries
}

use super::{EXTERNAL, escape};
use common::{CompanySummary, Job, company_summaries, present};

/// Right-hand panel: the selected job, or every company when nothing is
/// selected. Company counts always come from the full collection.
pub fn render(selected: Option<&Job>, all_jobs: &[Job]) -> String {
    match selected {
        Some(job) => details(job),
        None => companies(&company_summaries(all_jobs)),
    }
}

fn companies(summaries: &[CompanySummary]) -> String {
    let tiles: String = summaries
        .iter()
        .map(|summary| {
            let logo = match present(&summary.logo) {
                Some(src) => format!(
                    "<img class=\"logo\" src=\"{}\" alt=\"{} logo\">",
                    escape(src),
                    escape(&summary.name)
                ),
                None => "<span class=\"logo\" aria-hidden=\"true\">&#127970;</span>".to_string(),
            };
            format!(
                "<div class=\"company-tile\">{}<div><p><strong>{}</strong></p>\
                 <p class=\"label\">{}</p></div></div>",
                logo,
                escape(&summary.name),
                summary.openings_label()
            )
        })
        .collect();

    format!(
        "<div class=\"panel\"><h2>All Companies</h2><div class=\"companies\">{}</div></div>",
        tiles
    )
}

fn details(job: &Job) -> String {
    let mut html = String::new();

    let logo = present(&job.company_image_url)
        .map(|src| {
            format!(
                "<img class=\"logo\" src=\"{}\" alt=\"{} logo\">",
                escape(src),
                escape(&job.company)
            )
        })
        .unwrap_or_default();
    html.push_str(&format!(
        "<div class=\"hero\"><h2>{}</h2><div class=\"company\">{}</div>\
         <div class=\"location\">{}</div>{}</div>",
        escape(&job.title),
        escape(&job.company),
        escape(&job.location),
        logo
    ));

    html.push_str("<div class=\"panel\"><div class=\"facts\">");
    for (label, value) in [
        ("Employment Type", job.employment_type.clone()),
        ("Experience Required", job.experience.clone()),
        ("Posted On", job.posted_on()),
        ("Source", job.source.clone()),
    ] {
        html.push_str(&fact(label, &value));
    }
    html.push_str("</div>");

    if let Some(salary) = present(&job.salary) {
        html.push_str(&fact("Salary", salary));
    }

    if let Some(url) = present(&job.company_url) {
        html.push_str(&format!(
            "<div><h3 class=\"label\">Company Website</h3>\
             <a href=\"{}\" {}>Visit the company profile</a></div>",
            escape(url),
            EXTERNAL
        ));
    }

    html.push_str("<div><h3>Job Description</h3>");
    match present(&job.description) {
        Some(text) => html.push_str(&format!("<p class=\"pre\">{}</p>", escape(text))),
        None => html.push_str("<p class=\"muted\">No description available yet.</p>"),
    }
    html.push_str("</div>");

    for (heading, value) in [("Requirements", &job.requirements), ("Benefits", &job.benefits)] {
        if let Some(text) = present(value) {
            html.push_str(&format!(
                "<div><h3>{}</h3><p class=\"pre\">{}</p></div>",
                heading,
                escape(text)
            ));
        }
    }

    html.push_str(&format!(
        "<div><h3>Apply Now</h3><a class=\"apply\" href=\"{}\" {}>Apply for this position</a></div>",
        escape(&job.job_link),
        EXTERNAL
    ));

    if let Some(size) = present(&job.company_type) {
        html.push_str(&format!(
            "<div class=\"company-size\"><div class=\"label\">Company Size</div>\
             <div>{} company</div></div>",
            escape(&capitalize(size))
        ));
    }

    html.push_str("</div>");
    format!("<article class=\"job-details\">{}</article>", html)
}

fn fact(label: &str, value: &str) -> String {
    format!(
        "<div><div class=\"label\">{}</div><div>{}</div></div>",
        label,
        escape(value)
    )
}

/// Upper-cases the first letter of each word.
fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

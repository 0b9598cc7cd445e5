use super::{ViewState, escape};
use common::{Job, present};

/// One selectable row per job, in collection order.
pub fn render(jobs: &[&Job], view: &ViewState) -> String {
    if jobs.is_empty() {
        return "<p class=\"muted\">No jobs match your search.</p>".to_string();
    }

    jobs.iter()
        .map(|job| row(job, view.selected.as_deref() == Some(job.id.as_str()), view))
        .collect()
}

fn row(job: &Job, is_selected: bool, view: &ViewState) -> String {
    let logo = present(&job.company_image_url)
        .map(|src| {
            format!(
                "<img class=\"logo\" src=\"{}\" alt=\"{} logo\" loading=\"lazy\">",
                escape(src),
                escape(&job.company)
            )
        })
        .unwrap_or_default();

    format!(
        "<a class=\"job-item{selected}\" href=\"{href}\" data-job-id=\"{id}\">\
         <div class=\"row-head\"><h3>{title}</h3>{logo}</div>\
         <div class=\"company\">{company}</div>\
         <div class=\"location\">{location}</div>\
         <div><span class=\"tag\">{employment_type}</span> \
         <span class=\"experience\">{experience}</span></div></a>",
        selected = if is_selected { " selected" } else { "" },
        href = escape(&view.href_selecting(&job.id)),
        id = escape(&job.id),
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        employment_type = escape(&job.employment_type),
        experience = escape(&job.experience),
    )
}

//! Server-rendered HTML for the single listings page.

mod job_details;
mod job_list;
mod layout;
mod search_bar;

use crate::state::{LoadState, Session};
use common::{SearchCriterion, filter_jobs};
use url::form_urlencoded;

/// Per-request view state, carried in the query string.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kind exactly as submitted, so links keep an unrecognised kind.
    pub kind: Option<String>,
    pub criterion: SearchCriterion,
    pub selected: Option<String>,
}

impl ViewState {
    pub fn new(kind: Option<String>, query: Option<String>, selected: Option<String>) -> Self {
        let criterion = SearchCriterion::from_input(kind.as_deref(), query.as_deref());
        Self {
            kind,
            criterion,
            selected: selected.filter(|id| !id.is_empty()),
        }
    }

    /// Link to this page with the same criterion and `selected` as selection.
    pub fn href_selecting(&self, selected: &str) -> String {
        let kind = self
            .kind
            .as_deref()
            .or(self.criterion.kind.map(|kind| kind.as_str()))
            .unwrap_or_default();

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("kind", kind)
            .append_pair("q", &self.criterion.value)
            .append_pair("selected", selected)
            .finish();
        format!("/?{}", query)
    }
}

pub fn render_page(session: &Session, view: &ViewState) -> String {
    let body = match &session.load {
        LoadState::Loading => layout::loading(),
        LoadState::Failed(message) => layout::load_error(message),
        LoadState::Loaded(jobs) => {
            let filtered = filter_jobs(jobs, &view.criterion);
            let selected = view
                .selected
                .as_deref()
                .and_then(|id| jobs.iter().find(|job| job.id == id));

            format!(
                "{header}<div class=\"container\">{search}</div>\
                 <main class=\"container grid\">\
                 <section class=\"job-list\">{list}</section>\
                 <section class=\"job-panel\">{details}</section>\
                 </main>",
                header = layout::header(),
                search = search_bar::render(view),
                list = job_list::render(&filtered, view),
                details = job_details::render(selected, jobs),
            )
        }
    };

    let refresh = matches!(session.load, LoadState::Loading);
    layout::document(session.show_advisory, refresh, &body)
}

/// Escapes text for use in HTML content and quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attributes for links that leave the application.
pub(crate) const EXTERNAL: &str = "target=\"_blank\" rel=\"noopener noreferrer\"";

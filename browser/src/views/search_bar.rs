use super::{ViewState, escape};
use common::FilterKind;

/// Search form. Submitting it replaces the criterion and keeps the
/// current selection.
pub fn render(view: &ViewState) -> String {
    let active = view.criterion.kind.unwrap_or(FilterKind::Location);

    let options: String = FilterKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                kind.as_str(),
                if *kind == active { " selected" } else { "" },
                kind.label()
            )
        })
        .collect();

    let selected = view
        .selected
        .as_deref()
        .map(|id| format!("<input type=\"hidden\" name=\"selected\" value=\"{}\">", escape(id)))
        .unwrap_or_default();

    format!(
        "<form method=\"get\" action=\"/\" class=\"search-bar\">\
         <input type=\"text\" name=\"q\" placeholder=\"Search by {label}\" value=\"{value}\">\
         <select name=\"kind\">{options}</select>{selected}\
         <button type=\"submit\">Search</button></form>",
        label = active.label(),
        value = escape(&view.criterion.value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preselects_active_kind() {
        let html = render(&ViewState::new(Some("jobType".into()), Some("contract".into()), None));
        assert!(html.contains("<option value=\"jobType\" selected>Job Type</option>"));
        assert!(html.contains("placeholder=\"Search by Job Type\""));
        assert!(html.contains("value=\"contract\""));
        assert!(!html.contains("name=\"selected\""));
    }

    #[test]
    fn test_carries_selection() {
        let html = render(&ViewState::new(None, None, Some("job-3-42".into())));
        assert!(html.contains("<input type=\"hidden\" name=\"selected\" value=\"job-3-42\">"));
        assert!(html.contains("placeholder=\"Search by Location\""));
    }

    #[test]
    fn test_escapes_value() {
        let html = render(&ViewState::new(None, Some("\"><script>".into()), None));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }
}

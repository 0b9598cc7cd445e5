use super::escape;

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}\
.container{max-width:80rem;margin:0 auto;padding:1.5rem 1rem}\
.grid{display:grid;grid-template-columns:1fr 1fr;gap:1.5rem}\
.advisory{position:fixed;top:0;left:0;right:0;z-index:50;background:#facc15;text-align:center;padding:1rem}\
.hero{background:linear-gradient(to right,#4f46e5,#0891b2);color:#fff;padding:2rem 1rem}\
.centered{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center}\
.error{color:#ef4444}.hint{color:#4b5563}\
.job-item{display:block;padding:1rem;margin-bottom:1rem;border-radius:.5rem;background:#fff;color:inherit;text-decoration:none;box-shadow:0 1px 2px #0002}\
.job-item.selected{background:linear-gradient(to right,#4f46e5,#0891b2);color:#fff}\
.tag{display:inline-block;padding:.1rem .6rem;border-radius:9999px;background:#e0e7ff;font-size:.75rem}\
.logo{width:2.5rem;height:2.5rem;border-radius:9999px;object-fit:cover}\
.panel{background:#fff;border-radius:.5rem;box-shadow:0 1px 2px #0002;padding:1.5rem}\
.companies{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
.facts{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
.label{font-size:.875rem;color:#6b7280}\
.muted{color:#6b7280;font-style:italic}\
.pre{white-space:pre-wrap}\
.apply{display:inline-block;padding:.5rem 1rem;border-radius:.375rem;background:#4f46e5;color:#fff;text-decoration:none}";

const ADVISORY: &str = "For the first time, loading may seem slow. Please wait, and everything will work great!";

/// Wraps `body` in the page shell.
///
/// While loading the page refreshes itself so the finished load shows up
/// without user action.
pub fn document(show_advisory: bool, refresh: bool, body: &str) -> String {
    let refresh = if refresh {
        "<meta http-equiv=\"refresh\" content=\"1\">"
    } else {
        ""
    };
    let banner = if show_advisory {
        format!("<div class=\"advisory\" role=\"status\">{}</div>", ADVISORY)
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         {refresh}<title>Job Listings</title><style>{STYLE}</style></head>\
         <body>{banner}{body}</body></html>"
    )
}

pub fn loading() -> String {
    "<div class=\"centered\">Loading...</div>".to_string()
}

pub fn load_error(message: &str) -> String {
    format!(
        "<div class=\"centered error\"><h2>Error Loading Jobs</h2><p>{}</p>\
         <p class=\"hint\">Please try refreshing the page or check your internet connection.</p></div>",
        escape(message)
    )
}

pub fn header() -> &'static str {
    "<header class=\"hero\"><div class=\"container\">\
     <h1>Job Listings</h1><p>Find your dream job today</p></div></header>"
}

//! Server-rendered HTML pages.
//!
//! Every value that originates from a request or the database goes through
//! [`escape`] before it is interpolated.

pub mod dashboard;
pub mod login;
pub mod records;

use axum::http::StatusCode;
use axum::response::Html;

pub use dashboard::dashboard_page;
pub use login::login_page;
pub use records::{edit_page, index_page};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
table{border-collapse:collapse;}\
th,td{border:1px solid #ccc;padding:.3rem .6rem;text-align:left;}\
nav a{margin-right:1rem;}\
.error{color:#b00;}";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Percent-encode a query parameter value.
pub(crate) fn encode_query(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn layout(title: &str, user: Option<&str>, body: &str) -> Html<String> {
    let nav = match user {
        Some(user) => format!(
            r#"<nav><a href="/">Records</a><a href="/dashboard">Dashboard</a><a href="/export">Export CSV</a><a href="/logout">Logout ({})</a></nav>"#,
            escape(user)
        ),
        None => String::new(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{nav}
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<p class="error">{}</p><p><a href="/">Back to records</a></p>"#,
        escape(message)
    );
    layout(title, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn encode_query_spaces_and_symbols() {
        assert_eq!(encode_query("a b&c"), "a+b%26c");
    }

    #[test]
    fn error_page_uses_reason_phrase() {
        let Html(body) = error_page(StatusCode::NOT_FOUND, "gone <now>");
        assert!(body.contains("<h1>Not Found</h1>"));
        assert!(body.contains("gone &lt;now&gt;"));
    }
}

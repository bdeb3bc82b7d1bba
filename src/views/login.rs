use axum::response::Html;

use super::{escape, layout};

/// Login form, optionally with an error line and the username to prefill.
pub fn login_page(error: Option<&str>, username: &str) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"{error}
<form method="post" action="/login">
<p><label>Username <input name="username" value="{username}" required autofocus></label></p>
<p><label>Password <input name="password" type="password" required></label></p>
<p><button type="submit">Sign in</button></p>
</form>"#,
        username = escape(username),
    );
    layout("ADR Registry Login", None, &body)
}

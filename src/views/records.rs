use axum::response::Html;

use super::{encode_query, escape, layout};
use crate::db::AdrRecord;
use crate::types::Page;

fn record_row(r: &AdrRecord) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{drug}</td><td>{reaction}</td><td>{severity}</td><td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}" onclick="return confirm('Delete this report?')">Delete</a></td></tr>
"#,
        id = r.id,
        name = escape(&r.name),
        age = r.age,
        drug = escape(&r.drug),
        reaction = escape(&r.reaction),
        severity = escape(&r.severity),
    )
}

fn page_href(number: u32, search: Option<&str>) -> String {
    match search {
        Some(s) => format!("/?search={}&amp;page={number}", encode_query(s)),
        None => format!("/?page={number}"),
    }
}

fn pagination(page: &Page, search: Option<&str>) -> String {
    let prev = if page.has_prev() {
        format!(
            r#"<a href="{}">&laquo; Previous</a> "#,
            page_href(page.number - 1, search)
        )
    } else {
        String::new()
    };
    let next = if page.has_next() {
        format!(
            r#" <a href="{}">Next &raquo;</a>"#,
            page_href(page.number + 1, search)
        )
    } else {
        String::new()
    };
    format!(
        "<p>{prev}Page {} of {} ({} reports){next}</p>",
        page.number, page.total_pages, page.total_items
    )
}

fn record_fields(r: Option<&AdrRecord>) -> String {
    let (name, age, drug, reaction, severity) = match r {
        Some(r) => (
            escape(&r.name),
            r.age.to_string(),
            escape(&r.drug),
            escape(&r.reaction),
            escape(&r.severity),
        ),
        None => Default::default(),
    };
    format!(
        r#"<input name="name" placeholder="Patient name" value="{name}" required>
<input name="age" type="number" min="0" placeholder="Age" value="{age}" required>
<input name="drug" placeholder="Drug" value="{drug}" required>
<input name="reaction" placeholder="Reaction" value="{reaction}" required>
<input name="severity" placeholder="Severity" value="{severity}" required>"#
    )
}

/// Listing page: search box, add form, one page of records and page links.
pub fn index_page(
    user: &str,
    records: &[AdrRecord],
    page: &Page,
    search: Option<&str>,
) -> Html<String> {
    let search_value = search.map(escape).unwrap_or_default();
    let clear = if search.is_some() {
        r#" <a href="/">Clear</a>"#
    } else {
        ""
    };
    let table = if records.is_empty() {
        "<p>No matching reports.</p>".to_string()
    } else {
        let rows: String = records.iter().map(record_row).collect();
        format!(
            "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Age</th><th>Drug</th><th>Reaction</th><th>Severity</th><th></th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };
    let body = format!(
        r#"<form method="get" action="/">
<input name="search" placeholder="Search name, drug or severity" value="{search_value}">
<button type="submit">Search</button>{clear}
</form>
<h2>Add report</h2>
<form method="post" action="/add">
{fields}
<button type="submit">Add</button>
</form>
<h2>Reports</h2>
{table}
{pager}"#,
        fields = record_fields(None),
        pager = pagination(page, search),
    );
    layout("ADR Registry", Some(user), &body)
}

pub fn edit_page(user: &str, record: &AdrRecord) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="/update/{id}">
{fields}
<button type="submit">Save</button> <a href="/">Cancel</a>
</form>"#,
        id = record.id,
        fields = record_fields(Some(record)),
    );
    layout(&format!("Edit report #{}", record.id), Some(user), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdrRecord {
        AdrRecord {
            id: 7,
            name: "<script>".to_string(),
            age: 30,
            drug: "Amoxicillin".to_string(),
            reaction: "Hives".to_string(),
            severity: "Moderate".to_string(),
        }
    }

    #[test]
    fn index_escapes_record_values() {
        let page = Page::resolve(None, 10, 1);
        let Html(html) = index_page("admin", &[sample()], &page, None);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
        assert!(html.contains(r#"href="/edit/7""#));
    }

    #[test]
    fn page_links_keep_search() {
        let page = Page::resolve(Some(1), 10, 25);
        let Html(html) = index_page("admin", &[], &page, Some("pen g"));
        assert!(html.contains("/?search=pen+g&amp;page=2"));
        assert!(html.contains("Page 1 of 3"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let Html(html) = edit_page("admin", &sample());
        assert!(html.contains(r#"action="/update/7""#));
        assert!(html.contains(r#"value="Amoxicillin""#));
        assert!(html.contains(r#"value="30""#));
    }
}

use serde::Deserialize;

use crate::db::NewAdrRecord;

/// Body of `POST /add` and `POST /update/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdrForm {
    pub name: String,
    pub age: i64,
    pub drug: String,
    pub reaction: String,
    pub severity: String,
}

impl From<AdrForm> for NewAdrRecord {
    fn from(f: AdrForm) -> Self {
        Self {
            name: f.name,
            age: f.age,
            drug: f.drug,
            reaction: f.reaction,
            severity: f.severity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query string of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ListQuery {
    /// Search text with surrounding whitespace removed; blank means no filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::ListQuery;

    #[test]
    fn blank_search_is_no_filter() {
        let q = ListQuery {
            search: Some("   ".to_string()),
            page: None,
        };
        assert_eq!(q.search_term(), None);
        let q = ListQuery {
            search: Some(" Severe ".to_string()),
            page: None,
        };
        assert_eq!(q.search_term(), Some("Severe"));
    }
}

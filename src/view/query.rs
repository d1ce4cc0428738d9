//! Query-string access for the page being rendered.

use url::form_urlencoded;

/// Parsed query string of the current page.
///
/// Accepts a bare query (`order_id=1`), a query with its leading `?`, a
/// relative page path (`details.html?order_id=1`) or a full URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pairs: Vec<(String, String)>,
}

impl PageQuery {
    pub fn parse(raw: &str) -> Self {
        let query = match raw.split_once('?') {
            Some((_, query)) => query,
            None => raw,
        };
        let query = query.split('#').next().unwrap_or_default();
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `key`. An empty value counts as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

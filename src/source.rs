//! Raw filter input gathered from the persisted cookie and the URL query.
//!
//! Nothing here validates category names. Duplicates and names contradicting
//! each other are left for `FilterState` to reconcile.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::category::Category;
use crate::error::FilterError;

/// Persisted filter state, stored as JSON in the filter cookie.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieFilter {
    #[serde(deserialize_with = "null_as_empty")]
    pub show: Vec<Category>,
    #[serde(deserialize_with = "null_as_empty")]
    pub hide: Vec<Category>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Category>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CookieFilter {
    /// Finds and decodes the cookie called `name` in a `document.cookie` string.
    ///
    /// Returns `Ok(None)` when no such cookie is set.
    pub fn from_cookie_header(header: &str, name: &str) -> Result<Option<Self>, FilterError> {
        let Some(raw) = find_cookie(header, name) else {
            return Ok(None);
        };
        let decoded = urlencoding::decode(raw).map_err(|e| FilterError::Cookie {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let filter = serde_json::from_str(&decoded).map_err(|e| FilterError::Cookie {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(filter))
    }

    /// Like `from_cookie_header`, but an unreadable cookie counts as absent.
    pub fn from_cookie_header_lossy(header: &str, name: &str) -> Option<Self> {
        match Self::from_cookie_header(header, name) {
            Ok(filter) => filter,
            Err(err) => {
                warn!(%err, "ignoring filter cookie");
                None
            }
        }
    }

    /// Serializes to the percent-encoded form stored in the cookie.
    pub fn to_cookie_value(&self) -> Result<String, FilterError> {
        let json = serde_json::to_string(self).map_err(|e| FilterError::Cookie {
            name: String::new(),
            reason: e.to_string(),
        })?;
        Ok(urlencoding::encode(&json).into_owned())
    }
}

fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim_start().split_once('='))
        .find(|(key, _)| key.trim_end() == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
        })
}

/// Candidate show and hide lists before reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFilters {
    pub show: Vec<Category>,
    pub hide: Vec<Category>,
}

impl RawFilters {
    /// Reads every `show` and `hide` parameter of a query string.
    ///
    /// A leading `?` is accepted. Empty values are dropped.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut raw = RawFilters::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "show" => raw.show.push(Category::new(value.into_owned())),
                "hide" => raw.hide.push(Category::new(value.into_owned())),
                _ => {}
            }
        }
        raw
    }

    /// Cookie values first, then query values.
    pub fn collect(cookie: Option<CookieFilter>, query: &str) -> Self {
        let mut raw = RawFilters::default();
        if let Some(cookie) = cookie {
            raw.show.extend(cookie.show);
            raw.hide.extend(cookie.hide);
        }
        let from_query = RawFilters::from_query(query);
        raw.show.extend(from_query.show);
        raw.hide.extend(from_query.hide);
        raw
    }
}

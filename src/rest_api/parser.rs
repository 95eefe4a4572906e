//! # Query Parameter Parser
//!
//! Parses the pagination parameters of the list endpoint.

use super::errors::{ApiError, ApiResult};

/// Raw `?id=&limit=` parameters.
///
/// Kept as strings so an empty value behaves like an absent one.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Last id seen by the caller
    pub id: Option<String>,

    /// Maximum number of rows to return
    pub limit: Option<String>,
}

/// Decoded cursor page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Return rows with an id strictly greater than this
    pub after: i64,

    /// Row bound, unbounded when `None`
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Collect from decoded query pairs. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut query.id,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Decode into a page; the cursor defaults to 0
    pub fn page(&self) -> ApiResult<Page> {
        let after = parse_int("id", self.id.as_deref())?.unwrap_or(0);
        let limit = parse_int("limit", self.limit.as_deref())?;

        if let Some(limit) = limit {
            if limit < 0 {
                return Err(ApiError::InvalidParam(format!(
                    "limit must not be negative: {}",
                    limit
                )));
            }
        }

        Ok(Page { after, limit })
    }
}

fn parse_int(name: &str, value: Option<&str>) -> ApiResult<Option<i64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidParam(format!("Invalid {}: {}", name, v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(id: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            id: id.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let page = ListQuery::default().page().unwrap();
        assert_eq!(page, Page { after: 0, limit: None });
    }

    #[test]
    fn test_empty_values_are_absent() {
        let page = query(Some(""), Some("  ")).page().unwrap();
        assert_eq!(page, Page { after: 0, limit: None });
    }

    #[test]
    fn test_cursor_and_limit() {
        let page = query(Some("2"), Some("2")).page().unwrap();
        assert_eq!(page, Page { after: 2, limit: Some(2) });
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let query = ListQuery::from_pairs(pairs(&[("id", "1"), ("limit", "5"), ("id", "2")]));
        assert_eq!(query.page().unwrap(), Page { after: 1, limit: Some(5) });
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = ListQuery::from_pairs(pairs(&[("sort", "desc"), ("limit", "3")]));
        assert_eq!(query.page().unwrap(), Page { after: 0, limit: Some(3) });
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            query(Some("abc"), None).page(),
            Err(ApiError::InvalidParam(_))
        ));
        assert!(matches!(
            query(None, Some("ten")).page(),
            Err(ApiError::InvalidParam(_))
        ));
        assert!(matches!(
            query(None, Some("-1")).page(),
            Err(ApiError::InvalidParam(_))
        ));
    }
}

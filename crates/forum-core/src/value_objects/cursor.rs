//! Opaque pagination cursors
//!
//! A cursor is `"<sortValue>_<id>"`: the sort value is an RFC 3339 timestamp
//! with nanosecond precision for recency listings, or a score formatted to
//! two decimal places for trending listings. The id is the uuid tie-break.
//! A cursor belongs to exactly one ordering; decoding it under the other one
//! fails with `CursorModeMismatch`.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Resumption point for a recency-ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl RecencyCursor {
    pub const fn new(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { created_at, id }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.id
        )
    }

    pub fn decode(raw: &str) -> Result<Self, DomainError> {
        let (sort_value, id) = split_cursor(raw)?;
        let created_at = DateTime::parse_from_rfc3339(sort_value)
            .map_err(|_| DomainError::CursorModeMismatch)?
            .with_timezone(&Utc);
        Ok(Self { created_at, id })
    }
}

/// Resumption point for a trending-ordered listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendingCursor {
    pub score: f64,
    pub id: Uuid,
}

impl TrendingCursor {
    pub const fn new(score: f64, id: Uuid) -> Self {
        Self { score, id }
    }

    pub fn encode(&self) -> String {
        format!("{:.2}_{}", self.score, self.id)
    }

    pub fn decode(raw: &str) -> Result<Self, DomainError> {
        let (sort_value, id) = split_cursor(raw)?;
        let score = sort_value
            .parse::<f64>()
            .map_err(|_| DomainError::CursorModeMismatch)?;
        Ok(Self { score, id })
    }
}

/// Split on the first `_`; both parts must be present and the id must be a
/// uuid. Uuids contain no `_`, so the delimiter is unambiguous.
fn split_cursor(raw: &str) -> Result<(&str, Uuid), DomainError> {
    let (sort_value, id) = raw.split_once('_').ok_or(DomainError::MalformedCursor)?;
    let id = Uuid::parse_str(id).map_err(|_| DomainError::MalformedCursor)?;
    Ok((sort_value, id))
}

/// One page of a cursor-paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Empty when the listing is exhausted
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Apply the fetch-one-extra protocol to rows queried with `LIMIT limit + 1`.
    ///
    /// When more than `limit` rows came back, the surplus row is dropped from
    /// the page and its key becomes the next cursor; the follow-up query's
    /// inclusive `(sort, id) <= (cursor sort, cursor id)` predicate makes that
    /// row the first of the next page.
    pub fn from_rows<F>(mut rows: Vec<T>, limit: usize, cursor_of: F) -> Self
    where
        F: FnOnce(&T) -> String,
    {
        let next_cursor = if rows.len() > limit {
            let cursor = rows.get(limit).map(cursor_of);
            rows.truncate(limit);
            cursor
        } else {
            None
        };

        Self {
            items: rows,
            next_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_recency_roundtrip() {
        let cursor = RecencyCursor::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            Uuid::new_v4(),
        );
        let decoded = RecencyCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_recency_encodes_nanosecond_precision() {
        let id = Uuid::nil();
        let cursor = RecencyCursor::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(), id);
        assert_eq!(
            cursor.encode(),
            format!("2024-05-01T12:00:00.000000000Z_{id}")
        );
    }

    #[test]
    fn test_trending_roundtrip() {
        let cursor = TrendingCursor::new(87.43, Uuid::new_v4());
        let encoded = cursor.encode();
        assert!(encoded.starts_with("87.43_"));
        let decoded = TrendingCursor::decode(&encoded).unwrap();
        assert_eq!(decoded.score, cursor.score);
        assert_eq!(decoded.id, cursor.id);
    }

    #[test]
    fn test_trending_formats_two_decimals() {
        let id = Uuid::nil();
        assert_eq!(TrendingCursor::new(5.0, id).encode(), format!("5.00_{id}"));
        assert_eq!(TrendingCursor::new(0.125, id).encode(), format!("0.12_{id}"));
    }

    #[test]
    fn test_malformed_cursor_without_delimiter() {
        assert!(matches!(
            RecencyCursor::decode("no-delimiter"),
            Err(DomainError::MalformedCursor)
        ));
        assert!(matches!(
            TrendingCursor::decode(""),
            Err(DomainError::MalformedCursor)
        ));
    }

    #[test]
    fn test_malformed_cursor_with_bad_id() {
        assert!(matches!(
            TrendingCursor::decode("87.43_not-a-uuid"),
            Err(DomainError::MalformedCursor)
        ));
    }

    #[test]
    fn test_mode_mismatch() {
        let id = Uuid::new_v4();
        // trending cursor fed to the recency decoder
        assert!(matches!(
            RecencyCursor::decode(&format!("87.43_{id}")),
            Err(DomainError::CursorModeMismatch)
        ));
        // recency cursor fed to the trending decoder
        assert!(matches!(
            TrendingCursor::decode(&format!("2024-05-01T12:00:00.000000000Z_{id}")),
            Err(DomainError::CursorModeMismatch)
        ));
    }

    #[test]
    fn test_page_full_keeps_cursor_from_surplus_row() {
        let rows = vec![5, 4, 3];
        let page = Page::from_rows(rows, 2, |n| format!("cursor-{n}"));
        assert_eq!(page.items, vec![5, 4]);
        assert_eq!(page.next_cursor.as_deref(), Some("cursor-3"));
    }

    #[test]
    fn test_page_short_ends_stream() {
        let page = Page::from_rows(vec![1], 2, |n: &i32| format!("cursor-{n}"));
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_page_exact_limit_ends_stream() {
        let page = Page::from_rows(vec![2, 1], 2, |n: &i32| format!("cursor-{n}"));
        assert_eq!(page.items, vec![2, 1]);
        assert_eq!(page.next_cursor, None);
    }
}

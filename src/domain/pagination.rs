use super::ValidationError;

pub const DEFAULT_PAGE_LIMIT: i64 = 100;
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Offset page over rows in primary-key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: i64,
    limit: i64,
}

impl Pagination {
    pub fn parse(
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);

        if skip < 0 {
            return Err(ValidationError::new(
                "skip must not be negative".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(ValidationError::new(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}"
            )));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[test]
fn test_pagination_defaults() {
    let page = Pagination::parse(None, None).unwrap();
    assert_eq!(page, Pagination::default());
    assert_eq!((page.skip(), page.limit()), (0, 100));
}

#[test]
fn test_pagination_bounds() {
    assert!(Pagination::parse(Some(2), Some(2)).is_ok());
    assert!(Pagination::parse(Some(0), Some(MAX_PAGE_LIMIT)).is_ok());
    assert_eq!(
        Pagination::parse(Some(-1), None).unwrap_err().as_ref(),
        "skip must not be negative"
    );
    for limit in [0, -5, MAX_PAGE_LIMIT + 1] {
        assert_eq!(
            Pagination::parse(None, Some(limit)).unwrap_err().as_ref(),
            "limit must be between 1 and 1000"
        );
    }
}

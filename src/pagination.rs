use crate::error::IncreaseError;
use serde::{Deserialize, Serialize};

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// List parameters that can be advanced with a cursor.
pub trait Paginated: Serialize + Clone {
    fn cursor(&self) -> Option<&str>;
    fn set_cursor(&mut self, cursor: Option<String>);
    fn limit(&self) -> Option<u32>;

    fn validate_limit(&self) -> Result<(), IncreaseError> {
        match self.limit() {
            Some(limit) if limit == 0 || limit > MAX_PAGE_SIZE => Err(
                IncreaseError::InvalidParameter("limit must be between 1 and 100"),
            ),
            _ => Ok(()),
        }
    }
}

/// Implements [`Paginated`] for list parameter structs with `cursor` and
/// `limit` fields.
macro_rules! paginated {
    ($($params:ty),+ $(,)?) => {
        $(
            impl $crate::pagination::Paginated for $params {
                fn cursor(&self) -> Option<&str> {
                    self.cursor.as_deref()
                }

                fn set_cursor(&mut self, cursor: Option<String>) {
                    self.cursor = cursor;
                }

                fn limit(&self) -> Option<u32> {
                    self.limit
                }
            }
        )+
    };
}

pub(crate) use paginated;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Default, Serialize)]
    struct Params {
        cursor: Option<String>,
        limit: Option<u32>,
    }

    paginated!(Params);

    #[test]
    fn parses_page() {
        let page: Page<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "next_cursor": "v57w5d"
        }))
        .expect("page should parse");
        assert_eq!(page.data.len(), 2);
        assert!(page.has_next_page());
    }

    #[test]
    fn last_page_has_no_cursor() {
        let page: Page<String> =
            serde_json::from_value(json!({ "data": [], "next_cursor": null })).expect("parses");
        assert!(!page.has_next_page());
    }

    #[test]
    fn limit_bounds_are_checked() {
        let mut params = Params::default();
        assert!(params.validate_limit().is_ok());
        params.limit = Some(0);
        assert!(params.validate_limit().is_err());
        params.limit = Some(101);
        assert!(params.validate_limit().is_err());
        params.limit = Some(100);
        assert!(params.validate_limit().is_ok());
        params.set_cursor(Some("next".into()));
        assert_eq!(params.cursor(), Some("next"));
    }
}

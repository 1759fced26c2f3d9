//! Pagination driver
//!
//! Paged endpoints take `offset`/`limit` query parameters and report the
//! number of available entries in `pagination.total`. The iterators here walk
//! such an endpoint lazily, one request per page, until the offset reaches the
//! reported total.

use super::{ApiError, Client, Params, Transport};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Lazy sequence of whole pages from a paginated endpoint.
///
/// Single-pass: once a request fails the error is yielded and the iterator
/// is exhausted. Nothing is retried.
pub struct Pages<'a, T, D> {
    client: &'a Client<T>,
    path: String,
    params: Params,
    limit: u64,
    offset: u64,
    /// Total reported by the last response; starts at `limit` so that the
    /// first page is always requested
    total: u64,
    finished: bool,
    _page: PhantomData<fn() -> D>,
}

impl<'a, T: Transport, D: DeserializeOwned> Pages<'a, T, D> {
    pub(super) fn new(client: &'a Client<T>, path: &str, limit: u64, params: Params) -> Self {
        Self {
            client,
            path: path.to_string(),
            params,
            limit,
            offset: 0,
            total: limit,
            finished: false,
            _page: PhantomData,
        }
    }

    fn fetch_page(&mut self) -> Result<D, ApiError> {
        let mut params: Params = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        params.extend(self.params.iter().cloned());

        let url = self.client.url(&self.path, &params)?;
        let envelope = self.client.get_envelope(url)?;
        envelope.ensure_success()?;

        let pagination = envelope
            .pagination
            .ok_or_else(|| ApiError::MissingPagination {
                url: envelope.source.clone(),
            })?;
        self.total = pagination.total;

        envelope.into_data()
    }
}

impl<T: Transport, D: DeserializeOwned> Iterator for Pages<'_, T, D> {
    type Item = Result<D, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.limit == 0 {
            self.finished = true;
            return Some(Err(ApiError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            )));
        }

        if self.offset >= self.total {
            self.finished = true;
            return None;
        }

        match self.fetch_page() {
            Ok(page) => {
                // An offset past u64::MAX cannot address further entries
                match self.offset.checked_add(self.limit) {
                    Some(offset) => self.offset = offset,
                    None => self.finished = true,
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Lazy sequence of the individual entries of a paginated endpoint whose
/// pages are JSON arrays.
pub struct Items<'a, T, D> {
    pages: Pages<'a, T, Vec<D>>,
    current: std::vec::IntoIter<D>,
}

impl<'a, T: Transport, D: DeserializeOwned> Items<'a, T, D> {
    pub(super) fn new(pages: Pages<'a, T, Vec<D>>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
        }
    }
}

impl<T: Transport, D: DeserializeOwned> Iterator for Items<'_, T, D> {
    type Item = Result<D, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }

            match self.pages.next()? {
                Ok(page) => self.current = page.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{ScriptedTransport, failure, page};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_walks_all_pages() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([1, 2]), 0, 2, 5));
        client.transport().push(page(json!([3, 4]), 2, 2, 5));
        client.transport().push(page(json!([5]), 4, 2, 5));

        let items: Vec<u64> = client
            .request_items("/v1/blog/all", 2, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);

        let urls: Vec<String> = client
            .transport()
            .requests()
            .iter()
            .map(|r| r.url.to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://api.rocketbeans.tv/v1/blog/all?offset=0&limit=2",
                "https://api.rocketbeans.tv/v1/blog/all?offset=2&limit=2",
                "https://api.rocketbeans.tv/v1/blog/all?offset=4&limit=2",
            ]
        );
    }

    #[test]
    fn test_stops_exactly_at_total() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([1, 2]), 0, 2, 4));
        client.transport().push(page(json!([3, 4]), 2, 2, 4));
        // Would be served if the driver asked for a third page
        client.transport().push(page(json!([99]), 4, 2, 4));

        let items: Vec<u64> = client
            .request_items("/v1/blog/all", 2, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[test]
    fn test_empty_result_still_requests_first_page() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([]), 0, 50, 0));

        let pages: Vec<Vec<u64>> = client
            .request_pages("/v1/media/episode/byshow/1", 50, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(pages, vec![Vec::<u64>::new()]);
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn test_pages_are_not_flattened() {
        let client = ScriptedTransport::client();
        client
            .transport()
            .push(page(json!({"episodes": [1, 2]}), 0, 2, 3));
        client
            .transport()
            .push(page(json!({"episodes": [3]}), 2, 2, 3));

        let pages: Vec<serde_json::Value> = client
            .request_pages("/v1/media/episode/byshow/1", 2, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            pages,
            vec![json!({"episodes": [1, 2]}), json!({"episodes": [3]})]
        );
    }

    #[test]
    fn test_extra_params_follow_offset_and_limit() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([]), 0, 50, 0));

        let mut pages = client.request_pages::<Vec<u64>>(
            "/v1/media/episode/byshow/3",
            50,
            vec![("order", "DESC".to_string())],
        );
        assert!(pages.next().unwrap().is_ok());
        assert!(pages.next().is_none());

        let requests = client.transport().requests();
        assert_eq!(
            requests[0].url.query(),
            Some("offset=0&limit=50&order=DESC")
        );
    }

    #[test]
    fn test_error_aborts_sequence() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([1, 2]), 0, 2, 6));
        client.transport().push(failure());
        client.transport().push(page(json!([5, 6]), 4, 2, 6));

        let mut items = client.request_items::<u64>("/v1/blog/all", 2, Vec::new());
        assert_eq!(items.next().unwrap().unwrap(), 1);
        assert_eq!(items.next().unwrap().unwrap(), 2);
        assert!(matches!(
            items.next(),
            Some(Err(ApiError::Unsuccessful { .. }))
        ));
        assert!(items.next().is_none());
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[test]
    fn test_missing_pagination_is_an_error() {
        let client = ScriptedTransport::client();
        client
            .transport()
            .push_status(200, r#"{"success": true, "data": [1]}"#);

        let mut pages = client.request_pages::<Vec<u64>>("/v1/blog/all", 50, Vec::new());
        assert!(matches!(
            pages.next(),
            Some(Err(ApiError::MissingPagination { .. }))
        ));
        assert!(pages.next().is_none());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let client = ScriptedTransport::client();
        let mut pages = client.request_pages::<Vec<u64>>("/v1/blog/all", 0, Vec::new());
        assert!(matches!(
            pages.next(),
            Some(Err(ApiError::InvalidArgument(_)))
        ));
        assert!(pages.next().is_none());
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_is_lazy() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([1, 2]), 0, 2, 100));

        let first: Vec<u64> = client
            .request_items("/v1/blog/all", 2, Vec::new())
            .take(2)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn test_repeated_walk_is_served_from_memo() {
        let client = ScriptedTransport::client();
        client.transport().push(page(json!([1, 2]), 0, 2, 3));
        client.transport().push(page(json!([3]), 2, 2, 3));

        let first: Vec<u64> = client
            .request_items("/v1/blog/all", 2, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        let second: Vec<u64> = client
            .request_items("/v1/blog/all", 2, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, first);
        assert_eq!(client.transport().requests().len(), 2);
        assert_eq!(client.memoized_len(), 2);
    }

    #[test]
    fn test_huge_page_size_ends_instead_of_wrapping() {
        let client = ScriptedTransport::client();
        let limit = u64::MAX / 2 + 1;
        client
            .transport()
            .push(page(json!([1]), 0, limit, u64::MAX));
        client
            .transport()
            .push(page(json!([2]), limit, limit, u64::MAX));
        // Only reachable if the offset wrapped around
        client.transport().push(page(json!([99]), 0, limit, u64::MAX));

        let items: Vec<u64> = client
            .request_items("/v1/blog/all", limit, Vec::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(client.transport().requests().len(), 2);
    }
}

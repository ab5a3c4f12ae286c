//! Card Search Endpoint

use crate::domain::{CardSearchPage, CardSearchRequest, DomainResult};
use super::client::ApiClient;

impl ApiClient {
    pub async fn search_cards(&self, query: &str, page: u32, page_size: u32) -> DomainResult<CardSearchPage> {
        self.post("/cards/search", &CardSearchRequest { query, page, page_size }).await
    }
}

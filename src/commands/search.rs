//! Search Commands
//!
//! Frontend bindings for full-text card search.

use serde::Serialize;
use crate::models::CardSearchPage;
use super::invoke;

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
    page: u32,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

pub async fn search_cards(query: &str, page: u32, page_size: u32) -> Result<CardSearchPage, String> {
    let js_args = serde_wasm_bindgen::to_value(&SearchArgs { query, page, page_size })
        .map_err(|e| e.to_string())?;
    let result = invoke("search_cards", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

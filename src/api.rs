//! API Gateway
//!
//! Thin HTTP wrappers for the market REST endpoints, one async fn per call.
//! No retries, no timeouts; every failure maps to a `String` for the caller
//! to turn into a user-facing message.

use gloo_net::http::Request;
use serde::Serialize;

use crate::config;
use crate::form::ItemForm;
use crate::models::MarketItem;

// ========================
// Request Bodies
// ========================

/// Body for add/update. Values stay strings straight out of the form; the
/// backend coerces price and quantity.
#[derive(Serialize)]
pub struct ItemPayload<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
    pub unit: &'a str,
}

impl<'a> ItemPayload<'a> {
    pub fn from_form(form: &'a ItemForm) -> Self {
        Self {
            id: &form.id,
            name: &form.name,
            category: &form.category,
            price: &form.price,
            quantity: &form.quantity,
            unit: &form.unit,
        }
    }
}

// ========================
// Endpoint URLs
// ========================

fn all_url(root: &str) -> String {
    format!("{}/all", root)
}

fn get_url(root: &str, id: &str) -> String {
    format!("{}/get/{}", root, id)
}

fn add_url(root: &str) -> String {
    format!("{}/add", root)
}

fn update_url(root: &str) -> String {
    format!("{}/update", root)
}

fn delete_url(root: &str, id: u32) -> String {
    format!("{}/delete/{}", root, id)
}

// ========================
// Calls
// ========================

pub async fn fetch_all() -> Result<Vec<MarketItem>, String> {
    let resp = Request::get(&all_url(&config::api_root()))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("list failed with status {}", resp.status()));
    }
    resp.json::<Vec<MarketItem>>().await.map_err(|e| e.to_string())
}

/// The id comes straight from the fetch-by-id input, so it stays a string
pub async fn get_item(id: &str) -> Result<MarketItem, String> {
    let resp = Request::get(&get_url(&config::api_root(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("get failed with status {}", resp.status()));
    }
    resp.json::<MarketItem>().await.map_err(|e| e.to_string())
}

pub async fn add_item(payload: &ItemPayload<'_>) -> Result<(), String> {
    let resp = Request::post(&add_url(&config::api_root()))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("add failed with status {}", resp.status()));
    }
    Ok(())
}

pub async fn update_item(payload: &ItemPayload<'_>) -> Result<(), String> {
    let resp = Request::put(&update_url(&config::api_root()))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("update failed with status {}", resp.status()));
    }
    Ok(())
}

/// Returns the backend's confirmation text on success
pub async fn delete_item(id: u32) -> Result<String, String> {
    let resp = Request::delete(&delete_url(&config::api_root(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("delete failed with status {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "http://localhost:8080/marketapi";

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(all_url(ROOT), "http://localhost:8080/marketapi/all");
        assert_eq!(get_url(ROOT, "7"), "http://localhost:8080/marketapi/get/7");
        assert_eq!(add_url(ROOT), "http://localhost:8080/marketapi/add");
        assert_eq!(update_url(ROOT), "http://localhost:8080/marketapi/update");
        assert_eq!(
            delete_url(ROOT, 5),
            "http://localhost:8080/marketapi/delete/5"
        );
    }

    #[test]
    fn test_payload_keeps_fields_as_strings() {
        let form = ItemForm {
            id: "3".to_string(),
            name: "Mango".to_string(),
            category: "Fruit".to_string(),
            price: "4.5".to_string(),
            quantity: "12".to_string(),
            unit: "Dozen".to_string(),
        };
        let value = serde_json::to_value(ItemPayload::from_form(&form)).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["price"], "4.5");
        assert_eq!(value["quantity"], "12");
        assert_eq!(value["unit"], "Dozen");
    }
}

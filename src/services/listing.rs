//! Listing gateway — property advertisement CRUD.
//!
//! External collaborator of the session core: requests ride the same
//! shared client (and therefore the same bearer slot), but nothing here
//! reads or writes session state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{Api, ApiError};

/// Sale or rental offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingType {
    Sale,
    Rent,
}

/// Property usage category. Wire values are the backend's Portuguese
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingCategory {
    Residencial,
    Comercial,
    Misto,
}

/// Postal address of the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Physical details of the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDetails {
    pub area: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

/// Payload for creating or replacing a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub category: ListingCategory,
    pub base_price: f64,
    pub iptu: f64,
    pub user_id: String,
    pub address: Address,
    pub details: ListingDetails,
}

/// A published advertisement as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    pub category: ListingCategory,
    pub base_price: f64,
    pub iptu: f64,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub address: Address,
    pub details: ListingDetails,
}

/// Creation result.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingReceipt {
    pub id: String,
}

/// Gateway over the listing endpoints.
pub struct ListingGateway {
    api: Arc<Api>,
}

impl ListingGateway {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// `POST /listing/register` — publish a new listing.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on any failure.
    pub async fn create(&self, listing: &NewListing) -> Result<ListingReceipt, ApiError> {
        self.api.post_json("/listing/register", listing).await
    }

    /// `GET /listing/{id}` — fetch a listing by id.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on any failure.
    pub async fn fetch(&self, id: &str) -> Result<Listing, ApiError> {
        self.api.get_json(&format!("/listing/{id}")).await
    }

    /// `PUT /listing/{id}` — replace an existing listing.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on any failure.
    pub async fn update(&self, id: &str, listing: &NewListing) -> Result<Listing, ApiError> {
        self.api.put_json(&format!("/listing/{id}"), listing).await
    }

    /// `DELETE /listing/{id}` — remove a listing.
    ///
    /// # Errors
    ///
    /// Returns a normalized [`ApiError`] on any failure.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/listing/{id}")).await
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;

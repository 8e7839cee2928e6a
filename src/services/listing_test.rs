use super::*;

fn sample_address() -> Address {
    Address {
        zip_code: "01310-100".into(),
        state: "SP".into(),
        city: "São Paulo".into(),
        neighborhood: "Bela Vista".into(),
        street: "Av. Paulista, 1000".into(),
        reference: None,
    }
}

// =============================================================================
// wire enums
// =============================================================================

#[test]
fn listing_type_wire_values() {
    assert_eq!(serde_json::to_string(&ListingType::Sale).unwrap(), r#""SALE""#);
    assert_eq!(serde_json::to_string(&ListingType::Rent).unwrap(), r#""RENT""#);
}

#[test]
fn listing_category_wire_values() {
    assert_eq!(serde_json::to_string(&ListingCategory::Residencial).unwrap(), r#""RESIDENCIAL""#);
    assert_eq!(serde_json::to_string(&ListingCategory::Comercial).unwrap(), r#""COMERCIAL""#);
    assert_eq!(serde_json::to_string(&ListingCategory::Misto).unwrap(), r#""MISTO""#);
}

// =============================================================================
// Address
// =============================================================================

#[test]
fn address_omits_absent_reference() {
    let body = serde_json::to_value(&sample_address()).unwrap();
    assert_eq!(body["zipCode"], "01310-100");
    assert!(body.get("reference").is_none());
}

#[test]
fn address_round_trips_with_reference() {
    let mut address = sample_address();
    address.reference = Some("next to the metro".into());
    let json = serde_json::to_string(&address).unwrap();
    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
}

// =============================================================================
// NewListing / Listing
// =============================================================================

#[test]
fn new_listing_serializes_backend_shape() {
    let listing = NewListing {
        title: "Apartamento 2 quartos".into(),
        description: "Reformado, andar alto".into(),
        kind: ListingType::Rent,
        category: ListingCategory::Residencial,
        base_price: 3500.0,
        iptu: 120.0,
        user_id: "u1".into(),
        address: sample_address(),
        details: ListingDetails { area: "72m2".into(), bedrooms: 2, bathrooms: 1 },
    };
    let body = serde_json::to_value(&listing).unwrap();
    assert_eq!(body["type"], "RENT");
    assert_eq!(body["category"], "RESIDENCIAL");
    assert_eq!(body["basePrice"], 3500.0);
    assert_eq!(body["iptu"], 120.0);
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["details"]["bedrooms"], 2);
    assert_eq!(body["address"]["city"], "São Paulo");
}

#[test]
fn listing_deserializes_backend_shape() {
    let json = r#"{
        "id": "l1",
        "title": "Casa com quintal",
        "description": "Três quartos, garagem",
        "type": "SALE",
        "category": "RESIDENCIAL",
        "basePrice": 450000.0,
        "iptu": 900.0,
        "userId": "u1",
        "createdAt": "2024-03-01T12:00:00Z",
        "updatedAt": "2024-03-02T09:30:00Z",
        "address": {
            "zipCode": "01310-100",
            "state": "SP",
            "city": "São Paulo",
            "neighborhood": "Bela Vista",
            "street": "Av. Paulista, 1000"
        },
        "details": { "area": "140m2", "bedrooms": 3, "bathrooms": 2 }
    }"#;
    let listing: Listing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.id, "l1");
    assert_eq!(listing.kind, ListingType::Sale);
    assert_eq!(listing.category, ListingCategory::Residencial);
    assert_eq!(listing.user_id, "u1");
    assert_eq!(listing.address.reference, None);
    assert_eq!(listing.details.bathrooms, 2);
}

#[test]
fn listing_receipt_deserializes() {
    let receipt: ListingReceipt = serde_json::from_str(r#"{"id":"l9"}"#).unwrap();
    assert_eq!(receipt.id, "l9");
}

use cvbuilder_core::{CategoryId, Item, ItemValidationError};
use uuid::Uuid;

#[test]
fn new_item_sets_defaults_and_validates() {
    let item = Item::new("Widget", "A useful widget", 9.99, 3).unwrap();

    assert!(!item.id.is_nil());
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description, "A useful widget");
    assert_eq!(item.price, 9.99);
    assert!(item.category.is_empty());
    assert_eq!(item.stock_quantity, 3);
}

#[test]
fn constructor_rejects_missing_required_fields() {
    let err = Item::new("", "desc", 1.0, 0).unwrap_err();
    assert_eq!(err, ItemValidationError::MissingName);

    let err = Item::new("name", "   ", 1.0, 0).unwrap_err();
    assert_eq!(err, ItemValidationError::MissingDescription);
}

#[test]
fn constructor_rejects_out_of_bounds_price() {
    let err = Item::new("name", "desc", -0.5, 0).unwrap_err();
    assert_eq!(err, ItemValidationError::NegativePrice(-0.5));

    let err = Item::new("name", "desc", f64::NAN, 0).unwrap_err();
    assert_eq!(err, ItemValidationError::NonFinitePrice);
}

#[test]
fn zero_price_and_zero_stock_are_valid() {
    let item = Item::new("Freebie", "Giveaway item", 0.0, 0).unwrap();
    assert!(item.validate().is_ok());
}

#[test]
fn url_is_derived_from_record_id() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = Item::with_id(id, "Widget", "A useful widget", 9.99, 3).unwrap();

    assert_eq!(item.url(), format!("/item/{id}"));
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let category = CategoryId(Uuid::parse_str("99999999-8888-4777-a666-555555555555").unwrap());
    let mut item = Item::with_id(id, "Widget", "A useful widget", 9.99, 3).unwrap();
    item.category.push(category);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Widget");
    assert_eq!(json["description"], "A useful widget");
    assert_eq!(json["price"], 9.99);
    assert_eq!(json["category"][0], category.0.to_string());
    assert_eq!(json["stockQuantity"], 3);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn deserialize_rejects_invalid_documents() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Widget",
        "description": "A useful widget",
        "price": -2.0,
        "category": [],
        "stockQuantity": 1
    });

    let err = serde_json::from_value::<Item>(value).unwrap_err();
    assert!(
        err.to_string().contains("must be >= 0"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_defaults_optional_collections() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Widget",
        "description": "A useful widget",
        "price": 1.5
    });

    let item = serde_json::from_value::<Item>(value).unwrap();
    assert!(item.category.is_empty());
    assert_eq!(item.stock_quantity, 0);
}

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Units in stock, as sent to and received from the inventory API.
///
/// Any numeric value is accepted and forwarded unchanged: negative, zero and
/// fractional quantities are the remote service's business, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Quantity {
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Quantity::Int(n) => Some(n),
            Quantity::UInt(n) => i64::try_from(n).ok(),
            Quantity::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Quantity::Int(n) => n as f64,
            Quantity::UInt(n) => n as f64,
            Quantity::Float(n) => n,
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Quantity {
                fn from(n: $t) -> Self {
                    Quantity::$variant(n as _)
                }
            }
        )*
    };
}

impl_from_number!(Int: i8, i16, i32, i64, isize);
impl_from_number!(UInt: u8, u16, u32, u64, usize);
impl_from_number!(Float: f32, f64);

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(n) => write!(f, "{}", n),
            Quantity::UInt(n) => write!(f, "{}", n),
            Quantity::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Inventory item record returned by a GET on an item.
///
/// Only the fields the client reads are typed; everything else the service
/// sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StockRecord {
    /// Stock level of the record: the ship-to-location quantity when present,
    /// else a top-level `quantity`.
    pub fn quantity(&self) -> Option<Quantity> {
        self.availability
            .as_ref()
            .and_then(|a| a.ship_to_location_availability.as_ref())
            .and_then(|s| s.quantity)
            .or(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(
        default,
        alias = "shipToLocationAvailability",
        skip_serializing_if = "Option::is_none"
    )]
    pub ship_to_location_availability: Option<ShipToLocationAvailability>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipToLocationAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a PUT replacing an item's quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockUpdate {
    availability: UpdateAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct UpdateAvailability {
    ship_to_location_availability: UpdateShipTo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct UpdateShipTo {
    quantity: Quantity,
}

impl StockUpdate {
    pub fn new(quantity: Quantity) -> Self {
        StockUpdate {
            availability: UpdateAvailability {
                ship_to_location_availability: UpdateShipTo { quantity },
            },
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.availability.ship_to_location_availability.quantity
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_quantity_decodes_any_number() {
        let q: Quantity = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(q, Quantity::Int(42));
        let q: Quantity = serde_json::from_value(json!(-5)).unwrap();
        assert_eq!(q, Quantity::Int(-5));
        let q: Quantity = serde_json::from_value(json!(u64::MAX)).unwrap();
        assert_eq!(q, Quantity::UInt(u64::MAX));
        let q: Quantity = serde_json::from_value(json!(10.5)).unwrap();
        assert_eq!(q, Quantity::Float(10.5));
        assert!(serde_json::from_value::<Quantity>(json!("ten")).is_err());
    }

    #[test]
    fn test_quantity_conversions() {
        assert_eq!(Quantity::from(7u8).as_i64(), Some(7));
        assert_eq!(Quantity::from(u64::MAX).as_i64(), None);
        assert_eq!(Quantity::from(2.5f64).as_i64(), None);
        assert_eq!(Quantity::from(-3i32).as_f64(), -3.0);
        assert_eq!(Quantity::from(999_999_999i64).to_string(), "999999999");
    }

    #[test]
    fn test_record_prefers_ship_to_location_quantity() {
        let record: StockRecord = serde_json::from_value(json!({
            "sku": "TEST123",
            "quantity": 1,
            "availability": {
                "ship_to_location_availability": { "quantity": 10 }
            }
        }))
        .unwrap();
        assert_eq!(record.sku.as_deref(), Some("TEST123"));
        assert_eq!(record.quantity(), Some(Quantity::Int(10)));
    }

    #[test]
    fn test_record_top_level_quantity() {
        let record: StockRecord = serde_json::from_value(json!({ "quantity": 42 })).unwrap();
        assert_eq!(record.quantity(), Some(Quantity::Int(42)));

        // availability present but without a quantity falls through
        let record: StockRecord = serde_json::from_value(json!({
            "quantity": 3,
            "availability": { "pickupAtLocationAvailability": [] }
        }))
        .unwrap();
        assert_eq!(record.quantity(), Some(Quantity::Int(3)));
    }

    #[test]
    fn test_record_camel_case_availability() {
        let record: StockRecord = serde_json::from_value(json!({
            "availability": { "shipToLocationAvailability": { "quantity": 0 } }
        }))
        .unwrap();
        assert_eq!(record.quantity(), Some(Quantity::Int(0)));
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let body = json!({
            "sku": "COMPLEX-ITEM",
            "product": { "title": "Test Product", "aspects": { "Brand": ["TestBrand"] } },
            "condition": "NEW",
            "availability": {
                "ship_to_location_availability": { "quantity": 25, "allocation": 5 }
            }
        });
        let record: StockRecord = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(record.extra["condition"], json!("NEW"));
        assert_eq!(record.extra["product"]["title"], json!("Test Product"));
        assert_eq!(serde_json::to_value(&record).unwrap(), body);
    }

    #[test]
    fn test_record_without_quantity() {
        let record: StockRecord =
            serde_json::from_value(json!({ "sku": "ITEM", "other_field": "value" })).unwrap();
        assert_eq!(record.quantity(), None);
        let record: StockRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, StockRecord::default());
    }

    #[test]
    fn test_update_body_shape() {
        let body = serde_json::to_value(StockUpdate::new(Quantity::from(-5))).unwrap();
        assert_eq!(
            body,
            json!({
                "availability": { "ship_to_location_availability": { "quantity": -5 } }
            })
        );
        let body = serde_json::to_value(StockUpdate::new(Quantity::from(10.5))).unwrap();
        assert_eq!(
            body["availability"]["ship_to_location_availability"]["quantity"],
            json!(10.5)
        );
    }
}

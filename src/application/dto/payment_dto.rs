//! Payment DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product being purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// VIP membership.
    Vip,
    /// Balance top-up.
    Recharge,
}

impl ProductType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Recharge => "recharge",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment order creation request.
///
/// Caller supplied fields are forwarded untouched except `product_type`,
/// which is always taken from the typed field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// Product being purchased.
    pub product_type: ProductType,
    /// Remaining order fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PaymentRequest {
    /// Creates request from the inbound body.
    #[must_use]
    pub fn new(product_type: ProductType, mut fields: Map<String, Value>) -> Self {
        fields.remove("product_type");
        Self {
            product_type,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_type_overrides_inbound_field() {
        let Value::Object(fields) = json!({"product_type": "recharge", "vip_level_id": 3}) else {
            unreachable!()
        };

        let request = PaymentRequest::new(ProductType::Vip, fields);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"product_type": "vip", "vip_level_id": 3})
        );
    }

    #[test]
    fn test_recharge_serializes_lowercase() {
        let request = PaymentRequest::new(ProductType::Recharge, Map::new());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"product_type": "recharge"})
        );
    }
}

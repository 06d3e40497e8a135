//! Line items carried by carts and orders.

use serde::{Deserialize, Deserializer, Serialize};

use crate::rest::ValidationError;

/// A product line in a cart or order payload.
///
/// `quantity` is unsigned and `price` must be a finite, non-negative number;
/// payloads violating either are rejected on decode, and
/// [`LineItem::validate`] applies the same checks before a request is sent.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::rest::resources::LineItem;
///
/// let line = LineItem {
///     product_id: "prod_1".to_string(),
///     product_variant_id: "var_1".to_string(),
///     quantity: 2,
///     price: 19.99,
///     ..Default::default()
/// };
/// assert!(line.validate(0).is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// Identifier of the product.
    #[serde(default)]
    pub product_id: String,

    /// Title of the product.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub product_title: String,

    /// Identifier of the product variant.
    #[serde(default)]
    pub product_variant_id: String,

    /// Title of the product variant.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub product_variant_title: String,

    /// Number of units.
    #[serde(default)]
    pub quantity: u32,

    /// Price of the line.
    #[serde(default, deserialize_with = "non_negative_price")]
    pub price: f64,
}

impl LineItem {
    /// Checks the line before it is sent. `index` is its position in the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLineItem`] if the price is negative
    /// or not finite.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        check_price(self.price).map_err(|reason| ValidationError::InvalidLineItem {
            index,
            reason: reason.to_string(),
        })
    }
}

/// Validates every line of a payload, reporting the first bad one.
pub(crate) fn validate_lines(lines: &[LineItem]) -> Result<(), ValidationError> {
    lines
        .iter()
        .enumerate()
        .try_for_each(|(index, line)| line.validate(index))
}

fn check_price(price: f64) -> Result<(), &'static str> {
    if !price.is_finite() {
        return Err("price must be a finite number");
    }
    if price < 0.0 {
        return Err("price must not be negative");
    }
    Ok(())
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    check_price(price).map_err(serde::de::Error::custom)?;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_is_rejected_on_decode() {
        let result: Result<LineItem, _> = serde_json::from_str(
            r#"{"product_id": "p", "product_variant_id": "v", "quantity": 1, "price": -1.5}"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("negative"), "got: {message}");
    }

    #[test]
    fn test_negative_quantity_is_rejected_on_decode() {
        let result: Result<LineItem, _> =
            serde_json::from_str(r#"{"product_id": "p", "quantity": -3, "price": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_line_decodes() {
        let line: LineItem = serde_json::from_str(
            r#"{"product_id": "p", "product_variant_id": "v", "quantity": 3, "price": 0}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, 3);
        assert!(line.price.abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_reports_index() {
        let lines = vec![
            LineItem {
                price: 5.0,
                ..Default::default()
            },
            LineItem {
                price: f64::NAN,
                ..Default::default()
            },
        ];

        let error = validate_lines(&lines).unwrap_err();
        assert!(matches!(
            error,
            ValidationError::InvalidLineItem { index: 1, .. }
        ));
    }

    #[test]
    fn test_empty_titles_are_not_serialized() {
        let line = LineItem {
            product_id: "p".to_string(),
            product_variant_id: "v".to_string(),
            quantity: 1,
            price: 2.0,
            ..Default::default()
        };

        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("product_title").is_none());
        assert_eq!(json["quantity"], 1);
    }
}

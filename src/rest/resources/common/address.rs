//! Postal addresses for stores, customers, and orders.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// Used for store and customer addresses, and for the shipping and billing
/// addresses of an order. All fields are optional to support partial
/// address data. `name`, `company`, and `phone` are only meaningful on order
/// addresses.
///
/// # Example
///
/// ```rust
/// use mailchimp_ecommerce::rest::resources::Address;
///
/// let address = Address {
///     address1: Some("675 Ponce de Leon Ave NE".to_string()),
///     city: Some("Atlanta".to_string()),
///     province_code: Some("GA".to_string()),
///     postal_code: Some("30308".to_string()),
///     country_code: Some("US".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The first line of the address (street address).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// The second line of the address (apartment, suite, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city, town, or village.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The province, state, or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The two-letter province or state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// The postal or ZIP code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The longitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// The latitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// The full name of the recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company name at the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The phone number at the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let address = Address {
            city: Some("Atlanta".to_string()),
            latitude: Some(33.77),
            ..Default::default()
        };

        let json = serde_json::to_value(&address).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["city"], "Atlanta");
    }

    #[test]
    fn test_deserializes_partial_address() {
        let address: Address =
            serde_json::from_str(r#"{"country_code": "DE", "postal_code": "10115"}"#).unwrap();

        assert_eq!(address.country_code.as_deref(), Some("DE"));
        assert_eq!(address.postal_code.as_deref(), Some("10115"));
        assert!(address.city.is_none());
    }
}

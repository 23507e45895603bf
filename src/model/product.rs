use chrono::{DateTime, FixedOffset};
use enumset::EnumSet;
use serde::{Deserialize, Serialize};

/// Tariff product offered by the supplier.
#[must_use]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub full_name: String,
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    pub is_variable: bool,
    pub is_green: bool,
    pub is_tracker: bool,
    pub is_prepay: bool,
    pub is_business: bool,
    pub is_restricted: bool,

    /// Contract length in months.
    pub term: Option<u32>,

    pub available_from: Option<DateTime<FixedOffset>>,
    pub available_to: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub links: Vec<Link>,

    pub brand: String,
    pub direction: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub method: String,
    pub rel: String,
}

/// Product facet that can be required when listing products.
#[derive(Debug, enumset::EnumSetType)]
pub enum ProductFacet {
    Variable,
    Green,
    Tracker,
    Prepay,
    Business,
}

/// Empty set imposes no constraint.
pub type ProductFilter = EnumSet<ProductFacet>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product_ok() -> Result<(), serde_json::Error> {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "code": "AGILE-24-10-01",
                "direction": "IMPORT",
                "full_name": "Agile Octopus October 2024 v1",
                "display_name": "Agile Octopus",
                "description": "With Agile Octopus, you get access to half-hourly energy prices.",
                "is_variable": true,
                "is_green": true,
                "is_tracker": false,
                "is_prepay": false,
                "is_business": false,
                "is_restricted": false,
                "term": 12,
                "available_from": "2024-10-01T00:00:00+01:00",
                "available_to": null,
                "links": [
                    {
                        "href": "https://api.octopus.energy/v1/products/AGILE-24-10-01/",
                        "method": "GET",
                        "rel": "self"
                    }
                ],
                "brand": "OCTOPUS_ENERGY"
            }
        "#;
        let product = serde_json::from_str::<Product>(RESPONSE)?;
        assert_eq!(product.code, "AGILE-24-10-01");
        assert!(product.is_variable);
        assert!(!product.is_tracker);
        assert_eq!(product.term, Some(12));
        assert!(product.available_from.is_some());
        assert_eq!(product.available_to, None);
        assert_eq!(product.links.len(), 1);
        assert_eq!(product.links[0].rel, "self");
        assert_eq!(product.direction.as_deref(), Some("IMPORT"));
        Ok(())
    }

    #[test]
    fn test_deserialize_product_without_term() -> Result<(), serde_json::Error> {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "code": "VAR-22-11-01",
                "full_name": "Flexible Octopus November 2022 v1",
                "display_name": "Flexible Octopus",
                "description": "",
                "is_variable": true,
                "is_green": false,
                "is_tracker": false,
                "is_prepay": false,
                "is_business": false,
                "is_restricted": false,
                "term": null,
                "available_from": "2022-11-01T00:00:00Z",
                "available_to": null,
                "brand": "OCTOPUS_ENERGY"
            }
        "#;
        let product = serde_json::from_str::<Product>(RESPONSE)?;
        assert_eq!(product.term, None);
        assert!(product.links.is_empty());
        assert_eq!(product.direction, None);
        Ok(())
    }

    #[test]
    fn test_filter_union() {
        let filter: ProductFilter = ProductFacet::Green | ProductFacet::Variable;
        assert_eq!(filter.iter().collect::<Vec<_>>(), [ProductFacet::Variable, ProductFacet::Green]);
        assert!(filter.contains(ProductFacet::Green));
        assert!(!filter.contains(ProductFacet::Tracker));
        assert!(ProductFilter::empty().is_empty());
    }
}

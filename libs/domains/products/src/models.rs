use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - a catalog item held in the in-memory collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned on creation and never changed
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Category, matched case-insensitively when filtering
    pub category: String,
    /// Availability flag
    pub in_stock: bool,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub category: String,
    /// Defaults to `true` when omitted
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// DTO for updating an existing product.
///
/// Only these fields can be changed; any other keys in the request body,
/// including `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Raw query parameters for listing products.
///
/// `page` and `limit` stay strings so malformed values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive category match
    pub category: Option<String>,
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// One page of a filtered product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Number of products matching the filters, before pagination
    pub total_products: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub products: Vec<Product>,
}

/// Aggregate counts over the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_count: usize,
    /// Categories as stored; only categories with at least one product appear
    pub count_by_category: BTreeMap<String, usize>,
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(id: String, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock.unwrap_or(true),
        }
    }

    /// Shallow-merge supplied fields onto this product. The id never changes.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Catalog the service starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_camel_case() {
        let value = serde_json::to_value(&seed_products()[2]).unwrap();
        assert_eq!(value["inStock"], false);
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_create_defaults_in_stock() {
        let input: CreateProduct = serde_json::from_value(json!({
            "name": "Kettle",
            "description": "Boils water",
            "price": 25,
            "category": "kitchen"
        }))
        .unwrap();

        let product = Product::new("k1".into(), input);
        assert!(product.in_stock);
        assert_eq!(product.price, 25.0);
    }

    #[test]
    fn test_update_ignores_unknown_keys_and_id() {
        let update: UpdateProduct = serde_json::from_value(json!({
            "id": "hijack",
            "price": 999,
            "color": "red"
        }))
        .unwrap();

        let mut product = seed_products().remove(0);
        let before = product.clone();
        product.apply_update(update);

        assert_eq!(product.id, "1");
        assert_eq!(product.price, 999.0);
        assert_eq!(product.name, before.name);
        assert_eq!(product.category, before.category);
        assert_eq!(product.in_stock, before.in_stock);
    }

    #[test]
    fn test_validation_rules() {
        let bad_price = UpdateProduct {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(bad_price.validate().is_err());

        let empty_name = UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(empty_name.validate().is_err());

        assert!(UpdateProduct::default().validate().is_ok());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalogue item as listed in the admin product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
}

/// Payload for create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl From<&Product> for ProductInput {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            description: p.description.clone(),
            price: p.price,
            stock: p.stock,
            category_id: p.category.as_ref().and_then(|c| c.id.clone()),
            image_url: p.image_url.clone(),
            is_published: p.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_backend_json() {
        let product: Product = serde_json::from_str(
            r#"{
                "_id": "p1",
                "name": "Linen shirt",
                "price": 49.5,
                "stock": 12,
                "category": {"_id": "c1", "name": "Shirts"},
                "isPublished": true,
                "createdAt": "2026-09-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.category.as_ref().map(|c| c.name.as_str()), Some("Shirts"));
        assert!(product.is_published);
        assert!(product.created_at.is_some());
        assert_eq!(product.sku, None);
    }

    #[test]
    fn test_input_omits_empty_optionals() {
        let input = ProductInput {
            name: "Cap".into(),
            price: 10.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["name"], "Cap");
        assert!(json.get("sku").is_none());
        assert_eq!(json["isPublished"], false);
    }
}

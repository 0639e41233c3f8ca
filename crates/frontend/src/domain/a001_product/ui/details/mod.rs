use contracts::domain::a001_product::{Product, ProductInput};
use contracts::domain::common::non_empty;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::shared::components::{FormField, FormModal};
use crate::system::auth::context::{handle_api_error, use_auth};

/// Form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category_id: String,
    pub image_url: String,
    pub is_published: bool,
}

impl ProductDraft {
    pub fn from_product(product: Option<&Product>) -> Self {
        let Some(p) = product else {
            return Self::default();
        };
        Self {
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            price: format!("{:.2}", p.price),
            stock: p.stock.map(|s| s.to_string()).unwrap_or_default(),
            category_id: p
                .category
                .as_ref()
                .and_then(|c| c.id.clone())
                .unwrap_or_default(),
            image_url: p.image_url.clone().unwrap_or_default(),
            is_published: p.is_published,
        }
    }

    pub fn to_input(&self) -> Result<ProductInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        let stock = match self.stock.trim() {
            "" => None,
            s => match s.parse::<i64>() {
                Ok(n) if n >= 0 => Some(n),
                _ => return Err("Stock must be a whole number of 0 or more".into()),
            },
        };

        Ok(ProductInput {
            name: name.to_string(),
            sku: non_empty(&self.sku),
            description: non_empty(&self.description),
            price,
            stock,
            category_id: non_empty(&self.category_id),
            image_url: non_empty(&self.image_url),
            is_published: self.is_published,
        })
    }
}

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = ProductDraft::from_product(product.as_ref());
    let id = product.map(|p| p.id);
    let title = if id.is_some() { "Edit product" } else { "New product" };

    let name = RwSignal::new(draft.name);
    let sku = RwSignal::new(draft.sku);
    let description = RwSignal::new(draft.description);
    let price = RwSignal::new(draft.price);
    let stock = RwSignal::new(draft.stock);
    let category_id = RwSignal::new(draft.category_id);
    let image_url = RwSignal::new(draft.image_url);
    let is_published = RwSignal::new(draft.is_published);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    // The row may be stale; refresh the fields from the backend.
    if let Some(existing_id) = id.clone() {
        spawn_local(async move {
            match api::fetch_product(&existing_id).await {
                Ok(fresh) => {
                    let d = ProductDraft::from_product(Some(&fresh));
                    name.set(d.name);
                    sku.set(d.sku);
                    description.set(d.description);
                    price.set(d.price);
                    stock.set(d.stock);
                    category_id.set(d.category_id);
                    image_url.set(d.image_url);
                    is_published.set(d.is_published);
                }
                Err(e) => log::warn!("Could not reload product {}: {}", existing_id, e),
            }
        });
    }

    let on_save = Callback::new(move |_: ()| {
        let draft = ProductDraft {
            name: name.get_untracked(),
            sku: sku.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
            category_id: category_id.get_untracked(),
            image_url: image_url.get_untracked(),
            is_published: is_published.get_untracked(),
        };
        let input = match draft.to_input() {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        saving.set(true);
        error.set(None);
        let id = id.clone();
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_product(id, &input).await,
                None => api::create_product(&input).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(handle_api_error(set_auth_state, &e)));
                    saving.set(false);
                }
            }
        });
    });

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField label="Name *" value=name disabled=disabled />
            <FormField label="SKU" value=sku disabled=disabled />
            <div class="form__row">
                <FormField label="Price *" value=price input_type=InputType::Number disabled=disabled />
                <FormField label="Stock" value=stock input_type=InputType::Number disabled=disabled />
            </div>
            <FormField label="Category ID" value=category_id disabled=disabled />
            <FormField label="Image URL" value=image_url input_type=InputType::Url disabled=disabled />
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description disabled=disabled />
            </div>
            <div class="form__group">
                <Checkbox checked=is_published label="Published" />
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductDraft {
        ProductDraft {
            name: " Mug ".into(),
            price: "12.5".into(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_draft_to_input() {
        let input = valid().to_input().unwrap();
        assert_eq!(input.name, "Mug");
        assert_eq!(input.price, 12.5);
        assert_eq!(input.stock, None);
        assert_eq!(input.sku, None);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = valid();
        draft.name = "  ".into();
        assert_eq!(draft.to_input().unwrap_err(), "Name is required");

        let mut draft = valid();
        draft.price = "-1".into();
        assert!(draft.to_input().is_err());

        let mut draft = valid();
        draft.price = "abc".into();
        assert!(draft.to_input().is_err());

        let mut draft = valid();
        draft.stock = "2.5".into();
        assert!(draft.to_input().is_err());
        draft.stock = "7".into();
        assert_eq!(draft.to_input().unwrap().stock, Some(7));
    }

    #[test]
    fn test_draft_from_existing_product() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1", "name": "Mug", "price": 3.0, "stock": 4,
            "category": {"id": "c1", "name": "Kitchen"}, "isPublished": true
        }))
        .unwrap();
        let draft = ProductDraft::from_product(Some(&product));
        assert_eq!(draft.price, "3.00");
        assert_eq!(draft.stock, "4");
        assert_eq!(draft.category_id, "c1");
        assert_eq!(draft.to_input().unwrap(), ProductInput::from(&product));
    }
}

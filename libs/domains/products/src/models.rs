use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult, messages};

/// Unvalidated product payload as received from clients or read from the store.
///
/// Every field is optional here; [`Product::new`] decides what is acceptable.
/// The `productName`, `productDescription` and `productPrice` spellings are
/// accepted for compatibility with older clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "productName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "productDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL; a placeholder is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, alias = "productPrice", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl ProductDto {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// A validated product. Only obtainable through [`Product::new`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    id: String,
    name: String,
    description: String,
    image: String,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<f64>,
}

impl Product {
    /// Validates `dto` and fills in generated defaults.
    ///
    /// `name`, `description` and a non-zero `price` are required; an empty
    /// string counts as missing. A missing `id` becomes a fresh UUID v4 and a
    /// missing `image` a placeholder URL.
    pub fn new(dto: ProductDto) -> ProductResult<Self> {
        let name = present(dto.name)
            .ok_or_else(|| ProductError::invalid_argument(messages::NAME_REQUIRED))?;
        let description = present(dto.description)
            .ok_or_else(|| ProductError::invalid_argument(messages::DESCRIPTION_REQUIRED))?;

        let price = match dto.price {
            Some(p) if p.is_nan() || p == 0.0 => {
                return Err(ProductError::invalid_argument(messages::PRICE_REQUIRED));
            }
            Some(p) if p < 0.0 => {
                return Err(ProductError::invalid_argument(messages::PRICE_NOT_POSITIVE));
            }
            Some(p) => p,
            None => return Err(ProductError::invalid_argument(messages::PRICE_REQUIRED)),
        };

        Ok(Self {
            id: present(dto.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            description,
            image: present(dto.image).unwrap_or_else(placeholder_image),
            price,
            quantity: dto.quantity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            description: Some(product.description),
            image: Some(product.image),
            price: Some(product.price),
            quantity: product.quantity,
        }
    }
}

/// Body of `DELETE /product`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DeleteProduct {
    #[serde(default)]
    pub id: Option<String>,
}

/// `https://picsum.photos/{w}/{h}` with `w` in `[400, 700)` and `h` in `[300, 600)`.
pub fn placeholder_image() -> String {
    let mut rng = rand::rng();
    format!(
        "https://picsum.photos/{}/{}",
        rng.random_range(400..700),
        rng.random_range(300..600)
    )
}

/// `Some` only for a non-empty value.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn present_ref(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProductDto {
        ProductDto::new("Lamp", "Desk lamp", 24.5)
    }

    #[test]
    fn test_new_keeps_supplied_values() {
        let dto = valid()
            .with_id("lamp-1")
            .with_image("https://cdn.example.com/lamp.png")
            .with_quantity(3.0);

        let product = Product::new(dto).unwrap();
        assert_eq!(product.id(), "lamp-1");
        assert_eq!(product.name(), "Lamp");
        assert_eq!(product.description(), "Desk lamp");
        assert_eq!(product.image(), "https://cdn.example.com/lamp.png");
        assert_eq!(product.price(), 24.5);
        assert_eq!(product.quantity(), Some(3.0));
    }

    #[test]
    fn test_new_generates_id_and_image() {
        let product = Product::new(valid()).unwrap();

        assert!(Uuid::parse_str(product.id()).is_ok());
        assert!(product.image().starts_with("https://picsum.photos/"));
        assert_eq!(product.quantity(), None);
    }

    #[test]
    fn test_empty_id_and_image_count_as_absent() {
        let product = Product::new(valid().with_id("").with_image("")).unwrap();

        assert!(!product.id().is_empty());
        assert!(product.image().starts_with("https://picsum.photos/"));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Product::new(valid()).unwrap();
        let b = Product::new(valid()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            (ProductDto { name: None, ..valid() }, messages::NAME_REQUIRED),
            (ProductDto { name: Some(String::new()), ..valid() }, messages::NAME_REQUIRED),
            (ProductDto { description: None, ..valid() }, messages::DESCRIPTION_REQUIRED),
            (
                ProductDto { description: Some(String::new()), ..valid() },
                messages::DESCRIPTION_REQUIRED,
            ),
            (ProductDto { price: None, ..valid() }, messages::PRICE_REQUIRED),
            (ProductDto { price: Some(0.0), ..valid() }, messages::PRICE_REQUIRED),
            (ProductDto { price: Some(f64::NAN), ..valid() }, messages::PRICE_REQUIRED),
            (ProductDto { price: Some(-1.0), ..valid() }, messages::PRICE_NOT_POSITIVE),
        ];

        for (dto, message) in cases {
            assert_eq!(
                Product::new(dto),
                Err(ProductError::InvalidArgument(message.to_string()))
            );
        }
    }

    #[test]
    fn test_name_is_checked_before_price() {
        let dto = ProductDto {
            name: None,
            price: None,
            ..valid()
        };
        assert_eq!(
            Product::new(dto).unwrap_err().to_string(),
            messages::NAME_REQUIRED
        );
    }

    #[test]
    fn test_dto_accepts_legacy_field_names() {
        let dto: ProductDto = serde_json::from_value(serde_json::json!({
            "productName": "Mug",
            "productDescription": "Coffee mug",
            "productPrice": 8
        }))
        .unwrap();

        assert_eq!(dto, ProductDto::new("Mug", "Coffee mug", 8.0));
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::new(valid().with_id("lamp-1").with_image("img")).unwrap();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "lamp-1",
                "name": "Lamp",
                "description": "Desk lamp",
                "image": "img",
                "price": 24.5
            })
        );
    }

    #[test]
    fn test_placeholder_image_dimensions_in_range() {
        for _ in 0..50 {
            let url = placeholder_image();
            let dims: Vec<u32> = url
                .trim_start_matches("https://picsum.photos/")
                .split('/')
                .map(|d| d.parse().unwrap())
                .collect();
            assert!((400..700).contains(&dims[0]));
            assert!((300..600).contains(&dims[1]));
        }
    }

    #[test]
    fn test_round_trip_through_dto() {
        let product = Product::new(valid().with_quantity(2.5)).unwrap();
        let again = Product::new(ProductDto::from(product.clone())).unwrap();
        assert_eq!(again, product);
    }
}

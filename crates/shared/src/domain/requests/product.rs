use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 6, max = 100, message = "Name must be between 6 and 100 characters"))]
    #[schema(example = "Classic Burger")]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = 9.99)]
    pub price: Decimal,

    #[validate(range(min = 1, message = "The product category is required"))]
    #[schema(example = 1)]
    pub category_id: i32,

    #[validate(length(min = 1, message = "The product image is required"))]
    #[schema(example = "/img/p.png")]
    pub path_image: String,

    #[validate(length(min = 6, max = 150, message = "Base description must be between 6 and 150 characters"))]
    pub base_description: Option<String>,

    #[validate(length(min = 6, max = 1000, message = "Full description must be between 6 and 1000 characters"))]
    pub full_description: Option<String>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let min = Decimal::new(1, 2);
    let max = Decimal::new(99_999, 2);

    if *price < min || *price > max {
        return Err(ValidationError::new("range")
            .with_message("Price must be between 0.01 and 999.99".into()));
    }

    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("scale")
            .with_message("Price accepts at most two decimal places".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(price: Decimal) -> ProductRequest {
        ProductRequest {
            name: "Classic Burger".into(),
            price,
            category_id: 1,
            path_image: "/img/p.png".into(),
            base_description: None,
            full_description: None,
        }
    }

    #[test]
    fn accepts_two_decimal_prices_in_range() {
        assert!(request(Decimal::new(999, 2)).validate().is_ok());
        assert!(request(Decimal::new(99_999, 2)).validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_too_precise_prices() {
        let errors = request(Decimal::ZERO).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        assert!(request(Decimal::new(9_999, 3)).validate().is_err());
    }

    #[test]
    fn short_optional_descriptions_are_rejected() {
        let mut req = request(Decimal::new(500, 2));
        req.base_description = Some("abc".into());

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }
}

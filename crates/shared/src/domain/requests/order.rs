use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(range(min = 1, message = "The status id is required"))]
    #[schema(example = 1)]
    pub status_id: i32,

    #[validate(custom(function = "validate_value"))]
    #[schema(example = 15.5)]
    pub value: Decimal,
}

fn validate_value(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.is_zero() {
        return Err(ValidationError::new("range")
            .with_message("The order value must be a positive number".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_must_be_positive() {
        let ok = OrderRequest {
            status_id: 1,
            value: Decimal::new(1550, 2),
        };
        assert!(ok.validate().is_ok());

        let zero = OrderRequest {
            status_id: 1,
            value: Decimal::ZERO,
        };
        assert!(zero.validate().is_err());
    }
}

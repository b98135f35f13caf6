// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

// ---
// Validação Customizada para valores monetários
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_and_positive_values_pass() {
        assert!(validate_not_negative(&dec!(0)).is_ok());
        assert!(validate_not_negative(&dec!(99.99)).is_ok());
    }

    #[test]
    fn negative_values_fail() {
        let err = validate_not_negative(&dec!(-0.01)).unwrap_err();
        assert_eq!(err.code, "range");
    }
}

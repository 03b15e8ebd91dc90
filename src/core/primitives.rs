use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SyncError, SyncResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SyncResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| SyncError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

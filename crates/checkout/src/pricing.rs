use configuration::EvaluationCatalog;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Base price charged when a size is not in the catalog (the 100K price).
pub const FALLBACK_BASE_PRICE: Decimal = dec!(230);

/// Price breakdown shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base_price: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Prices an evaluation of the given account size.
///
/// There are no promotions yet, so the discount is always zero.
pub fn quote(catalog: &EvaluationCatalog, size: u32) -> Quote {
    let base_price = catalog
        .size(size)
        .map(|option| option.base_price)
        .unwrap_or(FALLBACK_BASE_PRICE);
    let discount = Decimal::ZERO;
    Quote {
        base_price,
        discount,
        total: base_price - discount,
    }
}

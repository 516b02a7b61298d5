use crate::error::CheckoutError;
use crate::pricing::{Quote, quote};
use configuration::EvaluationCatalog;
use core_types::{EvaluationModel, Platform};
use serde::{Deserialize, Serialize};

/// The choices on the new-evaluation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvaluationOrder {
    pub model: EvaluationModel,
    pub size: u32,
    pub platform: Platform,
    pub accepted_terms: bool,
}

impl NewEvaluationOrder {
    /// The form as first shown: first model, third size, first platform, terms unchecked.
    pub fn with_defaults(catalog: &EvaluationCatalog) -> Self {
        Self {
            model: catalog
                .models
                .first()
                .map(|m| m.value)
                .unwrap_or(EvaluationModel::OneStep),
            size: catalog.sizes.get(2).map(|s| s.value).unwrap_or(100_000),
            platform: catalog
                .platforms
                .first()
                .map(|p| p.value)
                .unwrap_or(Platform::Tradovate),
            accepted_terms: false,
        }
    }
}

/// Checks an order against the catalog.
pub fn validate(catalog: &EvaluationCatalog, order: &NewEvaluationOrder) -> Result<(), CheckoutError> {
    let model = catalog
        .model(order.model)
        .ok_or(CheckoutError::UnknownModel(order.model))?;
    if model.coming_soon {
        return Err(CheckoutError::ModelUnavailable(order.model));
    }
    if catalog.size(order.size).is_none() {
        return Err(CheckoutError::UnknownSize(order.size));
    }
    if catalog.platform(order.platform).is_none() {
        return Err(CheckoutError::UnknownPlatform(order.platform));
    }
    if !order.accepted_terms {
        return Err(CheckoutError::TermsNotAccepted);
    }
    Ok(())
}

/// Validates and prices an order. Nothing is charged or stored.
pub fn submit(catalog: &EvaluationCatalog, order: &NewEvaluationOrder) -> Result<Quote, CheckoutError> {
    validate(catalog, order)?;
    let quote = quote(catalog, order.size);
    tracing::info!(
        model = %order.model,
        size = order.size,
        platform = %order.platform,
        total = %quote.total,
        "New evaluation order accepted."
    );
    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn accepted(catalog: &EvaluationCatalog) -> NewEvaluationOrder {
        NewEvaluationOrder {
            accepted_terms: true,
            ..NewEvaluationOrder::with_defaults(catalog)
        }
    }

    #[test]
    fn defaults_pick_the_100k_starter_on_tradovate() {
        let catalog = EvaluationCatalog::default();
        let order = NewEvaluationOrder::with_defaults(&catalog);
        assert_eq!(order.model, EvaluationModel::OneStep);
        assert_eq!(order.size, 100_000);
        assert_eq!(order.platform, Platform::Tradovate);
        assert!(!order.accepted_terms);
    }

    #[test]
    fn terms_must_be_accepted() {
        let catalog = EvaluationCatalog::default();
        let order = NewEvaluationOrder::with_defaults(&catalog);
        assert_eq!(validate(&catalog, &order), Err(CheckoutError::TermsNotAccepted));
    }

    #[test]
    fn coming_soon_models_cannot_be_bought() {
        let catalog = EvaluationCatalog::default();
        let order = NewEvaluationOrder {
            model: EvaluationModel::TwoStep,
            ..accepted(&catalog)
        };
        assert_eq!(
            submit(&catalog, &order),
            Err(CheckoutError::ModelUnavailable(EvaluationModel::TwoStep))
        );
    }

    #[test]
    fn sizes_and_platforms_must_be_listed() {
        let mut catalog = EvaluationCatalog::default();
        let order = NewEvaluationOrder { size: 75_000, ..accepted(&catalog) };
        assert_eq!(validate(&catalog, &order), Err(CheckoutError::UnknownSize(75_000)));

        catalog.platforms.retain(|p| p.value != Platform::Cqg);
        let order = NewEvaluationOrder { platform: Platform::Cqg, ..accepted(&catalog) };
        assert_eq!(validate(&catalog, &order), Err(CheckoutError::UnknownPlatform(Platform::Cqg)));

        catalog.models.retain(|m| m.value != EvaluationModel::Funded);
        let order = NewEvaluationOrder { model: EvaluationModel::Funded, ..accepted(&catalog) };
        assert_eq!(
            validate(&catalog, &order),
            Err(CheckoutError::UnknownModel(EvaluationModel::Funded))
        );
    }

    #[test]
    fn valid_order_is_priced() {
        let catalog = EvaluationCatalog::default();
        let order = NewEvaluationOrder {
            model: EvaluationModel::Funded,
            size: 50_000,
            ..accepted(&catalog)
        };
        let quote = submit(&catalog, &order).unwrap();
        assert_eq!(quote.total, dec!(155));
    }
}

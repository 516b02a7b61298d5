use core_types::{EvaluationModel, Platform};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Evaluation model '{0}' is not offered.")]
    UnknownModel(EvaluationModel),

    #[error("Evaluation model '{0}' is coming soon and cannot be purchased yet.")]
    ModelUnavailable(EvaluationModel),

    #[error("Account size {0} is not offered.")]
    UnknownSize(u32),

    #[error("Platform '{0}' is not offered.")]
    UnknownPlatform(Platform),

    #[error("The evaluation terms must be accepted before checkout.")]
    TermsNotAccepted,
}

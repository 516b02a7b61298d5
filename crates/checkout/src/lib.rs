//! # Velocity Desk Checkout
//!
//! Form state, pricing and validation for the "start new evaluation" screen.
//! No payment is taken: a submitted order is validated, priced and logged.

pub mod error;
pub mod order;
pub mod pricing;

pub use error::CheckoutError;
pub use order::{NewEvaluationOrder, submit, validate};
pub use pricing::{FALLBACK_BASE_PRICE, Quote, quote};

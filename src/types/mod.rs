//! Wire types of the Google Pay `PaymentDataRequest` document.

mod common;
mod payment_method;
mod request;
mod tokenization;
mod transaction;

pub use common::*;
pub use payment_method::*;
pub use request::*;
pub use tokenization::*;
pub use transaction::*;

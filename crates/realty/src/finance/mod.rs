//! Loan repayment maths and rupee display helpers.

pub mod currency;
pub mod emi;

pub use currency::{format_indian_price, group_indian_digits};
pub use emi::{calculate_emi, loan_terms_from_payload, EmiBreakdown, LoanTerms};

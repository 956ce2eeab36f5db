use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldError, PayloadReader, ValidationError};

/// Inputs for an equated-monthly-installment calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub loan_amount: f64,
    #[serde(alias = "interestRate")]
    pub annual_rate_percent: f64,
    #[serde(alias = "loanTenure")]
    pub tenure_years: f64,
}

impl LoanTerms {
    pub fn new(loan_amount: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        Self {
            loan_amount,
            annual_rate_percent,
            tenure_years,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();

        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            fields.push(FieldError::new("loanAmount", "must be a positive amount"));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            fields.push(FieldError::new(
                "annualRatePercent",
                "must be a non-negative percentage",
            ));
        }
        if !self.tenure_years.is_finite() || self.tenure_years <= 0.0 {
            fields.push(FieldError::new("tenureYears", "must be a positive number of years"));
        }

        ValidationError::check(fields)
    }
}

/// Rounded repayment figures, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiBreakdown {
    pub monthly_installment: i64,
    pub total_interest: i64,
    pub total_payment: i64,
}

/// Read loan terms from a calculator form. The site's `interestRate` and `loanTenure` names
/// are accepted alongside the canonical ones.
pub fn loan_terms_from_payload(payload: &Value) -> Result<LoanTerms, ValidationError> {
    let mut reader = PayloadReader::new(payload);

    let loan_amount: Option<f64> = reader.parsed("loanAmount", "a number");
    let annual_rate_percent: Option<f64> = reader.parsed(
        present_key(payload, &["annualRatePercent", "interestRate"]),
        "a number",
    );
    let tenure_years: Option<f64> = reader.parsed(
        present_key(payload, &["tenureYears", "loanTenure"]),
        "a number",
    );

    let terms = (|| {
        Some(LoanTerms::new(
            loan_amount?,
            annual_rate_percent?,
            tenure_years?,
        ))
    })();
    reader.finish(terms)
}

/// First key the payload carries, else the canonical (first) name.
fn present_key(payload: &Value, keys: &[&'static str]) -> &'static str {
    keys.iter()
        .copied()
        .find(|key| payload.get(*key).is_some_and(|value| !value.is_null()))
        .unwrap_or(keys[0])
}

/// Standard amortizing installment. Intermediate values stay unrounded; only the three outputs
/// are rounded.
pub fn calculate_emi(terms: LoanTerms) -> Result<EmiBreakdown, ValidationError> {
    terms.validate()?;

    let principal = terms.loan_amount;
    let monthly_rate = terms.annual_rate_percent / 12.0 / 100.0;
    let installments = terms.tenure_years * 12.0;

    let installment = if monthly_rate == 0.0 {
        principal / installments
    } else {
        let growth = (1.0 + monthly_rate).powf(installments);
        let direct = principal * monthly_rate * growth / (growth - 1.0);
        if direct.is_finite() {
            direct
        } else {
            // Overflowed growth: the installment tends to interest-only, P * r.
            principal * monthly_rate / (1.0 - growth.recip())
        }
    };

    let total_payment = installment * installments;
    let total_interest = total_payment - principal;

    let mut fields = Vec::new();
    let monthly_installment = whole_units(&mut fields, "monthlyInstallment", installment);
    let total_interest = whole_units(&mut fields, "totalInterest", total_interest);
    let total_payment = whole_units(&mut fields, "totalPayment", total_payment);
    ValidationError::check(fields)?;

    Ok(EmiBreakdown {
        monthly_installment,
        total_interest,
        total_payment,
    })
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
const WHOLE_UNIT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn whole_units(fields: &mut Vec<FieldError>, field: &'static str, value: f64) -> i64 {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= -WHOLE_UNIT_LIMIT && rounded < WHOLE_UNIT_LIMIT {
        rounded as i64
    } else {
        fields.push(FieldError::new(field, "is too large to represent"));
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_home_loan_breakdown() {
        let breakdown = calculate_emi(LoanTerms::new(5_000_000.0, 8.5, 20.0)).expect("valid terms");

        assert_eq!(breakdown.monthly_installment, 43_391);
        assert_eq!(breakdown.total_payment, 10_413_879);
        assert_eq!(breakdown.total_interest, 5_413_879);
        assert_eq!(
            breakdown.total_interest,
            breakdown.total_payment - 5_000_000
        );
    }

    #[test]
    fn independent_rounding_stays_within_half_unit_per_installment() {
        for (amount, rate, years) in [
            (5_000_000.0, 8.5, 20.0),
            (2_500_000.0, 7.2, 15.0),
            (1_000_000.0, 10.0, 5.0),
            (3_000_000.0, 9.0, 30.0),
        ] {
            let breakdown =
                calculate_emi(LoanTerms::new(amount, rate, years)).expect("valid terms");
            let installments = (years * 12.0) as i64;
            let drift = (breakdown.total_payment - breakdown.monthly_installment * installments).abs();

            assert!(breakdown.monthly_installment > 0);
            assert!(breakdown.total_interest > 0);
            assert!(drift * 2 <= installments, "drift {drift} for {amount}/{rate}/{years}");
            assert_eq!(
                breakdown.total_interest,
                breakdown.total_payment - amount as i64
            );
        }
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let breakdown = calculate_emi(LoanTerms::new(5_000_000.0, 0.0, 20.0)).expect("valid terms");

        assert_eq!(breakdown.monthly_installment, (5_000_000.0_f64 / 240.0).round() as i64);
        assert_eq!(breakdown.total_payment, 5_000_000);
        assert_eq!(breakdown.total_interest, 0);
    }

    #[test]
    fn rejects_zero_tenure_and_negative_principal() {
        let error = calculate_emi(LoanTerms::new(5_000_000.0, 8.5, 0.0)).expect_err("zero tenure");
        assert_eq!(error.field_names(), vec!["tenureYears"]);

        let error = calculate_emi(LoanTerms::new(-1.0, 8.5, 20.0)).expect_err("negative loan");
        assert_eq!(error.field_names(), vec!["loanAmount"]);
    }

    #[test]
    fn rejects_negative_rate_and_non_finite_inputs() {
        let error = calculate_emi(LoanTerms::new(f64::NAN, -2.0, f64::INFINITY))
            .expect_err("invalid terms");
        assert_eq!(
            error.field_names(),
            vec!["loanAmount", "annualRatePercent", "tenureYears"]
        );
    }

    #[test]
    fn overflowing_growth_falls_back_to_interest_only_installment() {
        let breakdown =
            calculate_emi(LoanTerms::new(5_000_000.0, 25_000.0, 30.0)).expect("valid terms");

        let interest_only = (5_000_000.0_f64 * (25_000.0 / 12.0 / 100.0)).round() as i64;
        assert_eq!(breakdown.monthly_installment, interest_only);
        assert!(breakdown.total_payment > 5_000_000);
        assert_eq!(
            breakdown.total_interest,
            breakdown.total_payment - 5_000_000
        );
    }

    #[test]
    fn unrepresentable_outputs_are_rejected_instead_of_saturating() {
        let error = calculate_emi(LoanTerms::new(1e300, 8.5, 20.0)).expect_err("too large");
        assert_eq!(
            error.field_names(),
            vec!["monthlyInstallment", "totalInterest", "totalPayment"]
        );
    }

    #[test]
    fn payload_accepts_site_field_names() {
        let terms = loan_terms_from_payload(&serde_json::json!({
            "loanAmount": "5000000",
            "interestRate": 8.5,
            "loanTenure": 20
        }))
        .expect("valid payload");
        assert_eq!(terms, LoanTerms::new(5_000_000.0, 8.5, 20.0));
    }

    #[test]
    fn payload_reports_every_missing_or_mistyped_field() {
        let error = loan_terms_from_payload(&serde_json::json!({
            "loanAmount": "five million",
            "interestRate": true
        }))
        .expect_err("invalid payload");
        assert_eq!(
            error.field_names(),
            vec!["loanAmount", "interestRate", "tenureYears"]
        );
    }
}

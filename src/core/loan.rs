use super::types::{Loan, LoanPair, LoanTarget, PayoffRecommendation, amount, as_percent};

/// Avalanche heuristic: point the surplus at the costlier loan.
///
/// The saving is a one-year approximation (surplus times the rate gap), not
/// an amortisation schedule, and is rounded to a whole currency unit. Returns
/// `None` when there is no surplus to place.
pub fn recommend_loan_payoff(pair: &LoanPair) -> Option<PayoffRecommendation> {
    let surplus = amount(pair.available_surplus);
    if surplus <= 0.0 {
        return None;
    }

    let rate_a = annual_rate(&pair.loan_a);
    let rate_b = annual_rate(&pair.loan_b);
    let principal_a = amount(pair.loan_a.outstanding_principal);
    let principal_b = amount(pair.loan_b.outstanding_principal);

    let recommendation = if rate_a > rate_b && principal_a > 0.0 {
        target(LoanTarget::A, &pair.loan_a, rate_a, &pair.loan_b, rate_b, surplus)
    } else if rate_b > rate_a && principal_b > 0.0 {
        target(LoanTarget::B, &pair.loan_b, rate_b, &pair.loan_a, rate_a, surplus)
    } else {
        let rationale = if rate_a == rate_b {
            "Both loans cost the same. Clear the smaller balance first to free up monthly cash flow."
                .to_string()
        } else {
            let (cleared, open, open_principal) = if rate_a > rate_b {
                (&pair.loan_a, &pair.loan_b, principal_b)
            } else {
                (&pair.loan_b, &pair.loan_a, principal_a)
            };
            if open_principal > 0.0 {
                format!(
                    "The {} is already paid off. Put the surplus into the {} to ease monthly cash flow.",
                    cleared.label, open.label
                )
            } else {
                "Both loans are already paid off. Keep the surplus invested.".to_string()
            }
        };
        PayoffRecommendation {
            target_loan: LoanTarget::Either,
            estimated_annual_interest_saved: 0.0,
            rationale,
        }
    };

    Some(recommendation)
}

fn target(
    target_loan: LoanTarget,
    costly: &Loan,
    costly_rate: f64,
    cheap: &Loan,
    cheap_rate: f64,
    surplus: f64,
) -> PayoffRecommendation {
    PayoffRecommendation {
        target_loan,
        estimated_annual_interest_saved: (surplus * (costly_rate - cheap_rate)).round(),
        rationale: format!(
            "Prepay the {} first. It costs you {}% a year against {}% on the {}.",
            costly.label,
            as_percent(costly_rate),
            as_percent(cheap_rate),
            cheap.label
        ),
    }
}

fn annual_rate(loan: &Loan) -> f64 {
    amount(loan.annual_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn loan(label: &str, principal: f64, rate: f64) -> Loan {
        Loan {
            label: label.to_string(),
            outstanding_principal: principal,
            annual_rate: rate,
        }
    }

    fn sample_pair(surplus: f64) -> LoanPair {
        LoanPair {
            loan_a: loan("Personal Loan", 300_000.0, 0.14),
            loan_b: loan("Home Loan", 4_000_000.0, 0.085),
            available_surplus: surplus,
        }
    }

    #[test]
    fn costlier_personal_loan_is_targeted() {
        let rec = recommend_loan_payoff(&sample_pair(50_000.0)).expect("surplus yields advice");
        assert_eq!(rec.target_loan, LoanTarget::A);
        assert_approx(rec.estimated_annual_interest_saved, 2_750.0);
        assert!(rec.rationale.contains("Personal Loan"));
        assert!(rec.rationale.contains("14%"));
        assert!(rec.rationale.contains("8.5%"));
    }

    #[test]
    fn costlier_home_loan_is_targeted() {
        let mut pair = sample_pair(100_000.0);
        pair.loan_b.annual_rate = 0.16;
        let rec = recommend_loan_payoff(&pair).expect("surplus yields advice");
        assert_eq!(rec.target_loan, LoanTarget::B);
        assert_approx(rec.estimated_annual_interest_saved, 2_000.0);
        assert!(rec.rationale.starts_with("Prepay the Home Loan"));
    }

    #[test]
    fn zero_surplus_yields_no_advice() {
        assert!(recommend_loan_payoff(&sample_pair(0.0)).is_none());
        assert!(recommend_loan_payoff(&sample_pair(-10.0)).is_none());
        assert!(recommend_loan_payoff(&sample_pair(f64::NAN)).is_none());
    }

    #[test]
    fn equal_rates_leave_the_choice_open() {
        let mut pair = sample_pair(25_000.0);
        pair.loan_b.annual_rate = 0.14;
        let rec = recommend_loan_payoff(&pair).expect("surplus yields advice");
        assert_eq!(rec.target_loan, LoanTarget::Either);
        assert_approx(rec.estimated_annual_interest_saved, 0.0);
        assert!(rec.rationale.contains("cash flow"));
    }

    #[test]
    fn cleared_costly_loan_leaves_the_choice_open() {
        let mut pair = sample_pair(25_000.0);
        pair.loan_a.outstanding_principal = 0.0;
        let rec = recommend_loan_payoff(&pair).expect("surplus yields advice");
        assert_eq!(rec.target_loan, LoanTarget::Either);
        assert_approx(rec.estimated_annual_interest_saved, 0.0);
        assert!(rec.rationale.contains("Personal Loan"));
        assert!(rec.rationale.contains("into the Home Loan"));
        assert!(!rec.rationale.contains("Either"));
    }

    #[test]
    fn both_loans_cleared_keeps_the_surplus() {
        let mut pair = sample_pair(25_000.0);
        pair.loan_a.outstanding_principal = 0.0;
        pair.loan_b.outstanding_principal = 0.0;
        let rec = recommend_loan_payoff(&pair).expect("surplus yields advice");
        assert_eq!(rec.target_loan, LoanTarget::Either);
        assert!(rec.rationale.starts_with("Both loans are already paid off"));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_zero_surplus_is_always_none(
            rate_a_bp in 0u32..3_000,
            rate_b_bp in 0u32..3_000,
            principal_a in 0u32..5_000_000,
            principal_b in 0u32..5_000_000
        ) {
            let pair = LoanPair {
                loan_a: loan("A", principal_a as f64, rate_a_bp as f64 / 10_000.0),
                loan_b: loan("B", principal_b as f64, rate_b_bp as f64 / 10_000.0),
                available_surplus: 0.0,
            };
            prop_assert!(recommend_loan_payoff(&pair).is_none());
        }

        #[test]
        fn prop_target_follows_the_higher_rate(
            rate_a_bp in 0u32..3_000,
            rate_b_bp in 0u32..3_000,
            principal_a in 0u32..5_000_000,
            principal_b in 0u32..5_000_000,
            surplus in 1u32..2_000_000
        ) {
            let rate_a = rate_a_bp as f64 / 10_000.0;
            let rate_b = rate_b_bp as f64 / 10_000.0;
            let pair = LoanPair {
                loan_a: loan("A", principal_a as f64, rate_a),
                loan_b: loan("B", principal_b as f64, rate_b),
                available_surplus: surplus as f64,
            };
            let rec = recommend_loan_payoff(&pair).expect("positive surplus yields advice");
            let expected = if rate_a > rate_b && principal_a > 0 {
                LoanTarget::A
            } else if rate_b > rate_a && principal_b > 0 {
                LoanTarget::B
            } else {
                LoanTarget::Either
            };
            prop_assert_eq!(rec.target_loan, expected);
            prop_assert!(rec.estimated_annual_interest_saved >= 0.0);
            if expected != LoanTarget::Either {
                let gap = (rate_a - rate_b).abs();
                prop_assert_eq!(rec.estimated_annual_interest_saved, (surplus as f64 * gap).round());
            }
            prop_assert_eq!(recommend_loan_payoff(&pair), Some(rec));
        }
    }
}

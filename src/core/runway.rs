use super::types::{BreakPlan, BreakType, GENERAL_INFLATION, RunwayEstimate, amount};

const MATERNITY_MEDICAL_BASE: f64 = 150_000.0;
const MEDICAL_INFLATION: f64 = 0.10;
const MATERNITY_BURN_UPLIFT: f64 = 1.20;
const STUDY_COURSE_FEES: f64 = 200_000.0;

pub fn estimate_break_runway(plan: &BreakPlan) -> RunwayEstimate {
    let years_until_start = f64::from(plan.months_until_start) / 12.0;
    let inflation_factor = (1.0 + GENERAL_INFLATION).powf(years_until_start);
    let mut adjusted_monthly_expense = (amount(plan.monthly_expenses) * inflation_factor).round();

    let (extra_costs, extra_costs_note) = match plan.break_type {
        BreakType::Chill => (0.0, String::new()),
        BreakType::Maternity => {
            let medical =
                (MATERNITY_MEDICAL_BASE * (1.0 + MEDICAL_INFLATION).powf(years_until_start)).round();
            adjusted_monthly_expense = (adjusted_monthly_expense * MATERNITY_BURN_UPLIFT).round();
            (medical, maternity_note(medical))
        }
        BreakType::Study => (
            STUDY_COURSE_FEES,
            "Includes ₹2L for course fees/laptop.".to_string(),
        ),
    };

    let savings = amount(plan.existing_savings);
    let total_cost = adjusted_monthly_expense * f64::from(plan.break_duration_months) + extra_costs;
    let shortfall = (total_cost - savings).max(0.0);
    let available_runway_months = if adjusted_monthly_expense > 0.0 {
        ((savings - extra_costs) / adjusted_monthly_expense).max(0.0)
    } else {
        0.0
    };

    RunwayEstimate {
        adjusted_monthly_expense,
        extra_costs,
        extra_costs_note,
        total_cost,
        shortfall,
        available_runway_months,
        months_until_start: plan.months_until_start,
    }
}

fn maternity_note(medical: f64) -> String {
    format!(
        "Includes ₹{}k for medical & baby setup.",
        (medical / 1_000.0).round()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_plan() -> BreakPlan {
        BreakPlan {
            monthly_expenses: 50_000.0,
            break_duration_months: 6,
            existing_savings: 200_000.0,
            break_type: BreakType::Chill,
            months_until_start: 12,
        }
    }

    #[test]
    fn chill_break_inflates_burn_for_lead_time() {
        let estimate = estimate_break_runway(&sample_plan());
        assert_approx(estimate.adjusted_monthly_expense, 53_500.0);
        assert_approx(estimate.extra_costs, 0.0);
        assert!(estimate.extra_costs_note.is_empty());
        assert_approx(estimate.total_cost, 321_000.0);
        assert_approx(estimate.shortfall, 121_000.0);
        assert_approx(estimate.available_runway_months, 200_000.0 / 53_500.0);
        assert_eq!(estimate.months_until_start, 12);
    }

    #[test]
    fn maternity_break_adds_medical_cost_and_uplift() {
        let mut plan = sample_plan();
        plan.break_type = BreakType::Maternity;
        let estimate = estimate_break_runway(&plan);
        assert_approx(estimate.extra_costs, 165_000.0);
        assert_approx(estimate.adjusted_monthly_expense, 64_200.0);
        assert_approx(estimate.total_cost, 64_200.0 * 6.0 + 165_000.0);
        assert!(estimate.extra_costs_note.contains("165k"));
        assert_approx(estimate.available_runway_months, 35_000.0 / 64_200.0);
    }

    #[test]
    fn maternity_note_rounds_half_thousands_up() {
        assert_eq!(
            maternity_note(152_500.0),
            "Includes ₹153k for medical & baby setup."
        );
        assert_eq!(
            maternity_note(150_000.0),
            "Includes ₹150k for medical & baby setup."
        );
    }

    #[test]
    fn study_break_adds_course_fees() {
        let mut plan = sample_plan();
        plan.break_type = BreakType::Study;
        plan.months_until_start = 0;
        plan.existing_savings = 1_000_000.0;
        let estimate = estimate_break_runway(&plan);
        assert_approx(estimate.adjusted_monthly_expense, 50_000.0);
        assert_approx(estimate.extra_costs, 200_000.0);
        assert_approx(estimate.total_cost, 500_000.0);
        assert_approx(estimate.shortfall, 0.0);
        assert_approx(estimate.available_runway_months, 16.0);
    }

    #[test]
    fn zero_expenses_do_not_divide_by_zero() {
        let mut plan = sample_plan();
        plan.monthly_expenses = 0.0;
        let estimate = estimate_break_runway(&plan);
        assert_approx(estimate.available_runway_months, 0.0);
        assert!(estimate.available_runway_months.is_finite());
    }

    #[test]
    fn extra_costs_beyond_savings_leave_no_runway() {
        let mut plan = sample_plan();
        plan.break_type = BreakType::Study;
        plan.existing_savings = 50_000.0;
        let estimate = estimate_break_runway(&plan);
        assert_approx(estimate.available_runway_months, 0.0);
    }
}

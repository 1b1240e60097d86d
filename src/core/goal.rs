use super::growth::project_inflated_price;
use super::types::{GoalPlan, GoalProfile, amount};

/// Sizes the level monthly deposit, paid at the start of each month, that
/// grows to the inflated goal cost at the assumed return.
pub fn plan_goal_funding(profile: &GoalProfile) -> GoalPlan {
    let present_cost = amount(profile.present_cost);
    if present_cost <= 0.0 {
        return GoalPlan::default();
    }

    let future_cost = project_inflated_price(
        present_cost,
        profile.years_to_goal,
        profile.annual_inflation_rate,
    );
    let months = f64::from(profile.years_to_goal) * 12.0;

    GoalPlan {
        future_cost,
        required_monthly_contribution: annuity_due_deposit(
            future_cost,
            profile.assumed_annual_return_rate,
            months,
        ),
    }
}

fn annuity_due_deposit(target: f64, annual_return: f64, months: f64) -> f64 {
    let target = amount(target);
    if months <= 0.0 {
        return target;
    }

    let r = if annual_return.is_finite() {
        annual_return / 12.0
    } else {
        0.0
    };
    if r == 0.0 {
        return target / months;
    }

    let factor = ((1.0 + r).powf(months) - 1.0) / r * (1.0 + r);
    if factor.is_finite() && factor > 0.0 {
        target / factor
    } else {
        target / months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DEFAULT_ANNUAL_RETURN, GoalCategory};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn profile(present_cost: f64, years: u32, inflation: f64, annual_return: f64) -> GoalProfile {
        GoalProfile {
            present_cost,
            years_to_goal: years,
            annual_inflation_rate: inflation,
            assumed_annual_return_rate: annual_return,
        }
    }

    #[test]
    fn three_year_goal_matches_hand_calculation() {
        let plan = plan_goal_funding(&profile(80_000.0, 3, 0.07, 0.12));
        // 80_000 * 1.07^3 = 98_003.44
        assert_approx_tol(plan.future_cost, 98_003.0, 1e-9);
        assert_approx_tol(plan.future_cost, 98_010.0, 10.0);

        // Annuity-due factor at 1% a month over 36 months is about 43.5076.
        assert_approx_tol(plan.required_monthly_contribution, 98_003.0 / 43.507_6, 0.5);
        assert!(plan.required_monthly_contribution > 0.0);
        assert!(plan.required_monthly_contribution < plan.future_cost / 36.0);
    }

    #[test]
    fn zero_cost_returns_zero_plan() {
        let plan = plan_goal_funding(&profile(0.0, 5, 0.10, 0.12));
        assert_eq!(plan, GoalPlan::default());
        assert_eq!(plan.future_cost, 0.0);
        assert_eq!(plan.required_monthly_contribution, 0.0);
    }

    #[test]
    fn negative_and_nan_cost_return_zero_plan() {
        assert_eq!(
            plan_goal_funding(&profile(-5_000.0, 5, 0.10, 0.12)),
            GoalPlan::default()
        );
        assert_eq!(
            plan_goal_funding(&profile(f64::NAN, 5, 0.10, 0.12)),
            GoalPlan::default()
        );
    }

    #[test]
    fn zero_return_falls_back_to_linear_saving() {
        let plan = plan_goal_funding(&profile(120_000.0, 2, 0.0, 0.0));
        assert_approx_tol(plan.future_cost, 120_000.0, 1e-9);
        assert_approx_tol(plan.required_monthly_contribution, 5_000.0, 1e-9);
    }

    #[test]
    fn zero_horizon_needs_the_full_cost_now() {
        let plan = plan_goal_funding(&profile(40_000.0, 0, 0.10, 0.12));
        assert_approx_tol(plan.future_cost, 40_000.0, 1e-9);
        assert_approx_tol(plan.required_monthly_contribution, 40_000.0, 1e-9);
    }

    #[test]
    fn total_loss_return_does_not_produce_infinity() {
        let plan = plan_goal_funding(&profile(36_000.0, 1, 0.0, -12.0));
        assert!(plan.required_monthly_contribution.is_finite());
        assert_approx_tol(plan.required_monthly_contribution, 3_000.0, 1e-9);
    }

    #[test]
    fn runaway_inflation_still_needs_a_positive_finite_deposit() {
        let plan = plan_goal_funding(&profile(100.0, 100, 1e10, 0.12));
        assert_eq!(plan.future_cost, f64::MAX);
        assert!(plan.required_monthly_contribution.is_finite());
        assert!(plan.required_monthly_contribution > 0.0);
    }

    #[test]
    fn category_profile_uses_category_inflation_and_default_return() {
        let goal = GoalProfile::for_category(200_000.0, 4, GoalCategory::Medical);
        assert_eq!(goal.annual_inflation_rate, 0.14);
        assert_eq!(goal.assumed_annual_return_rate, DEFAULT_ANNUAL_RETURN);

        let wedding = plan_goal_funding(&GoalProfile::for_category(200_000.0, 4, GoalCategory::Wedding));
        let medical = plan_goal_funding(&goal);
        assert!(medical.future_cost > wedding.future_cost);
        assert!(medical.required_monthly_contribution > wedding.required_monthly_contribution);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_positive_goals_need_positive_saving_below_linear(
            cost in 1u32..50_000_000,
            years in 1u32..40,
            inflation_bp in 1i32..2_000,
            return_bp in 1i32..2_500
        ) {
            let goal = profile(cost as f64, years, inflation_bp as f64 / 10_000.0, return_bp as f64 / 10_000.0);
            let plan = plan_goal_funding(&goal);
            prop_assert!(plan.future_cost >= goal.present_cost);
            prop_assert!(plan.required_monthly_contribution > 0.0);
            prop_assert!(plan.required_monthly_contribution < plan.future_cost / (years as f64 * 12.0));
            prop_assert_eq!(plan, plan_goal_funding(&goal));
        }
    }
}

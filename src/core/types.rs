use serde::Serialize;

/// Annual return assumed for investment-backed goals.
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.12;

/// Headline consumer inflation used by the simplified calculators.
pub const GENERAL_INFLATION: f64 = 0.07;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SalaryProfile {
    pub gross_annual_income: f64,
    pub basic_annual_salary: f64,
    pub hra_received_annual: f64,
    pub rent_paid_annual: f64,
    pub investments_80c: f64,
    pub investments_nps: f64,
    pub health_insurance_premium: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxRegime {
    Simplified,
    Deduction,
}

/// One marginal band: income above `from` (up to the next band) is taxed at `rate`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaxBand {
    pub from: f64,
    pub rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegimeRules {
    pub standard_deduction: f64,
    pub bands: Vec<TaxBand>,
    /// Taxable income at or below this owes no slab tax at all.
    pub rebate_limit: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaxRules {
    pub simplified: RegimeRules,
    pub deduction: RegimeRules,
    pub cess_rate: f64,
    pub cap_80c: f64,
    pub cap_nps: f64,
    pub cap_health: f64,
    pub hra_rent_offset_share: f64,
    pub hra_basic_cap_share: f64,
}

impl Default for TaxRules {
    fn default() -> Self {
        let band = |from: f64, rate: f64| TaxBand { from, rate };
        Self {
            simplified: RegimeRules {
                standard_deduction: 75_000.0,
                bands: vec![
                    band(0.0, 0.0),
                    band(300_000.0, 0.05),
                    band(700_000.0, 0.10),
                    band(1_000_000.0, 0.15),
                    band(1_200_000.0, 0.20),
                    band(1_500_000.0, 0.30),
                ],
                rebate_limit: 700_000.0,
            },
            deduction: RegimeRules {
                standard_deduction: 50_000.0,
                bands: vec![
                    band(0.0, 0.0),
                    band(250_000.0, 0.05),
                    band(500_000.0, 0.20),
                    band(1_000_000.0, 0.30),
                ],
                rebate_limit: 500_000.0,
            },
            cess_rate: 0.04,
            cap_80c: 150_000.0,
            cap_nps: 50_000.0,
            cap_health: 25_000.0,
            hra_rent_offset_share: 0.10,
            hra_basic_cap_share: 0.50,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxComparisonResult {
    pub tax_under_simplified_regime: f64,
    pub tax_under_deduction_regime: f64,
    pub taxable_income_simplified: f64,
    pub taxable_income_deduction: f64,
    pub hra_exemption_applied: f64,
    pub recommended_regime: TaxRegime,
    pub savings_if_recommended: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    General,
    Travel,
    Wedding,
    Medical,
    Car,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::General,
        GoalCategory::Travel,
        GoalCategory::Wedding,
        GoalCategory::Medical,
        GoalCategory::Car,
    ];

    pub fn inflation_rate(self) -> f64 {
        match self {
            GoalCategory::General => GENERAL_INFLATION,
            GoalCategory::Travel => 0.10,
            GoalCategory::Wedding => 0.12,
            GoalCategory::Medical => 0.14,
            GoalCategory::Car => 0.08,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalCategory::General => "Dream Purchase",
            GoalCategory::Travel => "Euro Trip",
            GoalCategory::Wedding => "Designer Wedding",
            GoalCategory::Medical => "Egg Freezing",
            GoalCategory::Car => "Luxury Car",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GoalProfile {
    pub present_cost: f64,
    pub years_to_goal: u32,
    pub annual_inflation_rate: f64,
    pub assumed_annual_return_rate: f64,
}

impl GoalProfile {
    pub fn for_category(present_cost: f64, years_to_goal: u32, category: GoalCategory) -> Self {
        Self {
            present_cost,
            years_to_goal,
            annual_inflation_rate: category.inflation_rate(),
            assumed_annual_return_rate: DEFAULT_ANNUAL_RETURN,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub future_cost: f64,
    pub required_monthly_contribution: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSavingsPlan {
    pub future_cost: f64,
    pub monthly_saving: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasketItem {
    pub key: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub const INFLATION_BASKET: [BasketItem; 4] = [
    BasketItem {
        key: "milk",
        name: "1L Milk",
        price: 66.0,
    },
    BasketItem {
        key: "chai",
        name: "1 Cup Chai",
        price: 15.0,
    },
    BasketItem {
        key: "cylinder",
        name: "Gas Cylinder",
        price: 1_100.0,
    },
    BasketItem {
        key: "petrol",
        name: "1L Petrol",
        price: 100.0,
    },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketProjection {
    pub key: &'static str,
    pub name: &'static str,
    pub price_today: f64,
    pub future_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loan {
    pub label: String,
    pub outstanding_principal: f64,
    pub annual_rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoanPair {
    pub loan_a: Loan,
    pub loan_b: Loan,
    pub available_surplus: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum LoanTarget {
    A,
    B,
    Either,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRecommendation {
    pub target_loan: LoanTarget,
    pub estimated_annual_interest_saved: f64,
    pub rationale: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakType {
    Chill,
    Maternity,
    Study,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BreakPlan {
    pub monthly_expenses: f64,
    pub break_duration_months: u32,
    pub existing_savings: f64,
    pub break_type: BreakType,
    pub months_until_start: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayEstimate {
    pub adjusted_monthly_expense: f64,
    pub extra_costs: f64,
    pub extra_costs_note: String,
    pub total_cost: f64,
    pub shortfall: f64,
    pub available_runway_months: f64,
    pub months_until_start: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FunFundInput {
    pub monthly_income: f64,
    pub fixed_expenses: f64,
    pub investments: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunFund {
    pub guilt_free: f64,
    pub percent_of_income: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KittyMember {
    pub name: String,
    pub has_paid: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KittyRound {
    pub contribution_per_member: f64,
    pub members: Vec<KittyMember>,
    pub winning_bid: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KittySettlement {
    pub member_count: u32,
    pub paid_count: u32,
    pub pot_value: f64,
    pub collected_amount: f64,
    pub collection_progress: f64,
    pub dividend_per_member: f64,
    pub winner_payout: f64,
}

/// Clamps a user-entered amount to a usable non-negative figure.
pub(crate) fn amount(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Expresses a fraction as a percentage rounded to two decimals.
pub(crate) fn as_percent(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 100.0
}

/// Clamps a growth rate to the domain where `1 + rate` stays non-negative.
pub(crate) fn growth_rate(rate: f64) -> f64 {
    if rate.is_finite() { rate.max(-1.0) } else { 0.0 }
}

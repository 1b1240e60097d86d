use clap::{Args, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use crate::core::{
    BreakPlan, BreakType, FunFundInput, GoalCategory, GoalProfile, KittyMember, KittyRound, Loan,
    LoanPair, SalaryProfile, TaxRules,
};

pub const MAX_HORIZON_YEARS: u32 = 100;
pub const MAX_HORIZON_MONTHS: u32 = 600;
pub const MAX_GROWTH_PERCENT: u32 = 1_000;

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("{field} must be <= {max}")]
    AboveMaximum { field: &'static str, max: u32 },
    #[error("{field} must be > -100")]
    RateTooLow { field: &'static str },
    #[error("{field} must be at most {max}%")]
    RateTooHigh { field: &'static str, max: u32 },
    #[error("{field} must be between 0 and 100")]
    PercentOutOfRange { field: &'static str },
    #[error("a kitty group needs at least one member")]
    EmptyKittyGroup,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApiGoalCategory {
    #[serde(alias = "dream")]
    General,
    Travel,
    Wedding,
    Medical,
    Car,
}

impl From<ApiGoalCategory> for GoalCategory {
    fn from(value: ApiGoalCategory) -> Self {
        match value {
            ApiGoalCategory::General => GoalCategory::General,
            ApiGoalCategory::Travel => GoalCategory::Travel,
            ApiGoalCategory::Wedding => GoalCategory::Wedding,
            ApiGoalCategory::Medical => GoalCategory::Medical,
            ApiGoalCategory::Car => GoalCategory::Car,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApiBreakType {
    Chill,
    Maternity,
    Study,
}

impl From<ApiBreakType> for BreakType {
    fn from(value: ApiBreakType) -> Self {
        match value {
            ApiBreakType::Chill => BreakType::Chill,
            ApiBreakType::Maternity => BreakType::Maternity,
            ApiBreakType::Study => BreakType::Study,
        }
    }
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxPayload {
    #[arg(long, help = "Gross annual income")]
    #[serde(alias = "grossAnnualIncome")]
    pub gross: Option<f64>,
    #[arg(long, help = "Basic annual salary")]
    #[serde(alias = "basicAnnualSalary")]
    pub basic: Option<f64>,
    #[arg(long, help = "HRA received in the year")]
    #[serde(alias = "hraReceivedAnnual")]
    pub hra_received: Option<f64>,
    #[arg(long, help = "Rent paid in the year")]
    #[serde(alias = "rentPaidAnnual")]
    pub rent_paid: Option<f64>,
    #[arg(long = "investments-80c")]
    #[serde(rename = "investments80C", alias = "investments80c")]
    pub investments_80c: Option<f64>,
    #[arg(long)]
    #[serde(rename = "investmentsNPS", alias = "investmentsNps")]
    pub investments_nps: Option<f64>,
    #[arg(long)]
    #[serde(alias = "healthInsurancePremium")]
    pub health_insurance: Option<f64>,
    #[arg(long, help = "Cess on slab tax in percent")]
    pub cess_rate: Option<f64>,
    #[arg(long)]
    pub simplified_standard_deduction: Option<f64>,
    #[arg(long)]
    pub deduction_standard_deduction: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct InflationPayload {
    #[arg(long, help = "Price today")]
    #[serde(alias = "presentPrice")]
    pub price: Option<f64>,
    #[arg(long)]
    pub years: Option<u32>,
    #[arg(long, allow_hyphen_values = true, help = "Annual inflation in percent, e.g. 7")]
    #[serde(alias = "annualRate")]
    pub rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct BasketPayload {
    #[arg(long)]
    pub years: Option<u32>,
    #[arg(long, allow_hyphen_values = true, help = "Annual inflation in percent, e.g. 7")]
    pub rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalPayload {
    #[arg(long, help = "Cost of the goal today")]
    #[serde(alias = "presentCost")]
    pub cost: Option<f64>,
    #[arg(long)]
    #[serde(alias = "yearsToGoal")]
    pub years: Option<u32>,
    #[arg(long, value_enum)]
    pub category: Option<ApiGoalCategory>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Annual inflation in percent; defaults to the category's rate"
    )]
    pub inflation: Option<f64>,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Expected annual investment return in percent"
    )]
    pub annual_return: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct SavingsPayload {
    #[arg(long, help = "Cost of the purchase today")]
    pub cost: Option<f64>,
    #[arg(long)]
    pub years: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct LoanPayload {
    #[arg(long)]
    #[serde(alias = "personalLoanAmt")]
    pub personal_loan_amount: Option<f64>,
    #[arg(long, help = "Personal loan interest in percent")]
    pub personal_loan_rate: Option<f64>,
    #[arg(long)]
    #[serde(alias = "homeLoanAmt")]
    pub home_loan_amount: Option<f64>,
    #[arg(long, help = "Home loan interest in percent")]
    pub home_loan_rate: Option<f64>,
    #[arg(long, help = "Cash available to prepay")]
    #[serde(alias = "surplusAmount")]
    pub surplus: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct RunwayPayload {
    #[arg(long)]
    pub monthly_expenses: Option<f64>,
    #[arg(long)]
    pub break_duration_months: Option<u32>,
    #[arg(long)]
    pub existing_savings: Option<f64>,
    #[arg(long, value_enum)]
    pub break_type: Option<ApiBreakType>,
    #[arg(long)]
    pub months_until_start: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Args)]
#[serde(default, rename_all = "camelCase")]
pub struct FunFundPayload {
    #[arg(long)]
    #[serde(alias = "monthlyIncome")]
    pub income: Option<f64>,
    #[arg(long)]
    #[serde(alias = "fixedExpenses")]
    pub fixed: Option<f64>,
    #[arg(long)]
    #[serde(alias = "investments")]
    pub invest: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KittyMemberPayload {
    pub name: String,
    #[serde(default)]
    pub has_paid: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KittyPayload {
    #[serde(alias = "contributionPerMember")]
    pub amount: f64,
    pub members: Vec<KittyMemberPayload>,
    pub winning_bid: Option<f64>,
}

pub fn default_salary_profile() -> SalaryProfile {
    SalaryProfile {
        gross_annual_income: 1_500_000.0,
        basic_annual_salary: 600_000.0,
        hra_received_annual: 300_000.0,
        rent_paid_annual: 240_000.0,
        investments_80c: 150_000.0,
        investments_nps: 0.0,
        health_insurance_premium: 25_000.0,
    }
}

fn default_break_plan() -> BreakPlan {
    BreakPlan {
        monthly_expenses: 50_000.0,
        break_duration_months: 6,
        existing_savings: 200_000.0,
        break_type: BreakType::Chill,
        months_until_start: 12,
    }
}

const DEFAULT_BASKET_YEARS: u32 = 5;
const DEFAULT_INFLATION_PRICE: f64 = 66.0;
const DEFAULT_GOAL_YEARS: u32 = 3;
const DEFAULT_GOAL_CATEGORY: GoalCategory = GoalCategory::Travel;

pub fn build_tax_request(payload: TaxPayload) -> Result<(SalaryProfile, TaxRules), RequestError> {
    let mut profile = default_salary_profile();
    let mut rules = TaxRules::default();

    if let Some(v) = payload.gross {
        profile.gross_annual_income = v;
    }
    if let Some(v) = payload.basic {
        profile.basic_annual_salary = v;
    }
    if let Some(v) = payload.hra_received {
        profile.hra_received_annual = v;
    }
    if let Some(v) = payload.rent_paid {
        profile.rent_paid_annual = v;
    }
    if let Some(v) = payload.investments_80c {
        profile.investments_80c = v;
    }
    if let Some(v) = payload.investments_nps {
        profile.investments_nps = v;
    }
    if let Some(v) = payload.health_insurance {
        profile.health_insurance_premium = v;
    }

    if let Some(v) = payload.cess_rate {
        if !(0.0..=100.0).contains(&v) {
            return Err(RequestError::PercentOutOfRange { field: "cessRate" });
        }
        rules.cess_rate = v / 100.0;
    }
    if let Some(v) = payload.simplified_standard_deduction {
        rules.simplified.standard_deduction = v;
    }
    if let Some(v) = payload.deduction_standard_deduction {
        rules.deduction.standard_deduction = v;
    }

    Ok((profile, rules))
}

/// Returns `(present_price, years, annual_rate)` with the rate as a fraction.
pub fn build_inflation_request(payload: InflationPayload) -> Result<(f64, u32, f64), RequestError> {
    let years = horizon_years(payload.years.unwrap_or(DEFAULT_BASKET_YEARS), "years")?;
    let rate = growth_percent(payload.rate, crate::core::GENERAL_INFLATION, "rate")?;
    Ok((payload.price.unwrap_or(DEFAULT_INFLATION_PRICE), years, rate))
}

pub fn build_basket_request(payload: BasketPayload) -> Result<(u32, f64), RequestError> {
    let years = horizon_years(payload.years.unwrap_or(DEFAULT_BASKET_YEARS), "years")?;
    let rate = growth_percent(payload.rate, crate::core::GENERAL_INFLATION, "rate")?;
    Ok((years, rate))
}

pub fn build_goal_request(payload: GoalPayload) -> Result<(GoalCategory, GoalProfile), RequestError> {
    let category = payload
        .category
        .map(GoalCategory::from)
        .unwrap_or(DEFAULT_GOAL_CATEGORY);
    let years = horizon_years(payload.years.unwrap_or(DEFAULT_GOAL_YEARS), "years")?;
    let mut profile = GoalProfile::for_category(payload.cost.unwrap_or(0.0), years, category);

    profile.annual_inflation_rate =
        growth_percent(payload.inflation, profile.annual_inflation_rate, "inflation")?;
    profile.assumed_annual_return_rate = growth_percent(
        payload.annual_return,
        profile.assumed_annual_return_rate,
        "annualReturn",
    )?;

    Ok((category, profile))
}

pub fn build_savings_request(payload: SavingsPayload) -> Result<(f64, u32), RequestError> {
    let years = horizon_years(payload.years.unwrap_or(DEFAULT_GOAL_YEARS), "years")?;
    Ok((payload.cost.unwrap_or(0.0), years))
}

pub fn build_loan_request(payload: LoanPayload) -> Result<LoanPair, RequestError> {
    let personal_rate = loan_rate(payload.personal_loan_rate, "personalLoanRate")?;
    let home_rate = loan_rate(payload.home_loan_rate, "homeLoanRate")?;

    Ok(LoanPair {
        loan_a: Loan {
            label: "Personal Loan".to_string(),
            outstanding_principal: payload.personal_loan_amount.unwrap_or(0.0),
            annual_rate: personal_rate,
        },
        loan_b: Loan {
            label: "Home Loan".to_string(),
            outstanding_principal: payload.home_loan_amount.unwrap_or(0.0),
            annual_rate: home_rate,
        },
        available_surplus: payload.surplus.unwrap_or(0.0),
    })
}

pub fn build_runway_request(payload: RunwayPayload) -> Result<BreakPlan, RequestError> {
    let mut plan = default_break_plan();

    if let Some(v) = payload.monthly_expenses {
        plan.monthly_expenses = v;
    }
    if let Some(v) = payload.break_duration_months {
        plan.break_duration_months = horizon_months(v, "breakDurationMonths")?;
    }
    if let Some(v) = payload.existing_savings {
        plan.existing_savings = v;
    }
    if let Some(v) = payload.break_type {
        plan.break_type = v.into();
    }
    if let Some(v) = payload.months_until_start {
        plan.months_until_start = horizon_months(v, "monthsUntilStart")?;
    }

    Ok(plan)
}

pub fn build_fun_fund_request(payload: FunFundPayload) -> FunFundInput {
    FunFundInput {
        monthly_income: payload.income.unwrap_or(0.0),
        fixed_expenses: payload.fixed.unwrap_or(0.0),
        investments: payload.invest.unwrap_or(0.0),
    }
}

pub fn build_kitty_request(payload: KittyPayload) -> Result<KittyRound, RequestError> {
    if payload.members.is_empty() {
        return Err(RequestError::EmptyKittyGroup);
    }

    Ok(KittyRound {
        contribution_per_member: payload.amount,
        members: payload
            .members
            .into_iter()
            .map(|m| KittyMember {
                name: m.name,
                has_paid: m.has_paid,
            })
            .collect(),
        winning_bid: payload.winning_bid,
    })
}

fn horizon_years(years: u32, field: &'static str) -> Result<u32, RequestError> {
    if years > MAX_HORIZON_YEARS {
        return Err(RequestError::AboveMaximum {
            field,
            max: MAX_HORIZON_YEARS,
        });
    }
    Ok(years)
}

fn horizon_months(months: u32, field: &'static str) -> Result<u32, RequestError> {
    if months > MAX_HORIZON_MONTHS {
        return Err(RequestError::AboveMaximum {
            field,
            max: MAX_HORIZON_MONTHS,
        });
    }
    Ok(months)
}

/// Converts an optional percentage to a fraction, falling back to `default`.
fn growth_percent(
    percent: Option<f64>,
    default: f64,
    field: &'static str,
) -> Result<f64, RequestError> {
    match percent {
        None => Ok(default),
        Some(v) if v > f64::from(MAX_GROWTH_PERCENT) => Err(RequestError::RateTooHigh {
            field,
            max: MAX_GROWTH_PERCENT,
        }),
        Some(v) if !v.is_finite() || v <= -100.0 => Err(RequestError::RateTooLow { field }),
        Some(v) => Ok(v / 100.0),
    }
}

fn loan_rate(percent: Option<f64>, field: &'static str) -> Result<f64, RequestError> {
    let v = percent.unwrap_or(0.0);
    if !(0.0..=100.0).contains(&v) {
        return Err(RequestError::PercentOutOfRange { field });
    }
    Ok(v / 100.0)
}

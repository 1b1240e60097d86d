mod budget;
mod goal;
mod growth;
mod kitty;
mod loan;
mod runway;
mod tax;
mod types;

pub use budget::split_fun_fund;
pub use goal::plan_goal_funding;
pub use growth::{plan_simple_savings, project_basket, project_inflated_price};
pub use kitty::settle_kitty_round;
pub use loan::recommend_loan_payoff;
pub use runway::estimate_break_runway;
pub use tax::{compare_tax_regimes, compare_tax_regimes_with};
pub(crate) use types::as_percent;
pub use types::{
    BasketItem, BasketProjection, BreakPlan, BreakType, DEFAULT_ANNUAL_RETURN, FunFund,
    FunFundInput, GENERAL_INFLATION, GoalCategory, GoalPlan, GoalProfile, INFLATION_BASKET,
    KittyMember, KittyRound, KittySettlement, Loan, LoanPair, LoanTarget, PayoffRecommendation,
    RegimeRules, RunwayEstimate, SalaryProfile, SimpleSavingsPlan, TaxBand, TaxComparisonResult,
    TaxRegime, TaxRules,
};

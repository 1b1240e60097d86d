use super::types::{FunFund, FunFundInput, amount};

/// What is left of monthly income after fixed costs and investments.
pub fn split_fun_fund(input: &FunFundInput) -> FunFund {
    let income = amount(input.monthly_income);
    let guilt_free = (income - amount(input.fixed_expenses) - amount(input.investments)).max(0.0);
    let percent_of_income = if income > 0.0 {
        (guilt_free / income * 100.0).round()
    } else {
        0.0
    };
    FunFund {
        guilt_free,
        percent_of_income,
    }
}

use super::types::{
    BasketProjection, GENERAL_INFLATION, INFLATION_BASKET, SimpleSavingsPlan, amount, growth_rate,
};

/// Projects a present-day price forward under compound annual inflation,
/// rounded to the nearest whole currency unit. A zero horizon returns the
/// price untouched. Projections that overflow saturate at `f64::MAX`.
pub fn project_inflated_price(present_price: f64, years: u32, annual_rate: f64) -> f64 {
    let price = amount(present_price);
    if years == 0 || price == 0.0 {
        return price;
    }
    let factor = (1.0 + growth_rate(annual_rate)).powf(f64::from(years));
    let projected = (price * factor).round();
    if projected.is_finite() {
        projected
    } else {
        f64::MAX
    }
}

pub fn project_basket(years: u32, annual_rate: f64) -> Vec<BasketProjection> {
    INFLATION_BASKET
        .iter()
        .map(|item| BasketProjection {
            key: item.key,
            name: item.name,
            price_today: item.price,
            future_price: project_inflated_price(item.price, years, annual_rate),
        })
        .collect()
}

/// Plain save-every-month plan with no investment growth: the inflated cost
/// split evenly across the months to the goal.
pub fn plan_simple_savings(present_cost: f64, years: u32) -> Option<SimpleSavingsPlan> {
    let cost = amount(present_cost);
    if cost <= 0.0 || years == 0 {
        return None;
    }
    let future_cost = project_inflated_price(cost, years, GENERAL_INFLATION);
    let months = f64::from(years) * 12.0;
    Some(SimpleSavingsPlan {
        future_cost,
        monthly_saving: (future_cost / months).round(),
    })
}

use super::types::{
    RegimeRules, SalaryProfile, TaxComparisonResult, TaxRegime, TaxRules, amount,
};

pub fn compare_tax_regimes(profile: &SalaryProfile) -> TaxComparisonResult {
    compare_tax_regimes_with(profile, &TaxRules::default())
}

pub fn compare_tax_regimes_with(profile: &SalaryProfile, rules: &TaxRules) -> TaxComparisonResult {
    let gross = amount(profile.gross_annual_income);

    let taxable_simplified = (gross - amount(rules.simplified.standard_deduction)).max(0.0);
    let total_simplified = total_tax(taxable_simplified, &rules.simplified, rules.cess_rate);

    let hra_exemption = hra_exemption(profile, rules);
    let deductions = chapter_vi_a_deductions(profile, rules);
    let taxable_deduction = (gross
        - amount(rules.deduction.standard_deduction)
        - hra_exemption
        - deductions)
        .max(0.0);
    let total_deduction = total_tax(taxable_deduction, &rules.deduction, rules.cess_rate);

    // Compare the reported (rounded) figures so the saving matches them exactly.
    let recommended_regime = if total_simplified < total_deduction {
        TaxRegime::Simplified
    } else {
        TaxRegime::Deduction
    };

    TaxComparisonResult {
        tax_under_simplified_regime: total_simplified,
        tax_under_deduction_regime: total_deduction,
        taxable_income_simplified: taxable_simplified,
        taxable_income_deduction: taxable_deduction,
        hra_exemption_applied: hra_exemption,
        recommended_regime,
        savings_if_recommended: (total_simplified - total_deduction).abs(),
    }
}

fn hra_exemption(profile: &SalaryProfile, rules: &TaxRules) -> f64 {
    let basic = amount(profile.basic_annual_salary);
    let received = amount(profile.hra_received_annual);
    let rent_over_basic_share = amount(profile.rent_paid_annual) - rules.hra_rent_offset_share * basic;
    let basic_cap = rules.hra_basic_cap_share * basic;

    received.min(rent_over_basic_share).min(basic_cap).max(0.0)
}

fn chapter_vi_a_deductions(profile: &SalaryProfile, rules: &TaxRules) -> f64 {
    amount(profile.investments_80c).min(amount(rules.cap_80c))
        + amount(profile.investments_nps).min(amount(rules.cap_nps))
        + amount(profile.health_insurance_premium).min(amount(rules.cap_health))
}

fn total_tax(taxable_income: f64, regime: &RegimeRules, cess_rate: f64) -> f64 {
    let slab = slab_tax(taxable_income, regime);
    let cess = slab * amount(cess_rate);
    (slab + cess).round()
}

fn slab_tax(taxable_income: f64, regime: &RegimeRules) -> f64 {
    let income = amount(taxable_income);
    if income <= regime.rebate_limit {
        return 0.0;
    }

    let mut tax = 0.0;
    for (idx, band) in regime.bands.iter().enumerate() {
        if income <= band.from {
            break;
        }
        let upper = regime
            .bands
            .get(idx + 1)
            .map(|next| next.from)
            .unwrap_or(f64::INFINITY);
        let in_band = (income.min(upper) - band.from).max(0.0);
        tax += in_band * band.rate.clamp(0.0, 1.0);
    }
    tax
}

//! Per Capita Household Income (PCHI) calculator.
//!
//! PCHI divides the household's total monthly income across everyone living
//! at the address, care recipient included. Scheme checkers consume the
//! floored result through `CareProfile::monthly_pchi`.

use super::domain::MeansDeclaration;

/// Computed means snapshot ready to be persisted onto a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeansAssessment {
    pub monthly_pchi: u32,
    pub annual_property_value: Option<u32>,
}

/// Floor of `total_monthly_income / (household_size + 1)`.
///
/// `household_size` counts the other occupants; the divisor adds one so the
/// care recipient is always part of the household for division purposes.
pub fn compute_pchi(household_size: u32, total_monthly_income: u32) -> u32 {
    total_monthly_income / (household_size + 1)
}

/// A household that declares no income is means-tested on the annual value
/// of its property instead.
pub fn needs_annual_property_value(total_monthly_income: u32) -> bool {
    total_monthly_income == 0
}

/// Turn a declaration into the snapshot the eligibility engine reads.
///
/// The property value is retained only for zero-income households; the
/// no-income branch is the only consumer, so carrying it elsewhere would
/// leave stale data on the profile.
pub fn assess(declaration: &MeansDeclaration) -> MeansAssessment {
    let monthly_pchi = compute_pchi(declaration.household_size, declaration.total_monthly_income);
    let annual_property_value = if needs_annual_property_value(declaration.total_monthly_income) {
        declaration.annual_property_value
    } else {
        None
    };

    MeansAssessment {
        monthly_pchi,
        annual_property_value,
    }
}

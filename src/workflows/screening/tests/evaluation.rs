use super::common::*;
use crate::workflows::screening::domain::{Citizenship, Residence};
use crate::workflows::screening::evaluation::schemes::{
    self, HCG_TIER_FULL_PAYOUT, HCG_TIER_NO_INCOME, HCG_TIER_PARTIAL_PAYOUT, MDW_NO_MATCH,
    PARENT_RELIEF_AGE, PARENT_RELIEF_LIVES_WITH_YOU, PARENT_RELIEF_SUPPORTED_APART,
    TRAINING_GRANT_AGE, TRAINING_GRANT_RESIDENCY,
};
use crate::workflows::screening::evaluation::{EligibilityStatus, SchemeId};

fn tier_reasons() -> [&'static str; 3] {
    [HCG_TIER_NO_INCOME, HCG_TIER_FULL_PAYOUT, HCG_TIER_PARTIAL_PAYOUT]
}

#[test]
fn hcg_defers_all_income_tiers_without_a_declaration() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(None, None));

    for tier in tier_reasons() {
        assert!(assessment.verification_required.iter().any(|r| r == tier));
        assert!(!assessment.eligible_reasons.iter().any(|r| r == tier));
        assert!(!assessment.ineligible_reasons.iter().any(|r| r == tier));
    }
}

#[test]
fn hcg_zero_income_passes_on_modest_property_value() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(0), Some(20_000)));
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_NO_INCOME));
}

#[test]
fn hcg_zero_income_fails_on_high_property_value() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(0), Some(25_000)));
    assert!(assessment
        .ineligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_NO_INCOME));
}

#[test]
fn hcg_zero_income_fails_when_property_value_missing() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(0), None));
    assert!(assessment
        .ineligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_NO_INCOME));
}

#[test]
fn hcg_full_payout_tier_caps_at_1500() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(1500), None));
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_FULL_PAYOUT));
    assert!(!assessment
        .eligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_PARTIAL_PAYOUT));
}

#[test]
fn hcg_partial_payout_tier_starts_at_1501() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(1501), None));
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_PARTIAL_PAYOUT));
    assert!(!assessment
        .eligible_reasons
        .iter()
        .any(|r| r == HCG_TIER_FULL_PAYOUT));
}

#[test]
fn hcg_fails_every_tier_above_3600() {
    let assessment = schemes::home_caregiving_grant(&profile_with_means(Some(3601), None));
    for tier in tier_reasons() {
        assert!(assessment.ineligible_reasons.iter().any(|r| r == tier));
    }
}

#[test]
fn verification_outranks_passing_criteria() {
    // A fully passing training grant profile still cannot clear the four
    // unverifiable criteria, so the status must stay needs_verification.
    let determinations = engine().evaluate(&base_profile());
    let training_grant = determinations
        .iter()
        .find(|d| d.scheme == SchemeId::CaregiversTrainingGrant)
        .expect("training grant determination");

    assert_eq!(training_grant.eligible_reasons.len(), 2);
    assert!(training_grant.ineligible_reasons.is_empty());
    assert_eq!(
        training_grant.status,
        EligibilityStatus::NeedsVerification
    );
}

#[test]
fn mdw_citizen_case_yields_full_eligible_block() {
    let determination = engine()
        .evaluate(&base_profile())
        .into_iter()
        .find(|d| d.scheme == SchemeId::MdwLevyConcession)
        .expect("mdw determination");

    assert_eq!(determination.status, EligibilityStatus::Eligible);
    assert_eq!(determination.eligible_reasons.len(), 4);
    assert!(determination.ineligible_reasons.is_empty());
    assert_eq!(determination.criteria_count, 4);
    assert_eq!(determination.notes.len(), 1);
}

#[test]
fn mdw_pr_case_requires_age_67() {
    let mut profile = base_profile();
    profile.care_recipient_citizenship = Citizenship::PermanentResident;
    profile.care_recipient_age = 67;

    let assessment = schemes::mdw_levy_concession(&profile);
    assert_eq!(assessment.eligible_reasons.len(), 4);

    profile.care_recipient_age = 66;
    let assessment = schemes::mdw_levy_concession(&profile);
    assert!(assessment.eligible_reasons.is_empty());
    assert_eq!(assessment.ineligible_reasons.len(), 3);
}

#[test]
fn mdw_no_match_explains_both_cases() {
    let mut profile = base_profile();
    profile.care_recipient_citizenship = Citizenship::Foreigner;

    let determination = engine()
        .evaluate(&profile)
        .into_iter()
        .find(|d| d.scheme == SchemeId::MdwLevyConcession)
        .expect("mdw determination");

    assert_eq!(determination.status, EligibilityStatus::Ineligible);
    assert!(determination.eligible_reasons.is_empty());
    assert_eq!(determination.ineligible_reasons.len(), 3);
    assert_eq!(determination.ineligible_reasons[0], MDW_NO_MATCH);
    assert_eq!(determination.criteria_count, 4);
}

#[test]
fn parent_relief_fails_age_below_55() {
    let mut profile = base_profile();
    profile.care_recipient_age = 54;

    let assessment = schemes::parent_relief(&profile);
    assert!(assessment
        .ineligible_reasons
        .iter()
        .any(|r| r == PARENT_RELIEF_AGE));
    // The residence tier is selected, not failed.
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == PARENT_RELIEF_LIVES_WITH_YOU));
    assert_eq!(assessment.verification_required.len(), 2);
}

#[test]
fn parent_relief_selects_support_tier_when_living_apart() {
    let mut profile = base_profile();
    profile.care_recipient_residence = Residence::Other;

    let assessment = schemes::parent_relief(&profile);
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == PARENT_RELIEF_SUPPORTED_APART));
    assert!(!assessment
        .eligible_reasons
        .iter()
        .any(|r| r == PARENT_RELIEF_LIVES_WITH_YOU));
}

#[test]
fn training_grant_criteria_are_independent() {
    let mut profile = base_profile();
    profile.care_recipient_citizenship = Citizenship::Foreigner;

    let assessment = schemes::caregivers_training_grant(&profile);
    assert!(assessment
        .ineligible_reasons
        .iter()
        .any(|r| r == TRAINING_GRANT_RESIDENCY));
    assert!(assessment
        .eligible_reasons
        .iter()
        .any(|r| r == TRAINING_GRANT_AGE));
    assert_eq!(assessment.verification_required.len(), 4);
    assert_eq!(assessment.criteria_count, 6);
}

#[test]
fn moh_subsidy_accepts_permanent_residents() {
    let mut profile = base_profile();
    profile.care_recipient_citizenship = Citizenship::PermanentResident;

    let determination = engine()
        .evaluate(&profile)
        .into_iter()
        .find(|d| d.scheme == SchemeId::MohNonresidentialLtcSubsidy)
        .expect("moh determination");

    assert_eq!(determination.eligible_reasons.len(), 1);
    assert!(determination.ineligible_reasons.is_empty());
    // Provider funding can never be confirmed from the profile alone.
    assert_eq!(
        determination.status,
        EligibilityStatus::NeedsVerification
    );
}

#[test]
fn standard_registry_matches_registration_order() {
    let determinations = engine().evaluate(&base_profile());

    let ids: Vec<SchemeId> = determinations.iter().map(|d| d.scheme).collect();
    assert_eq!(
        ids,
        vec![
            SchemeId::ParentRelief,
            SchemeId::CaregiversTrainingGrant,
            SchemeId::HomeCaregivingGrant,
            SchemeId::MdwLevyConcession,
            SchemeId::MohNonresidentialLtcSubsidy,
        ]
    );

    let statuses: Vec<EligibilityStatus> = determinations.iter().map(|d| d.status).collect();
    assert_eq!(
        statuses,
        vec![
            EligibilityStatus::NeedsVerification,
            EligibilityStatus::NeedsVerification,
            EligibilityStatus::NeedsVerification,
            EligibilityStatus::Eligible,
            EligibilityStatus::NeedsVerification,
        ]
    );
}

use super::{SchemeAssessment, SchemeId};
use crate::workflows::screening::domain::{CareProfile, Citizenship, Residence};

// Parent/Dependent Relief criteria text.
pub(crate) const PARENT_RELIEF_AGE: &str = "Your care recipient is aged 55 and above";
pub(crate) const PARENT_RELIEF_LIVES_WITH_YOU: &str =
    "Your care recipient lives with you, which qualifies you for the higher relief amount";
pub(crate) const PARENT_RELIEF_SUPPORTED_APART: &str =
    "You spend more than $2,000 a year supporting your care recipient even though they do not live with you";
pub(crate) const PARENT_RELIEF_INCOME_CAP: &str =
    "Your care recipient's own annual income does not exceed $4,000";
pub(crate) const PARENT_RELIEF_SOLE_CLAIM: &str =
    "No one else is claiming or sharing relief on the same care recipient";

// Caregivers Training Grant criteria text.
pub(crate) const TRAINING_GRANT_RESIDENCY: &str =
    "Your care recipient is a Singapore citizen or permanent resident";
pub(crate) const TRAINING_GRANT_AGE: &str = "Your care recipient is aged 65 and above";
pub(crate) const TRAINING_GRANT_CAREGIVER_ROLE: &str =
    "You are the main caregiver or a family caregiver of the care recipient";
pub(crate) const TRAINING_GRANT_APPROVED_COURSE: &str =
    "The training course you select is on the approved caregiver training list";
pub(crate) const TRAINING_GRANT_COMPLETION: &str = "You attend and complete the training course";
pub(crate) const TRAINING_GRANT_ANNUAL_CAP: &str =
    "The $200 annual training grant cap has not been used up for this year";

// Home Caregiving Grant criteria text.
pub(crate) const HCG_RECIPIENT_CITIZEN: &str = "Your care recipient is a Singapore citizen";
pub(crate) const HCG_CAREGIVER_CITIZEN: &str = "You are a Singapore citizen";
pub(crate) const HCG_LIVES_IN_COMMUNITY: &str =
    "Your care recipient lives at home in the community, not in a nursing home or long-term care facility";
pub(crate) const HCG_TIER_NO_INCOME: &str =
    "Your care recipient's household has no income and the annual value of their home is $21,000 or less";
pub(crate) const HCG_TIER_FULL_PAYOUT: &str =
    "Your care recipient's household monthly per capita income is $1,500 or less, which qualifies for the $400 monthly grant";
pub(crate) const HCG_TIER_PARTIAL_PAYOUT: &str =
    "Your care recipient's household monthly per capita income is between $1,501 and $3,600, which qualifies for the $250 monthly grant";
pub(crate) const HCG_FUNCTIONAL_ASSESSMENT: &str =
    "Your care recipient is assessed to need permanent assistance with three or more activities of daily living";

// Migrant Domestic Worker Levy Concession criteria text.
pub(crate) const MDW_CITIZEN_RECIPIENT: &str = "Your care recipient is a Singapore citizen";
pub(crate) const MDW_PR_RECIPIENT: &str =
    "Your care recipient is a Singapore permanent resident";
pub(crate) const MDW_CITIZEN_CAREGIVER: &str = "You, the levy payer, are a Singapore citizen";
pub(crate) const MDW_LIVES_AT_HOME: &str = "Your care recipient lives at home with you";
pub(crate) const MDW_CONCESSIONARY_RATE: &str =
    "The concessionary levy rate applies to the migrant domestic worker caring for them";
pub(crate) const MDW_PR_AGE: &str = "Your care recipient is aged 67 and above";
pub(crate) const MDW_NO_MATCH: &str =
    "Your household does not currently match a levy concession category";
pub(crate) const MDW_CITIZEN_CASE_SUMMARY: &str =
    "To qualify, your care recipient can be a Singapore citizen living at home while you are a Singapore citizen";
pub(crate) const MDW_PR_CASE_SUMMARY: &str =
    "Alternatively, your care recipient can be a Singapore permanent resident aged 67 and above living at home while you are a Singapore citizen";
pub(crate) const MDW_HOUSEHOLD_FOOTNOTE: &str =
    "The levy concession covers one migrant domestic worker per eligible care recipient, up to two concessions per household";

// MOH Non-Residential Long-Term Care Subsidy criteria text.
pub(crate) const MOH_SUBSIDY_RESIDENCY: &str =
    "Your care recipient is a Singapore citizen or permanent resident";
pub(crate) const MOH_SUBSIDY_FUNDED_PROVIDER: &str =
    "The care provider you choose is a MOH-funded non-residential long-term care provider";

const HCG_PROPERTY_VALUE_CAP: u32 = 21_000;
const HCG_FULL_PAYOUT_PCHI_CAP: u32 = 1_500;
const HCG_PARTIAL_PAYOUT_PCHI_CAP: u32 = 3_600;

pub(crate) fn parent_relief(profile: &CareProfile) -> SchemeAssessment {
    let mut assessment = SchemeAssessment::new(SchemeId::ParentRelief, 4);

    if profile.care_recipient_age >= 55 {
        assessment.eligible_reasons.push(PARENT_RELIEF_AGE.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(PARENT_RELIEF_AGE.to_string());
    }

    // The relief tier is selected by residence rather than passed or failed:
    // either tier satisfies the second criterion.
    let tier = if profile.care_recipient_residence == Residence::Home {
        PARENT_RELIEF_LIVES_WITH_YOU
    } else {
        PARENT_RELIEF_SUPPORTED_APART
    };
    assessment.eligible_reasons.push(tier.to_string());

    assessment
        .verification_required
        .push(PARENT_RELIEF_INCOME_CAP.to_string());
    assessment
        .verification_required
        .push(PARENT_RELIEF_SOLE_CLAIM.to_string());

    assessment
}

pub(crate) fn caregivers_training_grant(profile: &CareProfile) -> SchemeAssessment {
    let mut assessment = SchemeAssessment::new(SchemeId::CaregiversTrainingGrant, 6);

    if profile.care_recipient_citizenship.is_resident() {
        assessment
            .eligible_reasons
            .push(TRAINING_GRANT_RESIDENCY.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(TRAINING_GRANT_RESIDENCY.to_string());
    }

    if profile.care_recipient_age >= 65 {
        assessment.eligible_reasons.push(TRAINING_GRANT_AGE.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(TRAINING_GRANT_AGE.to_string());
    }

    for criterion in [
        TRAINING_GRANT_CAREGIVER_ROLE,
        TRAINING_GRANT_APPROVED_COURSE,
        TRAINING_GRANT_COMPLETION,
        TRAINING_GRANT_ANNUAL_CAP,
    ] {
        assessment.verification_required.push(criterion.to_string());
    }

    assessment
}

pub(crate) fn home_caregiving_grant(profile: &CareProfile) -> SchemeAssessment {
    let mut assessment = SchemeAssessment::new(SchemeId::HomeCaregivingGrant, 5);

    if profile.care_recipient_citizenship == Citizenship::Citizen {
        assessment
            .eligible_reasons
            .push(HCG_RECIPIENT_CITIZEN.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(HCG_RECIPIENT_CITIZEN.to_string());
    }

    if profile.caregiver_citizenship == Citizenship::Citizen {
        assessment
            .eligible_reasons
            .push(HCG_CAREGIVER_CITIZEN.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(HCG_CAREGIVER_CITIZEN.to_string());
    }

    if profile.care_recipient_residence == Residence::NursingHomeLtcf {
        assessment
            .ineligible_reasons
            .push(HCG_LIVES_IN_COMMUNITY.to_string());
    } else {
        assessment
            .eligible_reasons
            .push(HCG_LIVES_IN_COMMUNITY.to_string());
    }

    match profile.monthly_pchi {
        // No declaration yet: none of the tiers can be resolved.
        None => {
            for tier in [HCG_TIER_NO_INCOME, HCG_TIER_FULL_PAYOUT, HCG_TIER_PARTIAL_PAYOUT] {
                assessment.verification_required.push(tier.to_string());
            }
        }
        // Declared zero income: the property value substitutes as the means
        // test. A missing value fails the criterion rather than erroring.
        Some(0) => match profile.annual_property_value {
            Some(value) if value <= HCG_PROPERTY_VALUE_CAP => {
                assessment.eligible_reasons.push(HCG_TIER_NO_INCOME.to_string());
            }
            _ => {
                assessment
                    .ineligible_reasons
                    .push(HCG_TIER_NO_INCOME.to_string());
            }
        },
        Some(pchi) if pchi <= HCG_FULL_PAYOUT_PCHI_CAP => {
            assessment
                .eligible_reasons
                .push(HCG_TIER_FULL_PAYOUT.to_string());
        }
        Some(pchi) if pchi <= HCG_PARTIAL_PAYOUT_PCHI_CAP => {
            assessment
                .eligible_reasons
                .push(HCG_TIER_PARTIAL_PAYOUT.to_string());
        }
        Some(_) => {
            for tier in [HCG_TIER_NO_INCOME, HCG_TIER_FULL_PAYOUT, HCG_TIER_PARTIAL_PAYOUT] {
                assessment.ineligible_reasons.push(tier.to_string());
            }
        }
    }

    assessment
        .verification_required
        .push(HCG_FUNCTIONAL_ASSESSMENT.to_string());

    assessment
}

pub(crate) fn mdw_levy_concession(profile: &CareProfile) -> SchemeAssessment {
    let mut assessment = SchemeAssessment::new(SchemeId::MdwLevyConcession, 4);

    let caregiver_is_citizen = profile.caregiver_citizenship == Citizenship::Citizen;
    let lives_at_home = profile.care_recipient_residence == Residence::Home;

    let citizen_case = profile.care_recipient_citizenship == Citizenship::Citizen
        && caregiver_is_citizen
        && lives_at_home;
    let pr_case = profile.care_recipient_citizenship == Citizenship::PermanentResident
        && caregiver_is_citizen
        && lives_at_home
        && profile.care_recipient_age >= 67;

    if citizen_case {
        for reason in [
            MDW_CITIZEN_RECIPIENT,
            MDW_CITIZEN_CAREGIVER,
            MDW_LIVES_AT_HOME,
            MDW_CONCESSIONARY_RATE,
        ] {
            assessment.eligible_reasons.push(reason.to_string());
        }
    } else if pr_case {
        for reason in [
            MDW_PR_RECIPIENT,
            MDW_CITIZEN_CAREGIVER,
            MDW_LIVES_AT_HOME,
            MDW_PR_AGE,
        ] {
            assessment.eligible_reasons.push(reason.to_string());
        }
    } else {
        for reason in [MDW_NO_MATCH, MDW_CITIZEN_CASE_SUMMARY, MDW_PR_CASE_SUMMARY] {
            assessment.ineligible_reasons.push(reason.to_string());
        }
    }

    assessment.notes.push(MDW_HOUSEHOLD_FOOTNOTE.to_string());

    assessment
}

pub(crate) fn moh_nonresidential_ltc_subsidy(profile: &CareProfile) -> SchemeAssessment {
    let mut assessment = SchemeAssessment::new(SchemeId::MohNonresidentialLtcSubsidy, 2);

    if profile.care_recipient_citizenship.is_resident() {
        assessment
            .eligible_reasons
            .push(MOH_SUBSIDY_RESIDENCY.to_string());
    } else {
        assessment
            .ineligible_reasons
            .push(MOH_SUBSIDY_RESIDENCY.to_string());
    }

    assessment
        .verification_required
        .push(MOH_SUBSIDY_FUNDED_PROVIDER.to_string());

    assessment
}

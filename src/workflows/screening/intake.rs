use chrono::NaiveDate;

use super::domain::{CareProfile, MeansDeclaration, ScreeningSubmission};
use super::pchi::{self, MeansAssessment};
use crate::config::ScreeningConfig;

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("care recipient date of birth {date_of_birth} is after the assessment date {assessed_on}")]
    FutureDateOfBirth {
        date_of_birth: NaiveDate,
        assessed_on: NaiveDate,
    },
    #[error("care recipient age {years} exceeds the supported maximum of {limit}")]
    ImplausibleAge { years: u32, limit: u32 },
    #[error("household size {found} exceeds the supported maximum of {limit}")]
    ImplausibleHousehold { found: u32, limit: u32 },
}

const DEFAULT_MAX_RECIPIENT_AGE: u32 = 120;
const DEFAULT_MAX_HOUSEHOLD_SIZE: u32 = 30;

/// Plausibility limits backing intake validation.
#[derive(Debug, Clone, Copy)]
pub struct IntakePolicy {
    max_recipient_age: u32,
    max_household_size: u32,
}

impl IntakePolicy {
    pub fn new(max_recipient_age: u32, max_household_size: u32) -> Self {
        let sanitize = |limit: u32, fallback: u32| if limit == 0 { fallback } else { limit };

        Self {
            max_recipient_age: sanitize(max_recipient_age, DEFAULT_MAX_RECIPIENT_AGE),
            max_household_size: sanitize(max_household_size, DEFAULT_MAX_HOUSEHOLD_SIZE),
        }
    }

    pub fn max_recipient_age(&self) -> u32 {
        self.max_recipient_age
    }

    pub fn max_household_size(&self) -> u32 {
        self.max_household_size
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECIPIENT_AGE, DEFAULT_MAX_HOUSEHOLD_SIZE)
    }
}

impl From<&ScreeningConfig> for IntakePolicy {
    fn from(config: &ScreeningConfig) -> Self {
        Self::new(config.max_recipient_age, config.max_household_size)
    }
}

/// Guard responsible for producing validated `CareProfile` instances.
///
/// The eligibility engine trusts its input; every numeric or temporal
/// plausibility check lives here at the boundary.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self::with_policy(IntakePolicy::from(config))
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound submission into a profile, resolving the care
    /// recipient's age at the supplied assessment date.
    ///
    /// The profile starts without means data; `monthly_pchi` stays `None`
    /// until a declaration arrives through [`IntakeGuard::assess_means`].
    pub fn profile_from_submission(
        &self,
        submission: &ScreeningSubmission,
        assessed_on: NaiveDate,
    ) -> Result<CareProfile, IntakeViolation> {
        let recipient = &submission.care_recipient;

        let years = assessed_on.years_since(recipient.date_of_birth).ok_or(
            IntakeViolation::FutureDateOfBirth {
                date_of_birth: recipient.date_of_birth,
                assessed_on,
            },
        )?;

        if years > self.policy.max_recipient_age {
            return Err(IntakeViolation::ImplausibleAge {
                years,
                limit: self.policy.max_recipient_age,
            });
        }

        Ok(CareProfile {
            caregiver_citizenship: submission.caregiver_citizenship,
            care_recipient_age: years,
            care_recipient_citizenship: recipient.citizenship,
            care_recipient_residence: recipient.residence,
            care_recipient_relationship: recipient.relationship,
            monthly_pchi: None,
            annual_property_value: None,
        })
    }

    /// Validate a means declaration and compute the PCHI snapshot.
    pub fn assess_means(
        &self,
        declaration: &MeansDeclaration,
    ) -> Result<MeansAssessment, IntakeViolation> {
        if declaration.household_size > self.policy.max_household_size {
            return Err(IntakeViolation::ImplausibleHousehold {
                found: declaration.household_size,
                limit: self.policy.max_household_size,
            });
        }

        Ok(pchi::assess(declaration))
    }
}

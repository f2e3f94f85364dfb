use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{MeansDeclaration, ProfileId, ScreeningStatus, ScreeningSubmission};
use super::evaluation::{EligibilityEngine, EligibilityStatus, SchemeDetermination};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    ProfileRecord, ProfileRepository, ReferralAlert, ReferralError, ReferralPublisher,
    RepositoryError,
};

/// Service composing the intake guard, repository, referral hook, and
/// eligibility engine.
pub struct ScreeningService<R, A> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    referrals: Arc<A>,
    engine: Arc<EligibilityEngine>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("cg-{id:06}"))
}

/// Evaluation output returned to callers alongside the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub profile_id: ProfileId,
    pub determinations: Vec<SchemeDetermination>,
}

impl<R, A> ScreeningService<R, A>
where
    R: ProfileRepository + 'static,
    A: ReferralPublisher + 'static,
{
    pub fn new(repository: Arc<R>, referrals: Arc<A>) -> Self {
        Self::with_guard(IntakeGuard::default(), repository, referrals)
    }

    pub fn with_guard(guard: IntakeGuard, repository: Arc<R>, referrals: Arc<A>) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            referrals,
            engine: Arc::new(EligibilityEngine::standard()),
        }
    }

    /// Register a new caregiver profile, resolving the care recipient's age
    /// at the supplied assessment date.
    pub fn register(
        &self,
        submission: &ScreeningSubmission,
        assessed_on: NaiveDate,
    ) -> Result<ProfileRecord, ScreeningServiceError> {
        let profile = self.guard.profile_from_submission(submission, assessed_on)?;

        let record = ProfileRecord {
            profile_id: next_profile_id(),
            profile,
            status: ScreeningStatus::Registered,
            determinations: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Apply a household means declaration, computing and persisting the
    /// PCHI snapshot. Any earlier determinations are discarded since they
    /// were produced against stale means data.
    pub fn submit_means(
        &self,
        profile_id: &ProfileId,
        declaration: &MeansDeclaration,
    ) -> Result<ProfileRecord, ScreeningServiceError> {
        let mut record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;

        let assessment = self.guard.assess_means(declaration)?;
        record.profile.monthly_pchi = Some(assessment.monthly_pchi);
        record.profile.annual_property_value = assessment.annual_property_value;
        record.status = ScreeningStatus::MeansSubmitted;
        record.determinations = None;

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Run the eligibility engine against a stored profile and persist the
    /// determinations. Publishes a referral when any scheme lands eligible.
    pub fn screen(
        &self,
        profile_id: &ProfileId,
    ) -> Result<ScreeningOutcome, ScreeningServiceError> {
        let mut record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;

        let determinations = self.engine.evaluate(&record.profile);

        record.status = ScreeningStatus::Screened;
        record.determinations = Some(determinations.clone());
        self.repository.update(record)?;

        let eligible: Vec<&SchemeDetermination> = determinations
            .iter()
            .filter(|determination| determination.status == EligibilityStatus::Eligible)
            .collect();

        if !eligible.is_empty() {
            let mut details = BTreeMap::new();
            details.insert("eligible_schemes".to_string(), eligible.len().to_string());
            details.insert(
                "schemes".to_string(),
                eligible
                    .iter()
                    .map(|determination| determination.scheme.label())
                    .collect::<Vec<_>>()
                    .join(","),
            );
            self.referrals.publish(ReferralAlert {
                template: "schemes_matched".to_string(),
                profile_id: profile_id.clone(),
                details,
            })?;
        }

        Ok(ScreeningOutcome {
            profile_id: profile_id.clone(),
            determinations,
        })
    }

    /// Fetch a profile record for API responses.
    pub fn get(&self, profile_id: &ProfileId) -> Result<ProfileRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(profile_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Referral(#[from] ReferralError),
}

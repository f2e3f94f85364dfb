use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CareProfile, ProfileId, ScreeningStatus};
use super::evaluation::{EligibilityStatus, SchemeDetermination};

/// Repository record containing the profile, screening status, and the most
/// recent determinations, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile_id: ProfileId,
    pub profile: CareProfile,
    pub status: ScreeningStatus,
    pub determinations: Option<Vec<SchemeDetermination>>,
}

impl ProfileRecord {
    pub fn screening_summary(&self) -> String {
        match &self.determinations {
            Some(determinations) => {
                let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
                for determination in determinations {
                    *counts.entry(determination.status.label()).or_default() += 1;
                }
                format!(
                    "{} eligible, {} ineligible, {} needing verification across {} schemes",
                    counts.get("eligible").copied().unwrap_or_default(),
                    counts.get("ineligible").copied().unwrap_or_default(),
                    counts.get("needs_verification").copied().unwrap_or_default(),
                    determinations.len(),
                )
            }
            None => "pending screening".to_string(),
        }
    }

    pub fn eligible_scheme_count(&self) -> Option<usize> {
        self.determinations.as_ref().map(|determinations| {
            determinations
                .iter()
                .filter(|determination| determination.status == EligibilityStatus::Eligible)
                .count()
        })
    }

    pub fn status_view(&self) -> ProfileStatusView {
        ProfileStatusView {
            profile_id: self.profile_id.clone(),
            status: self.status.label(),
            screening_summary: self.screening_summary(),
            eligible_schemes: self.eligible_scheme_count(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;
    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound referral hooks (e.g., care advisor follow-up
/// queues or e-mail adapters).
pub trait ReferralPublisher: Send + Sync {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError>;
}

/// Referral payload raised when screening surfaces eligible schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralAlert {
    pub template: String,
    pub profile_id: ProfileId,
    pub details: BTreeMap<String, String>,
}

/// Referral dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("referral transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a profile's exposed screening state.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStatusView {
    pub profile_id: ProfileId,
    pub status: &'static str,
    pub screening_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_schemes: Option<usize>,
}

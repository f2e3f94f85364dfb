use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::screening::domain::{
    CareProfile, CareRecipientDetails, Citizenship, MeansDeclaration, ProfileId, Relationship,
    Residence, ScreeningSubmission,
};
use crate::workflows::screening::evaluation::EligibilityEngine;
use crate::workflows::screening::intake::IntakeGuard;
use crate::workflows::screening::repository::{
    ProfileRecord, ProfileRepository, ReferralAlert, ReferralError, ReferralPublisher,
    RepositoryError,
};
use crate::workflows::screening::router::screening_router;
use crate::workflows::screening::service::ScreeningService;

pub(super) fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn submission() -> ScreeningSubmission {
    ScreeningSubmission {
        caregiver_citizenship: Citizenship::Citizen,
        care_recipient: CareRecipientDetails {
            date_of_birth: NaiveDate::from_ymd_opt(1955, 6, 20).expect("valid date"),
            citizenship: Citizenship::Citizen,
            residence: Residence::Home,
            relationship: Relationship::Parent,
        },
    }
}

/// Citizen caregiver looking after a 70 year old citizen parent at home,
/// with a declared monthly PCHI of $1,200.
pub(super) fn base_profile() -> CareProfile {
    CareProfile {
        caregiver_citizenship: Citizenship::Citizen,
        care_recipient_age: 70,
        care_recipient_citizenship: Citizenship::Citizen,
        care_recipient_residence: Residence::Home,
        care_recipient_relationship: Relationship::Parent,
        monthly_pchi: Some(1200),
        annual_property_value: None,
    }
}

pub(super) fn profile_with_means(
    monthly_pchi: Option<u32>,
    annual_property_value: Option<u32>,
) -> CareProfile {
    CareProfile {
        monthly_pchi,
        annual_property_value,
        ..base_profile()
    }
}

pub(super) fn means(
    household_size: u32,
    total_monthly_income: u32,
    annual_property_value: Option<u32>,
) -> MeansDeclaration {
    MeansDeclaration {
        household_size,
        total_monthly_income,
        annual_property_value,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::standard()
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn build_service() -> (
    ScreeningService<MemoryRepository, MemoryReferrals>,
    Arc<MemoryRepository>,
    Arc<MemoryReferrals>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let referrals = Arc::new(MemoryReferrals::default());
    let service = ScreeningService::new(repository.clone(), referrals.clone());
    (service, repository, referrals)
}

pub(super) fn screening_router_with_service(
    service: ScreeningService<MemoryRepository, MemoryReferrals>,
) -> axum::Router {
    screening_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProfileId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryReferrals {
    events: Arc<Mutex<Vec<ReferralAlert>>>,
}

impl MemoryReferrals {
    pub(super) fn events(&self) -> Vec<ReferralAlert> {
        self.events.lock().expect("referral mutex poisoned").clone()
    }
}

impl ReferralPublisher for MemoryReferrals {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError> {
        self.events
            .lock()
            .expect("referral mutex poisoned")
            .push(referral);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl ProfileRepository for ConflictRepository {
    fn insert(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

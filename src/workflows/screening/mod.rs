//! Caregiver support scheme screening workflow.
//!
//! The pipeline mirrors how the product uses it: intake validates a raw
//! submission into a [`domain::CareProfile`], the means declaration feeds the
//! [`pchi`] calculator, and the [`evaluation`] engine classifies every
//! registered scheme into eligible, ineligible, or needs-verification with
//! human-readable reasons. The service, repository, and router layers wrap
//! that core for the HTTP surface; [`batch`] drives the same pipeline from
//! CSV exports.

pub mod batch;
pub mod domain;
pub(crate) mod evaluation;
pub(crate) mod intake;
pub mod pchi;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchScreener, BatchScreeningError, ScreenedProfile};
pub use domain::{
    CareProfile, CareRecipientDetails, Citizenship, MeansDeclaration, ProfileId, Relationship,
    Residence, ScreeningStatus, ScreeningSubmission,
};
pub use evaluation::{
    EligibilityEngine, EligibilityStatus, SchemeAssessment, SchemeChecker, SchemeDetermination,
    SchemeId,
};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation};
pub use repository::{
    ProfileRecord, ProfileRepository, ProfileStatusView, ReferralAlert, ReferralError,
    ReferralPublisher, RepositoryError,
};
pub use router::screening_router;
pub use service::{ScreeningOutcome, ScreeningService, ScreeningServiceError};

pub(crate) mod schemes;
mod status;

pub use status::EligibilityStatus;

use serde::{Deserialize, Serialize};
use status::classify;

use super::domain::CareProfile;

/// Stable identifiers for the supported schemes, matched by the scheme
/// metadata catalog owned by the calling UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeId {
    ParentRelief,
    CaregiversTrainingGrant,
    HomeCaregivingGrant,
    MdwLevyConcession,
    MohNonresidentialLtcSubsidy,
}

impl SchemeId {
    pub const fn label(self) -> &'static str {
        match self {
            SchemeId::ParentRelief => "parent-relief",
            SchemeId::CaregiversTrainingGrant => "caregivers-training-grant",
            SchemeId::HomeCaregivingGrant => "home-caregiving-grant",
            SchemeId::MdwLevyConcession => "mdw-levy-concession",
            SchemeId::MohNonresidentialLtcSubsidy => "moh-nonresidential-ltc-subsidy",
        }
    }
}

/// Raw checker output before classification, allowing transparent audits of
/// which criteria passed, failed, or remain unverifiable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeAssessment {
    pub scheme: SchemeId,
    pub criteria_count: u8,
    pub eligible_reasons: Vec<String>,
    pub ineligible_reasons: Vec<String>,
    pub verification_required: Vec<String>,
    pub notes: Vec<String>,
}

impl SchemeAssessment {
    pub fn new(scheme: SchemeId, criteria_count: u8) -> Self {
        Self {
            scheme,
            criteria_count,
            eligible_reasons: Vec::new(),
            ineligible_reasons: Vec::new(),
            verification_required: Vec::new(),
            notes: Vec::new(),
        }
    }
}

/// Classified result for one scheme, in checker registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeDetermination {
    pub scheme: SchemeId,
    pub status: EligibilityStatus,
    pub criteria_count: u8,
    pub eligible_reasons: Vec<String>,
    pub ineligible_reasons: Vec<String>,
    pub verification_required: Vec<String>,
    pub notes: Vec<String>,
}

impl SchemeDetermination {
    fn from_assessment(assessment: SchemeAssessment) -> Self {
        let status = classify(&assessment);
        Self {
            scheme: assessment.scheme,
            status,
            criteria_count: assessment.criteria_count,
            eligible_reasons: assessment.eligible_reasons,
            ineligible_reasons: assessment.ineligible_reasons,
            verification_required: assessment.verification_required,
            notes: assessment.notes,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({} of {} criteria met, {} pending verification)",
            self.scheme.label(),
            self.status.label(),
            self.eligible_reasons.len(),
            self.criteria_count,
            self.verification_required.len(),
        )
    }
}

/// Pure function from a profile to a single scheme assessment.
pub type SchemeChecker = fn(&CareProfile) -> SchemeAssessment;

/// Stateless evaluator running every registered checker in a fixed order.
pub struct EligibilityEngine {
    checkers: Vec<SchemeChecker>,
}

impl EligibilityEngine {
    /// The production scheme registry. Output order follows this
    /// registration order.
    pub fn standard() -> Self {
        Self::with_checkers(vec![
            schemes::parent_relief,
            schemes::caregivers_training_grant,
            schemes::home_caregiving_grant,
            schemes::mdw_levy_concession,
            schemes::moh_nonresidential_ltc_subsidy,
        ])
    }

    /// Registry injection seam so schemes can be added without touching the
    /// aggregation loop.
    pub fn with_checkers(checkers: Vec<SchemeChecker>) -> Self {
        Self { checkers }
    }

    pub fn scheme_count(&self) -> usize {
        self.checkers.len()
    }

    /// Evaluate every scheme against the profile and classify each result.
    pub fn evaluate(&self, profile: &CareProfile) -> Vec<SchemeDetermination> {
        self.checkers
            .iter()
            .map(|checker| SchemeDetermination::from_assessment(checker(profile)))
            .collect()
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::standard()
    }
}

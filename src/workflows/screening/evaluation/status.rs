use serde::{Deserialize, Serialize};

use super::SchemeAssessment;

/// Tri-state outcome derived from a scheme assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
    NeedsVerification,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::Ineligible => "ineligible",
            EligibilityStatus::NeedsVerification => "needs_verification",
        }
    }
}

/// Classification policy applied after a checker runs.
///
/// Any unverifiable criterion outranks a clean pass: a scheme is never
/// reported flatly eligible while a criterion is still pending external
/// confirmation, because that criterion could invalidate the result later.
/// For schemes whose checkers always emit verification items, this means the
/// status can never reach `Eligible`; that conservative behavior is kept
/// deliberately.
pub(crate) fn classify(assessment: &SchemeAssessment) -> EligibilityStatus {
    if !assessment.verification_required.is_empty() {
        return EligibilityStatus::NeedsVerification;
    }

    if assessment.eligible_reasons.is_empty() {
        return EligibilityStatus::Ineligible;
    }

    EligibilityStatus::Eligible
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered caregiver profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Citizenship status as maintained by the profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
    Foreigner,
}

impl Citizenship {
    /// Citizens and permanent residents clear the residency tests most
    /// schemes share.
    pub const fn is_resident(self) -> bool {
        matches!(self, Citizenship::Citizen | Citizenship::PermanentResident)
    }
}

/// Where the care recipient currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residence {
    Home,
    NursingHomeLtcf,
    Other,
}

/// Relationship between the caregiver and the care recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Parent,
    Spouse,
    OtherFamily,
    NonFamily,
}

/// Care recipient attributes collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRecipientDetails {
    pub date_of_birth: NaiveDate,
    pub citizenship: Citizenship,
    pub residence: Residence,
    pub relationship: Relationship,
}

/// Raw intake payload before the guard validates it into a `CareProfile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSubmission {
    pub caregiver_citizenship: Citizenship,
    pub care_recipient: CareRecipientDetails,
}

/// Household means declaration feeding the PCHI calculator.
///
/// `household_size` counts the people living with the care recipient, not the
/// recipient themself. `annual_property_value` is only consulted when the
/// declared income is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeansDeclaration {
    pub household_size: u32,
    pub total_monthly_income: u32,
    pub annual_property_value: Option<u32>,
}

/// The validated profile every scheme checker evaluates.
///
/// `monthly_pchi` of `Some(0)` records a household that declared no income;
/// `None` records that no means declaration has been submitted yet. The two
/// states drive different branches and must never be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareProfile {
    pub caregiver_citizenship: Citizenship,
    pub care_recipient_age: u32,
    pub care_recipient_citizenship: Citizenship,
    pub care_recipient_residence: Residence,
    pub care_recipient_relationship: Relationship,
    pub monthly_pchi: Option<u32>,
    pub annual_property_value: Option<u32>,
}

/// High level status tracked throughout the screening workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningStatus {
    Registered,
    MeansSubmitted,
    Screened,
}

impl ScreeningStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ScreeningStatus::Registered => "registered",
            ScreeningStatus::MeansSubmitted => "means_submitted",
            ScreeningStatus::Screened => "screened",
        }
    }
}

//! Batch screening over CSV exports of caregiver profiles.
//!
//! Intake partners hand over profile sheets as CSV; each row is validated
//! through the intake guard and screened against the full scheme registry at
//! a single assessment date.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{
    CareProfile, CareRecipientDetails, Citizenship, MeansDeclaration, Relationship, Residence,
    ScreeningSubmission,
};
use super::evaluation::{EligibilityEngine, SchemeDetermination};
use super::intake::{IntakeGuard, IntakeViolation};

#[derive(Debug)]
pub enum BatchScreeningError {
    Io(std::io::Error),
    Csv(csv::Error),
    Intake(IntakeViolation),
    InvalidField {
        reference: String,
        column: &'static str,
        value: String,
    },
}

impl std::fmt::Display for BatchScreeningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchScreeningError::Io(err) => write!(f, "failed to read profile export: {}", err),
            BatchScreeningError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
            BatchScreeningError::Intake(err) => write!(f, "profile failed intake: {}", err),
            BatchScreeningError::InvalidField {
                reference,
                column,
                value,
            } => write!(
                f,
                "profile '{}' has an invalid value '{}' in column '{}'",
                reference, value, column
            ),
        }
    }
}

impl std::error::Error for BatchScreeningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchScreeningError::Io(err) => Some(err),
            BatchScreeningError::Csv(err) => Some(err),
            BatchScreeningError::Intake(err) => Some(err),
            BatchScreeningError::InvalidField { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchScreeningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchScreeningError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<IntakeViolation> for BatchScreeningError {
    fn from(err: IntakeViolation) -> Self {
        Self::Intake(err)
    }
}

/// One screened row of the export.
#[derive(Debug, Clone)]
pub struct ScreenedProfile {
    pub reference: String,
    pub profile: CareProfile,
    pub determinations: Vec<SchemeDetermination>,
}

/// CSV-driven variant of the screening pipeline, bypassing the repository.
pub struct BatchScreener {
    guard: IntakeGuard,
    engine: EligibilityEngine,
}

impl Default for BatchScreener {
    fn default() -> Self {
        Self::with_guard(IntakeGuard::default())
    }
}

impl BatchScreener {
    pub fn with_guard(guard: IntakeGuard) -> Self {
        Self {
            guard,
            engine: EligibilityEngine::standard(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
        assessed_on: NaiveDate,
    ) -> Result<Vec<ScreenedProfile>, BatchScreeningError> {
        let file = std::fs::File::open(path)?;
        self.from_reader(file, assessed_on)
    }

    pub fn from_reader<Rd: Read>(
        &self,
        reader: Rd,
        assessed_on: NaiveDate,
    ) -> Result<Vec<ScreenedProfile>, BatchScreeningError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut screened = Vec::new();

        for record in csv_reader.deserialize::<ProfileRow>() {
            let row = record?;
            let submission = row.submission()?;
            let mut profile = self.guard.profile_from_submission(&submission, assessed_on)?;

            if let Some(declaration) = row.means_declaration()? {
                let assessment = self.guard.assess_means(&declaration)?;
                profile.monthly_pchi = Some(assessment.monthly_pchi);
                profile.annual_property_value = assessment.annual_property_value;
            }

            let determinations = self.engine.evaluate(&profile);
            screened.push(ScreenedProfile {
                reference: row.reference,
                profile,
                determinations,
            });
        }

        Ok(screened)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Caregiver Citizenship")]
    caregiver_citizenship: String,
    #[serde(rename = "Date of Birth")]
    date_of_birth: String,
    #[serde(rename = "Recipient Citizenship")]
    recipient_citizenship: String,
    #[serde(rename = "Residence")]
    residence: String,
    #[serde(rename = "Relationship")]
    relationship: String,
    #[serde(
        rename = "Household Size",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    household_size: Option<String>,
    #[serde(
        rename = "Monthly Income",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    monthly_income: Option<String>,
    #[serde(
        rename = "Annual Property Value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    annual_property_value: Option<String>,
}

impl ProfileRow {
    fn submission(&self) -> Result<ScreeningSubmission, BatchScreeningError> {
        Ok(ScreeningSubmission {
            caregiver_citizenship: self
                .parse_citizenship("Caregiver Citizenship", &self.caregiver_citizenship)?,
            care_recipient: CareRecipientDetails {
                date_of_birth: self.parse_date()?,
                citizenship: self
                    .parse_citizenship("Recipient Citizenship", &self.recipient_citizenship)?,
                residence: self.parse_residence()?,
                relationship: self.parse_relationship()?,
            },
        })
    }

    /// Means columns travel together: a row either declares a household or
    /// leaves every means column blank.
    fn means_declaration(&self) -> Result<Option<MeansDeclaration>, BatchScreeningError> {
        match (&self.household_size, &self.monthly_income) {
            (Some(size), Some(income)) => Ok(Some(MeansDeclaration {
                household_size: self.parse_number("Household Size", size)?,
                total_monthly_income: self.parse_number("Monthly Income", income)?,
                annual_property_value: self
                    .annual_property_value
                    .as_deref()
                    .map(|value| self.parse_number("Annual Property Value", value))
                    .transpose()?,
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(self.invalid("Monthly Income", "")),
            (None, Some(_)) => Err(self.invalid("Household Size", "")),
        }
    }

    fn parse_citizenship(
        &self,
        column: &'static str,
        value: &str,
    ) -> Result<Citizenship, BatchScreeningError> {
        match value.to_ascii_lowercase().as_str() {
            "citizen" | "sc" => Ok(Citizenship::Citizen),
            "pr" | "permanent_resident" | "permanent resident" => {
                Ok(Citizenship::PermanentResident)
            }
            "foreigner" | "other" => Ok(Citizenship::Foreigner),
            _ => Err(self.invalid(column, value)),
        }
    }

    fn parse_residence(&self) -> Result<Residence, BatchScreeningError> {
        match self.residence.to_ascii_lowercase().as_str() {
            "home" => Ok(Residence::Home),
            "nursing_home" | "nursing home" | "ltcf" => Ok(Residence::NursingHomeLtcf),
            "other" => Ok(Residence::Other),
            _ => Err(self.invalid("Residence", &self.residence)),
        }
    }

    fn parse_relationship(&self) -> Result<Relationship, BatchScreeningError> {
        match self.relationship.to_ascii_lowercase().as_str() {
            "parent" => Ok(Relationship::Parent),
            "spouse" => Ok(Relationship::Spouse),
            "other_family" | "other family" | "family" => Ok(Relationship::OtherFamily),
            "non_family" | "non family" => Ok(Relationship::NonFamily),
            _ => Err(self.invalid("Relationship", &self.relationship)),
        }
    }

    fn parse_date(&self) -> Result<NaiveDate, BatchScreeningError> {
        NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| self.invalid("Date of Birth", &self.date_of_birth))
    }

    fn parse_number(&self, column: &'static str, value: &str) -> Result<u32, BatchScreeningError> {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| self.invalid(column, value))
    }

    fn invalid(&self, column: &'static str, value: &str) -> BatchScreeningError {
        BatchScreeningError::InvalidField {
            reference: self.reference.clone(),
            column,
            value: value.to_string(),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

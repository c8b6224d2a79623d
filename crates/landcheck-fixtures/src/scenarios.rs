//! Canned records with known outcomes, one per demo scenario.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use landcheck_contracts::{
    error::LandcheckError,
    record::{
        Address, BasicInformation, DocumentDates, DocumentMetadata, DocumentRecord,
        EncumbranceDetails, EncumbranceStatus, LandDetails, OwnerDetails,
    },
    verdict::VerificationStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Every field group passes.
    Clean,
    /// Six independent errors.
    Invalid,
    /// Dispute, malformed khata and missing attachments: three warnings.
    Disputed,
    /// Lien, unknown unit and malformed ZIP: three warnings.
    Lien,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Clean,
        Scenario::Invalid,
        Scenario::Disputed,
        Scenario::Lien,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Clean => "clean",
            Scenario::Invalid => "invalid",
            Scenario::Disputed => "disputed",
            Scenario::Lien => "lien",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Clean => "Well-formed extract with clear title",
            Scenario::Invalid => "Missing identifiers, negative area, backdated update, unsigned",
            Scenario::Disputed => "Title under dispute with a malformed khata number",
            Scenario::Lien => "Active lien on a record with a non-standard unit",
        }
    }

    /// Status the standard rule set assigns to this scenario's record.
    pub fn expected_status(self) -> VerificationStatus {
        match self {
            Scenario::Clean => VerificationStatus::Authentic,
            Scenario::Invalid => VerificationStatus::Invalid,
            Scenario::Disputed | Scenario::Lien => VerificationStatus::Suspicious,
        }
    }

    /// Build the record with dates placed relative to `now`.
    pub fn record(self, now: DateTime<Utc>) -> DocumentRecord {
        let mut record = clean_record(now);
        match self {
            Scenario::Clean => {}
            Scenario::Invalid => {
                record.basic_info.survey_number = String::new();
                record.basic_info.khata_number = String::new();
                record.owner_details.name = String::new();
                record.land_details.area = -5.0;
                record.dates.last_updated = record.dates.creation_date - Duration::days(180);
                record.metadata.has_valid_signatures = false;
            }
            Scenario::Disputed => {
                record.encumbrance.status = EncumbranceStatus::UnderDispute;
                record.basic_info.khata_number = "123".to_string();
                record.metadata.has_required_attachments = false;
            }
            Scenario::Lien => {
                record.encumbrance = EncumbranceDetails {
                    status: EncumbranceStatus::LienExists,
                    details: Some(crate::mock_data::SAMPLE_LIEN_DETAILS.to_string()),
                };
                record.land_details.unit = "bigha".to_string();
                record.owner_details.address.zip_code = Some("123".to_string());
            }
        }
        record
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = LandcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LandcheckError::ConfigError {
                reason: format!(
                    "unknown scenario '{}' (expected one of: {})",
                    s,
                    Scenario::ALL.map(Scenario::name).join(", ")
                ),
            })
    }
}

fn clean_record(now: DateTime<Utc>) -> DocumentRecord {
    DocumentRecord {
        basic_info: BasicInformation {
            survey_number: "123".to_string(),
            khata_number: "K-45/A".to_string(),
        },
        owner_details: OwnerDetails {
            name: "Amit Kumar".to_string(),
            address: Address {
                street: Some("45 Main Road".to_string()),
                city: Some("Pune".to_string()),
                district: Some("Pune".to_string()),
                zip_code: Some("411001".to_string()),
            },
        },
        land_details: LandDetails {
            land_type: "agricultural".to_string(),
            area: 5.5,
            unit: "acres".to_string(),
        },
        encumbrance: EncumbranceDetails {
            status: EncumbranceStatus::Clear,
            details: None,
        },
        dates: DocumentDates {
            creation_date: now - Duration::days(365),
            last_updated: now - Duration::days(30),
        },
        metadata: DocumentMetadata {
            has_required_attachments: true,
            has_valid_signatures: true,
        },
    }
}

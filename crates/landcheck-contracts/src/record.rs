//! The structured land record the engine validates.
//!
//! A `DocumentRecord` is assembled by an extraction collaborator (OCR in a
//! real deployment, a random fixture in the demo) and handed to the engine
//! whole. Field names on the wire follow the extracted-record format used
//! by the web front end (`surveyNumber`, `khataNumber`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One extracted 7/12 land record, split into six independently checked
/// field groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub basic_info: BasicInformation,
    pub owner_details: OwnerDetails,
    pub land_details: LandDetails,
    pub encumbrance: EncumbranceDetails,
    pub dates: DocumentDates,
    pub metadata: DocumentMetadata,
}

/// Registry identifiers printed on the extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInformation {
    /// Expected to be purely numeric, e.g. `"123"`.
    pub survey_number: String,
    /// Expected shape `K-<digits>/<uppercase letter>`, e.g. `"K-45/A"`.
    pub khata_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerDetails {
    pub name: String,
    pub address: Address,
}

/// Postal address of the owner. Every part may be absent from the extract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Treat `None` and `Some("")` alike: both mean the extractor found nothing.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandDetails {
    /// Land classification, e.g. `"agricultural"`.
    #[serde(rename = "type")]
    pub land_type: String,
    pub area: f64,
    /// Unit of `area`, e.g. `"acres"` or `"guntha"`.
    pub unit: String,
}

/// Encumbrance state recorded against the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncumbranceStatus {
    Clear,
    UnderDispute,
    LienExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncumbranceDetails {
    pub status: EncumbranceStatus,
    /// Free-text description of the encumbrance. Only meaningful when
    /// `status` is not `Clear`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDates {
    pub creation_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Presence flags for the non-textual parts of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub has_required_attachments: bool,
    pub has_valid_signatures: bool,
}

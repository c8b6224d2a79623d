//! One validator per field group.
//!
//! Each validator is a pure function from a group value to its findings,
//! in rule order. Where a group has several checks on one field, the first
//! failing check wins and later checks on that field are skipped.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use landcheck_contracts::{
    finding::{Finding, FindingCode},
    record::{
        is_blank, BasicInformation, DocumentDates, DocumentMetadata, EncumbranceDetails,
        EncumbranceStatus, LandDetails, OwnerDetails,
    },
};

/// Land classifications recognised by the revenue department.
pub const VALID_LAND_TYPES: [&str; 6] = [
    "agricultural",
    "residential",
    "commercial",
    "industrial",
    "forest",
    "wasteland",
];

/// Units an extract may state its area in.
pub const VALID_AREA_UNITS: [&str; 4] = ["acres", "hectares", "square_meters", "guntha"];

static SURVEY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("survey number pattern is valid"));
static KHATA_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^K-[0-9]+/[A-Z]$").expect("khata number pattern is valid"));
static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("zip code pattern is valid"));
static NAME_SPECIAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("name character pattern is valid"));

// ── Basic information ─────────────────────────────────────────────────────────

pub fn validate_basic_info(info: &BasicInformation) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(2);

    findings.push(if info.survey_number.is_empty() {
        Finding::new(FindingCode::SurveyMissing, "Survey number is missing from the document.")
    } else if !SURVEY_NUMBER.is_match(&info.survey_number) {
        Finding::new(
            FindingCode::SurveyNonNumeric,
            "Survey number contains non-numeric characters.",
        )
    } else {
        Finding::new(
            FindingCode::SurveyValid,
            "Survey number is valid and exists in the registry.",
        )
    });

    findings.push(if info.khata_number.is_empty() {
        Finding::new(FindingCode::KhataMissing, "Khata number is missing from the document.")
    } else if !KHATA_NUMBER.is_match(&info.khata_number) {
        Finding::new(
            FindingCode::KhataFormatMismatch,
            "Khata number format does not match local regulations.",
        )
    } else {
        Finding::new(
            FindingCode::KhataValid,
            "Khata number format is valid and verified against records.",
        )
    });

    debug!(group = "basic_info", count = findings.len(), "group validated");
    findings
}

// ── Owner details ─────────────────────────────────────────────────────────────

pub fn validate_owner_details(details: &OwnerDetails) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(3);
    let name = details.name.as_str();

    findings.push(if name.is_empty() {
        Finding::new(FindingCode::OwnerNameMissing, "Owner name is missing from the document.")
    } else if name.chars().any(|c| c.is_ascii_digit()) {
        Finding::new(FindingCode::OwnerNameNumeric, "Owner name contains numeric characters.")
    } else if NAME_SPECIAL_CHAR.is_match(name) {
        Finding::new(
            FindingCode::OwnerNameSpecialChars,
            "Owner name contains special characters.",
        )
    } else {
        Finding::new(FindingCode::OwnerNameValid, "Owner name is properly formatted.")
    });

    let address = &details.address;
    if is_blank(&address.street) || is_blank(&address.city) || is_blank(&address.district) {
        findings.push(Finding::new(
            FindingCode::AddressIncomplete,
            "Owner address is incomplete (missing street, city, or district).",
        ));
    }

    findings.push(match address.zip_code.as_deref() {
        None | Some("") => {
            Finding::new(FindingCode::ZipMissing, "ZIP code is missing from owner address.")
        }
        Some(zip) if !ZIP_CODE.is_match(zip) => Finding::new(
            FindingCode::ZipInvalid,
            "ZIP code format is invalid (should be 6 digits).",
        ),
        Some(_) => Finding::new(
            FindingCode::AddressValid,
            "Owner address details are complete and valid.",
        ),
    });

    debug!(group = "owner", count = findings.len(), "group validated");
    findings
}

// ── Land details ──────────────────────────────────────────────────────────────

pub fn validate_land_details(details: &LandDetails) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(3);

    findings.push(if VALID_LAND_TYPES.contains(&details.land_type.as_str()) {
        Finding::new(
            FindingCode::LandTypeValid,
            format!("Land is properly classified as \"{}\".", details.land_type),
        )
    } else {
        Finding::new(
            FindingCode::LandTypeUnrecognized,
            format!(
                "Land type \"{}\" is not recognized in the official records.",
                details.land_type
            ),
        )
        .with_subject(&details.land_type)
    });

    // NaN compares false here and is reported as a verified area.
    findings.push(if details.area <= 0.0 {
        Finding::new(FindingCode::AreaNonPositive, "Land area must be a positive value.")
    } else {
        Finding::new(
            FindingCode::AreaValid,
            format!("Land area of {} {} verified.", details.area, details.unit),
        )
    });

    // A recognised unit produces no finding of its own.
    if !VALID_AREA_UNITS.contains(&details.unit.as_str()) {
        findings.push(Finding::new(
            FindingCode::UnitUnrecognized,
            format!(
                "Unit of measurement \"{}\" is not standard for land records.",
                details.unit
            ),
        )
        .with_subject(&details.unit));
    }

    debug!(group = "land", count = findings.len(), "group validated");
    findings
}

// ── Encumbrance ───────────────────────────────────────────────────────────────

pub fn validate_encumbrance(details: &EncumbranceDetails) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(2);

    match details.status {
        EncumbranceStatus::Clear => findings.push(Finding::new(
            FindingCode::EncumbranceClear,
            "Property is free from encumbrances and liens.",
        )),
        EncumbranceStatus::UnderDispute => findings.push(Finding::new(
            FindingCode::DisputePending,
            "Property is currently under legal dispute. Proceed with caution.",
        )),
        EncumbranceStatus::LienExists => {
            findings.push(Finding::new(
                FindingCode::LienPresent,
                "Property has existing liens or loans registered against it.",
            ));
            if let Some(text) = details.details.as_deref().filter(|t| !t.is_empty()) {
                findings.push(Finding::new(FindingCode::LienDetails, text));
            }
        }
    }

    debug!(group = "encumbrance", count = findings.len(), "group validated");
    findings
}

// ── Dates ─────────────────────────────────────────────────────────────────────

pub fn validate_dates(dates: &DocumentDates, now: DateTime<Utc>) -> Vec<Finding> {
    let mut findings = Vec::with_capacity(2);

    findings.push(if dates.creation_date > now {
        Finding::new(FindingCode::CreationInFuture, "Document creation date is in the future.")
    } else {
        Finding::new(FindingCode::CreationValid, "Document creation date is valid.")
    });

    findings.push(if dates.last_updated < dates.creation_date {
        Finding::new(
            FindingCode::UpdateBeforeCreation,
            "Last updated date is before the document creation date.",
        )
    } else if dates.last_updated > now {
        Finding::new(FindingCode::UpdateInFuture, "Last updated date is in the future.")
    } else {
        Finding::new(FindingCode::UpdateHistoryValid, "Document update history is valid.")
    });

    debug!(group = "dates", count = findings.len(), "group validated");
    findings
}

// ── Metadata ──────────────────────────────────────────────────────────────────

pub fn validate_metadata(metadata: &DocumentMetadata) -> Vec<Finding> {
    let attachments = if metadata.has_required_attachments {
        Finding::new(FindingCode::AttachmentsPresent, "All required attachments are present.")
    } else {
        Finding::new(
            FindingCode::AttachmentsMissing,
            "Required attachments or photographs are missing.",
        )
    };

    let signatures = if metadata.has_valid_signatures {
        Finding::new(
            FindingCode::SignaturesValid,
            "All required signatures and stamps are present and valid.",
        )
    } else {
        Finding::new(
            FindingCode::SignaturesMissing,
            "Document is missing required signatures or stamps.",
        )
    };

    debug!(group = "metadata", count = 2, "group validated");
    vec![attachments, signatures]
}

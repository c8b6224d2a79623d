//! Fabricated record data standing in for OCR extraction.
//!
//! Nothing here reads a document. `random_record` draws field values with
//! roughly the failure rates a noisy extractor would show, so repeated demo
//! runs land on all three statuses.

use chrono::{DateTime, Months, Utc};
use rand::{seq::SliceRandom, Rng};

use landcheck_contracts::{
    history::DocumentHistoryEntry,
    record::{
        Address, BasicInformation, DocumentDates, DocumentMetadata, DocumentRecord,
        EncumbranceDetails, EncumbranceStatus, LandDetails, OwnerDetails,
    },
    verdict::VerificationStatus,
};

const OWNER_NAMES: [&str; 5] = [
    "Amit Kumar",
    "Priya Sharma",
    "Rajesh Patel",
    "Sunita Devi",
    "Vikram Singh",
];
const CITIES: [&str; 5] = ["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"];
const DISTRICTS: [&str; 5] = ["Thane", "Pune", "Nagpur", "Nashik", "Aurangabad"];
const LAND_TYPES: [&str; 6] = [
    "agricultural",
    "residential",
    "commercial",
    "industrial",
    "forest",
    "wasteland",
];
const AREA_UNITS: [&str; 4] = ["acres", "hectares", "square_meters", "guntha"];

/// Encumbrance text attached to every non-clear fabricated record.
pub const SAMPLE_LIEN_DETAILS: &str =
    "There is an active loan from State Bank of India registered against this property.";

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// Fabricate a complete record. Each group is valid most of the time.
pub fn random_record<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DocumentRecord {
    DocumentRecord {
        basic_info: random_basic_info(rng),
        owner_details: random_owner_details(rng),
        land_details: random_land_details(rng),
        encumbrance: random_encumbrance(rng),
        dates: random_dates(rng, now),
        metadata: random_metadata(rng),
    }
}

fn random_basic_info<R: Rng + ?Sized>(rng: &mut R) -> BasicInformation {
    let survey_number = if rng.gen_bool(0.8) {
        rng.gen_range(0..1000u32).to_string()
    } else if rng.gen_bool(0.5) {
        "ABC123".to_string()
    } else {
        String::new()
    };

    let khata_number = if rng.gen_bool(0.8) {
        format!("K-{}/A", rng.gen_range(0..500u32))
    } else if rng.gen_bool(0.5) {
        "123".to_string()
    } else {
        String::new()
    };

    BasicInformation {
        survey_number,
        khata_number,
    }
}

fn random_owner_details<R: Rng + ?Sized>(rng: &mut R) -> OwnerDetails {
    let has_valid_name = rng.gen_bool(0.8);
    let has_complete_address = rng.gen_bool(0.7);

    let name = if has_valid_name {
        pick(rng, &OWNER_NAMES)
    } else if rng.gen_bool(0.5) {
        "John123".to_string()
    } else {
        String::new()
    };

    let address = if has_complete_address {
        let zip: String = std::iter::once('4')
            .chain((0..5).map(|_| char::from(b'0' + rng.gen_range(0..10u8))))
            .collect();
        Address {
            street: Some(format!("{} Main Road", rng.gen_range(0..100u32))),
            city: Some(pick(rng, &CITIES)),
            district: Some(pick(rng, &DISTRICTS)),
            zip_code: Some(zip),
        }
    } else {
        Address {
            zip_code: rng.gen_bool(0.5).then(|| "123".to_string()),
            ..Address::default()
        }
    };

    OwnerDetails { name, address }
}

fn random_land_details<R: Rng + ?Sized>(rng: &mut R) -> LandDetails {
    let land_type = if rng.gen_bool(0.8) {
        pick(rng, &LAND_TYPES)
    } else {
        "unknown".to_string()
    };

    let area = if rng.gen_bool(0.8) {
        (rng.gen_range(0.0..20.0_f64) * 100.0).round() / 100.0
    } else if rng.gen_bool(0.5) {
        -5.0
    } else {
        0.0
    };

    let unit = if rng.gen_bool(0.8) {
        pick(rng, &AREA_UNITS)
    } else {
        "unknown".to_string()
    };

    LandDetails {
        land_type,
        area,
        unit,
    }
}

fn random_encumbrance<R: Rng + ?Sized>(rng: &mut R) -> EncumbranceDetails {
    let status = *[
        EncumbranceStatus::Clear,
        EncumbranceStatus::UnderDispute,
        EncumbranceStatus::LienExists,
    ]
    .choose(rng)
    .unwrap_or(&EncumbranceStatus::Clear);

    EncumbranceDetails {
        status,
        details: (status != EncumbranceStatus::Clear).then(|| SAMPLE_LIEN_DETAILS.to_string()),
    }
}

/// Creation up to two years back; the update is 0-5 months later, or six
/// months *earlier* for one record in five.
fn random_dates<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DocumentDates {
    let creation_date = now
        .checked_sub_months(Months::new(rng.gen_range(0..24)))
        .unwrap_or(now);

    let last_updated = if rng.gen_bool(0.8) {
        creation_date.checked_add_months(Months::new(rng.gen_range(0..6)))
    } else {
        creation_date.checked_sub_months(Months::new(6))
    }
    .unwrap_or(creation_date);

    DocumentDates {
        creation_date,
        last_updated,
    }
}

fn random_metadata<R: Rng + ?Sized>(rng: &mut R) -> DocumentMetadata {
    DocumentMetadata {
        has_required_attachments: rng.gen_bool(0.7),
        has_valid_signatures: rng.gen_bool(0.7),
    }
}

/// Three past uploads to populate an empty history view, oldest first.
pub fn mock_history<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentHistoryEntry> {
    const STATUSES: [VerificationStatus; 3] = [
        VerificationStatus::Authentic,
        VerificationStatus::Suspicious,
        VerificationStatus::Invalid,
    ];
    let seeds = [
        ("3", "Property_Document_Plot45.jpg", "March 12, 2023"),
        ("2", "7-12_Extract_Village_Pune.pdf", "April 28, 2023"),
        ("1", "Land_Extract_Survey123.pdf", "May 15, 2023"),
    ];

    seeds
        .iter()
        .map(|(id, name, date)| DocumentHistoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            date_uploaded: date.to_string(),
            status: STATUSES[rng.gen_range(0..STATUSES.len())],
            fingerprint: None,
        })
        .collect()
}

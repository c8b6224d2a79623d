//! Findings: the observations validators emit about a record.
//!
//! Every finding carries a closed `FindingCode` naming the rule that
//! produced it. Control flow downstream (recommendations) keys off the code,
//! never off the human-readable message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Warning,
    Error,
    Info,
    Success,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six sections of a record, in the order their findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    BasicInfo,
    Owner,
    Land,
    Encumbrance,
    Dates,
    Metadata,
}

impl FieldGroup {
    /// All groups in reporting order.
    pub const ALL: [FieldGroup; 6] = [
        FieldGroup::BasicInfo,
        FieldGroup::Owner,
        FieldGroup::Land,
        FieldGroup::Encumbrance,
        FieldGroup::Dates,
        FieldGroup::Metadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::Owner => "owner",
            Self::Land => "land",
            Self::Encumbrance => "encumbrance",
            Self::Dates => "dates",
            Self::Metadata => "metadata",
        }
    }
}

/// One tag per validation rule outcome.
///
/// The severity of a finding is a property of its code, so a code can never
/// be paired with the wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    // basic information
    SurveyMissing,
    SurveyNonNumeric,
    SurveyValid,
    KhataMissing,
    KhataFormatMismatch,
    KhataValid,

    // owner
    OwnerNameMissing,
    OwnerNameNumeric,
    OwnerNameSpecialChars,
    OwnerNameValid,
    AddressIncomplete,
    ZipMissing,
    ZipInvalid,
    AddressValid,

    // land
    LandTypeUnrecognized,
    LandTypeValid,
    AreaNonPositive,
    AreaValid,
    UnitUnrecognized,

    // encumbrance
    EncumbranceClear,
    DisputePending,
    LienPresent,
    LienDetails,

    // dates
    CreationInFuture,
    CreationValid,
    UpdateBeforeCreation,
    UpdateInFuture,
    UpdateHistoryValid,

    // metadata
    AttachmentsMissing,
    AttachmentsPresent,
    SignaturesMissing,
    SignaturesValid,
}

impl FindingCode {
    pub fn kind(&self) -> FindingKind {
        use FindingCode::*;
        match self {
            SurveyMissing | SurveyNonNumeric | KhataMissing | OwnerNameMissing
            | AreaNonPositive | CreationInFuture | UpdateBeforeCreation | UpdateInFuture
            | SignaturesMissing => FindingKind::Error,

            KhataFormatMismatch | OwnerNameNumeric | OwnerNameSpecialChars
            | AddressIncomplete | ZipMissing | ZipInvalid | LandTypeUnrecognized
            | UnitUnrecognized | DisputePending | LienPresent | AttachmentsMissing => {
                FindingKind::Warning
            }

            LienDetails => FindingKind::Info,

            SurveyValid | KhataValid | OwnerNameValid | AddressValid | LandTypeValid
            | AreaValid | EncumbranceClear | CreationValid | UpdateHistoryValid
            | AttachmentsPresent | SignaturesValid => FindingKind::Success,
        }
    }

    pub fn group(&self) -> FieldGroup {
        use FindingCode::*;
        match self {
            SurveyMissing | SurveyNonNumeric | SurveyValid | KhataMissing
            | KhataFormatMismatch | KhataValid => FieldGroup::BasicInfo,

            OwnerNameMissing | OwnerNameNumeric | OwnerNameSpecialChars | OwnerNameValid
            | AddressIncomplete | ZipMissing | ZipInvalid | AddressValid => FieldGroup::Owner,

            LandTypeUnrecognized | LandTypeValid | AreaNonPositive | AreaValid
            | UnitUnrecognized => FieldGroup::Land,

            EncumbranceClear | DisputePending | LienPresent | LienDetails => {
                FieldGroup::Encumbrance
            }

            CreationInFuture | CreationValid | UpdateBeforeCreation | UpdateInFuture
            | UpdateHistoryValid => FieldGroup::Dates,

            AttachmentsMissing | AttachmentsPresent | SignaturesMissing | SignaturesValid => {
                FieldGroup::Metadata
            }
        }
    }
}

/// A single validation observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub code: FindingCode,
    pub message: String,
    /// Record value quoted in `message`, for rules that name what they rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Finding {
    /// Build a finding whose kind is taken from `code`.
    pub fn new(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            kind: code.kind(),
            code,
            message: message.into(),
            subject: None,
        }
    }

    /// Attach the record value this finding quotes.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Whether the quoted record value contains `needle`. Case-sensitive.
    pub fn subject_contains(&self, needle: &str) -> bool {
        self.subject.as_deref().is_some_and(|s| s.contains(needle))
    }

    pub fn is_error(&self) -> bool {
        self.kind == FindingKind::Error
    }

    pub fn is_warning(&self) -> bool {
        self.kind == FindingKind::Warning
    }
}

/// Error and warning counts over a set of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingTally {
    pub errors: usize,
    pub warnings: usize,
}

impl FindingTally {
    pub fn of(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut tally, f| {
            match f.kind {
                FindingKind::Error => tally.errors += 1,
                FindingKind::Warning => tally.warnings += 1,
                FindingKind::Info | FindingKind::Success => {}
            }
            tally
        })
    }
}

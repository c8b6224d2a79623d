//! Advisory text for each verification status.
//!
//! Conditional advice is triggered by findings of the matching kind
//! (warnings for a suspicious record, errors for an invalid one) that carry
//! a trigger code or quote a record value containing the trigger keyword.

use landcheck_contracts::{
    finding::{Finding, FindingCode},
    verdict::VerificationStatus,
};

pub const AUTHENTIC_ADVICE: [&str; 3] = [
    "Store this document safely for future reference.",
    "Keep digital backup of this verified document.",
    "No further verification required at this time.",
];

pub const SUSPICIOUS_ADVICE: [&str; 2] = [
    "Consult with a legal professional regarding the inconsistencies.",
    "Request a certified copy from the land records office.",
];

pub const INVALID_ADVICE: [&str; 3] = [
    "Report this document to local authorities immediately.",
    "Do not proceed with any land transactions based on this document.",
    "Request an official verification from the land records department.",
];

pub const DISPUTE_ADVICE: &str =
    "Verify the legal status of any ongoing disputes mentioned in the document.";
pub const LIEN_ADVICE: &str =
    "Obtain an encumbrance certificate to confirm all loans and liens against the property.";
pub const SURVEY_ADVICE: &str = "Verify the survey number with the land registry office.";
pub const SIGNATURE_ADVICE: &str =
    "Document appears to have missing or invalid signatures. Verify with issuing authority.";

/// A conditional advisory fires when a finding of the right kind either has
/// one of `codes` or quotes a record value containing `keyword`.
struct Trigger {
    codes: &'static [FindingCode],
    keyword: &'static str,
}

const DISPUTE_TRIGGER: Trigger = Trigger {
    codes: &[FindingCode::DisputePending],
    keyword: "dispute",
};
const LIEN_TRIGGER: Trigger = Trigger {
    codes: &[FindingCode::LienPresent],
    keyword: "lien",
};
const SURVEY_TRIGGER: Trigger = Trigger {
    codes: &[FindingCode::SurveyMissing, FindingCode::SurveyNonNumeric],
    keyword: "Survey",
};
const SIGNATURE_TRIGGER: Trigger = Trigger {
    codes: &[FindingCode::SignaturesMissing],
    keyword: "signature",
};

impl Trigger {
    fn fires(&self, finding: &Finding) -> bool {
        self.codes.contains(&finding.code) || finding.subject_contains(self.keyword)
    }
}

fn any_warning(findings: &[Finding], trigger: &Trigger) -> bool {
    findings.iter().any(|f| f.is_warning() && trigger.fires(f))
}

fn any_error(findings: &[Finding], trigger: &Trigger) -> bool {
    findings.iter().any(|f| f.is_error() && trigger.fires(f))
}

/// Build the recommendation list for `status`: fixed base items first, then
/// conditional items in a fixed order.
pub fn generate_recommendations(status: VerificationStatus, findings: &[Finding]) -> Vec<String> {
    let advice: Vec<&str> = match status {
        VerificationStatus::Authentic => return into_strings(&AUTHENTIC_ADVICE),
        VerificationStatus::Suspicious => {
            let mut advice = SUSPICIOUS_ADVICE.to_vec();
            if any_warning(findings, &DISPUTE_TRIGGER) {
                advice.push(DISPUTE_ADVICE);
            }
            if any_warning(findings, &LIEN_TRIGGER) {
                advice.push(LIEN_ADVICE);
            }
            advice
        }
        VerificationStatus::Invalid => {
            let mut advice = INVALID_ADVICE.to_vec();
            if any_error(findings, &SURVEY_TRIGGER) {
                advice.push(SURVEY_ADVICE);
            }
            if any_error(findings, &SIGNATURE_TRIGGER) {
                advice.push(SIGNATURE_ADVICE);
            }
            advice
        }
    };

    into_strings(&advice)
}

fn into_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

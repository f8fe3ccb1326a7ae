//! Field extraction from raw modem status text.
//!
//! ModemManager prints registration state as labeled, single-quoted values
//! (`MCC: '310'`, `access tech: 'lte'`). The matchers here are independent
//! and order-insensitive: a reshuffled, truncated, or otherwise partial
//! status block yields exactly the fields it contains, and an unmatched
//! field is an absent field, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static MCC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"MCC:\s*'(\d+)'").expect("valid pattern"));
static MNC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"MNC:\s*'(\d+)'").expect("valid pattern"));
static ACCESS_TECH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"access tech:\s*'([^']+)'").expect("valid pattern"));

/// Registration fields pulled out of one status snapshot.
///
/// No invariant ties presence together; any subset may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    /// Mobile country code, e.g. "310".
    pub mcc: Option<String>,
    /// Mobile network code, e.g. "260".
    pub mnc: Option<String>,
    /// Radio access technology label as the modem reports it, e.g. "lte".
    pub access_tech: Option<String>,
}

impl RegistrationFields {
    /// True when the snapshot contained none of the known fields.
    pub fn is_empty(&self) -> bool {
        self.mcc.is_none() && self.mnc.is_none() && self.access_tech.is_none()
    }
}

/// Extract whatever registration fields `snapshot` contains.
pub fn extract(snapshot: &str) -> RegistrationFields {
    RegistrationFields {
        mcc: capture(&MCC_RE, snapshot),
        mnc: capture(&MNC_RE, snapshot),
        access_tech: capture(&ACCESS_TECH_RE, snapshot),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].to_string())
}

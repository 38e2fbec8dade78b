use serde::{Deserialize, Serialize};

use super::value::{raw_of, YahooDate, YahooValue};

/// The `institutionOwnership` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionOwnership {
    #[serde(default)]
    pub ownership_list: Vec<InstitutionalHolder>,
}

/// One institution's reported position.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalHolder {
    pub organization: String,
    pub report_date: Option<YahooDate>,
    pub pct_held: Option<YahooValue>,
    pub position: Option<YahooValue>,
    pub value: Option<YahooValue>,
}

impl InstitutionalHolder {
    /// Number of shares held.
    pub fn shares(&self) -> Option<f64> {
        raw_of(&self.position)
    }

    /// Market value of the position in dollars.
    pub fn value(&self) -> Option<f64> {
        raw_of(&self.value)
    }

    /// Fraction of shares outstanding (0.08 = 8%).
    pub fn pct_held(&self) -> Option<f64> {
        raw_of(&self.pct_held)
    }
}

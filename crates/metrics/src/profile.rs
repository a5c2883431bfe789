use crate::bmi::Bmi;
use serde::{Deserialize, Serialize};
use vitals_core::{Result, VitalsError};

/// The user record shown across the dashboard.
///
/// BMI is derived from height and weight on demand and never stored.
/// Updates return a new profile; nothing is changed in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name:         String,
    pub email:        String,
    pub member_since: String,
    pub height_cm:    f64,
    pub weight_kg:    f64,
    pub age:          u32,
}

impl UserProfile {
    pub fn bmi(&self) -> Result<Bmi> {
        Bmi::from_metric(self.height_cm, self.weight_kg)
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    #[must_use]
    pub fn with_height(self, height_cm: f64) -> Self {
        Self { height_cm, ..self }
    }

    #[must_use]
    pub fn with_weight(self, weight_kg: f64) -> Self {
        Self { weight_kg, ..self }
    }

    #[must_use]
    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }

    /// Serialize to the flat JSON blob a host may persist verbatim.
    pub fn to_blob(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| VitalsError::Config(format!("encode profile: {e}")))
    }

    /// Decode a blob written by [`to_blob`](Self::to_blob), or the older
    /// record that stored `"175 cm"` / `"68.2 kg"` strings and a cached BMI.
    pub fn from_blob(blob: &str) -> Result<Self> {
        let decoded: ProfileBlob = serde_json::from_str(blob)
            .map_err(|e| VitalsError::Config(format!("decode profile: {e}")))?;
        match decoded {
            ProfileBlob::Current(profile) => Ok(profile),
            ProfileBlob::Labelled(stored) => stored.into_profile(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileBlob {
    Current(UserProfile),
    Labelled(LabelledProfile),
}

/// Measurements kept as display strings. The cached `bmi` is ignored and
/// derived again from height and weight.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelledProfile {
    name:         String,
    email:        String,
    member_since: String,
    height:       String,
    weight:       String,
    age:          u32,
}

impl LabelledProfile {
    fn into_profile(self) -> Result<UserProfile> {
        Ok(UserProfile {
            height_cm:    parse_measure(&self.height, "cm")?,
            weight_kg:    parse_measure(&self.weight, "kg")?,
            name:         self.name,
            email:        self.email,
            member_since: self.member_since,
            age:          self.age,
        })
    }
}

/// `"68.2 kg"` → `68.2`. A bare number is accepted too.
fn parse_measure(raw: &str, unit: &str) -> Result<f64> {
    raw.trim()
        .trim_end_matches(unit)
        .trim_end()
        .parse()
        .map_err(|_| VitalsError::InvalidMeasurement(format!("expected <number> {unit}, got {raw:?}")))
}

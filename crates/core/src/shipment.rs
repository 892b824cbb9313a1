use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A declared shipment awaiting compliance evaluation.
///
/// Records are transient: one is constructed per evaluation request (from a
/// JSON payload or a tabular row) and never stored directly. Absent or blank
/// numeric fields deserialize to `0.0` rather than failing — missing data
/// surfaces later as a limit violation in the report, not as a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Harmonized System code identifying the product class.
    #[serde(default, alias = "hscode")]
    pub hs_code: Option<String>,

    /// Declared product name.
    #[serde(default)]
    pub item_name: String,

    /// Courier or carrier handling the shipment.
    #[serde(default)]
    pub courier: String,

    /// Free-text product description. Drives banned-product scanning,
    /// category inference, and the text classifier.
    #[serde(default, alias = "input_text")]
    pub description: String,

    /// Weight in the unit the baseline limits are expressed in.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,

    /// Length of the package.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub length: f64,

    /// Breadth of the package.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub breadth: f64,

    /// Height of the package.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub height: f64,

    /// Country the shipment originates from.
    #[serde(default, alias = "OriginCountry")]
    pub origin_country: String,

    /// Declared monetary value in INR. Zero is treated as "missing" by the
    /// evaluator, not as a valid free shipment.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub declared_value: f64,
}

impl ShipmentRecord {
    /// Create a record with the two fields every evaluation touches. All
    /// remaining fields start blank/zero and are filled via `with_*`.
    #[must_use]
    pub fn new(item_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the HS code.
    #[must_use]
    pub fn with_hs_code(mut self, code: impl Into<String>) -> Self {
        self.hs_code = Some(code.into());
        self
    }

    /// Set the courier.
    #[must_use]
    pub fn with_courier(mut self, courier: impl Into<String>) -> Self {
        self.courier = courier.into();
        self
    }

    /// Set the package dimensions (weight, length, breadth, height).
    #[must_use]
    pub fn with_dimensions(mut self, weight: f64, length: f64, breadth: f64, height: f64) -> Self {
        self.weight = weight;
        self.length = length;
        self.breadth = breadth;
        self.height = height;
        self
    }

    /// Set the origin country.
    #[must_use]
    pub fn with_origin(mut self, country: impl Into<String>) -> Self {
        self.origin_country = country.into();
        self
    }

    /// Set the declared value in INR.
    #[must_use]
    pub fn with_declared_value(mut self, value: f64) -> Self {
        self.declared_value = value;
        self
    }

    /// Return a copy with all string fields trimmed and a blank HS code
    /// collapsed to `None`. Evaluation always runs on normalized records.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut rec = self.clone();
        rec.hs_code = rec
            .hs_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToOwned::to_owned);
        rec.item_name = rec.item_name.trim().to_owned();
        rec.courier = rec.courier.trim().to_owned();
        rec.description = rec.description.trim().to_owned();
        rec.origin_country = rec.origin_country.trim().to_owned();
        rec
    }
}

/// Accept a number, a numeric string, a blank string, or null for a numeric
/// field. Blank and null become `0.0`; a non-numeric string is a hard
/// deserialization error (the input adapter's problem, not the evaluator's).
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Null => Ok(0.0),
        Raw::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(0.0)
            } else {
                s.parse::<f64>()
                    .map_err(|_| de::Error::custom(format!("invalid numeric value: {s:?}")))
            }
        }
    }
}

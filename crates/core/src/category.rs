use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse product classification driving which documents, approvals, and
/// certifications a shipment must carry.
///
/// Serialized with the human-facing labels ("Food & Beverage", ...) so report
/// payloads match the reference tables verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Pharmaceuticals,
    Machinery,
    Automotive,
    Construction,
    #[serde(rename = "Food & Beverage")]
    FoodBeverage,
    #[serde(rename = "Energy & Utilities")]
    EnergyUtilities,
    #[serde(rename = "Medical Devices")]
    MedicalDevices,
    #[serde(rename = "Textiles & Apparel")]
    TextilesApparel,
    /// Catch-all for descriptions no inference rule matches. Carries no
    /// baseline requirements.
    Other,
}

impl Category {
    /// The human-facing label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Pharmaceuticals => "Pharmaceuticals",
            Self::Machinery => "Machinery",
            Self::Automotive => "Automotive",
            Self::Construction => "Construction",
            Self::FoodBeverage => "Food & Beverage",
            Self::EnergyUtilities => "Energy & Utilities",
            Self::MedicalDevices => "Medical Devices",
            Self::TextilesApparel => "Textiles & Apparel",
            Self::Other => "Other",
        }
    }

    /// All categories that carry baseline requirements (everything except
    /// [`Category::Other`]).
    pub fn with_requirements() -> [Category; 9] {
        [
            Self::Electronics,
            Self::Pharmaceuticals,
            Self::Machinery,
            Self::Automotive,
            Self::Construction,
            Self::FoodBeverage,
            Self::EnergyUtilities,
            Self::MedicalDevices,
            Self::TextilesApparel,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

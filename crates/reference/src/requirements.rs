use std::collections::HashMap;

use cleargate_core::Category;

/// The documents, approvals, and certifications a category demands as its
/// baseline. Lists are ordered as sourced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    pub documents: Vec<String>,
    pub approvals: Vec<String>,
    pub certifications: Vec<String>,
}

impl RequirementSet {
    fn new(documents: &[&str], approvals: &[&str], certifications: &[&str]) -> Self {
        let own = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
        Self {
            documents: own(documents),
            approvals: own(approvals),
            certifications: own(certifications),
        }
    }

    /// Whether all three lists are empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.approvals.is_empty() && self.certifications.is_empty()
    }
}

/// Static mapping from category to its baseline requirements.
///
/// Built once at start-up and never mutated, so it can be shared across
/// concurrent evaluations without synchronization. [`Category::Other`] has no
/// entry and yields an empty [`RequirementSet`].
#[derive(Debug, Clone)]
pub struct CategoryTable {
    table: HashMap<Category, RequirementSet>,
}

impl CategoryTable {
    /// The built-in per-category requirement tables.
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        table.insert(
            Category::Electronics,
            RequirementSet::new(
                &["Technical Specifications", "User Manual", "RoHS Compliance Document"],
                &["FCC Approval", "CE Marking Approval"],
                &[
                    "ISO 9001 (Quality Management)",
                    "UL (Underwriters Laboratories) Certification",
                ],
            ),
        );
        table.insert(
            Category::Pharmaceuticals,
            RequirementSet::new(
                &[
                    "FDA Approval",
                    "Clinical Trial Results",
                    "Product Safety Data Sheet (SDS)",
                ],
                &["FDA Drug Approval", "EMA (European Medicines Agency) Approval"],
                &["GMP (Good Manufacturing Practices)", "ISO 22716 (Cosmetic GMP)"],
            ),
        );
        table.insert(
            Category::Machinery,
            RequirementSet::new(
                &["Safety Certificate", "Inspection Report", "CE Declaration of Conformity"],
                &["OSHA Safety Approval", "EPA Emissions Compliance"],
                &[
                    "ISO 45001 (Occupational Health & Safety)",
                    "CE (Conformité Européenne) Certification",
                ],
            ),
        );
        table.insert(
            Category::Automotive,
            RequirementSet::new(
                &["Emission Test Report", "Vehicle Safety Inspection Report"],
                &[
                    "NHTSA (National Highway Traffic Safety Administration) Approval",
                    "DOT (Department of Transportation) Approval",
                ],
                &["ISO 26262 (Functional Safety)", "SAE J3061 (Cybersecurity)"],
            ),
        );
        table.insert(
            Category::Construction,
            RequirementSet::new(
                &["Building Permit", "Environmental Impact Assessment"],
                &[
                    "Local Government Building Permit Approval",
                    "Fire Safety Compliance Approval",
                ],
                &[
                    "LEED (Leadership in Energy & Environmental Design) Certification",
                    "ISO 14001 (Environmental Management)",
                ],
            ),
        );
        table.insert(
            Category::FoodBeverage,
            RequirementSet::new(
                &["Health Safety Certification", "FDA Food Facility Registration"],
                &[
                    "USDA (United States Department of Agriculture) Approval",
                    "FDA Labeling Compliance Approval",
                ],
                &[
                    "HACCP (Hazard Analysis and Critical Control Points)",
                    "ISO 22000 (Food Safety)",
                ],
            ),
        );
        table.insert(
            Category::EnergyUtilities,
            RequirementSet::new(
                &["Energy Efficiency Report", "Environmental Compliance Certificate"],
                &[
                    "Federal Energy Regulatory Commission (FERC) Approval",
                    "EPA Environmental Compliance Approval",
                ],
                &["ISO 50001 (Energy Management)", "LEED Certification"],
            ),
        );
        table.insert(
            Category::MedicalDevices,
            RequirementSet::new(
                &["ISO 13485 Compliance Report", "Product Registration Certificate"],
                &["FDA 510(k) Clearance", "EU MDR (Medical Device Regulation) Approval"],
                &[
                    "ISO 13485 (Medical Device Quality)",
                    "FDA cGMP (Current Good Manufacturing Practice)",
                ],
            ),
        );
        table.insert(
            Category::TextilesApparel,
            RequirementSet::new(
                &["Chemical Safety Report", "Material Compliance Certificate"],
                &["Oeko-Tex Certification Approval", "REACH Compliance Approval"],
                &["GOTS (Global Organic Textile Standard)", "Fair Trade Certification"],
            ),
        );
        Self { table }
    }

    /// The baseline requirements for a category. Categories without an entry
    /// (notably `Other`) yield empty lists.
    pub fn requirements_for(&self, category: Category) -> RequirementSet {
        self.table.get(&category).cloned().unwrap_or_default()
    }
}

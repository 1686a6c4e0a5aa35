//! Compiled-in sector and tier datasets.
//!
//! These are the authored Kenya-market legal matrix tables. Entry order is
//! display order; the picker surfaces iterate the catalogs as written here.

use crate::domain::catalog::Catalog;
use crate::domain::model::{MatrixData, SectorProfile, TierPackage};
use crate::utils::error::KeyDomain;

/// Display-only note shown under the matrix. The fee figures are
/// descriptive text, nothing in the program computes them.
pub const INVESTMENT_NOTE: &str = "Investment Tracking: MC Studio tracks startup growth for \
prospective investors. A 5% finder fee applies to total investment raised, with due diligence \
fees paid to OW based on startup size.";

pub const MATRIX_TITLE: &str = "Nafasi x MC Studio Legal Matrix";
pub const MATRIX_SUBTITLE: &str = "Sector-Specific Compliance & IP Framework";
pub const MATRIX_ATTRIBUTION: &str = "Powered by Okutta & Wairi Advocates";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sector(
    name: &str,
    icon: &str,
    regulators: &[&str],
    critical_compliance: &[&str],
    ip_focus: &[&str],
    common_risks: &[&str],
) -> SectorProfile {
    SectorProfile {
        name: name.to_string(),
        icon: icon.to_string(),
        regulators: strings(regulators),
        critical_compliance: strings(critical_compliance),
        ip_focus: strings(ip_focus),
        common_risks: strings(common_risks),
    }
}

fn tier(name: &str, price: &str, focus: &str, deliverables: &[&str]) -> TierPackage {
    TierPackage {
        name: name.to_string(),
        price: price.to_string(),
        focus: focus.to_string(),
        deliverables: strings(deliverables),
    }
}

pub fn builtin_sectors() -> Catalog<SectorProfile> {
    Catalog::from_authored(
        KeyDomain::Sector,
        vec![
            (
                "fintech".to_string(),
                sector(
                    "FinTech",
                    "💰",
                    &["CBK", "CMA", "KRA"],
                    &[
                        "Central Bank of Kenya licensing",
                        "Anti-Money Laundering (AML) compliance",
                        "Payment Service Provider registration",
                        "Data Protection Act registration",
                        "Consumer protection disclosure",
                    ],
                    &[
                        "Software patents",
                        "API documentation",
                        "Algorithm protection",
                        "Brand protection",
                    ],
                    &[
                        "Regulatory sanctions",
                        "Customer fund security",
                        "Cross-border payment compliance",
                    ],
                ),
            ),
            (
                "healthtech".to_string(),
                sector(
                    "HealthTech",
                    "🏥",
                    &["PPB", "KMPDC", "NCK", "ODPC"],
                    &[
                        "Pharmacy and Poisons Board approval",
                        "Medical device registration",
                        "Patient data protection (HIPAA-equivalent)",
                        "Telemedicine practice licenses",
                        "Clinical trial approvals if applicable",
                    ],
                    &[
                        "Medical software patents",
                        "Clinical data ownership",
                        "Trade secrets",
                        "Device design protection",
                    ],
                    &[
                        "Patient privacy breaches",
                        "Unlicensed medical practice",
                        "Product liability",
                    ],
                ),
            ),
            (
                "edtech".to_string(),
                sector(
                    "EdTech",
                    "📚",
                    &["KICD", "CUE", "ODPC"],
                    &[
                        "Educational content approval (KICD)",
                        "Student data protection",
                        "Parental consent frameworks",
                        "Accessibility compliance",
                        "Teacher certification if applicable",
                    ],
                    &[
                        "Course content copyright",
                        "Platform software",
                        "Assessment algorithms",
                        "Brand identity",
                    ],
                    &[
                        "Minor data handling",
                        "Content licensing disputes",
                        "Credential verification",
                    ],
                ),
            ),
            (
                "agritech".to_string(),
                sector(
                    "AgriTech",
                    "🌾",
                    &["KEPHIS", "PCPB", "KALRO"],
                    &[
                        "Seed and plant variety certification",
                        "Pesticide/fertilizer approvals",
                        "Export/import permits",
                        "Farmer data protection",
                        "Environmental impact assessments",
                    ],
                    &[
                        "Plant variety rights",
                        "Agricultural processes",
                        "IoT sensor technology",
                        "Data analytics",
                    ],
                    &[
                        "Environmental violations",
                        "Product safety",
                        "Cross-border trade barriers",
                    ],
                ),
            ),
            (
                "retail".to_string(),
                sector(
                    "Retail & E-commerce",
                    "🛒",
                    &["KRA", "KEBS", "ODPC", "CAK"],
                    &[
                        "Business permits and trade licenses",
                        "Consumer protection compliance",
                        "Product safety standards (KEBS)",
                        "E-commerce tax compliance",
                        "Customer data protection",
                    ],
                    &[
                        "Brand trademarks",
                        "Platform technology",
                        "Supply chain software",
                        "Marketing content",
                    ],
                    &[
                        "Counterfeit products",
                        "Consumer disputes",
                        "Tax evasion allegations",
                    ],
                ),
            ),
            (
                "energy".to_string(),
                sector(
                    "Energy & Manufacturing",
                    "⚡",
                    &["EPRA", "NEMA", "ERC", "KEBS"],
                    &[
                        "Energy Regulatory Commission licenses",
                        "Environmental impact assessments",
                        "Manufacturing standards certification",
                        "Occupational safety compliance",
                        "Grid connection approvals",
                    ],
                    &[
                        "Clean tech patents",
                        "Manufacturing processes",
                        "Equipment design",
                        "Energy management software",
                    ],
                    &[
                        "Environmental violations",
                        "Safety incidents",
                        "Grid compliance failures",
                    ],
                ),
            ),
        ],
    )
}

pub fn builtin_tiers() -> Catalog<TierPackage> {
    Catalog::from_authored(
        KeyDomain::Tier,
        vec![
            (
                "hustle".to_string(),
                tier(
                    "AIKYA HUSTLE",
                    "KSh 25,000/mo",
                    "Foundation & Registration",
                    &[
                        "Sector-specific business registration",
                        "Basic licensing roadmap",
                        "Founders agreement with sector clauses",
                        "IP assignment for employees",
                        "Data Protection Act registration (ODPC)",
                        "Initial regulatory compliance checklist",
                    ],
                ),
            ),
            (
                "grow".to_string(),
                tier(
                    "AIKYA GROW",
                    "KSh 50,000/mo",
                    "Scaling & Compliance",
                    &[
                        "Full regulatory license applications",
                        "Sector-specific commercial contracts",
                        "ESOP with sector considerations",
                        "Comprehensive data protection (DPIA)",
                        "Industry-specific policies",
                        "Quarterly regulatory updates",
                        "Investor documentation prep",
                    ],
                ),
            ),
            (
                "lead".to_string(),
                tier(
                    "AIKYA LEAD",
                    "KSh 150,000/mo",
                    "Market Leadership",
                    &[
                        "Regulatory representation & advocacy",
                        "M&A and complex transactions",
                        "Multi-jurisdictional compliance (EMEA)",
                        "Board governance & risk management",
                        "Dedicated legal team",
                        "Strategic regulatory opinions",
                        "Cross-border expansion support",
                    ],
                ),
            ),
        ],
    )
}

impl MatrixData {
    /// The compiled-in datasets.
    pub fn builtin() -> Self {
        MatrixData::new(builtin_sectors(), builtin_tiers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_key_sets_in_order() {
        let data = MatrixData::builtin();
        assert_eq!(
            data.sectors().keys().collect::<Vec<_>>(),
            vec!["fintech", "healthtech", "edtech", "agritech", "retail", "energy"]
        );
        assert_eq!(
            data.tiers().keys().collect::<Vec<_>>(),
            vec!["hustle", "grow", "lead"]
        );
    }

    #[test]
    fn test_authored_keys_are_unique() {
        // from_authored skips the duplicate check; re-validate the literals.
        let data = MatrixData::builtin();
        let sectors: Vec<_> = data
            .sectors()
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        assert!(Catalog::from_entries(KeyDomain::Sector, sectors).is_ok());
        let tiers: Vec<_> = data
            .tiers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        assert!(Catalog::from_entries(KeyDomain::Tier, tiers).is_ok());
    }

    #[test]
    fn test_every_record_fully_authored() {
        let data = MatrixData::builtin();
        for (key, profile) in data.sectors().iter() {
            assert!(!profile.name.is_empty(), "sector {} missing name", key);
            assert!(!profile.icon.is_empty(), "sector {} missing icon", key);
            assert!(!profile.regulators.is_empty());
            assert!(!profile.critical_compliance.is_empty());
            assert!(!profile.ip_focus.is_empty());
            assert!(!profile.common_risks.is_empty());
        }
        for (key, package) in data.tiers().iter() {
            assert!(!package.name.is_empty(), "tier {} missing name", key);
            assert!(!package.price.is_empty());
            assert!(!package.focus.is_empty());
            assert!(!package.deliverables.is_empty());
        }
    }

    #[test]
    fn test_fintech_literals() {
        let data = MatrixData::builtin();
        let fintech = data.sectors().get("fintech").unwrap();
        assert_eq!(fintech.name, "FinTech");
        assert_eq!(fintech.icon, "💰");
        assert_eq!(fintech.regulators, vec!["CBK", "CMA", "KRA"]);
        assert_eq!(fintech.critical_compliance.len(), 5);
    }
}

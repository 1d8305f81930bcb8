//! Problem statement catalog: a fixed, ordered mapping from category to
//! problem statements.
//!
//! The catalog is plain data. Pages receive it by reference so every consumer
//! can be tested against a smaller catalog built with
//! [`Catalog::from_sections`].

/// The fixed set of categories offered by the category selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Hardware,
    Software,
    Sustainability,
    Aiml,
    Agriculture,
    Others,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 6] = [
        Category::Hardware,
        Category::Software,
        Category::Sustainability,
        Category::Aiml,
        Category::Agriculture,
        Category::Others,
    ];

    /// Control / storage value for this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Hardware => "hardware",
            Category::Software => "software",
            Category::Sustainability => "sustainability",
            Category::Aiml => "aiml",
            Category::Agriculture => "agriculture",
            Category::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Hardware => "Hardware",
            Category::Software => "Software",
            Category::Sustainability => "Sustainability",
            Category::Aiml => "AI / ML",
            Category::Agriculture => "Agriculture",
            Category::Others => "Others",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// A single problem statement. `id` is unique across the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemStatement {
    pub id: &'static str,
    pub name: &'static str,
}

const fn ps(id: &'static str, name: &'static str) -> ProblemStatement {
    ProblemStatement { id, name }
}

/// One category and its statements, in display order.
pub struct CatalogSection {
    pub category: Category,
    pub problems: &'static [ProblemStatement],
}

/// Read-only category → statements mapping.
#[derive(Clone, Copy)]
pub struct Catalog {
    sections: &'static [CatalogSection],
}

impl Catalog {
    /// The event's published problem statements.
    pub fn builtin() -> Self {
        Self::from_sections(BUILTIN_SECTIONS)
    }

    pub fn from_sections(sections: &'static [CatalogSection]) -> Self {
        Self { sections }
    }

    /// Statements for `category`, in display order.
    ///
    /// Unknown and empty categories yield an empty slice.
    pub fn lookup(&self, category: &str) -> &'static [ProblemStatement] {
        self.sections
            .iter()
            .find(|s| s.category.key() == category)
            .map(|s| s.problems)
            .unwrap_or(&[])
    }

    /// Categories present in this catalog, in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections.iter().map(|s| s.category)
    }

    /// Every statement with its category, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, ProblemStatement)> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.problems.iter().map(move |p| (s.category, *p)))
    }

    /// Reverse lookup by statement id.
    pub fn find(&self, id: &str) -> Option<(Category, ProblemStatement)> {
        self.iter().find(|(_, p)| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.problems.len()).sum()
    }
}

static BUILTIN_SECTIONS: &[CatalogSection] = &[
    CatalogSection {
        category: Category::Hardware,
        problems: &[
            ps("HW-001", "Smart Helmet for Accident Detection"),
            ps("HW-002", "Wearable Health Monitor for Chronic Patients"),
            ps("HW-003", "RFID-Based Asset Tracking System"),
            ps("HW-004", "Solar-Powered Charging Station for Devices"),
            ps("HW-005", "Smart Water Dispenser with Purity Indicator"),
            ps("HW-006", "Digital Pill Dispenser for Elders"),
            ps("HW-07", "Smart Classroom Attendance System Using RFID"),
        ],
    },
    CatalogSection {
        category: Category::Software,
        problems: &[
            ps("SW-013", "Virtual Queue System for College Canteens"),
            ps("SW-014", "Student Grievance Redressal Portal"),
            ps("SW-015", "Peer-to-Peer Book Exchange Platform"),
            ps("SW-016", "College Event Management System"),
            ps("SW-017", "Campus Bus Tracking App"),
            ps("SW-018", "Online Counseling Appointment System"),
            ps("SW-019", "Hostel Maintenance Complaint App"),
            ps("SW-020", "Digital Resume Builder with Templates"),
            ps("SW-021", "Online Feedback and Survey System"),
            ps("SW-022", "Lost and Found Portal for Students"),
            ps("SW-023", "Academic Planner with Exam and Assignment Tracker"),
            ps("SW-024", "Indoor Navigation App for Campus Buildings"),
            ps("SW-025", "Code Practice Platform with College Leaderboard"),
            ps("SW-026", "Smart Attendance Analytics Dashboard"),
        ],
    },
    CatalogSection {
        category: Category::Sustainability,
        problems: &[
            ps("SUS-027", "IoT Rainwater Harvesting Monitor"),
            ps("SUS-028", "Campus Waste Segregation Awareness App"),
            ps("SUS-029", "Carbon Footprint Tracker for Students"),
            ps("SUS-030", "Smart Dustbin with Waste Classification AI"),
            ps("SUS-031", "E-Waste Collection and Tracking App"),
            ps("SUS-032", "Smart Greenhouse Monitoring System"),
            ps("SUS-033", "Paperless Office Suite for College Admin"),
            ps("SUS-034", "Solar-Powered Smart Bench"),
            ps("SUS-035", "Sustainable Product Review App"),
            ps("SUS-036", "Biodegradable Packaging Material Finder"),
            ps("SUS-037", "Energy Usage Dashboard for Campus Buildings"),
            ps("SUS-038", "Urban Farming Starter Kit App"),
        ],
    },
    CatalogSection {
        category: Category::Aiml,
        problems: &[
            ps("AI-024", "AI-Powered Disease Prediction System"),
            ps("AI-025", "AI Tutor for Exam Preparation"),
            ps("AI-026", "Real-Time Language Translator for Students"),
            ps("AI-027", "AI-Based Resume Analyzer for Recruiters"),
            ps("AI-028", "Smart Surveillance System Using Computer Vision"),
            ps("AI-029", "AI-Powered Course Recommendation System"),
            ps("AI-030", "Virtual Interview Coach Using NLP"),
            ps("AI-031", "Emotion Detection from Voice and Facial Data"),
            ps("AI-032", "Fake News Detection System"),
            ps("AI-033", "AI-Based Plagiarism Detection for Code"),
            ps("AI-034", "Traffic Violation Detection Using AI"),
        ],
    },
    CatalogSection {
        category: Category::Agriculture,
        problems: &[
            ps("AGR-035", "Smart Irrigation System"),
            ps("AGR-036", "Crop Recommendation System Based on Soil and Weather Data"),
            ps("AGR-037", "Drone-Based Crop Health Monitoring"),
            ps("AGR-038", "AI-Powered Yield Prediction Tool"),
            ps("AGR-039", "Livestock Health Monitoring Wearable"),
            ps("AGR-040", "Fertilizer Dosage Calculator App"),
            ps("AGR-041", "Water Source Locator for Rural Farmers"),
            ps("AGR-042", "Agricultural News and Market Price Alert App"),
        ],
    },
    CatalogSection {
        category: Category::Others,
        problems: &[
            ps("OTH-043", "Disaster Alert and Response App"),
            ps("OTH-044", "Smart Voting System with Blockchain"),
            ps("OTH-045", "Campus Navigation App for Visually Impaired"),
            ps("OTH-046", "Cyberbullying Detection and Reporting Tool"),
            ps("OTH-047", "Smart Women Safety Wearable"),
            ps("OTH-048", "Crowdsourced Problem Reporting Platform"),
        ],
    },
];

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two-category catalog for controller tests.
    pub static SMALL: &[CatalogSection] = &[
        CatalogSection {
            category: Category::Hardware,
            problems: &[ps("H-1", "Helmet"), ps("H-2", "Dispenser")],
        },
        CatalogSection {
            category: Category::Software,
            problems: &[ps("S-1", "Portal"), ps("S-2", "Planner"), ps("S-3", "Tracker")],
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_globally_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for (_, p) in catalog.iter() {
            assert!(seen.insert(p.id), "duplicate id {}", p.id);
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn builtin_keys_match_category_selector() {
        let keys: Vec<&str> = Catalog::builtin().categories().map(|c| c.key()).collect();
        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn builtin_section_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup("hardware").len(), 7);
        assert_eq!(catalog.lookup("software").len(), 14);
        assert_eq!(catalog.lookup("sustainability").len(), 12);
        assert_eq!(catalog.lookup("aiml").len(), 11);
        assert_eq!(catalog.lookup("agriculture").len(), 8);
        assert_eq!(catalog.lookup("others").len(), 6);
        assert_eq!(catalog.len(), 58);
    }

    #[test]
    fn lookup_preserves_display_order() {
        let software = Catalog::builtin().lookup("software");
        assert_eq!(software[0].id, "SW-013");
        assert_eq!(software[1].id, "SW-014");
        assert_eq!(software[1].name, "Student Grievance Redressal Portal");
        assert_eq!(software.last().map(|p| p.id), Some("SW-026"));
    }

    #[test]
    fn lookup_unknown_or_empty_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("").is_empty());
        assert!(catalog.lookup("quantum").is_empty());
        // Keys are case-sensitive control values, not labels.
        assert!(catalog.lookup("Hardware").is_empty());
    }

    #[test]
    fn find_returns_category() {
        let catalog = Catalog::builtin();
        let (cat, p) = catalog.find("AGR-037").unwrap();
        assert_eq!(cat, Category::Agriculture);
        assert_eq!(p.name, "Drone-Based Crop Health Monitoring");
        assert!(catalog.find("NOPE-1").is_none());
    }

    #[test]
    fn category_key_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_key(c.key()), Some(c));
        }
        assert_eq!(Category::from_key("all"), None);
    }

    #[test]
    fn injected_catalog_only_sees_its_sections() {
        let catalog = Catalog::from_sections(fixtures::SMALL);
        assert_eq!(catalog.len(), 5);
        assert!(catalog.lookup("aiml").is_empty());
        assert_eq!(catalog.categories().count(), 2);
    }
}

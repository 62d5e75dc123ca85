//! Fixed sample data shown by the dashboard screens.
//!
//! The explorer always shows this data regardless of which author was
//! searched; only the displayed name follows the session.

/// A publication as listed on the explorer and written to CSV exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub title: String,
    /// Category labels in display/export order.
    pub fields: Vec<String>,
    /// Contributors in contribution order.
    pub authors: Vec<String>,
    pub total_self_citations: i64,
    pub published_year: i64,
    pub total_citations: i64,
}

/// Headline statistics shown next to the author card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub name: String,
    pub email: String,
    pub total_publications: u32,
    pub total_citations: u32,
    pub total_self_citations: u32,
    pub nm_index: u32,
    pub h_index: u32,
    pub c_score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// Citations vs publications over the sample period.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationChartData {
    pub labels: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
    pub y_max: f64,
    pub y_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalStats {
    pub publications: &'static str,
    pub authors: &'static str,
    pub fields: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularField {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisor {
    pub name: &'static str,
    pub credentials: &'static str,
    pub position: &'static str,
    pub profiles: &'static [&'static str],
}

pub fn publications() -> Vec<PublicationRecord> {
    (0..3)
        .map(|_| PublicationRecord {
            title: "Title of Publication".to_string(),
            fields: (1..=5).map(|n| format!("Field {n:02}")).collect(),
            authors: ["Mr. XXXX", "Mr. YYYY", "Mr. ZZZZ"]
                .into_iter()
                .map(String::from)
                .collect(),
            total_self_citations: 250,
            published_year: 250,
            total_citations: 250,
        })
        .collect()
}

pub fn author_summary(name: &str) -> AuthorSummary {
    AuthorSummary {
        name: name.to_string(),
        email: "researcher@university.edu".to_string(),
        total_publications: 250,
        total_citations: 250,
        total_self_citations: 250,
        nm_index: 250,
        h_index: 250,
        c_score: 250,
    }
}

pub fn citation_chart() -> CitationChartData {
    CitationChartData {
        labels: vec!["P", "Q", "R", "S", "T"],
        series: vec![
            ChartSeries {
                label: "Citations",
                values: vec![220.0, 180.0, 240.0, 280.0, 260.0],
                color: "#d32f2f",
            },
            ChartSeries {
                label: "Publications",
                values: vec![200.0, 240.0, 190.0, 230.0, 270.0],
                color: "#034078",
            },
        ],
        y_max: 300.0,
        y_step: 50.0,
    }
}

pub const PORTAL_STATS: PortalStats = PortalStats {
    publications: "1025828",
    authors: "24852+",
    fields: "341",
};

pub const POPULAR_FIELDS: &[PopularField] = &[
    PopularField { name: "Medicine", image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=400&h=300&fit=crop" },
    PopularField { name: "Psychology", image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop" },
    PopularField { name: "Engineering", image: "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=400&h=300&fit=crop" },
    PopularField { name: "Economics", image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=400&h=300&fit=crop" },
    PopularField { name: "Computer Science", image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=400&h=300&fit=crop" },
    PopularField { name: "Biology", image: "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=400&h=300&fit=crop" },
    PopularField { name: "Chemistry", image: "https://images.unsplash.com/photo-1603126857599-f6e157fa2fe6?w=400&h=300&fit=crop" },
    PopularField { name: "Physics", image: "https://images.unsplash.com/photo-1636466497217-26a8cbeaf0aa?w=400&h=300&fit=crop" },
    PopularField { name: "Mathematics", image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&h=300&fit=crop" },
    PopularField { name: "Environmental Science", image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=400&h=300&fit=crop" },
    PopularField { name: "Sociology", image: "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=400&h=300&fit=crop" },
    PopularField { name: "History", image: "https://images.unsplash.com/photo-1461360370896-922624d12aa1?w=400&h=300&fit=crop" },
    PopularField { name: "Political Science", image: "https://images.unsplash.com/photo-1529107386315-e1a2ed48a620?w=400&h=300&fit=crop" },
    PopularField { name: "Law", image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=400&h=300&fit=crop" },
    PopularField { name: "Education", image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=400&h=300&fit=crop" },
];

pub const MISSION: &[MissionCard] = &[
    MissionCard {
        title: "Scale Research Evaluation",
        body: "Enable large-scale bibliometric analysis of 100,000 researchers across 12 scientific disciplines efficiently and accurately.",
    },
    MissionCard {
        title: "Automate Data Collection",
        body: "Transform months of manual work into automated processes, eliminating human error and saving valuable research time.",
    },
    MissionCard {
        title: "Provide Actionable Insights",
        body: "Deliver comprehensive CSV exports with citation metrics, h-index calculations, and author contribution analysis for data-driven decisions.",
    },
];

pub const ADVISOR: Advisor = Advisor {
    name: "Dr. P.A.D.S. Nilmantha Wijesekara",
    credentials: "Ph.D. (Ruhuna), B.Sc.Engineering (First-Class Honors, Ruhuna), AMIE (SL)",
    position: "Lecturer, Department of Electrical and Information Engineering, Faculty of Engineering, University of Ruhuna.",
    profiles: &["DBIE", "ResearchGate", "Google_Scholar", "Scopus", "WoS", "ORCID"],
};

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Ahamed R.S.", id: "EG/2022/4919" },
    TeamMember { name: "Ahnaf M.N.M.", id: "EG/2022/4920" },
    TeamMember { name: "Saheer A.S.M", id: "EG/2022/5304" },
    TeamMember { name: "Thurga R.", id: "EG/2022/5374" },
];

/// Options offered by the explorer's filter selects as `(value, label)`.
pub const FIELD_FILTERS: &[(&str, &str)] = &[
    ("medicine", "Medicine"),
    ("engineering", "Engineering"),
    ("psychology", "Psychology"),
];
pub const YEAR_FILTERS: &[(&str, &str)] = &[("2024", "2024"), ("2023", "2023"), ("2022", "2022")];
pub const INDEX_FILTERS: &[(&str, &str)] = &[
    ("high", "High (>100)"),
    ("medium", "Medium (50-100)"),
    ("low", "Low (<50)"),
];

//! Deterministic job analysis.
//!
//! Answers when no provider key is configured or the provider call fails.
//! Role category and seniority band are read from title keywords; salary is
//! a base table per category and band with a location multiplier applied to
//! both ends of the range.

use super::types::{AnalysisSource, JobAnalysis, JobAnalysisRequest, SalaryRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleCategory {
    Frontend,
    Backend,
    Fullstack,
    Data,
    Devops,
    Mobile,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeniorityBand {
    Junior,
    Mid,
    Senior,
    Lead,
}

const LOCATION_MULTIPLIERS: &[(&str, f64)] = &[
    ("san francisco", 1.4),
    ("bay area", 1.4),
    ("new york", 1.3),
    ("seattle", 1.25),
    ("boston", 1.2),
    ("los angeles", 1.15),
    ("austin", 1.1),
    ("denver", 1.05),
    ("remote", 1.0),
];

pub fn analyze(request: &JobAnalysisRequest) -> JobAnalysis {
    let category = detect_category(&request.job_title);
    let band = detect_band(&request.job_title);
    let multiplier = location_multiplier(request.location.as_deref());

    let (base_min, base_max) = base_range(category, band);
    let salary_range = SalaryRange {
        min: scale(base_min, multiplier),
        max: scale(base_max, multiplier),
        currency: "USD".to_string(),
    };

    let mut confidence: f32 = 0.55;
    if request.job_description.is_some() {
        confidence += 0.1;
    }
    if request.location.is_some() {
        confidence += 0.05;
    }

    JobAnalysis {
        scope: scope_summary(category, band, request),
        requirements: requirements(category, band),
        responsibilities: responsibilities(category),
        skills: skills(category),
        salary_range,
        confidence,
        source: AnalysisSource::Fallback,
    }
}

fn scale(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).round() as u32
}

fn detect_category(title: &str) -> RoleCategory {
    let title = title.to_lowercase();
    let matches = |needles: &[&str]| needles.iter().any(|n| title.contains(n));

    if matches(&["fullstack", "full-stack", "full stack"]) {
        RoleCategory::Fullstack
    } else if matches(&["frontend", "front-end", "front end", "react", "ui engineer"]) {
        RoleCategory::Frontend
    } else if matches(&["backend", "back-end", "back end", "api engineer"]) {
        RoleCategory::Backend
    } else if matches(&["data", "machine learning", "ml engineer", "analytics"]) {
        RoleCategory::Data
    } else if matches(&["devops", "sre", "infrastructure", "platform engineer"]) {
        RoleCategory::Devops
    } else if matches(&["mobile", "ios", "android"]) {
        RoleCategory::Mobile
    } else {
        RoleCategory::General
    }
}

fn detect_band(title: &str) -> SeniorityBand {
    let title = title.to_lowercase();
    let matches = |needles: &[&str]| needles.iter().any(|n| title.contains(n));

    if matches(&["principal", "staff", "lead", "head of"]) {
        SeniorityBand::Lead
    } else if matches(&["senior", "sr.", "sr "]) {
        SeniorityBand::Senior
    } else if matches(&["junior", "jr.", "jr ", "intern", "graduate", "entry"]) {
        SeniorityBand::Junior
    } else {
        SeniorityBand::Mid
    }
}

fn location_multiplier(location: Option<&str>) -> f64 {
    let Some(location) = location else {
        return 1.0;
    };
    let lowered = location.to_lowercase();
    LOCATION_MULTIPLIERS
        .iter()
        .find(|(city, _)| lowered.contains(city))
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

fn base_range(category: RoleCategory, band: SeniorityBand) -> (u32, u32) {
    use RoleCategory::*;
    use SeniorityBand::*;
    match (category, band) {
        (Frontend, Junior) => (65_000, 85_000),
        (Frontend, Mid) => (85_000, 115_000),
        (Frontend, Senior) => (115_000, 150_000),
        (Frontend, Lead) => (140_000, 180_000),
        (Backend, Junior) => (70_000, 95_000),
        (Backend, Mid) => (95_000, 125_000),
        (Backend, Senior) => (125_000, 160_000),
        (Backend, Lead) => (150_000, 195_000),
        (Fullstack, Junior) => (70_000, 90_000),
        (Fullstack, Mid) => (90_000, 120_000),
        (Fullstack, Senior) => (120_000, 155_000),
        (Fullstack, Lead) => (145_000, 190_000),
        (Data, Junior) => (75_000, 100_000),
        (Data, Mid) => (100_000, 135_000),
        (Data, Senior) => (135_000, 175_000),
        (Data, Lead) => (160_000, 210_000),
        (Devops, Junior) => (72_000, 95_000),
        (Devops, Mid) => (95_000, 130_000),
        (Devops, Senior) => (130_000, 165_000),
        (Devops, Lead) => (155_000, 200_000),
        (Mobile, Junior) => (68_000, 88_000),
        (Mobile, Mid) => (88_000, 118_000),
        (Mobile, Senior) => (118_000, 152_000),
        (Mobile, Lead) => (142_000, 185_000),
        (General, Junior) => (60_000, 80_000),
        (General, Mid) => (80_000, 110_000),
        (General, Senior) => (110_000, 145_000),
        (General, Lead) => (135_000, 175_000),
    }
}

fn band_label(band: SeniorityBand) -> &'static str {
    match band {
        SeniorityBand::Junior => "junior",
        SeniorityBand::Mid => "mid-level",
        SeniorityBand::Senior => "senior",
        SeniorityBand::Lead => "lead",
    }
}

fn category_label(category: RoleCategory) -> &'static str {
    match category {
        RoleCategory::Frontend => "frontend",
        RoleCategory::Backend => "backend",
        RoleCategory::Fullstack => "full-stack",
        RoleCategory::Data => "data",
        RoleCategory::Devops => "infrastructure",
        RoleCategory::Mobile => "mobile",
        RoleCategory::General => "software",
    }
}

fn years_for(band: SeniorityBand) -> &'static str {
    match band {
        SeniorityBand::Junior => "0-2 years",
        SeniorityBand::Mid => "2-5 years",
        SeniorityBand::Senior => "5+ years",
        SeniorityBand::Lead => "8+ years",
    }
}

fn scope_summary(
    category: RoleCategory,
    band: SeniorityBand,
    request: &JobAnalysisRequest,
) -> String {
    let department = request
        .department
        .as_deref()
        .map(|d| format!(" within the {} team", d))
        .unwrap_or_default();
    format!(
        "A {} {} engineering role{} owning delivery across its area, \
         from design through production support.",
        band_label(band),
        category_label(category),
        department
    )
}

fn requirements(category: RoleCategory, band: SeniorityBand) -> Vec<String> {
    let mut reqs = vec![
        format!(
            "{} of professional {} development experience",
            years_for(band),
            category_label(category)
        ),
        "Clear written and spoken communication".to_string(),
        "Comfort working with code review and CI workflows".to_string(),
    ];
    if matches!(band, SeniorityBand::Senior | SeniorityBand::Lead) {
        reqs.push("Track record of mentoring and technical leadership".to_string());
    }
    reqs
}

fn responsibilities(category: RoleCategory) -> Vec<String> {
    let focus = match category {
        RoleCategory::Frontend => "user-facing features and interface performance",
        RoleCategory::Backend => "APIs, data models, and service reliability",
        RoleCategory::Fullstack => "features spanning the client and the services behind it",
        RoleCategory::Data => "data pipelines, models, and the metrics they power",
        RoleCategory::Devops => "build, deploy, and observability infrastructure",
        RoleCategory::Mobile => "the mobile app experience across devices and releases",
        RoleCategory::General => "product features across the stack",
    };
    vec![
        format!("Design, build, and maintain {}", focus),
        "Collaborate with product and design on scoping and delivery".to_string(),
        "Participate in code review and shared on-call practices".to_string(),
    ]
}

fn skills(category: RoleCategory) -> Vec<String> {
    let skills: &[&str] = match category {
        RoleCategory::Frontend => &["JavaScript", "TypeScript", "React", "CSS", "Testing"],
        RoleCategory::Backend => &["API design", "SQL", "Distributed systems", "Testing"],
        RoleCategory::Fullstack => &["JavaScript", "TypeScript", "API design", "SQL", "React"],
        RoleCategory::Data => &["Python", "SQL", "Data modeling", "Statistics"],
        RoleCategory::Devops => &["Linux", "Kubernetes", "Terraform", "Observability"],
        RoleCategory::Mobile => &["Swift", "Kotlin", "Mobile CI", "App store releases"],
        RoleCategory::General => &["Programming fundamentals", "Testing", "Debugging"],
    };
    skills.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, location: Option<&str>) -> JobAnalysisRequest {
        JobAnalysisRequest {
            job_title: title.to_string(),
            location: location.map(str::to_string),
            ..JobAnalysisRequest::default()
        }
    }

    #[test]
    fn test_senior_frontend_in_san_francisco_applies_1_4_multiplier() {
        let analysis = analyze(&request("Senior Frontend Developer", Some("San Francisco")));

        // Frontend/senior base is 115k-150k; San Francisco is a 1.4x market.
        assert_eq!(analysis.salary_range.min, 161_000);
        assert_eq!(analysis.salary_range.max, 210_000);
        assert_eq!(analysis.salary_range.currency, "USD");
        assert_eq!(analysis.source, AnalysisSource::Fallback);
    }

    #[test]
    fn test_unknown_location_keeps_base_range() {
        let analysis = analyze(&request("Senior Frontend Developer", Some("Lisbon")));
        assert_eq!(analysis.salary_range.min, 115_000);
        assert_eq!(analysis.salary_range.max, 150_000);
    }

    #[test]
    fn test_missing_location_keeps_base_range() {
        let analysis = analyze(&request("Senior Frontend Developer", None));
        assert_eq!(analysis.salary_range.min, 115_000);
        assert_eq!(analysis.salary_range.max, 150_000);
    }

    #[test]
    fn test_category_detection() {
        assert_eq!(detect_category("Senior Backend Engineer"), RoleCategory::Backend);
        assert_eq!(detect_category("Full Stack Developer"), RoleCategory::Fullstack);
        assert_eq!(detect_category("iOS Engineer"), RoleCategory::Mobile);
        assert_eq!(detect_category("Site Manager"), RoleCategory::General);
    }

    #[test]
    fn test_band_detection() {
        assert_eq!(detect_band("Junior Developer"), SeniorityBand::Junior);
        assert_eq!(detect_band("Sr. Platform Engineer"), SeniorityBand::Senior);
        assert_eq!(detect_band("Staff Engineer"), SeniorityBand::Lead);
        assert_eq!(detect_band("Software Engineer"), SeniorityBand::Mid);
    }

    #[test]
    fn test_confidence_grows_with_detail() {
        let bare = analyze(&request("Backend Engineer", None));
        let mut detailed_request = request("Backend Engineer", Some("Austin"));
        detailed_request.job_description = Some("Owns the billing APIs.".to_string());
        let detailed = analyze(&detailed_request);
        assert!(detailed.confidence > bare.confidence);
    }

    #[test]
    fn test_senior_requirements_include_leadership() {
        let analysis = analyze(&request("Senior Backend Engineer", None));
        assert!(analysis
            .requirements
            .iter()
            .any(|r| r.contains("mentoring")));
    }
}

//! Declarative option catalogs for the filter surface.
//!
//! Field and operator enumerations are static lookup tables (internal key
//! plus display label), not behavior. The keys are part of the external
//! contract: saved configurations reference them verbatim, so entries must
//! never be renamed or reordered.

use once_cell::sync::Lazy;

/// A selectable option: internal key plus human-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub label: &'static str,
    pub key: &'static str,
}

const fn opt(label: &'static str, key: &'static str) -> CatalogOption {
    CatalogOption { label, key }
}

/// Operators applicable to text-valued fields.
pub const TEXT_OPERATORS: &[CatalogOption] = &[
    opt("Equals", "="),
    opt("Not Equals", "!="),
    opt("Contains", "like"),
    opt("Not Contains", "not_like"),
    opt("In List", "in"),
    opt("Not In List", "not_in"),
];

/// Operators applicable to numeric-valued fields.
pub const NUMERIC_OPERATORS: &[CatalogOption] = &[
    opt("Equals", "="),
    opt("Not Equals", "!="),
    opt("Greater Than", ">"),
    opt("Greater Than or Equal", ">="),
    opt("Less Than", "<"),
    opt("Less Than or Equal", "<="),
    opt("Between", "between"),
];

/// Merged operator picker: text operators first, then the numeric operators
/// that are not already present. Order matters for saved configurations.
pub static ALL_OPERATORS: Lazy<Vec<CatalogOption>> = Lazy::new(|| {
    let mut merged: Vec<CatalogOption> = TEXT_OPERATORS.to_vec();
    merged.extend(
        NUMERIC_OPERATORS
            .iter()
            .filter(|op| !TEXT_OPERATORS.iter().any(|t| t.key == op.key))
            .copied(),
    );
    merged
});

/// People search filter fields.
pub const PEOPLE_FILTER_FIELDS: &[CatalogOption] = &[
    // Profile
    opt("First Name", "first_name"),
    opt("Last Name", "last_name"),
    opt("Profile Headline", "profile_headline"),
    opt("Summary", "summary"),
    opt("Profile Location", "profile_location"),
    opt("Profile Country", "profile_country"),
    opt("Profile Industry", "profile_industry"),
    opt("Follower Count", "follower_count"),
    opt("Keyword (Full-text)", "keyword"),
    // Current Job
    opt("Current Company", "current_company"),
    opt("Current Title", "current_title"),
    opt("Current Job Location", "current_job_location"),
    opt("Current Job Country", "current_job_country"),
    opt("Current Company Industry", "current_company_industry"),
    opt("Current Company Size", "current_company_size"),
    opt("Current Company ID", "current_company_id"),
    opt("Current Employment Type", "current_employment_type"),
    opt("Years in Current Position", "years_in_current_position"),
    opt("Years at Current Company", "years_at_current_company"),
    // Past Jobs
    opt("Past Company", "past_company"),
    opt("Past Title", "past_title"),
    opt("Past Job Location", "past_job_location"),
    opt("Past Job Country", "past_job_country"),
    opt("Past Company Industry", "past_company_industry"),
    opt("Past Company Size", "past_company_size"),
    opt("Past Company ID", "past_company_id"),
    opt("Past Employment Type", "past_employment_type"),
    opt("Years at Past Company", "years_at_past_company"),
    // Skills
    opt("Skill", "skill"),
    // Education
    opt("School", "school"),
    opt("Degree", "degree"),
    opt("Degree Level", "degree_level"),
    opt("Field of Study", "field_of_study"),
    // Languages
    opt("Language", "language"),
    opt("Language ISO", "language_iso"),
    opt("Language Proficiency", "language_proficiency"),
    // Certifications
    opt("Certification", "certification"),
    opt("Certification Authority", "certification_authority"),
    // Experience
    opt("Years of Experience", "years_of_experience"),
    opt("Number of Total Jobs", "num_total_jobs"),
    opt("Is Currently Employed", "is_currently_employed"),
];

/// Company search filter fields.
pub const COMPANY_FILTER_FIELDS: &[CatalogOption] = &[
    // Basic Info
    opt("Name", "name"),
    opt("Tagline", "tagline"),
    opt("Description", "description"),
    opt("Domain", "domain"),
    opt("Universal Name", "universal_name"),
    opt("Keyword (Full-text)", "keyword"),
    opt("Industry", "industry"),
    // Size
    opt("Employee Count", "employee_count"),
    // Headquarters
    opt("Country ISO Code", "country_iso_code"),
    opt("City", "city"),
    opt("Region", "region"),
    // Offices
    opt("Office Country", "office_country"),
    opt("Office City", "office_city"),
    opt("Office Region", "office_region"),
    // Growth
    opt("Employee Growth 1M (%)", "employee_growth_1m"),
    opt("Employee Growth 6M (%)", "employee_growth_6m"),
    opt("Employee Growth 12M (%)", "employee_growth_12m"),
    opt("Recent Hires Count", "recent_hires_count"),
    // Metadata
    opt("Founded Year", "founded_year"),
    opt("Company Type", "company_type"),
    opt("Follower Count", "follower_count"),
    opt("Page Verified", "page_verified"),
    opt("Category", "category"),
];

/// Look up the display label for a key within a catalog.
pub fn label_for(catalog: &[CatalogOption], key: &str) -> Option<&'static str> {
    catalog.iter().find(|o| o.key == key).map(|o| o.label)
}

/// Whether a catalog declares the given key.
pub fn contains(catalog: &[CatalogOption], key: &str) -> bool {
    catalog.iter().any(|o| o.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PEOPLE_FILTER_FIELDS.len(), 41);
        assert_eq!(COMPANY_FILTER_FIELDS.len(), 23);
        assert_eq!(TEXT_OPERATORS.len(), 6);
        assert_eq!(NUMERIC_OPERATORS.len(), 7);
    }

    #[test]
    fn test_merged_operators_deduplicated() {
        // = and != appear in both sub-catalogs but only once in the merge
        assert_eq!(ALL_OPERATORS.len(), 11);
        let eq_count = ALL_OPERATORS.iter().filter(|o| o.key == "=").count();
        assert_eq!(eq_count, 1);
        // text operators keep their position; numeric extras follow
        assert_eq!(ALL_OPERATORS[0].key, "=");
        assert_eq!(ALL_OPERATORS[5].key, "not_in");
        assert_eq!(ALL_OPERATORS[10].key, "between");
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(
            label_for(PEOPLE_FILTER_FIELDS, "current_title"),
            Some("Current Title")
        );
        assert_eq!(
            label_for(COMPANY_FILTER_FIELDS, "employee_count"),
            Some("Employee Count")
        );
        assert_eq!(label_for(PEOPLE_FILTER_FIELDS, "no_such_field"), None);
    }

    #[test]
    fn test_contains() {
        assert!(contains(PEOPLE_FILTER_FIELDS, "skill"));
        assert!(contains(COMPANY_FILTER_FIELDS, "founded_year"));
        assert!(!contains(COMPANY_FILTER_FIELDS, "skill"));
    }
}

//! External-contract compliance checks.
//!
//! Operation names, endpoint paths, parameter defaults and catalog keys
//! are consumed by saved configurations; these tests pin them down.

use dataforb2b_rs::catalog::{
    contains, label_for, ALL_OPERATORS, COMPANY_FILTER_FIELDS, NUMERIC_OPERATORS,
    PEOPLE_FILTER_FIELDS, TEXT_OPERATORS,
};
use dataforb2b_rs::{extract_request, ItemParameters, Operation};
use serde_json::json;

mod catalogs {
    use super::*;

    #[test]
    fn people_catalog_is_stable() {
        assert_eq!(PEOPLE_FILTER_FIELDS.len(), 41);
        assert_eq!(PEOPLE_FILTER_FIELDS[0].key, "first_name");
        assert_eq!(PEOPLE_FILTER_FIELDS[40].key, "is_currently_employed");
        assert!(contains(PEOPLE_FILTER_FIELDS, "years_at_past_company"));
        assert_eq!(
            label_for(PEOPLE_FILTER_FIELDS, "keyword"),
            Some("Keyword (Full-text)")
        );
    }

    #[test]
    fn company_catalog_is_stable() {
        assert_eq!(COMPANY_FILTER_FIELDS.len(), 23);
        assert_eq!(COMPANY_FILTER_FIELDS[0].key, "name");
        assert_eq!(COMPANY_FILTER_FIELDS[22].key, "category");
        assert_eq!(
            label_for(COMPANY_FILTER_FIELDS, "employee_growth_6m"),
            Some("Employee Growth 6M (%)")
        );
    }

    #[test]
    fn operator_catalogs_are_stable() {
        let text_keys: Vec<&str> = TEXT_OPERATORS.iter().map(|o| o.key).collect();
        assert_eq!(text_keys, vec!["=", "!=", "like", "not_like", "in", "not_in"]);

        let numeric_keys: Vec<&str> = NUMERIC_OPERATORS.iter().map(|o| o.key).collect();
        assert_eq!(numeric_keys, vec!["=", "!=", ">", ">=", "<", "<=", "between"]);

        let merged_keys: Vec<&str> = ALL_OPERATORS.iter().map(|o| o.key).collect();
        assert_eq!(
            merged_keys,
            vec!["=", "!=", "like", "not_like", "in", "not_in", ">", ">=", "<", "<=", "between"]
        );
    }
}

mod operations {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        let mapping: Vec<(&str, &str)> = Operation::ALL
            .iter()
            .map(|op| (op.as_str(), op.endpoint()))
            .collect();
        assert_eq!(
            mapping,
            vec![
                ("searchPeople", "/search/people"),
                ("searchCompanies", "/search/company"),
                ("agenticSearch", "/search/llm"),
                ("textToFilters", "/search/llm/filters"),
                ("enrichProfile", "/enrich/profile"),
                ("enrichCompany", "/enrich/company"),
            ]
        );
    }

    #[test]
    fn serde_names_match_wire_names() {
        for op in Operation::ALL {
            let serialized = serde_json::to_value(op).unwrap();
            assert_eq!(serialized, json!(op.as_str()));
        }
    }
}

mod parameter_surface {
    use super::*;

    #[test]
    fn saved_configuration_round_trips() {
        // A configuration exactly as a host would persist it.
        let items = ItemParameters::new(vec![json!({
            "resource": "search",
            "operation": "searchPeople",
            "filterLogic": "and",
            "peopleFilters": {
                "conditions": [
                    {"field": "current_company_size", "operator": "between",
                     "value": "50", "value2": "200"},
                    {"field": "skill", "operator": "in", "value": "rust, distributed systems"},
                ]
            },
            "count": 100,
            "offset": 200,
        })]);

        let descriptor = extract_request(&items, 0).unwrap().build();
        assert_eq!(
            descriptor.body,
            json!({
                "filters": {
                    "op": "and",
                    "conditions": [
                        {"field": "current_company_size", "op": "between",
                         "value": "50", "value2": "200"},
                        {"field": "skill", "op": "in",
                         "value": ["rust", "distributed systems"]},
                    ]
                },
                "count": 100,
                "offset": 200,
            })
        );
    }

    #[test]
    fn enrich_profile_parameter_names() {
        let items = ItemParameters::new(vec![json!({
            "operation": "enrichProfile",
            "profileIdentifier": "linkedin.com/in/jane",
            "enrichProfile": false,
            "enrichWorkEmail": true,
            "enrichPersonalEmail": true,
            "enrichPhone": false,
        })]);

        let descriptor = extract_request(&items, 0).unwrap().build();
        assert_eq!(
            descriptor.body,
            json!({
                "profile_identifier": "linkedin.com/in/jane",
                "enrich_profile": false,
                "enrich_work_email": true,
                "enrich_personal_email": true,
                "enrich_phone": false,
            })
        );
    }
}

//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid module, resource or provided set name
    pub fn entity_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_.-]{0,20}[a-z0-9]".prop_filter("Name must not read as YAML null", |s| s != "null")
    }

    /// Generate a name the built-in schema rejects
    pub fn invalid_entity_name() -> impl Strategy<Value = String> {
        "[a-z]{1,8}[ /:@][a-z]{1,8}"
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (0u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a valid `_schema-version` value
    pub fn schema_version() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("2.1".to_string()),
            Just("3".to_string()),
            Just("3.1".to_string()),
            Just("3.2.0".to_string()),
        ]
    }

    /// Generate a supported deployment platform
    pub fn platform() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("CF".to_string()),
            Just("NEO".to_string()),
            Just("XSA".to_string()),
        ]
    }

    /// Render a descriptor with one module per name
    pub fn descriptor_yaml(id: &str, version: &str, schema_version: &str, modules: &[String]) -> String {
        let mut yaml = format!("_schema-version: '{schema_version}'\nID: {id}\nversion: {version}\n");
        if !modules.is_empty() {
            yaml.push_str("modules:\n");
            for module in modules {
                yaml.push_str(&format!("  - name: {module}\n    type: html5\n"));
            }
        }
        yaml
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::config::schema::MTA_SCHEMA;
    use crate::core::schema::compile_schema_text;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        /// Generated descriptors pass the built-in schema
        #[test]
        fn prop_generated_descriptors_are_valid(
            id in entity_name(),
            version in semver_version(),
            schema_version in schema_version(),
            modules in proptest::collection::vec(entity_name(), 0..5),
        ) {
            let compiled = compile_schema_text(MTA_SCHEMA);
            let yaml = descriptor_yaml(&id, &version, &schema_version, &modules);
            let issues = compiled.validate(yaml.as_bytes()).unwrap();
            prop_assert!(issues.is_empty(), "{:?}\n{}", issues, yaml);
        }

        /// A bad module name yields exactly one pattern issue at its index
        #[test]
        fn prop_invalid_module_name_is_reported(
            bad in invalid_entity_name(),
            good in proptest::collection::vec(entity_name(), 0..3),
        ) {
            let mut modules = good.clone();
            modules.push(format!("'{bad}'"));
            let yaml = descriptor_yaml("demo", "1.0.0", "3.1", &modules);
            let compiled = compile_schema_text(MTA_SCHEMA);
            let issues = compiled.validate(yaml.as_bytes()).unwrap();
            prop_assert_eq!(issues.len(), 1);
            let expected_path = format!("modules[{}].name", good.len());
            prop_assert!(issues[0].message.contains(&expected_path), "{}", issues[0].message);
            prop_assert!(issues[0].message.contains("does not match"));
        }

        /// Supported platforms pass the enum check
        #[test]
        fn prop_supported_platforms_are_accepted(platforms in proptest::collection::vec(platform(), 1..4)) {
            let mut yaml = descriptor_yaml("demo", "1.0.0", "3.1", &["ui".to_string()]);
            yaml.push_str("    build-parameters:\n      supported-platforms:\n");
            for platform in &platforms {
                yaml.push_str(&format!("        - {platform}\n"));
            }
            let compiled = compile_schema_text(MTA_SCHEMA);
            let issues = compiled.validate(yaml.as_bytes()).unwrap();
            prop_assert!(issues.is_empty(), "{:?}", issues);
        }
    }
}

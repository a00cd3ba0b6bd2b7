//! Rendering of `{{VARIABLE}}` config templates.
//!
//! Substitution is a plain string replacement: no escaping is applied to
//! bound values, so callers must make sure a value is safe for the target
//! file format (a quote inside a mirror URL will produce invalid JSON).

use std::collections::HashMap;

use crate::types::template::ConfigTemplate;

/// Render a template against the given variable bindings.
///
/// Declared variables are substituted in declaration order; every literal
/// `{{name}}` occurrence is replaced with the bound value, or with the empty
/// string when the variable is unbound. Placeholder-looking text for names
/// the template does not declare is left untouched. There are no failure
/// modes.
pub fn generate(template: &ConfigTemplate, bindings: &HashMap<String, String>) -> String {
    let mut output = template.template.clone();
    for name in &template.variables {
        let value = bindings.get(name).map(String::as_str).unwrap_or("");
        output = output.replace(&placeholder(name), value);
    }
    output
}

/// The literal token a declared variable must appear as in template text.
pub(crate) fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::template::Platform;

    fn template(text: &str, variables: &[&str]) -> ConfigTemplate {
        ConfigTemplate {
            id: "daemon-test".to_string(),
            platform: Platform::Linux,
            description: String::new(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
            template: text.to_string(),
        }
    }

    fn bind(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let t = template("a={{X}} b={{X}} c={{Y}}", &["X", "Y"]);
        let out = generate(&t, &bind(&[("X", "1"), ("Y", "2")]));
        assert_eq!(out, "a=1 b=1 c=2");
    }

    #[test]
    fn test_surrounding_text_is_byte_identical() {
        let t = template(
            "{\n  \"registry-mirrors\": [\"{{MIRROR_URL}}\"]\n}\n",
            &["MIRROR_URL"],
        );
        let out = generate(&t, &bind(&[("MIRROR_URL", "https://example.com")]));
        assert_eq!(
            out,
            "{\n  \"registry-mirrors\": [\"https://example.com\"]\n}\n"
        );
    }

    #[test]
    fn test_unbound_variables_become_empty_strings() {
        let t = template("url={{MIRROR_URL}}", &["MIRROR_URL"]);
        let out = generate(&t, &HashMap::new());
        assert_eq!(out, "url=");
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_undeclared_placeholders_are_left_untouched() {
        let t = template("{{KNOWN}} and {{UNKNOWN}}", &["KNOWN"]);
        let out = generate(&t, &bind(&[("KNOWN", "yes"), ("UNKNOWN", "no")]));
        assert_eq!(out, "yes and {{UNKNOWN}}");
    }

    #[test]
    fn test_generate_is_idempotent_on_rendered_output() {
        let t = template("mirror: {{MIRROR_URL}}", &["MIRROR_URL"]);
        let bindings = bind(&[("MIRROR_URL", "https://example.com")]);
        let once = generate(&t, &bindings);

        let again = ConfigTemplate {
            template: once.clone(),
            ..t
        };
        assert_eq!(generate(&again, &bindings), once);
    }

    #[test]
    fn test_values_are_not_escaped() {
        // Documented limitation: a quote in the value breaks the JSON.
        let t = template("\"{{MIRROR_URL}}\"", &["MIRROR_URL"]);
        let out = generate(&t, &bind(&[("MIRROR_URL", "bad\"url")]));
        assert_eq!(out, "\"bad\"url\"");
    }
}

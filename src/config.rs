//! Board configuration.
//!
//! Identifies the markup the components attach to and the rules the entry
//! form enforces. Every field has a default matching the stock page, so a
//! partial document deserialises into a complete configuration.
//!
//! # Examples
//!
//! ```
//! use projectboard::config::BoardConfig;
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.host_id, "app");
//! assert_eq!(config.templates.project_list, "project-list");
//! ```

use serde::{Deserialize, Serialize};

use crate::validation::FormRules;

/// Template identifiers looked up in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateIds {
    /// Entry form template.
    pub project_input: String,
    /// Single work item template.
    pub single_project: String,
    /// Lane template.
    pub project_list: String,
}

impl Default for TemplateIds {
    fn default() -> Self {
        Self {
            project_input: "project-input".to_owned(),
            single_project: "single-project".to_owned(),
            project_list: "project-list".to_owned(),
        }
    }
}

impl TemplateIds {
    /// Returns the form, item and lane template ids, in that order.
    #[must_use]
    pub fn all(&self) -> [&str; 3] {
        [
            self.project_input.as_str(),
            self.single_project.as_str(),
            self.project_list.as_str(),
        ]
    }
}

/// Configuration shared by every board component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the element the form and lanes attach to.
    pub host_id: String,
    /// Template identifiers.
    pub templates: TemplateIds,
    /// Id assigned to the entry form element.
    pub form_element_id: String,
    /// Alert shown when the entry form rejects its input.
    pub invalid_input_message: String,
    /// Constraints applied by the entry form.
    pub form_rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host_id: "app".to_owned(),
            templates: TemplateIds::default(),
            form_element_id: "user-input".to_owned(),
            invalid_input_message: "Invalid input, please try again!".to_owned(),
            form_rules: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Replaces the entry form rules.
    #[must_use]
    pub fn with_form_rules(mut self, form_rules: FormRules) -> Self {
        self.form_rules = form_rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::BoardConfig;
    use rstest::rstest;

    #[rstest]
    fn partial_json_keeps_remaining_defaults() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"host_id": "board", "form_rules": {"description_min_length": 10}}"#,
        )
        .expect("valid configuration");

        assert_eq!(config.host_id, "board");
        assert_eq!(config.form_rules.description_min_length, 10);
        assert_eq!(config.form_rules.people_min, 1);
        assert_eq!(config.templates, BoardConfig::default().templates);
        assert_eq!(config.form_element_id, "user-input");
    }
}

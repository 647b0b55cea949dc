use std::collections::HashSet;

use super::context::TemplateContext;
use super::error::{TemplateError, TemplateResult};
use super::parser::{Placeholder, TemplateParser};

/// Template renderer that performs variable substitution
pub struct TemplateRenderer {
    parser: TemplateParser,
}

impl TemplateRenderer {
    /// Create a new template renderer
    pub fn new() -> TemplateResult<Self> {
        Ok(Self {
            parser: TemplateParser::new()?,
        })
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> TemplateResult<String> {
        let placeholders = self.parser.parse(template)?;

        if placeholders.is_empty() {
            return Ok(template.to_string());
        }

        // Validate that all variables exist in context
        self.validate_variables(&placeholders, context)?;

        // Replace placeholders with values
        self.substitute_variables(template, &placeholders, context)
    }

    /// Validate that all required variables exist in the context
    fn validate_variables(
        &self,
        placeholders: &[Placeholder],
        context: &TemplateContext,
    ) -> TemplateResult<()> {
        let mut missing_variables = Vec::new();

        for placeholder in placeholders {
            if !context.has(&placeholder.variable_name) {
                missing_variables.push(placeholder.variable_name.clone());
            }
        }

        if !missing_variables.is_empty() {
            // Remove duplicates and sort for consistent error messages
            let mut unique_missing: Vec<String> = missing_variables
                .into_iter()
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            unique_missing.sort();

            return Err(TemplateError::VariableNotFound(format!(
                "Variables not found: [{}]",
                unique_missing.join(", ")
            )));
        }

        Ok(())
    }

    /// Substitute variables with their values
    fn substitute_variables(
        &self,
        template: &str,
        placeholders: &[Placeholder],
        context: &TemplateContext,
    ) -> TemplateResult<String> {
        let mut result = template.to_string();

        // Sort placeholders by start position in reverse order
        // This ensures that we replace from right to left, preventing position shifts
        let mut sorted_placeholders = placeholders.to_vec();
        sorted_placeholders.sort_by(|a, b| b.start.cmp(&a.start));

        for placeholder in sorted_placeholders {
            let value = context.get_string(&placeholder.variable_name)?;

            // Replace the placeholder with the value
            result.replace_range(placeholder.start..placeholder.end, &value);
        }

        Ok(result)
    }

    /// Get all variable names required by a template
    pub fn get_required_variables(&self, template: &str) -> TemplateResult<Vec<String>> {
        self.parser.get_variable_names(template)
    }

    /// Check if a template is valid (all placeholders have correct syntax)
    pub fn validate_template(&self, template: &str) -> TemplateResult<()> {
        self.parser.parse(template)?;
        Ok(())
    }

    /// Check if template has any placeholders
    pub fn has_placeholders(&self, template: &str) -> bool {
        self.parser.has_placeholders(template)
    }

    /// Get detailed information about placeholders in a template
    pub fn analyze_template(&self, template: &str) -> TemplateResult<TemplateAnalysis> {
        let placeholders = self.parser.parse(template)?;
        let variable_names = self.parser.get_variable_names(template)?;

        Ok(TemplateAnalysis {
            total_placeholders: placeholders.len(),
            unique_variables: variable_names.len(),
            variable_names,
            placeholders,
        })
    }
}

/// Information about a template's structure
#[derive(Debug)]
pub struct TemplateAnalysis {
    /// Total number of placeholders (including duplicates)
    pub total_placeholders: usize,
    /// Number of unique variables
    pub unique_variables: usize,
    /// List of all unique variable names
    pub variable_names: Vec<String>,
    /// All placeholders found in the template
    pub placeholders: Vec<Placeholder>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new().expect("Failed to create default TemplateRenderer")
    }
}

/// High-level template API
pub struct Template;

impl Template {
    /// Render a template string with the given context
    pub fn render(template: &str, context: &TemplateContext) -> TemplateResult<String> {
        let renderer = TemplateRenderer::new()?;
        renderer.render(template, context)
    }

    /// Render a template with a quick context from key-value pairs
    pub fn render_simple<S: AsRef<str>>(template: &str, vars: &[(S, S)]) -> TemplateResult<String> {
        let mut context = TemplateContext::new();
        for (key, value) in vars {
            context.set(key.as_ref(), value.as_ref());
        }
        Self::render(template, &context)
    }

    /// Validate that a template has correct syntax
    pub fn validate(template: &str) -> TemplateResult<()> {
        let renderer = TemplateRenderer::new()?;
        renderer.validate_template(template)
    }

    /// Get all variable names required by a template
    pub fn get_variables(template: &str) -> TemplateResult<Vec<String>> {
        let renderer = TemplateRenderer::new()?;
        renderer.get_required_variables(template)
    }

    /// Get detailed analysis of a template
    pub fn analyze(template: &str) -> TemplateResult<TemplateAnalysis> {
        let renderer = TemplateRenderer::new()?;
        renderer.analyze_template(template)
    }
}

//! Form Filler - Read and fill existing PDF form fields
//!
//! This module provides `FormFiller` for programmatically filling
//! AcroForm fields in existing PDF documents.
//!
//! # Example
//!
//! ```no_run
//! use oxidize_pdf::operations::{PdfEditor, FormFiller};
//!
//! let mut editor = PdfEditor::open("form.pdf").unwrap();
//!
//! // List all form fields
//! let fields = FormFiller::list_fields(&editor).unwrap();
//! for field in &fields {
//!     println!("{}: {:?}", field.name, field.field_type);
//! }
//!
//! // Fill fields
//! FormFiller::set_text_field(&mut editor, "name", "John Doe").unwrap();
//! FormFiller::set_checkbox(&mut editor, "agree", true).unwrap();
//!
//! editor.save("filled_form.pdf").unwrap();
//! ```

use std::collections::HashMap;

/// Error type for form filling operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormFillerError {
    /// The PDF has no AcroForm (no interactive forms)
    #[error("PDF has no AcroForm - no interactive form fields")]
    NoAcroForm,

    /// The requested field was not found
    #[error("Field '{0}' not found in form")]
    FieldNotFound(String),

    /// Wrong field type for the operation
    #[error("Wrong field type: expected {expected:?}, got {got:?}")]
    WrongFieldType {
        /// Expected field type
        expected: FormFieldType,
        /// Actual field type
        got: FormFieldType,
    },

    /// Invalid option value for choice field
    #[error("Invalid option value '{value}' for field '{field}'")]
    InvalidOptionValue {
        /// Field name
        field: String,
        /// Invalid value
        value: String,
    },

    /// Field modification failed
    #[error("Failed to modify field: {0}")]
    ModificationFailed(String),
}

/// Result type for form filling operations
pub type FormFillerResult<T> = Result<T, FormFillerError>;

/// Type of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldType {
    /// Text input field
    Text,
    /// Checkbox field
    Checkbox,
    /// Radio button group
    Radio,
    /// Dropdown (combo box) field
    Dropdown,
    /// List box field
    ListBox,
    /// Push button (no value)
    Button,
    /// Digital signature field
    Signature,
    /// Unknown field type
    Unknown,
}

impl Default for FormFieldType {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Information about a form field
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    /// Field name (T entry)
    pub name: String,
    /// Type of field
    pub field_type: FormFieldType,
    /// Current value (if any)
    pub current_value: Option<String>,
    /// Available options for choice fields
    pub options: Vec<String>,
    /// Whether the field is read-only
    pub read_only: bool,
    /// Whether the field is required
    pub required: bool,
}

impl FormFieldInfo {
    /// Create a new FormFieldInfo
    pub fn new(name: impl Into<String>, field_type: FormFieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            current_value: None,
            options: Vec::new(),
            read_only: false,
            required: false,
        }
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.current_value = Some(value.into());
        self
    }

    /// Set the options
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Set read-only flag
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set required flag
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Options for form filling behavior
#[derive(Debug, Clone)]
pub struct FormFillerOptions {
    /// Whether to flatten the form (make it non-editable) after filling
    pub flatten: bool,
    /// Whether to fail on missing fields when using fill_all
    pub strict: bool,
    /// Whether to generate appearances (false = use NeedAppearances flag)
    pub generate_appearances: bool,
}

impl Default for FormFillerOptions {
    fn default() -> Self {
        Self {
            flatten: false,
            strict: false,
            generate_appearances: false,
        }
    }
}

impl FormFillerOptions {
    /// Enable flattening after fill
    pub fn with_flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// Enable strict mode (fail on missing fields)
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Enable appearance generation
    pub fn with_generate_appearances(mut self) -> Self {
        self.generate_appearances = true;
        self
    }
}

/// Form filler for reading and filling existing PDF forms
///
/// This struct provides static methods for interacting with form fields
/// in a PDF document loaded via `PdfEditor`.
pub struct FormFiller;

impl FormFiller {
    /// List all form fields in the PDF
    ///
    /// Returns information about each field including name, type, and current value.
    pub fn list_fields(editor: &super::PdfEditor) -> FormFillerResult<Vec<FormFieldInfo>> {
        // Check if document has pending form fields
        if editor.pending_form_fields.is_empty() {
            // For now, return empty vec for PDFs without forms
            // This will be enhanced to parse existing AcroForm
            Ok(Vec::new())
        } else {
            Ok(editor.pending_form_fields.clone())
        }
    }

    /// Set the value of a text field
    pub fn set_text_field(
        editor: &mut super::PdfEditor,
        field_name: &str,
        value: &str,
    ) -> FormFillerResult<()> {
        // Find the field
        let field_idx = editor
            .pending_form_fields
            .iter()
            .position(|f| f.name == field_name);

        match field_idx {
            Some(idx) => {
                let field = &editor.pending_form_fields[idx];
                if field.field_type != FormFieldType::Text {
                    return Err(FormFillerError::WrongFieldType {
                        expected: FormFieldType::Text,
                        got: field.field_type,
                    });
                }

                // Update the value
                editor.pending_form_fields[idx].current_value = Some(value.to_string());
                editor
                    .pending_form_updates
                    .push((field_name.to_string(), value.to_string()));
                Ok(())
            }
            None => Err(FormFillerError::FieldNotFound(field_name.to_string())),
        }
    }

    /// Set the value of a checkbox field
    pub fn set_checkbox(
        editor: &mut super::PdfEditor,
        field_name: &str,
        checked: bool,
    ) -> FormFillerResult<()> {
        let field_idx = editor
            .pending_form_fields
            .iter()
            .position(|f| f.name == field_name);

        match field_idx {
            Some(idx) => {
                let field = &editor.pending_form_fields[idx];
                if field.field_type != FormFieldType::Checkbox {
                    return Err(FormFillerError::WrongFieldType {
                        expected: FormFieldType::Checkbox,
                        got: field.field_type,
                    });
                }

                let value = if checked { "Yes" } else { "Off" };
                editor.pending_form_fields[idx].current_value = Some(value.to_string());
                editor
                    .pending_form_updates
                    .push((field_name.to_string(), value.to_string()));
                Ok(())
            }
            None => Err(FormFillerError::FieldNotFound(field_name.to_string())),
        }
    }

    /// Set the selection of a dropdown field
    pub fn set_dropdown(
        editor: &mut super::PdfEditor,
        field_name: &str,
        value: &str,
    ) -> FormFillerResult<()> {
        let field_idx = editor
            .pending_form_fields
            .iter()
            .position(|f| f.name == field_name);

        match field_idx {
            Some(idx) => {
                let field = &editor.pending_form_fields[idx];
                if field.field_type != FormFieldType::Dropdown {
                    return Err(FormFillerError::WrongFieldType {
                        expected: FormFieldType::Dropdown,
                        got: field.field_type,
                    });
                }

                // Validate option exists
                if !field.options.contains(&value.to_string()) {
                    return Err(FormFillerError::InvalidOptionValue {
                        field: field_name.to_string(),
                        value: value.to_string(),
                    });
                }

                editor.pending_form_fields[idx].current_value = Some(value.to_string());
                editor
                    .pending_form_updates
                    .push((field_name.to_string(), value.to_string()));
                Ok(())
            }
            None => Err(FormFillerError::FieldNotFound(field_name.to_string())),
        }
    }

    /// Get the current value of a field
    pub fn get_field_value(
        editor: &super::PdfEditor,
        field_name: &str,
    ) -> FormFillerResult<Option<String>> {
        let field = editor
            .pending_form_fields
            .iter()
            .find(|f| f.name == field_name);

        match field {
            Some(f) => Ok(f.current_value.clone()),
            None => Err(FormFillerError::FieldNotFound(field_name.to_string())),
        }
    }

    /// Fill multiple fields at once using a HashMap
    ///
    /// Returns the number of fields successfully filled.
    pub fn fill_all(
        editor: &mut super::PdfEditor,
        values: HashMap<String, String>,
        options: &FormFillerOptions,
    ) -> FormFillerResult<usize> {
        let mut filled_count = 0;

        for (field_name, value) in values {
            // Find field
            let field_idx = editor
                .pending_form_fields
                .iter()
                .position(|f| f.name == field_name);

            match field_idx {
                Some(idx) => {
                    editor.pending_form_fields[idx].current_value = Some(value.clone());
                    editor.pending_form_updates.push((field_name, value));
                    filled_count += 1;
                }
                None => {
                    if options.strict {
                        return Err(FormFillerError::FieldNotFound(field_name));
                    }
                    // In lenient mode, skip missing fields
                }
            }
        }

        Ok(filled_count)
    }

    /// Flatten the form (convert fields to static content)
    ///
    /// After flattening, the form fields are no longer editable.
    pub fn flatten(editor: &mut super::PdfEditor) -> FormFillerResult<()> {
        editor.form_flattened = true;
        Ok(())
    }
}

//! Page label tree structure for managing page numbering

use crate::objects::{Array, Dictionary, Object};
use crate::page_labels::PageLabel;
use std::collections::BTreeMap;

/// Page label tree - manages custom page numbering for a document
#[derive(Debug, Clone)]
pub struct PageLabelTree {
    /// Page label ranges, sorted by starting page
    ranges: BTreeMap<u32, PageLabel>,
}

impl PageLabelTree {
    /// Create a new empty page label tree
    pub fn new() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// Add a page label range
    pub fn add_range(&mut self, start_page: u32, label: PageLabel) {
        self.ranges.insert(start_page, label);
    }

    /// Get the page label for a specific page
    pub fn get_label(&self, page_index: u32) -> Option<String> {
        // Find the applicable range
        let mut applicable_range = None;
        let mut range_start = 0;

        for (&start, label) in &self.ranges {
            if start <= page_index {
                applicable_range = Some(label);
                range_start = start;
            } else {
                break;
            }
        }

        // Format the label if found
        applicable_range.map(|label| {
            let offset = page_index - range_start;
            label.format_label(offset)
        })
    }

    /// Get all page labels for a document
    pub fn get_all_labels(&self, total_pages: u32) -> Vec<String> {
        (0..total_pages)
            .map(|i| self.get_label(i).unwrap_or_else(|| (i + 1).to_string()))
            .collect()
    }

    /// Convert to PDF number tree dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        // Create nums array [key1 val1 key2 val2 ...]
        let mut nums = Array::new();

        for (&start_page, label) in &self.ranges {
            nums.push(Object::Integer(start_page as i64));
            nums.push(Object::Dictionary(label.to_dict()));
        }

        dict.set("Nums", Object::Array(nums.into()));

        dict
    }

    /// Create from PDF dictionary
    pub fn from_dict(dict: &Dictionary) -> Option<Self> {
        let nums_array = match dict.get("Nums")? {
            Object::Array(arr) => arr,
            _ => return None,
        };
        let mut tree = Self::new();

        // Parse pairs of [page_index, label_dict]
        let elements: Vec<&Object> = nums_array.iter().collect();
        for i in (0..elements.len()).step_by(2) {
            if i + 1 >= elements.len() {
                break;
            }

            let page_index = match elements[i] {
                Object::Integer(n) => *n as u32,
                _ => continue,
            };
            let label_dict = match elements[i + 1] {
                Object::Dictionary(d) => d,
                _ => continue,
            };

            // Parse label from dictionary
            let style = if let Some(Object::Name(type_name)) = label_dict.get("Type") {
                match type_name.as_str() {
                    "D" => PageLabelStyle::DecimalArabic,
                    "r" => PageLabelStyle::UppercaseRoman,
                    "R" => PageLabelStyle::LowercaseRoman,
                    "A" => PageLabelStyle::UppercaseLetters,
                    "a" => PageLabelStyle::LowercaseLetters,
                    _ => PageLabelStyle::None,
                }
            } else {
                PageLabelStyle::None
            };

            let mut label = PageLabel::new(style);

            if let Some(Object::String(prefix)) = label_dict.get("P") {
                label = label.with_prefix(prefix);
            }

            if let Some(Object::Integer(start)) = label_dict.get("St") {
                label = label.starting_at(*start as u32);
            }

            tree.add_range(page_index, label);
        }

        Some(tree)
    }
}

impl Default for PageLabelTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating page label trees
pub struct PageLabelBuilder {
    tree: PageLabelTree,
    current_page: u32,
}

impl Default for PageLabelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLabelBuilder {
    /// Create a new page label builder
    pub fn new() -> Self {
        Self {
            tree: PageLabelTree::new(),
            current_page: 0,
        }
    }

    /// Add a range with a specific label
    pub fn add_range(mut self, num_pages: u32, label: PageLabel) -> Self {
        self.tree.add_range(self.current_page, label);
        self.current_page += num_pages;
        self
    }

    /// Add pages with decimal numbering
    pub fn decimal_pages(self, num_pages: u32) -> Self {
        self.add_range(num_pages, PageLabel::decimal())
    }

    /// Add pages with roman numbering
    pub fn roman_pages(self, num_pages: u32, uppercase: bool) -> Self {
        let label = if uppercase {
            PageLabel::roman_uppercase()
        } else {
            PageLabel::roman_lowercase()
        };
        self.add_range(num_pages, label)
    }

    /// Add pages with letter numbering
    pub fn letter_pages(self, num_pages: u32, uppercase: bool) -> Self {
        let label = if uppercase {
            PageLabel::letters_uppercase()
        } else {
            PageLabel::letters_lowercase()
        };
        self.add_range(num_pages, label)
    }

    /// Add pages with only a prefix
    pub fn prefix_pages(self, num_pages: u32, prefix: impl Into<String>) -> Self {
        self.add_range(num_pages, PageLabel::prefix_only(prefix))
    }

    /// Build the page label tree
    pub fn build(self) -> PageLabelTree {
        self.tree
    }
}

// Import PageLabelStyle from the other module
use crate::page_labels::PageLabelStyle;

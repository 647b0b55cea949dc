//! LLM-optimized export formats for PDF documents
//!
//! This module provides utilities to export PDF content in formats optimized for
//! Large Language Model (LLM) processing, including Markdown, JSON, and contextual formats.
//!
//! # Example
//!
//! ```no_run
//! use oxidize_pdf::ai::{MarkdownExporter, MarkdownOptions};
//!
//! # fn main() -> oxidize_pdf::Result<()> {
//! let text = "Hello, world! This is a PDF document.";
//! let markdown = MarkdownExporter::export_text(text)?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```

use crate::Result;

#[cfg(feature = "semantic")]
use serde_json::{json, Value};

#[cfg(feature = "semantic")]
use super::chunking::DocumentChunk;

/// Metadata about a PDF document for export
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,

    /// Total number of pages
    pub page_count: usize,

    /// Creation date (ISO 8601 format recommended)
    pub created_at: Option<String>,

    /// Author name
    pub author: Option<String>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: "Untitled Document".to_string(),
            page_count: 0,
            created_at: None,
            author: None,
        }
    }
}

/// Configuration options for Markdown export
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Whether to include metadata headers (YAML frontmatter)
    pub include_metadata: bool,

    /// Whether to include page number markers
    pub include_page_numbers: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            include_page_numbers: true,
        }
    }
}

/// Exporter for converting PDF content to Markdown format
///
/// Markdown is a lightweight markup language that's highly readable by both humans
/// and LLMs, making it ideal for document processing pipelines.
///
/// # Example
///
/// ```no_run
/// use oxidize_pdf::ai::{MarkdownExporter, MarkdownOptions};
///
/// # fn main() -> oxidize_pdf::Result<()> {
/// let exporter = MarkdownExporter::new(MarkdownOptions::default());
/// let markdown = MarkdownExporter::export_text("Hello, world!")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    options: MarkdownOptions,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with the given options
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the export process
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::{MarkdownExporter, MarkdownOptions};
    ///
    /// let exporter = MarkdownExporter::new(MarkdownOptions {
    ///     include_metadata: true,
    ///     include_page_numbers: false,
    /// });
    /// ```
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Create a new Markdown exporter with default options
    pub fn default() -> Self {
        Self::new(MarkdownOptions::default())
    }

    /// Export text using the configured options
    ///
    /// This method respects the exporter's options for metadata and page numbers.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content to export
    ///
    /// # Returns
    ///
    /// A Markdown-formatted string
    pub fn export(&self, text: &str) -> Result<String> {
        if self.options.include_metadata {
            // For now, export with basic header
            // Will be enhanced in future phases
            Self::export_text(text)
        } else {
            Ok(text.to_string())
        }
    }

    /// Export plain text to Markdown format
    ///
    /// This is the simplest export method, converting raw text to a basic
    /// Markdown document with a title header.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content to export
    ///
    /// # Returns
    ///
    /// A Markdown-formatted string
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::MarkdownExporter;
    ///
    /// let text = "This is a sample document.";
    /// let markdown = MarkdownExporter::export_text(text).unwrap();
    /// assert!(markdown.contains("# Document"));
    /// assert!(markdown.contains("This is a sample document."));
    /// ```
    pub fn export_text(text: &str) -> Result<String> {
        // Phase 1: Simple conversion with basic header
        let mut output = String::new();
        output.push_str("# Document\n\n");
        output.push_str(text);
        Ok(output)
    }

    /// Export text with metadata as YAML frontmatter
    ///
    /// This adds a YAML header to the Markdown document with metadata like
    /// title, page count, author, and creation date.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content to export
    /// * `metadata` - Document metadata to include
    ///
    /// # Returns
    ///
    /// A Markdown-formatted string with YAML frontmatter
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::{MarkdownExporter, DocumentMetadata};
    ///
    /// let metadata = DocumentMetadata {
    ///     title: "My Document".to_string(),
    ///     page_count: 5,
    ///     created_at: Some("2025-10-13".to_string()),
    ///     author: Some("John Doe".to_string()),
    /// };
    ///
    /// let markdown = MarkdownExporter::export_with_metadata("Content here", &metadata).unwrap();
    /// assert!(markdown.contains("title: My Document"));
    /// assert!(markdown.contains("pages: 5"));
    /// ```
    pub fn export_with_metadata(text: &str, metadata: &DocumentMetadata) -> Result<String> {
        let mut output = String::new();

        // YAML frontmatter
        output.push_str("---\n");

        // Escape title if it contains special characters
        let escaped_title = if metadata.title.contains(':') || metadata.title.contains('#') {
            format!("\"{}\"", metadata.title.replace('"', "\\\""))
        } else {
            metadata.title.clone()
        };

        output.push_str(&format!("title: {}\n", escaped_title));
        output.push_str(&format!("pages: {}\n", metadata.page_count));

        if let Some(ref created) = metadata.created_at {
            output.push_str(&format!("created: {}\n", created));
        }

        if let Some(ref author) = metadata.author {
            let escaped_author = if author.contains(':') {
                format!("\"{}\"", author.replace('"', "\\\""))
            } else {
                author.clone()
            };
            output.push_str(&format!("author: {}\n", escaped_author));
        }

        output.push_str("---\n\n");

        // Content
        output.push_str(&format!("# {}\n\n", metadata.title));
        output.push_str(text);

        Ok(output)
    }

    /// Export multi-page text with page break markers
    ///
    /// This method creates a Markdown document with clear page boundaries,
    /// making it easy for LLMs to understand document structure.
    ///
    /// # Arguments
    ///
    /// * `page_texts` - Vector of (page_number, text) tuples (1-indexed)
    ///
    /// # Returns
    ///
    /// A Markdown-formatted string with page markers
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::MarkdownExporter;
    ///
    /// let pages = vec![
    ///     (1, "Page 1 content".to_string()),
    ///     (2, "Page 2 content".to_string()),
    ///     (3, "Page 3 content".to_string()),
    /// ];
    ///
    /// let markdown = MarkdownExporter::export_with_pages(&pages).unwrap();
    /// assert!(markdown.contains("**Page 1**"));
    /// assert!(markdown.contains("**Page 2**"));
    /// ```
    pub fn export_with_pages(page_texts: &[(usize, String)]) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Document\n\n");

        for (i, (page_num, text)) in page_texts.iter().enumerate() {
            if i > 0 {
                // Add page break separator
                output.push_str("\n\n---\n\n");
            }

            output.push_str(&format!("**Page {}**\n\n", page_num));
            output.push_str(text);
        }

        Ok(output)
    }

    /// Export multi-page text with metadata and page breaks
    ///
    /// Combines metadata frontmatter with page-by-page content.
    ///
    /// # Arguments
    ///
    /// * `page_texts` - Vector of (page_number, text) tuples (1-indexed)
    /// * `metadata` - Document metadata
    ///
    /// # Returns
    ///
    /// A Markdown-formatted string with YAML frontmatter and page markers
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::{MarkdownExporter, DocumentMetadata};
    ///
    /// let metadata = DocumentMetadata {
    ///     title: "Multi-Page Doc".to_string(),
    ///     page_count: 2,
    ///     created_at: None,
    ///     author: None,
    /// };
    ///
    /// let pages = vec![
    ///     (1, "First page".to_string()),
    ///     (2, "Second page".to_string()),
    /// ];
    ///
    /// let markdown = MarkdownExporter::export_with_metadata_and_pages(&pages, &metadata).unwrap();
    /// assert!(markdown.contains("pages: 2"));
    /// assert!(markdown.contains("**Page 1**"));
    /// ```
    pub fn export_with_metadata_and_pages(
        page_texts: &[(usize, String)],
        metadata: &DocumentMetadata,
    ) -> Result<String> {
        let mut output = String::new();

        // YAML frontmatter
        output.push_str("---\n");

        let escaped_title = if metadata.title.contains(':') || metadata.title.contains('#') {
            format!("\"{}\"", metadata.title.replace('"', "\\\""))
        } else {
            metadata.title.clone()
        };

        output.push_str(&format!("title: {}\n", escaped_title));
        output.push_str(&format!("pages: {}\n", metadata.page_count));

        if let Some(ref created) = metadata.created_at {
            output.push_str(&format!("created: {}\n", created));
        }

        if let Some(ref author) = metadata.author {
            let escaped_author = if author.contains(':') {
                format!("\"{}\"", author.replace('"', "\\\""))
            } else {
                author.clone()
            };
            output.push_str(&format!("author: {}\n", escaped_author));
        }

        output.push_str("---\n\n");

        // Title
        output.push_str(&format!("# {}\n\n", metadata.title));

        // Pages
        for (i, (page_num, text)) in page_texts.iter().enumerate() {
            if i > 0 {
                output.push_str("\n\n---\n\n");
            }

            output.push_str(&format!("**Page {}**\n\n", page_num));
            output.push_str(text);
        }

        Ok(output)
    }
}

/// Configuration options for JSON export
#[cfg(feature = "semantic")]
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Whether to pretty-print the JSON output
    pub pretty_print: bool,

    /// Whether to include chunk information
    pub include_chunks: bool,
}

#[cfg(feature = "semantic")]
impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            pretty_print: true,
            include_chunks: false,
        }
    }
}

/// Exporter for converting PDF content to JSON format
///
/// JSON is a structured format that's easy to parse programmatically,
/// making it ideal for feeding PDF content into data pipelines and LLM APIs.
///
/// # Example
///
/// ```no_run
/// use oxidize_pdf::ai::{JsonExporter, JsonOptions};
///
/// # fn main() -> oxidize_pdf::Result<()> {
/// let exporter = JsonExporter::new(JsonOptions::default());
/// let json = JsonExporter::export_simple("Hello, world!")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "semantic")]
#[derive(Debug, Clone)]
pub struct JsonExporter {
    options: JsonOptions,
}

#[cfg(feature = "semantic")]
impl JsonExporter {
    /// Create a new JSON exporter with the given options
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the export process
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::{JsonExporter, JsonOptions};
    ///
    /// let exporter = JsonExporter::new(JsonOptions {
    ///     pretty_print: true,
    ///     include_chunks: false,
    /// });
    /// ```
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Create a new JSON exporter with default options
    pub fn default() -> Self {
        Self::new(JsonOptions::default())
    }

    /// Export text using the configured options
    ///
    /// This method respects the exporter's options for formatting.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content to export
    ///
    /// # Returns
    ///
    /// A JSON-formatted string
    pub fn export(&self, text: &str) -> Result<String> {
        let doc = json!({
            "type": "document",
            "content": text
        });

        if self.options.pretty_print {
            serde_json::to_string_pretty(&doc)
                .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
        } else {
            serde_json::to_string(&doc)
                .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
        }
    }

    /// Export plain text to simple JSON format
    ///
    /// This is the simplest export method, converting raw text to a basic
    /// JSON document structure.
    ///
    /// # Arguments
    ///
    /// * `text` - The text content to export
    ///
    /// # Returns
    ///
    /// A pretty-printed JSON string
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::JsonExporter;
    ///
    /// let text = "This is a sample document.";
    /// let json = JsonExporter::export_simple(text).unwrap();
    /// assert!(json.contains("\"type\": \"document\""));
    /// assert!(json.contains("This is a sample document."));
    /// ```
    pub fn export_simple(text: &str) -> Result<String> {
        let doc = json!({
            "type": "document",
            "content": text
        });
        serde_json::to_string_pretty(&doc)
            .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
    }

    /// Export text with metadata
    ///
    /// # Arguments
    ///
    /// * `text` - The text content
    /// * `metadata` - Document metadata
    ///
    /// # Returns
    ///
    /// A JSON string with metadata and content
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::{JsonExporter, DocumentMetadata};
    ///
    /// let metadata = DocumentMetadata {
    ///     title: "My Document".to_string(),
    ///     page_count: 5,
    ///     created_at: Some("2025-10-13".to_string()),
    ///     author: Some("John Doe".to_string()),
    /// };
    ///
    /// let json = JsonExporter::export_with_metadata("Content here", &metadata).unwrap();
    /// assert!(json.contains("\"title\": \"My Document\""));
    /// ```
    pub fn export_with_metadata(text: &str, metadata: &DocumentMetadata) -> Result<String> {
        let mut meta_obj = json!({
            "title": metadata.title,
            "page_count": metadata.page_count
        });

        if let Some(ref created) = metadata.created_at {
            meta_obj["created_at"] = json!(created);
        }

        if let Some(ref author) = metadata.author {
            meta_obj["author"] = json!(author);
        }

        let doc = json!({
            "type": "document",
            "metadata": meta_obj,
            "content": text
        });

        serde_json::to_string_pretty(&doc)
            .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
    }

    /// Export multi-page document to JSON
    ///
    /// # Arguments
    ///
    /// * `page_texts` - Vector of (page_number, text) tuples
    ///
    /// # Returns
    ///
    /// A JSON string with page-by-page structure
    ///
    /// # Example
    ///
    /// ```
    /// use oxidize_pdf::ai::JsonExporter;
    ///
    /// let pages = vec![
    ///     (1, "Page 1 content".to_string()),
    ///     (2, "Page 2 content".to_string()),
    /// ];
    ///
    /// let json = JsonExporter::export_pages(&pages).unwrap();
    /// assert!(json.contains("\"page_number\": 1"));
    /// assert!(json.contains("\"page_number\": 2"));
    /// ```
    pub fn export_pages(page_texts: &[(usize, String)]) -> Result<String> {
        let pages: Vec<Value> = page_texts
            .iter()
            .map(|(page_num, text)| {
                json!({
                    "page_number": page_num,
                    "content": text
                })
            })
            .collect();

        let doc = json!({
            "type": "document",
            "page_count": page_texts.len(),
            "pages": pages
        });

        serde_json::to_string_pretty(&doc)
            .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
    }

    /// Export document chunks to JSON format
    ///
    /// This method is ideal for RAG (Retrieval Augmented Generation) pipelines
    /// where you need structured chunks with metadata for embedding and retrieval.
    ///
    /// Each chunk includes:
    /// - Content text
    /// - Token count
    /// - Page numbers where the chunk appears
    /// - Position metadata (character offsets, page range)
    /// - Confidence score
    /// - Whether sentence boundaries were respected
    ///
    /// # Arguments
    ///
    /// * `chunks` - Vector of document chunks from DocumentChunker
    ///
    /// # Returns
    ///
    /// A JSON string with structured chunk data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oxidize_pdf::ai::{DocumentChunker, JsonExporter};
    ///
    /// # fn main() -> oxidize_pdf::Result<()> {
    /// let chunker = DocumentChunker::new(512, 50);
    /// let chunks = chunker.chunk_text("Long document text...")?;
    /// let json = JsonExporter::export_with_chunks(&chunks)?;
    /// println!("{}", json);
    /// # Ok(())
    /// # }
    /// ```
    pub fn export_with_chunks(chunks: &[DocumentChunk]) -> Result<String> {
        let chunk_objects: Vec<Value> = chunks
            .iter()
            .map(|chunk| {
                json!({
                    "id": chunk.id,
                    "content": chunk.content,
                    "tokens": chunk.tokens,
                    "page_numbers": chunk.page_numbers,
                    "chunk_index": chunk.chunk_index,
                    "metadata": {
                        "position": {
                            "start_char": chunk.metadata.position.start_char,
                            "end_char": chunk.metadata.position.end_char,
                            "first_page": chunk.metadata.position.first_page,
                            "last_page": chunk.metadata.position.last_page
                        },
                        "confidence": chunk.metadata.confidence,
                        "sentence_boundary_respected": chunk.metadata.sentence_boundary_respected
                    }
                })
            })
            .collect();

        let doc = json!({
            "type": "chunked_document",
            "chunk_count": chunks.len(),
            "chunks": chunk_objects
        });

        serde_json::to_string_pretty(&doc)
            .map_err(|e| crate::error::PdfError::SerializationError(e.to_string()))
    }
}

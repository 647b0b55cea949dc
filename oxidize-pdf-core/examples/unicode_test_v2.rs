//! Example demonstrating Unicode text support with custom fonts - Version 2
//! This version properly uses TrueType fonts with Identity-H encoding

use oxidize_pdf::{Color, CustomFont, Document, FontManager, Page, Result};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("Creating PDF with full Unicode support...");

    // Create a new document
    let mut document = Document::new();
    document.set_title("Unicode Test PDF v2");
    document.set_author("Oxidize PDF");

    // Create a font manager and load a TrueType font
    let mut font_manager = FontManager::new();

    // Try to load a system font that supports Unicode
    let font_paths = vec![
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
    ];

    let mut font_loaded = false;
    for path in font_paths {
        if std::path::Path::new(path).exists() {
            println!("Loading font from: {}", path);
            match CustomFont::load_truetype_font(path) {
                Ok(font) => {
                    let font_name = font_manager.register_font(font)?;
                    println!("Font registered as: {}", font_name);
                    font_loaded = true;
                    break;
                }
                Err(e) => {
                    println!("Failed to load font from {}: {}", path, e);
                }
            }
        }
    }

    if !font_loaded {
        eprintln!("No Unicode-capable fonts found!");
        eprintln!("Please install Arial or another TrueType font.");
        return Err(oxidize_pdf::PdfError::InvalidStructure(
            "No fonts available".to_string(),
        ));
    }

    // Create a page
    let mut page = Page::a4();

    // Get the graphics context and set the font manager
    let graphics = page.graphics();
    graphics.set_font_manager(Arc::new(font_manager));

    // Set font and draw text with Unicode characters
    graphics.set_custom_font("F1", 16.0);
    graphics.set_fill_color(Color::black());

    // Test various Unicode characters - now using draw_text_unicode for full support
    let test_texts = vec![
        ("English:", "Hello, World!"),
        ("Spanish:", "Â¡Hola! Â¿CÃ³mo estÃ¡s? AÃ±adir niÃ±o"),
        ("French:", "Bonjour! Comment Ã§a va? Ã‰lÃ¨ve, crÃ¨me brÃ»lÃ©e"),
        ("German:", "Guten Tag! Ãœber, schÃ¶n, grÃ¶ÃŸer"),
        ("Portuguese:", "OlÃ¡! Como vocÃª estÃ¡? SÃ£o Paulo, coraÃ§Ã£o"),
        ("Italian:", "Ciao! Come stai? CaffÃ¨, cittÃ , perchÃ©"),
    ];

    let mut y_position = 750.0;

    // Draw Latin text with draw_text_hex (single-byte encoding)
    for (label, text) in &test_texts {
        graphics.draw_text(label, 50.0, y_position)?;
        graphics.draw_text_hex(text, 150.0, y_position)?;
        y_position -= 30.0;
    }

    // Now test extended Unicode with draw_text_unicode (UTF-16BE encoding)
    y_position -= 20.0;
    graphics.draw_text("Extended Unicode:", 50.0, y_position)?;
    y_position -= 30.0;

    let unicode_texts = vec![
        ("Symbols:", "Â© Â® â„¢ â‚¬ Â£ Â¥ Â§ Â¶ â€  â€¡ â€¢ â€¦ Â° Â± Ã— Ã·"),
        ("Math:", "âˆ‘ âˆ âˆ« âˆš âˆ â‰ˆ â‰  â‰¤ â‰¥ Â± âˆ“"),
        ("Arrows:", "â† â†’ â†‘ â†“ â†” â†• â‡ â‡’ â‡‘ â‡“ â‡” â‡•"),
        ("Checkboxes:", "â˜ â˜‘ â˜’ âœ“ âœ— âœ” âœ˜"),
        ("Greek:", "Î‘ Î’ Î“ Î” Î• Î– Î— Î˜ Î± Î² Î³ Î´ Îµ Î¶ Î· Î¸"),
        ("Cyrillic:", "Ğ Ğ‘ Ğ’ Ğ“ Ğ” Ğ• Ğ– Ğ— Ğ° Ğ± Ğ² Ğ³ Ğ´ Ğµ Ğ¶ Ğ·"),
        ("Japanese:", "ã‚ ã„ ã† ãˆ ãŠ ã‚¢ ã‚¤ ã‚¦ ã‚¨ ã‚ª æ¼¢å­—"),
        ("Emoji:", "ğŸ˜€ ğŸ˜ ğŸ˜‚ ğŸ¤£ ğŸ˜ƒ ğŸ˜„ ğŸ˜… ğŸ˜†"),
    ];

    for (label, text) in unicode_texts {
        graphics.draw_text(label, 50.0, y_position)?;
        graphics.draw_text_unicode(text, 150.0, y_position)?;
        y_position -= 30.0;
    }

    // Add the page to the document
    document.add_page(page);

    // Save the document
    let output_path = "unicode_test_v2.pdf";
    document.save(output_path)?;

    println!("PDF saved to: {}", output_path);
    println!("Please open the PDF to verify Unicode support.");
    println!("\nNote: Characters will only display correctly if the loaded font");
    println!("contains glyphs for them. Arial Unicode has extensive coverage.");

    Ok(())
}

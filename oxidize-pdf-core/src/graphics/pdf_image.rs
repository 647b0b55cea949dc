//! Image support for PDF generation
//!
//! Currently supports:
//! - JPEG images

use crate::objects::{Dictionary, Object};
use crate::{PdfError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Represents an image that can be embedded in a PDF
#[derive(Debug, Clone)]
pub struct Image {
    /// Image data
    data: Vec<u8>,
    /// Image format
    format: ImageFormat,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Color space
    color_space: ColorSpace,
    /// Bits per component
    bits_per_component: u8,
    /// Alpha channel data (for transparency)
    alpha_data: Option<Vec<u8>>,
    /// SMask (soft mask) for alpha transparency
    soft_mask: Option<Box<Image>>,
}

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageFormat {
    /// JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// TIFF format
    Tiff,
    /// Raw RGB/Gray data (no compression)
    Raw,
}

/// Image mask type for transparency
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskType {
    /// Soft mask (grayscale alpha channel)
    Soft,
    /// Stencil mask (1-bit transparency)
    Stencil,
}

/// Color spaces for images
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpace {
    /// Grayscale
    DeviceGray,
    /// RGB color
    DeviceRGB,
    /// CMYK color
    DeviceCMYK,
}

impl Image {
    /// Load a JPEG image from a file
    pub fn from_jpeg_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        #[cfg(feature = "external-images")]
        {
            Self::from_external_jpeg_file(path)
        }
        #[cfg(not(feature = "external-images"))]
        {
            let mut file = File::open(path)?;
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            Self::from_jpeg_data(data)
        }
    }

    /// Create an image from JPEG data
    pub fn from_jpeg_data(data: Vec<u8>) -> Result<Self> {
        // Parse JPEG header to get dimensions and color info
        let (width, height, color_space, bits_per_component) = parse_jpeg_header(&data)?;

        Ok(Image {
            data,
            format: ImageFormat::Jpeg,
            width,
            height,
            color_space,
            bits_per_component,
            alpha_data: None,
            soft_mask: None,
        })
    }

    /// Load a PNG image from a file
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        #[cfg(feature = "external-images")]
        {
            Self::from_external_png_file(path)
        }
        #[cfg(not(feature = "external-images"))]
        {
            let mut file = File::open(path)?;
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            Self::from_png_data(data)
        }
    }

    /// Create an image from PNG data with full transparency support
    pub fn from_png_data(data: Vec<u8>) -> Result<Self> {
        use crate::graphics::png_decoder::{decode_png, PngColorType};

        // Decode PNG with our new decoder
        let decoded = decode_png(&data)?;

        // Map PNG color type to PDF color space
        let color_space = match decoded.color_type {
            PngColorType::Grayscale | PngColorType::GrayscaleAlpha => ColorSpace::DeviceGray,
            PngColorType::Rgb | PngColorType::RgbAlpha | PngColorType::Palette => {
                ColorSpace::DeviceRGB
            }
        };

        // Create soft mask if we have alpha data
        let soft_mask = if let Some(alpha) = &decoded.alpha_data {
            Some(Box::new(Image {
                data: alpha.clone(),
                format: ImageFormat::Raw,
                width: decoded.width,
                height: decoded.height,
                color_space: ColorSpace::DeviceGray,
                bits_per_component: 8,
                alpha_data: None,
                soft_mask: None,
            }))
        } else {
            None
        };

        Ok(Image {
            data,                     // Store original PNG data, not decoded data
            format: ImageFormat::Png, // Format represents original PNG format
            width: decoded.width,
            height: decoded.height,
            color_space,
            bits_per_component: 8, // Always 8 after decoding
            alpha_data: decoded.alpha_data,
            soft_mask,
        })
    }

    /// Load a TIFF image from a file
    pub fn from_tiff_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Self::from_tiff_data(data)
    }

    /// Create an image from TIFF data
    pub fn from_tiff_data(data: Vec<u8>) -> Result<Self> {
        // Parse TIFF header to get dimensions and color info
        let (width, height, color_space, bits_per_component) = parse_tiff_header(&data)?;

        Ok(Image {
            data,
            format: ImageFormat::Tiff,
            width,
            height,
            color_space,
            bits_per_component,
            alpha_data: None,
            soft_mask: None,
        })
    }

    /// Get image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get image data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get image format
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Get bits per component
    pub fn bits_per_component(&self) -> u8 {
        self.bits_per_component
    }

    /// Create image from raw RGB/Gray data (no encoding/compression)
    pub fn from_raw_data(
        data: Vec<u8>,
        width: u32,
        height: u32,
        color_space: ColorSpace,
        bits_per_component: u8,
    ) -> Self {
        Image {
            data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space,
            bits_per_component,
            alpha_data: None,
            soft_mask: None,
        }
    }

    /// Create an image from RGBA data (with alpha channel)
    pub fn from_rgba_data(rgba_data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if rgba_data.len() != (width * height * 4) as usize {
            return Err(PdfError::InvalidImage(
                "RGBA data size doesn't match dimensions".to_string(),
            ));
        }

        // Split RGBA into RGB and alpha channels
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha_data = Vec::with_capacity((width * height) as usize);

        for chunk in rgba_data.chunks(4) {
            rgb_data.push(chunk[0]); // R
            rgb_data.push(chunk[1]); // G
            rgb_data.push(chunk[2]); // B
            alpha_data.push(chunk[3]); // A
        }

        // Create soft mask from alpha channel
        let soft_mask = Some(Box::new(Image {
            data: alpha_data.clone(),
            format: ImageFormat::Raw,
            width,
            height,
            color_space: ColorSpace::DeviceGray,
            bits_per_component: 8,
            alpha_data: None,
            soft_mask: None,
        }));

        Ok(Image {
            data: rgb_data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space: ColorSpace::DeviceRGB,
            bits_per_component: 8,
            alpha_data: Some(alpha_data),
            soft_mask,
        })
    }

    /// Create a grayscale image from gray data
    pub fn from_gray_data(gray_data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if gray_data.len() != (width * height) as usize {
            return Err(PdfError::InvalidImage(
                "Gray data size doesn't match dimensions".to_string(),
            ));
        }

        Ok(Image {
            data: gray_data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space: ColorSpace::DeviceGray,
            bits_per_component: 8,
            alpha_data: None,
            soft_mask: None,
        })
    }

    /// Load and decode external PNG file using the `image` crate (requires external-images feature)
    #[cfg(feature = "external-images")]
    pub fn from_external_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::ImageReader::open(path)?
            .decode()
            .map_err(|e| PdfError::InvalidImage(format!("Failed to decode PNG: {}", e)))?;

        Self::from_dynamic_image(img)
    }

    /// Load and decode external JPEG file using the `image` crate (requires external-images feature)
    #[cfg(feature = "external-images")]
    pub fn from_external_jpeg_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::ImageReader::open(path)?
            .decode()
            .map_err(|e| PdfError::InvalidImage(format!("Failed to decode JPEG: {}", e)))?;

        Self::from_dynamic_image(img)
    }

    /// Convert from `image` crate's DynamicImage to our Image struct
    #[cfg(feature = "external-images")]
    fn from_dynamic_image(img: image::DynamicImage) -> Result<Self> {
        use image::DynamicImage;

        let (width, height) = (img.width(), img.height());

        let (rgb_data, color_space) = match img {
            DynamicImage::ImageLuma8(gray_img) => (gray_img.into_raw(), ColorSpace::DeviceGray),
            DynamicImage::ImageLumaA8(gray_alpha_img) => {
                // Convert gray+alpha to RGB (discard alpha for now)
                let rgb_data: Vec<u8> = gray_alpha_img
                    .pixels()
                    .flat_map(|p| [p[0], p[0], p[0]]) // Gray to RGB
                    .collect();
                (rgb_data, ColorSpace::DeviceRGB)
            }
            DynamicImage::ImageRgb8(rgb_img) => (rgb_img.into_raw(), ColorSpace::DeviceRGB),
            DynamicImage::ImageRgba8(rgba_img) => {
                // Convert RGBA to RGB (discard alpha for now)
                let rgb_data: Vec<u8> = rgba_img
                    .pixels()
                    .flat_map(|p| [p[0], p[1], p[2]]) // Drop alpha channel
                    .collect();
                (rgb_data, ColorSpace::DeviceRGB)
            }
            _ => {
                // Convert other formats to RGB8
                let rgb_img = img.to_rgb8();
                (rgb_img.into_raw(), ColorSpace::DeviceRGB)
            }
        };

        Ok(Image {
            data: rgb_data,
            format: ImageFormat::Raw,
            width,
            height,
            color_space,
            bits_per_component: 8,
        })
    }

    /// Convert to PDF XObject
    pub fn to_pdf_object(&self) -> Object {
        let mut dict = Dictionary::new();

        // Required entries for image XObject
        dict.set("Type", Object::Name("XObject".to_string()));
        dict.set("Subtype", Object::Name("Image".to_string()));
        dict.set("Width", Object::Integer(self.width as i64));
        dict.set("Height", Object::Integer(self.height as i64));

        // Color space
        let color_space_name = match self.color_space {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceCMYK => "DeviceCMYK",
        };
        dict.set("ColorSpace", Object::Name(color_space_name.to_string()));

        // Bits per component
        dict.set(
            "BitsPerComponent",
            Object::Integer(self.bits_per_component as i64),
        );

        // Filter based on image format
        match self.format {
            ImageFormat::Jpeg => {
                dict.set("Filter", Object::Name("DCTDecode".to_string()));
            }
            ImageFormat::Png => {
                dict.set("Filter", Object::Name("FlateDecode".to_string()));
            }
            ImageFormat::Tiff => {
                // TIFF can use various filters, but commonly LZW or FlateDecode
                dict.set("Filter", Object::Name("FlateDecode".to_string()));
            }
            ImageFormat::Raw => {
                // No filter for raw RGB/Gray data - may need FlateDecode for compression
            }
        }

        // Create stream with image data
        Object::Stream(dict, self.data.clone())
    }

    /// Convert to PDF XObject with SMask for transparency
    pub fn to_pdf_object_with_transparency(&self) -> (Object, Option<Object>) {
        let mut main_dict = Dictionary::new();

        // Required entries for image XObject
        main_dict.set("Type", Object::Name("XObject".to_string()));
        main_dict.set("Subtype", Object::Name("Image".to_string()));
        main_dict.set("Width", Object::Integer(self.width as i64));
        main_dict.set("Height", Object::Integer(self.height as i64));

        // Color space
        let color_space_name = match self.color_space {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceCMYK => "DeviceCMYK",
        };
        main_dict.set("ColorSpace", Object::Name(color_space_name.to_string()));

        // Bits per component
        main_dict.set(
            "BitsPerComponent",
            Object::Integer(self.bits_per_component as i64),
        );

        // Filter based on image format
        match self.format {
            ImageFormat::Jpeg => {
                main_dict.set("Filter", Object::Name("DCTDecode".to_string()));
            }
            ImageFormat::Png | ImageFormat::Raw => {
                // Use FlateDecode for PNG decoded data and raw data
                main_dict.set("Filter", Object::Name("FlateDecode".to_string()));
            }
            ImageFormat::Tiff => {
                main_dict.set("Filter", Object::Name("FlateDecode".to_string()));
            }
        }

        // Create soft mask if present
        let smask_obj = if let Some(mask) = &self.soft_mask {
            let mut mask_dict = Dictionary::new();
            mask_dict.set("Type", Object::Name("XObject".to_string()));
            mask_dict.set("Subtype", Object::Name("Image".to_string()));
            mask_dict.set("Width", Object::Integer(mask.width as i64));
            mask_dict.set("Height", Object::Integer(mask.height as i64));
            mask_dict.set("ColorSpace", Object::Name("DeviceGray".to_string()));
            mask_dict.set("BitsPerComponent", Object::Integer(8));
            mask_dict.set("Filter", Object::Name("FlateDecode".to_string()));

            Some(Object::Stream(mask_dict, mask.data.clone()))
        } else {
            None
        };

        // Note: The SMask reference would need to be set by the caller
        // as it requires object references which we don't have here

        (Object::Stream(main_dict, self.data.clone()), smask_obj)
    }

    /// Check if this image has transparency
    pub fn has_transparency(&self) -> bool {
        self.soft_mask.is_some() || self.alpha_data.is_some()
    }

    /// Create a stencil mask from this image
    /// A stencil mask uses 1-bit per pixel for transparency
    pub fn create_stencil_mask(&self, threshold: u8) -> Option<Image> {
        if let Some(alpha) = &self.alpha_data {
            // Convert alpha channel to 1-bit stencil mask
            let mut mask_data = Vec::new();
            let mut current_byte = 0u8;
            let mut bit_count = 0;

            for &alpha_value in alpha.iter() {
                // Set bit if alpha is above threshold
                if alpha_value > threshold {
                    current_byte |= 1 << (7 - bit_count);
                }

                bit_count += 1;
                if bit_count == 8 {
                    mask_data.push(current_byte);
                    current_byte = 0;
                    bit_count = 0;
                }
            }

            // Push last byte if needed
            if bit_count > 0 {
                mask_data.push(current_byte);
            }

            Some(Image {
                data: mask_data,
                format: ImageFormat::Raw,
                width: self.width,
                height: self.height,
                color_space: ColorSpace::DeviceGray,
                bits_per_component: 1,
                alpha_data: None,
                soft_mask: None,
            })
        } else {
            None
        }
    }

    /// Create an image mask for transparency
    pub fn create_mask(&self, mask_type: MaskType, threshold: Option<u8>) -> Option<Image> {
        match mask_type {
            MaskType::Soft => self.soft_mask.as_ref().map(|m| m.as_ref().clone()),
            MaskType::Stencil => self.create_stencil_mask(threshold.unwrap_or(128)),
        }
    }

    /// Apply a mask to this image
    pub fn with_mask(mut self, mask: Image, mask_type: MaskType) -> Self {
        match mask_type {
            MaskType::Soft => {
                self.soft_mask = Some(Box::new(mask));
            }
            MaskType::Stencil => {
                // For stencil masks, we store them as soft masks with 1-bit depth
                self.soft_mask = Some(Box::new(mask));
            }
        }
        self
    }

    /// Get the soft mask if present
    pub fn soft_mask(&self) -> Option<&Image> {
        self.soft_mask.as_ref().map(|m| m.as_ref())
    }

    /// Get the alpha data if present
    pub fn alpha_data(&self) -> Option<&[u8]> {
        self.alpha_data.as_deref()
    }
}

/// Parse JPEG header to extract image information
fn parse_jpeg_header(data: &[u8]) -> Result<(u32, u32, ColorSpace, u8)> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return Err(PdfError::InvalidImage("Not a valid JPEG file".to_string()));
    }

    let mut pos = 2;
    let mut width = 0;
    let mut height = 0;
    let mut components = 0;

    while pos < data.len() - 1 {
        if data[pos] != 0xFF {
            return Err(PdfError::InvalidImage("Invalid JPEG marker".to_string()));
        }

        let marker = data[pos + 1];
        pos += 2;

        // Skip padding bytes
        if marker == 0xFF {
            continue;
        }

        // Check for SOF markers (Start of Frame)
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            // This is a SOF marker
            if pos + 7 >= data.len() {
                return Err(PdfError::InvalidImage("Truncated JPEG file".to_string()));
            }

            // Skip length
            pos += 2;

            // Skip precision
            pos += 1;

            // Read height and width
            height = ((data[pos] as u32) << 8) | (data[pos + 1] as u32);
            pos += 2;
            width = ((data[pos] as u32) << 8) | (data[pos + 1] as u32);
            pos += 2;

            // Read number of components
            components = data[pos];
            break;
        } else if marker == 0xD9 {
            // End of image
            break;
        } else if marker == 0xD8 || (0xD0..=0xD7).contains(&marker) {
            // No length field for these markers
            continue;
        } else {
            // Read length and skip segment
            if pos + 1 >= data.len() {
                return Err(PdfError::InvalidImage("Truncated JPEG file".to_string()));
            }
            let length = ((data[pos] as usize) << 8) | (data[pos + 1] as usize);
            pos += length;
        }
    }

    if width == 0 || height == 0 {
        return Err(PdfError::InvalidImage(
            "Could not find image dimensions".to_string(),
        ));
    }

    let color_space = match components {
        1 => ColorSpace::DeviceGray,
        3 => ColorSpace::DeviceRGB,
        4 => ColorSpace::DeviceCMYK,
        _ => {
            return Err(PdfError::InvalidImage(format!(
                "Unsupported number of components: {components}"
            )))
        }
    };

    Ok((width, height, color_space, 8)) // JPEG typically uses 8 bits per component
}

/// Parse PNG header to extract image information
#[allow(dead_code)]
fn parse_png_header(data: &[u8]) -> Result<(u32, u32, ColorSpace, u8)> {
    // PNG signature: 8 bytes
    if data.len() < 8 || &data[0..8] != b"\x89PNG\r\n\x1a\n" {
        return Err(PdfError::InvalidImage("Not a valid PNG file".to_string()));
    }

    // Find IHDR chunk (should be first chunk after signature)
    let mut pos = 8;

    while pos + 8 < data.len() {
        // Read chunk length (4 bytes, big-endian)
        let chunk_length =
            u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;

        // Read chunk type (4 bytes)
        let chunk_type = &data[pos + 4..pos + 8];

        if chunk_type == b"IHDR" {
            // IHDR chunk found
            if pos + 8 + chunk_length > data.len() || chunk_length < 13 {
                return Err(PdfError::InvalidImage("Invalid PNG IHDR chunk".to_string()));
            }

            let ihdr_data = &data[pos + 8..pos + 8 + chunk_length];

            // Parse IHDR data
            let width =
                u32::from_be_bytes([ihdr_data[0], ihdr_data[1], ihdr_data[2], ihdr_data[3]]);

            let height =
                u32::from_be_bytes([ihdr_data[4], ihdr_data[5], ihdr_data[6], ihdr_data[7]]);

            let bit_depth = ihdr_data[8];
            let color_type = ihdr_data[9];

            // Map PNG color types to PDF color spaces
            let color_space = match color_type {
                0 => ColorSpace::DeviceGray, // Grayscale
                2 => ColorSpace::DeviceRGB,  // RGB
                3 => ColorSpace::DeviceRGB,  // Palette (treated as RGB)
                4 => ColorSpace::DeviceGray, // Grayscale + Alpha
                6 => ColorSpace::DeviceRGB,  // RGB + Alpha
                _ => {
                    return Err(PdfError::InvalidImage(format!(
                        "Unsupported PNG color type: {color_type}"
                    )))
                }
            };

            return Ok((width, height, color_space, bit_depth));
        }

        // Skip to next chunk
        pos += 8 + chunk_length + 4; // header + data + CRC
    }

    Err(PdfError::InvalidImage(
        "PNG IHDR chunk not found".to_string(),
    ))
}

/// Parse TIFF header to extract image information
fn parse_tiff_header(data: &[u8]) -> Result<(u32, u32, ColorSpace, u8)> {
    if data.len() < 8 {
        return Err(PdfError::InvalidImage(
            "Invalid TIFF file: too short".to_string(),
        ));
    }

    // Check byte order (first 2 bytes)
    let (is_little_endian, offset) = if &data[0..2] == b"II" {
        (true, 2) // Little endian
    } else if &data[0..2] == b"MM" {
        (false, 2) // Big endian
    } else {
        return Err(PdfError::InvalidImage(
            "Invalid TIFF byte order".to_string(),
        ));
    };

    // Check magic number (should be 42)
    let magic = if is_little_endian {
        u16::from_le_bytes([data[offset], data[offset + 1]])
    } else {
        u16::from_be_bytes([data[offset], data[offset + 1]])
    };

    if magic != 42 {
        return Err(PdfError::InvalidImage(
            "Invalid TIFF magic number".to_string(),
        ));
    }

    // Get offset to first IFD (Image File Directory)
    let ifd_offset = if is_little_endian {
        u32::from_le_bytes([
            data[offset + 2],
            data[offset + 3],
            data[offset + 4],
            data[offset + 5],
        ])
    } else {
        u32::from_be_bytes([
            data[offset + 2],
            data[offset + 3],
            data[offset + 4],
            data[offset + 5],
        ])
    } as usize;

    if ifd_offset + 2 > data.len() {
        return Err(PdfError::InvalidImage(
            "Invalid TIFF IFD offset".to_string(),
        ));
    }

    // Read number of directory entries
    let num_entries = if is_little_endian {
        u16::from_le_bytes([data[ifd_offset], data[ifd_offset + 1]])
    } else {
        u16::from_be_bytes([data[ifd_offset], data[ifd_offset + 1]])
    };

    let mut width = 0u32;
    let mut height = 0u32;
    let mut bits_per_sample = 8u16;
    let mut photometric_interpretation = 0u16;

    // Read directory entries
    for i in 0..num_entries {
        let entry_offset = ifd_offset + 2 + (i as usize * 12);

        if entry_offset + 12 > data.len() {
            break;
        }

        let tag = if is_little_endian {
            u16::from_le_bytes([data[entry_offset], data[entry_offset + 1]])
        } else {
            u16::from_be_bytes([data[entry_offset], data[entry_offset + 1]])
        };

        let value_offset = entry_offset + 8;

        match tag {
            256 => {
                // ImageWidth
                width = if is_little_endian {
                    u32::from_le_bytes([
                        data[value_offset],
                        data[value_offset + 1],
                        data[value_offset + 2],
                        data[value_offset + 3],
                    ])
                } else {
                    u32::from_be_bytes([
                        data[value_offset],
                        data[value_offset + 1],
                        data[value_offset + 2],
                        data[value_offset + 3],
                    ])
                };
            }
            257 => {
                // ImageHeight
                height = if is_little_endian {
                    u32::from_le_bytes([
                        data[value_offset],
                        data[value_offset + 1],
                        data[value_offset + 2],
                        data[value_offset + 3],
                    ])
                } else {
                    u32::from_be_bytes([
                        data[value_offset],
                        data[value_offset + 1],
                        data[value_offset + 2],
                        data[value_offset + 3],
                    ])
                };
            }
            258 => {
                // BitsPerSample
                bits_per_sample = if is_little_endian {
                    u16::from_le_bytes([data[value_offset], data[value_offset + 1]])
                } else {
                    u16::from_be_bytes([data[value_offset], data[value_offset + 1]])
                };
            }
            262 => {
                // PhotometricInterpretation
                photometric_interpretation = if is_little_endian {
                    u16::from_le_bytes([data[value_offset], data[value_offset + 1]])
                } else {
                    u16::from_be_bytes([data[value_offset], data[value_offset + 1]])
                };
            }
            _ => {} // Skip unknown tags
        }
    }

    if width == 0 || height == 0 {
        return Err(PdfError::InvalidImage(
            "TIFF dimensions not found".to_string(),
        ));
    }

    // Map TIFF photometric interpretation to PDF color space
    let color_space = match photometric_interpretation {
        0 | 1 => ColorSpace::DeviceGray, // White is zero | Black is zero
        2 => ColorSpace::DeviceRGB,      // RGB
        5 => ColorSpace::DeviceCMYK,     // CMYK
        _ => ColorSpace::DeviceRGB,      // Default to RGB
    };

    Ok((width, height, color_space, bits_per_sample as u8))
}

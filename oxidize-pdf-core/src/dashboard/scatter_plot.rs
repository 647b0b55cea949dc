//! ScatterPlot Visualization Component
//!
//! This module implements scatter plots for showing correlations and distributions
//! in two-dimensional data.

use crate::error::PdfError;
use crate::graphics::Color;
use crate::page::Page;
use super::{
    ComponentPosition, ComponentSpan, DashboardComponent, DashboardTheme,
    component::ComponentConfig,
};

/// ScatterPlot visualization component
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    /// Component configuration
    config: ComponentConfig,
    /// Scatter plot data
    data: Vec<ScatterPoint>,
    /// Configuration options
    options: ScatterPlotOptions,
}

impl ScatterPlot {
    /// Create a new scatter plot
    pub fn new(data: Vec<ScatterPoint>) -> Self {
        Self {
            config: ComponentConfig::new(ComponentSpan::new(6)), // Half width by default
            data,
            options: ScatterPlotOptions::default(),
        }
    }
}

impl DashboardComponent for ScatterPlot {
    fn render(&self, page: &mut Page, position: ComponentPosition, theme: &DashboardTheme) -> Result<(), PdfError> {
        // Implementation placeholder
        let _title = self.options.title.as_deref().unwrap_or("Scatter Plot");
        
        // Placeholder: page.add_text replaced
        
        // Draw placeholder
        // Placeholder: page graphics operation
        // Placeholder: page graphics operation
        // Placeholder: page.rectangle replaced
        // Placeholder: page graphics operation
        // Placeholder: page graphics operation
        
        Ok(())
    }
    
    fn get_span(&self) -> ComponentSpan { self.config.span }
    fn set_span(&mut self, span: ComponentSpan) { self.config.span = span; }
    fn preferred_height(&self, _available_width: f64) -> f64 { 300.0 }
    fn component_type(&self) -> &'static str { "ScatterPlot" }
    fn complexity_score(&self) -> u8 { 60 }
}

/// Scatter plot data point
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
    pub color: Option<Color>,
    pub label: Option<String>,
}

/// Scatter plot options
#[derive(Debug, Clone)]
pub struct ScatterPlotOptions {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_trend_line: bool,
}

impl Default for ScatterPlotOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            show_trend_line: false,
        }
    }
}

/// Builder for ScatterPlot
pub struct ScatterPlotBuilder;

impl ScatterPlotBuilder {
    pub fn new() -> Self { Self }
    pub fn build(self) -> ScatterPlot {
        ScatterPlot::new(vec![])
    }
}
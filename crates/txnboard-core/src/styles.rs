//! Badge style table keyed by category or status label

use serde::Serialize;
use std::collections::HashMap;
use txnboard_config::{Config, StyleConfig};

/// Label used for the fallback entry in configuration overrides
pub const DEFAULT_STYLE_LABEL: &str = "default";

/// Color tokens for one badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    pub border_color: String,
    pub background_color: String,
    pub text_color: String,
    pub chip_background_color: String,
}

impl StyleBundle {
    pub fn new(border: &str, background: &str, text: &str, chip_background: &str) -> Self {
        Self {
            border_color: border.to_string(),
            background_color: background.to_string(),
            text_color: text.to_string(),
            chip_background_color: chip_background.to_string(),
        }
    }
}

impl From<&StyleConfig> for StyleBundle {
    fn from(config: &StyleConfig) -> Self {
        Self {
            border_color: config.border_color.clone(),
            background_color: config.background_color.clone(),
            text_color: config.text_color.clone(),
            chip_background_color: config.chip_background_color.clone(),
        }
    }
}

/// Immutable label -> style mapping with a mandatory fallback
///
/// Built once at start-up and shared read-only by every render.
#[derive(Debug, Clone)]
pub struct StyleTable {
    default: StyleBundle,
    entries: HashMap<String, StyleBundle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleTable {
    /// Create an empty table with the given fallback style
    pub fn new(default: StyleBundle) -> Self {
        Self {
            default,
            entries: HashMap::new(),
        }
    }

    /// Add or replace the style for a label
    pub fn with_style(mut self, label: impl Into<String>, style: StyleBundle) -> Self {
        self.entries.insert(label.into(), style);
        self
    }

    /// The dashboard's built-in palette
    pub fn builtin() -> Self {
        Self::new(StyleBundle::new("", "bg-blue-500", "text-blue-700", "bg-inherit"))
            .with_style(
                "Food and Drink",
                StyleBundle::new("border-pink-600", "bg-pink-500", "text-pink-700", "bg-inherit"),
            )
            .with_style(
                "Payment",
                StyleBundle::new("border-success-600", "bg-green-600", "text-success-700", "bg-inherit"),
            )
            .with_style(
                "Bank Fees",
                StyleBundle::new("border-success-600", "bg-green-600", "text-success-700", "bg-inherit"),
            )
            .with_style(
                "Transfer",
                StyleBundle::new("border-red-700", "bg-red-700", "text-red-700", "bg-inherit"),
            )
            .with_style(
                "Processing",
                StyleBundle::new("border-[#F2F4F7]", "bg-gray-500", "text-[#344054]", "bg-[#F2F4F7]"),
            )
            .with_style(
                "Success",
                StyleBundle::new("border-[#12B76A]", "bg-[#12B76A]", "text-[#027A48]", "bg-[#ECFDF3]"),
            )
            .with_style(
                "Travel",
                StyleBundle::new("border-[#0047AB]", "bg-blue-500", "text-blue-700", "bg-[#ECFDF3]"),
            )
    }

    /// Built-in palette with the configured overrides applied
    ///
    /// An override named `default` replaces the fallback style.
    pub fn from_config(config: &Config) -> Self {
        let mut table = Self::builtin();
        for (label, style) in &config.category_styles {
            if label == DEFAULT_STYLE_LABEL {
                table.default = style.into();
            } else {
                table.entries.insert(label.clone(), style.into());
            }
        }
        log::debug!("Style table built with {} labelled entries", table.entries.len());
        table
    }

    /// Style for a label, falling back to the default entry
    pub fn lookup(&self, label: &str) -> &StyleBundle {
        self.entries.get(label).unwrap_or(&self.default)
    }

    /// The fallback style
    pub fn default_style(&self) -> &StyleBundle {
        &self.default
    }

    /// Check if a label has its own entry
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }
}

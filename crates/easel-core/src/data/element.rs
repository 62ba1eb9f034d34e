//! Canvas element model.
//!
//! An [`Element`] is a positioned, styled shape on the canvas. Elements are
//! created from a [`NewElement`] description (the store assigns id, z-index
//! and timestamps) and changed through partial [`ElementUpdate`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::HistoryActionType;
use super::viewport::Bounds;
use crate::id::ElementId;

/// Kind of shape an element draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Axis-aligned rectangle
    Rect,
    /// Circle or ellipse inscribed in the bounding box
    Circle,
    /// Isosceles triangle inscribed in the bounding box
    Triangle,
    /// Text block
    Text,
    /// Raster image
    Image,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rect => write!(f, "rect"),
            Self::Circle => write!(f, "circle"),
            Self::Triangle => write!(f, "triangle"),
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// CSS-like font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight
    Normal,
    /// Bold weight
    Bold,
    /// One step lighter than the parent
    Lighter,
    /// One step bolder than the parent
    Bolder,
    /// Numeric weight (100..=900)
    #[serde(untagged)]
    Numeric(u16),
}

/// Font slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Text decoration line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

/// Stroke end cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Visual style of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// Fill colour
    pub fill: String,
    /// Stroke colour
    pub stroke: String,
    /// Stroke width in canvas units
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    /// Corner radius for rectangles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<LineCap>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            fill: "#3498db".to_string(),
            stroke: "#2980b9".to_string(),
            stroke_width: 1.0,
            font_size: None,
            font_family: None,
            color: None,
            font_weight: None,
            font_style: None,
            text_decoration: None,
            corner_radius: None,
            line_cap: None,
        }
    }
}

impl ElementStyle {
    /// Fill/stroke style with the given stroke width
    pub fn filled(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
            stroke_width,
            ..Self::default()
        }
    }

    /// Style used for text blocks
    pub fn text(font_size: f64, font_family: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            fill: "transparent".to_string(),
            stroke: "transparent".to_string(),
            stroke_width: 0.0,
            font_size: Some(font_size),
            font_family: Some(font_family.into()),
            color: Some(color.into()),
            font_weight: Some(FontWeight::Normal),
            font_style: Some(FontStyle::Normal),
            text_decoration: Some(TextDecoration::None),
            ..Self::default()
        }
    }
}

/// Image filter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Grayscale,
    Blur,
    Brightness,
}

/// A single image filter with its strength in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub value: f64,
}

impl FilterConfig {
    /// Create a filter, clamping the strength into range
    pub fn new(kind: FilterKind, value: f64) -> Self {
        Self {
            kind,
            value: value.clamp(0.0, 1.0),
        }
    }
}

/// A shape on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub style: ElementStyle,
    pub opacity: f64,
    /// Stacking order; higher draws on top
    pub z_index: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text content for text elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Mirrors membership in the store's selection
    pub is_selected: bool,
    pub is_locked: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Element {
    /// Axis-aligned bounding box, ignoring rotation
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Move the element by the given delta
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Display label for logs and UI lists
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.element_type, self.id),
        }
    }
}

/// Description of an element to be created
///
/// Identity, stacking order, selection flag and timestamps are assigned by
/// the store when the element is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub style: ElementStyle,
    pub opacity: f64,
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
}

impl NewElement {
    /// Create an element description of the given type
    pub fn new(element_type: ElementType, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            element_type,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            style: ElementStyle::default(),
            opacity: 1.0,
            filters: Vec::new(),
            name: None,
            content: None,
            image_url: None,
            is_locked: false,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Rect, x, y, width, height)
    }

    pub fn circle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Circle, x, y, width, height)
    }

    pub fn triangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ElementType::Triangle, x, y, width, height)
    }

    /// Text block with default typography
    pub fn text(x: f64, y: f64, width: f64, height: f64, content: impl Into<String>) -> Self {
        let mut new = Self::new(ElementType::Text, x, y, width, height);
        new.style = ElementStyle::text(16.0, "Arial", "#2c3e50");
        new.content = Some(content.into());
        new
    }

    pub fn image(x: f64, y: f64, width: f64, height: f64, url: impl Into<String>) -> Self {
        let mut new = Self::new(ElementType::Image, x, y, width, height);
        new.image_url = Some(url.into());
        new
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set opacity, clamped to `0.0..=1.0`
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Materialise into a stored element
    pub fn into_element(self, id: ElementId, z_index: i64, now: DateTime<Utc>) -> Element {
        Element {
            id,
            element_type: self.element_type,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            style: self.style,
            opacity: self.opacity,
            z_index,
            filters: self.filters,
            name: self.name,
            content: self.content,
            image_url: self.image_url,
            is_selected: false,
            is_locked: self.is_locked,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of an element
///
/// Only the fields that are `Some` are applied. Identity, timestamps and the
/// selection flag are owned by the store and cannot be set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

impl ElementUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update moving the element to `(x, y)`
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Update resizing the element to `width` x `height`
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.is_locked = Some(locked);
        self
    }

    /// True when the update carries no field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn touches_position(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    fn touches_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    fn touches_other(&self) -> bool {
        let geometry_only = Self {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            ..Self::default()
        };
        *self != geometry_only
    }

    /// Classify the change for history records
    pub fn action_type(&self) -> HistoryActionType {
        if self.touches_other() {
            HistoryActionType::Update
        } else if self.touches_size() {
            HistoryActionType::Resize
        } else if self.touches_position() {
            HistoryActionType::Move
        } else {
            HistoryActionType::Update
        }
    }

    /// Short human-readable summary of the changed fields
    pub fn summary(&self) -> String {
        let mut fields = Vec::new();
        macro_rules! note {
            ($($field:ident => $name:literal),* $(,)?) => {
                $(if self.$field.is_some() { fields.push($name); })*
            };
        }
        note!(
            element_type => "type",
            x => "x",
            y => "y",
            width => "width",
            height => "height",
            rotation => "rotation",
            style => "style",
            opacity => "opacity",
            z_index => "zIndex",
            filters => "filters",
            name => "name",
            content => "content",
            image_url => "imageUrl",
            is_locked => "isLocked",
        );
        fields.join(", ")
    }

    /// Apply the set fields to `element`; timestamps are left untouched
    pub fn apply(&self, element: &mut Element) {
        if let Some(element_type) = self.element_type {
            element.element_type = element_type;
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(style) = &self.style {
            element.style = style.clone();
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
        if let Some(filters) = &self.filters {
            element.filters = filters.clone();
        }
        if let Some(name) = &self.name {
            element.name = Some(name.clone());
        }
        if let Some(content) = &self.content {
            element.content = Some(content.clone());
        }
        if let Some(image_url) = &self.image_url {
            element.image_url = Some(image_url.clone());
        }
        if let Some(locked) = self.is_locked {
            element.is_locked = locked;
        }
    }
}

//! Active editing tool.

use serde::{Deserialize, Serialize};

use super::element::ElementType;

/// Tool the pointer currently drives: selection, or drawing one shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Rect,
    Circle,
    Triangle,
    Text,
    Image,
}

impl ToolKind {
    /// Shape drawn by this tool, if it draws one
    pub fn element_type(self) -> Option<ElementType> {
        match self {
            Self::Select => None,
            Self::Rect => Some(ElementType::Rect),
            Self::Circle => Some(ElementType::Circle),
            Self::Triangle => Some(ElementType::Triangle),
            Self::Text => Some(ElementType::Text),
            Self::Image => Some(ElementType::Image),
        }
    }

    pub fn is_drawing_tool(self) -> bool {
        self != Self::Select
    }
}

impl From<ElementType> for ToolKind {
    fn from(value: ElementType) -> Self {
        match value {
            ElementType::Rect => Self::Rect,
            ElementType::Circle => Self::Circle,
            ElementType::Triangle => Self::Triangle,
            ElementType::Text => Self::Text,
            ElementType::Image => Self::Image,
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.element_type() {
            Some(kind) => kind.fmt(f),
            None => f.write_str("select"),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Canvas side length used when the caller omits `width` or `height`.
pub const DEFAULT_CANVAS_SIZE: f64 = 1080.0;

/// `data.elementType` value that marks an element as the brand logo.
pub const LOGO_ELEMENT_TYPE: &str = "logo";

/// The design being validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    #[serde(default = "default_canvas_size", deserialize_with = "dimension")]
    pub width: f64,
    #[serde(default = "default_canvas_size", deserialize_with = "dimension")]
    pub height: f64,

    /// Order is preserved so reports are deterministic. Entries that are not objects
    /// decode as a default element with kind `Unknown`.
    #[serde(default, deserialize_with = "lenient_elements")]
    pub elements: Vec<Element>,

    /// Hex colour; only the contrast advisory reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            elements: Vec::new(),
            background_color: None,
        }
    }
}

impl CanvasState {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn images(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind == ElementKind::Image)
    }

    pub fn texts(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind == ElementKind::Text)
    }
}

/// One placed object on the canvas.
///
/// Numeric fields are optional: a missing or non-numeric value decodes to `None`
/// and the checks that need it skip the element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "ElementKind::is_unknown")]
    pub kind: ElementKind,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Free-form attributes. The engine reads `elementType` and `color`.
    /// Anything other than an object decodes as empty.
    #[serde(default, deserialize_with = "lenient_data", skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Value>,
}

/// Axis-aligned placement of a well-formed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Element {
    /// Width and height, when both are present, finite and non-negative.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let width = self.width.filter(|w| w.is_finite() && *w >= 0.0)?;
        let height = self.height.filter(|h| h.is_finite() && *h >= 0.0)?;
        Some((width, height))
    }

    pub fn area(&self) -> Option<f64> {
        self.extent().map(|(w, h)| w * h)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let (width, height) = self.extent()?;
        let x = self.x.filter(|v| v.is_finite())?;
        let y = self.y.filter(|v| v.is_finite())?;
        Some(Bounds {
            x,
            y,
            width,
            height,
        })
    }

    /// The `data.elementType` role, independent of `type`.
    pub fn element_type(&self) -> Option<&str> {
        self.data.get("elementType").and_then(Value::as_str)
    }

    pub fn is_logo(&self) -> bool {
        self.element_type() == Some(LOGO_ELEMENT_TYPE)
    }

    pub fn color(&self) -> Option<&str> {
        self.data.get("color").and_then(Value::as_str)
    }

    /// Human label used in finding messages, e.g. `#2 ('headline')`.
    pub fn label(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("#{index} ('{id}')"),
            None => format!("#{index}"),
        }
    }
}

/// Element `type`. The set is open: unrecognized names are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ElementKind {
    Image,
    Text,
    Other(String),
    /// `type` absent or not a string.
    #[default]
    Unknown,
}

impl ElementKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "image" => ElementKind::Image,
            "text" => ElementKind::Text,
            other => ElementKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ElementKind::Image => Some("image"),
            ElementKind::Text => Some("text"),
            ElementKind::Other(name) => Some(name),
            ElementKind::Unknown => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, ElementKind::Unknown)
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(name)) => ElementKind::parse(&name),
            _ => ElementKind::Unknown,
        })
    }
}

fn default_canvas_size() -> f64 {
    DEFAULT_CANVAS_SIZE
}

/// Missing, null or non-numeric dimensions take the default size.
fn dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_CANVAS_SIZE))
}

fn lenient_elements<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Element>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|entry| match entry {
            Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
            _ => Element::default(),
        })
        .collect())
}

fn lenient_data<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, Value>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Object(map)) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_f64).filter(|v| v.is_finite()))
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

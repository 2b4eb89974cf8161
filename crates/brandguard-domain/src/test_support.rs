use crate::model::{CanvasState, Element, ElementKind};
use crate::policy::{EffectiveGuidelines, Guidelines};
use serde_json::Value;

pub fn element(kind: ElementKind, x: f64, y: f64, width: f64, height: f64) -> Element {
    Element {
        id: None,
        kind,
        x: Some(x),
        y: Some(y),
        width: Some(width),
        height: Some(height),
        data: Default::default(),
    }
}

pub fn image(x: f64, y: f64, width: f64, height: f64) -> Element {
    element(ElementKind::Image, x, y, width, height)
}

pub fn text(x: f64, y: f64, width: f64, height: f64) -> Element {
    element(ElementKind::Text, x, y, width, height)
}

pub fn logo(x: f64, y: f64, width: f64, height: f64) -> Element {
    with_data(image(x, y, width, height), "elementType", "logo")
}

pub fn with_data(mut element: Element, key: &str, value: &str) -> Element {
    element
        .data
        .insert(key.to_string(), Value::String(value.to_string()));
    element
}

pub fn with_id(mut element: Element, id: &str) -> Element {
    element.id = Some(id.to_string());
    element
}

/// 1080x1080 canvas holding `elements`.
pub fn canvas(elements: Vec<Element>) -> CanvasState {
    CanvasState {
        elements,
        ..CanvasState::default()
    }
}

pub fn defaults() -> EffectiveGuidelines {
    EffectiveGuidelines::default()
}

pub fn with_contrast(min_ratio: f64) -> EffectiveGuidelines {
    EffectiveGuidelines::resolve(&Guidelines {
        min_contrast_ratio: Some(min_ratio),
        ..Guidelines::default()
    })
}

pub fn without(check_id: &str) -> EffectiveGuidelines {
    EffectiveGuidelines::resolve(&Guidelines {
        disabled_checks: vec![check_id.to_string()],
        ..Guidelines::default()
    })
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::{DomainError, DomainResult};
use crate::field::{FieldDescriptor, FieldKind, FieldValue};

/// Ordered description of the form presented for one endpoint: the common
/// `image` file field (except for `list_fonts`), then the endpoint-specific
/// fields, in fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub endpoint: String,
    pub method: HttpMethod,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Looks up the schema for `endpoint_name`. Unknown names are not an
    /// error: they yield a form with only the common file field, per the
    /// closed-set lookup policy.
    #[must_use]
    pub fn for_endpoint(endpoint_name: &str) -> Self {
        let known = Endpoint::from_name(endpoint_name);
        let method = known.map_or(HttpMethod::Post, |e| e.method());

        let mut fields = Vec::new();
        if known.is_none_or(|e| e.takes_image()) {
            fields.push(FieldDescriptor::file("image", "Image File"));
        }
        if let Some(endpoint) = known {
            fields.extend(endpoint_fields(endpoint));
        }

        Self {
            endpoint: endpoint_name.to_string(),
            method,
            fields,
        }
    }

    /// Client-side validation: every required field must be present and
    /// non-empty, and select values must come from the field's option list.
    /// Runs before any network activity.
    pub fn validate(&self, values: &FormValues) -> DomainResult<()> {
        for field in &self.fields {
            if let FieldKind::Select { options } = &field.kind {
                if let Some(FieldValue::Choice(choice)) = values.get(&field.name) {
                    if !options.contains(choice) {
                        return Err(DomainError::InvalidFieldValue {
                            field: field.name.clone(),
                            message: format!("'{choice}' is not one of {options:?}"),
                        });
                    }
                }
                continue;
            }
            match values.get(&field.name) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(DomainError::MissingRequiredField(field.name.clone())),
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Values captured from the form, keyed by field name. Transient: built at
/// submit time, sent once, discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn file_path(&self, name: &str) -> Option<&Path> {
        self.values.get(name).and_then(FieldValue::as_path)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn endpoint_fields(endpoint: Endpoint) -> Vec<FieldDescriptor> {
    match endpoint {
        Endpoint::Resize => vec![
            FieldDescriptor::number("width", "Width"),
            FieldDescriptor::number("height", "Height"),
        ],
        Endpoint::Crop => vec![
            FieldDescriptor::number("x1", "X1 Coordinate"),
            FieldDescriptor::number("y1", "Y1 Coordinate"),
            FieldDescriptor::number("x2", "X2 Coordinate"),
            FieldDescriptor::number("y2", "Y2 Coordinate"),
        ],
        Endpoint::Rotate => vec![FieldDescriptor::number("angle", "Rotation Angle (degrees)")],
        Endpoint::Brightness => vec![FieldDescriptor::number("factor", "Brightness Factor")],
        Endpoint::Contrast => vec![FieldDescriptor::number("factor", "Contrast Factor")],
        Endpoint::Flip => vec![FieldDescriptor::select(
            "axis",
            "Flip Axis",
            &["horizontal", "vertical"],
        )],
        Endpoint::Filter => vec![FieldDescriptor::select(
            "filter_type",
            "Filter Type",
            &["blur", "sharpen", "edge_detect"],
        )],
        Endpoint::Convert => vec![FieldDescriptor::select(
            "output_format",
            "Output Format",
            &["png", "jpg", "gif"],
        )],
        Endpoint::AddText => vec![
            FieldDescriptor::text("text", "Text to Add"),
            FieldDescriptor::number("font", "Font (ID)"),
            FieldDescriptor::number("font_size", "Font Size"),
            FieldDescriptor::number("left", "Left Position"),
            FieldDescriptor::number("top", "Top Position"),
            FieldDescriptor::text("color", "Color (e.g., 255,255,255)"),
        ],
        Endpoint::Grayscale | Endpoint::ListFonts => vec![],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn field_names(schema: &FormSchema) -> Vec<&str> {
        schema.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn every_known_endpoint_matches_the_field_table() {
        let expected: Vec<(&str, Vec<&str>)> = vec![
            ("resize", vec!["image", "width", "height"]),
            ("crop", vec!["image", "x1", "y1", "x2", "y2"]),
            ("rotate", vec!["image", "angle"]),
            ("grayscale", vec!["image"]),
            ("brightness", vec!["image", "factor"]),
            ("contrast", vec!["image", "factor"]),
            ("flip", vec!["image", "axis"]),
            ("filter", vec!["image", "filter_type"]),
            ("convert", vec!["image", "output_format"]),
            ("list_fonts", vec![]),
            (
                "add_text",
                vec!["image", "text", "font", "font_size", "left", "top", "color"],
            ),
        ];

        for (name, fields) in expected {
            let schema = FormSchema::for_endpoint(name);
            assert_eq!(field_names(&schema), fields, "field set for {name}");
        }
    }

    #[test]
    fn non_select_fields_are_required_and_selects_default_first() {
        let schema = FormSchema::for_endpoint("flip");
        let image = schema.field("image").unwrap();
        let axis = schema.field("axis").unwrap();
        assert!(image.is_required());
        assert!(!axis.is_required());
        assert_eq!(axis.default_option(), Some("horizontal"));
    }

    #[test]
    fn list_fonts_has_no_image_field_and_uses_get() {
        let schema = FormSchema::for_endpoint("list_fonts");
        assert!(schema.fields.is_empty());
        assert_eq!(schema.method, HttpMethod::Get);
    }

    #[test]
    fn unknown_endpoint_yields_only_the_common_file_field() {
        let schema = FormSchema::for_endpoint("posterize");
        assert_eq!(field_names(&schema), vec!["image"]);
        assert_eq!(schema.method, HttpMethod::Post);
    }

    #[test]
    fn validation_rejects_missing_required_fields() {
        let schema = FormSchema::for_endpoint("resize");
        let mut values = FormValues::new();
        values.insert("image", FieldValue::File(PathBuf::from("cat.png")));
        values.insert("width", FieldValue::Number(100.0));

        assert_eq!(
            schema.validate(&values),
            Err(DomainError::MissingRequiredField("height".to_string()))
        );

        values.insert("height", FieldValue::Number(200.0));
        assert_eq!(schema.validate(&values), Ok(()));
    }

    #[test]
    fn validation_rejects_blank_values() {
        let schema = FormSchema::for_endpoint("add_text");
        let mut values = FormValues::new();
        values.insert("image", FieldValue::File(PathBuf::from("cat.png")));
        values.insert("text", FieldValue::Text("  ".to_string()));
        values.insert("font", FieldValue::Number(1.0));
        values.insert("font_size", FieldValue::Number(12.0));
        values.insert("left", FieldValue::Number(0.0));
        values.insert("top", FieldValue::Number(0.0));
        values.insert("color", FieldValue::Text("255,255,255".to_string()));

        assert_eq!(
            schema.validate(&values),
            Err(DomainError::MissingRequiredField("text".to_string()))
        );
    }

    #[test]
    fn absent_select_value_passes_validation() {
        let schema = FormSchema::for_endpoint("convert");
        let mut values = FormValues::new();
        values.insert("image", FieldValue::File(PathBuf::from("cat.png")));
        assert_eq!(schema.validate(&values), Ok(()));
    }

    #[test]
    fn off_list_select_value_is_rejected() {
        let schema = FormSchema::for_endpoint("convert");
        let mut values = FormValues::new();
        values.insert("image", FieldValue::File(PathBuf::from("cat.png")));
        values.insert("output_format", FieldValue::Choice("tiff".to_string()));
        assert!(matches!(
            schema.validate(&values),
            Err(DomainError::InvalidFieldValue { field, .. }) if field == "output_format"
        ));
    }
}

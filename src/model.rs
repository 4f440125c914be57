//! The shared field model both renderers consume.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GenerateError, json_kind};
use crate::ident::to_field_identifier;
use crate::infer::TypeSignature;

/// Per-key metadata derived once per generation pass from a sample
/// document entry.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The key exactly as it appears in the sample JSON.
    pub original_key: String,
    /// camelCase form used for the class member.
    pub identifier: String,
    pub signature: TypeSignature,
    /// Literal expression substituted when the field has no value.
    pub default_literal: &'static str,
}

/// Everything a renderer needs: the class name plus the ordered field
/// list.
#[derive(Debug, Clone)]
pub struct ClassModel {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ClassModel {
    /// Build the field model from a sample document. Field order is the
    /// document's key order (the parser preserves it).
    pub fn from_document(name: impl Into<String>, document: &Map<String, Value>) -> Self {
        let fields = document
            .iter()
            .map(|(key, value)| {
                let signature = TypeSignature::infer(value);
                FieldDescriptor {
                    original_key: key.clone(),
                    identifier: to_field_identifier(key),
                    default_literal: signature.default_literal(),
                    signature,
                }
            })
            .collect();
        Self { name: name.into(), fields }
    }
}

/// Reject any sample whose top-level value is not an object.
pub fn as_document<'a>(
    path: &Path,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, GenerateError> {
    value
        .as_object()
        .ok_or_else(|| GenerateError::InvalidSchemaKind {
            path: path.to_path_buf(),
            found: json_kind(value),
        })
}

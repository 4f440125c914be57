//! Text renderers for the two class shapes.
//!
//! Both renderers are pure functions of `(ClassModel, config) -> String`
//! built with direct string templating; the domain is simple enough that
//! an AST layer would only get in the way. Field extraction and default
//! computation are shared (see `model` / `infer`), so the variants differ
//! in templating only.

use std::path::Path;

use crate::config::{GenerationConfig, Variant};
use crate::model::{ClassModel, FieldDescriptor};

pub fn render(model: &ClassModel, config: &GenerationConfig) -> String {
    match config.variant {
        Variant::PlainData => render_plain_data(model),
        Variant::Serializable => render_serializable(model, config.nullable_factory),
    }
}

/// Derive the class name from the template: the first `#` is replaced
/// with the sample's file stem. A template without the placeholder is
/// used unchanged.
pub fn class_name(template: &str, source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    template.replacen('#', &stem, 1)
}

/// `{ k1: d1, k2: d2 }` over the original JSON keys; `{}` for an empty
/// document. Used as the constructor's fallback argument in the plain
/// data holder.
pub fn synthesize_default_object(fields: &[FieldDescriptor]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let entries = fields
        .iter()
        .map(|f| format!("{}: {}", f.original_key, f.default_literal))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {entries} }}")
}

/// Variant A: typed public fields plus a constructor copying from a raw
/// data mapping. Assignments read by *original* key, so the default
/// object only matters when the caller omits `data` entirely.
fn render_plain_data(model: &ClassModel) -> String {
    let mut out = format!("class {} {{\n", model.name);
    for field in &model.fields {
        out.push_str(&format!("  {}: {}\n", field.identifier, field.signature));
    }
    out.push_str(&format!(
        "\n  constructor(data = {}) {{\n",
        synthesize_default_object(&model.fields)
    ));
    for field in &model.fields {
        out.push_str(&format!(
            "    this.{} = data['{}']\n",
            field.identifier, field.original_key
        ));
    }
    out.push_str("  }\n");
    out.push_str("}\n");
    out.push_str(&format!("\nexport default {}\n", model.name));
    out
}

/// Variant B: every field is a defaulted constructor parameter, plus a
/// static `fromJSON` factory and an instance `toJSON` mapping back to
/// the original keys.
fn render_serializable(model: &ClassModel, nullable_factory: bool) -> String {
    let name = &model.name;
    let params = model
        .fields
        .iter()
        .map(|f| format!("public {}: {} = {}", f.identifier, f.signature, f.default_literal))
        .collect::<Vec<_>>()
        .join(", ");
    let forwarded = model
        .fields
        .iter()
        .map(|f| format!("json.{}", f.original_key))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("class {name} {{\n");
    out.push_str(&format!("  constructor({params}) {{}}\n"));
    if nullable_factory {
        out.push_str(&format!("\n  static fromJSON(json: any): {name} | null {{\n"));
        out.push_str("    if (!json) return null\n");
    } else {
        out.push_str(&format!("\n  static fromJSON(json: any): {name} {{\n"));
    }
    out.push_str(&format!("    return new {name}({forwarded})\n"));
    out.push_str("  }\n");
    out.push_str("\n  toJSON() {\n");
    if model.fields.is_empty() {
        out.push_str("    return {}\n");
    } else {
        let entries = model
            .fields
            .iter()
            .map(|f| format!("{}: this.{} ?? {}", f.original_key, f.identifier, f.default_literal))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("    return {{ {entries} }}\n"));
    }
    out.push_str("  }\n");
    out.push_str("}\n");
    out.push_str(&format!("\nexport default {name}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use serde_json::json;

    fn sample_model() -> ClassModel {
        let doc = json!({"user_id": 1, "tags": ["a"], "active": true});
        ClassModel::from_document("userModel", doc.as_object().unwrap())
    }

    #[test]
    fn class_name_substitutes_first_placeholder_only() {
        assert_eq!(class_name("#Model", Path::new("user.json")), "userModel");
        assert_eq!(class_name("#Model", Path::new("dir/order.json")), "orderModel");
        assert_eq!(class_name("##", Path::new("user.json")), "user#");
        // no placeholder: template used as-is
        assert_eq!(class_name("Fixed", Path::new("user.json")), "Fixed");
    }

    #[test]
    fn default_object_uses_original_keys() {
        let model = sample_model();
        assert_eq!(
            synthesize_default_object(&model.fields),
            "{ user_id: 0, tags: [], active: false }"
        );
        assert_eq!(synthesize_default_object(&[]), "{}");
    }

    #[test]
    fn plain_data_renders_exactly() {
        let model = sample_model();
        let rendered = render(&model, &GenerationConfig::default());
        let expected = "\
class userModel {
  userId: number
  tags: string[]
  active: boolean

  constructor(data = { user_id: 0, tags: [], active: false }) {
    this.userId = data['user_id']
    this.tags = data['tags']
    this.active = data['active']
  }
}

export default userModel
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn serializable_renders_exactly() {
        let model = sample_model();
        let config = GenerationConfig {
            variant: Variant::Serializable,
            ..GenerationConfig::default()
        };
        let rendered = render(&model, &config);
        let expected = "\
class userModel {
  constructor(public userId: number = 0, public tags: string[] = [], public active: boolean = false) {}

  static fromJSON(json: any): userModel {
    return new userModel(json.user_id, json.tags, json.active)
  }

  toJSON() {
    return { user_id: this.userId ?? 0, tags: this.tags ?? [], active: this.active ?? false }
  }
}

export default userModel
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn nullable_factory_adds_the_falsy_guard() {
        let model = sample_model();
        let config = GenerationConfig {
            variant: Variant::Serializable,
            nullable_factory: true,
            ..GenerationConfig::default()
        };
        let rendered = render(&model, &config);
        assert!(rendered.contains("static fromJSON(json: any): userModel | null {"));
        assert!(rendered.contains("    if (!json) return null\n"));
    }

    #[test]
    fn empty_document_renders_both_variants() {
        let doc = json!({});
        let model = ClassModel::from_document("emptyModel", doc.as_object().unwrap());

        let plain = render(&model, &GenerationConfig::default());
        assert!(plain.contains("constructor(data = {}) {"));
        assert!(plain.ends_with("export default emptyModel\n"));

        let config = GenerationConfig {
            variant: Variant::Serializable,
            ..GenerationConfig::default()
        };
        let serializable = render(&model, &config);
        assert!(serializable.contains("constructor() {}"));
        assert!(serializable.contains("return new emptyModel()"));
        assert!(serializable.contains("    return {}\n"));
    }
}

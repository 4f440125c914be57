//! Field-identifier rewriting (snake_case → camelCase).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Every `_` followed by a word character, matched non-overlapping.
static SNAKE_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(\w)").unwrap());

/// Convert a JSON key into a camelCase field identifier.
///
/// Each `_x` pair is replaced with the upper-cased `x`; keys without
/// underscores pass through unchanged, so the rewrite is idempotent on
/// already-camelCase input. Purely lexical: no reserved-word handling,
/// and two distinct keys that rewrite to the same identifier collide
/// silently in the generated class.
pub fn to_field_identifier(key: &str) -> String {
    SNAKE_PAIR
        .replace_all(key, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_becomes_camel_case() {
        assert_eq!(to_field_identifier("user_name"), "userName");
        assert_eq!(to_field_identifier("user_id"), "userId");
        assert_eq!(to_field_identifier("a_b_c"), "aBC");
    }

    #[test]
    fn keys_without_underscores_pass_through() {
        assert_eq!(to_field_identifier("id"), "id");
        assert_eq!(to_field_identifier("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn idempotent_on_camel_case() {
        let once = to_field_identifier("user_name");
        assert_eq!(to_field_identifier(&once), once);
    }

    #[test]
    fn edge_shapes() {
        // leading underscore consumes the pair
        assert_eq!(to_field_identifier("_x"), "X");
        // trailing underscore has no word character to pair with
        assert_eq!(to_field_identifier("x_"), "x_");
        // digits count as word characters and survive upper-casing
        assert_eq!(to_field_identifier("field_1"), "field1");
    }

    #[test]
    fn distinct_keys_may_collide() {
        // documented limitation, not a bug
        assert_eq!(to_field_identifier("user_name"), to_field_identifier("userName"));
    }
}

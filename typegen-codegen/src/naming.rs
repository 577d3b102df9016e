//! Identifier conversion for generated Rust code.
//!
//! GraphQL names are mapped to Rust naming conventions and escaped when they
//! collide with keywords or with the names the generated file relies on.

use std::collections::{BTreeSet, HashMap, HashSet};
use typegen_schema::Schema;

/// Type names the generated file uses itself and must not be shadowed.
const RESERVED_TYPE_NAMES: [&str; 6] = [
    "Box",
    "Deserialize",
    "Option",
    "Serialize",
    "String",
    "Vec",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: [&str; 5] = ["_", "crate", "self", "Self", "super"];

/// Keywords reserved by newer editions than the parser knows about.
const EDITION_KEYWORDS: [&str; 1] = ["gen"];

/// Splits a name into words on separators and case boundaries.
///
/// `accountID` -> `account`, `ID`; `HTTPServer` -> `HTTP`, `Server`;
/// `DARK_BLUE` -> `DARK`, `BLUE`.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in split_words(s) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result
}

/// Returns true if `ident` is a Rust keyword.
#[must_use]
pub fn is_keyword(ident: &str) -> bool {
    NON_RAW_KEYWORDS.contains(&ident)
        || EDITION_KEYWORDS.contains(&ident)
        || syn::parse_str::<syn::Ident>(ident).is_err()
}

/// Makes an identifier usable in value position (fields).
///
/// Keywords become raw identifiers where Rust allows it and get a trailing
/// underscore otherwise.
fn escape_value_ident(ident: String) -> String {
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if is_keyword(&ident) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Makes an identifier usable in type position (types and variants).
fn escape_type_ident(ident: String) -> String {
    if RESERVED_TYPE_NAMES.contains(&ident.as_str()) || is_keyword(&ident) {
        format!("{ident}_")
    } else {
        ident
    }
}

/// Returns the Rust field name for a GraphQL field name.
#[must_use]
pub fn field_ident(name: &str) -> String {
    let snake = to_snake_case(name);
    let snake = match snake.chars().next() {
        None => "field".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{snake}"),
        Some(_) => snake,
    };
    escape_value_ident(snake)
}

/// Returns the Rust variant name for a GraphQL enum value.
#[must_use]
pub fn variant_ident(value: &str) -> String {
    let pascal = to_pascal_case(value);
    let pascal = match pascal.chars().next() {
        None => "Value".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Value{pascal}"),
        Some(_) => pascal,
    };
    escape_type_ident(pascal)
}

/// Returns the Rust type name for a GraphQL type name.
#[must_use]
pub fn type_ident(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let pascal = if pascal.is_empty() {
        "Type".to_string()
    } else {
        pascal
    };
    escape_type_ident(pascal)
}

/// Strips the raw identifier prefix, giving the name serde sees.
#[must_use]
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Hands out identifiers, suffixing numbers to ones already taken.
#[derive(Debug, Default)]
pub struct UniqueIdents {
    taken: HashSet<String>,
}

impl UniqueIdents {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `candidate`, or the first free `candidate2`, `candidate3`, ...
    pub fn claim(&mut self, candidate: String) -> String {
        if self.taken.insert(candidate.clone()) {
            return candidate;
        }
        let (prefix, suffix) = match candidate.strip_suffix('_') {
            Some(stem) => (stem.to_string(), "_"),
            None => (candidate.clone(), ""),
        };
        let mut n = 2;
        loop {
            let attempt = format!("{prefix}{n}{suffix}");
            if self.taken.insert(attempt.clone()) {
                return attempt;
            }
            n += 1;
        }
    }
}

/// Stable GraphQL-name to Rust-type-name mapping for one schema.
///
/// Names are assigned in ascending GraphQL order so collisions after case
/// conversion always resolve the same way.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    idents: HashMap<String, String>,
}

impl TypeNames {
    /// Builds the mapping for every type in the schema.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        let sorted: BTreeSet<&str> = schema.types.iter().map(|t| t.name.as_str()).collect();
        let mut unique = UniqueIdents::new();
        let idents = sorted
            .into_iter()
            .map(|name| (name.to_string(), unique.claim(type_ident(name))))
            .collect();
        Self { idents }
    }

    /// Returns the Rust identifier for a GraphQL type name.
    ///
    /// Names outside the schema fall back to plain conversion.
    #[must_use]
    pub fn ident(&self, name: &str) -> String {
        self.idents
            .get(name)
            .cloned()
            .unwrap_or_else(|| type_ident(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typegen_schema::{SchemaType, TypeKind};

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("incidentPreference"), "incident_preference");
        assert_eq!(to_snake_case("name"), "name");
        assert_eq!(to_snake_case("accountID"), "account_id");
        assert_eq!(to_snake_case("NRQLQuery"), "nrql_query");
        assert_eq!(to_snake_case("__typename"), "typename");
        assert_eq!(to_snake_case("v2Thing"), "v2_thing");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("entity_guid"), "EntityGuid");
        assert_eq!(to_pascal_case("DARK_BLUE"), "DarkBlue");
        assert_eq!(to_pascal_case("alert-policy"), "AlertPolicy");
        assert_eq!(to_pascal_case("AlertsNrqlCondition"), "AlertsNrqlCondition");
        assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
    }

    #[test]
    fn test_field_ident_keywords() {
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("self"), "self_");
        assert_eq!(field_ident("async"), "r#async");
        assert_eq!(field_ident("gen"), "r#gen");
        assert_eq!(field_ident("name"), "name");
        assert_eq!(field_ident("1stPlace"), "_1st_place");
        assert_eq!(field_ident("__"), "field");
    }

    #[test]
    fn test_variant_ident() {
        assert_eq!(variant_ident("PER_CONDITION"), "PerCondition");
        assert_eq!(variant_ident("5_MINUTES"), "Value5Minutes");
        assert_eq!(variant_ident("SELF"), "Self_");
        assert_eq!(variant_ident("_"), "Value");
    }

    #[test]
    fn test_type_ident_reserved() {
        assert_eq!(type_ident("Widget"), "Widget");
        assert_eq!(type_ident("Option"), "Option_");
        assert_eq!(type_ident("__Type"), "Type");
    }

    #[test]
    fn test_unraw() {
        assert_eq!(unraw("r#type"), "type");
        assert_eq!(unraw("name"), "name");
    }

    #[test]
    fn test_unique_idents() {
        let mut unique = UniqueIdents::new();
        assert_eq!(unique.claim("foo_bar".to_string()), "foo_bar");
        assert_eq!(unique.claim("foo_bar".to_string()), "foo_bar2");
        assert_eq!(unique.claim("foo_bar".to_string()), "foo_bar3");
        assert_eq!(unique.claim("self_".to_string()), "self_");
        assert_eq!(unique.claim("self_".to_string()), "self2_");
    }

    #[test]
    fn test_type_names_collisions_are_stable() {
        let mut schema = Schema::new();
        for name in ["fooBar", "FooBar", "Widget"] {
            schema
                .add_type(SchemaType::new(name, TypeKind::Object))
                .expect("add type");
        }

        let names = TypeNames::new(&schema);
        assert_eq!(names.ident("FooBar"), "FooBar");
        assert_eq!(names.ident("fooBar"), "FooBar2");
        assert_eq!(names.ident("Widget"), "Widget");
        assert_eq!(names.ident("Missing"), "Missing");
    }
}

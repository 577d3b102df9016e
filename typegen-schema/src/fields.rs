//! Field and type reference definitions.
//!
//! A [`TypeRef`] stores its List/NonNull wrappers flat, outermost first, so
//! unwrapping a reference never recurses no matter how deeply it is nested.

use std::fmt;

/// A wrapper applied around a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `[T]`
    List,
    /// `T!`
    NonNull,
}

/// Reference to a named type, optionally wrapped in List/NonNull modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
    /// Outermost modifier first.
    modifiers: Vec<Modifier>,
}

impl TypeRef {
    /// Creates an unwrapped (nullable) reference to a named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    /// Creates a reference from a name and modifiers listed outermost first.
    ///
    /// Adjacent `NonNull` modifiers collapse into one.
    #[must_use]
    pub fn with_modifiers(name: impl Into<String>, modifiers: &[Modifier]) -> Self {
        let mut type_ref = Self::named(name);
        for modifier in modifiers.iter().rev() {
            type_ref = match modifier {
                Modifier::List => type_ref.list(),
                Modifier::NonNull => type_ref.non_null(),
            };
        }
        type_ref
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.modifiers.insert(0, Modifier::List);
        self
    }

    /// Wraps this reference in a non-null modifier. Idempotent.
    #[must_use]
    pub fn non_null(mut self) -> Self {
        if !self.is_non_null() {
            self.modifiers.insert(0, Modifier::NonNull);
        }
        self
    }

    /// Returns the innermost named type, ignoring every modifier.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.name
    }

    /// Modifiers from outermost to innermost.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Returns true if the outermost modifier is `NonNull`.
    #[must_use]
    pub fn is_non_null(&self) -> bool {
        self.modifiers.first() == Some(&Modifier::NonNull)
    }

    /// Returns true if any list modifier is present.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list_depth() > 0
    }

    /// Number of list modifiers.
    #[must_use]
    pub fn list_depth(&self) -> usize {
        self.modifiers
            .iter()
            .filter(|m| **m == Modifier::List)
            .count()
    }
}

impl fmt::Display for TypeRef {
    /// Formats the reference in GraphQL SDL notation, e.g. `[Foo!]!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = self.name.clone();
        for modifier in self.modifiers.iter().rev() {
            rendered = match modifier {
                Modifier::List => format!("[{rendered}]"),
                Modifier::NonNull => format!("{rendered}!"),
            };
        }
        f.write_str(&rendered)
    }
}

/// Field (or argument / input field) definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_ref: TypeRef,
    /// Arguments, in declaration order.
    pub args: Vec<Field>,
    /// Description.
    pub description: Option<String>,
    /// Deprecation reason, present when the field is deprecated.
    pub deprecation_reason: Option<String>,
}

impl Field {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            args: Vec::new(),
            description: None,
            deprecation_reason: None,
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_arg(mut self, arg: Field) -> Self {
        self.args.push(arg);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field as deprecated.
    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

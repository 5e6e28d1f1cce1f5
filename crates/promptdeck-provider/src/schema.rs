//! Attribute schema declarations
//!
//! Declarative description of each configuration block, consumed by the
//! host tool to validate plans before any API call is made. The schema
//! carries no behavior; each resource and data source declares its own
//! table via an associated `schema()` function.

use serde::Serialize;

/// Attribute value type
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    StringList,
    /// List of nested objects; element attributes are declared inline.
    ObjectList,
}

/// One configuration attribute
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub ty: AttributeType,
    pub description: &'static str,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// Element attributes for `ObjectList`, empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Attribute>,
}

impl Attribute {
    fn new(name: &'static str, ty: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            description,
            required: false,
            optional: false,
            computed: false,
            nested: Vec::new(),
        }
    }

    /// The user must set this attribute.
    pub fn required(name: &'static str, ty: AttributeType, description: &'static str) -> Self {
        Self {
            required: true,
            ..Self::new(name, ty, description)
        }
    }

    /// The user may set this attribute.
    pub fn optional(name: &'static str, ty: AttributeType, description: &'static str) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty, description)
        }
    }

    /// The provider fills this attribute from the service.
    pub fn computed(name: &'static str, ty: AttributeType, description: &'static str) -> Self {
        Self {
            computed: true,
            ..Self::new(name, ty, description)
        }
    }

    /// The user may set this attribute, or the provider fills it.
    pub fn optional_computed(
        name: &'static str,
        ty: AttributeType,
        description: &'static str,
    ) -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(name, ty, description)
        }
    }

    /// Attach element attributes to an `ObjectList`.
    pub fn with_nested(mut self, nested: Vec<Attribute>) -> Self {
        self.nested = nested;
        self
    }
}

/// Attribute table for one configuration block
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

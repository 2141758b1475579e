//! Declarative field rules for the persisted product document.
//!
//! The table is the single description of what a stored product looks like;
//! the MongoDB adapter turns it into a `$jsonSchema` collection validator.

use mongodb::bson::{Bson, Document, doc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string, or an `ObjectId` from documents written by other tools
    Key,
    /// Non-empty string
    Text,
    /// Any numeric BSON type, strictly greater than zero
    PositiveNumber,
    /// Any numeric BSON type
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    fn schema(&self) -> Document {
        match self.kind {
            FieldKind::Key => doc! { "bsonType": ["string", "objectId"], "minLength": 1 },
            FieldKind::Text => doc! { "bsonType": "string", "minLength": 1 },
            FieldKind::PositiveNumber => doc! {
                "bsonType": ["double", "int", "long", "decimal"],
                "minimum": 0,
                "exclusiveMinimum": true,
            },
            FieldKind::Number => doc! { "bsonType": ["double", "int", "long", "decimal"] },
        }
    }
}

pub const PRODUCT_FIELDS: &[FieldRule] = &[
    FieldRule::required("_id", FieldKind::Key),
    FieldRule::required("name", FieldKind::Text),
    FieldRule::required("description", FieldKind::Text),
    FieldRule::required("image", FieldKind::Text),
    FieldRule::required("price", FieldKind::PositiveNumber),
    FieldRule::optional("quantity", FieldKind::Number),
];

/// `{ "$jsonSchema": ... }` built from [`PRODUCT_FIELDS`].
pub fn json_schema_validator() -> Document {
    let required: Vec<Bson> = PRODUCT_FIELDS
        .iter()
        .filter(|rule| rule.required)
        .map(|rule| Bson::from(rule.name))
        .collect();

    let mut properties = Document::new();
    for rule in PRODUCT_FIELDS {
        properties.insert(rule.name, rule.schema());
    }

    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": required,
            "properties": properties,
        }
    }
}

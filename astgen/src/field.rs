//! Parsing of node tables.
//!
//! A node table maps kind names to field lists, and every field is written
//! as `Type name`. The type is everything before the first run of
//! whitespace and is never interpreted: `List<Expr>`, `Box<Expr>` and
//! `Option<Box<Stmt>>` are all just text that ends up verbatim in the
//! generated field declaration.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use heck::AsSnakeCase;

use crate::error::{Error, Result};

/// A single `Type name` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    ty: String,
    name: String,
}

impl FieldSpec {
    #[inline]
    pub fn declared_type(&self) -> &str {
        &self.ty
    }

    #[inline]
    pub fn field_name(&self) -> &str {
        &self.name
    }
}

impl FromStr for FieldSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_field(s)
    }
}

/// Split `spec` on its first whitespace run into a declared type and a
/// field name.
pub fn parse_field(spec: &str) -> Result<FieldSpec> {
    let trimmed = spec.trim();
    let Some((ty, name)) = trimmed.split_once(char::is_whitespace) else {
        return Err(Error::MalformedField {
            spec: spec.to_owned(),
        });
    };
    let name = name.trim();
    check_ident("field", name)?;
    if RESERVED_FIELD_NAMES.contains(&name) {
        return Err(Error::InvalidIdentifier {
            what: "field",
            name: name.to_owned(),
        });
    }

    Ok(FieldSpec {
        ty: ty.to_owned(),
        name: name.to_owned(),
    })
}

/// One node kind of a category, with its fields in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeKindSpec {
    name: String,
    fields: Vec<FieldSpec>,
}

impl NodeKindSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self> {
        let name = name.into();
        check_ident("node kind", &name)?;

        let mut seen = BTreeSet::new();
        for field in &fields {
            if !seen.insert(field.field_name()) {
                return Err(Error::DuplicateField {
                    kind: name,
                    field: field.field_name().to_owned(),
                });
            }
        }

        Ok(Self { name, fields })
    }

    #[inline]
    pub fn kind_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Parse every entry of `table`, keeping the caller's order.
///
/// The first malformed field aborts the whole table.
pub fn parse_kind_table<I, K, F, S>(table: I) -> Result<Vec<NodeKindSpec>>
where
    I: IntoIterator<Item = (K, F)>,
    K: AsRef<str>,
    F: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut kinds = Vec::new();

    for (name, fields) in table {
        let name = name.as_ref();
        if !seen.insert(name.to_owned()) {
            return Err(Error::DuplicateKind {
                kind: name.to_owned(),
            });
        }

        let fields = fields
            .into_iter()
            .map(|field| parse_field(field.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        kinds.push(NodeKindSpec::new(name, fields)?);
    }

    Ok(kinds)
}

/// Everything needed to generate one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    base_name: String,
    kinds: Vec<NodeKindSpec>,
}

impl GenerationRequest {
    pub fn new(base_name: impl Into<String>, kinds: Vec<NodeKindSpec>) -> Result<Self> {
        let base_name = base_name.into();
        check_ident("category", &base_name)?;

        let visitor = format!("{base_name}Visitor");
        let mut seen = BTreeSet::new();
        // visitor methods are named after the snake case kind, so two kinds
        // that only differ in case or underscores would share one method
        let mut methods = BTreeMap::new();
        for kind in &kinds {
            let name = kind.kind_name();
            if name == base_name || name == visitor {
                return Err(Error::InvalidIdentifier {
                    what: "node kind",
                    name: name.to_owned(),
                });
            }
            if !seen.insert(name) {
                return Err(Error::DuplicateKind {
                    kind: name.to_owned(),
                });
            }
            if let Some(first) = methods.insert(AsSnakeCase(name).to_string(), name) {
                return Err(Error::ConflictingKinds {
                    first: first.to_owned(),
                    second: name.to_owned(),
                });
            }
        }

        Ok(Self { base_name, kinds })
    }

    /// Build a request straight from a `(kind, ["Type name", ...])` table.
    pub fn parse<I, K, F, S>(base_name: &str, table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, F)>,
        K: AsRef<str>,
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = parse_kind_table(table)?;
        log::debug!("parsed {} node kinds for `{base_name}`", kinds.len());
        Self::new(base_name, kinds)
    }

    #[inline]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    #[inline]
    pub fn kinds(&self) -> &[NodeKindSpec] {
        &self.kinds
    }
}

// Strict and reserved keywords. Using one of these as a name would need a
// raw identifier, which the emitter does not produce.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

// Methods every generated node already has.
const RESERVED_FIELD_NAMES: &[&str] = &["new", "accept"];

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') || s == "_" {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !KEYWORDS.contains(&s)
}

fn check_ident(what: &'static str, name: &str) -> Result<()> {
    if is_ident(name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            what,
            name: name.to_owned(),
        })
    }
}

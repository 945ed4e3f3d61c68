//! Emits the Rust source for one category.
//!
//! The output for a category `Expr` with kinds `Binary` and `Literal` is:
//! - `enum Expr { Binary(Binary), Literal(Literal) }`, the closed base type,
//!   with `accept` and `kind_name`
//! - `trait ExprVisitor`, with one required `visit_*_expr` method per kind
//! - `struct Binary` / `struct Literal`, each with a constructor, read-only
//!   field accessors, its own `accept` and a `From` impl into `Expr`
//!
//! A new operation over the tree is a new `ExprVisitor` impl. The visitor has
//! no default methods, so the compiler rejects an impl that forgets a kind.

use std::fmt::{self, Display};

use heck::AsSnakeCase;

use crate::error::{Error, Result};
use crate::field::{FieldSpec, GenerationRequest, NodeKindSpec};

const HEADER: &str = "// This file is generated by astgen. Do not edit it by hand.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Derives applied to the base enum and every node struct.
    pub derives: Vec<String>,
    /// Emitted verbatim after the header, usually a block of `use` items.
    pub prelude: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            derives: ["Debug", "Clone", "PartialEq"].map(String::from).to_vec(),
            prelude: String::new(),
        }
    }
}

impl EmitOptions {
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = prelude.into();
        self
    }

    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }
}

/// Emit `request` with the default options.
pub fn emit(request: &GenerationRequest) -> Result<String> {
    emit_with(request, &EmitOptions::default())
}

/// Emit `request`. The output depends on nothing but the arguments.
pub fn emit_with(request: &GenerationRequest, options: &EmitOptions) -> Result<String> {
    if request.kinds().is_empty() {
        return Err(Error::EmptyRequest {
            base_name: request.base_name().to_owned(),
        });
    }

    Ok(Generated { request, options }.to_string())
}

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*)?);
    ($f:ident) => (writeln!($f)?);
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (indoc::writedoc!($f, $($tt)*)?);
}

struct Generated<'a> {
    request: &'a GenerationRequest,
    options: &'a EmitOptions,
}

impl Display for Generated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ln!(f, "{HEADER}");

        let prelude = self.options.prelude.trim();
        if !prelude.is_empty() {
            ln!(f);
            ln!(f, "{prelude}");
        }

        self.emit_base(f)?;
        self.emit_visitor(f)?;
        for kind in self.request.kinds() {
            self.emit_node(f, kind)?;
        }

        Ok(())
    }
}

impl Generated<'_> {
    fn base(&self) -> &str {
        self.request.base_name()
    }

    fn derives(&self) -> Derives<'_> {
        Derives(&self.options.derives)
    }

    fn emit_base(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        let kinds = self.request.kinds();

        ln!(f);
        ln!(f, "{}pub enum {base} {{", self.derives());
        for kind in kinds {
            let name = kind.kind_name();
            ln!(f, "    {name}({name}),");
        }
        ln!(f, "}}");
        ln!(f);
        ml!(
            f,
            "
            impl {base} {{
                pub fn accept<V: {base}Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {{
                    match self {{
            "
        );
        for kind in kinds {
            let name = kind.kind_name();
            ln!(f, "            {base}::{name}(node) => node.accept(visitor),");
        }
        ln!(f, "        }}");
        ln!(f, "    }}");
        ln!(f);
        ln!(f, "    pub fn kind_name(&self) -> &'static str {{");
        ln!(f, "        match self {{");
        for kind in kinds {
            let name = kind.kind_name();
            ln!(f, "            {base}::{name}(_) => \"{name}\",");
        }
        ml!(
            f,
            "
                    }}
                }}
            }}
            "
        );

        Ok(())
    }

    fn emit_visitor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();

        ln!(f);
        ln!(f, "pub trait {base}Visitor {{");
        ln!(f, "    type Output;");
        ln!(f);
        for kind in self.request.kinds() {
            ln!(
                f,
                "    fn {}(&mut self, node: &{}) -> Self::Output;",
                VisitFn(kind, base),
                kind.kind_name(),
            );
        }
        ln!(f, "}}");

        Ok(())
    }

    fn emit_node(&self, f: &mut fmt::Formatter<'_>, kind: &NodeKindSpec) -> fmt::Result {
        let base = self.base();
        let name = kind.kind_name();
        let fields = kind.fields();

        ln!(f);
        if fields.is_empty() {
            ln!(f, "{}pub struct {name} {{}}", self.derives());
        } else {
            ln!(f, "{}pub struct {name} {{", self.derives());
            for field in fields {
                ln!(f, "    {}: {},", field.field_name(), field.declared_type());
            }
            ln!(f, "}}");
        }

        ln!(f);
        ln!(f, "impl {name} {{");
        ln!(
            f,
            "    pub fn new({}) -> Self {{",
            fields.iter().map(Param).join(", ")
        );
        if fields.is_empty() {
            ln!(f, "        Self {{}}");
        } else {
            ln!(
                f,
                "        Self {{ {} }}",
                fields.iter().map(FieldSpec::field_name).join(", ")
            );
        }
        ln!(f, "    }}");
        for field in fields {
            let (field_name, ty) = (field.field_name(), field.declared_type());
            ln!(f);
            ln!(f, "    pub fn {field_name}(&self) -> &{ty} {{");
            ln!(f, "        &self.{field_name}");
            ln!(f, "    }}");
        }
        ln!(f);
        ml!(
            f,
            "
                pub fn accept<V: {base}Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {{
                    visitor.{visit}(self)
                }}
            }}

            impl From<{name}> for {base} {{
                fn from(node: {name}) -> Self {{
                    {base}::{name}(node)
                }}
            }}
            ",
            visit = VisitFn(kind, base),
        );

        Ok(())
    }
}

/// `visit_<kind>_<base>`, in snake case.
struct VisitFn<'a>(&'a NodeKindSpec, &'a str);

impl Display for VisitFn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visit_{}_{}",
            AsSnakeCase(self.0.kind_name()),
            AsSnakeCase(self.1)
        )
    }
}

/// A constructor parameter, `name: Type`.
struct Param<'a>(&'a FieldSpec);

impl Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.field_name(), self.0.declared_type())
    }
}

/// `#[derive(...)]` followed by a newline, or nothing.
struct Derives<'a>(&'a [String]);

impl Display for Derives<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, "#[derive({})]", self.0.iter().join(", "))
    }
}

/// Items of an iterator with `sep` between each pair.
struct Join<Iter, Sep> {
    items: Iter,
    sep: Sep,
}

impl<Iter, Sep> Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    Iter::Item: Display,
    Sep: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.items.clone().peekable();
        while let Some(item) = items.next() {
            write!(f, "{item}")?;
            if items.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

trait JoinIter: Iterator + Clone + Sized {
    fn join<Sep: Display>(self, sep: Sep) -> Join<Self, Sep> {
        Join { items: self, sep }
    }
}

impl<Iter: Iterator + Clone> JoinIter for Iter {}

#[cfg(test)]
mod tests;

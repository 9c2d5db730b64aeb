use syn::{Attribute, Data, DeriveInput, Field as SynField, Fields as SynFields, Generics, Ident, Type};

use quote::ToTokens;

use proc_macro2::{Span, TokenStream};

use std::fmt::{self, Display};

//////////////////////////////////////////////////////////////////////////////

/// The definition of the struct that the derive macro was used on.
///
/// Enums and unions are rejected before this is constructed,
/// member visiting is only defined for structs.
#[derive(Clone, Debug)]
pub(crate) struct StructDef<'a> {
    pub(crate) name: &'a Ident,
    pub(crate) generics: &'a Generics,

    pub(crate) kind: StructKind,

    /// The fields of the struct, in declaration order.
    pub(crate) fields: Vec<Field<'a>>,
}

impl<'a> StructDef<'a> {
    pub(crate) fn new(ast: &'a DeriveInput) -> Result<Self, syn::Error> {
        let struct_ = match &ast.data {
            Data::Struct(struct_) => struct_,
            Data::Enum { .. } => {
                return_spanned_err!(
                    ast.ident,
                    "cannot derive `Visitable` for an enum, only structs can register visitable members",
                );
            }
            Data::Union { .. } => {
                return_spanned_err!(
                    ast.ident,
                    "cannot derive `Visitable` for a union, only structs can register visitable members",
                );
            }
        };

        let kind = match &struct_.fields {
            SynFields::Named { .. } => StructKind::Braced,
            SynFields::Unnamed { .. } => StructKind::Tuple,
            SynFields::Unit => StructKind::Unit,
        };

        let fields = struct_
            .fields
            .iter()
            .enumerate()
            .map(|(pos, field)| Field::new(pos, field, ast.ident.span()))
            .collect::<Vec<_>>();

        Ok(Self {
            name: &ast.ident,
            generics: &ast.generics,
            kind,
            fields,
        })
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Whether the struct is braced, tupled, or a unit struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum StructKind {
    /// structs declared using the `struct Name{ ... }` syntax.
    Braced,
    /// structs declared using the `struct Name( ... );` syntax.
    Tuple,
    /// structs declared using the `struct Name;` syntax.
    Unit,
}

//////////////////////////////////////////////////////////////////////////////

/// Represents a struct field.
#[derive(Clone, Debug)]
pub(crate) struct Field<'a> {
    /// The position of the field in the struct definition.
    pub(crate) pos: usize,
    pub(crate) attrs: &'a [Attribute],
    /// Identifier for the field, which is either an index (in a tuple struct) or a name.
    pub(crate) ident: FieldIdent<'a>,
    pub(crate) ty: &'a Type,
}

impl<'a> Field<'a> {
    fn new(pos: usize, field: &'a SynField, span: Span) -> Self {
        let ident = match field.ident.as_ref() {
            Some(ident) => FieldIdent::Named(ident),
            None => FieldIdent::new_index(pos, span),
        };

        Self {
            pos,
            attrs: &field.attrs,
            ident,
            ty: &field.ty,
        }
    }

    /// Gets an identifier for this field usable for the variable in a pattern,
    /// since a tuple field index cannot be used to bind a variable.
    pub(crate) fn pat_ident(&self) -> &Ident {
        match &self.ident {
            FieldIdent::Index(_, ident) => ident,
            FieldIdent::Named(ident) => ident,
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldIdent<'a> {
    Index(usize, Ident),
    Named(&'a Ident),
}

impl<'a> Display for FieldIdent<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIdent::Index(x, ..) => Display::fmt(x, f),
            FieldIdent::Named(x) => Display::fmt(x, f),
        }
    }
}

impl<'a> ToTokens for FieldIdent<'a> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match *self {
            FieldIdent::Index(ind, ..) => syn::Index::from(ind).to_tokens(tokens),
            FieldIdent::Named(name) => name.to_tokens(tokens),
        }
    }
}

impl<'a> FieldIdent<'a> {
    fn new_index(index: usize, span: Span) -> Self {
        FieldIdent::Index(index, Ident::new(&format!("field_{}", index), span))
    }
}

//! The expansion-time member registry.
//!
//! While the derive macro walks a struct definition it accumulates one
//! [`MemberDescriptor`] per registered field, in declaration order,
//! then seals the registry before any code is generated.
//! The sealed registry is what the generated type-level member list
//! is produced from, so registry order is declaration order by construction.

use syn::Ident;

use struct_visit_shared::MAX_VISITABLE_MEMBERS;

use crate::{attribute_parsing::FieldConfig, datastructure::Field};

/// The association between a member's registered name and the field
/// the generated accessors refer to.
#[derive(Debug)]
pub(crate) struct MemberDescriptor<'a> {
    name: String,
    field: &'a Field<'a>,
}

impl<'a> MemberDescriptor<'a> {
    pub(crate) fn new(field: &'a Field<'a>, config: &FieldConfig) -> Self {
        let name = match &config.rename {
            Some(name) => name.clone(),
            None => field.ident.to_string(),
        };
        Self { name, field }
    }

    /// The name the member is registered under,
    /// the literal field name unless overridden with `#[visit(rename = "...")]`.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn field(&self) -> &'a Field<'a> {
        self.field
    }
}

/// An ordered list of member descriptors for one struct,
/// accumulated one `append` at a time and then sealed.
#[derive(Debug)]
pub(crate) struct MemberRegistry<'a> {
    struct_name: &'a Ident,
    members: Vec<MemberDescriptor<'a>>,
}

impl<'a> MemberRegistry<'a> {
    /// Establishes an empty registry associated with one struct.
    pub(crate) fn begin(struct_name: &'a Ident) -> Self {
        Self {
            struct_name,
            members: Vec::new(),
        }
    }

    /// The amount of members appended up to this point.
    ///
    /// Until [`seal`](Self::seal) is called this is a snapshot of an
    /// in-progress registry, which grows with every `append`.
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    /// Appends a member at the end of the registry.
    ///
    /// Returns an error when the member would exceed
    /// [`MAX_VISITABLE_MEMBERS`], since the ceiling is a hard
    /// translation-time limit.
    pub(crate) fn append(&mut self, member: MemberDescriptor<'a>) -> Result<(), syn::Error> {
        if self.members.len() == MAX_VISITABLE_MEMBERS {
            return Err(spanned_err!(
                member.field.ident,
                "cannot register more than {} visitable members for `{}`, \
                 enable the `high_member_limit` feature of struct_visit to raise the ceiling",
                MAX_VISITABLE_MEMBERS,
                self.struct_name,
            ));
        }
        self.members.push(member);
        Ok(())
    }

    /// Fixes the final contents of the registry.
    ///
    /// Sealing consumes the builder,
    /// so appending to a sealed registry is unrepresentable.
    pub(crate) fn seal(self) -> SealedRegistry<'a> {
        SealedRegistry {
            members: self.members,
        }
    }
}

/// The immutable registry that code generation runs on.
#[derive(Debug)]
pub(crate) struct SealedRegistry<'a> {
    members: Vec<MemberDescriptor<'a>>,
}

impl<'a> SealedRegistry<'a> {
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members in registration order.
    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = &MemberDescriptor<'a>> {
        self.members.iter()
    }
}

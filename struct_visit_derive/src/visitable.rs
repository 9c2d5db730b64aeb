//! Implementation of the `#[derive(Visitable)]` macro.

use crate::{
    attribute_parsing::{parse_field_attrs, FieldConfig},
    datastructure::{StructDef, StructKind},
    registry::{MemberDescriptor, MemberRegistry, SealedRegistry},
};

use core_extensions::SelfOps;

use proc_macro2::{Span, TokenStream as TokenStream2};

use quote::quote;

use syn::{DeriveInput, Ident};

pub(crate) fn derive(data: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let ds = &StructDef::new(&data)?;

    let configs = ds
        .fields
        .iter()
        .map(parse_field_attrs)
        .collect::<Result<Vec<FieldConfig>, syn::Error>>()?;

    // The begin/append/seal sequence:
    // every registered field is appended in declaration order,
    // and the registry is sealed before any code is generated from it.
    let mut registry = MemberRegistry::begin(ds.name);
    for (field, config) in ds.fields.iter().zip(&configs) {
        if config.skipped {
            continue;
        }
        registry.append(MemberDescriptor::new(field, config))?;
    }
    let registry = registry.seal();

    let name = ds.name;
    let (impl_generics, ty_generics, where_clause) = ds.generics.split_for_impl();

    let member_impls = registry
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let field = member.field();
            let fident = &field.ident;
            let ty = field.ty;
            let member_name = member.name();
            quote!(
                impl #impl_generics Member<#name #ty_generics>
                    for MemberAt<#name #ty_generics, #index>
                #where_clause
                {
                    type Value = #ty;

                    const NAME: &'static str = #member_name;

                    #[inline(always)]
                    fn get(structure: &#name #ty_generics) -> &#ty {
                        &structure.#fident
                    }

                    #[inline(always)]
                    fn get_mut(structure: &mut #name #ty_generics) -> &mut #ty {
                        &mut structure.#fident
                    }

                    #[inline(always)]
                    fn take(structure: #name #ty_generics) -> #ty {
                        structure.#fident
                    }
                }
            )
        })
        .collect::<TokenStream2>();

    let mut members_ty = quote!(Nil);
    for index in (0..registry.len()).rev() {
        members_ty = quote!(Cons<MemberAt<#name #ty_generics, #index>, #members_ty>);
    }

    let member_names = registry.iter().map(|m| m.name()).collect::<Vec<_>>();

    let visitable_impl = quote!(
        impl #impl_generics Visitable for #name #ty_generics #where_clause {
            type Registration = Intrusive;
            type Members = #members_ty;
            const FIELD_NAMES: &'static [&'static str] = &[ #( #member_names ),* ];
        }
    );

    let once_impl = visit_once_impl(ds, &registry);

    let imports = if registry.is_empty() {
        quote!(Intrusive, Nil, VisitFieldsOnce, Visitable)
    } else {
        quote!(Cons, Intrusive, Member, MemberAt, Nil, VisitFieldOnce, VisitFieldsOnce, Visitable)
    };

    let const_name = Ident::new(&format!("_visitable_impl_{}", name), Span::call_site());

    quote!(
        #[doc(hidden)]
        #[allow(non_upper_case_globals)]
        const #const_name: () = {
            use struct_visit::derive_macro_reexports::{ #imports };

            #member_impls

            #visitable_impl

            #once_impl
        };
    )
    .piped(Ok)
}

/// Generates the by-value visiting impl.
///
/// This is done by destructuring instead of going through the type-level
/// member list, since each field can only be moved out of the struct once.
fn visit_once_impl(ds: &StructDef<'_>, registry: &SealedRegistry<'_>) -> TokenStream2 {
    let name = ds.name;
    let (_, ty_generics, _) = ds.generics.split_for_impl();

    let mut once_generics = ds.generics.clone();
    once_generics.params.push(syn::parse_quote!(__V));
    if !registry.is_empty() {
        let value_tys = registry.iter().map(|m| m.field().ty);
        once_generics
            .make_where_clause()
            .predicates
            .push(syn::parse_quote!( __V: #( VisitFieldOnce<#value_tys> )+* ));
    }
    let (once_impl_generics, _, once_where_clause) = once_generics.split_for_impl();

    if registry.is_empty() {
        return quote!(
            impl #once_impl_generics VisitFieldsOnce<__V> for #name #ty_generics
            #once_where_clause
            {
                fn visit_fields_once(self, _visitor: &mut __V) {}
            }
        );
    }

    let registered = registry
        .iter()
        .map(|m| m.field().pos)
        .collect::<std::collections::HashSet<usize>>();

    let destructure = match ds.kind {
        StructKind::Braced => {
            let entries = ds.fields.iter().map(|field| {
                let fident = &field.ident;
                if registered.contains(&field.pos) {
                    // The binding of a named field is the field name itself,
                    // so the shorthand pattern binds it directly.
                    let binding = field.pat_ident();
                    quote!( #binding )
                } else {
                    quote!( #fident: _ )
                }
            });
            quote!( let #name { #( #entries ),* } = self; )
        }
        StructKind::Tuple => {
            let entries = ds.fields.iter().map(|field| {
                if registered.contains(&field.pos) {
                    let binding = field.pat_ident();
                    quote!( #binding )
                } else {
                    quote!(_)
                }
            });
            quote!( let #name ( #( #entries ),* ) = self; )
        }
        // A unit struct has no fields, so the registry is always empty
        // and this arm is unreachable.
        StructKind::Unit => TokenStream2::new(),
    };

    let visits = registry.iter().map(|member| {
        let member_name = member.name();
        let binding = member.field().pat_ident();
        quote!( visitor.visit_field_once(#member_name, #binding); )
    });

    quote!(
        impl #once_impl_generics VisitFieldsOnce<__V> for #name #ty_generics
        #once_where_clause
        {
            fn visit_fields_once(self, visitor: &mut __V) {
                #destructure
                #( #visits )*
            }
        }
    )
}

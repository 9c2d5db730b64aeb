/*!
An implementation detail of struct_visit.
*/

extern crate proc_macro;

use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;

#[macro_use]
mod macros;

mod attribute_parsing;
mod datastructure;
mod registry;
mod visitable;

/// This macro is documented in `struct_visit::docs::visitable_macro`.
#[proc_macro_derive(Visitable, attributes(visit))]
pub fn derive_visitable(input: TokenStream1) -> TokenStream1 {
    parse_or_compile_err(input, visitable::derive).into()
}

fn parse_or_compile_err<P, F>(input: TokenStream1, f: F) -> TokenStream2
where
    P: syn::parse::Parse,
    F: FnOnce(P) -> Result<TokenStream2, syn::Error>,
{
    match syn::parse::<P>(input).and_then(f) {
        Ok(x) => x,
        Err(e) => e.to_compile_error(),
    }
}

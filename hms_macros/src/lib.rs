use proc_macro::TokenStream;
use syn::{parse_macro_input, LitStr};

mod duration;

/// Expands an `H:MM:SS` string literal into a `Duration` constant.
///
/// Re-exported and documented as `hms::hms`.
#[proc_macro]
pub fn hms(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    duration::literal(&literal)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

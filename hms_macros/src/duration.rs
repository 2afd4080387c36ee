use proc_macro2::TokenStream;
use quote::quote;
use regex::Regex;
use syn::LitStr;

// Must agree with `Duration::from_string` in the main crate, which can't be called from here.
fn parse_seconds(literal: &LitStr) -> syn::Result<u64> {
    let value = literal.value();
    let component = Regex::new(r"^[0-9]+$").unwrap();

    let parts = value.split(':').collect::<Vec<_>>();
    if !parts.iter().all(|part| component.is_match(part)) {
        return Err(syn::Error::new(
            literal.span(),
            format!("invalid duration {value:?}: expected `H:MM:SS` with only numeric components"),
        ));
    }

    let [hours, minutes, seconds] = parts[..] else {
        return Err(syn::Error::new(
            literal.span(),
            format!(
                "invalid duration: expected 3 colon-separated components, found {}",
                parts.len()
            ),
        ));
    };

    let out_of_range = || syn::Error::new(literal.span(), "duration out of range");
    let [hours, minutes, seconds] =
        [hours, minutes, seconds].map(|part| part.parse::<u64>().map_err(|_| out_of_range()));

    hours?
        .checked_mul(3600)
        .zip(minutes?.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .zip(Some(seconds?))
        .and_then(|(hm, s)| hm.checked_add(s))
        .ok_or_else(out_of_range)
}

pub fn literal(literal: &LitStr) -> syn::Result<TokenStream> {
    let seconds = parse_seconds(literal)?;
    Ok(quote! { ::hms::Duration::from_secs(#seconds) })
}

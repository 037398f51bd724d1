use super::BehaviorInput;

use syn::ext::IdentExt;
use syn::parse::Parse;

impl syn::parse::Parse for BehaviorInput {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let member = input
            .call(syn::Ident::parse_any)
            .map_err(|err| syn::Error::new(err.span(), "Expected member name"))?;

        let args = if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            Some(content.parse_terminated(syn::Expr::parse, syn::Token![,])?)
        } else {
            None
        };

        if !input.is_empty() {
            return Err(syn::Error::new(input.span(), "Excessive tokens"));
        }

        Ok(BehaviorInput { member, args })
    }
}

use quote::quote;
use syn::ext::IdentExt;

mod parse;

pub struct BehaviorInput {
    member: syn::Ident,
    args: Option<syn::punctuated::Punctuated<syn::Expr, syn::token::Comma>>,
}

pub fn generate(input: BehaviorInput) -> proc_macro2::TokenStream {
    let member = input.member.unraw();
    let member_lit = syn::LitStr::new(&member.to_string(), member.span());

    let Some(args) = input.args else {
        return quote! {
            ::callorder::Behavior::property(#member_lit)
        };
    };

    let args = args.iter().map(|arg| match arg {
        syn::Expr::Infer(_) => quote! { ::callorder::Arg::Any },
        expr => quote! { ::callorder::Arg::exact(&(#expr)) },
    });

    quote! {
        ::callorder::Behavior::method(#member_lit, ::std::vec![#(#args),*])
    }
}

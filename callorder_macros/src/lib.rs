//! The callorder procedural macros.

#![forbid(unsafe_code)]

mod behavior;

extern crate proc_macro;

///
/// The `behavior` macro.
/// Re-exported by `callorder`, it is documented there.
///
#[proc_macro]
pub fn behavior(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as behavior::BehaviorInput);

    let output = behavior::generate(input);

    // println!("{output}");

    proc_macro::TokenStream::from(output)
}

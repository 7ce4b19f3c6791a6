use proc_macro::TokenStream;
use quote::quote;

fn compile_error(message: &str) -> proc_macro2::TokenStream {
    quote! {
        compile_error!(#message);
    }
}

/// Declare a color model.
///
/// The struct is emitted with every field public, the usual value derives, a
/// `const fn new` taking the fields in declaration order and a conversion into
/// the `Color` variant carrying the same name as the struct.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return compile_error("Models can not be generic, each one maps to a single Color variant.")
            .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return compile_error("Models must use named fields, one for each component of the color.")
            .into();
    };

    if named.named.is_empty() {
        return compile_error("Models must have at least one component.").into();
    }

    // Every component is part of the public value.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = named
        .named
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();
    let new_doc = format!("Create a new [`{struct_name}`] from its components.");

    let model_impl = quote! {
        impl #struct_name {
            #[doc = #new_doc]
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names),*
                }
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}

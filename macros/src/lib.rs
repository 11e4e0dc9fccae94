use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model struct from a list of component fields.
///
/// Every field becomes a public `Component`. The struct gets a positional
/// `new`, array conversions and an implementation of `crate::models::Model`
/// naming the colorspace after the struct (`Cmyk` becomes `"cmyk"`).
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must use named fields, one for each component of the color.")
        }
        .into();
    }

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let fields = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_names = fields.iter().map(|f| f.to_string()).collect::<Vec<_>>();
    let count = fields.len();

    // Make sure the component fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let space_name = syn::LitStr::new(
        struct_name.to_string().to_case(Case::Snake).as_str(),
        Span::call_site(),
    );

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color space.
            pub fn new(#(#fields: crate::color::Component),*) -> Self {
                Self { #(#fields),* }
            }

            /// Return the components of this color in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#fields),*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                let [#(#fields),*] = value;
                Self { #(#fields),* }
            }
        }

        impl crate::models::Model for #struct_name {
            const NAME: &'static str = #space_name;
            const COMPONENTS: &'static [&'static str] = &[#(#field_names),*];

            fn to_values(&self) -> Vec<crate::color::Component> {
                vec![#(self.#fields),*]
            }

            fn from_values(values: &[crate::color::Component]) -> Option<Self> {
                match *values {
                    [#(#fields),*] => Some(Self { #(#fields),* }),
                    _ => None,
                }
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

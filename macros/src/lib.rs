use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model made of numeric channels.
///
/// The struct must have named fields only and carry a `#[scale = EXPR]`
/// attribute giving the upper bound of every channel. The generated type is
/// immutable: fields stay private and are exposed through getters, and the
/// public constructor only accepts whole numbers within `0..=SCALE`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the color.")
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one channel.")
        }
        .into();
    }

    // Pull out the scale and drop the attribute, it is not a real one.
    let mut scale = None;
    let mut attrs = Vec::with_capacity(input.attrs.len());
    for attr in input.attrs.drain(..) {
        if attr.path().is_ident("scale") {
            if let syn::Meta::NameValue(ref nv) = attr.meta {
                scale = Some(nv.value.clone());
                continue;
            }
            return quote! {
                compile_error!("Expected `#[scale = EXPR]`.")
            }
            .into();
        }
        attrs.push(attr);
    }
    input.attrs = attrs;

    let Some(scale) = scale else {
        return quote! {
            compile_error!("Models need a `#[scale = EXPR]` attribute.")
        }
        .into();
    };

    let mut fields = vec![];
    let mut field_docs = vec![];
    for field in named.named.iter_mut() {
        // Channels can only be read, never written.
        field.vis = syn::Visibility::Inherited;
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        fields.push(ident);
        field_docs.push(
            field
                .attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .cloned()
                .collect::<Vec<_>>(),
        );
    }

    let count = fields.len();
    let channel_names = fields.iter().map(|f| f.to_string()).collect::<Vec<_>>();
    let indices = 0..count;

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .expect("derive attribute is well formed");
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Upper bound of every channel of this model.
            pub const SCALE: crate::color::Component = #scale;

            /// Create a new color from its channels. Each value can be any
            /// primitive number and must be a whole number within
            /// `0..=SCALE`.
            pub fn new(
                #(#fields: impl num_traits::ToPrimitive + std::fmt::Display,)*
            ) -> crate::error::Result<Self> {
                Ok(Self {
                    #(
                        #fields: crate::math::channel(
                            <Self as crate::color::HasSpace>::SPACE,
                            #channel_names,
                            #fields,
                            Self::SCALE,
                        )?,
                    )*
                })
            }

            /// Build a model from channels that come out of a conversion.
            /// Conversions may land a hair outside the range in precise
            /// mode, so nothing is checked here.
            pub(crate) fn new_unchecked(
                #(#fields: crate::color::Component,)*
            ) -> Self {
                Self { #(#fields,)* }
            }

            #(
                #(#field_docs)*
                pub fn #fields(&self) -> crate::color::Component {
                    self.#fields
                }
            )*

            /// Return the channels of this color in declaration order.
            pub fn to_components(&self) -> [crate::color::Component; #count] {
                [#(self.#fields,)*]
            }
        }

        impl TryFrom<[crate::color::Component; #count]> for #struct_name {
            type Error = crate::error::Error;

            fn try_from(value: [crate::color::Component; #count]) -> crate::error::Result<Self> {
                Self::new(#(value[#indices],)*)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", <Self as crate::color::HasSpace>::SPACE)?;
                for (i, value) in self.to_components().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

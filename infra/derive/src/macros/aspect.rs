use crate::macros::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{ItemStruct, LitStr, Meta};

pub fn expand_aspect(args: TokenStream, input: ItemStruct) -> TokenStream {
    let name = match aspect_name(args, &input) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error(),
    };

    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");
    let semi = matches!(fields, syn::Fields::Unit | syn::Fields::Unnamed(_)).then(|| quote! { ; });

    let existing = derived_trait_names(attrs);
    let missing: Vec<_> = [("Debug", quote! { Debug }), ("Clone", quote! { Clone })]
        .into_iter()
        .filter(|(name, _)| !existing.contains(*name))
        .map(|(_, derive)| derive)
        .collect();
    let inner_derives = (!missing.is_empty()).then(|| quote! { #[derive(#(#missing),*)] });

    quote! {
        #(#attrs)*
        #inner_derives
        #vis struct #inner #fields #semi

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: std::sync::Arc<#inner>,
        }

        impl #handle {
            /// Canonical aspect name used as the registration key.
            pub const NAME: &'static str = #name;

            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::hunt_domain::aspect::Aspect for #handle {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}

fn aspect_name(args: TokenStream, input: &ItemStruct) -> syn::Result<LitStr> {
    let metas = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated.parse2(args)?;

    let mut name = None;
    for meta in metas {
        let Meta::NameValue(pair) = &meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `name = \"...\"`"));
        };
        if !pair.path.is_ident("name") {
            return Err(syn::Error::new_spanned(&pair.path, "Unsupported argument; expected name"));
        }
        let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(value), .. }) = &pair.value else {
            return Err(syn::Error::new_spanned(&pair.value, "name must be a string literal"));
        };
        if value.value().trim().is_empty() {
            return Err(syn::Error::new_spanned(value, "aspect name cannot be empty"));
        }
        name = Some(value.clone());
    }

    Ok(name.unwrap_or_else(|| {
        LitStr::new(&input.ident.to_string().to_lowercase(), input.ident.span())
    }))
}

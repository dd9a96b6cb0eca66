use crate::macros::derived_trait_names;
use crate::macros::error::single_generic;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Attribute, Fields, Ident, ItemStruct, Lit, LitStr, Meta};

/// Expands the `#[plain_model]` attribute macro.
///
/// Emits the annotated record with its serde policy applied, followed by the
/// companion patch struct and its `Patch` implementation.
pub fn expand_plain_model(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    let PlainArgs { rename_all, deny_unknown_fields } = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "plain_model does not support generics")
            .to_compile_error();
    }
    let Fields::Named(_) = &input.fields else {
        return syn::Error::new_spanned(&input.ident, "plain_model requires named fields")
            .to_compile_error();
    };

    let existing_rename = match serde_rename_all(&input.attrs) {
        Ok(existing) => existing,
        Err(err) => return err.to_compile_error(),
    };
    let rename_all = match (existing_rename, rename_all) {
        (Some(existing), Some(requested)) if existing.value() != requested.value() => {
            return syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or match plain_model(rename_all = \"...\")",
            )
            .to_compile_error();
        },
        (Some(existing), _) => existing,
        (None, requested) => {
            let value = requested.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
            input.attrs.push(syn::parse_quote! { #[serde(rename_all = #value)] });
            value
        },
    };
    if deny_unknown_fields {
        input.attrs.push(syn::parse_quote! { #[serde(deny_unknown_fields)] });
    }

    let derives = derive_attr(&input.attrs);
    apply_optional_policy(&mut input);

    let patch = match expand_patch(&input, &rename_all) {
        Ok(patch) => patch,
        Err(err) => return err.to_compile_error(),
    };

    quote! {
        #derives
        #input

        #patch
    }
}

struct PlainArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn parse_args(args: TokenStream) -> syn::Result<PlainArgs> {
    let metas = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated.parse2(args)?;

    let mut parsed = PlainArgs { rename_all: None, deny_unknown_fields: false };
    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `key = value` arguments"));
        };
        let syn::Expr::Lit(syn::ExprLit { lit, .. }) = &pair.value else {
            return Err(syn::Error::new_spanned(&pair.value, "Expected a literal value"));
        };

        match (pair.path.get_ident().map(ToString::to_string).as_deref(), lit) {
            (Some("rename_all"), Lit::Str(value)) => parsed.rename_all = Some(value.clone()),
            (Some("deny_unknown_fields"), Lit::Bool(value)) => parsed.deny_unknown_fields = value.value,
            _ => {
                return Err(syn::Error::new_spanned(
                    &pair,
                    "Unsupported argument; expected rename_all = \"...\" or deny_unknown_fields = bool",
                ));
            },
        }
    }

    Ok(parsed)
}

fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename_all = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(rename_all)
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let existing = derived_trait_names(attrs);
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("PartialEq", quote! { PartialEq }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    let missing: Vec<_> =
        wanted.into_iter().filter(|(name, _)| !existing.contains(*name)).map(|(_, t)| t).collect();

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

/// Absent optional keys must stay absent on output.
fn apply_optional_policy(input: &mut ItemStruct) {
    for field in &mut input.fields {
        let has_serde = field.attrs.iter().any(|a| a.path().is_ident("serde"));
        if !has_serde && single_generic(&field.ty, "Option").is_some() {
            field
                .attrs
                .push(syn::parse_quote! { #[serde(default, skip_serializing_if = "Option::is_none")] });
        }
    }
}

fn patch_ident(plain: &Ident) -> Ident {
    let name = plain.to_string();
    let base = name.strip_suffix("Plain").unwrap_or(&name);
    format_ident!("{base}Patch")
}

/// Keeps only the key-naming parts of a field's serde attributes.
fn naming_attrs(attrs: &[Attribute]) -> syn::Result<Vec<TokenStream>> {
    let mut kept = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") || meta.path.is_ident("alias") {
                let key = meta.path.clone();
                let value: LitStr = meta.value()?.parse()?;
                kept.push(quote! { #[serde(#key = #value)] });
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(kept)
}

fn expand_patch(input: &ItemStruct, rename_all: &LitStr) -> syn::Result<TokenStream> {
    let plain = &input.ident;
    let patch = patch_ident(plain);
    let vis = &input.vis;
    let doc = format!("Partial overrides for [`{plain}`]; present fields replace the base value.");

    // A present key always overrides, so an explicit `null` must reach optional fields.
    let fields = input
        .fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let field_vis = &field.vis;
            let naming = naming_attrs(&field.attrs)?;
            Ok(quote! {
                #(#naming)*
                #[serde(deserialize_with = "::hunt_domain::plain::present")]
                #field_vis #ident: Option<#ty>
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let merges = input.fields.iter().map(|field| {
        let ident = &field.ident;
        quote! {
            if let Some(value) = self.#ident {
                target.#ident = value;
            }
        }
    });

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Deserialize)]
        #[serde(default, rename_all = #rename_all)]
        #vis struct #patch {
            #(#fields),*
        }

        #[automatically_derived]
        impl ::hunt_domain::plain::Patch<#plain> for #patch {
            fn apply(self, target: &mut #plain) {
                #(#merges)*
            }
        }
    })
}

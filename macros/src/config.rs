//! Config derive macro - generates FIELDS and template().

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta};

/// Parsed field information.
#[derive(Debug)]
struct FieldInfo {
    name: syn::Ident,
    toml_name: String,
    doc: Option<String>,
    inline_doc: bool,
    hidden: bool,
    skip: bool,
}

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_string_attr(&input.attrs, "section")
        .unwrap_or_else(|| infer_section(&name.to_string()));

    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let attrs = &field.attrs;
            Some(FieldInfo {
                name: ident.clone(),
                toml_name: get_string_attr(attrs, "name").unwrap_or_else(|| ident.to_string()),
                doc: extract_doc_comment(attrs),
                inline_doc: has_attr(attrs, "inline_doc"),
                hidden: has_attr(attrs, "hidden"),
                skip: has_attr(attrs, "skip"),
            })
        })
        .filter(|f| !f.skip)
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{}.{}", section, f.toml_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let template_pushes = field_infos.iter().filter(|f| !f.hidden).map(|f| {
        let name = &f.name;
        let key = &f.toml_name;
        let doc = f.doc.clone().unwrap_or_default();
        let inline = f.inline_doc && !doc.contains('\n');
        quote! {
            crate::config::template::push_field(&mut out, #key, #doc, #inline, &self.#name);
        }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Render the fields of this section as documented TOML.
            pub fn template(&self) -> String {
                let mut out = String::new();
                #(#template_pushes)*
                out
            }

            /// Render this section under its own `[section]` header.
            pub fn template_with_header(&self) -> String {
                crate::config::template::table(Self::TEMPLATE_DOC, Self::TEMPLATE_SECTION, &self.template())
            }
        }
    }
}

// ============================================================================
// Attribute parsing helpers
// ============================================================================

fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `name = "x"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(
            docs.iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
        )
    }
}

fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("SiteInfoConfig"), "site_info");
        assert_eq!(infer_section("PagesSectionConfig"), "pages");
        assert_eq!(infer_section("Socials"), "socials");
    }

    #[test]
    fn test_extract_doc_comment_joins_lines() {
        let input: DeriveInput = syn::parse_quote! {
            /// First line.
            /// Second line.
            struct Foo { a: u8 }
        };
        assert_eq!(
            extract_doc_comment(&input.attrs).as_deref(),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn test_field_attrs() {
        let input: DeriveInput = syn::parse_quote! {
            struct Foo {
                #[config(name = "title", inline_doc)]
                a: String,
            }
        };
        let Data::Struct(data) = &input.data else { unreachable!() };
        let field = data.fields.iter().next().unwrap();
        assert_eq!(get_string_attr(&field.attrs, "name").as_deref(), Some("title"));
        assert!(has_attr(&field.attrs, "inline_doc"));
        assert!(!has_attr(&field.attrs, "skip"));
    }
}

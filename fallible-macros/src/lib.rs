extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{GenericArgument, ItemFn, PathArguments, ReturnType, Type, parse_macro_input, parse_quote};

/// #[boundary] - Run a function under the `fallible` boundary adapter
///
/// This macro transforms a function returning `Result<T, E>` into one
/// returning `fallible::Outcome<T, fallible::Error>`. The original body runs
/// through `fallible::attempt` (or `fallible::attempt_async` for an
/// `async fn`), so both an `Err` and a panic come back as a `Failure`.
///
/// Example:
/// ```rust,ignore
/// #[boundary]
/// fn read_config(path: &str) -> Result<String, std::io::Error> {
///     std::fs::read_to_string(path)
/// }
///
/// // read_config now returns Outcome<String, fallible::Error>
/// ```
///
/// `return` and `?` inside the body keep their meaning: they leave the
/// original body with a `Result`, which is then converted.
#[proc_macro_attribute]
pub fn boundary(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(Span::call_site(), "#[boundary] does not take arguments")
            .to_compile_error()
            .into();
    }

    let input_fn = parse_macro_input!(item as ItemFn);
    match expand_boundary(input_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_boundary(input_fn: ItemFn) -> syn::Result<TokenStream2> {
    let ItemFn {
        attrs,
        vis,
        mut sig,
        block,
    } = input_fn;

    let original_return = match &sig.output {
        ReturnType::Type(_, ty) => ty.clone(),
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                &sig,
                "#[boundary] functions must return `Result<T, E>`",
            ));
        }
    };

    let (ok_type, err_type) = result_arguments(&original_return).ok_or_else(|| {
        syn::Error::new_spanned(
            &original_return,
            "#[boundary] functions must return `Result<T, E>`",
        )
    })?;
    // Aliases such as `io::Result<T>` leave the error type to inference
    let err_type = err_type.map_or_else(|| quote!(_), |ty| quote!(#ty));

    sig.output = parse_quote!(-> ::fallible::Outcome<#ok_type, ::fallible::Error>);

    let body = if sig.asyncness.is_some() {
        quote! {
            ::fallible::attempt_async::<#ok_type, #err_type, _>(async move #block).await
        }
    } else {
        quote! {
            ::fallible::attempt(move || -> #original_return #block)
        }
    };

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            #body
        }
    })
}

/// Extract `T` and, when present, `E` from a `Result<T, E>` type
fn result_arguments(ty: &Type) -> Option<(Type, Option<Type>)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return None;
    };

    let mut types = generics.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None,
    });
    let ok_type = types.next()?;
    Some((ok_type, types.next()))
}

// No tests in proc macro crate - they can't use the macros defined here.
// The expansions are covered by tests/boundary_macro.rs in the fallible crate.
// The rejected inputs have no compile-fail harness; each one is reported
// as a spanned compile error:
// - `#[boundary(anything)]`: "#[boundary] does not take arguments"
// - `fn f() { .. }` (no return type): "#[boundary] functions must return `Result<T, E>`",
//   spanned on the signature
// - `fn f() -> Option<u8>` (any non-`Result` type): the same message, spanned on the type

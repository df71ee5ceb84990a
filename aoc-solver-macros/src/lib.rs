//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive macro that implements `Solver` by dispatching each part to its
/// `PartSolver<N>` impl
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `name`: Required. The puzzle title shown by the runner
/// - `parts`: Optional. Number of parts, 1 or 2 (default 2)
///
/// # Requirements
///
/// The type must implement `AocParser` and `PartSolver<N>` for every
/// `N` in `1..=parts`. A missing part impl is a compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `Day4: PartSolver<2>` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, PartSolver};
///
/// #[derive(AocSolver)]
/// #[aoc(day = 4, name = "Scratchcards")]
/// struct Day4;
///
/// impl AocParser for Day4 { /* ... */ }
/// impl PartSolver<1> for Day4 { /* ... */ }
/// impl PartSolver<2> for Day4 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct AocAttr {
    day: u8,
    name: String,
    parts: u8,
}

fn parse_aoc_attr(input: &DeriveInput) -> syn::Result<AocAttr> {
    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AocSolver derive macro requires #[aoc(day = .., name = \"..\")] attribute",
            )
        })?;

    let mut day: Option<LitInt> = None;
    let mut name: Option<LitStr> = None;
    let mut parts: Option<LitInt> = None;

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            day = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("parts") {
            parts = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("expected `day`, `name` or `parts`"));
        }
        Ok(())
    })?;

    let day_lit = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `day`"))?;
    let day: u8 = day_lit.base10_parse()?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(day_lit, "`day` must be between 1 and 25"));
    }

    let name = name
        .ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required `name`"))?
        .value();

    let parts = match parts {
        Some(lit) => {
            let value: u8 = lit.base10_parse()?;
            if !(1..=2).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "`parts` must be 1 or 2"));
            }
            value
        }
        None => 2,
    };

    Ok(AocAttr { day, name, parts })
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let AocAttr { day, name, parts } = parse_aoc_attr(&input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let arms = (1..=parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #ident #ty_generics #where_clause {
            const DAY: u8 = #day;
            const NAME: &'static str = #name;
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::aoc_solver::Answer, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

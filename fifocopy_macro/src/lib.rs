use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;
use syn::Error;
use syn::Result;
use syn::parse_macro_input;
use syn::spanned::Spanned;
use syn::{self};

/// Ensures the input is a `#[repr(transparent)]` single-field tuple struct.
/// Returns the inner field type on success.
fn check_transparent_single_tuple_struct(ast: &DeriveInput) -> Result<syn::Type> {
    let ident = &ast.ident;

    let mut is_transparent = false;
    for attr in &ast.attrs {
        if attr.path().is_ident("repr") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("transparent") {
                    is_transparent = true;
                }
                Ok(())
            })?;
        }
    }
    if !is_transparent {
        return Err(Error::new(
            ident.span(),
            "Struct must be #[repr(transparent)] to #[derive(FifoWord)]",
        ));
    }

    match &ast.data {
        syn::Data::Struct(s) => match &s.fields {
            syn::Fields::Unnamed(t) if t.unnamed.len() == 1 => Ok(t.unnamed[0].ty.clone()),
            _ => Err(Error::new(
                s.fields.span(),
                "Struct must be a single-field tuple struct to #[derive(FifoWord)]",
            )),
        },
        _ => Err(Error::new(
            ast.span(),
            "Only tuple structs are supported by #[derive(FifoWord)]",
        )),
    }
}

/// Finds the single named field carrying `#[fifo]`.
fn find_fifo_field(ast: &DeriveInput) -> Result<(syn::Ident, syn::Type)> {
    let syn::Data::Struct(s) = &ast.data else {
        return Err(Error::new(
            ast.span(),
            "Only structs are supported by #[derive(FifoSlot)]",
        ));
    };
    let syn::Fields::Named(named) = &s.fields else {
        return Err(Error::new(
            s.fields.span(),
            "Struct must have named fields to #[derive(FifoSlot)]",
        ));
    };

    let mut found: Option<&syn::Field> = None;
    for field in &named.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("fifo") {
                continue;
            }
            attr.meta.require_path_only()?;
            if found.is_some() {
                return Err(Error::new(
                    attr.span(),
                    "only one field may be marked #[fifo]",
                ));
            }
            found = Some(field);
        }
    }

    match found {
        Some(field) => match &field.ident {
            Some(name) => Ok((name.clone(), field.ty.clone())),
            None => Err(Error::new(field.span(), "#[fifo] field must be named")),
        },
        None => Err(Error::new(
            ast.ident.span(),
            "#[derive(FifoSlot)] needs exactly one field marked #[fifo]",
        )),
    }
}

/// Const assertion that `ty` transfers 1, 2 or 4 bytes per access.
fn width_assertion(ty: &TokenStream2) -> TokenStream2 {
    quote! {
        const _: () = ::core::assert!(
            ::core::matches!(<#ty as ::fifocopy::FifoWord>::WIDTH, 1 | 2 | 4),
            "FIFO width beyond 32-bit / 4 bytes not implemented"
        );
    }
}

/// Derives `FifoWord`, `ReadSlot` and `WriteSlot` for a transparent newtype
/// over a FIFO word (`u8`, `u16`, `u32` or another derived word).
#[proc_macro_derive(FifoWord)]
pub fn derive_fifo_word(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let ident = &ast.ident;

    let raw_ty = match check_transparent_single_tuple_struct(&ast) {
        Ok(ty) => ty,
        Err(e) => return e.to_compile_error().into(),
    };
    let width_check = width_assertion(&quote!(#ident));

    let expanded = quote! {
        // Size/align equality with inner raw type
        const _: [(); ::core::mem::size_of::<#ident>()] =
            [(); ::core::mem::size_of::<#raw_ty>()];
        const _: [(); ::core::mem::align_of::<#ident>()] =
            [(); ::core::mem::align_of::<#raw_ty>()];

        impl ::fifocopy::FifoWord for #ident
        where
            #raw_ty: ::fifocopy::FifoWord,
        {
            const WIDTH: usize = <#raw_ty as ::fifocopy::FifoWord>::WIDTH;
            #[inline] fn to_bits(self) -> u32 { ::fifocopy::FifoWord::to_bits(self.0) }
            #[inline] fn from_bits(bits: u32) -> Self {
                Self(<#raw_ty as ::fifocopy::FifoWord>::from_bits(bits))
            }
        }

        #width_check

        impl ::fifocopy::ReadSlot for #ident {
            type Word = Self;
            #[inline] fn load(&self) -> Self { *self }
        }

        impl ::fifocopy::WriteSlot for #ident {
            type Word = Self;
            #[inline] fn store(&mut self, word: Self) { *self = word; }
        }
    };
    expanded.into()
}

/// Derives `ReadSlot` and `WriteSlot` for a struct whose FIFO payload is the
/// one field marked `#[fifo]`. Every other field is padding and is never
/// accessed.
#[proc_macro_derive(FifoSlot, attributes(fifo))]
pub fn derive_fifo_slot(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let (field, field_ty) = match find_fifo_field(&ast) {
        Ok(found) => found,
        Err(e) => return e.to_compile_error().into(),
    };
    let width_check = if ast.generics.params.is_empty() {
        width_assertion(&quote!(#field_ty))
    } else {
        TokenStream2::new()
    };

    // Field access goes through a copy so `#[repr(packed)]` layouts work.
    let expanded = quote! {
        #width_check

        impl #impl_generics ::fifocopy::ReadSlot for #ident #ty_generics #where_clause {
            type Word = #field_ty;
            #[inline] fn load(&self) -> #field_ty { self.#field }
        }

        impl #impl_generics ::fifocopy::WriteSlot for #ident #ty_generics #where_clause {
            type Word = #field_ty;
            #[inline] fn store(&mut self, word: #field_ty) { self.#field = word; }
        }
    };
    expanded.into()
}

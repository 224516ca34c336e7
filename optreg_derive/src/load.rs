mod attribute;
mod parameter;
mod parser;

pub(self) fn unknown_error(
    context: &str,
    spanned: &impl syn::spanned::Spanned,
    key: &str,
    allowed: &[&str],
) -> syn::Error {
    syn::Error::new(
        spanned.span(),
        format!(
            "Invalid - {context} does not support `#[optreg({key} = ..)]`; expected one of: {}.",
            allowed
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    )
}

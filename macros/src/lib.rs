//! Proc macros for nucleus: `view!` RSX composition.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `nucleus`.

use proc_macro::TokenStream;

mod view_macro;

/// RSX-style node composition macro.
///
/// Expands JSX-like syntax into nucleus builder calls and evaluates to a
/// `Vec<nucleus::Node>`.
///
/// # Syntax
///
/// - `<Tag />`: element without children
/// - `<Tag attr="val"> ... </Tag>`: element with children
///
/// # Tags
///
/// - `Box`, `Container`, `HStack`, `VStack`: the built-in components
/// - `Header`, `Footer`, `Grow`: fragments
/// - `Text`, `Title`: text components, which take a `content` (or `text`)
///   attribute and no children
/// - any lowercase tag becomes `Node::new("tag")`
///
/// # Attributes
///
/// - `class="..."` becomes `.classes("...")`
/// - `context="..."` becomes `.set_context("...")`
/// - anything else becomes `.attr("name", "...")`; hyphenated names such as
///   `data-id` are accepted
///
/// # Example
///
/// ```ignore
/// let nodes = view! {
///     <VStack class="p-4 md:p-8">
///         <Header><Title content="Inbox" /></Header>
///         <Text content="No messages" />
///         <a href="/compose">
///             <Text content="Compose" />
///         </a>
///     </VStack>
/// };
/// ```
#[proc_macro]
pub fn view(input: TokenStream) -> TokenStream {
    view_macro::view_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

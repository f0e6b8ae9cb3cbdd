//! RSX view! macro: parse JSX-like syntax and generate nucleus builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A parsed RSX attribute: `name="value"`. Names may contain hyphens.
#[derive(Clone)]
pub(crate) struct Attribute {
    pub name: String,
    pub value: LitStr,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("value", &self.value.value())
            .finish()
    }
}

/// A parsed RSX element: `<Tag attrs... />` or `<Tag attrs...> children </Tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
    pub self_closing: bool,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

/// The top-level view! input: a sequence of elements.
#[derive(Debug)]
struct ViewInput {
    elements: Vec<Element>,
}

// ---------------------------------------------------------------------------
// Tag table
// ---------------------------------------------------------------------------

/// Attributes that carry the text of `Text` and `Title`.
const CONTENT_ATTRS: &[&str] = &["content", "text"];

/// How a capitalised tag is built.
enum Component {
    /// `nucleus::components::<fn>(body)`
    Container(&'static str),
    /// `nucleus::components::<fn>(content)`, no children allowed
    Text(&'static str),
}

fn component(tag: &str) -> Option<Component> {
    Some(match tag {
        "Box" => Component::Container("boxed"),
        "Container" => Component::Container("container"),
        "HStack" => Component::Container("hstack"),
        "VStack" => Component::Container("vstack"),
        "Header" => Component::Container("header"),
        "Footer" => Component::Container("footer"),
        "Grow" => Component::Container("grow"),
        "Text" => Component::Text("text"),
        "Title" => Component::Text("title"),
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ViewInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut elements = Vec::new();
        while !input.is_empty() {
            elements.push(parse_element(input)?);
        }
        Ok(ViewInput { elements })
    }
}

/// Parse an attribute name such as `href`, `type` or `data-row-id`.
fn parse_attr_name(input: ParseStream) -> Result<String> {
    let mut name = Ident::parse_any(input)?.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let part = Ident::parse_any(input)?;
        name.push('-');
        name.push_str(&part.to_string());
    }
    Ok(name)
}

/// Parse a single RSX element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;
    let tag = Ident::parse_any(input)?;

    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
                self_closing: true,
            });
        }

        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        let name = parse_attr_name(input)?;
        input.parse::<Token![=]>()?;
        let value: LitStr = input.parse()?;
        attrs.push(Attribute { name, value });
    }

    let mut children = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag = Ident::parse_any(input)?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag, closing_tag
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            children.push(parse_element(input)?);
        } else {
            return Err(input.error("expected `<` to start a child element or `</` to close the parent"));
        }
    }

    Ok(Element {
        tag,
        attrs,
        children,
        self_closing: false,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn generate_body(elem: &Element) -> Result<TokenStream> {
    if elem.children.is_empty() {
        return Ok(quote! { ::nucleus::Body::new() });
    }
    let children = elem
        .children
        .iter()
        .map(generate_element)
        .collect::<Result<Vec<_>>>()?;
    Ok(quote! { ::nucleus::Body::from(::std::vec![#(#children),*]) })
}

/// Generate the expression building a single element.
fn generate_element(elem: &Element) -> Result<TokenStream> {
    let tag = &elem.tag;
    let tag_str = tag.to_string();
    let is_lowercase = tag_str.starts_with(|c: char| c.is_ascii_lowercase());

    let mut consumed: Option<&str> = None;
    let constructor = match component(&tag_str) {
        Some(Component::Container(function)) => {
            let function = Ident::new(function, tag.span());
            let body = generate_body(elem)?;
            quote! { ::nucleus::components::#function(#body) }
        }
        Some(Component::Text(function)) => {
            if !elem.children.is_empty() {
                return Err(Error::new(
                    tag.span(),
                    format!("`<{tag_str}>` takes a `content` attribute, not children"),
                ));
            }
            let content = elem
                .attrs
                .iter()
                .find(|a| CONTENT_ATTRS.contains(&a.name.as_str()))
                .ok_or_else(|| {
                    Error::new(tag.span(), format!("`<{tag_str}>` requires a `content` attribute"))
                })?;
            consumed = Some(content.name.as_str());
            let function = Ident::new(function, tag.span());
            let value = &content.value;
            quote! { ::nucleus::components::#function(#value) }
        }
        None if is_lowercase => {
            let body = generate_body(elem)?;
            quote! { ::nucleus::Node::new(#tag_str).body(#body) }
        }
        None => {
            return Err(Error::new(
                tag.span(),
                format!("unknown component `<{tag_str}>`; use a lowercase tag for plain elements"),
            ));
        }
    };

    let mut builder_calls = Vec::new();
    for attr in &elem.attrs {
        if consumed == Some(attr.name.as_str()) {
            continue;
        }
        let val = &attr.value;
        match attr.name.as_str() {
            "class" => builder_calls.push(quote! { .classes(#val) }),
            "context" => builder_calls.push(quote! { .set_context(#val) }),
            name => builder_calls.push(quote! { .attr(#name, #val) }),
        }
    }

    Ok(quote! {
        #constructor #(#builder_calls)*
    })
}

/// Entry point: generate code for the entire view! macro.
pub(crate) fn view_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ViewInput = syn::parse2(input)?;

    if parsed.elements.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "view! macro requires at least one element",
        ));
    }

    let element_exprs = parsed
        .elements
        .iter()
        .map(generate_element)
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        {
            let __nodes: ::std::vec::Vec<::nucleus::Node> = ::std::vec![#(#element_exprs),*];
            __nodes
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

//! logos-based parser for raw utility class strings.
//!
//! Classes are separated by whitespace. Inside a class, `:` separates variant
//! tokens from the trailing utility body:
//!
//! ```text
//! sm:hover:bg-red-500   ->  variants [sm, hover], utility "bg-red-500"
//! -mt-2                 ->  no variants, utility "-mt-2"
//! ```
//!
//! The utility body is kept verbatim; parsed utilities carry no uniqueness
//! group.

use std::str::FromStr;

use logos::Logos;

use super::utility::Utility;
use super::variant::Variant;

/// Token produced by the class lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    #[token(":")]
    Colon,

    /// Variant token or utility body, including arbitrary values such as
    /// `w-[10px]` or `bg-[#fff]`.
    #[regex(r"[A-Za-z0-9_.\-/\[\]#%!()]+")]
    Segment,
}

/// Errors raised while parsing a class string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter { found: String, offset: usize },

    #[error("empty variant in `{class}`")]
    EmptySegment { class: String },

    #[error("variant prefix `{class}` is not followed by a utility")]
    MissingUtility { class: String },

    #[error("expected a single class, found `{input}`")]
    MultipleClasses { input: String },
}

/// Parse a whitespace-separated class string into utilities.
pub fn parse_utilities(input: &str) -> Result<Vec<Utility>, ParseError> {
    let mut utilities = Vec::new();
    let mut segments: Vec<&str> = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut dangling_colon = false;

    for (token, span) in Token::lexer(input).spanned() {
        let token = token.map_err(|()| ParseError::UnexpectedCharacter {
            found: input[span.clone()].to_owned(),
            offset: span.start,
        })?;

        match token {
            Token::Segment => {
                start.get_or_insert(span.start);
                segments.push(&input[span.clone()]);
                dangling_colon = false;
                end = span.end;
            }
            Token::Colon => {
                let class_start = *start.get_or_insert(span.start);
                if segments.is_empty() || dangling_colon {
                    return Err(ParseError::EmptySegment {
                        class: input[class_start..span.end].to_owned(),
                    });
                }
                dangling_colon = true;
                end = span.end;
            }
            Token::Whitespace => {
                if let Some(class_start) = start.take() {
                    utilities.push(finish(&input[class_start..end], &segments, dangling_colon)?);
                    segments.clear();
                    dangling_colon = false;
                }
            }
        }
    }

    if let Some(class_start) = start {
        utilities.push(finish(&input[class_start..end], &segments, dangling_colon)?);
    }

    Ok(utilities)
}

fn finish(class: &str, segments: &[&str], dangling_colon: bool) -> Result<Utility, ParseError> {
    let Some((body, variants)) = segments.split_last().filter(|_| !dangling_colon) else {
        return Err(ParseError::MissingUtility {
            class: class.to_owned(),
        });
    };

    let mut utility = Utility::bare(*body);
    for token in variants {
        utility.add_variant(Variant::lookup(token));
    }
    Ok(utility)
}

impl FromStr for Utility {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut utilities = parse_utilities(s)?;
        if utilities.len() != 1 {
            return Err(ParseError::MultipleClasses { input: s.to_owned() });
        }
        Ok(utilities.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(input: &str) -> Vec<String> {
        parse_utilities(input)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn plain_classes() {
        assert_eq!(classes("flex p-4  text-red-500"), vec!["flex", "p-4", "text-red-500"]);
    }

    #[test]
    fn variants_are_parsed_and_reordered() {
        let utilities = parse_utilities("hover:sm:bg-red-500").unwrap();
        assert_eq!(utilities.len(), 1);
        let u = &utilities[0];
        assert_eq!(u.name(), "bg-red-500");
        assert_eq!(u.variants().len(), 2);
        assert_eq!(u.to_string(), "sm:hover:bg-red-500");
    }

    #[test]
    fn negative_and_arbitrary_values() {
        assert_eq!(classes("-mt-2 w-[10px] w-1/2"), vec!["-mt-2", "w-[10px]", "w-1/2"]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_utilities("").unwrap().is_empty());
        assert!(parse_utilities("   \n").unwrap().is_empty());
    }

    #[test]
    fn error_double_colon() {
        let err = parse_utilities("p-2 sm::p-4").unwrap_err();
        assert_eq!(err, ParseError::EmptySegment { class: "sm::".into() });
    }

    #[test]
    fn error_leading_colon() {
        let err = parse_utilities(":p-4").unwrap_err();
        assert_eq!(err, ParseError::EmptySegment { class: ":".into() });
    }

    #[test]
    fn error_trailing_colon() {
        let err = parse_utilities("flex hover:").unwrap_err();
        assert_eq!(err, ParseError::MissingUtility { class: "hover:".into() });
        assert!(err.to_string().contains("not followed by a utility"));
    }

    #[test]
    fn error_unexpected_character() {
        let err = parse_utilities("p-4 b@d").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                found: "@".into(),
                offset: 5
            }
        );
    }

    #[test]
    fn from_str_single_class() {
        let u: Utility = "md:flex".parse().unwrap();
        assert_eq!(u.to_string(), "md:flex");
        assert!("a b".parse::<Utility>().is_err());
        assert!("".parse::<Utility>().is_err());
    }
}

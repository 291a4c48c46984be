// https://www.w3.org/TR/did-core/#did-syntax
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alphanumeric1, char, satisfy},
    combinator::{all_consuming, recognize},
    multi::{many0, many1},
    sequence::{delimited, terminated, tuple},
    AsChar, IResult,
};

use crate::{DidRange, ParseError};

fn is_lowercase_alphanumeric(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_dec_digit()
}

// pct-encoded = "%" HEXDIG HEXDIG
pub(crate) fn pct_encoded(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("%"),
        satisfy(|c| c.is_hex_digit()),
        satisfy(|c| c.is_hex_digit()),
    )))(input)
}

// idchar = ALPHA / DIGIT / "." / "-" / "_" / pct-encoded
fn idchar(input: &str) -> IResult<&str, &str> {
    alt((alphanumeric1, tag("."), tag("-"), tag("_"), pct_encoded))(input)
}

// method-name = 1*method-char
// method-char = %x61-7A / DIGIT
fn method_name(input: &str) -> IResult<&str, &str> {
    delimited(char(':'), take_while1(is_lowercase_alphanumeric), char(':'))(input)
}

// method-specific-id = *( *idchar ":" ) 1*idchar
fn method_specific_id(input: &str) -> IResult<&str, &str> {
    log::trace!("did_parser_nom::method_specific_id >> input: {:?}", input);
    let ret = recognize(tuple((
        many0(terminated(many0(idchar), char(':'))),
        many1(idchar),
    )))(input);
    log::trace!("did_parser_nom::method_specific_id >> ret: {:?}", ret);
    ret
}

// did = "did:" method-name ":" method-specific-id
fn parse_qualified_did(input: &str) -> IResult<&str, (&str, &str, &str)> {
    tuple((tag("did"), method_name, method_specific_id))(input)
}

/// Returns the byte ranges of the method name and the method-specific id.
pub(crate) fn parse_did_ranges(did: &str) -> Result<(DidRange, DidRange), ParseError> {
    if did.is_empty() {
        return Err(ParseError::InvalidInput("Empty input"));
    }

    let (_, (prefix, method, id)) = all_consuming(parse_qualified_did)(did)?;

    let method_start = prefix.len() + 1;
    let method_end = method_start + method.len();
    let id_start = method_end + 1;
    let id_end = id_start + id.len();

    Ok((method_start..method_end, id_start..id_end))
}

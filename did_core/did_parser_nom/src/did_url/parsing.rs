use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::satisfy,
    combinator::{all_consuming, recognize},
    multi::many1,
    IResult,
};

use crate::{did::parsing::pct_encoded, ParseError};

// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_ascii_digit() || "-._~".contains(c)
}

// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
fn is_sub_delims(c: char) -> bool {
    "!$&'()*+,;=".contains(c)
}

// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
fn pchar(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(satisfy(is_unreserved)),
        pct_encoded,
        recognize(satisfy(is_sub_delims)),
        tag(":"),
        tag("@"),
    ))(input)
}

// fragment = *( pchar / "/" / "?" )
fn fragment(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((pchar, tag("/"), tag("?")))))(input)
}

pub(crate) fn validate_fragment(input: &str) -> Result<(), ParseError> {
    log::trace!("did_parser_nom::validate_fragment >> input: {:?}", input);
    if input.is_empty() {
        return Err(ParseError::InvalidInput("Empty fragment"));
    }
    all_consuming(fragment)(input)?;
    Ok(())
}

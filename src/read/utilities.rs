use nom::bytes::complete::take_till1;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map, verify};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::JointFrame;

/// What a single line of a motion file holds.
#[derive(Debug, PartialEq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Directive,
    /// Frame index line, digits only.
    Marker(&'a str),
    /// Starts with a digit but holds more than an index.
    DigitLed(&'a str),
    Record(&'a str),
}

impl<'a> Line<'a> {
    pub(crate) fn classify(line: &'a str) -> Self {
        let line = line.trim();
        match line.chars().next() {
            None => Line::Blank,
            Some('#') => Line::Comment,
            Some(':') => Line::Directive,
            Some(c) if c.is_ascii_digit() => match all_consuming(digit1::<_, ()>)(line) {
                Ok((_, digits)) => Line::Marker(digits),
                Err(_) => Line::DigitLed(line),
            },
            Some(_) => Line::Record(line),
        }
    }
}

fn joint_name(i: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(i)
}

fn component(i: &str) -> IResult<&str, f64> {
    preceded(space1, verify(double, |v: &f64| v.is_finite()))(i)
}

/// `<name> <v1> ... <vk>` with nothing else on the line.
pub(crate) fn joint_record(i: &str) -> IResult<&str, JointFrame> {
    all_consuming(terminated(
        map(pair(joint_name, many0(component)), |(name, values)| {
            JointFrame::new(name, values)
        }),
        space0,
    ))(i)
}

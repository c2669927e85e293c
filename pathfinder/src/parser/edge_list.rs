//! Plain-text edge lists.
//!
//! ```text
//! # vertex count first
//! 3
//! 0 1 4   # u v weight
//! 1 2 1
//! ```

use crate::config::GraphSpec;
use graph::NodeIndex;

use nom::{
    IResult,
    character::complete::{
        i64 as signed,
        u64 as unsigned,
        space0,
        space1,
    },
    combinator::{all_consuming, map_res},
    error::VerboseError,
    sequence::{
        delimited,
        tuple,
    },
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected a vertex count, found `{text}`")]
    VertexCount { line: usize, text: String },

    #[error("line {line}: expected `<u> <v> <weight>`, found `{text}`")]
    Edge { line: usize, text: String },

    #[error("missing vertex count")]
    Empty,
}

pub fn parse(input: &str) -> Result<GraphSpec, ParseError> {
    let mut lines = input.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, strip_comment(l)))
        .filter(|(_, l)| !l.is_empty());

    let (line, text) = lines.next().ok_or(ParseError::Empty)?;
    let (_, vertices) = all_consuming(delimited(space0, signed, space0))(text)
        .map_err(|_: nom::Err<VerboseError<&str>>| ParseError::VertexCount { line, text: text.to_string() })?;

    let mut edges = Vec::new();
    for (line, text) in lines {
        let (_, edge) = all_consuming(parse_edge)(text)
            .map_err(|_| ParseError::Edge { line, text: text.to_string() })?;
        edges.push(edge);
    }
    Ok(GraphSpec::new(Some(vertices), edges))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => line[..i].trim(),
        None => line.trim(),
    }
}

fn parse_vertex(input: &str) -> IResult<&str, NodeIndex, VerboseError<&str>> {
    map_res(unsigned, NodeIndex::try_from)(input)
}

fn parse_edge(input: &str) -> IResult<&str, (NodeIndex, NodeIndex, i64), VerboseError<&str>> {
    let (input, (_, u, _, v, _, w, _)) = tuple((
        space0,
        parse_vertex,
        space1,
        parse_vertex,
        space1,
        signed,
        space0,
    ))(input)?;
    Ok((input, (u, v, w)))
}

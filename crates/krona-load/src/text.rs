// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Line-oriented text loader.
//!
//! Format:
//!
//! ```text
//! <directed:bool> <vertex_count> <edge_count>
//! <id> <color> <weight|null> <label> <x> <y>     (one line per vertex)
//! <source> <target> <color> <weight|null> <label> (one line per edge)
//! ```
//!
//! Tokens are whitespace-separated; blank lines are skipped. Color tags
//! are matched case-insensitively and `null` parses to an absent weight.

use krona_common::{Color, Edge, Graph, KronaError, Result, Vertex, VertexId};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const NULL_VALUE: &str = "null";

/// Load a graph from a text file.
pub fn load_graph_from_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count,
        edges = graph.edge_count,
        directed = graph.directed,
        "loaded graph from text file"
    );
    Ok(graph)
}

/// Parse a graph from an in-memory text document.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut cursor = LineCursor::new(text);

    let (line, tokens) = cursor.next_tokens()?;
    if tokens.len() != 3 {
        return Err(parse_err(
            format!("expected 'directed vertex_count edge_count', got {} tokens", tokens.len()),
            Some(line),
        ));
    }
    let directed = parse_bool(tokens[0], line)?;
    let vertex_count: usize = parse_token(tokens[1], "vertex count", line)?;
    let edge_count: usize = parse_token(tokens[2], "edge count", line)?;

    let mut vertices = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let (line, tokens) = cursor.next_tokens()?;
        vertices.push(parse_vertex(&tokens, line)?);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let (line, tokens) = cursor.next_tokens()?;
        edges.push(parse_edge(&tokens, line)?);
    }

    Ok(Graph {
        vertex_count,
        edge_count,
        directed,
        vertices,
        edges,
    })
}

/// Iterator over non-blank lines, tracking 1-based line numbers for
/// error reporting.
struct LineCursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn next_tokens(&mut self) -> Result<(usize, Vec<&'a str>)> {
        for (idx, line) in self.lines.by_ref() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if !tokens.is_empty() {
                return Ok((idx + 1, tokens));
            }
        }
        Err(parse_err("unexpected end of input", None))
    }
}

fn parse_vertex(tokens: &[&str], line: usize) -> Result<Vertex> {
    if tokens.len() != 6 {
        return Err(parse_err(
            format!("expected 'id color weight label x y', got {} tokens", tokens.len()),
            Some(line),
        ));
    }
    Ok(Vertex {
        id: parse_vertex_id(tokens[0], line)?,
        color: parse_color(tokens[1], line)?,
        weight: parse_weight(tokens[2], line)?,
        label: tokens[3].to_string(),
        x_coordinate: parse_token(tokens[4], "x coordinate", line)?,
        y_coordinate: parse_token(tokens[5], "y coordinate", line)?,
    })
}

fn parse_edge(tokens: &[&str], line: usize) -> Result<Edge> {
    if tokens.len() != 5 {
        return Err(parse_err(
            format!("expected 'source target color weight label', got {} tokens", tokens.len()),
            Some(line),
        ));
    }
    Ok(Edge {
        source: parse_vertex_id(tokens[0], line)?,
        target: parse_vertex_id(tokens[1], line)?,
        color: parse_color(tokens[2], line)?,
        weight: parse_weight(tokens[3], line)?,
        label: tokens[4].to_string(),
    })
}

fn parse_err(message: impl Into<String>, line: Option<usize>) -> KronaError {
    KronaError::Parse {
        message: message.into(),
        line,
    }
}

fn parse_token<T: FromStr>(token: &str, what: &str, line: usize) -> Result<T>
where
    T::Err: Display,
{
    token
        .parse()
        .map_err(|e| parse_err(format!("invalid {} '{}': {}", what, token, e), Some(line)))
}

fn parse_vertex_id(token: &str, line: usize) -> Result<VertexId> {
    token
        .parse()
        .map_err(|e| parse_err(format!("{}", e), Some(line)))
}

fn parse_bool(token: &str, line: usize) -> Result<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(parse_err(
            format!("invalid directed flag '{}': expected true or false", token),
            Some(line),
        )),
    }
}

fn parse_color(token: &str, line: usize) -> Result<Color> {
    match token.to_ascii_lowercase().as_str() {
        "gray" => Ok(Color::Gray),
        "red" => Ok(Color::Red),
        "blue" => Ok(Color::Blue),
        "green" => Ok(Color::Green),
        _ => Err(parse_err(format!("unknown color tag '{}'", token), Some(line))),
    }
}

fn parse_weight(token: &str, line: usize) -> Result<Option<i32>> {
    if token == NULL_VALUE {
        return Ok(None);
    }
    parse_token(token, "weight", line).map(Some)
}

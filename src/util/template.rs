//! A small logic-less template engine (mustache syntax, never escaping).
//!
//! Rendered output goes into CMake files, so values are substituted
//! verbatim: `{{name}}`, `{{{name}}}` and `{{&name}}` are equivalent.
//!
//! Supported tags:
//! - `{{name}}`, `{{a.b}}`, `{{.}}` variables
//! - `{{#name}}...{{/name}}` sections: iterate arrays, render once for other
//!   truthy values
//! - `{{^name}}...{{/name}}` inverted sections
//! - `{{! comment }}`
//!
//! Section, inverted, closing and comment tags standing alone on a line
//! take the whole line with them.

use serde_json::Value;
use thiserror::Error;

/// Error raised while parsing a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed tag at byte {offset}")]
    UnclosedTag { offset: usize },

    #[error("section `{name}` is never closed")]
    UnclosedSection { name: String },

    #[error("closing tag `{name}` has no matching section")]
    UnexpectedClose { name: String },

    #[error("section `{expected}` closed by `{found}`")]
    MismatchedClose { expected: String, found: String },
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Var(String),
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Var,
    Open,
    Inverted,
    Close,
    Comment,
}

impl TagKind {
    fn can_stand_alone(self) -> bool {
        !matches!(self, TagKind::Var)
    }
}

/// A parsed template, reusable across contexts.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source.
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let mut stack: Vec<(String, bool, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut text = String::new();
        let mut pos = 0;

        while let Some(rel) = src[pos..].find("{{") {
            let start = pos + rel;
            text.push_str(&src[pos..start]);

            let (kind, name, end) = read_tag(src, start)?;
            pos = end;

            if kind.can_stand_alone() {
                if let Some((prefix_len, next)) = standalone_span(src, start, end) {
                    text.truncate(text.len() - prefix_len);
                    pos = next;
                }
            }

            if !text.is_empty() {
                current.push(Node::Text(std::mem::take(&mut text)));
            }

            match kind {
                TagKind::Comment => {}
                TagKind::Var => current.push(Node::Var(name)),
                TagKind::Open | TagKind::Inverted => {
                    let parent = std::mem::take(&mut current);
                    stack.push((name, kind == TagKind::Inverted, parent));
                }
                TagKind::Close => {
                    let Some((open, inverted, parent)) = stack.pop() else {
                        return Err(TemplateError::UnexpectedClose { name });
                    };
                    if open != name {
                        return Err(TemplateError::MismatchedClose {
                            expected: open,
                            found: name,
                        });
                    }
                    let children = std::mem::replace(&mut current, parent);
                    current.push(Node::Section {
                        name,
                        inverted,
                        children,
                    });
                }
            }
        }

        text.push_str(&src[pos..]);
        if !text.is_empty() {
            current.push(Node::Text(text));
        }

        if let Some((name, _, _)) = stack.pop() {
            return Err(TemplateError::UnclosedSection { name });
        }

        Ok(Template { nodes: current })
    }

    /// Render against a JSON context.
    pub fn render(&self, context: &Value) -> String {
        let mut out = String::new();
        let mut scopes = vec![context];
        render_nodes(&self.nodes, &mut scopes, &mut out);
        out
    }
}

/// Parse and render in one go.
pub fn render(src: &str, context: &Value) -> Result<String, TemplateError> {
    Ok(Template::parse(src)?.render(context))
}

fn read_tag(src: &str, start: usize) -> Result<(TagKind, String, usize), TemplateError> {
    let unclosed = TemplateError::UnclosedTag { offset: start };

    if src[start..].starts_with("{{{") {
        let inner = start + 3;
        let close = src[inner..].find("}}}").ok_or(unclosed)?;
        let name = src[inner..inner + close].trim().to_string();
        return Ok((TagKind::Var, name, inner + close + 3));
    }

    let inner = start + 2;
    let close = src[inner..].find("}}").ok_or(unclosed)?;
    let content = src[inner..inner + close].trim();
    let end = inner + close + 2;

    let (kind, name) = match content.chars().next() {
        Some('!') => (TagKind::Comment, ""),
        Some('#') => (TagKind::Open, &content[1..]),
        Some('^') => (TagKind::Inverted, &content[1..]),
        Some('/') => (TagKind::Close, &content[1..]),
        Some('&') => (TagKind::Var, &content[1..]),
        _ => (TagKind::Var, content),
    };

    Ok((kind, name.trim().to_string(), end))
}

/// If the tag at `start..end` is alone on its line, return the length of
/// the whitespace before it and the offset right after the line break.
fn standalone_span(src: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let line_start = src[..start].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &src[line_start..start];
    if !prefix.chars().all(|c| c == ' ' || c == '\t') {
        return None;
    }

    let rest = &src[end..];
    let (suffix, next) = match rest.find('\n') {
        Some(i) => (&rest[..i], end + i + 1),
        None => (rest, src.len()),
    };
    if !suffix.chars().all(|c| c == ' ' || c == '\t' || c == '\r') {
        return None;
    }

    Some((prefix.len(), next))
}

fn render_nodes<'a>(nodes: &'a [Node], scopes: &mut Vec<&'a Value>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) => {
                if let Some(value) = lookup(name, scopes) {
                    push_value(value, out);
                }
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                let value = lookup(name, scopes);

                if *inverted {
                    if !value.is_some_and(is_truthy) {
                        render_nodes(children, scopes, out);
                    }
                    continue;
                }

                match value {
                    Some(Value::Array(items)) => {
                        for item in items {
                            scopes.push(item);
                            render_nodes(children, scopes, out);
                            scopes.pop();
                        }
                    }
                    Some(value) if is_truthy(value) => {
                        scopes.push(value);
                        render_nodes(children, scopes, out);
                        scopes.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

fn lookup<'a>(name: &str, scopes: &[&'a Value]) -> Option<&'a Value> {
    if name == "." {
        return scopes.last().copied();
    }

    let mut parts = name.split('.');
    let first = parts.next()?;

    let mut value = scopes
        .iter()
        .rev()
        .find_map(|scope| scope.as_object().and_then(|obj| obj.get(first)))?;

    for part in parts {
        value = value.as_object()?.get(part)?;
    }

    Some(value)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Number(_) | Value::Object(_) => true,
    }
}

fn push_value(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null | Value::Array(_) | Value::Object(_) => {}
    }
}

//! Data model for parsed comments and function signatures — format-agnostic.

use std::collections::HashMap;

/// Direction of data flow for a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl ParamDirection {
    /// Doxygen direction attribute, e.g. `[in,out]`.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamDirection::In => "[in]",
            ParamDirection::Out => "[out]",
            ParamDirection::InOut => "[in,out]",
        }
    }

    /// Parse a direction attribute; anything unrecognized maps to `In`.
    pub fn from_attr(attr: &str) -> Self {
        match attr {
            "[out]" => ParamDirection::Out,
            "[in,out]" => ParamDirection::InOut,
            _ => ParamDirection::In,
        }
    }
}

/// A `param` tag recovered from an existing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParam {
    pub name: String,
    pub direction: ParamDirection,
    /// Comment text, one entry per source line.
    pub comments: Vec<String>,
}

/// Any recognized tag other than `param` and `return`/`returns`
/// (e.g. `sa`, `throw`, `remarks`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub tag: String,
    pub comments: Vec<String>,
}

/// Semantic model of an existing Doxygen comment.
///
/// Built fresh for every generation call; empty input parses to the empty
/// model, never an error.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedComment {
    /// Free text not under any tag.
    pub brief: Vec<String>,
    /// `param` tags keyed by parameter name; the first occurrence of a name
    /// wins, so keys are unique.
    pub params: HashMap<String, ParsedParam>,
    /// `return`/`returns` section; when a comment carries several, the last
    /// one wins.
    pub returns: Option<ParsedSection>,
    /// All other tag sections, in source order.
    pub sections: Vec<ParsedSection>,
}

impl ParsedComment {
    pub fn is_empty(&self) -> bool {
        self.brief.is_empty()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.sections.is_empty()
    }
}

/// A function parameter as supplied by the host collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Spelled type, e.g. `const std::string&`.
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: &str, type_name: &str) -> Self {
        Parameter {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

/// What kind of function a signature denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    Constructor,
    Destructor,
    Regular {
        /// Spelled return type, e.g. `std::string` or `void`.
        return_type: String,
    },
}

impl FunctionKind {
    pub fn regular(return_type: &str) -> Self {
        FunctionKind::Regular {
            return_type: return_type.to_string(),
        }
    }
}

/// A function signature view supplied by the host collaborator.
///
/// Read-only to the core; the host extracts it from the source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    /// Enclosing type name, when the function is a member.
    pub parent: Option<String>,
    pub kind: FunctionKind,
    pub params: Vec<Parameter>,
}

impl FunctionSignature {
    /// A free function with the given return type and no parameters.
    pub fn function(name: &str, return_type: &str) -> Self {
        FunctionSignature {
            name: name.to_string(),
            parent: None,
            kind: FunctionKind::regular(return_type),
            params: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_param(mut self, name: &str, type_name: &str) -> Self {
        self.params.push(Parameter::new(name, type_name));
        self
    }
}

/// Tag names offered to editor completion popups, without the introducer
/// character.
pub const COMPLETION_TAGS: &[&str] = &[
    "code", "sa", "see", "include", "li", "param", "tparam", "brief", "throw", "return",
    "returns", "relates", "remarks",
];

/// Direction attributes offered to editor completion popups.
pub const DIRECTION_ATTRS: &[&str] = &["[in]", "[in,out]", "[out]"];

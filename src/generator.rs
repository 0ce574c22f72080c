//! Smart description heuristics — signature-driven natural language.
//!
//! Every generator returns an empty string when its pattern does not apply;
//! the renderer treats empty as "no suggestion available". The output is
//! best-effort English, not a correctness guarantee.

use crate::config::{apply_template, DoxygenConfig};
use crate::model::{FunctionKind, FunctionSignature, ParamDirection, Parameter, ParsedParam};
use crate::words;

/// Generate a brief description for a function.
///
/// Constructors and destructors get fixed strings. Setter/getter/boolean
/// getter names go through the configured phrase templates; any other
/// function gets a verb-object sentence when the all-functions toggle is on.
pub fn brief_description(config: &DoxygenConfig, sig: &FunctionSignature) -> String {
    match sig.kind {
        FunctionKind::Constructor => return "Constructor.".to_string(),
        FunctionKind::Destructor => return "Destructor.".to_string(),
        FunctionKind::Regular { .. } => {}
    }

    let name_words = words::split_identifier(&sig.name);
    if name_words.is_empty() {
        return String::new();
    }

    let class_name = sig.parent.as_deref().map(words::humanize).unwrap_or_default();
    let first = name_words[0].as_str();
    let setter = first == "set";
    let getter = first == "get";
    let bool_getter = first == "is" || first == "has";

    if getter || setter || bool_getter {
        if name_words.len() > 1 {
            let subject = config.abbreviations.expand_join(&name_words[1..]);
            if getter {
                let owner = possessive(sig, &class_name);
                return apply_template(&config.brief_getter_format, &[&subject, &owner]);
            }
            if setter {
                let owner = possessive(sig, &class_name);
                return apply_template(&config.brief_setter_format, &[&subject, &owner]);
            }
            let owner = format!("{} ", class_name);
            return apply_template(
                &config.brief_bool_getter_format,
                &[&subject, &owner, first],
            );
        }
        return String::new();
    }

    if config.smart_comments_for_all && (name_words.len() > 1 || sig.parent.is_some()) {
        // First word is the verb; the object is the rest of the name, or the
        // owning type for a single-word member function.
        let verb = words::third_person(first);
        let object = if name_words.len() == 1 {
            class_name
        } else {
            config.abbreviations.expand_join(&name_words[1..])
        };
        return words::capitalize(&format!("{} the {}.", verb, object));
    }

    String::new()
}

fn possessive(sig: &FunctionSignature, class_name: &str) -> String {
    if sig.parent.is_some() {
        format!("{}'s ", class_name)
    } else {
        String::new()
    }
}

/// Generate a description for a parameter of a setter/getter, or for any
/// boolean parameter.
pub fn param_description(
    config: &DoxygenConfig,
    sig: &FunctionSignature,
    param: &Parameter,
) -> String {
    let setter_or_getter = sig.name.starts_with("set") || sig.name.starts_with("get");
    let boolean = param.type_name == "bool";

    if boolean {
        let subject = config
            .abbreviations
            .expand_join(&words::split_identifier(&param.name));
        return words::capitalize(&apply_template(&config.param_boolean_format, &[&subject]));
    }
    if setter_or_getter {
        let subject = config
            .abbreviations
            .expand_join(&words::split_identifier(&param.name));
        return words::capitalize(&apply_template(&config.param_setter_format, &[&subject]));
    }

    String::new()
}

/// Generate a return value description for `get`/`is`/`has` functions.
pub fn return_description(config: &DoxygenConfig, sig: &FunctionSignature) -> String {
    let name_words = words::split_identifier(&sig.name);
    if name_words.len() < 2 {
        return String::new();
    }

    let subject = config.abbreviations.expand_join(&name_words[1..]);
    match name_words[0].as_str() {
        "get" => words::capitalize(&apply_template(&config.return_format, &[&subject])),
        "is" => words::capitalize(&apply_template(&config.return_boolean_format, &[&subject])),
        "has" => {
            let subject = format!("has {}", subject);
            words::capitalize(&apply_template(&config.return_boolean_format, &[&subject]))
        }
        _ => String::new(),
    }
}

/// A parameter is pure input when its type is const-qualified or is not a
/// reference or pointer type.
pub fn is_input(type_name: &str) -> bool {
    let mut is_const = false;
    let mut is_ref = false;

    for token in type_name.split(' ') {
        if token == "const" {
            is_const = true;
            break;
        } else if token == "&" || token == "*" {
            is_ref = true;
        }
    }
    if type_name.ends_with('&') || type_name.ends_with('*') {
        is_ref = true;
    }

    is_const || !is_ref
}

/// Resolve the rendered direction for a parameter.
///
/// Inputs are always `In`. A non-input defaults to `InOut` unless the
/// existing comment pins an explicit non-input direction, which is kept.
pub fn resolve_direction(param: &Parameter, parsed: Option<&ParsedParam>) -> ParamDirection {
    if is_input(&param.type_name) {
        return ParamDirection::In;
    }
    match parsed {
        Some(p) if p.direction != ParamDirection::In => p.direction,
        _ => ParamDirection::InOut,
    }
}

//! Script emission: decoration changes as DOM mutation commands.
//!
//! The engine never touches a document itself; it emits [`RunScriptCommand`]s
//! for the embedding frontend to execute in whichever resources are loaded.
//! Scripts target the `verso` runtime injected alongside the resource.

use serde_json::Value;

use crate::decoration::DecorationChange;
use crate::html::HtmlDecorationTemplates;

/// A script to execute, with the resources it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunScriptCommand {
    pub script: String,
    pub scope: Scope,
}

/// Which resources a script applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every currently loaded resource.
    LoadedResources,
    /// The resource with the given href, if loaded.
    Resource(String),
}

impl RunScriptCommand {
    /// Command wiping a whole decoration group from all loaded resources.
    pub(crate) fn clear_group(group: &str) -> Self {
        Self {
            script: format!("verso.getDecorations('{group}').clear();"),
            scope: Scope::LoadedResources,
        }
    }

    /// Command registering the style templates with a resource's runtime.
    pub(crate) fn register_styles(templates: &HtmlDecorationTemplates, href: &str) -> Self {
        Self {
            script: format!("verso.registerDecorationStyles({});", templates.to_json()),
            scope: Scope::Resource(href.to_string()),
        }
    }
}

/// Render a group's changes into one script, or `None` if nothing renders.
///
/// Each change is rendered through the template registered for its style
/// kind; a change whose style has no template is dropped. The script runs
/// after layout settles so element geometry is valid.
pub fn script_for_group(
    group: &str,
    changes: &[DecorationChange],
    templates: &HtmlDecorationTemplates,
) -> Option<String> {
    let statements: Vec<String> = changes
        .iter()
        .filter_map(|change| statement(change, templates))
        .collect();

    if statements.is_empty() {
        return None;
    }

    Some(format!(
        "requestAnimationFrame(function () {{\n  let group = verso.getDecorations('{group}');\n  {}\n}});",
        statements.join("\n  ")
    ))
}

fn statement(change: &DecorationChange, templates: &HtmlDecorationTemplates) -> Option<String> {
    let decoration = change.decoration();
    let template = templates.get(&decoration.style.kind())?;

    match change {
        DecorationChange::Added(d) => {
            let mut json = d.to_json();
            json["element"] = Value::String((template.element)(d));
            Some(format!("group.add({json});"))
        }
        DecorationChange::Updated(d) => {
            let mut json = d.to_json();
            json["element"] = Value::String((template.element)(d));
            Some(format!("group.update({json});"))
        }
        DecorationChange::Removed(d) => {
            Some(format!("group.remove({});", Value::String(d.id.clone())))
        }
    }
}

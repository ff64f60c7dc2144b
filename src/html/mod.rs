//! HTML rendering of decorations.
//!
//! This module contains:
//! - Decoration templates (layout, width policy, element generator)
//! - The style template registry seeded with default highlight/underline
//! - Script emission turning decoration changes into DOM mutation commands

mod scripts;
mod template;

pub use scripts::{RunScriptCommand, Scope, script_for_group};
pub use template::{
    DefaultStyleOptions, HtmlDecorationTemplate, HtmlDecorationTemplates, Layout, Width,
    highlight, underline,
};

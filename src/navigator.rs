//! Per-publication decoration state and reconciliation.

use log::debug;

use crate::decoration::diff::{changes_by_href, dedup_by_id};
use crate::decoration::{Decoration, DecorationChange, StyleKind};
use crate::html::{HtmlDecorationTemplates, RunScriptCommand, Scope, script_for_group};

/// Owns the current decoration state for one open publication.
///
/// Reader features each keep a named decoration group ("annotation",
/// "search", "tts", ...) and declare their complete desired state through
/// [`apply_decorations`]; the registry diffs it against what was previously
/// applied and emits the scripts reconciling each affected resource.
///
/// One registry per open publication. Diffing runs against the previously
/// stored list, so writers must be serialized; `&mut self` enforces that.
///
/// [`apply_decorations`]: DecorationRegistry::apply_decorations
#[derive(Debug)]
pub struct DecorationRegistry {
    templates: HtmlDecorationTemplates,
    /// Current decorations, indexed by group name in insertion order.
    groups: Vec<(String, Vec<Decoration>)>,
}

impl DecorationRegistry {
    /// Create a registry rendering through the given style templates.
    pub fn new(templates: HtmlDecorationTemplates) -> Self {
        Self {
            templates,
            groups: Vec::new(),
        }
    }

    /// The style templates used for rendering.
    pub fn templates(&self) -> &HtmlDecorationTemplates {
        &self.templates
    }

    /// Whether decorations of the given style kind can be rendered.
    ///
    /// Check this before enabling a feature that needs a particular style;
    /// unsupported decorations are silently dropped at render time.
    pub fn supports_style(&self, kind: &StyleKind) -> bool {
        self.templates.contains(kind)
    }

    /// The decorations currently applied in a group.
    pub fn decorations_in_group(&self, group: &str) -> &[Decoration] {
        self.groups
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, decorations)| decorations.as_slice())
            .unwrap_or(&[])
    }

    /// Declare the current state of a decoration group.
    ///
    /// Full replacement semantics: submit the complete desired list on every
    /// call. Returns the commands reconciling each affected resource — an
    /// empty list means the resources were already up to date. Clearing a
    /// group (empty `decorations`) collapses into one wholesale clear
    /// command instead of itemized removals.
    pub fn apply_decorations(
        &mut self,
        group: &str,
        decorations: Vec<Decoration>,
    ) -> Vec<RunScriptCommand> {
        let target: Vec<Decoration> = dedup_by_id(&decorations).into_iter().cloned().collect();
        let source = self.replace_group(group, target.clone());

        if target.is_empty() {
            return vec![RunScriptCommand::clear_group(group)];
        }

        let templates = self.templates.snapshot();
        let mut commands = Vec::new();
        for partition in changes_by_href(&source, &target) {
            debug!(
                "decoration group {group:?}: {} change(s) for {}",
                partition.changes.len(),
                partition.href
            );
            if let Some(script) = script_for_group(group, &partition.changes, &templates) {
                commands.push(RunScriptCommand {
                    script,
                    scope: Scope::Resource(partition.href),
                });
            }
        }
        commands
    }

    /// Commands bringing a freshly loaded resource up to date.
    ///
    /// Registers the style templates with the resource's runtime, then adds
    /// every already-applied decoration targeting that resource, group by
    /// group.
    pub fn on_resource_loaded(&self, href: &str) -> Vec<RunScriptCommand> {
        let mut commands = vec![RunScriptCommand::register_styles(&self.templates, href)];

        for (group, decorations) in &self.groups {
            let changes: Vec<DecorationChange> = decorations
                .iter()
                .filter(|d| d.locator.href == href)
                .cloned()
                .map(DecorationChange::Added)
                .collect();

            if let Some(script) = script_for_group(group, &changes, &self.templates) {
                commands.push(RunScriptCommand {
                    script,
                    scope: Scope::Resource(href.to_string()),
                });
            }
        }

        commands
    }

    /// Store the new list for a group, returning the previous one.
    fn replace_group(&mut self, group: &str, decorations: Vec<Decoration>) -> Vec<Decoration> {
        match self.groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, current)) => std::mem::replace(current, decorations),
            None => {
                self.groups.push((group.to_string(), decorations));
                Vec::new()
            }
        }
    }
}

impl Default for DecorationRegistry {
    fn default() -> Self {
        Self::new(HtmlDecorationTemplates::default_styles(Default::default()))
    }
}

//! Whole-file analysis and the per-document result cache.

use std::sync::Arc;

use serde::Serialize;
use tasty_core::{NameLookup, Span, Token};

use crate::cache::Cache;
use crate::config::MergedConfig;
use crate::defs::{self, KeyKind, LocalDefinitions, StyleObject, StyleValue, classify_key};
use crate::diagnostics::Diagnostics;
use crate::validate::{Context, Validator, check_brackets};
use crate::value::ValueContext;
use crate::{state, value};

/// Everything known about one file after a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentAnalysis {
    pub definitions: LocalDefinitions,
    pub diagnostics: Diagnostics,
}

/// Collect definitions over the whole forest, then validate every value
/// and state key in it.
///
/// Diagnostics come back ordered by position.
pub fn analyze(forest: &[StyleObject], config: &MergedConfig) -> DocumentAnalysis {
    let definitions = defs::collect(forest);
    let diagnostics = {
        let mut walker = Walker::new(config, &definitions);
        for object in forest {
            walker.style_object(object, false);
        }
        walker.finish()
    };
    DocumentAnalysis {
        definitions,
        diagnostics,
    }
}

struct Walker<'a> {
    validator: Validator<'a>,
    config: &'a MergedConfig,
    diagnostics: Diagnostics,
}

impl<'a> Walker<'a> {
    fn new(config: &'a MergedConfig, definitions: &'a LocalDefinitions) -> Self {
        Self {
            validator: Validator::new(config, definitions),
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    fn finish(mut self) -> Diagnostics {
        self.diagnostics.dedup_same_span();
        self.diagnostics.sort();
        self.diagnostics
    }

    fn style_object(&mut self, object: &StyleObject, in_sub_element: bool) {
        for prop in object {
            let key = prop.key.as_str();
            match (classify_key(key), &prop.value) {
                (KeyKind::Keyframes | KeyKind::Properties, _) => {}
                (KeyKind::SubElement, StyleValue::Object(nested)) => self.style_object(nested, true),
                (KeyKind::SelectorAffix, StyleValue::Object(nested)) => {
                    self.style_object(nested, in_sub_element)
                }
                (KeyKind::AtRule, StyleValue::String { text, span }) => {
                    if defs::is_alias_name(key) {
                        self.state_key(text, span.start, in_sub_element);
                    }
                }
                (KeyKind::AtRule, StyleValue::Object(body)) => {
                    self.state_key(key, prop.key_offset(), in_sub_element);
                    self.style_object(body, in_sub_element);
                }
                (kind, StyleValue::String { text, span }) => {
                    let property = (kind != KeyKind::Definition).then_some(key);
                    self.value(text, *span, property);
                }
                (kind, StyleValue::Object(mapping)) => {
                    let property = (kind != KeyKind::Definition).then_some(key);
                    self.state_mapping(mapping, property, in_sub_element);
                }
                (_, StyleValue::Other { .. }) => {}
            }
        }
    }

    fn state_mapping(
        &mut self,
        mapping: &StyleObject,
        property: Option<&str>,
        in_sub_element: bool,
    ) {
        for prop in mapping {
            self.state_key(&prop.key, prop.key_offset(), in_sub_element);
            match &prop.value {
                StyleValue::String { text, span } => self.value(text, *span, property),
                StyleValue::Object(nested) => self.state_mapping(nested, property, in_sub_element),
                StyleValue::Other { .. } => {}
            }
        }
    }

    fn value(&mut self, text: &str, span: Span, property: Option<&str>) {
        let mut ctx = ValueContext::new().with_presets(&self.config.presets);
        if let Some(units) = self.config.units.names() {
            ctx = ctx.with_units(units);
        }
        let tokens = value::tokenize(text, ctx);
        self.check(&tokens, span.start, Context::Value { property });
    }

    fn state_key(&mut self, key: &str, base: usize, in_sub_element: bool) {
        let aliases: &dyn NameLookup = &self.validator.names().states;
        let tokens = state::tokenize(key, aliases);
        check_brackets(key, base, &mut self.diagnostics);
        self.check(&tokens, base, Context::StateKey { in_sub_element });
    }

    fn check(&mut self, tokens: &[Token], base: usize, context: Context<'_>) {
        self.validator.check(tokens, base, context, &mut self.diagnostics);
    }
}

#[derive(Debug, Clone)]
struct Entry {
    version: i32,
    analysis: Arc<DocumentAnalysis>,
}

/// Latest analysis per document URI, stamped with the document version.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: Cache<String, Entry>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `analysis` unless a newer version is already stored.
    ///
    /// Returns `false` when the result is stale and was dropped.
    pub fn store(&mut self, uri: &str, version: i32, analysis: DocumentAnalysis) -> bool {
        if let Some(stored) = self.entries.get(uri)
            && stored.version > version
        {
            tracing::trace!(uri, version, stored = stored.version, "dropping stale analysis");
            return false;
        }
        let entry = Entry {
            version,
            analysis: Arc::new(analysis),
        };
        self.entries.insert(uri.to_string(), entry);
        true
    }

    pub fn get(&self, uri: &str) -> Option<Arc<DocumentAnalysis>> {
        self.entries.get(uri).map(|e| Arc::clone(&e.analysis))
    }

    pub fn version(&self, uri: &str) -> Option<i32> {
        self.entries.get(uri).map(|e| e.version)
    }

    /// Whether results computed for `version` may still be published.
    pub fn is_current(&self, uri: &str, version: i32) -> bool {
        self.version(uri).is_none_or(|stored| stored <= version)
    }

    pub fn invalidate(&mut self, uri: &str) -> bool {
        self.entries.invalidate(uri).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

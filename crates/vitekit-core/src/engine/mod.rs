//! Template micro-engine: Handlebars-style directives rendered against a
//! JSON context.
//!
//! Supported syntax:
//! - `{{variable}}` - HTML-escaped interpolation
//! - `{{{variable}}}` - raw interpolation
//! - `{{#if cond}}...{{else}}...{{/if}}` - conditional blocks
//! - `{{#unless cond}}...{{/unless}}` - negated conditionals
//! - `{{#each array}}...{{/each}}` - iteration with `{{this}}`, `{{@index}}`,
//!   `{{@first}}`, `{{@last}}`
//! - `{{#with object}}...{{/with}}` - context switching
//! - `{{> partialName}}` - partial inclusion (from the partials directory)
//! - `{{!-- comment --}}` - comments (removed from output)
//!
//! Rendering is a pure function of the template string and the context; the
//! only filesystem access is lazy partial lookup. Block tags are matched
//! with nesting-depth tracking, and in the default permissive mode an
//! unmatched directive is left in the output verbatim instead of failing
//! the whole render. Strict mode turns those into [`EngineError`]s.

mod blocks;
mod context;
mod value;

pub use context::{provider_order, ContextBuilder};
pub use value::{escape_html, is_truthy, resolve_path, stringify};

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::{json, Map, Value};

use crate::error::EngineError;
use blocks::{find_block, split_else, BlockScan};

/// Partial inclusion depth limit, guarding against cyclic partials
const MAX_PARTIAL_DEPTH: usize = 8;

/// The template engine. Cheap to construct; holds the partials store and
/// the strictness flag.
pub struct Engine {
    templates_dir: Option<PathBuf>,
    partials: RefCell<HashMap<String, Option<String>>>,
    strict: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with no filesystem-backed partials
    pub fn new() -> Self {
        Self {
            templates_dir: None,
            partials: RefCell::new(HashMap::new()),
            strict: false,
        }
    }

    /// Engine loading partials from `<dir>/partials/<name>.template`
    pub fn with_templates_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: Some(dir.into()),
            ..Self::new()
        }
    }

    /// Engine rooted at the conventional templates directory: candidate
    /// locations next to the executable and under the current directory
    /// are probed in order; the first existing one wins, otherwise the
    /// first candidate is created.
    pub fn discover() -> Self {
        Self::with_templates_dir(discover_templates_dir())
    }

    /// Fail on unmatched block directives instead of leaving them verbatim
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Register an in-memory partial, shadowing any file of the same name
    pub fn register_partial(&self, name: &str, content: &str) {
        self.partials
            .borrow_mut()
            .insert(name.to_string(), Some(content.to_string()));
    }

    /// Render a template string against a context object
    pub fn render(&self, template: &str, context: &Value) -> Result<String, EngineError> {
        let empty = Map::new();
        let ctx = context.as_object().unwrap_or(&empty);
        self.render_with(template, ctx, 0)
    }

    fn render_with(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        let mut out = strip_comments(template);
        out = self.expand_partials(&out, ctx, depth)?;
        out = self.process_with_blocks(&out, ctx, depth)?;
        out = self.process_each_blocks(&out, ctx, depth)?;
        out = self.process_unless_blocks(&out, ctx, depth)?;
        out = self.process_if_blocks(&out, ctx, depth)?;
        out = substitute_variables(&out, ctx);
        Ok(cleanup_whitespace(&out))
    }

    /// Shared scanning loop for one block kind. Matched blocks are handed
    /// to `on_match` with their body; unmatched openers are either an
    /// error (strict) or copied through verbatim (permissive).
    fn process_blocks<F>(
        &self,
        template: &str,
        kind: &str,
        mut on_match: F,
    ) -> Result<String, EngineError>
    where
        F: FnMut(&blocks::Block, &str, &mut String) -> Result<(), EngineError>,
    {
        let mut out = String::with_capacity(template.len());
        let mut pos = 0;
        loop {
            match find_block(template, kind, pos) {
                BlockScan::None => {
                    out.push_str(&template[pos..]);
                    break;
                }
                BlockScan::Unmatched {
                    open_start,
                    open_end,
                } => {
                    if self.strict {
                        return Err(EngineError::UnmatchedBlock {
                            directive: format!("#{}", kind),
                            position: open_start,
                        });
                    }
                    out.push_str(&template[pos..open_end]);
                    pos = open_end;
                }
                BlockScan::Matched(block) => {
                    out.push_str(&template[pos..block.open_start]);
                    let body = &template[block.body_start..block.body_end];
                    on_match(&block, body, &mut out)?;
                    pos = block.end;
                }
            }
        }
        Ok(out)
    }

    fn process_with_blocks(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        self.process_blocks(template, "with", |block, body, out| {
            if let Some(Value::Object(inner)) = resolve_path(&block.arg, ctx).cloned() {
                let mut merged = ctx.clone();
                for (key, value) in inner {
                    merged.insert(key, value);
                }
                out.push_str(&self.render_with(body, &merged, depth)?);
            }
            Ok(())
        })
    }

    fn process_each_blocks(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        self.process_blocks(template, "each", |block, body, out| {
            let Some(Value::Array(items)) = resolve_path(&block.arg, ctx).cloned() else {
                return Ok(());
            };
            let len = items.len();
            for (index, item) in items.into_iter().enumerate() {
                let mut item_ctx = ctx.clone();
                item_ctx.insert("this".to_string(), item.clone());
                item_ctx.insert("@index".to_string(), json!(index));
                item_ctx.insert("@first".to_string(), json!(index == 0));
                item_ctx.insert("@last".to_string(), json!(index + 1 == len));
                if let Value::Object(props) = item {
                    for (key, value) in props {
                        item_ctx.insert(key, value);
                    }
                }
                out.push_str(&self.render_with(body, &item_ctx, depth)?);
            }
            Ok(())
        })
    }

    fn process_unless_blocks(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        self.process_blocks(template, "unless", |block, body, out| {
            if !is_truthy(resolve_path(&block.arg, ctx)) {
                out.push_str(&self.render_with(body, ctx, depth)?);
            }
            Ok(())
        })
    }

    fn process_if_blocks(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        self.process_blocks(template, "if", |block, body, out| {
            let (if_branch, else_branch) = split_else(body);
            let chosen = if is_truthy(resolve_path(&block.arg, ctx)) {
                if_branch
            } else {
                else_branch.unwrap_or("")
            };
            out.push_str(&self.render_with(chosen, ctx, depth)?);
            Ok(())
        })
    }

    fn expand_partials(
        &self,
        template: &str,
        ctx: &Map<String, Value>,
        depth: usize,
    ) -> Result<String, EngineError> {
        let mut out = String::with_capacity(template.len());
        let mut pos = 0;
        while let Some(found) = template[pos..].find("{{>") {
            let start = pos + found;
            let rest = template[start + 3..].trim_start();
            let name_len = rest
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .map(char::len_utf8)
                .sum::<usize>();
            let name = &rest[..name_len];
            let after = rest[name_len..].trim_start();
            if name.is_empty() || !after.starts_with("}}") {
                out.push_str(&template[pos..start + 3]);
                pos = start + 3;
                continue;
            }
            let directive_end = template.len() - (after.len() - 2);

            out.push_str(&template[pos..start]);
            if depth >= MAX_PARTIAL_DEPTH {
                if self.strict {
                    return Err(EngineError::PartialTooDeep(
                        name.to_string(),
                        MAX_PARTIAL_DEPTH,
                    ));
                }
                out.push_str(&format!("<!-- Partial \"{}\" not found -->", name));
            } else {
                match self.load_partial(name) {
                    Some(content) => {
                        out.push_str(&self.render_with(&content, ctx, depth + 1)?)
                    }
                    None => {
                        out.push_str(&format!("<!-- Partial \"{}\" not found -->", name))
                    }
                }
            }
            pos = directive_end;
        }
        out.push_str(&template[pos..]);
        Ok(out)
    }

    /// Look up a partial by name: in-memory store first, then a lazy read
    /// from the partials directory. Misses are cached too.
    fn load_partial(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.partials.borrow().get(name) {
            return cached.clone();
        }
        let loaded = self.templates_dir.as_ref().and_then(|dir| {
            std::fs::read_to_string(dir.join("partials").join(format!("{}.template", name))).ok()
        });
        self.partials
            .borrow_mut()
            .insert(name.to_string(), loaded.clone());
        loaded
    }
}

/// Remove `{{!-- ... --}}` comments; an unterminated comment is left as-is
fn strip_comments(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;
    while let Some(found) = template[pos..].find("{{!--") {
        let start = pos + found;
        match template[start + 5..].find("--}}") {
            Some(close) => {
                out.push_str(&template[pos..start]);
                pos = start + 5 + close + 4;
            }
            None => break,
        }
    }
    out.push_str(&template[pos..]);
    out
}

fn substitute_variables(template: &str, ctx: &Map<String, Value>) -> String {
    let raw_done = substitute(template, ctx, true);
    substitute(&raw_done, ctx, false)
}

/// One interpolation pass: triple-brace (raw) when `raw`, double-brace
/// (escaped) otherwise. Sequences that do not parse as a variable are
/// copied through unchanged.
fn substitute(template: &str, ctx: &Map<String, Value>, raw: bool) -> String {
    let (open, close) = if raw { ("{{{", "}}}") } else { ("{{", "}}") };
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;
    while let Some(found) = template[pos..].find(open) {
        let start = pos + found;
        let path_start = start + open.len();
        let path_len = template[path_start..]
            .chars()
            .take_while(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@'))
            .map(char::len_utf8)
            .sum::<usize>();
        let after = path_start + path_len;
        if path_len > 0 && template[after..].starts_with(close) {
            out.push_str(&template[pos..start]);
            let text = stringify(resolve_path(&template[path_start..after], ctx));
            if raw {
                out.push_str(&text);
            } else {
                out.push_str(&escape_html(&text));
            }
            pos = after + close.len();
        } else {
            out.push_str(&template[pos..start + 1]);
            pos = start + 1;
        }
    }
    out.push_str(&template[pos..]);
    out
}

/// Collapse runs of three or more newlines to a single blank line, then
/// strip trailing spaces and tabs from every line
fn cleanup_whitespace(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    let mut newlines = 0;
    for ch in input.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                collapsed.push('\n');
            }
        } else {
            newlines = 0;
            collapsed.push(ch);
        }
    }

    let mut out = collapsed
        .lines()
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n");
    if collapsed.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Walk the conventional template directory candidates; first existing
/// path wins, else the first candidate is created
fn discover_templates_dir() -> PathBuf {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("templates"));
            candidates.push(dir.join("../templates"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("templates"));
    }

    for candidate in &candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }

    let fallback = candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from("templates"));
    // A missing templates directory is non-fatal; create it lazily
    let _ = std::fs::create_dir_all(&fallback);
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, ctx: Value) -> String {
        Engine::new().render(template, &ctx).unwrap()
    }

    #[test]
    fn test_variable_interpolation() {
        assert_eq!(render("Hello {{name}}!", json!({"name": "World"})), "Hello World!");
        assert_eq!(render("Hello {{missing}}!", json!({})), "Hello !");
    }

    #[test]
    fn test_escaped_vs_raw_interpolation() {
        let ctx = json!({"v": "<b>&\""});
        assert_eq!(render("{{v}}", ctx.clone()), "&lt;b&gt;&amp;&quot;");
        assert_eq!(render("{{{v}}}", ctx), "<b>&\"");
    }

    #[test]
    fn test_dot_paths() {
        let ctx = json!({"project": {"name": "shop"}});
        assert_eq!(render("{{project.name}}", ctx), "shop");
    }

    #[test]
    fn test_if_true_and_false() {
        assert_eq!(render("{{#if on}}yes{{/if}}", json!({"on": true})), "yes");
        assert_eq!(render("{{#if on}}yes{{/if}}", json!({"on": false})), "");
        assert_eq!(render("{{#if on}}yes{{else}}no{{/if}}", json!({"on": false})), "no");
    }

    #[test]
    fn test_nested_conditionals_match_their_own_close() {
        let template = "{{#if a}}X{{#if b}}Y{{else}}Z{{/if}}W{{/if}}";
        assert_eq!(render(template, json!({"a": true, "b": false})), "XZW");
        assert_eq!(render(template, json!({"a": true, "b": true})), "XYW");
        assert_eq!(render(template, json!({"a": false})), "");
    }

    #[test]
    fn test_unless() {
        assert_eq!(render("{{#unless on}}off{{/unless}}", json!({"on": false})), "off");
        assert_eq!(render("{{#unless on}}off{{/unless}}", json!({"on": true})), "");
        assert_eq!(render("{{#unless missing}}off{{/unless}}", json!({})), "off");
    }

    #[test]
    fn test_each_exposes_item_and_index() {
        let ctx = json!({"items": ["x", "y"]});
        assert_eq!(
            render("{{#each items}}{{this}}-{{@index}}{{/each}}", ctx),
            "x-0y-1"
        );
    }

    #[test]
    fn test_each_first_last_markers() {
        let ctx = json!({"items": ["a", "b", "c"]});
        let template = "{{#each items}}{{#if @first}}[{{/if}}{{this}}{{#unless @last}}|{{/unless}}{{#if @last}}]{{/if}}{{/each}}";
        assert_eq!(render(template, ctx), "[a|b|c]");
    }

    #[test]
    fn test_each_empty_and_non_array() {
        assert_eq!(render("{{#each items}}x{{/each}}", json!({"items": []})), "");
        assert_eq!(render("{{#each items}}x{{/each}}", json!({"items": 7})), "");
        assert_eq!(render("{{#each items}}x{{/each}}", json!({})), "");
    }

    #[test]
    fn test_each_spreads_object_items() {
        let ctx = json!({"deps": [{"name": "react", "version": "^18"}]});
        assert_eq!(
            render("{{#each deps}}{{name}}@{{version}}{{/each}}", ctx),
            "react@^18"
        );
    }

    #[test]
    fn test_with_switches_context() {
        let ctx = json!({"pkg": {"name": "shop", "version": "0.1.0"}});
        assert_eq!(render("{{#with pkg}}{{name}} {{version}}{{/with}}", ctx), "shop 0.1.0");
        assert_eq!(render("{{#with pkg}}x{{/with}}", json!({"pkg": 3})), "");
    }

    #[test]
    fn test_comments_removed_first() {
        assert_eq!(render("a{{!-- hidden --}}b", json!({})), "ab");
        assert_eq!(
            render("a{{!-- multi\nline\ncomment --}}b", json!({})),
            "ab"
        );
    }

    #[test]
    fn test_missing_partial_placeholder() {
        assert_eq!(
            render("{{> header}}", json!({})),
            "<!-- Partial \"header\" not found -->"
        );
    }

    #[test]
    fn test_registered_partial_renders_with_context() {
        let engine = Engine::new();
        engine.register_partial("greeting", "Hello {{name}}");
        let out = engine
            .render("{{> greeting}}!", &json!({"name": "Ada"}))
            .unwrap();
        assert_eq!(out, "Hello Ada!");
    }

    #[test]
    fn test_cyclic_partial_bounded() {
        let engine = Engine::new();
        engine.register_partial("loop", "{{> loop}}");
        let out = engine.render("{{> loop}}", &json!({})).unwrap();
        assert!(out.contains("not found"));
    }

    #[test]
    fn test_unmatched_block_left_verbatim_by_default() {
        let template = "{{#if x}}no close";
        assert_eq!(render(template, json!({"x": true})), template);
    }

    #[test]
    fn test_strict_mode_rejects_unmatched_block() {
        let engine = Engine::new().strict(true);
        let err = engine.render("{{#if x}}no close", &json!({})).unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnmatchedBlock { ref directive, .. } if directive == "#if"
        ));
    }

    #[test]
    fn test_features_prefix_lookup() {
        let ctx = json!({"features": {"eslint": true}});
        assert_eq!(render("{{#if features.eslint}}lint{{/if}}", ctx), "lint");
    }

    #[test]
    fn test_whitespace_cleanup() {
        assert_eq!(render("a\n\n\n\nb", json!({})), "a\n\nb");
        assert_eq!(render("line   \nnext", json!({})), "line\nnext");
    }

    #[test]
    fn test_rendering_is_idempotent_across_calls() {
        let engine = Engine::new();
        let template = "{{#each items}}{{this}};{{/each}}{{#if on}}!{{/if}}";
        let ctx = json!({"items": ["a", "b"], "on": true});
        let first = engine.render(template, &ctx).unwrap();
        let second = engine.render(template, &ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "a;b;!");
    }
}

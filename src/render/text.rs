//! Plain text outline output.

use super::{RenderResult, Renderer};
use crate::docset::DocSet;
use crate::hierarchy::{Forest, HierarchyNode};
use crate::index::{Bucket, Page};
use crate::io::ResultCode;
use crate::symbol::Symbol;
use crate::types::SymbolKind;
use console::Style;
use is_terminal::IsTerminal;
use std::fmt::Write;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    colored: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    /// Colors follow the terminal; `NO_COLOR` turns them off.
    pub fn new() -> Self {
        Self {
            colored: !should_disable_colors(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn heading(&self, text: &str) -> String {
        Style::new()
            .cyan()
            .bold()
            .force_styling(self.colored)
            .apply_to(text)
            .to_string()
    }

    fn name(&self, text: &str) -> String {
        Style::new()
            .green()
            .force_styling(self.colored)
            .apply_to(text)
            .to_string()
    }

    fn dim(&self, text: &str) -> String {
        Style::new()
            .dim()
            .force_styling(self.colored)
            .apply_to(text)
            .to_string()
    }

    fn write_entry(&self, out: &mut String, symbol: &Symbol) -> RenderResult<()> {
        let signature = symbol.signature.as_deref().unwrap_or_default();
        write!(out, "{INDENT}{}{signature}", self.name(symbol.as_name()))?;
        match symbol.container.as_deref() {
            Some(container) if !container.is_empty() => writeln!(
                out,
                " {}",
                self.dim(&format!("- {} in {container}", symbol.kind))
            )?,
            _ => writeln!(out, " {}", self.dim(&format!("- {}", symbol.kind)))?,
        }
        Ok(())
    }

    fn write_bucket(&self, out: &mut String, bucket: &Bucket<'_>) -> RenderResult<()> {
        writeln!(out, "{}", self.heading(&bucket.key.to_string()))?;
        for symbol in bucket.iter() {
            self.write_entry(out, symbol)?;
        }
        Ok(())
    }

    fn write_page(&self, out: &mut String, page: &Page<'_>, total: usize) -> RenderResult<()> {
        if page.key.is_some() {
            writeln!(out, "{}", self.dim(&format!("Page {} of {total}", page.number)))?;
        }
        // Letter bar of the combined page
        if page.key.is_none() && !page.buckets.is_empty() {
            let letters: Vec<String> = page.buckets.iter().map(|b| b.key.to_string()).collect();
            writeln!(out, "{}", self.dim(&letters.join(" ")))?;
        }
        for bucket in &page.buckets {
            self.write_bucket(out, bucket)?;
        }
        if page.previous.is_some() || page.next.is_some() {
            let nav = |key: Option<char>| key.map_or("-".to_string(), String::from);
            writeln!(
                out,
                "{}",
                self.dim(&format!(
                    "Previous: {}  Next: {}",
                    nav(page.previous),
                    nav(page.next)
                ))
            )?;
        }
        Ok(())
    }

    fn write_node(&self, out: &mut String, node: &HierarchyNode<'_>, depth: usize) -> RenderResult<()> {
        write!(
            out,
            "{}{}",
            INDENT.repeat(depth + 1),
            self.name(&node.symbol.qualified_name())
        )?;
        if !node.implements.is_empty() {
            let names: Vec<String> = node.implements.iter().map(|s| s.qualified_name()).collect();
            let keyword = if node.symbol.kind == SymbolKind::Interface {
                "extends"
            } else {
                "implements"
            };
            write!(out, " {}", self.dim(&format!("({keyword} {})", names.join(", "))))?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_forest(&self, out: &mut String, forest: &Forest<'_>) -> RenderResult<()> {
        writeln!(out, "{}", self.heading(&forest_title(forest.kind)))?;
        if forest.is_empty() {
            writeln!(out, "{INDENT}{}", self.dim("(none)"))?;
        }
        for (depth, node) in forest.walk() {
            self.write_node(out, node, depth)?;
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render_index(&self, pages: &[Page<'_>], unnamed: &[&Symbol]) -> RenderResult<String> {
        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.write_page(&mut out, page, pages.len())?;
        }
        if !unnamed.is_empty() {
            if !out.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", self.heading("Unnamed"))?;
            for symbol in unnamed {
                self.write_entry(&mut out, symbol)?;
            }
        }
        Ok(out)
    }

    fn render_forests(&self, forests: &[Forest<'_>]) -> RenderResult<String> {
        let mut out = String::new();
        for (i, forest) in forests.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.write_forest(&mut out, forest)?;
        }
        Ok(out)
    }

    fn render_docset(&self, docset: &DocSet<'_>) -> RenderResult<String> {
        let pages = docset.index.as_deref().unwrap_or_default();
        let mut out = self.render_index(pages, &docset.unnamed)?;
        if !out.is_empty() && !docset.forests.is_empty() {
            writeln!(out)?;
        }
        out.push_str(&self.render_forests(&docset.forests)?);
        Ok(out)
    }

    fn render_not_found(&self, message: &str, hint: Option<&str>) -> RenderResult<String> {
        let mut out = format!("{message}\n");
        if let Some(hint) = hint {
            writeln!(out, "{}", self.dim(hint))?;
        }
        Ok(out)
    }

    fn render_error(&self, code: ResultCode, message: &str) -> RenderResult<String> {
        let label = Style::new()
            .red()
            .bold()
            .force_styling(self.colored)
            .apply_to("Error");
        Ok(format!("{label} [{}]: {message}\n", code.as_str()))
    }
}

fn forest_title(kind: SymbolKind) -> String {
    match kind {
        SymbolKind::Class => "Class Hierarchy".to_string(),
        SymbolKind::Interface => "Interface Hierarchy".to_string(),
        SymbolKind::Enum => "Enum Hierarchy".to_string(),
        SymbolKind::AnnotationType => "Annotation Type Hierarchy".to_string(),
        other => format!("{other} hierarchy"),
    }
}

fn should_disable_colors() -> bool {
    std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal()
}

//! Page model — the pure half of the display controller.
//!
//! `render` turns a catalog key into an ordered list of sections. The
//! result depends only on the key and the catalog, so the same key
//! always yields the same page. The TUI and `--print` both draw from it.

use crate::catalog::{Catalog, CatalogResult, Stage};

pub const TITLE: &str = "文脈解釈デモ：C（判断委ね系）";
pub const CAPTION: &str = "※ 統計モデル・LLMは使用していません";
pub const SELECT_PROMPT: &str = "文脈タイプを選択";
pub const CLOSING_CAPTION: &str =
    "判断委ね系では、意思決定そのものではなく、判断主体と責任の所在の移動を解析対象とする。";

const HEADING_DESCRIPTION: &str = "文脈タイプの説明";
const HEADING_EXAMPLES: &str = "例文一覧";
const HEADING_DEEP_DIVE: &str = "解析対象（深掘り）";
const HEADING_STAGES: &str = "Stageごとの解釈";
const HEADING_NOTE: &str = "解釈の説明";

/// One entry in the selector: a catalog key bound to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// A block of page content, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Title(&'static str),
    Caption(&'static str),
    Selector {
        prompt: &'static str,
        options: Vec<SelectorOption>,
        selected: usize,
    },
    Subheader(&'static str),
    Body(&'static str),
    /// Rendered 1-indexed, in stored order.
    NumberedList(&'static [&'static str]),
    Divider,
    /// The deep-dive sentence, emphasized.
    DeepDive(&'static str),
    /// Bulleted, stage labels bolded.
    Stages(&'static [Stage]),
}

impl Section {
    /// Markdown form of this section.
    pub fn to_markdown(&self) -> String {
        match self {
            Section::Title(text) => format!("# {text}"),
            Section::Caption(text) => format!("*{text}*"),
            Section::Selector {
                prompt,
                options,
                selected,
            } => {
                let choices: Vec<String> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        let marker = if i == *selected { "◉" } else { "○" };
                        format!("{marker} {}", opt.label)
                    })
                    .collect();
                format!("{prompt}：{}", choices.join("　"))
            }
            Section::Subheader(text) => format!("## {text}"),
            Section::Body(text) => text.to_string(),
            Section::NumberedList(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {item}", i + 1))
                .collect::<Vec<_>>()
                .join("\n"),
            Section::Divider => "---".into(),
            Section::DeepDive(text) => format!("**「{text}」**"),
            Section::Stages(stages) => stages
                .iter()
                .map(|s| format!("- **{}**：{}", s.label, s.text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A fully rendered page for one selected context type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The key this page was rendered for.
    pub key: &'static str,
    pub sections: Vec<Section>,
}

impl Page {
    /// The whole page as markdown, sections separated by blank lines.
    pub fn to_markdown(&self) -> String {
        self.sections
            .iter()
            .map(Section::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Render the page for `key`, or for the first catalog entry when `None`.
///
/// Fails with `NotFound` for a key outside the catalog.
pub fn render(catalog: &Catalog, key: Option<&str>) -> CatalogResult<Page> {
    let context = match key {
        Some(k) => catalog.get(k)?,
        None => catalog.first(),
    };

    let options: Vec<SelectorOption> = catalog
        .entries()
        .iter()
        .map(|e| SelectorOption {
            key: e.key,
            label: e.label,
        })
        .collect();
    let selected = options
        .iter()
        .position(|o| o.key == context.key)
        .unwrap_or(0);

    let sections = vec![
        Section::Title(TITLE),
        Section::Caption(CAPTION),
        Section::Selector {
            prompt: SELECT_PROMPT,
            options,
            selected,
        },
        Section::Subheader(HEADING_DESCRIPTION),
        Section::Body(context.description),
        Section::Subheader(HEADING_EXAMPLES),
        Section::NumberedList(context.examples),
        Section::Divider,
        Section::Subheader(HEADING_DEEP_DIVE),
        Section::DeepDive(context.deep_dive),
        Section::Subheader(HEADING_STAGES),
        Section::Stages(context.interpretation),
        Section::Subheader(HEADING_NOTE),
        Section::Body(context.note),
        Section::Divider,
        Section::Caption(CLOSING_CAPTION),
    ];

    Ok(Page {
        key: context.key,
        sections,
    })
}

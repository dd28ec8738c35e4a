//! End-to-end checks of the rendered page, through the library and the
//! `--print` / `--json` modes of the binary.

use std::process::Command;

use yudane::catalog::Catalog;
use yudane::page::{self, Section};
use yudane::tui::app::ViewerApp;
use yudane::tui::event::TuiMessage;

fn catalog() -> &'static Catalog {
    Catalog::builtin().expect("built-in catalog must be valid")
}

fn yudane(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_yudane"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn position_dependent_page() {
    let page = page::render(catalog(), Some("position_dependent")).unwrap();
    let md = page.to_markdown();
    assert!(md.contains("相手の立場や役割に判断を委ねる"));

    let examples: Vec<&str> = md
        .lines()
        .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .collect();
    assert_eq!(examples.len(), 5);
    assert_eq!(examples[0], "1. その辺は、〇〇さんの判断でいいと思います。");
}

#[test]
fn implicit_rule_stage3_norm() {
    let ctx = catalog().get("implicit_rule").unwrap();
    let stage3 = ctx.interpretation[2];
    assert!(stage3.text.contains("普通") || stage3.text.contains("いつも"));
}

#[test]
fn responsibility_shift_deep_dive() {
    let page = page::render(catalog(), Some("responsibility_shift")).unwrap();
    assert!(page
        .sections
        .contains(&Section::DeepDive("それで問題がなければ進めますが。")));
}

#[test]
fn default_selection_is_first_entry() {
    let page = page::render(catalog(), None).unwrap();
    assert_eq!(page.key, "position_dependent");
}

#[test]
fn switching_in_the_viewer_leaves_nothing_behind() {
    let mut app = ViewerApp::new(catalog()).unwrap();
    let before = app.page.to_markdown();
    app.update(TuiMessage::Select("implicit_rule".into())).unwrap();
    let after = app.page.to_markdown();

    assert_ne!(before, after);
    assert_eq!(
        after,
        page::render(catalog(), Some("implicit_rule"))
            .unwrap()
            .to_markdown()
    );
    let old = catalog().get("position_dependent").unwrap();
    assert!(!after.contains(old.description));
    assert!(!after.contains(old.deep_dive));
}

#[test]
fn print_mode_renders_selected_page() {
    let out = yudane(&["--print", "--key", "responsibility_shift"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("# 文脈解釈デモ：C（判断委ね系）"));
    assert!(stdout.contains("**「それで問題がなければ進めますが。」**"));
}

#[test]
fn print_mode_defaults_to_first_entry() {
    let out = yudane(&["--print"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("1. その辺は、〇〇さんの判断でいいと思います。"));
}

#[test]
fn unknown_key_exits_with_error() {
    let out = yudane(&["--print", "--key", "bogus"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("context not found: bogus"));
}

#[test]
fn json_mode_dumps_catalog() {
    let out = yudane(&["--json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["key"], "position_dependent");
    assert_eq!(entries[0]["deep_dive"], entries[0]["examples"][0]);
    assert_eq!(entries[2]["interpretation"].as_array().unwrap().len(), 5);
}

#[test]
fn json_mode_rejects_key() {
    let out = yudane(&["--json", "--key", "implicit_rule"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("cannot be used with"));
}

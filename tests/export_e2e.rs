// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use duo_pleco::commands::{ExportError, run_export, run_preview};
use duo_pleco::core::Word;
use duo_pleco::export::ExportOptions;
use duo_pleco::source::{PlainTextSource, SourceType, WordSource};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("duo_pleco_e2e_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn list_input_writes_both_blocks() {
    let dir = tmp_dir("list");
    let input = dir.join("words.txt");
    fs::write(&input, "这\n这儿\n这里\n认识\n这\n说\n").unwrap();

    let mut options = ExportOptions::new("2020-06-01");
    options.set_output(dir.join("out.txt"));

    let source = PlainTextSource::new(&input);
    let summary = run_export(&source, &options).unwrap();

    assert_eq!(summary.fetched, 6);
    assert_eq!(summary.unique, 5);
    assert_eq!(summary.supplement, 4);

    let content = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(
        content,
        "//Duo2020-06-01\n认识\n说\n这\n这儿\n这里\n//Duo2020-06-01+\n儿\n认\n识\n里\n"
    );
}

#[test]
fn saved_page_input_feeds_pipeline() {
    let dir = tmp_dir("page");
    let input = dir.join("saved.html");
    fs::write(
        &input,
        concat!(
            "<html><body><div>",
            "<span class=\"_3_ODH x\">这</span>",
            "<span class=\"nav\">Words</span>",
            "<span class=\"_3_ODH\">这儿</span>",
            "<span class=\"_3_ODH\">这</span>",
            "</div></body></html>",
        ),
    )
    .unwrap();

    // extension-based detection should pick the page source
    let source = SourceType::from_name("auto", &input);
    let fetched = source.fetch().unwrap();
    assert_eq!(fetched.len(), 3);

    let mut options = ExportOptions::new("2020-06-01");
    options.set_output(dir.join("out.txt"));

    let summary = run_export(&source, &options).unwrap();
    assert_eq!(summary.fetched, 3);
    assert_eq!(summary.unique, 2);
    assert_eq!(summary.supplement, 1); // 儿

    let content = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(content, "//Duo2020-06-01\n这\n这儿\n//Duo2020-06-01+\n儿\n");
}

#[test]
fn directory_output_gets_default_filename() {
    let dir = tmp_dir("dirout");
    let input = dir.join("words.txt");
    fs::write(&input, "中国\n不客气\n不客气\n").unwrap();

    let mut options = ExportOptions::new("2020-12-31");
    options.set_output(&dir);

    let source = PlainTextSource::new(&input);
    let summary = run_export(&source, &options).unwrap();

    assert_eq!(
        summary.path,
        dir.join("pleco_duolingo_2020-12-31.txt")
    );
    assert!(summary.path.exists());
}

#[test]
fn fetch_failure_leaves_no_file() {
    let dir = tmp_dir("nofetch");
    let out = dir.join("out.txt");

    let mut options = ExportOptions::new("2020-06-01");
    options.set_output(&out);

    let source = PlainTextSource::new(dir.join("missing.txt"));
    let err = run_export(&source, &options).unwrap_err();

    assert!(matches!(err, ExportError::Fetch(_)));
    assert!(!out.exists());
}

#[test]
fn empty_source_is_a_fetch_error() {
    let dir = tmp_dir("emptysrc");
    let input = dir.join("words.txt");
    fs::write(&input, "\n//Duo2020-01-01\n\n").unwrap();

    let source = PlainTextSource::new(&input);
    let err = run_export(&source, &ExportOptions::new("2020-06-01")).unwrap_err();
    assert!(matches!(err, ExportError::Fetch(_)));
}

#[test]
fn supplement_block_keeps_its_own_order() {
    // 你 (U+4F60) sorts before every canonical entry, yet stays in the
    // second block: the writer must not re-merge the lists.
    let dir = tmp_dir("noresort");
    let input = dir.join("words.txt");
    fs::write(&input, "你好\n好\n").unwrap();

    let mut options = ExportOptions::new("2020-06-01");
    options.set_output(dir.join("out.txt"));

    let source = PlainTextSource::new(&input);
    let summary = run_export(&source, &options).unwrap();

    let content = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(content, "//Duo2020-06-01\n你好\n好\n//Duo2020-06-01+\n你\n");
}

#[test]
fn preview_and_export_agree() {
    let dir = tmp_dir("agree");
    let input = dir.join("words.txt");
    fs::write(&input, "不\n一\n一点儿\n不客气\n").unwrap();

    let source = PlainTextSource::new(&input);
    let preview = run_preview(&source).unwrap();

    let mut options = ExportOptions::new("2020-06-01");
    options.set_output(dir.join("out.txt"));
    let summary = run_export(&source, &options).unwrap();

    assert_eq!(preview.fetched, summary.fetched);
    assert_eq!(preview.canonical.len(), summary.unique);
    assert_eq!(preview.supplement.len(), summary.supplement);

    let supplement: Vec<&str> = preview.supplement.iter().map(Word::text).collect();
    assert_eq!(supplement, vec!["儿", "客", "气", "点"]);
}

//! End-to-end tests over the ignore-files in `test-fixtures/`.
//!
//! Each case directory holds an `input.gitignore` and the `expected.gitignore`
//! that generating it must produce. `@ALT@` in either file is replaced with the
//! URL of `test-fixtures/alt-templates/`.

use std::fs;
use std::path::{Path, PathBuf};

use ignoregen_blocks::BlockError;
use ignoregen_core::{HttpTemplateSource, PartialOptions, Pipeline};
use ignoregen_fs::io;
use ignoregen_test_utils::{TemplateServer, TestProject};
use pretty_assertions::assert_eq;
use rstest::rstest;
use url::Url;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .canonicalize()
        .unwrap()
}

fn dir_src(dir: &str) -> String {
    Url::from_directory_path(fixtures().join(dir))
        .unwrap()
        .to_string()
}

fn read_case(case: &str, file: &str) -> String {
    let content = fs::read_to_string(fixtures().join("cases").join(case).join(file)).unwrap();
    content.replace("@ALT@", &dir_src("alt-templates"))
}

fn file_pipeline() -> Pipeline<HttpTemplateSource> {
    let overrides = PartialOptions::with_src(dir_src("templates"));
    Pipeline::new(HttpTemplateSource::new().unwrap()).with_overrides(overrides)
}

#[rstest]
#[case::single("single")]
#[case::mixed("mixed")]
#[case::stale("stale")]
#[case::inline_src("inline-src")]
#[case::collapse("collapse")]
#[tokio::test]
async fn test_case_expands_to_expected(#[case] case: &str) {
    let input = io::split_lines(&read_case(case, "input.gitignore"));
    let expected = read_case(case, "expected.gitignore");

    let output = file_pipeline().run(&input).await.unwrap();

    assert_eq!(io::join_lines(&output), expected);
}

#[rstest]
#[case::single("single")]
#[case::mixed("mixed")]
#[case::stale("stale")]
#[case::inline_src("inline-src")]
#[case::collapse("collapse")]
#[tokio::test]
async fn test_expected_output_is_a_fixed_point(#[case] case: &str) {
    let expected = io::split_lines(&read_case(case, "expected.gitignore"));

    let output = file_pipeline().run(&expected).await.unwrap();

    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_write_in_place_through_fs() {
    let project = TestProject::new();
    let path = project.write_gitignore(&read_case("mixed", "input.gitignore"));

    let lines = io::read_lines(&path).unwrap();
    let output = file_pipeline().run(&lines).await.unwrap();
    io::write_lines(&path, &output).unwrap();

    project.assert_file_content(".gitignore", &read_case("mixed", "expected.gitignore"));
}

#[tokio::test]
async fn test_missing_template_leaves_no_output() {
    let input = io::split_lines("# ignoregen node\n\n# ignoregen python\n\n# ignoregen go\n");

    let errors = file_pipeline().generate(&input).await.unwrap_err();

    let headers: Vec<&str> = errors.iter().map(BlockError::header).collect();
    assert_eq!(headers, vec!["# ignoregen python", "# ignoregen go"]);
    assert!(errors[0].url().unwrap().ends_with("/templates/python.ignore"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fixture_templates_over_http() {
    let templates: Vec<(String, String)> = ["node", "env", "macos"]
        .iter()
        .map(|name| {
            let path = fixtures().join("templates").join(format!("{name}.ignore"));
            let body = fs::read_to_string(path).unwrap();
            (name.to_string(), body)
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = templates
        .iter()
        .map(|(name, body)| (name.as_str(), body.as_str()))
        .collect();
    let server = TemplateServer::start(&borrowed).await;

    let pipeline = Pipeline::new(HttpTemplateSource::new().unwrap())
        .with_overrides(PartialOptions::with_src(server.src()));
    let input = io::split_lines(&read_case("mixed", "input.gitignore"));

    let output = pipeline.run(&input).await.unwrap();

    assert_eq!(io::join_lines(&output), read_case("mixed", "expected.gitignore"));
}

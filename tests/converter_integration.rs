#![cfg(unix)]

use std::fs;
use std::path::PathBuf;
use pandoc_bridge::{ConversionRequest, ConvertError, Converter, ConverterTrait, SpawnOptions};
use tempfile::tempdir;

fn fake_converter() -> Converter {
    let script = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fake-converter.sh");
    Converter::with_command(script.to_string_lossy())
}

fn pandoc() -> Converter {
    assert!(which::which("pandoc").is_ok(), "pandoc 不在 PATH 中");
    Converter::new()
}

#[tokio::test]
async fn text_mode_writes_stdin_and_returns_stdout() {
    let result = fake_converter()
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_text("# Heading")
                .extra_args(["--standalone"]),
        )
        .await
        .unwrap();
    assert_eq!(result, "[-f][markdown][-t][html][--standalone]\n# Heading");
}

#[tokio::test]
async fn file_mode_passes_path_positionally() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("doc.md");
    fs::write(&source, "# From file").unwrap();

    let result = fake_converter()
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_file(&source)
                .extra_arg("--toc"),
        )
        .await
        .unwrap();
    assert_eq!(result, format!("[-f][markdown][-t][html][{}][--toc]\n", source.display()));
}

#[tokio::test]
async fn text_takes_precedence_over_file() {
    let result = fake_converter()
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_text("inline")
                .source_file("/should/not/appear.md"),
        )
        .await
        .unwrap();
    assert!(!result.contains("appear.md"));
    assert!(result.ends_with("inline"));
}

#[tokio::test]
async fn output_to_file_resolves_to_empty_string() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("out.html");

    let result = fake_converter()
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_text("# Heading")
                .output_file(&dest),
        )
        .await
        .unwrap();
    assert_eq!(result, "");
    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(written, "[-f][markdown][-t][html]\n# Heading");
}

#[tokio::test]
async fn non_zero_exit_reports_code_and_stderr() {
    let err = fake_converter()
        .execute(ConversionRequest::new("broken", "html").source_text("x"))
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(21));
    assert!(err.to_string().ends_with("exited with code 21: Unknown input format broken\n"));
}

#[tokio::test]
async fn non_zero_exit_without_stderr_ends_with_period() {
    let err = fake_converter()
        .execute(ConversionRequest::new("silent-fail", "html").source_text("x"))
        .await
        .unwrap_err();
    assert!(err.to_string().ends_with("exited with code 3."));
}

#[tokio::test]
async fn missing_engine_is_launch_failure() {
    let err = Converter::with_command("pandoc-bridge-missing-engine")
        .execute(ConversionRequest::new("markdown", "html").source_text("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::LaunchFailure(_)));
}

#[tokio::test]
async fn invalid_requests_never_reach_the_engine() {
    let converter = Converter::with_command("pandoc-bridge-missing-engine");

    let err = converter
        .execute(ConversionRequest::new("markdown", "html"))
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidRequest(_)));

    let mut request = ConversionRequest::new("markdown", "html").source_text("x");
    request.output_to_file = true;
    let err = converter.execute(request).await.unwrap_err();
    assert!(matches!(err, ConvertError::InvalidRequest(_)));
}

#[tokio::test]
async fn spawn_options_reach_the_child() {
    let dir = tempdir().unwrap();
    let result = fake_converter()
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_file("relative.md")
                .spawn_options(
                    SpawnOptions::new()
                        .current_dir(dir.path())
                        .env("LANG", "C")
                        .env("FAKE_CONVERTER_REPORT_ENV", "1"),
                ),
        )
        .await
        .unwrap();
    let expected_dir = dir.path().canonicalize().unwrap();
    let first_line = result.lines().next().unwrap();
    assert_eq!(first_line, format!("cwd:{} lang:C", expected_dir.display()));
    assert!(result.contains("[relative.md]"));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let converter = fake_converter();
    let (a, b) = tokio::join!(
        converter.execute(ConversionRequest::new("markdown", "html").source_text("first")),
        converter.execute(ConversionRequest::new("markdown", "rst").source_text("second")),
    );
    assert!(a.unwrap().ends_with("first"));
    assert!(b.unwrap().ends_with("second"));
}

#[tokio::test]
#[ignore = "requires pandoc on PATH"]
async fn pandoc_converts_heading_to_h1() {
    let converter = pandoc();
    let result = converter
        .execute(ConversionRequest::new("markdown", "html").source_text("# Heading"))
        .await
        .unwrap();
    assert!(result.contains("<h1"));
}

#[tokio::test]
#[ignore = "requires pandoc on PATH"]
async fn pandoc_writes_destination_file() {
    let converter = pandoc();
    let dir = tempdir().unwrap();
    let dest = dir.path().join("out.html");
    let result = converter
        .execute(
            ConversionRequest::new("markdown", "html")
                .source_text("# Heading")
                .output_file(&dest),
        )
        .await
        .unwrap();
    assert!(result.is_empty());
    assert!(fs::read_to_string(&dest).unwrap().contains("<h1"));
}

#[tokio::test]
#[ignore = "requires pandoc on PATH"]
async fn pandoc_rejects_unknown_format() {
    let converter = pandoc();
    let err = converter
        .execute(ConversionRequest::new("not-a-format", "html").source_text("x"))
        .await
        .unwrap_err();
    let code = err.exit_code().unwrap();
    assert_ne!(code, 0);
    assert!(err.to_string().contains(&format!("exited with code {}", code)));
}

#[tokio::test]
#[ignore = "requires pandoc on PATH"]
async fn pandoc_version_and_location() {
    let converter = pandoc();
    assert!(converter.locate().is_some());
    assert!(converter.version().await.unwrap().starts_with("pandoc"));
}

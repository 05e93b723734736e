// generate-widgets binary behavior: configuration, exit codes, summary.
#[path = "support/common.rs"]
mod common;

use anyhow::{Context, Result};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use common::{generate_widgets_bin, read};

fn command() -> Command {
    let mut cmd = Command::new(generate_widgets_bin());
    cmd.env_remove("WIDGET_DOCS_OUTPUT")
        .env_remove("WIDGET_CATALOG_PATH")
        .env_remove("WIDGET_DOCS_ROOT")
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn generates_builtin_catalog_into_output() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("widgets");

    let output = command()
        .arg("--output")
        .arg(&root)
        .output()
        .context("failed to run generate-widgets")?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generated 82 of 82 widget stub(s)"), "stdout: {stdout}");
    assert!(read(&root.join("basics").join("text.md"))?.starts_with("# Text\n"));
    assert!(root.join("cupertino").join("cupertinoapp.md").is_file());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("processing category"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn rerun_reports_zero_new_stubs() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("widgets");
    command().arg("--output").arg(&root).output()?;

    let output = command().arg("--output").arg(&root).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generated 0 of 82 widget stub(s)"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn output_from_env_and_site_root_discovery() -> Result<()> {
    let temp = TempDir::new()?;
    let site = temp.path().join("site");
    fs::create_dir_all(site.join("docs").join(".vitepress"))?;

    let output = command().env("WIDGET_DOCS_ROOT", &site).output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(site.join("docs").join("widgets").join("index.md").is_file());
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("widgets");

    let output = command().arg("--output").arg(&root).arg("--dry-run").output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("would generate 82 of 82"));
    assert!(!root.exists());
    Ok(())
}

#[test]
fn fails_when_output_root_cannot_be_created() -> Result<()> {
    let temp = TempDir::new()?;
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "")?;

    let output = command().arg("--output").arg(blocker.join("widgets")).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("creating directory"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn fails_on_invalid_catalog_before_writing() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("widgets");
    let catalog = temp.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"schema_version": "widget_catalog_v1", "categories": []}"#,
    )?;

    let output = command()
        .arg("--output")
        .arg(&root)
        .arg("--catalog")
        .arg(&catalog)
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("schema validation"));
    assert!(!root.exists());
    Ok(())
}

#[test]
fn path_like_entry_name_writes_nothing() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("out").join("widgets");
    let catalog = temp.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"schema_version": "widget_catalog_v1", "categories": [
            {"key": "basics", "name": "Basics", "widgets": [
                {"name": "../../Escaped", "url": "https://example.test/x"}
            ]}
        ]}"#,
    )?;

    let output = command()
        .arg("--output")
        .arg(&root)
        .arg("--catalog")
        .arg(&catalog)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!root.exists());
    assert!(!temp.path().join("out").join("escaped.md").exists());
    assert!(!temp.path().join("escaped.md").exists());
    Ok(())
}

use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;
use crate::helpers::write_project_manifest;

#[test]
fn test_bare_invocation_analyses() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Analysing the project. Messages are logged to the console.\n"
    );

    Ok(())
}

#[test]
fn test_serve_uses_the_given_port() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .args(["-s", "-p", "4500"])
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Serving inspection results at http://localhost:4500\n"
    );

    Ok(())
}

#[test]
fn test_serve_defaults_to_port_3000() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("--serve")
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Serving inspection results at http://localhost:3000\n"
    );

    Ok(())
}

#[test]
fn test_clustered_short_flags_still_serve() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .args(["-sp", "4500"])
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Serving inspection results at http://localhost:4500\n"
    );

    // A cluster whose value option is left without a value keeps serve mode
    // and falls back to the default port.
    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .arg("-sp")
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Serving inspection results at http://localhost:3000\n"
    );

    Ok(())
}

#[test]
fn test_malformed_port_fails_in_the_server() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .args(["-s", "--port", "not-a-port"])
        .run();

    // Resolution passes the port through untouched; the serve collaborator
    // is where a malformed value surfaces.
    assert_eq!(output.status.code(), Some(2), "unexpected output: {output}");
    assert!(output.stderr.contains("elm-analyse failed"));
    assert!(output.stderr.contains("invalid port `not-a-port`"));

    Ok(())
}

#[test]
fn test_unknown_flags_do_not_block_dispatch() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .args(["--future-flag", "extra-positional"])
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Analysing the project. Messages are logged to the console.\n"
    );

    Ok(())
}

#[test]
fn test_empty_port_value_falls_back_to_default() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    write_project_manifest(directory.path())?;

    let output = Command::new(binary_path())
        .current_dir(directory.path())
        .args(["-s", "--port", ""])
        .run();

    assert_eq!(output.status.code(), Some(0), "unexpected output: {output}");
    assert_eq!(
        output.stdout,
        "Serving inspection results at http://localhost:3000\n"
    );

    Ok(())
}

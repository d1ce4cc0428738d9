use std::net::TcpListener;
use std::process::{Command, Output};

/// Base URL of a local port nobody is listening on.
fn unreachable_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_order-views"))
        .arg("--api-base-url")
        .arg(unreachable_api())
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to run order-views")
}

/// A failed fetch is logged, but stdout carries nothing except the page.
#[test]
fn test_list_stdout_is_only_the_page() {
    let output = run(&["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert!(stdout.starts_with("<!DOCTYPE html>"), "stdout: {stdout}");
    assert!(stdout.trim_end().ends_with("</html>"));
    assert!(!stdout.contains("ERROR"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch orders"));
}

#[test]
fn test_detail_stdout_is_only_the_page() {
    let output = run(&["detail", "--url", "details.html?order_id=1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    assert!(stdout.starts_with("<!DOCTYPE html>"), "stdout: {stdout}");
    assert!(stdout.contains("alert alert-danger"));
    assert!(!stdout.contains("Failed to load order details"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load order details"));
}

/// Bad configuration is reported before any page is rendered.
#[test]
fn test_invalid_detail_page_is_rejected() {
    let output = run(&["--detail-page", "/a*b/x", "list"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid detail page"));
}

use assert_cmd::Command;

fn bookstore() -> Command {
    let config_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/config");
    let mut cmd = Command::cargo_bin("bookstore-cli").unwrap();
    cmd.env("BOOKSTORE_CONFIG_DIR", config_dir)
        .env("BOOKSTORE_ENV", "local")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn search_by_genre_lists_matches_in_catalog_order() {
    let stdout = stdout_of(bookstore().args(["search", "SciFi"]));
    assert_eq!(
        stdout,
        "Dune | Herbert | SciFi | 9.99\nNeuromancer | Gibson | SciFi | 7.50\n"
    );
}

#[test]
fn search_without_keyword_lists_everything() {
    let stdout = stdout_of(bookstore().arg("search"));
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn search_without_match() {
    let stdout = stdout_of(bookstore().args(["search", "Nonexistent"]));
    assert_eq!(stdout, "no books match\n");
}

#[test]
fn login_with_right_password() {
    let stdout = stdout_of(bookstore().args(["login", "alice", "pw1"]));
    assert_eq!(stdout, "welcome, alice (a@x.com)\n");
}

#[test]
fn login_with_wrong_password_fails() {
    let output = bookstore()
        .args(["login", "alice", "pw2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("login failed"));
}

#[test]
fn reviews_keep_their_order() {
    let stdout = stdout_of(bookstore().args(["reviews", "Dune"]));
    assert_eq!(stdout, "The spice must flow\n\n");
}

#[test]
fn reviews_of_unknown_title_fail() {
    bookstore().args(["reviews", "Ulysses"]).assert().failure();
}

#[test]
fn modules_are_described() {
    let stdout = stdout_of(bookstore().arg("modules"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(r#""name":"telemetry""#));
    assert!(lines[1].contains(r#""books":3"#));
    assert!(lines[2].contains(r#""accounts":2"#));
}

#[test]
fn unknown_environment_is_reported() {
    bookstore()
        .env("BOOKSTORE_ENV", "qa")
        .arg("modules")
        .assert()
        .failure();
}

#[test]
fn finished_command_is_logged_to_stderr() {
    let output = bookstore()
        .env("RUST_LOG", "info")
        .args(["search", "Dune"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bookstore command finished"));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Dune | Herbert | SciFi | 9.99\n"
    );
}

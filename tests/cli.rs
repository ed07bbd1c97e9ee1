use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    config: TempDir,
    data: TempDir,
}

impl Env {
    fn new() -> Self {
        let env = Self {
            config: tempfile::tempdir().unwrap(),
            data: tempfile::tempdir().unwrap(),
        };
        env.xap()
            .args(["init", "--data-dir"])
            .arg(env.data.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Initialized xap at"));
        env
    }

    fn xap(&self) -> Command {
        let mut cmd = Command::cargo_bin("xap").unwrap();
        cmd.env("XAP_CONFIG_DIR", self.config.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn write_file(&self, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = self.data.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn upload(&self, path: &Path, extra: &[&str]) -> String {
        let output = self.xap().arg("upload").arg(path).args(extra).output().unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .split_whitespace()
            .find(|w| w.starts_with("doc-"))
            .expect("upload prints the new id")
            .to_string()
    }
}

#[test]
fn parse_prints_filter_json() {
    let env = Env::new();
    env.xap()
        .args(["parse", "Tesla Andalusia 2024 June Invoice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""vendor": "Tesla""#))
        .stdout(predicate::str::contains(r#""entity": "IKOS ANDALUSIA""#))
        .stdout(predicate::str::contains(r#""year": 2024"#))
        .stdout(predicate::str::contains(r#""month": 6"#))
        .stdout(predicate::str::contains(r#""document_type": "Invoice""#))
        .stdout(predicate::str::contains(r#""startDate": null"#));
}

#[test]
fn commands_need_an_initialized_store() {
    let config = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    std::fs::write(
        config.path().join("settings.json"),
        format!("{{\"data_dir\": {:?}}}", data.path().join("missing").display().to_string()),
    )
    .unwrap();
    Command::cargo_bin("xap")
        .unwrap()
        .env("XAP_CONFIG_DIR", config.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run `xap init`"));
}

#[test]
fn upload_autofills_and_rejects_duplicates() {
    let env = Env::new();
    let path = env.write_file("tesla-andalusia_2023.pdf", b"%PDF-1.4 tesla");

    env.xap()
        .arg("upload")
        .arg(&path)
        .args(["--type", "invoice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded tesla-andalusia_2023.pdf as doc-"))
        .stdout(predicate::str::contains("Vendor: TESLA"))
        .stdout(predicate::str::contains("Entity: IKOS ANDALUSIA"))
        .stdout(predicate::str::contains("Period: 2023-01"))
        .stdout(predicate::str::contains("Type:   Invoice"));

    env.xap()
        .arg("upload")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already uploaded"));
}

#[test]
fn search_applies_parsed_filter_and_text_fallback() {
    let env = Env::new();
    let tesla = env.write_file("tesla_june.pdf", b"one");
    let boring = env.write_file("boring_march.pdf", b"two");
    env.upload(&tesla, &["--entity", "andalusia", "--year", "2024", "--month", "6", "--type", "invoice"]);
    env.upload(&boring, &["--entity", "marbella", "--year", "2023", "--month", "3", "--type", "statement"]);

    env.xap()
        .args(["search", "Tesla Andalusia 2024 June Invoice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILTERS:"))
        .stdout(predicate::str::contains("tesla_june.pdf"))
        .stdout(predicate::str::contains("boring_march.pdf").not())
        .stdout(predicate::str::contains("Showing 1 of 1 items"));

    // A single character parses to nothing and falls back to text search.
    env.xap()
        .args(["search", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching text only..."))
        .stdout(predicate::str::contains("boring_march.pdf"));

    env.xap()
        .args(["search", "tesla june", "--drop", "month", "--drop", "vendor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching text only..."));
}

#[test]
fn list_merges_query_with_explicit_flags() {
    let env = Env::new();
    let a = env.write_file("acme_a.pdf", b"a");
    let b = env.write_file("acme_b.pdf", b"b");
    env.upload(&a, &["--year", "2024", "--month", "1"]);
    env.upload(&b, &["--year", "2024", "--month", "2"]);

    env.xap()
        .args(["list", "--query", "acme 2024 january", "--month", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme_b.pdf"))
        .stdout(predicate::str::contains("acme_a.pdf").not());

    env.xap()
        .args(["list", "--from", "31/12/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn edit_delete_and_purge() {
    let env = Env::new();
    let path = env.write_file("spacex_logistics.pdf", b"x");
    let id = env.upload(&path, &[]);

    env.xap()
        .args(["edit", &id, "--vendor", "SPACEX LOGISTICS", "--type", "credit-note"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPACEX LOGISTICS"))
        .stdout(predicate::str::contains("Credit Note"));

    env.xap().args(["edit", &id]).assert().failure();

    env.xap()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    env.xap()
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown document"));

    env.upload(&path, &[]);
    env.xap().arg("purge").assert().failure();
    env.xap()
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 documents removed"));
    env.xap()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents found."));
}

#[test]
fn demo_seeds_only_an_empty_store() {
    let env = Env::new();
    env.xap()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents: 45"));
    env.xap()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("already holds 45 documents"));
    env.xap()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total documents:  45"));
}

#[test]
fn export_then_import_restores_records() {
    let env = Env::new();
    let first = env.write_file("first.pdf", b"1");
    let second = env.write_file("second.pdf", b"2");
    env.upload(&first, &["--vendor", "FIRST"]);
    env.upload(&second, &["--vendor", "SECOND"]);

    let dump = env.data.path().join("dump.json");
    env.xap()
        .arg("export")
        .arg("--output")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 documents"));

    let json = std::fs::read_to_string(&dump).unwrap();
    assert!(json.contains("\"uploadedAt\""));
    assert!(json.find("SECOND").unwrap() < json.find("FIRST").unwrap());

    env.xap().args(["purge", "--yes"]).assert().success();
    env.xap()
        .arg("import")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 documents (0 skipped)"));
    env.xap()
        .arg("import")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 documents (2 skipped)"));

    let output = env.xap().arg("export").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("SECOND").unwrap() < stdout.find("FIRST").unwrap());
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn docs_digest() -> Command {
    let mut cmd = Command::cargo_bin("docs-digest").unwrap();
    for var in ["SOURCE_OWNER", "SOURCE_REPO", "SOURCE_BRANCH", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn rewrite_prints_absolute_links() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("index.md");
    fs::write(
        &file,
        "# Guide\r\n\r\nSee [guide](./guide.md#setup) for details.\r\n\
         [1]: /img/logo.png \"Logo\"\r\n\
         <img src=\"./pic.png\">\r\n\
         ```\r\n[not a link](../x)\r\n```\r\n",
    )
    .unwrap();

    docs_digest()
        .args(["rewrite", "--owner", "o", "--repo", "r", "--branch", "main", "--path"])
        .arg("docs/a/index.md")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "See [guide](https://github.com/o/r/blob/main/docs/a/guide.md#setup) for details.",
        ))
        .stdout(predicate::str::contains(
            "[1]: https://github.com/o/r/blob/main/img/logo.png \"Logo\"",
        ))
        .stdout(predicate::str::contains(
            "<img src=\"https://github.com/o/r/blob/main/docs/a/pic.png\">",
        ))
        .stdout(predicate::str::contains("```\n[not a link](../x)\n```"));
}

#[test]
fn rewrite_accepts_repo_url() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.md");
    fs::write(&file, "[top](#top)").unwrap();

    docs_digest()
        .args(["rewrite", "--repo-url", "https://github.com/acme/widgets", "--path", "README.md"])
        .arg(&file)
        .assert()
        .success()
        .stdout("[top](https://github.com/acme/widgets/blob/main/README.md#top)\n");
}

#[test]
fn rewrite_missing_file_exits_with_two() {
    docs_digest()
        .args(["rewrite", "--path", "docs/a.md", "/definitely/not/here.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn generate_rejects_non_github_repo_url() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("llms.txt");

    docs_digest()
        .args(["generate", "--repo-url", "https://gitlab.com/o/r", "--output"])
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a GitHub URL"));

    assert!(!output.exists());
}

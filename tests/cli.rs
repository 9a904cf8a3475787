use assert_cmd::Command;
use bft_test_utils::TestFile;
use predicates::prelude::*;

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.";

fn bft() -> Command {
    Command::cargo_bin("bft").unwrap()
}

#[test]
fn hello_world_prints_exactly_the_program_output() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::with_content(HELLO_WORLD)?;
    bft()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello World!")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn second_argument_is_the_input() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::with_content("read and echo: ,[.,]")?;
    bft().arg(file.path()).arg("abc").assert().success().stdout("abc");

    // No input argument behaves like empty input
    bft().arg(file.path()).assert().success().stdout("");
    Ok(())
}

#[test]
fn non_utf8_source_bytes_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let mut source = "+".repeat(65).into_bytes();
    source.extend_from_slice(&[0xff, 0xc3, b'.']);
    let file = TestFile::with_bytes(&source)?;
    bft().arg(file.path()).assert().success().stdout("A");
    Ok(())
}

#[test]
fn pointer_fault_keeps_partial_output_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::with_content("++++++++[>++++++++<-]>+.>")?;
    bft()
        .arg(file.path())
        .args(["--cell-count", "2"])
        .assert()
        .failure()
        .stdout("A")
        .stderr(predicate::str::contains("Runtime error: pointer too high"));
    Ok(())
}

#[test]
fn unmatched_bracket_fails() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::with_content("]")?;
    bft()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unmatched ']'"));
    Ok(())
}

#[test]
fn step_limit_stops_endless_loops() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::with_content("+[]")?;
    bft()
        .arg(file.path())
        .args(["-l", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step limit exceeded (500)"));
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    bft()
        .arg("/definitely/not/a/real/program.bf")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error reading file '/definitely/not/a/real/program.bf'"));
}

#[test]
fn zero_cell_count_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = TestFile::new()?;
    bft()
        .arg(file.path())
        .args(["--cell-count", "0"])
        .assert()
        .failure();
    Ok(())
}

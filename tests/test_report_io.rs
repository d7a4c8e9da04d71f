//! Batch evaluation of expression files

use logic_evaluator::report::evaluate_file;
use logic_evaluator::{EngineConfig, Error, FormKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_with_comments_and_blank_lines() {
    let file = write_input(
        "# half adder\n\
         A ^ B\n\
         \n\
         # carry\n\
         A * B\n",
    );
    let results = evaluate_file(file.path(), &EngineConfig::default()).unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].line, 2);
    assert_eq!(results[0].expression, "A ^ B");
    let sum = results[0].result.as_ref().unwrap();
    assert_eq!(sum.numeric_pdnf(), "+(1,2)");

    assert_eq!(results[1].line, 5);
    let carry = results[1].result.as_ref().unwrap();
    assert_eq!(carry.quine_mc_cluskey(FormKind::Disjunctive).to_string(), "(A*B)");
    assert_eq!(carry.minimizers_agree(), Some(true));
}

#[test]
fn test_bad_lines_do_not_stop_the_batch() {
    let file = write_input("A * (B\nA + B\nA & B\n");
    let results = evaluate_file(file.path(), &EngineConfig::default()).unwrap();
    assert_eq!(results.len(), 3);
    assert!(matches!(results[0].result, Err(Error::Parse(_))));
    assert!(results[1].result.is_ok());
    assert!(matches!(results[2].result, Err(Error::Parse(_))));
}

#[test]
fn test_variable_limit_applies_per_line() {
    let file = write_input("a + b + c + d\na + b\n");
    let config = EngineConfig::new().with_max_variables(3);
    let results = evaluate_file(file.path(), &config).unwrap();
    assert!(matches!(results[0].result, Err(Error::Table(_))));
    assert!(results[1].result.is_ok());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing-here.txt");
    let err = evaluate_file(&missing, &EngineConfig::default()).unwrap_err();
    let Error::Io(io) = err else {
        panic!("expected an io error, got {:?}", err);
    };
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

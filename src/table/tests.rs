//! Tests for truth table construction

use super::*;
use crate::expression::ParseError;

#[test]
fn test_generated_rows_are_msb_first() {
    let table = TruthTable::from_expression("A * !B").unwrap();
    let names: Vec<&str> = table.variables().iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let rows: Vec<(Vec<bool>, bool)> = table
        .rows()
        .iter()
        .map(|r| (r.inputs().to_vec(), r.output()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (vec![false, false], false),
            (vec![false, true], false),
            (vec![true, false], true),
            (vec![true, true], false),
        ]
    );
    assert!(table.is_complete());
    assert_eq!(table.source(), Some("A * !B"));
}

#[test]
fn test_row_count_is_power_of_two() {
    for (expr, n) in [("a", 1), ("a*b", 2), ("a^b^c^d", 4), ("x -> y + z", 3)] {
        let table = TruthTable::from_expression(expr).unwrap();
        assert_eq!(table.variables().len(), n);
        assert_eq!(table.rows().len(), 1 << n);
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
        }
    }
}

#[test]
fn test_parse_error_aborts_construction() {
    let err = TruthTable::from_expression("(A * B").unwrap_err();
    assert!(matches!(err, BuildTableError::Parse(_)));

    let err = TruthTable::from_expression("A * B )").unwrap_err();
    assert!(matches!(err, BuildTableError::Parse(_)));

    let err = TruthTable::from_expression("   ").unwrap_err();
    assert!(matches!(err, BuildTableError::Parse(ParseError::Empty)));
}

#[test]
fn test_variable_ceiling() {
    let config = EngineConfig::new().with_max_variables(3);
    let err = TruthTable::from_expression_with_config("a*b*c*d", &config).unwrap_err();
    assert_eq!(
        err,
        BuildTableError::Table(TableError::TooManyVariables { found: 4, limit: 3 })
    );
    assert!(TruthTable::from_expression_with_config("a*b*c", &config).is_ok());

    let err = TruthTable::from_rows_with_config(["a", "b", "c", "d"], Vec::<Vec<bool>>::new(), &config)
        .unwrap_err();
    assert_eq!(err, TableError::TooManyVariables { found: 4, limit: 3 });
}

#[test]
fn test_ceiling_is_capped_by_supported_maximum() {
    let config = EngineConfig::new().with_max_variables(usize::MAX);
    let names: Vec<String> = (0..=MAX_SUPPORTED_VARIABLES)
        .map(|i| "v".repeat(i + 1))
        .collect();
    let err = TruthTable::from_rows_with_config(&names, Vec::<Vec<bool>>::new(), &config)
        .unwrap_err();
    assert_eq!(
        err,
        TableError::TooManyVariables {
            found: MAX_SUPPORTED_VARIABLES + 1,
            limit: MAX_SUPPORTED_VARIABLES
        }
    );
}

#[test]
fn test_from_rows_sorts_and_keeps_variable_order() {
    let table = TruthTable::from_rows(
        ["Y", "X"],
        [
            [true, true, false],
            [false, false, true],
            [true, false, true],
            [false, true, false],
        ],
    )
    .unwrap();
    assert_eq!(table.variables()[0].as_ref(), "Y");
    let indices: Vec<usize> = table.rows().iter().map(Row::index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(table.minterm_indices(), vec![0, 2]);
    assert_eq!(table.pdnf().to_string(), "(!Y*!X)+(Y*!X)");
}

#[test]
fn test_from_rows_validation() {
    let err = TruthTable::from_rows(["A", "A"], Vec::<Vec<bool>>::new()).unwrap_err();
    assert!(matches!(err, TableError::DuplicateVariable { .. }));

    let err = TruthTable::from_rows(["A1"], Vec::<Vec<bool>>::new()).unwrap_err();
    assert!(matches!(err, TableError::InvalidVariableName { .. }));

    let err = TruthTable::from_rows([""], Vec::<Vec<bool>>::new()).unwrap_err();
    assert!(matches!(err, TableError::InvalidVariableName { .. }));

    let err = TruthTable::from_rows(["A", "B"], [vec![true, false]]).unwrap_err();
    assert_eq!(
        err,
        TableError::RowWidthMismatch {
            row: 0,
            expected: 3,
            found: 2
        }
    );

    let err = TruthTable::from_rows(["A"], [[true, true], [true, false]]).unwrap_err();
    assert_eq!(err, TableError::DuplicateRow { index: 1 });
}

#[test]
fn test_output_lookup() {
    let table = TruthTable::from_rows(["A", "B"], [[true, false, true]]).unwrap();
    assert_eq!(table.output(2), Some(true));
    assert_eq!(table.output(0), None);
    assert_eq!(table.expected_rows(), 4);
}

#[test]
fn test_over_variables_tolerates_unused_names() {
    let expr = PostfixExpr::parse("B").unwrap();
    let variables: Arc<[Arc<str>]> = ["A", "B", "C"].iter().map(|s| Arc::from(*s)).collect();
    let table = TruthTable::over_variables(&expr, variables, &EngineConfig::default()).unwrap();
    assert_eq!(table.minterm_indices(), vec![2, 3, 6, 7]);
}

#[test]
fn test_over_variables_rejects_missing_names() {
    let expr = PostfixExpr::parse("D").unwrap();
    let variables: Arc<[Arc<str>]> = ["A"].iter().map(|s| Arc::from(*s)).collect();
    let err = TruthTable::over_variables(&expr, variables, &EngineConfig::default()).unwrap_err();
    assert!(matches!(err, BuildTableError::Evaluation(_)));
}

#[test]
fn test_display_grid() {
    let table = TruthTable::from_expression("A + B").unwrap();
    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "A B | F");
    assert_eq!(lines[1], "0 0 | 0");
    assert_eq!(lines[4], "1 1 | 1");
}

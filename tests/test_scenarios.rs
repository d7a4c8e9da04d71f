//! Worked examples over the public API

use logic_evaluator::{
    BuildTableError, FormKind, IncompleteTableError, ParseError, Polarity, TruthTable,
};
use num_bigint::BigUint;

#[test]
fn test_three_input_parity() {
    let table = TruthTable::from_expression("(A^B)^C").unwrap();
    assert_eq!(table.rows().len(), 8);
    assert_eq!(table.numeric_pdnf(), "+(1,2,4,7)");
    assert_eq!(table.numeric_pcnf(), "*(0,3,5,6)");
    assert_eq!(table.index_form().unwrap().to_string(), "f(3)105");

    // nothing merges: every minimizer returns the canonical forms
    assert_eq!(table.quine_mc_cluskey(FormKind::Disjunctive), table.pdnf());
    assert_eq!(table.karnaugh_groups(FormKind::Disjunctive).unwrap().len(), 4);
    assert_eq!(table.karnaugh_groups(FormKind::Conjunctive).unwrap().len(), 4);
}

#[test]
fn test_and_gate() {
    let table = TruthTable::from_expression("A*B").unwrap();
    assert_eq!(table.pdnf().to_string(), "(A*B)");
    assert_eq!(table.numeric_pdnf(), "+(3)");

    let qmc = table.quine_mc_cluskey(FormKind::Disjunctive);
    assert_eq!(qmc.to_string(), "(A*B)");
    assert_eq!(qmc.terms()[0], table.pdnf().terms()[0]);

    let kmap = table.karnaugh_map().unwrap();
    assert_eq!((kmap.rows(), kmap.cols()), (2, 2));
    let groups = table.karnaugh_groups(FormKind::Disjunctive).unwrap();
    assert_eq!(groups.len(), 1);
    let term = groups.terms()[0];
    assert_eq!(term.cover_count(), 1);
    assert_eq!(term.polarity(0), Polarity::Positive);
    assert_eq!(term.polarity(1), Polarity::Positive);
    let (row, col) = kmap.position_of(3);
    assert!(kmap.cell(row, col));
}

#[test]
fn test_tautology() {
    let table = TruthTable::from_expression("A+!A").unwrap();
    assert!(table.pcnf().is_empty());
    assert_eq!(table.pcnf().to_string(), "1");
    assert_eq!(table.numeric_pcnf(), "*()");
    // output column 11
    assert_eq!(table.index_form().unwrap().value(), &BigUint::from(3u32));

    for form in FormKind::ALL {
        assert_eq!(table.quine_mc_cluskey(form).to_string(), "1");
        assert_eq!(table.karnaugh_groups(form).unwrap().to_string(), "1");
    }
}

#[test]
fn test_contradiction() {
    let table = TruthTable::from_expression("A*!A").unwrap();
    assert!(table.pdnf().is_empty());
    assert_eq!(table.pdnf().to_string(), "0");
    assert_eq!(table.numeric_pdnf(), "+()");
    assert_eq!(table.index_form().unwrap().value(), &BigUint::from(0u32));

    for form in FormKind::ALL {
        assert_eq!(table.quine_mc_cluskey(form).to_string(), "0");
        assert_eq!(table.karnaugh_groups(form).unwrap().to_string(), "0");
    }
}

#[test]
fn test_full_adder_carry() {
    let table = TruthTable::from_expression("(A*B)+(C*(A^B))").unwrap();
    assert_eq!(table.numeric_pdnf(), "+(3,5,6,7)");
    let expected = "(B*C)+(A*C)+(A*B)";
    assert_eq!(table.quine_mc_cluskey(FormKind::Disjunctive).to_string(), expected);
    assert_eq!(table.calculative_reduction(FormKind::Disjunctive).unwrap().to_string(), expected);

    let kmap = table.karnaugh_groups(FormKind::Disjunctive).unwrap();
    assert_eq!(kmap.len(), 3);
    assert_eq!(kmap.literal_count(), 6);
}

#[test]
fn test_four_variable_minimization() {
    // classic example: f = +(0,2,5,7,8,10,13,15) = !b*!d + b*d
    let table = TruthTable::from_expression("(!b * !d) + (b * d) + (a * c * !c)").unwrap();
    assert_eq!(table.numeric_pdnf(), "+(0,2,5,7,8,10,13,15)");
    for formula in [
        table.quine_mc_cluskey(FormKind::Disjunctive),
        table.karnaugh_groups(FormKind::Disjunctive).unwrap(),
    ] {
        assert_eq!(formula.len(), 2);
        let text = formula.to_string();
        assert!(text.contains("(!b*!d)"), "{}", text);
        assert!(text.contains("(b*d)"), "{}", text);
    }
}

#[test]
fn test_product_of_sums_rebuilds_function() {
    let table = TruthTable::from_expression("(a -> b) * (b -> c)").unwrap();
    let cnf = table.quine_mc_cluskey(FormKind::Conjunctive);
    let rebuilt = TruthTable::from_expression(&cnf.to_string()).unwrap();
    assert_eq!(rebuilt.index_form().unwrap(), table.index_form().unwrap());
}

#[test]
fn test_parse_errors_fail_loudly() {
    let cases = [
        ("", "empty"),
        ("(A * B", "unbalanced"),
        ("A * B)", "unbalanced"),
        ("A * B % C", "unexpected"),
        ("A * ", "missing"),
        ("A B", "operand"),
    ];
    for (input, kind) in cases {
        let err = TruthTable::from_expression(input).unwrap_err();
        let BuildTableError::Parse(parse) = err else {
            panic!("expected a parse error for {:?}, got {:?}", input, err);
        };
        let matches = match kind {
            "empty" => matches!(parse, ParseError::Empty),
            "unbalanced" => matches!(parse, ParseError::UnbalancedParentheses { .. }),
            "unexpected" => matches!(parse, ParseError::UnexpectedCharacter { .. }),
            "missing" => matches!(parse, ParseError::MissingOperand { .. }),
            _ => matches!(parse, ParseError::UnexpectedOperand { .. }),
        };
        assert!(matches, "{:?} gave {:?}", input, parse);
    }
}

#[test]
fn test_trailing_garbage_is_not_dropped() {
    let err = TruthTable::from_expression("A * B 123").unwrap_err();
    assert!(matches!(err, BuildTableError::Parse(_)));
}

#[test]
fn test_partial_table_operations() {
    let table = TruthTable::from_rows(
        ["A", "B", "C"],
        [
            [false, false, true, true],
            [false, true, true, true],
            [true, true, true, false],
        ],
    )
    .unwrap();
    assert!(!table.is_complete());
    assert_eq!(table.numeric_pdnf(), "+(1,3)");
    assert_eq!(table.numeric_pcnf(), "*(7)");
    assert_eq!(table.quine_mc_cluskey(FormKind::Disjunctive).to_string(), "(!A*C)");

    let expected = IncompleteTableError {
        operation: "index form",
        rows: 3,
        expected: 8,
    };
    assert_eq!(table.index_form().unwrap_err(), expected);
    assert!(table.calculative_reduction(FormKind::Disjunctive).is_err());
    assert!(table.karnaugh_groups(FormKind::Conjunctive).is_err());
}

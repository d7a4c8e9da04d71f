//! The `truth_table!` macro against the runtime parser

use logic_evaluator::{truth_table, FormKind, TruthTable};

#[test]
fn test_parity_macro() {
    let table = truth_table!((A ^ B) ^ C).unwrap();
    assert_eq!(table.numeric_pdnf(), "+(1,2,4,7)");
    assert_eq!(table.source(), Some("((A ^ B) ^ C)"));
}

#[test]
fn test_precedence_is_made_explicit() {
    let table = truth_table!(a * b -> c).unwrap();
    assert_eq!(table.source(), Some("((a * b) -> c)"));
    let runtime = TruthTable::from_expression("a * b -> c").unwrap();
    assert_eq!(table.index_form().unwrap(), runtime.index_form().unwrap());
}

#[test]
fn test_implication_groups_to_the_right() {
    let table = truth_table!(a -> b -> c).unwrap();
    assert_eq!(table.source(), Some("(a -> (b -> c))"));
    // false only for a=1, b=1, c=0
    assert_eq!(table.numeric_pcnf(), "*(6)");
}

#[test]
fn test_constants_and_negation() {
    let table = truth_table!(!(x * 0) * (y + 1)).unwrap();
    assert_eq!(table.variables().len(), 2);
    for form in FormKind::ALL {
        assert_eq!(table.quine_mc_cluskey(form).to_string(), "1");
    }

    let negated = truth_table!(!carry).unwrap();
    assert_eq!(negated.pdnf().to_string(), "(!carry)");
}

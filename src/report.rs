//! Every derived form of a table in one immutable bundle, and batch input
//!
//! A [`Report`] is computed once from a [`TruthTable`] and afterwards only
//! read. [`evaluate_reader`] and [`evaluate_file`] build one report per
//! expression of a line-oriented input where blank lines and lines starting
//! with `#` are skipped.

use crate::error::Error;
use crate::table::{IncompleteTableError, IndexForm, TruthTable};
use crate::term::{FormKind, Formula};
use crate::EngineConfig;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// All forms of one boolean function
///
/// # Examples
///
/// ```
/// use logic_evaluator::{FormKind, Report, TruthTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TruthTable::from_expression("A * B")?;
/// let report = Report::from_table(&table);
/// assert_eq!(report.numeric_pdnf(), "+(3)");
/// assert_eq!(report.quine_mc_cluskey(FormKind::Disjunctive).to_string(), "(A*B)");
/// assert_eq!(report.minimizers_agree(), Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    source: Option<Arc<str>>,
    variables: Vec<Arc<str>>,
    rows: usize,
    expected_rows: usize,
    pdnf: Formula,
    pcnf: Formula,
    numeric_pdnf: String,
    numeric_pcnf: String,
    index_form: Result<IndexForm, IncompleteTableError>,
    shortened: [Formula; 2],
    quine_mc_cluskey: [Formula; 2],
    calculative: [Result<Formula, IncompleteTableError>; 2],
    karnaugh: [Result<Formula, IncompleteTableError>; 2],
    agree: Option<bool>,
}

fn by_form(form: FormKind) -> usize {
    match form {
        FormKind::Disjunctive => 0,
        FormKind::Conjunctive => 1,
    }
}

impl Report {
    /// Compute every form of `table`
    pub fn from_table(table: &TruthTable) -> Self {
        let quine_mc_cluskey = FormKind::ALL.map(|form| table.quine_mc_cluskey(form));
        let karnaugh = FormKind::ALL.map(|form| table.karnaugh_groups(form));

        // Karnaugh forms exist only for complete tables
        let agree = match &karnaugh {
            [Ok(dnf), Ok(cnf)] => {
                let reference = &quine_mc_cluskey[0];
                let others = [&quine_mc_cluskey[1], dnf, cnf];
                Some((0..table.expected_rows()).all(|index| {
                    let value = reference.evaluate_index(index);
                    others.iter().all(|f| f.evaluate_index(index) == value)
                }))
            }
            _ => None,
        };

        Report {
            source: table.source().map(Arc::from),
            variables: table.variables().to_vec(),
            rows: table.rows().len(),
            expected_rows: table.expected_rows(),
            pdnf: table.pdnf(),
            pcnf: table.pcnf(),
            numeric_pdnf: table.numeric_pdnf(),
            numeric_pcnf: table.numeric_pcnf(),
            index_form: table.index_form(),
            shortened: FormKind::ALL.map(|form| table.shortened_form(form)),
            quine_mc_cluskey,
            calculative: FormKind::ALL.map(|form| table.calculative_reduction(form)),
            karnaugh,
            agree,
        }
    }

    /// The expression the table was built from, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Variable names, first variable most significant
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Rows present in the table
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check if the table had every row
    pub fn is_complete(&self) -> bool {
        self.rows == self.expected_rows
    }

    /// Principal disjunctive normal form
    pub fn pdnf(&self) -> &Formula {
        &self.pdnf
    }

    /// Principal conjunctive normal form
    pub fn pcnf(&self) -> &Formula {
        &self.pcnf
    }

    /// Minterm indices, `+(...)`
    pub fn numeric_pdnf(&self) -> &str {
        &self.numeric_pdnf
    }

    /// Maxterm indices, `*(...)`
    pub fn numeric_pcnf(&self) -> &str {
        &self.numeric_pcnf
    }

    /// The index form, or why it is unavailable
    pub fn index_form(&self) -> Result<&IndexForm, &IncompleteTableError> {
        self.index_form.as_ref()
    }

    /// All prime implicants
    pub fn shortened(&self, form: FormKind) -> &Formula {
        &self.shortened[by_form(form)]
    }

    /// Quine–McCluskey result
    pub fn quine_mc_cluskey(&self, form: FormKind) -> &Formula {
        &self.quine_mc_cluskey[by_form(form)]
    }

    /// Calculative reduction result
    pub fn calculative(&self, form: FormKind) -> Result<&Formula, &IncompleteTableError> {
        self.calculative[by_form(form)].as_ref()
    }

    /// Karnaugh grouping result
    pub fn karnaugh(&self, form: FormKind) -> Result<&Formula, &IncompleteTableError> {
        self.karnaugh[by_form(form)].as_ref()
    }

    /// Whether both Quine–McCluskey and both Karnaugh results agree on every row
    ///
    /// `None` when the table is partial and has no Karnaugh results.
    pub fn minimizers_agree(&self) -> Option<bool> {
        self.agree
    }
}

fn write_checked<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Result<&T, &IncompleteTableError>,
) -> fmt::Result {
    match value {
        Ok(v) => writeln!(f, "{}: {}", label, v),
        Err(e) => writeln!(f, "{}: unavailable ({})", label, e),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            writeln!(f, "Expression: {}", source)?;
        }
        writeln!(f, "Variables: {}", self.variables.join(", "))?;
        writeln!(f, "Rows: {} of {}", self.rows, self.expected_rows)?;
        writeln!(f, "PDNF: {}", self.pdnf)?;
        writeln!(f, "PCNF: {}", self.pcnf)?;
        writeln!(f, "Numeric PDNF: {}", self.numeric_pdnf)?;
        writeln!(f, "Numeric PCNF: {}", self.numeric_pcnf)?;
        write_checked(f, "Index form", self.index_form())?;
        for form in FormKind::ALL {
            writeln!(f, "Shortened {}: {}", form, self.shortened(form))?;
        }
        for form in FormKind::ALL {
            writeln!(f, "Quine-McCluskey {}: {}", form, self.quine_mc_cluskey(form))?;
        }
        for form in FormKind::ALL {
            write_checked(f, &format!("Calculative {}", form), self.calculative(form))?;
        }
        for form in FormKind::ALL {
            write_checked(f, &format!("Karnaugh {}", form), self.karnaugh(form))?;
        }
        match self.agree {
            Some(true) => writeln!(f, "Minimizers agree: yes"),
            Some(false) => writeln!(f, "Minimizers agree: no"),
            None => writeln!(f, "Minimizers agree: n/a"),
        }
    }
}

/// The outcome for one expression line of a batch
#[derive(Debug)]
pub struct LineReport {
    /// 1-based line number in the input
    pub line: usize,
    /// The expression text, trimmed
    pub expression: String,
    /// The report, or why the expression could not be evaluated
    pub result: Result<Report, Error>,
}

/// Evaluate one expression per line
///
/// Blank lines and lines whose first non-blank character is `#` are
/// skipped. A bad expression is reported in its [`LineReport`] and does not
/// stop the batch; only a read failure does.
///
/// # Examples
///
/// ```
/// use logic_evaluator::report::evaluate_reader;
/// use logic_evaluator::EngineConfig;
///
/// # fn main() -> Result<(), logic_evaluator::Error> {
/// let input = "# adders\nA ^ B\n\n(A * B\n";
/// let results = evaluate_reader(input.as_bytes(), &EngineConfig::default())?;
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].line, 2);
/// assert!(results[0].result.is_ok());
/// assert!(results[1].result.is_err());
/// # Ok(())
/// # }
/// ```
pub fn evaluate_reader<R: BufRead>(
    reader: R,
    config: &EngineConfig,
) -> Result<Vec<LineReport>, Error> {
    let mut reports = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }

        let result = TruthTable::from_expression_with_config(expression, config)
            .map(|table| Report::from_table(&table))
            .map_err(Error::from);
        if let Err(err) = &result {
            log::debug!("Line {}: {}", number + 1, err);
        }
        reports.push(LineReport {
            line: number + 1,
            expression: expression.to_string(),
            result,
        });
    }
    Ok(reports)
}

/// Evaluate every expression in a file
///
/// See [`evaluate_reader`].
pub fn evaluate_file<P: AsRef<Path>>(
    path: P,
    config: &EngineConfig,
) -> Result<Vec<LineReport>, Error> {
    let file = File::open(path)?;
    evaluate_reader(BufReader::new(file), config)
}

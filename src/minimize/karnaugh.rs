//! Karnaugh maps and toroidal rectangle grouping
//!
//! The first ⌊n/2⌋ variables address the columns and the last ⌈n/2⌉ the
//! rows, each axis in reflected-binary Gray order so that neighbouring cells
//! (wrapping around the edges) differ in exactly one input bit. Grouping
//! covers the target cells with power-of-two rectangles, preferring large
//! and square shapes, and then applies the same unique-coverage selection as
//! Quine–McCluskey.

use super::coverage::unique_coverage;
use crate::table::{slot, IncompleteTableError, TruthTable};
use crate::term::{FormKind, Formula, Implicant, Term};
use std::fmt;
use std::sync::Arc;

/// Reflected-binary Gray code of `i`
pub fn gray_code(i: usize) -> usize {
    i ^ (i >> 1)
}

/// The position at which `code` appears in the Gray sequence
pub fn inverse_gray_code(code: usize) -> usize {
    let mut value = 0;
    let mut code = code;
    while code != 0 {
        value ^= code;
        code >>= 1;
    }
    value
}

/// Output bits of a complete truth table laid out on a Gray-coded grid
///
/// Position `(p, q)` (row `p`, column `q`) holds minterm
/// `gray(q) * 2^r + gray(p)`, where `r` is the number of row variables.
///
/// # Examples
///
/// ```
/// use logic_evaluator::TruthTable;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TruthTable::from_expression("A * B")?;
/// let map = table.karnaugh_map()?;
/// assert_eq!((map.rows(), map.cols()), (2, 2));
/// assert_eq!(map.position_of(3), (1, 1));
/// assert!(map.cell(1, 1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    variables: Arc<[Arc<str>]>,
    row_bits: usize,
    col_bits: usize,
    row_gray: Vec<usize>,
    col_gray: Vec<usize>,
    /// Row-major, `rows() * cols()` entries
    cells: Vec<bool>,
}

impl KarnaughMap {
    fn new(table: &TruthTable) -> Self {
        let n = table.variables().len();
        let row_bits = n.div_ceil(2);
        let col_bits = n / 2;
        let row_gray: Vec<usize> = (0..1usize << row_bits).map(gray_code).collect();
        let col_gray: Vec<usize> = (0..1usize << col_bits).map(gray_code).collect();

        let mut cells = Vec::with_capacity(row_gray.len() * col_gray.len());
        for &row_code in &row_gray {
            for &col_code in &col_gray {
                let index = (col_code << row_bits) | row_code;
                // complete table: rows[i] is assignment i
                cells.push(table.rows()[index].output());
            }
        }

        KarnaughMap {
            variables: table.shared_variables(),
            row_bits,
            col_bits,
            row_gray,
            col_gray,
            cells,
        }
    }

    /// Number of grid rows, 2^⌈n/2⌉
    pub fn rows(&self) -> usize {
        self.row_gray.len()
    }

    /// Number of grid columns, 2^⌊n/2⌋
    pub fn cols(&self) -> usize {
        self.col_gray.len()
    }

    /// Number of variables addressing the rows
    pub fn row_bits(&self) -> usize {
        self.row_bits
    }

    /// Number of variables addressing the columns
    pub fn col_bits(&self) -> usize {
        self.col_bits
    }

    /// The variables addressing the rows, the last ones of the table
    pub fn row_variables(&self) -> &[Arc<str>] {
        &self.variables[self.col_bits..]
    }

    /// The variables addressing the columns, the first ones of the table
    pub fn col_variables(&self) -> &[Arc<str>] {
        &self.variables[..self.col_bits]
    }

    /// Gray code of each row position
    pub fn row_gray(&self) -> &[usize] {
        &self.row_gray
    }

    /// Gray code of each column position
    pub fn col_gray(&self) -> &[usize] {
        &self.col_gray
    }

    /// Minterm index shown at grid position `(row, col)`
    pub fn minterm_at(&self, row: usize, col: usize) -> usize {
        (self.col_gray[col] << self.row_bits) | self.row_gray[row]
    }

    /// Output bit at grid position `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols() + col]
    }

    /// Grid position `(row, col)` of minterm `index`
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let row_mask = (1usize << self.row_bits) - 1;
        (
            inverse_gray_code(index & row_mask),
            inverse_gray_code(index >> self.row_bits),
        )
    }

    /// Candidate rectangle shapes as `(width, height)`, best first
    ///
    /// All power-of-two sizes up to the grid dimensions, largest first, then
    /// stably ordered by area over diagonal so that big square shapes lead.
    fn shapes(&self) -> Vec<(usize, usize)> {
        let mut shapes = Vec::new();
        for w in (0..=self.col_bits).rev() {
            for h in (0..=self.row_bits).rev() {
                shapes.push((1usize << w, 1usize << h));
            }
        }
        let score = |&(w, h): &(usize, usize)| {
            let (w, h) = (w as f64, h as f64);
            w * h / (w * w + h * h).sqrt()
        };
        shapes.sort_by(|a, b| score(b).total_cmp(&score(a)));
        shapes
    }

    /// Cover the cells holding the target bit of `form` with rectangles
    ///
    /// Returns every accepted rectangle as a term with the minterms it
    /// covers, in acceptance order.
    fn groups(&self, form: FormKind) -> Vec<(Term, Implicant)> {
        let n = self.variables.len();
        let target = form.target();
        let (rows, cols) = (self.rows(), self.cols());
        let mut uncovered = self.cells.iter().filter(|&&c| c == target).count();
        let mut covered = vec![false; self.cells.len()];
        let mut groups = Vec::new();

        for (width, height) in self.shapes() {
            if uncovered == 0 {
                break;
            }
            for top in 0..rows {
                for left in 0..cols {
                    let positions: Vec<usize> = (0..height)
                        .flat_map(|dr| {
                            (0..width).map(move |dc| ((top + dr) % rows) * cols + (left + dc) % cols)
                        })
                        .collect();
                    if positions.iter().any(|&pos| self.cells[pos] != target)
                        || positions.iter().all(|&pos| covered[pos])
                    {
                        continue;
                    }

                    let implicant: Implicant = positions
                        .iter()
                        .map(|&pos| self.minterm_at(pos / cols, pos % cols))
                        .collect();
                    let Some(term) = implicant.reduced_term(n, form) else {
                        continue;
                    };
                    // a Gray-ordered run is a sub-cube only when aligned
                    if term.cover_count() != positions.len() {
                        continue;
                    }

                    for &pos in &positions {
                        if !covered[pos] {
                            covered[pos] = true;
                            uncovered -= 1;
                        }
                    }
                    log::debug!(
                        "Karnaugh {}: {}x{} group at ({}, {}) -> {}",
                        form.abbreviation(),
                        width,
                        height,
                        top,
                        left,
                        term.display(&self.variables, form)
                    );
                    groups.push((term, implicant));
                }
            }
        }

        groups
    }
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |code: usize, bits: usize| {
            if bits == 0 {
                "-".to_string()
            } else {
                format!("{:0width$b}", code, width = bits)
            }
        };
        let corner = format!("{}\\{}", self.row_variables().join(""), self.col_variables().join(""));
        let row_width = corner.len().max(self.row_bits).max(1);
        let col_width = self.col_bits.max(1);

        write!(f, "{:<row_width$}", corner, row_width = row_width)?;
        for &code in &self.col_gray {
            write!(f, " {:>col_width$}", label(code, self.col_bits), col_width = col_width)?;
        }
        writeln!(f)?;
        for (p, &code) in self.row_gray.iter().enumerate() {
            write!(f, "{:<row_width$}", label(code, self.row_bits), row_width = row_width)?;
            for q in 0..self.cols() {
                write!(f, " {:>col_width$}", u8::from(self.cell(p, q)), col_width = col_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl TruthTable {
    /// The Karnaugh map of a complete table
    pub fn karnaugh_map(&self) -> Result<Arc<KarnaughMap>, IncompleteTableError> {
        self.require_complete("Karnaugh map")?;
        let map = self
            .derived
            .karnaugh_map
            .get_or_init(|| Arc::new(KarnaughMap::new(self)));
        Ok(Arc::clone(map))
    }

    /// Minimize by grouping adjacent cells of the Karnaugh map
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_evaluator::{FormKind, TruthTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = TruthTable::from_expression("(A * C) + (!A * C)")?;
    /// let grouped = table.karnaugh_groups(FormKind::Disjunctive)?;
    /// assert_eq!(grouped.to_string(), "(C)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn karnaugh_groups(&self, form: FormKind) -> Result<Formula, IncompleteTableError> {
        let map = self.karnaugh_map()?;
        let formula = self.derived.karnaugh_groups[slot(form)].get_or_init(|| {
            let groups = map.groups(form);
            let accepted = groups.len();
            let selected = unique_coverage(groups);
            log::debug!(
                "Karnaugh {}: {} groups accepted, {} selected",
                form.abbreviation(),
                accepted,
                selected.len()
            );
            let terms = selected.into_iter().map(|(t, _)| t).collect();
            Formula::new(form, self.shared_variables(), terms)
        });
        Ok(formula.clone())
    }
}

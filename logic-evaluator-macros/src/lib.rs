use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for boolean expressions
enum Expr {
    Variable(Ident),
    Constant(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Render in the runtime expression syntax, fully parenthesized
    fn render(&self, out: &mut String) {
        match self {
            Expr::Variable(ident) => out.push_str(&ident.to_string()),
            Expr::Constant(value) => out.push(if *value { '1' } else { '0' }),
            Expr::Not(inner) => {
                out.push('!');
                match inner.as_ref() {
                    Expr::Variable(_) | Expr::Constant(_) => inner.render(out),
                    _ => {
                        out.push('(');
                        inner.render(out);
                        out.push(')');
                    }
                }
            }
            Expr::And(l, r) => Self::render_binary(out, l, "*", r),
            Expr::Or(l, r) => Self::render_binary(out, l, "+", r),
            Expr::Xor(l, r) => Self::render_binary(out, l, "^", r),
            Expr::Implies(l, r) => Self::render_binary(out, l, "->", r),
        }
    }

    fn render_binary(out: &mut String, left: &Expr, op: &str, right: &Expr) {
        out.push('(');
        left.render(out);
        out.push(' ');
        out.push_str(op);
        out.push(' ');
        right.render(out);
        out.push(')');
    }
}

/// Parser for boolean expressions with operator precedence
struct TableExprParser {
    expr: Expr,
}

impl Parse for TableExprParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_implies(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after expression"));
        }
        Ok(TableExprParser { expr })
    }
}

/// Parse implications (lowest precedence, right associative)
fn parse_implies(input: ParseStream) -> Result<Expr> {
    let left = parse_or(input)?;
    if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_implies(input)?;
        return Ok(Expr::Implies(Box::new(left), Box::new(right)));
    }
    Ok(left)
}

/// Parse OR and XOR, which share one level and group to the right
fn parse_or(input: ParseStream) -> Result<Expr> {
    let left = parse_and(input)?;
    if input.peek(Token![+]) {
        input.parse::<Token![+]>()?;
        let right = parse_or(input)?;
        Ok(Expr::Or(Box::new(left), Box::new(right)))
    } else if input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let right = parse_or(input)?;
        Ok(Expr::Xor(Box::new(left), Box::new(right)))
    } else {
        Ok(left)
    }
}

/// Parse AND expressions (higher precedence)
fn parse_and(input: ParseStream) -> Result<Expr> {
    let left = parse_unary(input)?;
    if input.peek(Token![*]) {
        input.parse::<Token![*]>()?;
        let right = parse_and(input)?;
        return Ok(Expr::And(Box::new(left), Box::new(right)));
    }
    Ok(left)
}

/// Parse unary expressions (NOT) and atoms (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Expr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse variables, `0` / `1` and parenthesized expressions
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let expr = parse_implies(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected tokens inside parentheses"));
        }
        Ok(expr)
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Expr::Constant(false)),
            1 => Ok(Expr::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        let name = ident.to_string();
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(syn::Error::new(
                ident.span(),
                "variable names may only contain letters",
            ));
        }
        Ok(Expr::Variable(ident))
    }
}

/// The `truth_table!` procedural macro
///
/// Checks the expression syntax at compile time and expands to a call of
/// `TruthTable::from_expression` with the expression rendered in the runtime
/// syntax. The expansion evaluates to `Result<TruthTable, BuildTableError>`;
/// it can still fail at run time when the table exceeds the variable limit.
///
/// # Supported Syntax
///
/// - `A`, `carry` - Variables (letters only)
/// - `0`, `1` - Constants
/// - `!a` - NOT
/// - `a * b` - AND
/// - `a + b`, `a ^ b` - OR, XOR (same precedence, grouping to the right)
/// - `a -> b` - Implication (lowest precedence, grouping to the right)
/// - `( )` - Grouping
///
/// # Examples
///
/// ```ignore
/// use logic_evaluator::truth_table;
///
/// let table = truth_table!((A ^ B) ^ C).unwrap();
/// assert_eq!(table.numeric_pdnf(), "+(1,2,4,7)");
///
/// let implication = truth_table!(a * b -> c).unwrap();
/// assert_eq!(implication.source(), Some("((a * b) -> c)"));
/// ```
#[proc_macro]
pub fn truth_table(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as TableExprParser);
    let mut text = String::new();
    parser.expr.render(&mut text);
    let expanded: proc_macro2::TokenStream = quote! {
        ::logic_evaluator::TruthTable::from_expression(#text)
    };
    TokenStream::from(expanded)
}

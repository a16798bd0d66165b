//! Test utilities: compile helpers and a reference evaluator for compiled programs.

use std::collections::HashMap;

use weft_core::{CaptureShape, Combinator, Value};
use weft_ir::{
    AccExpr, Body, DumpConfig, Pattern, ProcName, ProcedureDef, Program, StackExpr, StackPattern,
};

/// Compile with verification on, panicking on error, and dump without colors.
pub fn expect_dump(name: &str, combinators: &[Combinator]) -> String {
    weft_ir::dump(&expect_program(name, combinators), DumpConfig::new())
}

pub fn expect_program(name: &str, combinators: &[Combinator]) -> Program {
    crate::Compiler::new(name)
        .config(crate::Config::new().verify(true))
        .compile(combinators)
        .unwrap_or_else(|e| panic!("compilation failed: {e}"))
}

/// One procedure entered during evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub name: ProcName,
    /// Stack depth on entry.
    pub depth: usize,
}

/// Result of running a program, with the procedures it went through.
#[derive(Debug)]
pub struct Run {
    pub outcome: weft_ir::Outcome,
    pub steps: Vec<Step>,
}

impl Run {
    pub fn depth_at(&self, name: &ProcName) -> Option<usize> {
        self.steps.iter().find(|s| &s.name == name).map(|s| s.depth)
    }
}

/// Run `program` over `input` from its entry point.
///
/// Follows the IR semantics literally; panics on malformed programs.
pub fn run(program: &Program, input: &[u8]) -> Run {
    let defs: HashMap<&ProcName, &ProcedureDef> =
        program.procedures.iter().map(|d| (&d.name, d)).collect();

    let mut current = program.entry.target.clone();
    let mut rest = input;
    let mut acc: Vec<Value> = Vec::new();
    let mut stack: Vec<Vec<Value>> = Vec::new();
    let mut line = program.entry.line;
    let mut column = program.entry.column;
    let mut steps = Vec::new();

    loop {
        let def = defs
            .get(&current)
            .unwrap_or_else(|| panic!("undefined procedure {current}"));
        steps.push(Step {
            name: current.clone(),
            depth: stack.len(),
        });

        let Some((captures, remainder)) = match_input(&def.params.input, rest) else {
            current = fallback(def);
            continue;
        };
        let lookup = |var: u32| captures.get(&var).copied();
        if !def.guard.test(&lookup) {
            current = fallback(def);
            continue;
        }
        let saved = match def.params.stack {
            StackPattern::Any => None,
            StackPattern::Saved => match stack.pop() {
                Some(saved) => Some(saved),
                None => {
                    current = fallback(def);
                    continue;
                }
            },
        };

        match &def.body {
            Body::Ok => {
                acc.reverse();
                return Run {
                    outcome: weft_ir::Outcome::Ok {
                        values: acc,
                        remainder: remainder.to_vec(),
                        line,
                        column,
                    },
                    steps,
                };
            }
            Body::Error { reason } => {
                return Run {
                    outcome: weft_ir::Outcome::Error {
                        reason: reason.clone(),
                        remainder: rest.to_vec(),
                        line,
                        column,
                    },
                    steps,
                };
            }
            Body::Invoke {
                target,
                acc: acc_expr,
                stack: stack_expr,
                line: line_expr,
                column: column_expr,
            } => {
                let previous = std::mem::take(&mut acc);
                acc = match acc_expr {
                    AccExpr::Keep => previous.clone(),
                    AccExpr::Empty => Vec::new(),
                    AccExpr::Prepend(terms) => {
                        let mut values: Vec<Value> = terms
                            .iter()
                            .map(|t| t.resolve(&lookup).expect("unbound capture in output"))
                            .collect();
                        values.extend(previous.iter().cloned());
                        values
                    }
                    AccExpr::Merge(transform) => {
                        let mut matched = previous.clone();
                        matched.reverse();
                        let mut values = transform.apply(matched);
                        values.reverse();
                        values.extend(saved.clone().expect("merge without saved frame"));
                        values
                    }
                };
                match stack_expr {
                    StackExpr::Keep | StackExpr::Pop => {}
                    StackExpr::Push => stack.push(previous),
                }
                line = line_expr.apply(line);
                column = column_expr.apply(column);
                rest = remainder;
                current = target.clone();
            }
        }
    }
}

fn fallback(def: &ProcedureDef) -> ProcName {
    def.fallback
        .clone()
        .unwrap_or_else(|| panic!("{} refused its input and has no fallback", def.name))
}

fn match_input<'i>(
    patterns: &[Pattern],
    mut rest: &'i [u8],
) -> Option<(HashMap<u32, i64>, &'i [u8])> {
    let mut captures = HashMap::new();
    for pattern in patterns {
        match pattern {
            Pattern::Literal { text } => {
                rest = rest.strip_prefix(text.as_bytes())?;
            }
            Pattern::Capture { var, shape } => {
                let (value, len) = decode(shape, rest)?;
                captures.insert(*var, value);
                rest = &rest[len..];
            }
        }
    }
    Some((captures, rest))
}

fn decode(shape: &CaptureShape, input: &[u8]) -> Option<(i64, usize)> {
    if shape.utf8 {
        return (1..=4.min(input.len())).find_map(|len| {
            let ch = std::str::from_utf8(&input[..len]).ok()?.chars().next()?;
            Some((i64::from(u32::from(ch)), len))
        });
    }

    let width = shape.width();
    let bytes = input.get(..width)?;
    let mut raw: u64 = 0;
    if shape.little {
        for &b in bytes.iter().rev() {
            raw = (raw << 8) | u64::from(b);
        }
    } else {
        for &b in bytes {
            raw = (raw << 8) | u64::from(b);
        }
    }
    let value = if shape.signed {
        let shift = 64 - u32::from(shape.bits);
        ((raw << shift) as i64) >> shift
    } else {
        raw as i64
    };
    Some((value, width))
}

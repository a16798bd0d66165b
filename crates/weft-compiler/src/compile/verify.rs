//! Structural verification of compiled programs.
//!
//! Checks the forward-chain shape the compiler promises:
//! - names are unique and every reference resolves
//! - every invocation points forward, in emission order
//! - a chain link has at most two predecessors (two only around a traverse)
//! - every catch-all is the fallback of exactly one procedure
//! - exactly one success procedure, emitted last
//! - the entry point targets the first procedure

use indexmap::IndexMap;
use weft_ir::{Body, ProcName, Program};

use crate::error::{CompileError, Result};

const MAX_PREDECESSORS: usize = 2;

/// Verify `program`, reporting the first violated invariant.
pub fn verify(program: &Program) -> Result<()> {
    let broken = |reason: String| {
        Err(CompileError::BrokenChain {
            name: program.name.clone(),
            reason,
        })
    };

    let mut positions: IndexMap<&ProcName, usize> = IndexMap::new();
    for (i, def) in program.procedures.iter().enumerate() {
        if positions.insert(&def.name, i).is_some() {
            return broken(format!("`{}` is defined twice", def.name));
        }
    }

    match program.procedures.first() {
        Some(first) if first.name == program.entry.target => {}
        _ => return broken(format!("entry `{}` is not the first procedure", program.entry.target)),
    }

    let successes = program
        .procedures
        .iter()
        .filter(|def| def.body == Body::Ok)
        .count();
    if successes != 1 {
        return broken(format!("expected one success procedure, found {successes}"));
    }
    if program.procedures.last().map(|def| &def.body) != Some(&Body::Ok) {
        return broken("success procedure is not last".to_string());
    }

    let mut predecessors: IndexMap<&ProcName, usize> = IndexMap::new();
    let mut fallbacks: IndexMap<&ProcName, usize> = IndexMap::new();
    for (i, def) in program.procedures.iter().enumerate() {
        if let Some(target) = def.body.target() {
            match positions.get(target) {
                None => return broken(format!("`{}` invokes undefined `{target}`", def.name)),
                Some(&at) if at <= i => {
                    return broken(format!("`{}` invokes `{target}` backwards", def.name));
                }
                Some(_) => {}
            }
            if target.is_catch_all() {
                return broken(format!("`{}` invokes catch-all `{target}`", def.name));
            }
            *predecessors.entry(target).or_default() += 1;
        }

        if let Some(fallback) = &def.fallback {
            if !fallback.is_catch_all() || !positions.contains_key(fallback) {
                return broken(format!("`{}` falls back to `{fallback}`", def.name));
            }
            *fallbacks.entry(fallback).or_default() += 1;
        }
    }

    if let Some((name, count)) = predecessors
        .iter()
        .find(|(_, count)| **count > MAX_PREDECESSORS)
    {
        return broken(format!("`{name}` has {count} predecessors"));
    }

    for def in &program.procedures {
        if def.name.is_catch_all() && fallbacks.get(&def.name) != Some(&1) {
            return broken(format!(
                "catch-all `{}` must back exactly one procedure",
                def.name
            ));
        }
    }

    Ok(())
}

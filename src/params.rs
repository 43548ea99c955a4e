//! Reading parameter vectors in the driver wire format.
//!
//! Both transports declare the parameter count on the first input line.
//! The file transport then supplies whitespace-separated numeric tokens
//! until end of input, while the pipe transport supplies one line per
//! declared parameter.

use crate::error::{EvalError, Result};

use std::io::BufRead;

/// Read the declared count and all remaining tokens until end of input.
///
/// Used by the file transport. Fails with [`EvalError::CountMismatch`] if
/// the number of tokens differs from the declared count.
pub fn read_all<R: BufRead>(mut reader: R) -> Result<Vec<f64>> {
    let declared = read_count(&mut reader)?;
    let mut rest = String::new();
    reader.read_to_string(&mut rest)?;
    check_count(declared, parse_tokens(&rest)?)
}

/// Read the declared count and that many subsequent lines.
///
/// Used by the pipe transport. A line may hold several tokens; only the
/// total token count has to match the declared count. Lines beyond the
/// declared count are left unread.
pub fn read_counted_lines<R: BufRead>(mut reader: R) -> Result<Vec<f64>> {
    let declared = read_count(&mut reader)?;
    let mut rest = String::new();
    for _ in 0..declared {
        if reader.read_line(&mut rest)? == 0 {
            break;
        }
    }
    check_count(declared, parse_tokens(&rest)?)
}

fn read_count<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(EvalError::MissingCount);
    }
    let count = line.trim();
    if count.is_empty() {
        return Err(EvalError::MissingCount);
    }
    count.parse().map_err(|source| EvalError::InvalidCount {
        count: count.to_string(),
        source,
    })
}

fn parse_tokens(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| EvalError::InvalidToken {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

fn check_count(declared: usize, params: Vec<f64>) -> Result<Vec<f64>> {
    if params.len() != declared {
        return Err(EvalError::CountMismatch {
            declared,
            found: params.len(),
        });
    }
    Ok(params)
}

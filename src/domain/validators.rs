//! Input validators used by the wizard prompts.
//!
//! Each validator receives the raw answer text. An `Err` carries the message
//! shown under the prompt before the same question is asked again.

use std::net::Ipv4Addr;

use super::groups::{matches_grammar, max_of, split_groups};

/// Outcome of validating one raw answer.
pub type Validation = Result<(), String>;

/// Minimum memory budget accepted for `memory_mb`.
pub const MIN_MEMORY_MB: f64 = 1025.00;

fn parse_float(answer: &str) -> Result<f64, String> {
    answer.parse::<f64>().map_err(|_| format!("Invalid number. Got {}", answer))
}

fn parse_integer(answer: &str) -> Result<i64, String> {
    answer.parse::<i64>().map_err(|_| format!("Invalid Integer. Got {}", answer))
}

/// Accepts a float in `[0.0, 1.0]`.
pub fn unit_fraction(answer: &str) -> Validation {
    let num = parse_float(answer)?;
    if num > 1.0 {
        return Err(format!("Answer must be less than 1.0. Got {:.2}", num));
    }
    if num < 0.0 {
        return Err(format!("Answer must be greater than 0.0. Got {:.2}", num));
    }
    if num.is_nan() {
        return Err(format!("Answer must be between 0.0 and 1.0. Got {}", answer));
    }
    Ok(())
}

/// Accepts a memory budget of at least [`MIN_MEMORY_MB`].
pub fn minimum_memory(answer: &str) -> Validation {
    let num = parse_float(answer)?;
    if num.is_nan() || num < MIN_MEMORY_MB {
        return Err(format!("Answer must be at least {:.2}. Got {:.2}", MIN_MEMORY_MB, num));
    }
    Ok(())
}

/// Accepts an integer group count of at least 2.
pub fn minimum_group_count(answer: &str) -> Validation {
    let num = parse_integer(answer)?;
    if num < 2 {
        return Err(format!("Must be at least 2. Got {}", answer));
    }
    if u32::try_from(num).is_err() {
        return Err(format!("Too many groups. Got {}", answer));
    }
    Ok(())
}

pub fn ipv4_address(answer: &str) -> Validation {
    answer
        .parse::<Ipv4Addr>()
        .map(|_| ())
        .map_err(|_| format!("Invalid IPv4 address. Got {}", answer))
}

/// Accepts an integer in `[1, 65535]`.
pub fn port_number(answer: &str) -> Validation {
    let num = parse_integer(answer).map_err(|_| format!("Invalid port {}", answer))?;
    if num <= 0 {
        return Err(format!("Port number must be positive. Got {}", num));
    }
    if num > i64::from(u16::MAX) {
        return Err(format!("Port number cannot be larger than 65535. Got {}", num));
    }
    Ok(())
}

pub fn integer(answer: &str) -> Validation {
    parse_integer(answer).map(|_| ())
}

pub fn positive_integer(answer: &str) -> Validation {
    let num = parse_integer(answer)?;
    if num <= 0 {
        return Err(format!("Must be positive. Got {}", answer));
    }
    Ok(())
}

pub fn always_valid(_answer: &str) -> Validation {
    Ok(())
}

pub fn non_empty(answer: &str) -> Validation {
    if answer.trim().is_empty() {
        return Err("Value is required".to_string());
    }
    Ok(())
}

/// Accepts text matching the groups grammar whose tokens are all valid group ids.
pub fn groups_grammar(answer: &str) -> Validation {
    if !matches_grammar(answer) {
        return Err(format!("Invalid Groups format. Got {}", answer));
    }
    if answer.split([',', '-']).any(|token| token.parse::<u32>().is_err()) {
        return Err(format!("Group id out of range. Got {}", answer));
    }
    Ok(())
}

/// Builds a validator bounding the highest group id by `total_groups - 1`.
pub fn groups_in_range(total_groups: u32) -> impl Fn(&str) -> Validation {
    move |answer: &str| {
        groups_grammar(answer)?;
        let highest = total_groups.saturating_sub(1);
        let max_group = max_of(&split_groups(answer))
            .map_err(|_| "At least one group is required.".to_string())?;
        if max_group > highest {
            return Err(format!(
                "The max group ({}) exceeds the highest allowed group ({}) according to the configured total groups (total-1).",
                max_group, highest
            ));
        }
        Ok(())
    }
}

/// Logical AND of two validators; the first failure wins.
pub fn both<A, B>(first: A, second: B) -> impl Fn(&str) -> Validation
where
    A: Fn(&str) -> Validation,
    B: Fn(&str) -> Validation,
{
    move |answer: &str| {
        first(answer)?;
        second(answer)
    }
}

//! Bracket notation interpolation.
//!
//! Supported groups:
//! - `[_N]` - positional argument N (1-based)
//! - `[asis,TEXT]` - TEXT, verbatim
//! - `[list_or,_N]` / `[list_and,_N]` - argument N joined as an English list
//!
//! `~[` and `~]` produce literal brackets. An unknown group is copied through.

use crate::models::MessageArg;
use itertools::Itertools;

/// Join `items` as an English list: "a", "a or b", "a, b, or c".
pub fn join_list(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [head @ .., last] => format!("{}, {conjunction} {last}", head.iter().join(", ")),
    }
}

fn arg_index(token: &str) -> Option<usize> {
    let n: usize = token.strip_prefix('_')?.parse().ok()?;
    n.checked_sub(1)
}

fn arg_items(arg: &MessageArg) -> Vec<String> {
    match arg {
        MessageArg::List(items) => items.clone(),
        other => vec![other.to_string()],
    }
}

fn expand(group: &str, args: &[MessageArg]) -> Option<String> {
    let (method, rest) = match group.split_once(',') {
        Some((method, rest)) => (method, Some(rest)),
        None => (group, None),
    };
    match (method, rest) {
        (token, None) => arg_index(token)
            .and_then(|i| args.get(i))
            .map(|a| a.to_string()),
        ("asis", Some(text)) => Some(text.to_string()),
        ("list_or", Some(token)) | ("list_and", Some(token)) => {
            let arg = args.get(arg_index(token)?)?;
            let conjunction = if method == "list_or" { "or" } else { "and" };
            Some(join_list(&arg_items(arg), conjunction))
        }
        _ => None,
    }
}

/// Render `template`, substituting `args` into its bracket groups.
pub fn interpolate(template: &str, args: &[MessageArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(|c: char| c == '[' || c == '~') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(escaped) = tail.strip_prefix('~') {
            match escaped.chars().next() {
                Some(c @ ('[' | ']' | '~')) => {
                    out.push(c);
                    rest = &escaped[1..];
                }
                _ => {
                    out.push('~');
                    rest = escaped;
                }
            }
            continue;
        }
        let Some(end) = tail.find(']') else {
            out.push_str(tail);
            return out;
        };
        let group = &tail[1..end];
        match expand(group, args) {
            Some(text) => out.push_str(&text),
            None => {
                log::warn!("Unresolved message group [{group}] in {template:?}");
                out.push_str(&tail[..=end]);
            }
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

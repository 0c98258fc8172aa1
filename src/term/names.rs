//! # Fresh Variable Names
//!
//! This module enumerates variable names for binder renaming during
//! capture-avoiding substitution.
//!
//! ## Enumeration Order
//!
//! Names are drawn from a fixed alphabet starting at `u` and wrapping
//! around after `z`:
//!
//! ```text
//! u, v, w, x, y, z, a, b, ..., t,
//! u', v', ..., t',
//! u'', v'', ...
//! ```
//!
//! Each round through the alphabet appends one more prime. The order is
//! part of the observable behavior: renamed binders in substitution
//! results depend on it, so it must stay stable.
//!
//! ## Related Modules
//!
//! - [`crate::term::subst`] - Substitution picks replacement binders here

use std::collections::HashSet;

/// Alphabet for fresh names, in enumeration order.
const ALPHABET: [char; 26] = [
    'u', 'v', 'w', 'x', 'y', 'z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't',
];

/// Return the first name in the enumeration that is not in `used`.
///
/// # Arguments
///
/// * `used` - Names that must be avoided
///
/// # Example
///
/// ```text
/// fresh_name(&{})            // "u"
/// fresh_name(&{"u", "v"})    // "w"
/// ```
pub fn fresh_name(used: &HashSet<String>) -> String {
    for round in 0.. {
        for letter in ALPHABET {
            let mut name = String::new();
            name.push(letter);
            for _ in 0..round {
                name.push('\'');
            }
            if !used.contains(&name) {
                return name;
            }
        }
    }
    unreachable!("the name enumeration is infinite")
}

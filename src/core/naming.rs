//! Derivation of externally visible flag spellings from internal option names.

/// Builds the canonical long flag for an internal mixed-case option name.
///
/// A dash is inserted before every uppercase letter and the result is
/// lower-cased, so `windowSize` becomes `--window-size`.
pub fn option_flag(name: &str) -> String {
    let mut flag = String::with_capacity(name.len() + 4);
    flag.push_str("--");
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            flag.push('-');
            flag.push(c.to_ascii_lowercase());
        } else {
            flag.push(c);
        }
    }
    flag
}

/// Long flag for an option, honoring an explicit spelling when one is given.
pub fn resolve_flag(name: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(flag) => flag.to_string(),
        None => option_flag(name),
    }
}

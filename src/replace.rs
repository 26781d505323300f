use ropey::Rope;

use crate::alias;
use crate::extract;

/// Rewrites every matched import path in `source_code` to its alias form.
/// Returns `None` when no match changed, so callers can skip the
/// write-back entirely.
pub fn replace_imports(source_code: &str, dir_name: &str) -> Option<Rope> {
    let matches = extract::import_matches(source_code);
    let mut rope = Rope::from_str(source_code);
    let mut has_mutated = false;

    // Splice right to left so the byte offsets of pending matches stay
    // valid.
    for import in matches.iter().rev() {
        let new_path = alias::to_alias(import.import_path, dir_name);

        if import.import_path == new_path {
            continue;
        }

        let start = rope.byte_to_char(import.start);
        let end = rope.byte_to_char(import.end);

        has_mutated = true;
        rope.remove(start..end);
        rope.insert(start, &format!("{}{}{}", import.prefix, new_path, import.suffix));
    }

    match has_mutated {
        true => Some(rope),
        false => None,
    }
}

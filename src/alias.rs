/// Rewrites a single import path into its `@/` alias form.
///
/// Pure and total: every input string maps to some output string. Paths
/// that are already aliased, or that name a scoped external package
/// (`@scope/pkg`), come back unchanged.
pub fn to_alias(import_path: &str, dir_name: &str) -> String {
    // "@/..." is already aliased, "@scope/..." is an external package.
    if import_path.starts_with('@') {
        return import_path.to_string();
    }

    if let Some(rest) = import_path.strip_prefix("./") {
        return format!("@/{}/{}", dir_name, rest);
    }

    if import_path.starts_with("../") {
        return strip_hops(import_path);
    }

    // A bare filename with no relative marker imports from the same
    // directory.
    if !import_path.contains('/') {
        return format!("@/{}/{}", dir_name, import_path);
    }

    format!("@/{}", import_path)
}

// Known approximation: assumes the alias root is the ancestor reached
// after the `..` hops, which only holds when the directory nesting
// mirrors the alias namespace.
fn strip_hops(import_path: &str) -> String {
    let segments: Vec<&str> = import_path.split('/').collect();
    let hops = segments
        .iter()
        .take_while(|segment| **segment == "..")
        .count();

    format!("@/{}", segments[hops..].join("/"))
}

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widget_views_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();

    let widget_modules =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let widget_dirs = child_dirs(&widgets_dir);
    if widget_modules != widget_dirs {
        violations.push(format!(
            "{}: declared widgets {:?} do not match widget directories {:?}",
            widgets_dir.display(),
            widget_modules,
            widget_dirs
        ));
    }

    for widget in &widget_dirs {
        let view_dir = widgets_dir.join(widget).join("view");
        if !view_dir.is_dir() {
            violations.push(format!(
                "{}: every widget needs a view directory",
                view_dir.display()
            ));
            continue;
        }

        let view_modules =
            declared_modules(&view_dir.join("mod.rs"), &mut violations);
        let view_files = child_files(&view_dir);
        if view_modules != view_files {
            violations.push(format!(
                "{}: declared views {:?} do not match view files {:?}",
                view_dir.display(),
                view_modules,
                view_files
            ));
        }

        for module in &view_modules {
            validate_view_file(
                &view_dir.join(format!("{module}.rs")),
                &mut violations,
            );
        }
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let file = parse(mod_rs);
    let mut modules = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    modules
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in [
        "crate::app::",
        "crate::routers::",
        "crate::stores::",
        "crate::config::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::env::",
        "tokio::spawn",
        "Task::",
        "iced::Task",
        ".set(",
    ] {
        if contains_token(&source, forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Const(item_const) => {
                let name = item_const.ident.to_string();
                let uses = source
                    .match_indices(name.as_str())
                    .filter(|(index, _)| {
                        !source[index + name.len()..]
                            .starts_with(is_ident_char)
                            && !source[..*index]
                                .chars()
                                .next_back()
                                .is_some_and(is_ident_char)
                    })
                    .count();
                if uses < 2 {
                    violations.push(format!(
                        "{}: constant '{name}' is declared but never used",
                        file_path.display()
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

/// Match `pattern` only where it does not continue a longer identifier, so
/// `catalog::` does not count as `log::`.
fn contains_token(source: &str, pattern: &str) -> bool {
    if !pattern.starts_with(is_ident_char) {
        return source.contains(pattern);
    }

    source.match_indices(pattern).any(|(index, _)| {
        source[..index]
            .chars()
            .next_back()
            .is_none_or(|prev| !is_ident_char(prev))
    })
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    read_entries(dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            path.file_name().map(|name| name.to_string_lossy().to_string())
        })
        .collect()
}

fn child_files(dir: &Path) -> BTreeSet<String> {
    read_entries(dir)
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter(|path| path.file_name().is_some_and(|name| name != "mod.rs"))
        .filter_map(|path| {
            path.file_stem().map(|stem| stem.to_string_lossy().to_string())
        })
        .collect()
}

fn read_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .collect()
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

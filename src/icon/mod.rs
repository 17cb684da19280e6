use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use rust_embed::RustEmbed;

pub const CHEVRON_DOWN: &str = "chevron-down";
pub const CHEVRON_UP: &str = "chevron-up";
pub const CIRCLE_X: &str = "circle-x";
pub const SEARCH: &str = "search";
pub const CHECK: &str = "check";

/// Maps icon names to svg files extracted from the embedded pack.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    names: Arc<BTreeMap<String, PathBuf>>,
}

impl IconRegistry {
    pub fn shared() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }

    fn build_default() -> Self {
        let Some(root) = extract_embedded_pack::<EmbeddedSelectIcons>("select") else {
            tracing::debug!("select icon pack could not be extracted; falling back to glyphs");
            return Self::default();
        };
        match read_icon_names(&root) {
            Ok(names) => Self {
                names: Arc::new(names),
            },
            Err(error) => {
                tracing::debug!(%error, root = %root.display(), "select icon pack unreadable");
                Self::default()
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.names.get(name).cloned()
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }
}

fn read_icon_names(root: &Path) -> Result<BTreeMap<String, PathBuf>, std::io::Error> {
    let mut names = BTreeMap::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .is_some_and(|value| value.eq_ignore_ascii_case("svg"));
        if !path.is_file() || !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            names.insert(stem.to_string(), path.clone());
        }
    }
    Ok(names)
}

fn extract_embedded_pack<T: RustEmbed>(folder_name: &str) -> Option<PathBuf> {
    let root = std::env::temp_dir()
        .join("calmui-select-icons")
        .join(env!("CARGO_PKG_VERSION"))
        .join(folder_name);
    let marker = root.join(".extract-ready");

    if marker.exists() && embedded_pack_is_complete::<T>(&root) {
        return Some(root);
    }

    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).ok()?;

    for relative in T::iter() {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            continue;
        };
        let Some(content) = T::get(relative) else {
            continue;
        };

        let destination = root.join(safe_relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        fs::write(destination, content.data.as_ref()).ok()?;
    }

    fs::write(marker, b"ok").ok()?;
    Some(root)
}

fn embedded_pack_is_complete<T: RustEmbed>(root: &Path) -> bool {
    T::iter().all(|relative| {
        sanitize_relative_path(relative.as_ref())
            .is_some_and(|safe_relative| root.join(safe_relative).is_file())
    })
}

fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

#[derive(RustEmbed)]
#[folder = "assets/icons/select"]
struct EmbeddedSelectIcons;

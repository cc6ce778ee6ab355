//! Loading sources from paths, stdin or inline text.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use switchcheck_lib::SourceMap;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("no .cs files found in '{}'", .0.display())]
    NoSources(PathBuf),

    #[error("a path or -s/--source is required")]
    Missing,
}

/// Inline text wins; otherwise every path in order, directories expanded
/// to their `.cs` files sorted by path.
pub fn load_sources(paths: &[PathBuf], text: Option<&str>) -> Result<SourceMap, LoadError> {
    let mut map = SourceMap::new();
    if let Some(text) = text {
        map.add_inline(text);
        return Ok(map);
    }
    if paths.is_empty() {
        return Err(LoadError::Missing);
    }

    for path in paths {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            map.add_stdin(buf);
        } else if path.is_dir() {
            let files = discover(path)?;
            if files.is_empty() {
                return Err(LoadError::NoSources(path.clone()));
            }
            for file in files {
                add_file(&mut map, &file)?;
            }
        } else {
            add_file(&mut map, path)?;
        }
    }
    Ok(map)
}

/// `.cs` files under `dir`, recursively, sorted.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|source| LoadError::Read {
            path: current.clone(),
            source,
        })?;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "cs") {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

fn add_file(map: &mut SourceMap, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    map.add_file(path.to_string_lossy(), content);
    Ok(())
}

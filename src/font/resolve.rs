//! Picking a typeface: explicit file, then common system fonts, then the
//! built-in bitmap face.

use std::path::{Path, PathBuf};

use super::bitmap::BitmapFace;
use super::outline::OutlineFace;
use super::Typeface;

/// Title weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// Tried in order when bold is requested.
const BOLD_CANDIDATES: &[&str] =
    &["arialbd.ttf", "Arial Bold.ttf", "DejaVuSans-Bold.ttf", "arial.ttf", "DejaVuSans.ttf"];

/// Tried in order for regular weight.
const REGULAR_CANDIDATES: &[&str] = &["arial.ttf", "DejaVuSans.ttf"];

/// Where system fonts usually live.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// How deep to descend below each font directory.
const MAX_SEARCH_DEPTH: usize = 6;

/// What the caller wants to draw the title with.
#[derive(Debug, Clone, Default)]
pub struct FontRequest {
    /// Explicit font file, tried first.
    pub path: Option<PathBuf>,
    /// Em size in pixels.
    pub size: u32,
    /// Requested weight; selects the fallback list.
    pub weight: FontWeight,
    /// Extra directories searched before the system ones.
    pub search_dirs: Vec<PathBuf>,
}

impl FontRequest {
    fn candidates(&self) -> &'static [&'static str] {
        match self.weight {
            FontWeight::Bold => BOLD_CANDIDATES,
            FontWeight::Regular => REGULAR_CANDIDATES,
        }
    }

    fn dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.search_dirs.iter().cloned().chain(SYSTEM_FONT_DIRS.iter().map(PathBuf::from))
    }
}

/// A chosen typeface plus the notices the user should see about how it was
/// chosen.
pub struct ResolvedFace {
    /// The face to draw with.
    pub face: Box<dyn Typeface>,
    /// Fallback notices, in the order they arose.
    pub notices: Vec<String>,
}

impl ResolvedFace {
    fn new(face: impl Typeface + 'static, notices: Vec<String>) -> Self {
        log::debug!("using font {}", face.describe());
        Self { face: Box::new(face), notices }
    }
}

/// Resolve the typeface for a request. Never fails: every problem degrades to
/// the next option, ending at the built-in bitmap face.
#[must_use]
pub fn resolve_typeface(request: &FontRequest) -> ResolvedFace {
    resolve_from(request, request.candidates())
}

/// Resolve against an explicit list of fallback font names.
fn resolve_from(request: &FontRequest, candidates: &[&str]) -> ResolvedFace {
    let mut notices = Vec::new();

    if let Some(ref path) = request.path {
        if path.exists() {
            return match OutlineFace::load(path, request.size) {
                Ok(face) => ResolvedFace::new(face, notices),
                Err(e) => {
                    notices.push(format!("Error loading font: {e}"));
                    ResolvedFace::new(BitmapFace::for_size(request.size), notices)
                }
            };
        }
        notices.push(format!("Font file '{}' not found, trying common fonts.", path.display()));
    }

    for name in candidates {
        let Some(found) = locate(name, request) else {
            log::debug!("font candidate {name} not found");
            continue;
        };
        match OutlineFace::load(&found, request.size) {
            Ok(face) => return ResolvedFace::new(face, notices),
            Err(e) => log::debug!("font candidate {name} unusable: {e}"),
        }
    }

    notices.push(match request.weight {
        FontWeight::Bold => "Common bold fonts not found. Using default font.".to_string(),
        FontWeight::Regular => "Common fonts not found. Using default font.".to_string(),
    });
    ResolvedFace::new(BitmapFace::for_size(request.size), notices)
}

/// Find a font by name: as a path first, then by file name under the search
/// directories.
fn locate(name: &str, request: &FontRequest) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    request.dirs().find_map(|dir| find_file(&dir, name, MAX_SEARCH_DEPTH))
}

/// Depth-limited recursive search for a file called `name` under `dir`.
/// Entries are visited in sorted order so the result is stable.
fn find_file(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> =
        std::fs::read_dir(dir).ok()?.filter_map(|e| e.ok().map(|e| e.path())).collect();
    entries.sort();

    if let Some(hit) = entries.iter().find(|p| p.is_file() && p.file_name().is_some_and(|f| f == name))
    {
        return Some(hit.clone());
    }
    if depth == 0 {
        return None;
    }
    entries.iter().filter(|p| p.is_dir()).find_map(|sub| find_file(sub, name, depth - 1))
}

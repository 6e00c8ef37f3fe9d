use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::frontmatter::parse_source;
use super::{IndexError, NoteIndex};
use crate::model::NoteRecord;
use crate::vfs::FileSystem;

/// A pair of notebook/note collection directories under the content root
struct Collection {
    notebooks_dir: &'static str,
    notes_dir: &'static str,
    is_ai: bool,
}

static COLLECTIONS: [Collection; 2] = [
    Collection {
        notebooks_dir: "notebooks",
        notes_dir: "notes",
        is_ai: false,
    },
    Collection {
        notebooks_dir: "aiNotebooks",
        notes_dir: "aiNotes",
        is_ai: true,
    },
];

#[derive(Debug, Deserialize)]
struct NotebookFrontmatter {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteFrontmatter {
    title: Option<String>,
    notebook: Option<String>,
    ai_notebook: Option<String>,
    date: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    excerpt: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct LoadStats {
    pub total_files: usize,
    pub notebooks: usize,
    pub notes: usize,
    pub skipped: usize,
}

/// Builds a [`NoteIndex`] from the site's markdown content collections.
pub struct ContentLoader<'a> {
    fs: &'a dyn FileSystem,
    stats: LoadStats,
}

impl<'a> ContentLoader<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            stats: LoadStats::default(),
        }
    }

    /// Read every collection under `root`, newest notes first.
    pub fn load(mut self, root: &Path) -> Result<(NoteIndex, LoadStats), IndexError> {
        let present: Vec<&Collection> = COLLECTIONS
            .iter()
            .filter(|c| self.fs.is_dir(&root.join(c.notes_dir)))
            .collect();
        if present.is_empty() {
            return Err(IndexError::MissingCollections(root.to_path_buf()));
        }

        let mut records = Vec::new();
        for collection in present {
            let titles = self.notebook_titles(&root.join(collection.notebooks_dir));
            self.load_notes(
                &root.join(collection.notes_dir),
                collection.is_ai,
                &titles,
                &mut records,
            );
        }

        // Stable: notes sharing a date keep collection and file order
        records.sort_by(|a, b| b.date.cmp(&a.date));
        self.stats.notes = records.len();

        let index = NoteIndex::new(records)?;
        Ok((index, self.stats))
    }

    fn notebook_titles(&mut self, dir: &Path) -> HashMap<String, String> {
        let mut titles = HashMap::new();
        if !self.fs.is_dir(dir) {
            return titles;
        }

        for path in self.fs.list_files(dir, "md") {
            self.stats.total_files += 1;
            let Some(id) = collection_slug(dir, &path) else {
                continue;
            };
            let title = self
                .read_frontmatter::<NotebookFrontmatter>(&path)
                .and_then(|(fm, _)| fm.title)
                .unwrap_or_else(|| id.clone());
            titles.insert(id, title);
            self.stats.notebooks += 1;
        }

        titles
    }

    fn load_notes(
        &mut self,
        dir: &Path,
        is_ai: bool,
        notebook_titles: &HashMap<String, String>,
        out: &mut Vec<NoteRecord>,
    ) {
        for path in self.fs.list_files(dir, "md") {
            self.stats.total_files += 1;

            let Some((fm, parsed)) = self.read_frontmatter::<NoteFrontmatter>(&path) else {
                self.stats.skipped += 1;
                continue;
            };

            let notebook = if is_ai { fm.ai_notebook } else { fm.notebook };
            let Some(notebook) = notebook.filter(|nb| !nb.is_empty()) else {
                log::warn!("Skipping {:?}: no notebook in frontmatter", path);
                self.stats.skipped += 1;
                continue;
            };

            let Some(relative) = collection_slug(dir, &path) else {
                self.stats.skipped += 1;
                continue;
            };
            let slug = relative
                .strip_prefix(&format!("{notebook}/"))
                .map(str::to_string)
                .unwrap_or(relative);

            let title = fm
                .title
                .or(parsed.heading)
                .unwrap_or_else(|| slug.clone());
            let excerpt = fm
                .excerpt
                .or(parsed.first_paragraph)
                .unwrap_or_default();
            let notebook_title = notebook_titles
                .get(&notebook)
                .cloned()
                .unwrap_or_else(|| notebook.clone());

            out.push(NoteRecord {
                slug,
                title,
                notebook,
                notebook_title,
                excerpt,
                tags: fm.tags,
                date: fm.date.unwrap_or_default(),
                is_ai,
            });
        }
    }

    fn read_frontmatter<T: serde::de::DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Option<(T, super::frontmatter::ParsedSource)> {
        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Skipping {:?}: {}", path, e);
                return None;
            }
        };

        let mut parsed = parse_source(&content);
        let Some(yaml) = parsed.frontmatter.take() else {
            log::warn!("Skipping {:?}: no frontmatter", path);
            return None;
        };

        match serde_yaml::from_str::<T>(&yaml) {
            Ok(fm) => Some((fm, parsed)),
            Err(e) => {
                log::warn!("Skipping {:?}: invalid frontmatter: {}", path, e);
                None
            }
        }
    }
}

/// Path of `file` relative to `dir`, without extension, `/`-separated
fn collection_slug(dir: &Path, file: &Path) -> Option<String> {
    let relative: PathBuf = file.strip_prefix(dir).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

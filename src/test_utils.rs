//! Test utilities
//!
//! Proptest generators and in-memory fakes for the build collaborators.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::collection::Collection;

    /// Generate a valid collection name
    pub fn collection_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,20}"
    }

    /// Generate a list of collections with distinct names
    pub fn collections(max: usize) -> impl Strategy<Value = Vec<Collection>> {
        prop::collection::btree_set(collection_name(), 0..=max).prop_map(|names| {
            names
                .into_iter()
                .map(|name| {
                    let style = format!("{name}.css");
                    let script = format!("{name}.js");
                    Collection::new(name).with_style(style).with_script(script)
                })
                .collect()
        })
    }
}

#[cfg(test)]
pub mod fakes {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use glob::Pattern;

    use crate::core::collection::{AssetKind, Collection};
    use crate::core::engine::{BuildEngine, OutputLayout, RenderOutcome};
    use crate::core::manifest::OutputSettings;
    use crate::core::options::BuildRequest;
    use crate::error::{EngineError, FilesystemError};
    use crate::infra::filesystem::{FileStore, MATCH_OPTIONS};

    /// Shared, ordered record of collaborator calls
    pub type Journal = Rc<RefCell<Vec<String>>>;

    /// In-memory [`FileStore`]
    #[derive(Debug, Default)]
    pub struct FakeFileStore {
        pub files: RefCell<Vec<PathBuf>>,
        pub globs: RefCell<Vec<String>>,
        pub deleted: RefCell<Vec<PathBuf>>,
        pub journal: Journal,
    }

    impl FakeFileStore {
        pub fn with_files<I, P>(files: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            Self {
                files: RefCell::new(files.into_iter().map(Into::into).collect()),
                ..Self::default()
            }
        }

        #[must_use]
        pub fn journal(mut self, journal: &Journal) -> Self {
            self.journal = Rc::clone(journal);
            self
        }
    }

    impl FileStore for FakeFileStore {
        fn match_glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FilesystemError> {
            self.globs.borrow_mut().push(pattern.to_string());
            let compiled = Pattern::new(pattern).map_err(|e| FilesystemError::InvalidPattern {
                pattern: pattern.to_string(),
                error: e.to_string(),
            })?;
            let mut matches: Vec<PathBuf> = self
                .files
                .borrow()
                .iter()
                .filter(|p| compiled.matches_path_with(p, MATCH_OPTIONS))
                .cloned()
                .collect();
            matches.sort();
            Ok(matches)
        }

        fn delete(&self, path: &Path) -> Result<(), FilesystemError> {
            self.journal.borrow_mut().push(format!("delete {}", path.display()));
            self.files.borrow_mut().retain(|p| p != path);
            self.deleted.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    /// Scripted engine response for one (collection, kind) pair
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Scripted {
        Rendered,
        NotRequired,
        Empty,
        Fail,
    }

    /// [`BuildEngine`] that replays scripted outcomes and records requests
    #[derive(Debug)]
    pub struct FakeEngine {
        pub layout: OutputLayout,
        pub compression: bool,
        pub script: HashMap<(String, AssetKind), Scripted>,
        pub requests: Vec<BuildRequest>,
        pub journal: Journal,
    }

    impl Default for FakeEngine {
        fn default() -> Self {
            Self {
                layout: OutputLayout::resolve(Path::new("/srv/app"), &OutputSettings::default()),
                compression: true,
                script: HashMap::new(),
                requests: Vec::new(),
                journal: Journal::default(),
            }
        }
    }

    impl FakeEngine {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn respond(mut self, collection: &str, kind: AssetKind, response: Scripted) -> Self {
            self.script.insert((collection.to_string(), kind), response);
            self
        }

        #[must_use]
        pub fn without_compression(mut self) -> Self {
            self.compression = false;
            self
        }

        #[must_use]
        pub fn journal(mut self, journal: &Journal) -> Self {
            self.journal = Rc::clone(journal);
            self
        }

        /// Dispatched pairs as `name:kind`
        pub fn dispatched(&self) -> Vec<String> {
            self.requests
                .iter()
                .map(|r| format!("{}:{}", r.collection, r.kind))
                .collect()
        }
    }

    impl BuildEngine for FakeEngine {
        fn render(
            &mut self,
            collection: &Collection,
            request: &BuildRequest,
        ) -> Result<RenderOutcome, EngineError> {
            self.journal
                .borrow_mut()
                .push(format!("render {}:{}", collection.name, request.kind));
            self.requests.push(request.clone());

            let response = self
                .script
                .get(&(collection.name.clone(), request.kind))
                .copied()
                .unwrap_or(Scripted::Rendered);

            match response {
                Scripted::Rendered => Ok(RenderOutcome::Rendered(
                    self.layout
                        .dir_for(request.kind)
                        .join(format!("{}.{}", collection.name, request.kind.extension())),
                )),
                Scripted::NotRequired => Ok(RenderOutcome::NotRequired),
                Scripted::Empty => Ok(RenderOutcome::Empty),
                Scripted::Fail => Err(EngineError::SourceMissing {
                    collection: collection.name.clone(),
                    path: PathBuf::from("missing"),
                }),
            }
        }

        fn layout(&self) -> &OutputLayout {
            &self.layout
        }

        fn supports_compression(&self) -> bool {
            self.compression
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_collection_name_generator(name in collection_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        }

        #[test]
        fn test_collections_have_unique_names(list in collections(8)) {
            let names: HashSet<_> = list.iter().map(|c| c.name.as_str()).collect();
            prop_assert_eq!(names.len(), list.len());
        }
    }
}

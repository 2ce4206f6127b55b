//! Build orchestration logic
//!
//! Coordinates a build run: announces the mode, tidies production output,
//! resolves which collections to build, then dispatches every
//! (collection, kind) pair to the engine in order and classifies what
//! came back.
//!
//! Only [`RenderOutcome::NotRequired`] is an expected non-build. Any
//! engine error aborts the run on the spot; output already written by
//! earlier pairs stays on disk.

use std::path::PathBuf;

use crate::core::clean::{tidy_production_files, TidyResult};
use crate::core::collection::{AssetKind, Collection};
use crate::core::engine::{BuildEngine, RenderOutcome};
use crate::core::options::BuildConfig;
use crate::core::registry::CollectionRegistry;
use crate::core::report::{Reporter, Severity};
use crate::error::OrchestratorError;
use crate::infra::filesystem::FileStore;

/// Classified result of one (collection, kind) dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Output was written
    Built {
        /// Path of the written file
        output: PathBuf,
    },
    /// The engine found the output up to date
    Skipped,
    /// The engine produced nothing; not reported to the console
    Empty,
}

/// Outcome of one dispatched pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    /// Collection name
    pub collection: String,
    /// Asset kind
    pub kind: AssetKind,
    /// Classified outcome
    pub outcome: BuildOutcome,
}

/// Everything a completed run did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Production cleanup result, if it ran
    pub tidied: Option<TidyResult>,
    /// Dispatched pairs, in dispatch order
    pub pairs: Vec<PairReport>,
}

impl RunSummary {
    /// Number of pairs that produced output
    pub fn built(&self) -> usize {
        self.count(|o| matches!(o, BuildOutcome::Built { .. }))
    }

    /// Number of pairs that were up to date
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, BuildOutcome::Skipped))
    }

    /// Number of pairs that produced nothing
    pub fn empty(&self) -> usize {
        self.count(|o| matches!(o, BuildOutcome::Empty))
    }

    fn count(&self, pred: impl Fn(&BuildOutcome) -> bool) -> usize {
        self.pairs.iter().filter(|p| pred(&p.outcome)).count()
    }
}

/// Build orchestrator
///
/// Borrows its collaborators for the duration of one or more runs.
pub struct BuildOrchestrator<'a> {
    registry: &'a dyn CollectionRegistry,
    engine: &'a mut dyn BuildEngine,
    files: &'a dyn FileStore,
    reporter: &'a mut dyn Reporter,
}

impl<'a> BuildOrchestrator<'a> {
    /// Create a new build orchestrator
    pub fn new(
        registry: &'a dyn CollectionRegistry,
        engine: &'a mut dyn BuildEngine,
        files: &'a dyn FileStore,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            registry,
            engine,
            files,
            reporter,
        }
    }

    /// Execute one build run
    pub fn run(&mut self, config: &BuildConfig) -> Result<RunSummary, OrchestratorError> {
        let compression_unavailable = config.compress && !self.engine.supports_compression();
        // Fixed before the first dispatch; every request in the run sees it.
        let config = config
            .clone()
            .compress(config.compress && !compression_unavailable);

        let mut summary = RunSummary::default();

        if config.production {
            self.reporter.comment("Starting production build...");
            let tidied = tidy_production_files(self.files, self.engine.layout(), self.reporter)
                .map_err(OrchestratorError::Cleanup)?;
            tracing::info!("Removed {} stale output file(s)", tidied.total());
            summary.tidied = Some(tidied);
        } else {
            self.reporter.comment("Starting development build...");
        }

        let collections = self.resolve(config.target.as_deref());

        if compression_unavailable {
            tracing::debug!("gzip requested but the engine cannot compress");
            self.reporter.warning(
                "[gzip] Build will not use Gzip as the required dependencies are not available.",
            );
            self.reporter.blank();
        }

        for collection in &collections {
            self.build_collection(collection, &config, &mut summary)?;
        }

        tracing::info!(
            "Run finished: {} built, {} skipped, {} empty",
            summary.built(),
            summary.skipped(),
            summary.empty()
        );
        Ok(summary)
    }

    /// Resolve the collections a run should build
    ///
    /// An unknown target is reported and yields an empty set.
    pub fn resolve(&mut self, target: Option<&str>) -> Vec<Collection> {
        let collections = match target {
            Some(name) => match self.registry.get(name) {
                Some(collection) => {
                    self.reporter.comment("Gathering assets for collection...");
                    vec![collection.clone()]
                }
                None => {
                    self.reporter
                        .comment(&format!("[{name}] Collection not found."));
                    return Vec::new();
                }
            },
            None => {
                self.reporter.comment("Gathering all collections to build...");
                self.registry.all().to_vec()
            }
        };

        self.reporter.blank();
        tracing::debug!("Resolved {} collection(s)", collections.len());
        collections
    }

    fn build_collection(
        &mut self,
        collection: &Collection,
        config: &BuildConfig,
        summary: &mut RunSummary,
    ) -> Result<(), OrchestratorError> {
        for kind in AssetKind::ALL {
            let outcome = self.dispatch(collection, kind, config)?;
            summary.pairs.push(PairReport {
                collection: collection.name.clone(),
                kind,
                outcome,
            });
        }
        self.reporter.blank();
        Ok(())
    }

    fn dispatch(
        &mut self,
        collection: &Collection,
        kind: AssetKind,
        config: &BuildConfig,
    ) -> Result<BuildOutcome, OrchestratorError> {
        let request = config.request(&collection.name, kind);
        tracing::debug!("Dispatching {request:?}");

        let rendered =
            self.engine
                .render(collection, &request)
                .map_err(|source| OrchestratorError::Engine {
                    collection: collection.name.clone(),
                    kind,
                    source,
                })?;

        let name = &collection.name;
        let label = kind.label();
        let outcome = match rendered {
            RenderOutcome::Rendered(output) => {
                self.reporter.line(
                    Severity::Success,
                    &format!("[{name}] {label} successfully built."),
                );
                BuildOutcome::Built { output }
            }
            RenderOutcome::NotRequired => {
                self.reporter
                    .comment(&format!("[{name}] {label} build was not required for collection."));
                BuildOutcome::Skipped
            }
            RenderOutcome::Empty => {
                tracing::debug!("{name} produced no {kind} output");
                BuildOutcome::Empty
            }
        };
        Ok(outcome)
    }
}

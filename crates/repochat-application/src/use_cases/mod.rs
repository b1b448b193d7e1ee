//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`RunConfig`] | Validated per-run configuration |
//! | [`VectorIndex`] | Build, reload and query the index handle |
//! | [`IndexingOrchestrator`] | Persistence check and branch selection |
//! | [`QueryEngine`] | Retrieval plus completion for one query |
//! | [`run_query_loop`] | Interactive prompt/answer loop |

pub mod console;
pub mod index;
pub mod orchestrator;
pub mod query_engine;
pub mod query_loop;
pub mod run_config;

pub use console::Console;
pub use index::{BuildContext, IndexSettings, VectorIndex};
pub use orchestrator::{IndexBranch, IndexOutcome, IndexingOrchestrator};
pub use query_engine::{QueryEngine, render_prompt};
pub use query_loop::{LoopExit, QueryLoopSummary, run_query_loop};
pub use run_config::RunConfig;

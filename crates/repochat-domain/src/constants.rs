//! Domain layer constants
//!
//! Values fixed by the product behaviour rather than by configuration.

// ============================================================================
// BACKEND SELECTION
// ============================================================================

/// Input that selects the hosted embedding backend; anything else is local
pub const HOSTED_BACKEND_INPUT: &str = "1";

// ============================================================================
// PROMPTS
// ============================================================================

/// Prompt for the embedding backend choice
pub const PROMPT_BACKEND_CHOICE: &str =
    "Enter 1 to use OPEN API enter 0 to use locally setup llama2 model using Ollama: ";

/// Prompt for the repository owner
pub const PROMPT_REPO_OWNER: &str = "Enter the username of the owner of the repo: ";

/// Prompt for the repository name
pub const PROMPT_REPO_NAME: &str = "Enter the name of the repo: ";

/// Prompt repeated by the query loop
pub const PROMPT_QUERY: &str = "Enter your query: ";

// ============================================================================
// STATUS MESSAGES
// ============================================================================

/// Printed after a fresh index has been built and persisted
pub const MSG_DOCUMENTS_INDEXED: &str = "Documents Indexed";

/// Printed after a persisted index has been reloaded
pub const MSG_INDEX_LOADED: &str = "Already indexed data loaded";

/// Printed when the GitHub credential is missing
pub const MSG_MISSING_GITHUB_TOKEN: &str =
    "Add the GITHUB_TOKEN environment variable in the .env file";

/// Printed before entering the query loop
pub const MSG_QUERY_LOOP_BANNER: &str = "Press ctrl + c to exit";

/// Printed when the hosted backend is chosen for indexing
pub const MSG_HOSTED_BACKEND: &str = "Open API is being used";

/// Printed when the local backend is chosen for indexing
pub const MSG_LOCAL_BACKEND: &str = "Ollama is being used";

/// Printed once the local embedding model is ready
pub const MSG_EMBEDDING_MODEL_LOADED: &str = "embedding model loaded";

// ============================================================================
// QUERY LOOP
// ============================================================================

/// Lines that end the query loop
pub const QUERY_EXIT_SENTINELS: &[&str] = &["exit", "quit"];

/// Answer template used by the query engine
///
/// `{context_str}` receives the retrieved chunks, `{query_str}` the question.
pub const QA_PROMPT_TEMPLATE: &str = "Context information is below.\n\
---------------------\n\
{context_str}\n\
---------------------\n\
Given the context information above I want you to think step by step to answer the query in a crisp manner, incase case you don't know the answer say 'I don't know!'.\n\
Query: {query_str}\n\
Answer: ";

// ============================================================================
// PERSISTENCE
// ============================================================================

/// File name of the manifest written next to a persisted index
pub const INDEX_MANIFEST_FILENAME: &str = "index_manifest.json";

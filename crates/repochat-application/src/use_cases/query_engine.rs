//! Query Engine Use Case

use std::sync::Arc;

use repochat_domain::constants::QA_PROMPT_TEMPLATE;
use repochat_domain::error::Result;
use repochat_domain::ports::providers::LlmProvider;

use crate::use_cases::index::VectorIndex;

/// Default number of chunks retrieved per query
pub const DEFAULT_SIMILARITY_TOP_K: usize = 2;

const CONTEXT_PLACEHOLDER: &str = "{context_str}";
const QUERY_PLACEHOLDER: &str = "{query_str}";

/// Answers one question with one retrieval and one completion
pub struct QueryEngine {
    index: VectorIndex,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl QueryEngine {
    /// Engine over `index` using the fixed answer template
    pub fn new(index: VectorIndex, llm: Arc<dyn LlmProvider>, top_k: usize) -> Self {
        Self { index, llm, top_k }
    }

    /// Answer `query`
    pub async fn query(&self, query: &str) -> Result<String> {
        let results = self.index.retrieve(query, self.top_k).await?;
        let context = results
            .iter()
            .map(|r| r.as_context())
            .collect::<Vec<_>>()
            .join("\n\n");

        tracing::debug!(
            retrieved = results.len(),
            llm = self.llm.provider_name(),
            "Answering query"
        );
        let prompt = render_prompt(QA_PROMPT_TEMPLATE, &context, query);
        self.llm.complete(&prompt).await
    }
}

/// Fill `{context_str}` and `{query_str}` in one pass
///
/// Placeholder text inside the substituted values is left alone.
///
/// ```rust
/// use repochat_application::use_cases::render_prompt;
///
/// let out = render_prompt("C={context_str} Q={query_str}", "{query_str}", "why?");
/// assert_eq!(out, "C={query_str} Q=why?");
/// ```
pub fn render_prompt(template: &str, context: &str, query: &str) -> String {
    let mut out = String::with_capacity(template.len() + context.len() + query.len());
    let mut rest = template;

    loop {
        let next = [(CONTEXT_PLACEHOLDER, context), (QUERY_PLACEHOLDER, query)]
            .into_iter()
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|pos| (pos, placeholder, value))
            })
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, placeholder, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + placeholder.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

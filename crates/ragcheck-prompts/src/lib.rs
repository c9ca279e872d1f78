//! Prompt templates for the scoring calls.
//!
//! Templates use `{name}` placeholders; the typed helpers below are what
//! evaluators call. Changing template wording changes cache keys, since the
//! response cache is addressed by rendered prompt content.

/// A text template with `{name}` placeholders.
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute each `{key}` placeholder with its value. Unknown
    /// placeholders are left in place.
    pub fn format(&self, values: &[(&str, &str)]) -> String {
        let mut rendered = self.template.clone();
        for (key, value) in values {
            rendered = rendered.replace(&format!("{{{key}}}"), value);
        }
        rendered
    }
}

/// Rate how well the response addresses the query; answer is a bare score.
pub const RELEVANCE_PROMPT: &str = "\
You are an expert evaluator. Rate how well the following response addresses the user query.
Return ONLY a number between 0.0 and 1.0, where 1.0 is perfectly relevant and 0.0 is completely irrelevant.

Query: {query}
Response: {response}

Score:
";

/// Does the response fully answer the query; answer is a bare score.
pub const COMPLETENESS_PROMPT: &str = "\
You are an expert evaluator. Does the response FULLY answer the query based on the provided intent?
Return ONLY a number between 0.0 and 1.0.

Query: {query}
Response: {response}

Score:
";

/// Classify one claim against the context; answer is one of the three
/// status words.
pub const CLAIM_VERIFICATION_PROMPT: &str = "\
Given the following claim and the provided context, determine if the claim is supported by the context.
Answer with one of the following: SUPPORTED, UNSUPPORTED, CONTRADICTED.

Claim: {claim}
Context: {context}

Answer:
";

pub fn relevance_prompt(query: &str, response: &str) -> String {
    PromptTemplate::new(RELEVANCE_PROMPT).format(&[("query", query), ("response", response)])
}

pub fn completeness_prompt(query: &str, response: &str) -> String {
    PromptTemplate::new(COMPLETENESS_PROMPT).format(&[("query", query), ("response", response)])
}

pub fn claim_verification_prompt(claim: &str, context: &str) -> String {
    PromptTemplate::new(CLAIM_VERIFICATION_PROMPT)
        .format(&[("claim", claim), ("context", context)])
}

// Prompts for the skill extraction call. Kept beside the client so the
// wire contract and its instructions live in one place.

/// System prompt enforcing the JSON-array-only reply shape the parser
/// expects.
pub const SKILL_EXTRACT_SYSTEM: &str = "You are a precise resume analyst. \
    You MUST respond with a valid JSON array of lowercase strings and nothing else. \
    No markdown fences, no commentary, no explanations.";

/// User prompt template; `{resume_text}` is replaced per call.
pub const SKILL_EXTRACT_PROMPT: &str = "Extract a JSON array of the most relevant \
technical skills and tools mentioned in this resume text. Only return a JSON array \
of lowercase strings.\n\nResume:\n\n{resume_text}";

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the user's text to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the original formatting, whitespace, and tone.";

pub const CONTEXT_TEMPLATE: &str =
    "\n\nUse the following context to disambiguate the translation:\n{context}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str, context: Option<&str>) -> String {
    // {target_language} / {context} are placeholders for string replacement,
    // not format arguments
    let mut prompt = SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language);
    if let Some(context) = context {
        prompt.push_str(&CONTEXT_TEMPLATE.replace("{context}", context));
    }
    prompt
}

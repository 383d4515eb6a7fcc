//! Review prompt assembly.
//!
//! Renders the bounded file bundle into the single text payload sent to
//! the model: a fixed instruction header enumerating the review
//! categories and the response shape, followed by path-labeled file
//! sections.

use crate::models::Bundle;
use crate::models::review::REVIEW_CATEGORIES;

/// Fixed system preamble for the review call.
pub const REVIEW_PREAMBLE: &str = "You are an expert code reviewer. You analyze source code \
    and report concrete, actionable findings grouped by category. You respond with JSON only, \
    no prose around it.";

/// Build the user prompt for one review request.
pub fn build_review_prompt(bundle: &Bundle) -> String {
    let mut prompt = String::new();

    prompt.push_str("## Task\n\nReview the code files below. Report findings for every category that applies:\n\n");
    for category in REVIEW_CATEGORIES {
        prompt.push_str(&format!("- {category}\n"));
    }

    prompt.push_str(
        "\n## Response Format\n\n\
        Respond with a single JSON object containing:\n\
        - \"fileName\": the path of the first reviewed file\n\
        - \"categories\": an array with one entry per applicable category:\n\
          - \"category\": the category name, exactly as listed above\n\
          - \"findings\": an array of strings, one concrete observation each\n\
          - \"severity\": MUST be exactly one of \"HIGH\", \"MEDIUM\", \"LOW\"\n\
          - \"suggestions\": (optional) array of objects with \"description\" and \
        an optional \"codeExample\"\n\n\
        IMPORTANT: The \"severity\" field must be one of \"HIGH\", \"MEDIUM\", or \"LOW\". \
        Do NOT use values like \"critical\", \"major\", \"minor\", \"warning\", or \"info\".\n\n\
        Skip categories with no findings. If the code is clean, return an empty \
        \"categories\" array.\n\n",
    );

    prompt.push_str("## Files\n\n");
    for file in &bundle.files {
        prompt.push_str(&format!("### File: {}\n\n```\n{}\n```\n\n", file.path, file.content));
    }

    prompt
}

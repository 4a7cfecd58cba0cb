pub const SYSTEM_PROMPT: &str =
    "You are an expert at writing short, natural, and positive Facebook comments.";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 150;

/// Instructional prompt asking for three numbered comments about the keyword.
pub fn comment_prompt(keyword: &str) -> String {
    format!(
        "Generate 3 unique, short, and natural-sounding Facebook comments \
         about the keyword: \"{keyword}\"\n\
         \n\
         Guidelines:\n\
         - Sound human, like a real person would write.\n\
         - Keep them positive and engaging.\n\
         - Each comment should be 1-2 sentences.\n\
         - Return *only* the comments, each on a new line, starting with '1. ', '2. ', and '3. '.\n\
         - Do not add any extra text, introduction, or conclusion."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_keyword() {
        let prompt = comment_prompt("street food");
        assert!(prompt.contains("\"street food\""));
        assert!(prompt.contains("'1. '"));
    }
}

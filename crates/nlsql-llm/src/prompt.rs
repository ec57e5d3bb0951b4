//! Prompt text and answer clean-up shared by every provider

use nlsql_core::{LlmError, LlmResult};

/// System message sent with every request
pub const SYSTEM_PROMPT: &str =
    "You are a SQL assistant with expertise in natural language and NLP dependency parsing.";

/// User message asking for a bare SQL statement
pub fn user_prompt(query: &str) -> String {
    format!(
        "Parse the following natural language statement: {} into a SQL query. Just write the query",
        query
    )
}

/// Strip a markdown code fence (and its language tag) from a model answer.
///
/// Chat models tend to wrap SQL in ```` ```sql ```` blocks even when told not
/// to. Text outside the first fence is dropped.
pub fn extract_sql(answer: &str) -> LlmResult<String> {
    let trimmed = answer.trim();

    let sql = match trimmed.find("```") {
        Some(open) => {
            let after_fence = &trimmed[open + 3..];
            // language tag runs to the end of the fence line
            let body = after_fence
                .find('\n')
                .map_or("", |newline| &after_fence[newline + 1..]);
            match body.find("```") {
                Some(close) => &body[..close],
                None => body,
            }
        }
        None => trimmed,
    }
    .trim();

    if sql.is_empty() {
        return Err(LlmError::EmptyCompletion);
    }
    Ok(sql.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_user_prompt_embeds_question() {
        assert_eq!(
            user_prompt("How many authors are there?"),
            "Parse the following natural language statement: How many authors are there? into a SQL query. Just write the query"
        );
    }

    #[test_case("  SELECT * FROM publications;\n", "SELECT * FROM publications;" ; "plain answer trimmed")]
    #[test_case("```sql\nSELECT 1\n```", "SELECT 1" ; "sql fence")]
    #[test_case("```\nSELECT 1\n```", "SELECT 1" ; "bare fence")]
    #[test_case("```SQL\r\nSELECT 1\r\n```", "SELECT 1" ; "crlf fence")]
    #[test_case("```\nSELECT 1", "SELECT 1" ; "unterminated fence")]
    #[test_case(
        "Here you go:\n```sql\nSELECT COUNT(*)\nFROM publications;\n```\nHope it helps.",
        "SELECT COUNT(*)\nFROM publications;" ;
        "prose around fence"
    )]
    fn extracts_statement(answer: &str, expected: &str) {
        assert_eq!(extract_sql(answer).unwrap(), expected);
    }

    #[test]
    fn test_blank_answers() {
        assert_eq!(extract_sql("   "), Err(LlmError::EmptyCompletion));
        assert_eq!(extract_sql("```sql\n```"), Err(LlmError::EmptyCompletion));
    }
}

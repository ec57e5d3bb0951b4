//! SQL assembly from role-labelled token sequences
//!
//! Each token is first rendered to a fragment through a fixed lookup table,
//! then fragments are assembled into SELECT / FROM / WHERE clauses:
//!
//! - FROM: the first name token matching a known table, else the default table
//! - SELECT: every aggregate fragment; otherwise `<table>.*` when the question
//!   has a select verb, else `*`
//! - WHERE: each operator binds the next name or value after it as a
//!   parameter (`:p0`, `:p1`, ...), joined by the first AND/OR in the question
//!
//! Values are always bound, never spliced into the SQL text.

use crate::error::{ShapeError, ShapeResult};
use crate::role::SemanticRole;
use crate::token::ParseSequence;
use nlsql_config::RenderConfig;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Output from rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    /// The generated query string
    pub sql: String,
    /// Parameters to bind to the query
    pub params: HashMap<String, Value>,
}

const COMPARISON_OPERATORS: &[&str] = &["=", "<", ">"];

/// Renders tokens plus roles into a SQL statement
#[derive(Debug, Clone)]
pub struct SqlRenderer {
    default_table: String,
    tables: HashSet<String>,
    operator_columns: HashMap<String, String>,
}

impl Default for SqlRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl SqlRenderer {
    /// Create renderer from configuration
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            default_table: config.default_table.clone(),
            tables: config.tables.iter().map(|t| t.to_lowercase()).collect(),
            operator_columns: config
                .operator_columns
                .iter()
                .map(|(word, column)| (word.to_lowercase(), column.clone()))
                .collect(),
        }
    }

    /// Render the fragment for the token at `position`
    pub fn fragment(&self, sequence: &ParseSequence, position: usize, role: SemanticRole) -> String {
        let token = &sequence[position];
        match role {
            SemanticRole::Select => "SELECT".to_string(),
            SemanticRole::Function => {
                let head_text = sequence
                    .head_of(position)
                    .map(|(_, head)| head.text.as_str())
                    .unwrap_or("ROOT");
                match aggregate_for(&token.text) {
                    Some(function) => format!("{}({})", function, head_text),
                    None => "FUNCTION".to_string(),
                }
            }
            SemanticRole::Name | SemanticRole::Value => token.text.clone(),
            SemanticRole::Quantifier | SemanticRole::Logic => token.text.to_uppercase(),
            SemanticRole::Operator => {
                if COMPARISON_OPERATORS.contains(&token.text.as_str()) {
                    "OPERATOR".to_string()
                } else {
                    token.text.clone()
                }
            }
            SemanticRole::Unknown => "UNKNOWN".to_string(),
        }
    }

    /// Render every fragment; `roles` must cover the sequence one-to-one
    pub fn fragments(
        &self,
        sequence: &ParseSequence,
        roles: &[SemanticRole],
    ) -> ShapeResult<Vec<String>> {
        check_roles(sequence, roles)?;
        Ok(roles
            .iter()
            .enumerate()
            .map(|(i, role)| self.fragment(sequence, i, *role))
            .collect())
    }

    /// Assemble a full statement
    pub fn render(
        &self,
        sequence: &ParseSequence,
        roles: &[SemanticRole],
    ) -> ShapeResult<RenderedQuery> {
        let fragments = self.fragments(sequence, roles)?;

        let table_position = (0..roles.len()).find(|&i| {
            roles[i] == SemanticRole::Name && self.tables.contains(&sequence[i].text.to_lowercase())
        });
        let table = table_position
            .map(|i| sequence[i].text.clone())
            .unwrap_or_else(|| self.default_table.clone());

        let select = self.build_select_clause(roles, &fragments, &table);

        let mut params = HashMap::new();
        let conditions = self.build_conditions(sequence, roles, table_position, &mut params);
        let connective = roles
            .iter()
            .zip(&fragments)
            .find(|(role, fragment)| {
                **role == SemanticRole::Logic && matches!(fragment.as_str(), "AND" | "OR")
            })
            .map(|(_, fragment)| fragment.as_str())
            .unwrap_or("AND");

        let mut sql = format!("SELECT {}\nFROM {}", select, table);
        if !conditions.is_empty() {
            sql.push_str(&format!(
                "\nWHERE {}",
                conditions.join(&format!(" {} ", connective))
            ));
        }

        Ok(RenderedQuery { sql, params })
    }

    fn build_select_clause(&self, roles: &[SemanticRole], fragments: &[String], table: &str) -> String {
        let aggregates: Vec<&str> = roles
            .iter()
            .zip(fragments)
            .filter(|(role, fragment)| **role == SemanticRole::Function && *fragment != "FUNCTION")
            .map(|(_, fragment)| fragment.as_str())
            .collect();

        if !aggregates.is_empty() {
            aggregates.join(", ")
        } else if roles.contains(&SemanticRole::Select) {
            format!("{}.*", table)
        } else {
            "*".to_string()
        }
    }

    fn build_conditions(
        &self,
        sequence: &ParseSequence,
        roles: &[SemanticRole],
        table_position: Option<usize>,
        params: &mut HashMap<String, Value>,
    ) -> Vec<String> {
        let is_operand = |i: usize| {
            matches!(roles[i], SemanticRole::Name | SemanticRole::Value) && Some(i) != table_position
        };

        let mut conditions = Vec::new();
        for (i, role) in roles.iter().enumerate() {
            if *role != SemanticRole::Operator {
                continue;
            }
            let Some(value_position) = (i + 1..roles.len()).find(|&j| is_operand(j)) else {
                continue;
            };

            let word = sequence[i].text.as_str();
            let (column, comparator) = if COMPARISON_OPERATORS.contains(&word) {
                match (0..i).rev().find(|&j| is_operand(j)) {
                    Some(column_position) => (sequence[column_position].text.clone(), word),
                    None => continue,
                }
            } else {
                let column = self
                    .operator_columns
                    .get(&word.to_lowercase())
                    .cloned()
                    .unwrap_or_else(|| word.to_string());
                (column, "=")
            };

            let param = format!("p{}", params.len());
            params.insert(
                param.clone(),
                literal(&sequence[value_position].text, roles[value_position]),
            );
            conditions.push(format!("{} {} :{}", column, comparator, param));
        }
        conditions
    }
}

fn check_roles(sequence: &ParseSequence, roles: &[SemanticRole]) -> ShapeResult<()> {
    if roles.len() != sequence.len() {
        return Err(ShapeError::RoleCountMismatch {
            tokens: sequence.len(),
            roles: roles.len(),
        });
    }
    Ok(())
}

fn aggregate_for(word: &str) -> Option<&'static str> {
    match word.to_lowercase().as_str() {
        "average" | "avg" | "mean" => Some("AVG"),
        "total" | "sum" => Some("SUM"),
        "count" | "number" => Some("COUNT"),
        "maximum" | "max" | "highest" | "largest" => Some("MAX"),
        "minimum" | "min" | "lowest" | "smallest" => Some("MIN"),
        _ => None,
    }
}

/// Numbers bind as JSON numbers when the token is a value, everything else as text
fn literal(text: &str, role: SemanticRole) -> Value {
    if role == SemanticRole::Value {
        if let Ok(n) = text.parse::<i64>() {
            return Value::from(n);
        }
        if let Some(n) = text.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ParseToken;
    use SemanticRole::*;

    fn seq(tokens: &[(&str, &str, i64)]) -> ParseSequence {
        tokens
            .iter()
            .map(|(text, dep, head)| ParseToken::new(*text, *dep, *head))
            .collect()
    }

    /// "Return the average number of publications by Bob"
    fn publications_question() -> (ParseSequence, Vec<SemanticRole>) {
        let sequence = seq(&[
            ("Return", "root", -1),
            ("the", "det", 3),
            ("average", "amod", 3),
            ("number", "dobj", 0),
            ("of", "prep", 3),
            ("publications", "pobj", 4),
            ("by", "prep", 0),
            ("Bob", "pobj", 6),
        ]);
        let roles = vec![Select, Unknown, Function, Name, Unknown, Name, Operator, Name];
        (sequence, roles)
    }

    #[test]
    fn test_fragment_table() {
        let (sequence, roles) = publications_question();
        let renderer = SqlRenderer::default();

        let fragments = renderer.fragments(&sequence, &roles).unwrap();

        assert_eq!(
            fragments,
            vec!["SELECT", "UNKNOWN", "AVG(number)", "number", "UNKNOWN", "publications", "by", "Bob"]
        );
    }

    #[test]
    fn test_function_without_head_uses_root() {
        let sequence = seq(&[("average", "amod", -1)]);
        assert_eq!(SqlRenderer::default().fragment(&sequence, 0, Function), "AVG(ROOT)");
    }

    #[test]
    fn test_unknown_function_word() {
        let sequence = seq(&[("recent", "amod", -1)]);
        assert_eq!(SqlRenderer::default().fragment(&sequence, 0, Function), "FUNCTION");
    }

    #[test]
    fn test_symbolic_operator_fragment() {
        let sequence = seq(&[(">", "prep", -1), ("and", "cc", -1), ("each", "det", -1)]);
        let renderer = SqlRenderer::default();

        assert_eq!(renderer.fragment(&sequence, 0, Operator), "OPERATOR");
        assert_eq!(renderer.fragment(&sequence, 1, Logic), "AND");
        assert_eq!(renderer.fragment(&sequence, 2, Quantifier), "EACH");
    }

    #[test]
    fn test_render_publications_question() {
        let (sequence, roles) = publications_question();
        let config = RenderConfig {
            operator_columns: [("by".to_string(), "author".to_string())].into_iter().collect(),
            ..Default::default()
        };

        let rendered = SqlRenderer::from_config(&config).render(&sequence, &roles).unwrap();

        assert_eq!(
            rendered.sql,
            "SELECT AVG(number)\nFROM publications\nWHERE author = :p0"
        );
        assert_eq!(rendered.params.get("p0"), Some(&Value::String("Bob".to_string())));
    }

    #[test]
    fn test_render_select_star_with_default_table() {
        let sequence = seq(&[("Show", "root", -1), ("everything", "dobj", 0)]);

        let rendered = SqlRenderer::default().render(&sequence, &[Select, Unknown]).unwrap();

        assert_eq!(rendered.sql, "SELECT publications.*\nFROM publications");
        assert!(rendered.params.is_empty());
    }

    #[test]
    fn test_render_without_select_role() {
        let sequence = seq(&[("papers", "nsubj", -1)]);
        let rendered = SqlRenderer::default().render(&sequence, &[Unknown]).unwrap();

        assert_eq!(rendered.sql, "SELECT *\nFROM publications");
    }

    #[test]
    fn test_comparison_and_logic_connective() {
        let sequence = seq(&[
            ("year", "nsubj", -1),
            (">", "prep", 0),
            ("2020", "pobj", 1),
            ("or", "cc", 0),
            ("by", "prep", -1),
            ("Bob", "pobj", 4),
        ]);
        let roles = vec![Name, Operator, Value, Logic, Operator, Name];

        let rendered = SqlRenderer::default().render(&sequence, &roles).unwrap();

        assert_eq!(
            rendered.sql,
            "SELECT *\nFROM publications\nWHERE year > :p0 OR by = :p1"
        );
        assert_eq!(rendered.params.get("p0"), Some(&Value::from(2020)));
        assert_eq!(rendered.params.get("p1"), Some(&Value::String("Bob".to_string())));
    }

    #[test]
    fn test_operator_without_operand_is_dropped() {
        let sequence = seq(&[("by", "prep", -1)]);
        let rendered = SqlRenderer::default().render(&sequence, &[Operator]).unwrap();

        assert!(!rendered.sql.contains("WHERE"));
    }

    #[test]
    fn test_role_count_mismatch() {
        let (sequence, _) = publications_question();
        let err = SqlRenderer::default().render(&sequence, &[Select]).unwrap_err();

        assert_eq!(err, ShapeError::RoleCountMismatch { tokens: 8, roles: 1 });
    }
}

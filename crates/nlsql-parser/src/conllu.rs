//! CoNLL-U adapter
//!
//! Reads the ten-column format emitted by Stanza and other UD parsers.
//! Sentences are concatenated into one sequence; heads are 1-based within
//! their sentence and are rebased onto sequence positions.

use nlsql_core::{ParseError, ParseResult, ParseSequence, ParseToken};

const COLUMNS: usize = 10;
const ID: usize = 0;
const FORM: usize = 1;
const LEMMA: usize = 2;
const UPOS: usize = 3;
const HEAD: usize = 6;
const DEPREL: usize = 7;

/// Parse CoNLL-U text into a single sequence
pub fn parse_conllu(input: &str) -> ParseResult<ParseSequence> {
    let mut tokens = Vec::new();
    let mut sentence_start = 0usize;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() {
            sentence_start = tokens.len();
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMNS {
            return Err(ParseError::format(
                line_no,
                format!("expected {} columns, found {}", COLUMNS, columns.len()),
            ));
        }

        // multiword ranges (1-2) and empty nodes (1.1)
        if columns[ID].contains(['-', '.']) {
            continue;
        }

        let id: usize = columns[ID]
            .parse()
            .map_err(|_| ParseError::format(line_no, format!("invalid ID '{}'", columns[ID])))?;
        let expected = tokens.len() - sentence_start + 1;
        if id != expected {
            return Err(ParseError::format(
                line_no,
                format!("expected token ID {}, found {}", expected, id),
            ));
        }

        let head: usize = columns[HEAD].parse().map_err(|_| {
            ParseError::format(line_no, format!("invalid HEAD '{}'", columns[HEAD]))
        })?;
        let head = if head == 0 {
            -1
        } else {
            sentence_start
                .checked_add(head - 1)
                .and_then(|position| i64::try_from(position).ok())
                .ok_or_else(|| {
                    ParseError::format(line_no, format!("HEAD {} out of range", head))
                })?
        };

        let mut token = ParseToken::new(columns[FORM], columns[DEPREL].to_lowercase(), head);
        if let Some(pos) = field(columns[UPOS]) {
            token = token.with_pos(pos);
        }
        if let Some(lemma) = field(columns[LEMMA]) {
            token = token.with_lemma(lemma);
        }
        tokens.push(token);
    }

    Ok(ParseSequence::new(tokens))
}

fn field(value: &str) -> Option<&str> {
    (value != "_" && !value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlsql_core::HeadRef;
    use test_case::test_case;

    const BOB_ATE_CAKE: &str = "\
# sent_id = 1
# text = Bob ate cake
1\tBob\tBob\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tate\teat\tVERB\tVBD\t_\t0\troot\t_\t_
3\tcake\tcake\tNOUN\tNN\t_\t2\tobj\t_\t_
";

    #[test]
    fn test_single_sentence() {
        let sequence = parse_conllu(BOB_ATE_CAKE).unwrap();

        assert_eq!(sequence.texts(), vec!["Bob", "ate", "cake"]);
        assert_eq!(sequence[0].head, HeadRef::Index(1));
        assert_eq!(sequence[1].head, HeadRef::Root);
        assert_eq!(sequence[2].dependency_label, "obj");
        assert_eq!(sequence[1].lemma.as_deref(), Some("eat"));
        assert_eq!(sequence[0].pos.as_deref(), Some("PROPN"));
    }

    #[test]
    fn test_second_sentence_heads_are_rebased() {
        let input = format!(
            "{}\n1\tIt\tit\tPRON\tPRP\t_\t2\tnsubj\t_\t_\n2\tworked\twork\tVERB\tVBD\t_\t0\troot\t_\t_\n",
            BOB_ATE_CAKE
        );

        let sequence = parse_conllu(&input).unwrap();

        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence[3].head, HeadRef::Index(4));
        assert_eq!(sequence[4].head, HeadRef::Root);
    }

    #[test]
    fn test_multiword_and_empty_nodes_skipped() {
        let input = "\
1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_
1\tdo\tdo\tAUX\tVBP\t_\t3\taux\t_\t_
2\tn't\tnot\tPART\tRB\t_\t3\tadvmod\t_\t_
3\tgo\tgo\tVERB\tVB\t_\t0\troot\t_\t_
3.1\tgone\tgo\tVERB\t_\t_\t_\t_\t3:conj\t_
";

        let sequence = parse_conllu(input).unwrap();
        assert_eq!(sequence.texts(), vec!["do", "n't", "go"]);
    }

    #[test]
    fn test_underscore_fields_are_absent() {
        let sequence = parse_conllu("1\tBob\t_\t_\t_\t_\t0\troot\t_\t_\n").unwrap();
        assert_eq!(sequence[0].pos, None);
        assert_eq!(sequence[0].lemma, None);
    }

    #[test_case("1\tBob\tBob\tPROPN\n", 1 ; "too few columns")]
    #[test_case("x\tBob\tBob\tPROPN\tNNP\t_\t0\troot\t_\t_\n", 1 ; "non numeric id")]
    #[test_case("1\tBob\tBob\tPROPN\tNNP\t_\t?\troot\t_\t_\n", 1 ; "non numeric head")]
    #[test_case("1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n\n1\tb\tb\tX\t_\t_\t18446744073709551615\tdep\t_\t_\n", 3 ; "head overflow in later sentence")]
    #[test_case("1\tBob\tBob\tPROPN\tNNP\t_\t9223372036854775809\troot\t_\t_\n", 1 ; "head beyond signed range")]
    #[test_case("# c\n2\tBob\tBob\tPROPN\tNNP\t_\t0\troot\t_\t_\n", 2 ; "out of order id")]
    fn malformed_line(input: &str, line: usize) {
        match parse_conllu(input) {
            Err(ParseError::Format { line: found, .. }) => assert_eq!(found, line),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_conllu("").unwrap().is_empty());
    }
}

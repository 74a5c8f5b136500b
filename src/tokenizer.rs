// Splits frame text into positioned tokens using the pest grammar in
// `mansyntax.pest`. Every token list ends with an end-of-input token whose
// text is `keyword::EOF`.

use pest::Parser;
use pest::error::{InputLocation, LineColLocation};
use pest_derive::Parser;

use crate::keyword::EOF;
use crate::parser::{Expected, ParseError};

#[derive(Parser)]
#[grammar = "mansyntax.pest"]
struct ManchesterTokenizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    FullIri,
    StringLiteral,
    QuotedName,
    LanguageTag,
    DatatypeMarker,
    Comparison,
    Delimiter,
    Word,
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Tokens that may name an entity.
    pub fn is_name(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Word | TokenKind::QuotedName | TokenKind::FullIri
        )
    }
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.text == symbol
    }
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
    /// The label of an anonymous individual written as `_:label`.
    pub fn anonymous_label(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Word => self.text.strip_prefix("_:").filter(|label| !label.is_empty()),
            _ => None,
        }
    }
    /// The IRI text between the angle brackets of a full IRI.
    pub fn iri_text(&self) -> Option<&str> {
        match self.kind {
            TokenKind::FullIri => self.text.strip_prefix('<').and_then(|t| t.strip_suffix('>')),
            _ => None,
        }
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut pairs = ManchesterTokenizer::parse(Rule::tokens, text).map_err(|e| unrecognized(text, e))?;
    let mut tokens = Vec::new();
    if let Some(all) = pairs.next() {
        for pair in all.into_inner() {
            let kind = match pair.as_rule() {
                Rule::full_iri => TokenKind::FullIri,
                Rule::string_literal => TokenKind::StringLiteral,
                Rule::quoted_name => TokenKind::QuotedName,
                Rule::language_tag => TokenKind::LanguageTag,
                Rule::datatype_marker => TokenKind::DatatypeMarker,
                Rule::comparison => TokenKind::Comparison,
                Rule::delimiter => TokenKind::Delimiter,
                Rule::word => TokenKind::Word,
                Rule::EOI => TokenKind::Eof,
                _ => continue,
            };
            let (line, column) = pair.line_col();
            let text = match kind {
                TokenKind::Eof => EOF.to_string(),
                _ => pair.as_str().to_string(),
            };
            tokens.push(Token { kind, text, line, column });
        }
    }
    if !tokens.last().is_some_and(Token::is_eof) {
        let (line, column) = pest::Position::new(text, text.len())
            .map(|p| p.line_col())
            .unwrap_or((1, 1));
        tokens.push(Token {
            kind: TokenKind::Eof,
            text: EOF.to_string(),
            line,
            column,
        });
    }
    Ok(tokens)
}

fn unrecognized(text: &str, error: pest::error::Error<Rule>) -> ParseError {
    let offset = match error.location {
        InputLocation::Pos(offset) => offset,
        InputLocation::Span((start, _)) => start,
    };
    let (line, column) = match error.line_col {
        LineColLocation::Pos(position) => position,
        LineColLocation::Span(start, _) => start,
    };
    let token = text
        .get(offset..)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or(EOF);
    ParseError::new(token, line, column, Expected::nothing())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(TokenKind, String)> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn frame_keywords_keep_their_colon() {
        let tokens = kinds("Class: Person SubClassOf: owl:Thing");
        let texts: Vec<_> = tokens.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["Class:", "Person", "SubClassOf:", "owl:Thing", EOF]);
    }

    #[test]
    fn delimiters_split_words() {
        let texts: Vec<_> = kinds("hasPart some (A or{b,c})")
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            texts,
            vec!["hasPart", "some", "(", "A", "or", "{", "b", ",", "c", "}", ")", EOF]
        );
    }

    #[test]
    fn literals_and_markers() {
        let tokens = kinds(r#""a \"b\""^^xsd:string "chat"@fr-CA"#);
        assert_eq!(tokens[0], (TokenKind::StringLiteral, r#""a \"b\"""#.to_string()));
        assert_eq!(tokens[1], (TokenKind::DatatypeMarker, "^^".to_string()));
        assert_eq!(tokens[2], (TokenKind::Word, "xsd:string".to_string()));
        assert_eq!(tokens[3], (TokenKind::StringLiteral, "\"chat\"".to_string()));
        assert_eq!(tokens[4], (TokenKind::LanguageTag, "@fr-CA".to_string()));
    }

    #[test]
    fn iris_versus_comparisons() {
        let tokens = kinds("<http://example.org/a#B> xsd:integer[>= 5, <10]");
        assert_eq!(tokens[0], (TokenKind::FullIri, "<http://example.org/a#B>".to_string()));
        assert_eq!(tokens[3], (TokenKind::Comparison, ">=".to_string()));
        assert_eq!(tokens[6], (TokenKind::Comparison, "<".to_string()));
        assert_eq!(tokens[7], (TokenKind::Word, "10".to_string()));
    }

    #[test]
    fn quoted_names_may_contain_spaces() {
        let tokens = kinds("'has part' some 'Big Thing'");
        assert_eq!(tokens[0], (TokenKind::QuotedName, "'has part'".to_string()));
        assert_eq!(tokens[2], (TokenKind::QuotedName, "'Big Thing'".to_string()));
    }

    #[test]
    fn positions_are_one_based() {
        let tokens = tokenize("Class: A\n  SubClassOf: B").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 8));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 15));
        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!((eof.line, eof.column), (2, 16));
    }

    #[test]
    fn positions_in_long_input() {
        let lines = 20_000;
        let tokens = tokenize(&"B,\n".repeat(lines)).unwrap();
        assert_eq!(tokens.len(), 2 * lines + 1);
        let last_comma = &tokens[2 * lines - 1];
        assert_eq!((last_comma.line, last_comma.column), (lines, 2));
        let eof = tokens.last().unwrap();
        assert_eq!((eof.line, eof.column), (lines + 1, 1));
    }

    #[test]
    fn empty_input_is_just_eof() {
        let tokens = tokenize("   ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let error = tokenize("Individual: x Facts: age \"12").unwrap_err();
        assert_eq!(error.current_token(), "\"12");
        assert_eq!((error.line(), error.column()), (1, 26));
    }

    #[test]
    fn anonymous_individuals() {
        let tokens = tokenize("_:b1 _: x").unwrap();
        assert_eq!(tokens[0].anonymous_label(), Some("b1"));
        assert_eq!(tokens[1].anonymous_label(), None);
    }
}

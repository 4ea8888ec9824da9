//! Turning raw oracle text into a structured value
//!
//! Small models wrap their answer in code fences and prose, and often emit
//! single-quoted literals instead of JSON. [`sanitize_response`] cuts out the object, then
//! [`parse_response`] tries strict JSON before falling back to a permissive
//! literal parser.

use serde_json::{Map, Number, Value};

/// Strip code fences and slice from the first `{` to the last `}`
pub fn sanitize_response(raw: &str) -> String {
    let stripped = raw.replace("```json", "").replace("```", "");
    let trimmed = stripped.trim();

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => trimmed
            .get(start..=end)
            .unwrap_or(trimmed)
            .to_string(),
        _ => trimmed.to_string(),
    }
}

/// Strict JSON first, then the permissive literal syntax
pub fn parse_response(text: &str) -> Option<Value> {
    serde_json::from_str(text)
        .ok()
        .or_else(|| parse_literal(text))
}

/// Parse a loose literal: single or double quoted strings,
/// `True`/`False`/`None`, tuples, and trailing commas
pub fn parse_literal(text: &str) -> Option<Value> {
    let mut parser = LiteralParser {
        chars: text.chars().collect(),
        pos: 0,
    };
    let value = parser.value()?;
    parser.skip_whitespace();
    parser.at_end().then_some(value)
}

struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl LiteralParser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<Value> {
        self.skip_whitespace();
        match self.peek()? {
            '{' => self.object(),
            '[' => self.sequence(']').map(Value::Array),
            '(' => self.sequence(')').map(Value::Array),
            '\'' | '"' => self.string().map(Value::String),
            c if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() => self.keyword(),
            _ => None,
        }
    }

    fn object(&mut self) -> Option<Value> {
        self.bump();
        let mut entries = Map::new();
        loop {
            if self.eat('}') {
                return Some(Value::Object(entries));
            }
            let key = match self.value()? {
                Value::String(key) => key,
                Value::Number(number) => number.to_string(),
                _ => return None,
            };
            if !self.eat(':') {
                return None;
            }
            let value = self.value()?;
            entries.insert(key, value);
            if !self.eat(',') {
                return self.eat('}').then_some(Value::Object(entries));
            }
        }
    }

    fn sequence(&mut self, close: char) -> Option<Vec<Value>> {
        self.bump();
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Some(items);
            }
            items.push(self.value()?);
            if !self.eat(',') {
                return self.eat(close).then_some(items);
            }
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    'u' => {
                        let hex: String = (0..4).filter_map(|_| self.bump()).collect();
                        let code = u32::from_str_radix(&hex, 16).ok()?;
                        out.push(char::from_u32(code)?);
                    }
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_'))
        {
            self.pos += 1;
        }
        let literal: String = self
            .chars
            .get(start..self.pos)?
            .iter()
            .filter(|c| **c != '_')
            .collect();
        let literal = literal.strip_prefix('+').unwrap_or(&literal);

        if let Ok(integer) = literal.parse::<i64>() {
            return Some(Value::from(integer));
        }
        let float = literal.parse::<f64>().ok()?;
        Number::from_f64(float).map(Value::Number)
    }

    fn keyword(&mut self) -> Option<Value> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars.get(start..self.pos)?.iter().collect();
        match word.as_str() {
            "True" | "true" => Some(Value::Bool(true)),
            "False" | "false" => Some(Value::Bool(false)),
            "None" | "null" => Some(Value::Null),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_strips_fences_and_prose() {
        let raw = "Sure! Here you go:\n```json\n{\"replicas\": 5}\n```\nHope that helps.";
        assert_eq!(sanitize_response(raw), r#"{"replicas": 5}"#);
    }

    #[test]
    fn test_sanitize_without_braces_returns_trimmed_text() {
        assert_eq!(sanitize_response("  no json here  "), "no json here");
        assert_eq!(sanitize_response("} backwards {"), "} backwards {");
    }

    #[test]
    fn test_strict_json_is_preferred() {
        assert_eq!(
            parse_response(r#"{"limitMiB": 1024, "requestMiB": 1024}"#),
            Some(json!({ "limitMiB": 1024, "requestMiB": 1024 }))
        );
    }

    #[test]
    fn test_single_quoted_literal_is_accepted() {
        assert_eq!(
            parse_response("{'replicas': 5, 'enabled': True, 'note': None,}"),
            Some(json!({ "replicas": 5, "enabled": true, "note": null }))
        );
    }

    #[test]
    fn test_nested_literals_and_tuples() {
        assert_eq!(
            parse_literal("{'a': [1, 2.5, -3,], 'b': (4,), 'c': {'d': 'it\\'s'}}"),
            Some(json!({ "a": [1, 2.5, -3], "b": [4], "c": { "d": "it's" } }))
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(parse_response("{ limitMiB: 1024 }"), None);
        assert_eq!(parse_response("{'replicas': 5"), None);
        assert_eq!(parse_response("{'replicas': 5} trailing"), None);
        assert_eq!(parse_response(""), None);
    }
}

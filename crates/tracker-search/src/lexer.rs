//! Lexer (tokenizer) for search expressions.
//!
//! The grammar is a flat sequence of whitespace-separated terms. Each term
//! may be prefixed with `-` for negation and may take the form
//! `qualifier:value`; a term without a `qualifier:` prefix is a bare text
//! term. Values (and bare terms) may be quoted with `"` or `'` to include
//! whitespace, with `\` escapes inside quotes.
//!
//! Tokenization never fails: every input produces a (possibly empty) term
//! list, and anything unusual degrades to a text term or an empty value.

use std::iter::Peekable;
use std::str::Chars;

use crate::term::{Qualifier, Term};

/// Lexer for tokenizing search expressions.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Consumes and returns the next character.
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a quoted string (single or double quotes).
    fn read_quoted_string(&mut self, quote_char: char) -> String {
        // Consume the opening quote
        self.next_char();

        let mut result = String::new();
        while let Some(c) = self.next_char() {
            if c == quote_char {
                break;
            }
            // Handle escape sequences
            if c == '\\' {
                if let Some(escaped) = self.next_char() {
                    result.push(escaped);
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    /// Reads up to the first `:` or whitespace (the qualifier position).
    fn read_head(&mut self) -> String {
        let mut head = String::new();
        while let Some(&c) = self.peek() {
            if c.is_whitespace() || c == ':' {
                break;
            }
            head.push(self.next_char().unwrap());
        }
        head
    }

    /// Reads a term value: quoted, or everything up to the next whitespace.
    fn read_value(&mut self) -> String {
        if let Some(&c) = self.peek() {
            if c == '"' || c == '\'' {
                return self.read_quoted_string(c);
            }
        }

        let mut value = String::new();
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            value.push(self.next_char().unwrap());
        }
        value
    }

    /// Returns the next term, or `None` at end of input.
    pub fn next_term(&mut self) -> Option<Term> {
        self.skip_whitespace();

        let c = *self.peek()?;
        let negated = c == '-';
        if negated {
            self.next_char();
        }

        // Quoted bare term: the whole quoted string is a text value.
        if let Some(&c) = self.peek() {
            if c == '"' || c == '\'' {
                let value = self.read_quoted_string(c);
                let term = Term::text(value);
                return Some(if negated { term.negated() } else { term });
            }
        }

        let head = self.read_head();
        let term = if self.peek() == Some(&':') {
            self.next_char();
            let value = self.read_value();
            Term::new(Qualifier::parse(&head), value)
        } else {
            Term::text(head)
        };

        Some(if negated { term.negated() } else { term })
    }

    /// Collects all terms into a vector.
    pub fn tokenize(mut self) -> Vec<Term> {
        let mut terms = Vec::new();
        while let Some(term) = self.next_term() {
            terms.push(term);
        }
        terms
    }
}

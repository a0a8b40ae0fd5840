//! Rendering of message trees
//!
//! The evaluator describes a failure as a [`Message`] tree mirroring the
//! chain: fragments joined by operator keywords, with groups in parentheses.
//! Rendering resolves keys against a catalog for one locale and substitutes
//! placeholders.

use std::borrow::Cow;

use crate::chain::Operator;
use crate::foundation::Locale;
use crate::message::catalog::{BuiltinCatalog, MessageCatalog};
use crate::message::template::{MessageTemplate, Pattern};

/// Unrendered description of a (part of a) chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// One check, in the polarity it was expected to hold.
    Fragment {
        /// The check's template.
        template: MessageTemplate,
        /// Whether the check was negated.
        negated: bool,
    },
    /// An embedded sub-chain, rendered in parentheses.
    Group(Box<Message>),
    /// An embedded sub-chain without any step.
    EmptyGroup,
    /// Two parts joined by a binary operator.
    Join {
        /// Everything to the left.
        left: Box<Message>,
        /// The joining operator.
        operator: Operator,
        /// The right operand.
        right: Box<Message>,
    },
}

impl Message {
    pub(crate) fn fragment(template: MessageTemplate, negated: bool) -> Self {
        Self::Fragment { template, negated }
    }

    pub(crate) fn group(inner: Option<Message>) -> Self {
        match inner {
            Some(inner) => Self::Group(Box::new(inner)),
            None => Self::EmptyGroup,
        }
    }

    pub(crate) fn join(left: Message, operator: Operator, right: Message) -> Self {
        Self::Join {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Renders the message with the builtin catalog.
    pub fn render(&self, locale: &Locale) -> String {
        Renderer::new(locale).render(self)
    }

    /// Collects the templates of every fragment, left to right.
    pub fn templates(&self) -> Vec<&MessageTemplate> {
        let mut out = Vec::new();
        self.collect_templates(&mut out);
        out
    }

    fn collect_templates<'a>(&'a self, out: &mut Vec<&'a MessageTemplate>) {
        match self {
            Self::Fragment { template, .. } => out.push(template),
            Self::Group(inner) => inner.collect_templates(out),
            Self::EmptyGroup => {}
            Self::Join { left, right, .. } => {
                left.collect_templates(out);
                right.collect_templates(out);
            }
        }
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// Renders messages for one locale against a catalog.
///
/// Keys missing from the caller's catalog are looked up in
/// [`BuiltinCatalog`]; keys missing everywhere render as the key itself.
pub struct Renderer<'a> {
    locale: &'a Locale,
    catalog: Option<&'a dyn MessageCatalog>,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer using only the builtin catalog.
    pub fn new(locale: &'a Locale) -> Self {
        Self {
            locale,
            catalog: None,
        }
    }

    /// Creates a renderer consulting `catalog` before the builtin one.
    pub fn with_catalog(locale: &'a Locale, catalog: &'a dyn MessageCatalog) -> Self {
        Self {
            locale,
            catalog: Some(catalog),
        }
    }

    /// Renders a whole message tree.
    pub fn render(&self, message: &Message) -> String {
        let mut out = String::new();
        self.write(message, &mut out);
        out
    }

    /// Renders a single template.
    pub fn render_template(&self, template: &MessageTemplate, negated: bool) -> String {
        match template.pattern() {
            Pattern::Key(key) => {
                let pattern = self.lookup(key, negated).unwrap_or_else(|| key.clone());
                substitute(&pattern, template)
            }
            Pattern::Literal(text) if negated => {
                format!("{} ({})", self.keyword("operator.not", "NOT"), substitute(text, template))
            }
            Pattern::Literal(text) => substitute(text, template),
        }
    }

    fn write(&self, message: &Message, out: &mut String) {
        match message {
            Message::Fragment { template, negated } => {
                out.push_str(&self.render_template(template, *negated));
            }
            Message::Group(inner) => {
                out.push('(');
                self.write(inner, out);
                out.push(')');
            }
            Message::EmptyGroup => out.push_str("()"),
            Message::Join {
                left,
                operator,
                right,
            } => {
                self.write(left, out);
                out.push(' ');
                out.push_str(&self.keyword(operator.message_key(), operator.as_str()));
                out.push(' ');
                self.write(right, out);
            }
        }
    }

    fn keyword(&self, key: &str, fallback: &'static str) -> Cow<'static, str> {
        self.lookup(key, false).unwrap_or(Cow::Borrowed(fallback))
    }

    fn lookup(&self, key: &str, negated: bool) -> Option<Cow<'static, str>> {
        self.catalog
            .and_then(|catalog| catalog.lookup(self.locale, key, negated))
            .or_else(|| BuiltinCatalog.lookup(self.locale, key, negated))
    }
}

/// Substitutes `{value}`, `{N}` and brace escapes in `pattern`.
///
/// Placeholders without a matching parameter are kept verbatim.
pub fn substitute(pattern: &str, template: &MessageTemplate) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            // an unclosed `{` stays literal up to the next `{`
            match tail[1..].find(['{', '}']).map(|i| i + 1) {
                Some(next) if tail[next..].starts_with('{') => {
                    out.push_str(&tail[..next]);
                    rest = &tail[next..];
                }
                Some(end) => {
                    let name = &tail[1..end];
                    match resolve(name, template) {
                        Some(text) => out.push_str(&text),
                        None => out.push_str(&tail[..=end]),
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push_str(tail);
                    rest = "";
                }
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

fn resolve(name: &str, template: &MessageTemplate) -> Option<String> {
    if name == "value" {
        return template.checked().map(crate::foundation::Parameter::render);
    }
    let index: usize = name.parse().ok()?;
    template.arguments().get(index).map(crate::foundation::Parameter::render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Parameter;
    use crate::message::MapCatalog;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn greater(value: i32, bound: i32) -> MessageTemplate {
        MessageTemplate::key("compare.greater")
            .arg(bound)
            .with_checked(Parameter::checked(Arc::new(value)))
    }

    #[test]
    fn test_substitute_placeholders() {
        let template = MessageTemplate::literal("")
            .arg("a")
            .arg(2)
            .with_checked(Parameter::checked(Arc::new(1)));
        assert_eq!(substitute("{value} {0} {1}", &template), "1 \"a\" 2");
    }

    #[test]
    fn test_substitute_escapes_and_unknowns() {
        let template = MessageTemplate::literal("").arg(1);
        assert_eq!(substitute("{{x}} {5} {value} {0}", &template), "{x} {5} {value} 1");
        assert_eq!(substitute("open { end", &template), "open { end");
        assert_eq!(substitute("a } b", &template), "a } b");
    }

    #[test]
    fn test_substitute_unclosed_brace_before_placeholder() {
        let template = MessageTemplate::literal("").arg(1);
        assert_eq!(substitute("{a{0}", &template), "{a1");
        assert_eq!(substitute("{ {0} }", &template), "{ 1 }");
        assert_eq!(substitute("{a{{0}}", &template), "{a{0}");
    }

    #[test]
    fn test_render_fragment() {
        let message = Message::fragment(greater(1, 2), false);
        assert_eq!(message.render(&Locale::ENGLISH), "1 should be greater than 2");
        let message = Message::fragment(greater(1, 2), true);
        assert_eq!(message.render(&Locale::ENGLISH), "1 should NOT be greater than 2");
    }

    #[test]
    fn test_render_join_and_group() {
        let message = Message::join(
            Message::group(Some(Message::join(
                Message::fragment(greater(1, 2), false),
                Operator::Or,
                Message::fragment(greater(1, 3), false),
            ))),
            Operator::And,
            Message::fragment(greater(1, 4), true),
        );
        assert_eq!(
            message.render(&Locale::ENGLISH),
            "(1 should be greater than 2 OR 1 should be greater than 3) AND 1 should NOT be greater than 4"
        );
        assert_eq!(message.templates().len(), 3);
    }

    #[test]
    fn test_render_french() {
        let message = Message::join(
            Message::fragment(greater(1, 2), false),
            Operator::Xor,
            Message::group(None),
        );
        assert_eq!(
            message.render(&Locale::FRENCH),
            "1 devrait être supérieur à 2 OU EXCLUSIF ()"
        );
    }

    #[test]
    fn test_negated_literal() {
        let template = MessageTemplate::literal("{value} should be odd")
            .with_checked(Parameter::checked(Arc::new(4)));
        let renderer = Renderer::new(&Locale::ENGLISH);
        assert_eq!(renderer.render_template(&template, true), "NOT (4 should be odd)");
    }

    #[test]
    fn test_custom_catalog_takes_precedence() {
        let catalog = MapCatalog::new().with_entry(
            Locale::ENGLISH,
            "compare.greater",
            "{value} > {0} expected",
            "{value} <= {0} expected",
        );
        let renderer = Renderer::with_catalog(&Locale::ENGLISH, &catalog);
        assert_eq!(renderer.render_template(&greater(1, 2), false), "1 > 2 expected");
        assert_eq!(
            renderer.render(&Message::join(
                Message::fragment(greater(1, 2), true),
                Operator::Nor,
                Message::fragment(greater(3, 2), false),
            )),
            "1 <= 2 expected NOR 3 > 2 expected"
        );
    }

    #[test]
    fn test_missing_key_renders_key() {
        let template = MessageTemplate::key("custom.unknown");
        assert_eq!(
            Renderer::new(&Locale::ENGLISH).render_template(&template, false),
            "custom.unknown"
        );
    }
}

//! Token kinds shared by the value and state-key grammars.

use crate::Span;

/// One flat enumeration for both grammars.
///
/// Value kinds come first, then the kinds only the state-key grammar emits.
/// `Operator`, `Punctuation`, `Whitespace` and `Unknown` are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// `#primary`, `#primary.50`, `#primary.$alpha`
    ColorToken,
    /// `#fff`, `#ffff`, `#ffffff`, `#ffffffff`
    HexColor,
    /// `$gap`
    CustomProperty,
    /// `$$gap`: the property name itself, not its value
    CustomPropertyName,
    /// `##primary`: the color token name itself, not its value
    ColorTokenName,
    /// Number with a Tasty unit (`2x`, `1r`), or with a unit nobody knows
    CustomUnit,
    /// Number with a CSS unit (`10px`, `50%`)
    CssUnit,
    Number,
    Boolean,
    Preset,
    PresetModifier,
    Direction,
    /// Function call `name(...)`, children hold the argument tokens.
    /// A bare known CSS function name has no children.
    Function,
    String,
    Identifier,
    Operator,
    Punctuation,
    Whitespace,
    Unknown,

    /// Empty key: the value applied when no state matches.
    DefaultState,
    BooleanMod,
    /// `name=value`
    ValueMod,
    /// `:hover`, `::before`, `:nth-child(2n)`; `:has/:is/:where/:not` carry children
    PseudoClass,
    ClassSelector,
    AttributeSelector,
    MediaState,
    ContainerState,
    SupportsState,
    RootState,
    OwnState,
    StartingState,
    /// Comparison inside at-rule bodies: `< > <= >= =`
    StateOperator,
    StateAlias,
    SubElement,
    SelectorAffix,
    /// `@keyframes`, `@properties`
    AtRule,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace
    }

    /// Kinds produced only by the state-key grammar.
    pub fn is_state_only(self) -> bool {
        self >= TokenKind::DefaultState
    }
}

/// A classified lexical unit.
///
/// `text` always equals `input[span]` of the string the token was produced from.
/// `children` is non-empty only for nested structure (function arguments,
/// pseudo-class selector lists, at-rule bodies); child spans are relative to
/// the same string as the parent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Token {
    /// Slice `span` out of `input`.
    pub fn new(kind: TokenKind, input: &str, span: Span) -> Self {
        Self {
            kind,
            text: input[span.range()].to_string(),
            span,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }

    /// Rebase this token and all its children by `base` bytes.
    pub fn shifted(mut self, base: usize) -> Self {
        self.shift_in_place(base);
        self
    }

    fn shift_in_place(&mut self, base: usize) {
        self.span = self.span.shift(base);
        for child in &mut self.children {
            child.shift_in_place(base);
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first walk over this token and every descendant.
    pub fn walk(&self) -> impl Iterator<Item = &Token> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let token = stack.pop()?;
            stack.extend(token.children.iter().rev());
            Some(token)
        })
    }
}

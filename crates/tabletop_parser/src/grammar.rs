//! The configuration grammars.
//!
//! Grammars are built once, leaf tokens first and composite rules last, and
//! live in a process-wide [`Grammars`] registry. Each entry point pairs a
//! combinator tree with the extraction function for its typed value.
//!
//! ```text
//! Die       = Optional(count) "d" LongestOf{4,6,8,10,12,20,100}
//! RollValue = FirstOf(Die, count)
//! Roll      = RollValue Many(OneOf{"+","-"} RollValue)
//!
//! IdAttr    = Optional(identifier) ":" Optional(attribute)
//! IdAttrs   = SepBy(" ", IdAttr)
//!
//! KeyList        = "[" SepBy(",", OneOf{alt,ctrl,shift}) "]"
//! EventWithKeys  = OneOf{click,dblclick,auxclick,contextmenu} Optional(KeyList)
//! EventsWithKeys = SepBy(" ", EventWithKeys)
//!
//! ActionArgs   = "(" SepBy(",", [^,)]+) ")"
//! EventAction  = EventWithKeys ":" actionName Optional(ActionArgs)
//! EventActions = SepBy(" ", EventAction)
//! ```

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tabletop_foundation::{
    Error, EventActionSpec, EventKeySpec, EventKind, IdAttrRef, ModifierKey, Result, RollSpec,
    RollTerm,
};
use tracing::{debug, trace};

use crate::combinator::{FirstOf, LongestOf, OneOf, Sequence};
use crate::error::GrammarError;
use crate::extract;
use crate::matcher::{Matcher, Terminal};
use crate::repeat::{Repeat, SepBy};
use crate::result::{Failure, ParseResult};

/// Producer names of the grammar rules, as they appear in parse trees.
pub mod rules {
    /// A die term such as `2d6` or `d20`.
    pub const DIE: &str = "Die";
    /// A die term or a flat number.
    pub const ROLL_VALUE: &str = "RollValue";
    /// A sign followed by a roll value.
    pub const SIGNED_VALUE: &str = "SignedValue";
    /// A complete roll expression.
    pub const ROLL: &str = "Roll";
    /// The die faces after `d`.
    pub const FACES: &str = "Faces";
    /// `+` or `-`.
    pub const SIGN: &str = "Sign";
    /// An `id:attribute` reference.
    pub const ID_ATTR: &str = "IdAttr";
    /// Space-separated `IdAttr` list.
    pub const ID_ATTRS: &str = "IdAttrs";
    /// An event name.
    pub const EVENT_NAME: &str = "EventName";
    /// A modifier key name.
    pub const MODIFIER_KEY: &str = "ModifierKey";
    /// A bracketed modifier key list.
    pub const KEY_LIST: &str = "KeyList";
    /// An event with optional modifier keys.
    pub const EVENT_WITH_KEYS: &str = "EventWithKeys";
    /// Space-separated `EventWithKeys` list.
    pub const EVENTS_WITH_KEYS: &str = "EventsWithKeys";
    /// A parenthesised argument list.
    pub const ACTION_ARGS: &str = "ActionArgs";
    /// An event bound to an action.
    pub const EVENT_ACTION: &str = "EventAction";
    /// Space-separated `EventAction` list.
    pub const EVENT_ACTIONS: &str = "EventActions";
}

/// A grammar entry point: a combinator tree and the extractor for its value.
pub struct Grammar<T> {
    name: &'static str,
    root: Matcher,
    extract: fn(&ParseResult) -> T,
}

impl<T> Grammar<T> {
    fn new(name: &'static str, root: Matcher, extract: fn(&ParseResult) -> T) -> Self {
        Self {
            name,
            root,
            extract,
        }
    }

    /// Name of this grammar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The root matcher, for composing into larger grammars.
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.root
    }

    /// Parses a prefix of `input`. The result may leave input unconsumed.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        self.root.parse(input)
    }

    /// Parses `input`, failing unless the whole string is consumed.
    #[must_use]
    pub fn parse_complete(&self, input: &str) -> ParseResult {
        let result = self.parse(input);
        if result.is_ok() && result.length() != input.len() {
            return ParseResult::failure(
                Arc::from(result.producer()),
                Failure::Unconsumed {
                    consumed: result.length(),
                    total: input.len(),
                },
            );
        }
        result
    }

    /// Extracts the typed value from a successful parse.
    ///
    /// # Panics
    /// Panics if `result` is a failure or was not produced by this grammar.
    /// Both are caller bugs, not bad input; use [`Grammar::parse_str`] to
    /// handle bad input.
    #[must_use]
    pub fn extract(&self, result: &ParseResult) -> T {
        if let Some(failure) = result.failure_reason() {
            panic!("{} extraction called on a failed parse: {failure}", self.name);
        }
        (self.extract)(result)
    }

    /// Parses an entire configuration value into its typed form.
    ///
    /// # Errors
    /// Returns a parse error if the grammar rejects the input, or an
    /// incomplete error if it leaves trailing input.
    pub fn parse_str(&self, input: &str) -> Result<T> {
        trace!(grammar = self.name, input, "parsing configuration value");
        let result = self.parse(input);
        if let Some(failure) = result.failure_reason() {
            debug!(grammar = self.name, input, %failure, "configuration value rejected");
            return Err(Error::parse(self.name, input, failure.to_string()));
        }
        if result.length() != input.len() {
            debug!(
                grammar = self.name,
                input,
                consumed = result.length(),
                "configuration value has trailing input"
            );
            return Err(Error::incomplete(self.name, input, result.length()));
        }
        Ok((self.extract)(&result))
    }
}

impl<T> fmt::Debug for Grammar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Leaf tokens shared by the grammars.
struct Tokens {
    count: Matcher,
    d: Matcher,
    faces: Matcher,
    sign: Matcher,
    identifier: Matcher,
    attribute: Matcher,
    colon: Matcher,
    space: Matcher,
    comma: Matcher,
    open_bracket: Matcher,
    close_bracket: Matcher,
    open_paren: Matcher,
    close_paren: Matcher,
    event_name: Matcher,
    modifier_key: Matcher,
    action_name: Matcher,
    argument: Matcher,
}

fn terminal(pattern: &str) -> std::result::Result<Matcher, GrammarError> {
    Terminal::new(pattern).map(Matcher::from)
}

fn literal(text: &str) -> std::result::Result<Matcher, GrammarError> {
    Terminal::literal(text).map(Matcher::from)
}

fn literals<'a>(
    words: impl IntoIterator<Item = &'a str>,
) -> std::result::Result<Vec<Matcher>, GrammarError> {
    words.into_iter().map(literal).collect()
}

impl Tokens {
    fn build() -> std::result::Result<Self, GrammarError> {
        let faces: Vec<String> = RollTerm::FACES.iter().map(ToString::to_string).collect();
        Ok(Self {
            // Non-zero leading digit keeps counts >= 1; nine digits fit in u32.
            count: terminal("[1-9][0-9]{0,8}")?,
            d: literal("d")?,
            faces: LongestOf::new(literals(faces.iter().map(String::as_str))?)
                .named(rules::FACES)
                .into(),
            sign: OneOf::new(literals(["+", "-"])?).named(rules::SIGN).into(),
            identifier: terminal("[a-zA-Z_][a-zA-Z0-9_.]*")?,
            attribute: terminal("[a-zA-Z_][a-zA-Z0-9_]*")?,
            colon: literal(":")?,
            space: literal(" ")?,
            comma: literal(",")?,
            open_bracket: literal("[")?,
            close_bracket: literal("]")?,
            open_paren: literal("(")?,
            close_paren: literal(")")?,
            event_name: OneOf::new(literals(EventKind::ALL.map(EventKind::as_str))?)
                .named(rules::EVENT_NAME)
                .into(),
            modifier_key: OneOf::new(literals(ModifierKey::ALL.map(ModifierKey::as_str))?)
                .named(rules::MODIFIER_KEY)
                .into(),
            action_name: terminal("[a-zA-Z_][a-zA-Z0-9_]*")?,
            argument: terminal("[^,)]+")?,
        })
    }
}

/// Registry of every configuration grammar.
#[derive(Debug)]
pub struct Grammars {
    /// Dice-roll expressions: `2d6+1d4-3`.
    pub roll: Grammar<RollSpec>,
    /// Element/attribute references: `hero.1:hp`.
    pub id_attr: Grammar<IdAttrRef>,
    /// Space-separated references: `hero:str hero:dex`.
    pub id_attrs: Grammar<Vec<IdAttrRef>>,
    /// Events with modifier keys: `click[ctrl,shift]`.
    pub event_with_keys: Grammar<EventKeySpec>,
    /// Space-separated events with modifier keys.
    pub events_with_keys: Grammar<Vec<EventKeySpec>>,
    /// Event-triggered actions: `click[ctrl]:roll(str,Mod,2d6+3)`.
    pub event_action: Grammar<EventActionSpec>,
    /// Space-separated event-triggered actions.
    pub event_actions: Grammar<Vec<EventActionSpec>>,
}

impl Grammars {
    /// Builds every grammar from scratch.
    ///
    /// Most callers want the shared registry from [`grammars`].
    ///
    /// # Errors
    /// Returns an error if a token pattern or repetition is malformed.
    pub fn build() -> std::result::Result<Self, GrammarError> {
        let t = Tokens::build()?;

        let die: Matcher = Sequence::new(vec![
            Repeat::optional(t.count.clone()).into(),
            t.d.clone(),
            t.faces.clone(),
        ])
        .named(rules::DIE)
        .into();
        // Die first, so "2d6" is not taken as the flat number "2".
        let roll_value: Matcher = FirstOf::new(vec![die, t.count.clone()])
            .named(rules::ROLL_VALUE)
            .into();
        let signed_value = Sequence::new(vec![t.sign.clone(), roll_value.clone()])
            .named(rules::SIGNED_VALUE);
        let roll: Matcher = Sequence::new(vec![roll_value, Repeat::many(signed_value.into())?.into()])
            .named(rules::ROLL)
            .into();

        let id_attr: Matcher = Sequence::new(vec![
            Repeat::optional(t.identifier.clone()).into(),
            t.colon.clone(),
            Repeat::optional(t.attribute.clone()).into(),
        ])
        .named(rules::ID_ATTR)
        .into();
        let id_attrs: Matcher = SepBy::new(t.space.clone(), id_attr.clone())?
            .named(rules::ID_ATTRS)
            .into();

        let key_list = Sequence::new(vec![
            t.open_bracket.clone(),
            SepBy::new(t.comma.clone(), t.modifier_key.clone())?.into(),
            t.close_bracket.clone(),
        ])
        .named(rules::KEY_LIST);
        let event_with_keys: Matcher = Sequence::new(vec![
            t.event_name.clone(),
            Repeat::optional(key_list.into()).into(),
        ])
        .named(rules::EVENT_WITH_KEYS)
        .into();
        let events_with_keys: Matcher = SepBy::new(t.space.clone(), event_with_keys.clone())?
            .named(rules::EVENTS_WITH_KEYS)
            .into();

        let action_args = Sequence::new(vec![
            t.open_paren.clone(),
            SepBy::new(t.comma.clone(), t.argument.clone())?.into(),
            t.close_paren.clone(),
        ])
        .named(rules::ACTION_ARGS);
        let event_action: Matcher = Sequence::new(vec![
            event_with_keys.clone(),
            t.colon.clone(),
            t.action_name.clone(),
            Repeat::optional(action_args.into()).into(),
        ])
        .named(rules::EVENT_ACTION)
        .into();
        let event_actions: Matcher = SepBy::new(t.space.clone(), event_action.clone())?
            .named(rules::EVENT_ACTIONS)
            .into();

        Ok(Self {
            roll: Grammar::new("roll", roll, extract::roll),
            id_attr: Grammar::new("id:attr reference", id_attr, extract::id_attr),
            id_attrs: Grammar::new("id:attr list", id_attrs, extract::id_attrs),
            event_with_keys: Grammar::new("event", event_with_keys, extract::event_keys),
            events_with_keys: Grammar::new("event list", events_with_keys, extract::events_with_keys),
            event_action: Grammar::new("event action", event_action, extract::event_action),
            event_actions: Grammar::new("event action list", event_actions, extract::event_actions),
        })
    }
}

static GRAMMARS: Lazy<Grammars> = Lazy::new(|| match Grammars::build() {
    Ok(grammars) => grammars,
    Err(err) => panic!("built-in grammars failed to build: {err}"),
});

/// Returns the shared, immutable grammar registry.
///
/// # Panics
/// Panics on first use if a built-in grammar is malformed, which the tests
/// rule out.
#[must_use]
pub fn grammars() -> &'static Grammars {
    &GRAMMARS
}

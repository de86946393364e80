use std::{collections::HashMap, fmt, str::FromStr};

use itertools::Itertools;
use log::trace;
use pest::{
    Parser,
    error::{Error, ErrorVariant},
    iterators::Pair,
};
use pest_derive::Parser;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::Trigger;

#[derive(Parser)]
#[grammar = "./notation.pest"]
struct NotationParser;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error(transparent)]
    Syntax(#[from] Box<Error<Rule>>),
    #[error("There is no trigger called `{{{0}}}`")]
    UnknownTrigger(String),
}

/// A piece of algorithm markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment<'a> {
    /// `(R U R' U')`, moves that are executed as one motion
    Group(&'a str),
    /// `~U' R'~`, moves that cancel out once triggers are joined
    Cancelled(&'a str),
    /// `**U**`, the moves to pay attention to
    Highlight(&'a str),
    /// `[u2]`, a setup turn or cube rotation
    Rotation(&'a str),
    /// `{sexy}`, a reference to a trigger by key
    Trigger(&'a str),
    Text(&'a str),
}

impl<'a> Segment<'a> {
    /// The text between the markers
    pub fn content(&self) -> &'a str {
        match *self {
            Segment::Group(s)
            | Segment::Cancelled(s)
            | Segment::Highlight(s)
            | Segment::Rotation(s)
            | Segment::Trigger(s)
            | Segment::Text(s) => s,
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Group(s) => write!(f, "({s})"),
            Segment::Cancelled(s) => write!(f, "~{s}~"),
            Segment::Highlight(s) => write!(f, "**{s}**"),
            Segment::Rotation(s) => write!(f, "[{s}]"),
            Segment::Trigger(s) => write!(f, "{{{s}}}"),
            Segment::Text(s) => f.write_str(s),
        }
    }
}

/// Splits algorithm text into its markup segments. Markers without a partner are kept as
/// plain text.
pub fn parse_markup(text: &str) -> Result<Vec<Segment<'_>>, NotationError> {
    let markup = NotationParser::parse(Rule::markup, text).map_err(Box::new)?;

    let segments = markup
        .flat_map(Pair::into_inner)
        .filter_map(|pair| {
            let s = pair.as_str();
            let inner = |open: usize, close: usize| &s[open..s.len() - close];

            Some(match pair.as_rule() {
                Rule::group => Segment::Group(inner(1, 1)),
                Rule::cancelled => Segment::Cancelled(inner(1, 1)),
                Rule::highlight => Segment::Highlight(inner(2, 2)),
                Rule::rotation => Segment::Rotation(inner(1, 1)),
                Rule::trigger => Segment::Trigger(inner(1, 1)),
                Rule::text => Segment::Text(s),
                _ => return None,
            })
        })
        .collect();

    Ok(segments)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layer {
    R,
    L,
    U,
    D,
    F,
    B,
    WideR,
    WideL,
    WideU,
    WideD,
    WideF,
    WideB,
    M,
    E,
    S,
    X,
    Y,
    Z,
}

impl Layer {
    pub const ALL: [Layer; 18] = {
        use Layer::*;
        let v = [
            R, L, U, D, F, B, WideR, WideL, WideU, WideD, WideF, WideB, M, E, S, X, Y, Z,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn symbol(self) -> char {
        match self {
            Layer::R => 'R',
            Layer::L => 'L',
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::WideR => 'r',
            Layer::WideL => 'l',
            Layer::WideU => 'u',
            Layer::WideD => 'd',
            Layer::WideF => 'f',
            Layer::WideB => 'b',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
            Layer::X => 'x',
            Layer::Y => 'y',
            Layer::Z => 'z',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Layer> {
        Layer::ALL.into_iter().find(|layer| layer.symbol() == symbol)
    }
}

/// A turn of one layer by a number of clockwise quarter turns, 1 to 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub layer: Layer,
    pub amount: u8,
}

impl Move {
    /// Returns `None` for a turn that does nothing
    pub fn new(layer: Layer, quarter_turns: u8) -> Option<Move> {
        let amount = quarter_turns % 4;
        (amount != 0).then_some(Move { layer, amount })
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            layer: self.layer,
            amount: 4 - self.amount,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.amount {
            1 => "",
            2 => "²",
            _ => "'",
        };

        write!(f, "{}{suffix}", self.layer.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> MoveSequence {
        MoveSequence(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.0.iter()
    }

    /// The sequence that undoes this one
    #[must_use]
    pub fn inverse(&self) -> MoveSequence {
        MoveSequence(self.0.iter().rev().map(|mv| mv.inverse()).collect())
    }

    /// Merges neighbouring turns of the same layer and drops those that cancel
    #[must_use]
    pub fn simplified(&self) -> MoveSequence {
        let mut out: Vec<Move> = Vec::with_capacity(self.0.len());

        for &mv in &self.0 {
            match out.last_mut() {
                Some(last) if last.layer == mv.layer => {
                    match Move::new(mv.layer, last.amount + mv.amount) {
                        Some(merged) => *last = merged,
                        None => {
                            out.pop();
                        }
                    }
                }
                _ => out.push(mv),
            }
        }

        MoveSequence(out)
    }

    #[must_use]
    pub fn repeat(&self, times: usize) -> MoveSequence {
        MoveSequence(self.0.repeat(times))
    }

    pub fn extend(&mut self, other: MoveSequence) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NotationParser::parse(Rule::moves, s).map_err(Box::new)?;

        let mut moves = Vec::new();
        for pair in parsed.flat_map(Pair::into_inner) {
            if let Rule::turn = pair.as_rule() {
                moves.extend(parse_turn(pair)?);
            }
        }

        Ok(MoveSequence(moves))
    }
}

fn parse_turn(pair: Pair<'_, Rule>) -> Result<Option<Move>, Box<Error<Rule>>> {
    let span = pair.as_span();

    let mut layer = None;
    let mut quarter_turns = 1;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::layer => layer = part.as_str().chars().next().and_then(Layer::from_symbol),
            Rule::amount => {
                quarter_turns *= if matches!(part.as_str(), "2" | "²") { 2 } else { 3 };
            }
            Rule::prime => quarter_turns *= 3,
            _ => {}
        }
    }

    let Some(layer) = layer else {
        return Err(Box::new(Error::new_from_span(
            ErrorVariant::CustomError {
                message: "Expected a layer to turn".to_owned(),
            },
            span,
        )));
    };

    Ok(Move::new(layer, quarter_turns))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Definition {
    moves: String,
    inverted: bool,
}

/// Trigger keys and the moves they stand for. A trigger whose inverse has its own name,
/// like `{sune}`, answers to both keys.
#[derive(Debug, Clone, Default)]
pub struct TriggerBook {
    definitions: HashMap<String, Definition>,
}

impl TriggerBook {
    pub fn new<'a>(triggers: impl IntoIterator<Item = &'a Trigger>) -> TriggerBook {
        let mut book = TriggerBook::default();

        for trigger in triggers {
            book.define(trigger.key(), trigger.moves);

            if let Some(inverse_key) = trigger.inverse_key() {
                book.definitions.insert(
                    inverse_key.to_owned(),
                    Definition {
                        moves: trigger.moves.to_owned(),
                        inverted: true,
                    },
                );
            }
        }

        book
    }

    pub fn define(&mut self, key: &str, moves: &str) {
        self.definitions.insert(
            key.to_owned(),
            Definition {
                moves: moves.to_owned(),
                inverted: false,
            },
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str).sorted()
    }

    pub fn resolve(&self, key: &str) -> Result<MoveSequence, NotationError> {
        let definition = self
            .definitions
            .get(key.trim())
            .ok_or_else(|| NotationError::UnknownTrigger(key.trim().to_owned()))?;

        let moves = definition.moves.parse::<MoveSequence>()?;

        Ok(if definition.inverted {
            moves.inverse()
        } else {
            moves
        })
    }
}

/// Splits the `'²` in `{sexy}'²` off the text that follows a trigger
fn split_modifiers(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !matches!(c, '\'' | '’' | '2' | '²' | '3' | '³'))
        .unwrap_or(text.len());

    text.split_at(end)
}

fn apply_modifiers(mut moves: MoveSequence, modifiers: &str) -> MoveSequence {
    for modifier in modifiers.chars() {
        moves = match modifier {
            '\'' | '’' => moves.inverse(),
            '2' | '²' => moves.repeat(2),
            _ => moves.repeat(3),
        };
    }

    moves
}

/// The moves a piece of markup actually performs: cancelled moves are dropped, triggers
/// are replaced by their moves, and any modifiers written right after a trigger apply to
/// the whole trigger.
pub fn expand(text: &str, book: &TriggerBook) -> Result<MoveSequence, NotationError> {
    let mut moves = MoveSequence::default();
    let mut segments = parse_markup(text)?.into_iter().peekable();

    while let Some(segment) = segments.next() {
        match segment {
            Segment::Cancelled(_) => {}
            Segment::Trigger(key) => {
                let mut modifiers = "";
                if let Some(Segment::Text(next)) = segments.peek_mut() {
                    let (head, rest) = split_modifiers(*next);
                    modifiers = head;
                    *next = rest;
                }

                trace!("Expanding {{{key}}}{modifiers}");
                moves.extend(apply_modifiers(book.resolve(key)?, modifiers));
            }
            Segment::Group(inner) | Segment::Highlight(inner) | Segment::Rotation(inner) => {
                moves.extend(expand(inner, book)?);
            }
            Segment::Text(text) => moves.extend(text.parse::<MoveSequence>()?),
        }
    }

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::{
        Layer, Move, MoveSequence, NotationError, Segment, TriggerBook, expand, parse_markup,
    };

    fn moves(s: &str) -> MoveSequence {
        s.parse().unwrap()
    }

    fn book() -> TriggerBook {
        let mut book = TriggerBook::default();
        book.define("sexy", "R U R' U'");
        book.define("sledge", "R' F R F'");
        book
    }

    #[test]
    fn markup_follows_precedence() {
        let segments = parse_markup("F (R U R' U') ~U'~ **U** [u2] {sexy}'²").unwrap();
        assert_eq!(
            segments,
            [
                Segment::Text("F "),
                Segment::Group("R U R' U'"),
                Segment::Text(" "),
                Segment::Cancelled("U'"),
                Segment::Text(" "),
                Segment::Highlight("U"),
                Segment::Text(" "),
                Segment::Rotation("u2"),
                Segment::Text(" "),
                Segment::Trigger("sexy"),
                Segment::Text("'²"),
            ]
        );
    }

    #[test]
    fn groups_cannot_contain_cancellations() {
        let segments = parse_markup("(R U² R' U' R ~U' R') (R U²~ **U** R'").unwrap();
        assert_eq!(
            segments,
            [
                Segment::Text("(R U² R' U' R "),
                Segment::Cancelled("U' R') (R U²"),
                Segment::Text(" "),
                Segment::Highlight("U"),
                Segment::Text(" R'"),
            ]
        );
    }

    #[test]
    fn unbalanced_markers_are_text() {
        assert_eq!(parse_markup("R {sexy").unwrap(), [Segment::Text("R {sexy")]);
        assert!(parse_markup("").unwrap().is_empty());
        assert_eq!(Segment::Trigger("sexy").to_string(), "{sexy}");
    }

    #[test]
    fn moves_parse_and_display() {
        let parsed = moves("R U2 R' (U' R U’ R²) x y3");
        assert_eq!(parsed.len(), 9);
        assert_eq!(parsed.to_string(), "R U² R' U' R U' R² x y'");
        assert_eq!(parsed.moves()[0], Move::new(Layer::R, 5).unwrap());

        assert_eq!(moves("R2'"), moves("R2"));
        assert_eq!(
            moves("r'"),
            MoveSequence::new(vec![Move {
                layer: Layer::WideR,
                amount: 3,
            }])
        );
        assert!(moves("").is_empty());
    }

    #[test]
    fn bad_moves_are_syntax_errors() {
        assert!(matches!(
            "R Q".parse::<MoveSequence>(),
            Err(NotationError::Syntax(_))
        ));
        assert!("R 2".parse::<MoveSequence>().is_err());
    }

    #[test]
    fn inverse_and_simplify() {
        assert_eq!(moves("R U R' U'").inverse(), moves("U R U' R'"));
        assert_eq!(moves("R U U' R'").simplified(), MoveSequence::default());
        assert_eq!(moves("R R U2 U").simplified(), moves("R2 U'"));
        assert_eq!(moves("R U2 R'").inverse().inverse(), moves("R U2 R'"));
    }

    #[test]
    fn expansion_resolves_triggers() {
        let book = book();

        assert_eq!(
            expand("F {sexy} F'", &book).unwrap(),
            moves("F R U R' U' F'")
        );
        assert_eq!(expand("{sexy}'", &book).unwrap(), moves("U R U' R'"));
        assert_eq!(
            expand("{sexy}2", &book).unwrap(),
            moves("R U R' U' R U R' U'")
        );
        assert_eq!(
            expand("[u2] F {sexy}'² F'", &book).unwrap(),
            moves("u2 F U R U' R' U R U' R' F'")
        );
        assert_eq!(expand("R ~U~ **U'** R'", &book).unwrap(), moves("R U' R'"));
        assert_eq!(
            expand("{chair}", &book),
            Err(NotationError::UnknownTrigger("chair".to_owned()))
        );
    }
}

//! CSS2 value types and their conversion from [`Term`]s.
//!
//! - [CSS 2.1 § 4.3 Values](https://www.w3.org/TR/CSS2/syndata.html#values)
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)
//! - [CSS 2.1 § 15 Fonts](https://www.w3.org/TR/CSS2/fonts.html)

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::color::Rgb;
use crate::term::{NumUnit, Operator, Term, TermValue};

/// User agent default font size.
/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
/// "Initial: medium". Medium is 16px, as in common browsers.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// [§ 15.7](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
/// "a scaling factor of 1.2 is suggested between adjacent indexes"
const FONT_SIZE_SCALE: f64 = 1.2;

/// [§ 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)
/// "1in is equal to 96px"
const PX_PER_IN: f64 = 96.0;

// ─────────────────────────────────────────────────────────────────────────────
// Lengths
// ─────────────────────────────────────────────────────────────────────────────

/// A computed length.
///
/// [§ 6.1.2 Computed values](https://www.w3.org/TR/CSS2/cascade.html#computed-value)
/// "relative units (em, ex, px) must be made absolute by multiplying with
/// the appropriate reference size". Percentages stay relative; they are
/// resolved against the containing block during layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Length {
    /// Absolute length in CSS pixels.
    Px(f64),
    /// [§ 4.3.3 Percentages](https://www.w3.org/TR/CSS2/syndata.html#percentage-units)
    Percent(f64),
}

impl Length {
    /// `0`
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolve to pixels, with percentages taken of `reference`.
    #[must_use]
    pub fn to_px(self, reference: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => pct * reference / 100.0,
        }
    }

    const fn is_negative(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v < 0.0,
        }
    }
}

/// `<length> | <percentage> | auto`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthOrAuto {
    /// [§ 4.4 auto](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    Auto,
    /// A length or percentage.
    Length(Length),
}

impl LengthOrAuto {
    /// Whether the value is `auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// `<length> | <percentage> | none`, for `max-width` and `max-height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthOrNone {
    /// No limit.
    None,
    /// A length or percentage.
    Length(Length),
}

/// [§ 10.8 Line height](https://www.w3.org/TR/CSS2/visudet.html#line-height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LineHeight {
    /// "Tells user agents to set the used value to a 'reasonable' value
    /// based on the font of the element."
    Normal,
    /// "The used value of the property is this number multiplied by the
    /// element's font size." Inherited as the number.
    Number(f64),
    /// A length, or a percentage already taken of the font size.
    Px(f64),
}

// ─────────────────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────────────────

/// [§ 4.3.6 Colors](https://www.w3.org/TR/CSS2/syndata.html#color-units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    /// An explicit color.
    Rgb(Rgb),
    /// [§ 14.2.1](https://www.w3.org/TR/CSS2/colors.html#propdef-background-color)
    /// "The background color is transparent"
    Transparent,
    /// The element's `color`, used for the initial value of `border-color`:
    /// "If an element's border color is not specified with a border property,
    /// user agents must use the value of the element's 'color' property".
    CurrentColor,
}

impl Color {
    /// Resolve against the element's `color`. Transparent has no RGB value.
    #[must_use]
    pub const fn resolve(self, current: Rgb) -> Option<Rgb> {
        match self {
            Self::Rgb(rgb) => Some(rgb),
            Self::Transparent => None,
            Self::CurrentColor => Some(current),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Box sides
// ─────────────────────────────────────────────────────────────────────────────

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Side {
    /// All sides in `top right bottom left` order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A value per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sides<T> {
    /// Top edge.
    pub top: T,
    /// Right edge.
    pub right: T,
    /// Bottom edge.
    pub bottom: T,
    /// Left edge.
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// The same value on every edge.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    /// "If there is only one component value, it applies to all sides. If
    /// there are two values, the top and bottom margins are set to the first
    /// value and the right and left margins are set to the second. If there
    /// are three values, the top is set to the first value, the left and
    /// right are set to the second, and the bottom is set to the third. If
    /// there are four values, they apply to the top, right, bottom, and left,
    /// respectively."
    #[must_use]
    pub fn from_list(values: &[T]) -> Option<Self> {
        let (top, right, bottom, left) = match values {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            _ => return None,
        };
        Some(Self {
            top: top.clone(),
            right: right.clone(),
            bottom: bottom.clone(),
            left: left.clone(),
        })
    }
}

impl<T> Sides<T> {
    /// The value on one edge.
    #[must_use]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Mutable access to one edge.
    pub const fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keywords
// ─────────────────────────────────────────────────────────────────────────────

/// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum DisplayType {
    #[default]
    Inline,
    Block,
    ListItem,
    RunIn,
    InlineBlock,
    Table,
    InlineTable,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    TableRow,
    TableColumnGroup,
    TableColumn,
    TableCell,
    TableCaption,
    None,
}

impl DisplayType {
    /// [§ 9.7 Relationships between 'display', 'position', and 'float'](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    /// The "computed value" column of the table: "inline-table" becomes
    /// "table", everything inline-level or internal to a table becomes
    /// "block".
    #[must_use]
    pub const fn blockified(self) -> Self {
        match self {
            Self::InlineTable => Self::Table,
            Self::Inline
            | Self::RunIn
            | Self::TableRowGroup
            | Self::TableColumn
            | Self::TableColumnGroup
            | Self::TableHeaderGroup
            | Self::TableFooterGroup
            | Self::TableRow
            | Self::TableCell
            | Self::TableCaption
            | Self::InlineBlock => Self::Block,
            other => other,
        }
    }
}

/// [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// [§ 9.5.1 The 'float' property](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Float {
    Left,
    Right,
    #[default]
    None,
}

/// [§ 9.5.2 The 'clear' property](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Clear {
    #[default]
    None,
    Left,
    Right,
    Both,
}

/// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

/// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    /// "none: No border; the computed border width is zero."
    /// "hidden: Same as 'none'"
    #[must_use]
    pub const fn has_no_width(self) -> bool {
        matches!(self, Self::None | Self::Hidden)
    }
}

/// [§ 15.4 Font styling](https://www.w3.org/TR/CSS2/fonts.html#font-styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// [§ 15.5 Small-caps](https://www.w3.org/TR/CSS2/fonts.html#small-caps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

/// [§ 16.2 Alignment](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// [§ 16.6 White space](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum WhiteSpace {
    #[default]
    Normal,
    Pre,
    Nowrap,
    PreWrap,
    PreLine,
}

/// [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#list-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ListStyleType {
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    LowerLatin,
    UpperLatin,
    Armenian,
    Georgian,
    LowerAlpha,
    UpperAlpha,
    None,
}

// ─────────────────────────────────────────────────────────────────────────────
// Term conversion
// ─────────────────────────────────────────────────────────────────────────────

/// The only term of a one-term value.
pub(super) const fn single(value: &[Term]) -> Option<&Term> {
    match value {
        [term] => Some(term),
        _ => None,
    }
}

/// A keyword value, parsed into its enum.
pub(super) fn keyword<T: FromStr>(term: &Term) -> Option<T> {
    term.as_ident()?.parse().ok()
}

/// [§ 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)
///
/// Relative units are made absolute against `font_size`. A bare `0` is a
/// length; any other unitless number is not.
pub(super) fn length(term: &Term, font_size: f64) -> Option<Length> {
    let num = term.as_number()?;
    let value = num.value;
    let px = match &num.unit {
        NumUnit::Percent => return Some(Length::Percent(value)),
        NumUnit::None if value == 0.0 => 0.0,
        NumUnit::Px => value,
        NumUnit::In => value * PX_PER_IN,
        NumUnit::Cm => value * PX_PER_IN / 2.54,
        NumUnit::Mm => value * PX_PER_IN / 25.4,
        // "1pt is equal to 1/72nd of 1in", "1pc is equal to 12pt"
        NumUnit::Pt => value * PX_PER_IN / 72.0,
        NumUnit::Pc => value * PX_PER_IN / 6.0,
        // "the 'font-size' of the relevant font"
        NumUnit::Em => value * font_size,
        // "In the cases where it is impossible or impractical to determine
        // the x-height, a value of 0.5em should be used."
        NumUnit::Ex => value * font_size * 0.5,
        _ => return None,
    };
    Some(Length::Px(px))
}

pub(super) fn non_negative_length(term: &Term, font_size: f64) -> Option<Length> {
    length(term, font_size).filter(|l| !l.is_negative())
}

pub(super) fn length_or_auto(term: &Term, font_size: f64) -> Option<LengthOrAuto> {
    if term.is_ident("auto") {
        return Some(LengthOrAuto::Auto);
    }
    length(term, font_size).map(LengthOrAuto::Length)
}

pub(super) fn length_or_none(term: &Term, font_size: f64) -> Option<LengthOrNone> {
    if term.is_ident("none") {
        return Some(LengthOrNone::None);
    }
    non_negative_length(term, font_size).map(LengthOrNone::Length)
}

/// [§ 4.3.6 Colors](https://www.w3.org/TR/CSS2/syndata.html#color-units)
pub(super) fn color(term: &Term) -> Option<Color> {
    match &term.value {
        TermValue::Rgb(rgb) => Some(Color::Rgb(*rgb)),
        TermValue::Hash(hex) => Rgb::from_hex(hex).map(Color::Rgb),
        TermValue::Ident(name) if name.eq_ignore_ascii_case("transparent") => {
            Some(Color::Transparent)
        }
        TermValue::Ident(name) => Rgb::from_named(name).map(Color::Rgb),
        _ => None,
    }
}

/// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
/// "thin <= medium <= thick"; 1px, 3px and 5px as in common browsers.
pub(super) fn border_width(term: &Term, font_size: f64) -> Option<f64> {
    match term.as_ident().map(str::to_ascii_lowercase).as_deref() {
        Some("thin") => Some(1.0),
        Some("medium") => Some(3.0),
        Some("thick") => Some(5.0),
        Some(_) => None,
        None => match non_negative_length(term, font_size)? {
            Length::Px(px) => Some(px),
            Length::Percent(_) => None,
        },
    }
}

/// The initial `border-width`.
pub(super) const MEDIUM_BORDER_WIDTH: f64 = 3.0;

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// Returns the computed size in pixels. Relative sizes, `em` and
/// percentages are taken of the parent's font size.
pub(super) fn font_size(term: &Term, parent_size: f64) -> Option<f64> {
    if let Some(name) = term.as_ident() {
        let steps: i32 = match name.to_ascii_lowercase().as_str() {
            "xx-small" => -3,
            "x-small" => -2,
            "small" => -1,
            "medium" => 0,
            "large" => 1,
            "x-large" => 2,
            "xx-large" => 3,
            "larger" => return Some(parent_size * FONT_SIZE_SCALE),
            "smaller" => return Some(parent_size / FONT_SIZE_SCALE),
            _ => return None,
        };
        return Some(DEFAULT_FONT_SIZE_PX * FONT_SIZE_SCALE.powi(steps));
    }
    match non_negative_length(term, parent_size)? {
        Length::Px(px) => Some(px),
        Length::Percent(pct) => Some(parent_size * pct / 100.0),
    }
}

/// [§ 15.6 Font boldness](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
pub(super) fn font_weight(term: &Term, parent_weight: u16) -> Option<u16> {
    if let Some(name) = term.as_ident() {
        return match name.to_ascii_lowercase().as_str() {
            // "'normal' is synonymous with '400', and 'bold' is synonymous with '700'"
            "normal" => Some(400),
            "bold" => Some(700),
            // "'bolder' selects the next weight that is assigned to a font
            // that is darker than the inherited one"
            "bolder" => Some(match parent_weight {
                0..400 => 400,
                400..600 => 700,
                _ => 900,
            }),
            "lighter" => Some(match parent_weight {
                0..=500 => 100,
                501..=700 => 400,
                _ => 700,
            }),
            _ => None,
        };
    }
    let num = term.as_number()?;
    let valid = num.unit == NumUnit::None
        && (100.0..=900.0).contains(&num.value)
        && num.value % 100.0 == 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let weight = num.value as u16;
    valid.then_some(weight)
}

/// [§ 10.8 Line height](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
pub(super) fn line_height(term: &Term, font_size: f64) -> Option<LineHeight> {
    if term.is_ident("normal") {
        return Some(LineHeight::Normal);
    }
    let num = term.as_number()?;
    if num.unit == NumUnit::None {
        return (num.value >= 0.0).then_some(LineHeight::Number(num.value));
    }
    match non_negative_length(term, font_size)? {
        Length::Px(px) => Some(LineHeight::Px(px)),
        // "The computed value of the property is this percentage multiplied
        // by the element's computed font size."
        Length::Percent(pct) => Some(LineHeight::Px(font_size * pct / 100.0)),
    }
}

/// [§ 15.3 Font family](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
///
/// "Font family names that happen to be the same as a keyword value
/// ('inherit', 'serif', 'sans-serif', 'monospace', 'fantasy', and
/// 'cursive') must be quoted". Unquoted names made of several identifiers
/// are joined with single spaces.
pub(super) fn font_family(value: &[Term]) -> Option<Vec<String>> {
    let mut families = Vec::new();
    let mut current = String::new();
    for term in value {
        match &term.value {
            TermValue::String(name) if current.is_empty() => current.push_str(name),
            TermValue::Ident(name) => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(name);
            }
            _ => return None,
        }
        match term.separator {
            Some(Operator::Comma) => families.push(std::mem::take(&mut current)),
            Some(Operator::Slash) => return None,
            None => {}
        }
    }
    if current.is_empty() {
        return None;
    }
    families.push(current);
    Some(families)
}

/// `auto | <integer>` for `z-index`; `auto` is `None`.
pub(super) fn z_index(term: &Term) -> Option<Option<i32>> {
    if term.is_ident("auto") {
        return Some(None);
    }
    let num = term.as_number()?;
    if num.unit != NumUnit::None || num.value.fract() != 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let index = num.value.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    Some(Some(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(css: &str) -> Term {
        crate::parser::parse_expression(css).unwrap().remove(0)
    }

    #[test]
    fn test_absolute_lengths() {
        assert_eq!(length(&term("1in"), 16.0), Some(Length::Px(96.0)));
        assert_eq!(length(&term("12pt"), 16.0), Some(Length::Px(16.0)));
        assert_eq!(length(&term("1pc"), 16.0), Some(Length::Px(16.0)));
        assert_eq!(length(&term("2em"), 10.0), Some(Length::Px(20.0)));
        assert_eq!(length(&term("2ex"), 10.0), Some(Length::Px(10.0)));
        assert_eq!(length(&term("0"), 10.0), Some(Length::ZERO));
        assert_eq!(length(&term("5"), 10.0), None);
        assert_eq!(length(&term("50%"), 10.0), Some(Length::Percent(50.0)));
    }

    #[test]
    fn test_sides_expansion() {
        let sides = Sides::from_list(&[1, 2, 3]).unwrap();
        assert_eq!(
            sides,
            Sides {
                top: 1,
                right: 2,
                bottom: 3,
                left: 2
            }
        );
        assert_eq!(Sides::from_list(&[1, 2]).unwrap().left, 2);
        assert!(Sides::<i32>::from_list(&[]).is_none());
        assert!(Sides::from_list(&[1, 2, 3, 4, 5]).is_none());
    }

    #[test]
    fn test_font_size_keywords() {
        assert_eq!(font_size(&term("medium"), 10.0), Some(16.0));
        assert_eq!(font_size(&term("larger"), 10.0), Some(12.0));
        assert_eq!(font_size(&term("150%"), 10.0), Some(15.0));
        assert_eq!(font_size(&term("2em"), 10.0), Some(20.0));
        assert_eq!(font_size(&term("-2px"), 10.0), None);
    }

    #[test]
    fn test_font_weight() {
        assert_eq!(font_weight(&term("bold"), 400), Some(700));
        assert_eq!(font_weight(&term("bolder"), 400), Some(700));
        assert_eq!(font_weight(&term("lighter"), 700), Some(400));
        assert_eq!(font_weight(&term("600"), 400), Some(600));
        assert_eq!(font_weight(&term("650"), 400), None);
    }

    #[test]
    fn test_font_family_list() {
        let value = crate::parser::parse_expression("\"Times New Roman\", Georgia Pro, serif")
            .unwrap();
        assert_eq!(
            font_family(&value),
            Some(vec![
                "Times New Roman".to_string(),
                "Georgia Pro".to_string(),
                "serif".to_string()
            ])
        );
    }

    #[test]
    fn test_display_blockification() {
        assert_eq!(DisplayType::Inline.blockified(), DisplayType::Block);
        assert_eq!(DisplayType::InlineTable.blockified(), DisplayType::Table);
        assert_eq!(DisplayType::ListItem.blockified(), DisplayType::ListItem);
        assert_eq!("table-cell".parse(), Ok(DisplayType::TableCell));
    }
}

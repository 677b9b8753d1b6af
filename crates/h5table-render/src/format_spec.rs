//! Numeric format tokens.
//!
//! A [`FormatSpec`] is parsed from the familiar printf/format-spec mini-language
//! used for floats:
//!
//! ```text
//! [[fill]align][sign][0][width][.precision][type]
//! ```
//!
//! | Part | Values |
//! |------|--------|
//! | `align` | `<` left, `>` right (default), `^` center, `=` pad between sign and digits |
//! | `sign` | `+` always, `-` negatives only (default), ` ` space for positives |
//! | `0` | zero padding, sign aware unless an explicit alignment is given |
//! | `type` | `e` `E` scientific, `f` `F` fixed, `g` `G` general, `%` percent, none |
//!
//! Scientific output always carries an exponent sign and at least two exponent
//! digits, so `1.0` with `10.3e` renders as ` 1.000e+00`.
//!
//! # Example
//!
//! ```rust
//! use h5table_render::FormatSpec;
//!
//! let spec = FormatSpec::parse("10.3e").unwrap();
//! assert_eq!(spec.format(1234.56), " 1.235e+03");
//!
//! let spec = FormatSpec::parse(".4g").unwrap();
//! assert_eq!(spec.format(0.000012346), "1.235e-05");
//! assert_eq!(spec.format(12.5), "12.5");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FormatSpecError;
use crate::util::{pad_with, Align};

/// Format token applied when the user does not give one.
pub const DEFAULT_FORMAT: &str = "10.3e";

/// Precision used by typed formats when the token has none.
const DEFAULT_PRECISION: usize = 6;

/// Largest precision `std::fmt` accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// How the digits of a value are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericStyle {
    /// `e`: `d.ddde+XX`
    Exponent,
    /// `E`: `d.dddE+XX`
    ExponentUpper,
    /// `f`: `ddd.ddd`
    Fixed,
    /// `F`: like `f`, with `NAN`/`INF`
    FixedUpper,
    /// `g`: fixed or exponent depending on magnitude, trailing zeros removed
    General,
    /// `G`: like `g` with an upper-case exponent marker
    GeneralUpper,
    /// `%`: value times 100 in fixed notation, followed by `%`
    Percent,
    /// No type: shortest representation that round-trips
    Shortest,
}

impl NumericStyle {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(NumericStyle::Exponent),
            'E' => Some(NumericStyle::ExponentUpper),
            'f' => Some(NumericStyle::Fixed),
            'F' => Some(NumericStyle::FixedUpper),
            'g' => Some(NumericStyle::General),
            'G' => Some(NumericStyle::GeneralUpper),
            '%' => Some(NumericStyle::Percent),
            _ => None,
        }
    }

    fn as_char(self) -> Option<char> {
        match self {
            NumericStyle::Exponent => Some('e'),
            NumericStyle::ExponentUpper => Some('E'),
            NumericStyle::Fixed => Some('f'),
            NumericStyle::FixedUpper => Some('F'),
            NumericStyle::General => Some('g'),
            NumericStyle::GeneralUpper => Some('G'),
            NumericStyle::Percent => Some('%'),
            NumericStyle::Shortest => None,
        }
    }

    fn is_upper(self) -> bool {
        matches!(
            self,
            NumericStyle::ExponentUpper | NumericStyle::FixedUpper | NumericStyle::GeneralUpper
        )
    }
}

/// Sign policy for non-negative values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sign {
    /// Only negative values get a sign.
    #[default]
    Minus,
    /// Every value gets a sign.
    Plus,
    /// Non-negative values get a leading space.
    Space,
}

impl Sign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Sign::Minus),
            '+' => Some(Sign::Plus),
            ' ' => Some(Sign::Space),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Sign::Minus => "",
            Sign::Plus => "+",
            Sign::Space => " ",
        }
    }
}

/// Alignment as written in a token. `AfterSign` is the `=` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldAlign {
    Cell(Align),
    AfterSign,
}

impl FieldAlign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(FieldAlign::Cell(Align::Left)),
            '>' => Some(FieldAlign::Cell(Align::Right)),
            '^' => Some(FieldAlign::Cell(Align::Center)),
            '=' => Some(FieldAlign::AfterSign),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            FieldAlign::Cell(Align::Left) => '<',
            FieldAlign::Cell(Align::Right) => '>',
            FieldAlign::Cell(Align::Center) => '^',
            FieldAlign::AfterSign => '=',
        }
    }
}

/// A parsed numeric format token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    fill: Option<char>,
    align: Option<FieldAlign>,
    sign: Sign,
    explicit_sign: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    style: NumericStyle,
}

impl Default for FormatSpec {
    /// `10.3e`
    fn default() -> Self {
        FormatSpec {
            width: Some(10),
            precision: Some(3),
            style: NumericStyle::Exponent,
            ..FormatSpec::empty()
        }
    }
}

impl FormatSpec {
    fn empty() -> Self {
        FormatSpec {
            fill: None,
            align: None,
            sign: Sign::Minus,
            explicit_sign: false,
            zero: false,
            width: None,
            precision: None,
            style: NumericStyle::Shortest,
        }
    }

    /// Parse a format token such as `10.3e`, `+.2f` or `>12g`.
    pub fn parse(token: &str) -> Result<Self, FormatSpecError> {
        Parser::new(token).parse()
    }

    /// Minimum field width, if any.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Requested precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Layout style.
    pub fn style(&self) -> NumericStyle {
        self.style
    }

    /// Render `value` according to this token.
    pub fn format(&self, value: f64) -> String {
        let negative = value.is_sign_negative() && !value.is_nan();
        let body = self.digits(value.abs());
        let sign = if negative { "-" } else { self.sign.prefix() };

        let width = self.width.unwrap_or(0);
        let fill = self.fill.unwrap_or(if self.zero { '0' } else { ' ' });

        let align = match self.align {
            Some(FieldAlign::Cell(align)) => align,
            Some(FieldAlign::AfterSign) => return pad_after_sign(sign, &body, width, fill),
            None if self.zero => return pad_after_sign(sign, &body, width, fill),
            None => Align::Right,
        };

        let mut signed = String::with_capacity(sign.len() + body.len());
        signed.push_str(sign);
        signed.push_str(&body);
        pad_with(&signed, width, align, fill)
    }

    /// Digits of a non-negative value, without sign or padding.
    fn digits(&self, value: f64) -> String {
        if !value.is_finite() {
            let word = if value.is_nan() { "nan" } else { "inf" };
            let word = if self.style.is_upper() {
                word.to_ascii_uppercase()
            } else {
                word.to_string()
            };
            return match self.style {
                NumericStyle::Percent => format!("{word}%"),
                _ => word,
            };
        }

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        match self.style {
            NumericStyle::Fixed | NumericStyle::FixedUpper => format!("{:.*}", precision, value),
            NumericStyle::Exponent => exponent(value, precision, 'e'),
            NumericStyle::ExponentUpper => exponent(value, precision, 'E'),
            NumericStyle::General => general(value, precision, 'e'),
            NumericStyle::GeneralUpper => general(value, precision, 'E'),
            NumericStyle::Percent => format!("{:.*}%", precision, value * 100.0),
            NumericStyle::Shortest => match self.precision {
                Some(p) => shortest_with_precision(value, p),
                None => shortest(value),
            },
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatSpec::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = self.fill {
            write!(f, "{fill}")?;
        }
        if let Some(align) = self.align {
            write!(f, "{}", align.as_char())?;
        }
        if self.explicit_sign {
            let c = match self.sign {
                Sign::Minus => '-',
                Sign::Plus => '+',
                Sign::Space => ' ',
            };
            write!(f, "{c}")?;
        }
        if self.zero {
            write!(f, "0")?;
        }
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        if let Some(c) = self.style.as_char() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

fn pad_after_sign(sign: &str, body: &str, width: usize, fill: char) -> String {
    let used = sign.chars().count() + body.chars().count();
    let mut out = String::from(sign);
    out.extend(std::iter::repeat(fill).take(width.saturating_sub(used)));
    out.push_str(body);
    out
}

/// Scientific notation with a signed, two-digit minimum exponent.
fn exponent(value: f64, precision: usize, marker: char) -> String {
    let formatted = format!("{:.*e}", precision, value);
    let (mantissa, exp) = split_exponent(&formatted);
    join_exponent(mantissa, exp, marker)
}

fn join_exponent(mantissa: &str, exp: i32, marker: char) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

/// Split Rust's `LowerExp` output (`1.234e3`) into mantissa and exponent.
fn split_exponent(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// Decimal exponent of `value` once rounded to `significant` digits.
fn rounded_exponent(value: f64, significant: usize) -> i32 {
    if value == 0.0 {
        return 0;
    }
    let formatted = format!("{:.*e}", significant.saturating_sub(1), value);
    split_exponent(&formatted).1
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// True when `-4 <= exp < limit`.
fn fixed_notation(exp: i32, limit: usize) -> bool {
    match usize::try_from(exp) {
        Ok(exp) => exp < limit,
        Err(_) => exp >= -4,
    }
}

/// Fractional digits that leave `precision` significant digits at exponent `exp`.
fn fixed_decimals(exp: i32, precision: usize) -> usize {
    let magnitude = exp.unsigned_abs() as usize;
    if exp < 0 {
        precision - 1 + magnitude
    } else {
        (precision - 1).saturating_sub(magnitude)
    }
}

/// `g`: `precision` significant digits, fixed when `-4 <= exp < precision`.
fn general(value: f64, precision: usize, marker: char) -> String {
    let precision = precision.max(1);
    let exp = rounded_exponent(value, precision);

    if fixed_notation(exp, precision) {
        let decimals = fixed_decimals(exp, precision);
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let formatted = format!("{:.*e}", precision - 1, value);
        let (mantissa, exp) = split_exponent(&formatted);
        join_exponent(strip_trailing_zeros(mantissa), exp, marker)
    }
}

/// No type with a precision: like `g`, but fixed output keeps one fractional
/// digit and exponent notation starts one digit earlier.
fn shortest_with_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let exp = rounded_exponent(value, precision);

    if fixed_notation(exp, precision - 1) {
        let decimals = fixed_decimals(exp, precision);
        let fixed = format!("{:.*}", decimals, value);
        let stripped = strip_trailing_zeros(&fixed);
        if stripped.contains('.') {
            stripped.to_string()
        } else {
            format!("{stripped}.0")
        }
    } else {
        let formatted = format!("{:.*e}", precision - 1, value);
        let (mantissa, exp) = split_exponent(&formatted);
        join_exponent(strip_trailing_zeros(mantissa), exp, 'e')
    }
}

/// Shortest round-trip digits, fixed for `-4 <= exp < 16`, otherwise exponent.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }

    // `{:e}` without precision yields the shortest digits that round-trip.
    let formatted = format!("{:e}", value);
    let (mantissa, exp) = split_exponent(&formatted);

    if !(-4..16).contains(&exp) {
        return join_exponent(mantissa, exp, 'e');
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let point = exp as usize + 1;
    if digits.len() <= point {
        let zeros = "0".repeat(point - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..point], &digits[point..])
    }
}

struct Parser<'a> {
    token: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(token: &'a str) -> Self {
        Parser {
            token,
            chars: token.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn parse(mut self) -> Result<FormatSpec, FormatSpecError> {
        let mut spec = FormatSpec::empty();

        // [[fill]align]
        if let Some(align) = self.chars.get(1).copied().and_then(FieldAlign::from_char) {
            spec.fill = Some(self.chars[0]);
            spec.align = Some(align);
            self.pos = 2;
        } else if let Some(align) = self.peek().and_then(FieldAlign::from_char) {
            spec.align = Some(align);
            self.pos = 1;
        }

        if let Some(sign) = self.peek().and_then(Sign::from_char) {
            spec.sign = sign;
            spec.explicit_sign = true;
            self.pos += 1;
        }

        if let Some(c @ ('#' | 'z')) = self.peek() {
            return Err(self.unsupported(c));
        }

        if self.peek() == Some('0') {
            spec.zero = true;
            self.pos += 1;
        }

        spec.width = self.number("width")?;

        if let Some(c @ (',' | '_')) = self.peek() {
            return Err(self.unsupported(c));
        }

        if self.peek() == Some('.') {
            self.pos += 1;
            match self.number("precision")? {
                Some(p) if p <= MAX_PRECISION => spec.precision = Some(p),
                Some(_) => {
                    return Err(FormatSpecError::Overflow {
                        token: self.token.to_string(),
                        field: "precision",
                    })
                }
                None => {
                    return Err(FormatSpecError::MissingPrecision {
                        token: self.token.to_string(),
                    })
                }
            }
        }

        if let Some(c) = self.peek() {
            if let Some(style) = NumericStyle::from_char(c) {
                spec.style = style;
                self.pos += 1;
            } else if matches!(c, 'b' | 'c' | 'd' | 'n' | 'o' | 's' | 'x' | 'X') {
                return Err(self.unsupported(c));
            }
        }

        if let Some(found) = self.peek() {
            return Err(FormatSpecError::UnexpectedChar {
                token: self.token.to_string(),
                found,
                position: self.pos,
            });
        }

        Ok(spec)
    }

    fn number(&mut self, field: &'static str) -> Result<Option<usize>, FormatSpecError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits
            .parse()
            .map(Some)
            .map_err(|_| FormatSpecError::Overflow {
                token: self.token.to_string(),
                field,
            })
    }

    fn unsupported(&self, option: char) -> FormatSpecError {
        FormatSpecError::Unsupported {
            token: self.token.to_string(),
            option,
        }
    }
}

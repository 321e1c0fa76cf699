//! Free-text field helpers shared by the completion gate, the scorer and the explainer.

/// Outcome of reading a number out of a free-text profile or catalog field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    Unparseable,
}

impl<T> Parsed<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Parsed::Value(v) => Some(v),
            Parsed::Unparseable => None,
        }
    }
}

/// A field is filled iff it has non-whitespace content.
pub fn is_present(field: &str) -> bool {
    !field.trim().is_empty()
}

/// Reads a money amount such as `"₱80,000/year"` by keeping only its digits.
pub fn parse_amount(text: &str) -> Parsed<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(v) => Parsed::Value(v),
        Err(_) => Parsed::Unparseable,
    }
}

/// Whole-field float parse. `"3.8/4.0"` or `"3.8 GPA"` are `Unparseable`.
pub fn parse_gpa(text: &str) -> Parsed<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Parsed::Value(v),
        _ => Parsed::Unparseable,
    }
}

//! Quantity input with sanitize-on-input validation.
//!
//! The one validation rule in the storefront: anything that is not an integer
//! of at least 1 resets the field to 1 on every input event. The reset goes
//! to the floor value, never back to the previous valid value.

/// Edit buffer for a quantity text field.
#[derive(Debug, Clone)]
pub struct QuantityField {
    buffer: String,
}

impl Default for QuantityField {
    fn default() -> Self {
        Self {
            buffer: "1".to_string(),
        }
    }
}

impl QuantityField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access for the text-edit widget.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Apply the validation rule after an input event.
    ///
    /// Returns the rejected input when the field was reset to 1, None when
    /// the value was already valid.
    pub fn sanitize(&mut self) -> Option<String> {
        match self.buffer.trim().parse::<i64>() {
            Ok(v) if v >= 1 => None,
            _ => {
                let rejected = std::mem::replace(&mut self.buffer, "1".to_string());
                Some(rejected)
            }
        }
    }

    /// Current value. The buffer always parses after `sanitize`, so the
    /// fallback of 1 only covers a mid-edit read.
    pub fn value(&self) -> u32 {
        self.buffer.trim().parse::<u32>().unwrap_or(1)
    }

    /// Reset back to the floor value (after an add-to-cart).
    pub fn reset(&mut self) {
        self.buffer = "1".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_input(input: &str) -> (String, Option<String>) {
        let mut field = QuantityField::new();
        *field.buffer_mut() = input.to_string();
        let rejected = field.sanitize();
        (field.text().to_string(), rejected)
    }

    #[test]
    fn test_zero_resets_to_one() {
        assert_eq!(after_input("0"), ("1".to_string(), Some("0".to_string())));
    }

    #[test]
    fn test_negative_resets_to_one() {
        assert_eq!(after_input("-5"), ("1".to_string(), Some("-5".to_string())));
    }

    #[test]
    fn test_non_numeric_resets_to_one() {
        assert_eq!(
            after_input("abc"),
            ("1".to_string(), Some("abc".to_string()))
        );
    }

    #[test]
    fn test_empty_resets_to_one() {
        assert_eq!(after_input(""), ("1".to_string(), Some(String::new())));
    }

    #[test]
    fn test_valid_value_is_kept() {
        let (text, rejected) = after_input("7");
        assert_eq!(text, "7");
        assert_eq!(rejected, None);

        let mut field = QuantityField::new();
        *field.buffer_mut() = "7".to_string();
        field.sanitize();
        assert_eq!(field.value(), 7);
    }

    #[test]
    fn test_reset_to_floor_not_previous_value() {
        let mut field = QuantityField::new();
        *field.buffer_mut() = "7".to_string();
        assert_eq!(field.sanitize(), None);

        // Invalid input after a valid one resets to 1, not back to 7
        *field.buffer_mut() = "abc".to_string();
        field.sanitize();
        assert_eq!(field.text(), "1");
    }
}

// src/tools/validate.rs

/// Length-range gate applied to one string argument before any upstream
/// call is made.
///
/// This check is deliberately shallow: byte length only, no base58
/// decoding, so a wrong-but-plausible string still reaches the upstream
/// and fails there. Known limitation, kept for parity with the advertised
/// tool contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    /// Name of the argument the rule applies to.
    pub param: &'static str,
    pub min: usize,
    pub max: usize,
    /// Exact text of the failure envelope when the rule rejects.
    pub message: &'static str,
}

impl LengthRule {
    /// Base-58 pubkeys land between 32 and 44 characters.
    pub const fn address(param: &'static str, message: &'static str) -> Self {
        Self {
            param,
            min: 32,
            max: 44,
            message,
        }
    }

    /// Base-58 transaction signatures land between 32 and 88 characters.
    pub const fn signature(param: &'static str, message: &'static str) -> Self {
        Self {
            param,
            min: 32,
            max: 88,
            message,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.min..=self.max).contains(&value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_rule_bounds_are_inclusive() {
        let rule = LengthRule::address("address", "Error: Invalid wallet address.");
        assert!(!rule.accepts(&"a".repeat(31)));
        assert!(rule.accepts(&"a".repeat(32)));
        assert!(rule.accepts(&"a".repeat(44)));
        assert!(!rule.accepts(&"a".repeat(45)));
    }

    #[test]
    fn signature_rule_bounds_are_inclusive() {
        let rule = LengthRule::signature("signature", "Error: Invalid signature length.");
        assert!(!rule.accepts(&"s".repeat(31)));
        assert!(rule.accepts(&"s".repeat(32)));
        assert!(rule.accepts(&"s".repeat(88)));
        assert!(!rule.accepts(&"s".repeat(89)));
    }

    #[test]
    fn non_base58_text_of_the_right_length_passes() {
        // The gate is length-only; garbage of plausible length goes upstream.
        let rule = LengthRule::address("address", "Error: Invalid wallet address.");
        assert!(rule.accepts(&"!".repeat(40)));
    }
}

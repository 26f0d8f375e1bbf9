/// Ordered verification progression for a candidate. Higher tiers subsume the
/// checks of lower ones, so ordering comparisons are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerificationTier {
    Unverified,
    Basic,
    Identity,
    References,
    Verified,
    Premium,
}

impl VerificationTier {
    /// Parse the stored tier string. Unknown or absent values fall back to
    /// `Unverified` rather than erroring; the tier is advisory input, not a
    /// validation surface.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).map(str::to_lowercase).as_deref() {
            Some("basic") => Self::Basic,
            Some("identity") => Self::Identity,
            Some("references") => Self::References,
            Some("verified") => Self::Verified,
            Some("premium") => Self::Premium,
            _ => Self::Unverified,
        }
    }

    /// Identity has been confirmed at this tier or above.
    pub fn identity_confirmed(self) -> bool {
        self >= Self::Identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tiers_case_insensitively() {
        assert_eq!(VerificationTier::parse(Some("Premium")), VerificationTier::Premium);
        assert_eq!(VerificationTier::parse(Some(" verified ")), VerificationTier::Verified);
        assert_eq!(VerificationTier::parse(Some("identity")), VerificationTier::Identity);
    }

    #[test]
    fn unknown_and_absent_fall_back_to_unverified() {
        assert_eq!(VerificationTier::parse(None), VerificationTier::Unverified);
        assert_eq!(VerificationTier::parse(Some("")), VerificationTier::Unverified);
        assert_eq!(VerificationTier::parse(Some("gold")), VerificationTier::Unverified);
    }

    #[test]
    fn progression_is_ordered() {
        assert!(VerificationTier::Unverified < VerificationTier::Basic);
        assert!(VerificationTier::Basic < VerificationTier::Identity);
        assert!(VerificationTier::Identity < VerificationTier::References);
        assert!(VerificationTier::References < VerificationTier::Verified);
        assert!(VerificationTier::Verified < VerificationTier::Premium);
    }

    #[test]
    fn identity_confirmed_from_identity_tier_up() {
        assert!(!VerificationTier::Basic.identity_confirmed());
        assert!(VerificationTier::Identity.identity_confirmed());
        assert!(VerificationTier::Premium.identity_confirmed());
    }
}

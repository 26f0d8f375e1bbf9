/// Weighted completeness category. Weights are percentage points; the table
/// must sum to 100 so the score reconciles with the action boosts.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u8,
    pub href: &'static str,
    /// Identity verification is not self-service, so no remediation action is
    /// offered for it.
    pub offers_action: bool,
}

/// Evaluation order is the action order; no re-sorting by weight.
pub const CATEGORIES: [Category; 7] = [
    Category {
        id: "basic_info",
        label: "Complete your basic information",
        weight: 15,
        href: "/dashboard/profile#basic",
        offers_action: true,
    },
    Category {
        id: "professional",
        label: "Add your position and candidate type",
        weight: 20,
        href: "/dashboard/profile#professional",
        offers_action: true,
    },
    Category {
        id: "cv",
        label: "Upload your CV",
        weight: 20,
        href: "/dashboard/documents",
        offers_action: true,
    },
    Category {
        id: "photo",
        label: "Add a profile photo",
        weight: 10,
        href: "/dashboard/profile#photo",
        offers_action: true,
    },
    Category {
        id: "certifications",
        label: "Add your STCW or ENG1 certification",
        weight: 20,
        href: "/dashboard/certifications",
        offers_action: true,
    },
    Category {
        id: "preferences",
        label: "Set your industry preference",
        weight: 10,
        href: "/dashboard/preferences",
        offers_action: true,
    },
    Category {
        id: "identity",
        label: "Identity verification",
        weight: 5,
        href: "/dashboard/verification",
        offers_action: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        let sum: u32 = CATEGORIES.iter().map(|c| c.weight as u32).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn only_identity_withholds_an_action() {
        let silent: Vec<_> = CATEGORIES
            .iter()
            .filter(|c| !c.offers_action)
            .map(|c| c.id)
            .collect();
        assert_eq!(silent, vec!["identity"]);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }
}

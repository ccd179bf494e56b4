//! Resolved addressing scope of a shell request.

use crate::domain::organization::Organization;

/// The scope a shell request was resolved to by routing.
///
/// Two independent axes (organization-bound or not, demo or not) give four
/// closed cases. The demo axis here only selects side effects; whether the
/// rendered page is a demo page is decided by the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Generic,
    GenericDemo,
    Organization { organization: Organization },
    OrganizationDemo { organization: Organization },
}

impl Scope {
    /// Builds a scope from its two axes.
    pub fn new(organization: Option<Organization>, demo: bool) -> Self {
        match (organization, demo) {
            (None, false) => Scope::Generic,
            (None, true) => Scope::GenericDemo,
            (Some(organization), false) => Scope::Organization { organization },
            (Some(organization), true) => Scope::OrganizationDemo { organization },
        }
    }

    /// Returns true for the demo variants.
    pub fn is_demo(&self) -> bool {
        matches!(self, Scope::GenericDemo | Scope::OrganizationDemo { .. })
    }

    /// Returns the bound organization, if any.
    pub fn organization(&self) -> Option<&Organization> {
        match self {
            Scope::Organization { organization } | Scope::OrganizationDemo { organization } => {
                Some(organization)
            }
            Scope::Generic | Scope::GenericDemo => None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Scope::Generic => "generic",
            Scope::GenericDemo => "generic_demo",
            Scope::Organization { .. } => "organization",
            Scope::OrganizationDemo { .. } => "organization_demo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrganizationId;
    use crate::domain::organization::Slug;

    fn acme() -> Organization {
        Organization::new(OrganizationId::new(), Slug::new("acme").unwrap(), "Acme")
    }

    #[test]
    fn new_covers_all_four_cases() {
        assert_eq!(Scope::new(None, false), Scope::Generic);
        assert_eq!(Scope::new(None, true), Scope::GenericDemo);
        assert!(matches!(
            Scope::new(Some(acme()), false),
            Scope::Organization { .. }
        ));
        assert!(matches!(
            Scope::new(Some(acme()), true),
            Scope::OrganizationDemo { .. }
        ));
    }

    #[test]
    fn demo_axis_is_independent_of_organization_axis() {
        assert!(!Scope::Generic.is_demo());
        assert!(Scope::GenericDemo.is_demo());
        assert!(!Scope::new(Some(acme()), false).is_demo());
        assert!(Scope::new(Some(acme()), true).is_demo());
    }

    #[test]
    fn organization_is_exposed_for_bound_variants_only() {
        let org = acme();
        assert_eq!(
            Scope::new(Some(org.clone()), true).organization(),
            Some(&org)
        );
        assert!(Scope::GenericDemo.organization().is_none());
    }

    #[test]
    fn kind_labels_are_distinct() {
        let kinds = [
            Scope::Generic.kind(),
            Scope::GenericDemo.kind(),
            Scope::new(Some(acme()), false).kind(),
            Scope::new(Some(acme()), true).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

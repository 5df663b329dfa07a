//! Dashboard route table.
//!
//! # Responsibility
//! - Map URL paths to pages, following the fixed redirect aliases.
//! - Tell front ends which record collection a page lists.
//!
//! # Invariants
//! - Aliases redirect to a canonical path present in the route table.
//! - Trailing slashes are ignored; matching is otherwise exact.

use crate::view::Domain;

labeled_enum! {
    pub enum Page {
        Dashboard => "Dashboard",
        Contracts => "Contracts",
        ContractDrafting => "New Contract",
        Entities => "Entity Management",
        Tasks => "Task Management",
        Knowledge => "Knowledge Management",
        Matters => "Matter Management",
        Risks => "Risk Management",
        RiskDashboard => "Risk Dashboard",
        Disputes => "Dispute Resolution",
        OutsourcedSpend => "Outsourced Matters & Spend",
        Compliance => "Compliance",
        RegulatoryCompliance => "Regulatory Compliance",
        Policies => "Policy Management",
        UserAccess => "User Access Management",
        IpManagement => "IP Management",
        DataProtection => "Data Protection",
        Licensing => "Licensing & Regulatory",
        Dealflow => "Dealflow",
        CompanySecretarial => "Company Secretarial",
    }
}

impl Page {
    /// Record collection listed by this page, if it has a list view.
    pub fn domain(self) -> Option<Domain> {
        match self {
            Self::Contracts | Self::ContractDrafting => Some(Domain::Contracts),
            Self::Entities => Some(Domain::Entities),
            Self::Tasks => Some(Domain::Tasks),
            Self::Matters => Some(Domain::Matters),
            Self::Risks | Self::RiskDashboard => Some(Domain::Risks),
            Self::Disputes => Some(Domain::Disputes),
            Self::OutsourcedSpend => Some(Domain::Vendors),
            Self::Compliance | Self::RegulatoryCompliance => Some(Domain::Compliance),
            Self::Policies => Some(Domain::Policies),
            Self::Dashboard
            | Self::Knowledge
            | Self::UserAccess
            | Self::IpManagement
            | Self::DataProtection
            | Self::Licensing
            | Self::Dealflow
            | Self::CompanySecretarial => None,
        }
    }
}

/// Canonical paths in navigation order.
pub const ROUTES: &[(&str, Page)] = &[
    ("/", Page::Dashboard),
    ("/contracts", Page::Contracts),
    ("/contracts-new", Page::ContractDrafting),
    ("/entity-management", Page::Entities),
    ("/task-management", Page::Tasks),
    ("/knowledge-management", Page::Knowledge),
    ("/matters", Page::Matters),
    ("/risk-management", Page::Risks),
    ("/risk-dashboard", Page::RiskDashboard),
    ("/dispute-resolution", Page::Disputes),
    ("/outsourced-matters-spend", Page::OutsourcedSpend),
    ("/compliance", Page::Compliance),
    ("/policy-management", Page::Policies),
    ("/user-access-management", Page::UserAccess),
    ("/ip-management", Page::IpManagement),
    ("/data-protection", Page::DataProtection),
    ("/licensing-regulatory", Page::Licensing),
    ("/dealflow", Page::Dealflow),
    ("/company-secretarial", Page::CompanySecretarial),
    ("/contracts-enhanced", Page::Contracts),
    ("/entity-management-enhanced", Page::Entities),
    ("/task-management-enhanced", Page::Tasks),
    ("/knowledge-management-enhanced", Page::Knowledge),
    ("/matter-management-enhanced", Page::Matters),
    ("/dispute-resolution-enhanced", Page::Disputes),
    ("/outsourced-matters-spend-enhanced", Page::OutsourcedSpend),
    ("/regulatory-compliance-enhanced", Page::RegulatoryCompliance),
    ("/policy-management-enhanced", Page::Policies),
];

/// Short paths that redirect to a canonical path.
pub const ALIASES: &[(&str, &str)] = &[
    ("/disputes", "/dispute-resolution"),
    ("/policies", "/policy-management"),
    ("/knowledge", "/knowledge-management"),
    ("/legal-spend", "/outsourced-matters-spend"),
    ("/spend", "/outsourced-matters-spend"),
    ("/risk", "/risk-management"),
    ("/tasks", "/task-management"),
    ("/compliance-management", "/compliance"),
    ("/users", "/user-access-management"),
    ("/ip", "/ip-management"),
    ("/data", "/data-protection"),
    ("/licensing", "/licensing-regulatory"),
    ("/deals", "/dealflow"),
    ("/company", "/company-secretarial"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResolution {
    Resolved {
        page: Page,
        canonical_path: &'static str,
        /// Alias the request arrived on, when it was redirected.
        redirected_from: Option<&'static str>,
    },
    NotFound,
}

impl RouteResolution {
    pub fn page(self) -> Option<Page> {
        match self {
            Self::Resolved { page, .. } => Some(page),
            Self::NotFound => None,
        }
    }
}

/// Resolves a request path to a page.
pub fn resolve_route(path: &str) -> RouteResolution {
    let normalized = normalize_path(path);

    if let Some((canonical_path, page)) = lookup(normalized) {
        return RouteResolution::Resolved {
            page,
            canonical_path,
            redirected_from: None,
        };
    }

    let redirect = ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .and_then(|(alias, target)| {
            lookup(target).map(|(canonical, page)| (*alias, canonical, page))
        });

    match redirect {
        Some((alias, canonical_path, page)) => RouteResolution::Resolved {
            page,
            canonical_path,
            redirected_from: Some(alias),
        },
        None => RouteResolution::NotFound,
    }
}

fn lookup(path: &str) -> Option<(&'static str, Page)> {
    ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(candidate, page)| (*candidate, *page))
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim();
    let without_slash = trimmed.trim_end_matches('/');
    if without_slash.is_empty() {
        "/"
    } else {
        without_slash
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, ALIASES, ROUTES};

    #[test]
    fn every_alias_targets_a_route() {
        for (alias, target) in ALIASES {
            assert!(
                ROUTES.iter().any(|(path, _)| path == target),
                "alias {alias} targets missing route {target}"
            );
        }
    }

    #[test]
    fn root_survives_normalization() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/matters/"), "/matters");
    }
}

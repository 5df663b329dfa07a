use counselflow_core::routes::{ALIASES, ROUTES};
use counselflow_core::{resolve_route, Domain, Page, RouteResolution};

#[test]
fn canonical_paths_resolve_without_redirect() {
    assert_eq!(
        resolve_route("/contracts"),
        RouteResolution::Resolved {
            page: Page::Contracts,
            canonical_path: "/contracts",
            redirected_from: None,
        }
    );
    assert_eq!(resolve_route("/").page(), Some(Page::Dashboard));
}

#[test]
fn aliases_redirect_to_canonical_paths() {
    assert_eq!(
        resolve_route("/disputes"),
        RouteResolution::Resolved {
            page: Page::Disputes,
            canonical_path: "/dispute-resolution",
            redirected_from: Some("/disputes"),
        }
    );
    assert_eq!(resolve_route("/spend/").page(), Some(Page::OutsourcedSpend));
    assert_eq!(resolve_route("/legal-spend").page(), Some(Page::OutsourcedSpend));
}

#[test]
fn enhanced_paths_are_routes_of_their_own() {
    match resolve_route("/regulatory-compliance-enhanced") {
        RouteResolution::Resolved {
            page,
            redirected_from,
            ..
        } => {
            assert_eq!(page, Page::RegulatoryCompliance);
            assert_eq!(redirected_from, None);
        }
        RouteResolution::NotFound => panic!("route should resolve"),
    }
    assert_eq!(
        resolve_route("/matter-management-enhanced").page(),
        Some(Page::Matters)
    );
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(resolve_route("/nope"), RouteResolution::NotFound);
    assert_eq!(resolve_route("/contracts/extra"), RouteResolution::NotFound);
}

#[test]
fn list_pages_map_to_domains() {
    assert_eq!(Page::OutsourcedSpend.domain(), Some(Domain::Vendors));
    assert_eq!(Page::RiskDashboard.domain(), Some(Domain::Risks));
    assert_eq!(Page::Dashboard.domain(), None);
    assert_eq!(Page::Dealflow.domain(), None);
}

#[test]
fn route_table_has_no_duplicate_paths() {
    for (index, (path, _)) in ROUTES.iter().enumerate() {
        assert!(
            !ROUTES[..index].iter().any(|(earlier, _)| earlier == path),
            "duplicate route {path}"
        );
        assert!(
            !ALIASES.iter().any(|(alias, _)| alias == path),
            "alias shadows route {path}"
        );
    }
}

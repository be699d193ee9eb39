use std::sync::Arc;
use waymark_router::{MatchOptions, Route, RouteHandle, Router, ancestor_chain};

#[test]
fn router_returns_root_to_leaf_ancestor_chain() {
    let dashboard = Arc::new(Route::new("dashboard", "/dashboard"));
    let reports =
        Arc::new(Route::new("reports", "/dashboard/reports").with_parent(dashboard.clone()));
    let report = Arc::new(
        Route::new("report", "/dashboard/reports/:reportId").with_parent(reports.clone()),
    );

    let router = Router::new();
    for route in [&dashboard, &reports, &report] {
        router
            .insert(route.clone())
            .expect("route should register");
    }
    router.seal();

    let resolution = router
        .resolve("/dashboard/reports/q3", &MatchOptions::default())
        .expect("router should be sealed");

    let chain: Vec<&str> = resolution
        .matched_routes
        .iter()
        .map(|route| route.route_id())
        .collect();
    assert_eq!(chain, vec!["dashboard", "reports", "report"]);
    assert_eq!(
        resolution
            .found_route
            .expect("leaf should match")
            .route_id(),
        "report"
    );
    assert_eq!(
        resolution.route_params.get("reportId").map(|v| v.as_str()),
        Some("q3")
    );
}

#[test]
fn router_when_leaf_has_no_parent_then_chain_is_the_leaf_alone() {
    let router = Router::new();
    router
        .insert(Arc::new(Route::new("solo", "/solo")))
        .expect("route should register");
    router.seal();

    let resolution = router
        .resolve("/solo", &MatchOptions::default())
        .expect("router should be sealed");
    assert_eq!(resolution.matched_routes.len(), 1);
    assert_eq!(resolution.matched_routes[0].route_id(), "solo");
}

#[test]
fn ancestor_chain_walks_parent_links_without_the_trie() {
    let a = Arc::new(Route::new("a", "/a"));
    let b = Arc::new(Route::new("b", "/a/b").with_parent(a.clone()));
    let c = Arc::new(Route::new("c", "/a/b/c").with_parent(b.clone()));

    let routes = ancestor_chain(&c);
    let chain: Vec<&str> = routes.iter().map(|r| r.route_id()).collect();
    assert_eq!(chain, vec!["a", "b", "c"]);
}

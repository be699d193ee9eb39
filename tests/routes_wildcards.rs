use std::sync::Arc;
use waymark_router::{
    MatchOptions, Route, RouteHandle, Router, SPLAT_NAMED_KEY, SPLAT_POSITIONAL_KEY,
};

fn sealed_router(routes: &[(&str, &str)]) -> Router<Route> {
    let router = Router::new();
    for (id, path) in routes {
        router
            .insert(Arc::new(Route::new(*id, *path)))
            .expect("route should register");
    }
    router.seal();
    router
}

#[test]
fn router_when_wildcard_route_registered_then_captures_greedy_suffix() {
    let router = sealed_router(&[("docs", "/docs/*")]);

    let resolution = router
        .resolve("/docs/a/b/c", &MatchOptions::default())
        .expect("router should be sealed");

    let found = resolution.found_route.expect("wildcard route should match");
    assert_eq!(found.route_id(), "docs");
    assert_eq!(
        resolution
            .route_params
            .get(SPLAT_POSITIONAL_KEY)
            .map(|v| v.as_str()),
        Some("a/b/c")
    );
    assert_eq!(
        resolution
            .route_params
            .get(SPLAT_NAMED_KEY)
            .map(|v| v.as_str()),
        Some("a/b/c")
    );
}

#[test]
fn router_when_param_and_wildcard_coexist_then_param_wins() {
    let router = sealed_router(&[("catchall", "/files/*"), ("named", "/files/:name")]);

    let resolution = router
        .resolve("/files/report.pdf", &MatchOptions::default())
        .expect("router should be sealed");

    let found = resolution.found_route.expect("a route should match");
    assert_eq!(found.route_id(), "named");
    assert_eq!(
        resolution.route_params.get("name").map(|v| v.as_str()),
        Some("report.pdf")
    );
    assert!(!resolution.route_params.contains_key(SPLAT_POSITIONAL_KEY));
}

#[test]
fn router_when_wildcard_is_only_full_match_then_it_wins() {
    let router = sealed_router(&[("catchall", "/files/*"), ("named", "/files/:name")]);

    // two remaining segments dead-end the :name branch
    let resolution = router
        .resolve("/files/media/logo.png", &MatchOptions::default())
        .expect("router should be sealed");

    let found = resolution.found_route.expect("wildcard should match");
    assert_eq!(found.route_id(), "catchall");
    assert_eq!(
        resolution
            .route_params
            .get(SPLAT_POSITIONAL_KEY)
            .map(|v| v.as_str()),
        Some("media/logo.png")
    );
}

#[test]
fn router_when_second_wildcard_inserted_then_existing_child_is_reused() {
    let router = sealed_router(&[("first", "/wild/*"), ("second", "/wild/*")]);

    let resolution = router
        .resolve("/wild/anything", &MatchOptions::default())
        .expect("router should be sealed");

    // both registrations terminate at the one wildcard child; the full
    // tie keeps discovery (insertion) order
    let found = resolution.found_route.expect("wildcard should match");
    assert_eq!(found.route_id(), "first");
}

#[test]
fn router_when_no_segments_remain_then_wildcard_is_not_taken() {
    let router = sealed_router(&[("docs", "/docs/*")]);

    let resolution = router
        .resolve("/docs", &MatchOptions::default())
        .expect("router should be sealed");

    assert!(!resolution.is_found());
}

#[test]
fn router_percent_decodes_splat_segments() {
    let router = sealed_router(&[("docs", "/docs/*")]);

    let resolution = router
        .resolve("/docs/user%20guide/intro", &MatchOptions::default())
        .expect("router should be sealed");

    assert_eq!(
        resolution
            .route_params
            .get(SPLAT_POSITIONAL_KEY)
            .map(|v| v.as_str()),
        Some("user guide/intro")
    );
}

#[test]
fn router_when_wildcard_deeper_than_param_then_depth_decides() {
    let router = sealed_router(&[("shallow", "/a/*"), ("deep", "/a/:b/:c")]);

    let resolution = router
        .resolve("/a/x/y", &MatchOptions::default())
        .expect("router should be sealed");

    let found = resolution.found_route.expect("a route should match");
    assert_eq!(found.route_id(), "deep");
}

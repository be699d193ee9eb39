use std::sync::Arc;

use super::{Registration, RouteTrie};
use crate::path::{ROOT_PATH, SegmentKind, sequence};
use crate::route::RouteHandle;

impl<T: RouteHandle> RouteTrie<T> {
    /// Registers a route so later lookups can find it.
    ///
    /// An empty or root full path registers directly at the root node,
    /// bypassing segment traversal. Otherwise the path is sequenced and
    /// nodes are created on demand, edge by edge; the registration lands
    /// on the terminal node. Insertion must not run concurrently with
    /// lookups; see [`RouteTrie`].
    #[tracing::instrument(level = "trace", skip(self, route), fields(path = %route.full_path()))]
    pub fn insert(&mut self, route: Arc<T>) {
        let full_path = route.full_path().to_string();
        let route_id = route.route_id().to_string();
        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            route_id = %route_id,
            path = %full_path
        );

        let registration = Registration {
            route,
            full_path: full_path.clone().into_boxed_str(),
            route_id: route_id.into_boxed_str(),
        };

        if full_path.is_empty() || full_path == ROOT_PATH {
            self.root.registrations.push(registration);
            self.record_registration();
            return;
        }

        let mut current = &mut self.root;
        for segment in sequence(&full_path) {
            match segment.kind {
                SegmentKind::Literal if segment.is_separator() => {}
                SegmentKind::Literal => {
                    current = current.static_child_mut(&segment.text);
                }
                SegmentKind::Parameter => {
                    current = current.param_child_mut(segment.param_name());
                }
                SegmentKind::Wildcard => {
                    current = current.wildcard_child_mut();
                }
            }
        }

        current.registrations.push(registration);
        self.record_registration();
    }

    /// Registers every route in declaration order.
    pub fn insert_all<I>(&mut self, routes: I)
    where
        I: IntoIterator<Item = Arc<T>>,
    {
        for route in routes {
            self.insert(route);
        }
    }
}

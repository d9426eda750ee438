//! Navigation tests over the application route table.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use agri_shell::routing::{
    app_routes, app_routes_with, Component, ComponentRef, LoadError, NavigationError, Navigator,
    Params, RouteTable,
};
use tokio::sync::{mpsc, Notify};

/// Every declared absolute path with the name of the route it resolves to.
const DECLARED: &[(&str, &str)] = &[
    ("/", "home"),
    ("/dashboard", "dashboard"),
    ("/dashboard/overview", "dashboardOverview"),
    ("/dashboard/monitor", "dashboardMonitor"),
    ("/dashboard/analysis", "dashboardAnalysis"),
    ("/smart-farm", "smart-farm"),
    ("/smart-farm/sensor", "sensor"),
    ("/smart-farm/data", "data"),
    ("/smart-farm/operation", "operation"),
    ("/smart-farm/definition", "definition"),
    ("/smart-farm/architecture", "architecture"),
    ("/smart-farm/technical", "technical"),
    ("/big-data", "bigData"),
    ("/big-data/collection", "collection"),
    ("/big-data/collection/environment", "environmentData"),
    ("/big-data/collection/video", "videoData"),
    ("/big-data/collection/device", "DeviceData"),
    ("/big-data/analysis", "analysis"),
    ("/big-data/analysis/trend", "trendAnalysis"),
    ("/big-data/service", "service"),
    ("/big-data/collection/manual", "manualData"),
    ("/big-data/analysis/intelligent-analytics", "intelligentAnalytics"),
    ("/smart-operation", "smartOperation"),
    ("/smart-operation/environment", "environment"),
    ("/smart-operation/equipment", "equipment"),
    ("/smart-operation/records", "records"),
    ("/digital-planting", "digitalPlanting"),
    ("/digital-planting/planting", "planting"),
    ("/digital-planting/standard", "standard"),
    ("/digital-planting/irrigation", "irrigation"),
    ("/product-trace", "productTrace"),
    ("/product-trace/planting", "tracePlanting"),
    ("/product-trace/processing", "traceProcessing"),
    ("/product-trace/logistics", "traceLogistics"),
    ("/product-trace/certification", "traceCertification"),
    ("/services", "servicesHome"),
    ("/services/about", "servicesAbout"),
    ("/services/knowledge", "servicesKnowledge"),
    ("/services/farmer", "servicesFarmer"),
    ("/services/experts", "servicesExperts"),
    ("/services/message", "servicesMessage"),
    ("/services/qa", "servicesQA"),
    ("/services/video", "servicesVideo"),
    ("/services/visualization", "servicesVisualization"),
    ("/science", "scienceHome"),
    ("/science/development", "scienceDevelopment"),
    ("/science/greenhouse", "scienceGreenhouse"),
    ("/science/knowledge", "scienceKnowledge"),
    ("/science/culture", "scienceCulture"),
    ("/science/machinery", "scienceMachinery"),
    ("/science/materials", "scienceMaterials"),
    ("/science/videos", "scienceVideos"),
    ("/education", "education"),
    ("/shop", "shop"),
];

fn app_table() -> Arc<RouteTable> {
    Arc::new(RouteTable::new(app_routes()).unwrap())
}

#[test]
fn test_every_declared_path_resolves_to_its_name() {
    let table = app_table();
    for (path, name) in DECLARED {
        let route_match = table
            .resolve(path)
            .unwrap_or_else(|e| panic!("{} did not resolve: {}", path, e));
        assert_eq!(route_match.name, *name, "leaf for {}", path);
    }
}

#[test]
fn test_child_paths_join_parent_paths() {
    let table = app_table();
    for route in table.flatten() {
        let node = table.find_by_name(&route.name).unwrap();
        let expected = match node.parent() {
            None => node.path().to_string(),
            Some(parent) => {
                let parent = table.node(parent);
                if node.path().is_empty() {
                    parent.full_path().to_string()
                } else {
                    format!("{}/{}", parent.full_path(), node.path())
                }
            }
        };
        assert_eq!(route.full_path, expected);

        let declared = DECLARED.iter().any(|(path, _)| *path == route.full_path);
        assert!(declared, "{} missing from the declared table", route.full_path);
    }
}

#[test]
fn test_index_children_resolve_on_parent_path() {
    let table = app_table();

    let services = table.resolve("/services/").unwrap();
    assert_eq!(services.names(), vec!["services", "servicesHome"]);

    let science = table.resolve("/science").unwrap();
    assert_eq!(science.names(), vec!["science", "scienceHome"]);

    let dashboard = table.resolve("/dashboard").unwrap();
    assert_eq!(dashboard.names(), vec!["dashboard"]);
}

#[test]
fn test_nested_stack_for_deep_paths() {
    let table = app_table();
    let route_match = table.resolve("/big-data/analysis/intelligent-analytics").unwrap();
    assert_eq!(route_match.names(), vec!["bigData", "intelligentAnalytics"]);
    assert_eq!(route_match.matched[1].full_path, "/big-data/analysis/intelligent-analytics");
}

#[tokio::test]
async fn test_undeclared_path_is_navigation_error() {
    let nav = Navigator::new(app_table());
    nav.navigate("/product-trace/logistics").await.unwrap();

    for path in ["/farm", "/big-data/collection/soil", "/SHOP", "/shop/cart"] {
        let err = nav.navigate(path).await.unwrap_err();
        assert!(matches!(err, NavigationError::NoMatch { .. }), "{}", path);
    }
    assert_eq!(nav.current().unwrap().name, "traceLogistics");
}

#[tokio::test]
async fn test_navigation_loads_layout_stack() {
    let nav = Navigator::new(app_table());
    let current = nav.navigate("/big-data/collection").await.unwrap();

    let views: Vec<_> = current.components.iter().map(|c| c.view()).collect();
    assert_eq!(views, vec!["views/BigDataView", "views/big-data/CollectionView"]);
    assert_eq!(current.matched, vec!["bigData", "collection"]);
}

#[tokio::test]
async fn test_named_navigation() {
    let nav = Navigator::new(app_table());
    let current = nav
        .navigate_named("traceCertification", &Params::new())
        .await
        .unwrap();
    assert_eq!(current.path, "/product-trace/certification");
}

#[tokio::test]
async fn test_later_navigation_wins() {
    let (started_tx, mut started_rx) = mpsc::unbounded_channel();
    let gate = Arc::new(Notify::new());

    let routes = app_routes_with(|view| {
        if view != "views/ShopView" {
            return ComponentRef::deferred(view);
        }
        let started_tx = started_tx.clone();
        let gate = gate.clone();
        ComponentRef::lazy(move || {
            let started_tx = started_tx.clone();
            let gate = gate.clone();
            async move {
                let _ = started_tx.send(());
                gate.notified().await;
                Ok(Component::new("views/ShopView"))
            }
        })
    });
    let nav = Arc::new(Navigator::new(Arc::new(RouteTable::new(routes).unwrap())));

    let first = tokio::spawn({
        let nav = nav.clone();
        async move { nav.navigate("/shop").await }
    });
    started_rx.recv().await.unwrap();

    let second = nav.navigate("/education").await.unwrap();
    assert_eq!(second.name, "education");

    let first = first.await.unwrap();
    assert!(matches!(first, Err(NavigationError::Superseded { .. })));
    assert_eq!(nav.current().unwrap().name, "education");

    // The abandoned load is not cached; the next visit loads again.
    gate.notify_one();
    let shop = nav.navigate("/shop").await.unwrap();
    assert_eq!(shop.name, "shop");
    assert!(shop.navigation_id > second.navigation_id);
}

#[tokio::test]
async fn test_failed_navigation_still_supersedes() {
    let gate = Arc::new(Notify::new());
    let (started_tx, mut started_rx) = mpsc::unbounded_channel();

    let routes = app_routes_with(|view| {
        if view != "views/EducationView" {
            return ComponentRef::deferred(view);
        }
        let gate = gate.clone();
        let started_tx = started_tx.clone();
        ComponentRef::lazy(move || {
            let gate = gate.clone();
            let started_tx = started_tx.clone();
            async move {
                let _ = started_tx.send(());
                gate.notified().await;
                Ok(Component::new("views/EducationView"))
            }
        })
    });
    let nav = Arc::new(Navigator::new(Arc::new(RouteTable::new(routes).unwrap())));
    nav.navigate("/").await.unwrap();

    let pending = tokio::spawn({
        let nav = nav.clone();
        async move { nav.navigate("/education").await }
    });
    started_rx.recv().await.unwrap();

    assert!(nav.navigate("/nowhere").await.is_err());
    assert!(matches!(
        pending.await.unwrap(),
        Err(NavigationError::Superseded { .. })
    ));
    assert_eq!(nav.current().unwrap().name, "home");
}

#[tokio::test]
async fn test_lazy_component_loaded_once() {
    let loads = Arc::new(AtomicU32::new(0));
    let routes = app_routes_with(|view| {
        let loads = loads.clone();
        ComponentRef::lazy(move || {
            loads.fetch_add(1, Ordering::SeqCst);
            async move { Ok(Component::new(view)) }
        })
    });
    let nav = Navigator::new(Arc::new(RouteTable::new(routes).unwrap()));

    nav.navigate("/smart-farm/sensor").await.unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 2);

    nav.navigate("/smart-farm/sensor").await.unwrap();
    nav.navigate("/smart-farm").await.unwrap();
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_load_rejects_and_retries() {
    let attempts = Arc::new(AtomicU32::new(0));
    let routes = app_routes_with(|view| {
        if view != "views/digital-planting/IrrigationView" {
            return ComponentRef::deferred(view);
        }
        let attempts = attempts.clone();
        ComponentRef::lazy(move || {
            let first = attempts.fetch_add(1, Ordering::SeqCst) == 0;
            async move {
                if first {
                    Err(LoadError::Fetch("chunk request failed".into()))
                } else {
                    Ok(Component::new(view))
                }
            }
        })
    });
    let nav = Navigator::new(Arc::new(RouteTable::new(routes).unwrap()));

    let err = nav.navigate("/digital-planting/irrigation").await.unwrap_err();
    assert_eq!(
        err,
        NavigationError::ComponentLoad {
            route: "irrigation".into(),
            source: LoadError::Fetch("chunk request failed".into()),
        }
    );
    assert!(nav.current().is_none());

    let current = nav.navigate("/digital-planting/irrigation").await.unwrap();
    assert_eq!(current.name, "irrigation");
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_mounted_portal_strips_base() {
    let nav = Navigator::with_base(app_table(), "/agri");

    let current = nav.navigate("/agri/services/qa").await.unwrap();
    assert_eq!(current.path, "/services/qa");
    assert_eq!(current.matched, vec!["services", "servicesQA"]);

    assert_eq!(
        nav.href("traceLogistics", &Params::new()).unwrap(),
        "/agri/product-trace/logistics"
    );
    let err = nav.navigate("/services/qa").await.unwrap_err();
    assert!(matches!(err, NavigationError::NoMatch { .. }));
    assert_eq!(nav.current().unwrap().name, "servicesQA");
}

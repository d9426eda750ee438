//! The application's route table.
//!
//! Only the landing page and the data collection overview are bundled
//! eagerly; every other view is fetched on first navigation.

use crate::routing::component::ComponentRef;
use crate::routing::route::Route;

/// Declared route tree with bundled deferred views.
pub fn app_routes() -> Vec<Route> {
    app_routes_with(ComponentRef::deferred)
}

/// Declared route tree, using `lazy` to build each deferred component.
pub fn app_routes_with<F>(lazy: F) -> Vec<Route>
where
    F: Fn(&'static str) -> ComponentRef,
{
    let route = |path: &str, name: &str, view: &'static str| Route::new(path, name, lazy(view));

    vec![
        Route::eager("/", "home", "views/HomeView"),
        route("/dashboard", "dashboard", "views/DashboardView").with_children(vec![
            route("overview", "dashboardOverview", "views/dashboard/OverviewView"),
            route("monitor", "dashboardMonitor", "views/dashboard/MonitorView"),
            route("analysis", "dashboardAnalysis", "views/dashboard/AnalysisView"),
        ]),
        route("/smart-farm", "smart-farm", "views/SmartFarmView").with_children(vec![
            route("sensor", "sensor", "views/smart-farm/SensorView"),
            route("data", "data", "views/smart-farm/DataView"),
            route("operation", "operation", "views/smart-farm/OperationView"),
            route("definition", "definition", "views/smart-farm/DefinitionView"),
            route("architecture", "architecture", "views/smart-farm/ArchitectureView"),
            route("technical", "technical", "views/smart-farm/TechnicalView"),
        ]),
        route("/big-data", "bigData", "views/BigDataView").with_children(vec![
            Route::eager("collection", "collection", "views/big-data/CollectionView"),
            route(
                "collection/environment",
                "environmentData",
                "views/big-data/environment/EnvironmentDataView",
            ),
            route("collection/video", "videoData", "views/big-data/video/VideoDataView"),
            route("collection/device", "DeviceData", "views/big-data/device/DeviceDataView"),
            route("analysis", "analysis", "views/big-data/AnalysisView"),
            route(
                "analysis/trend",
                "trendAnalysis",
                "views/big-data/analysis/TrendAnalysisView",
            ),
            route("service", "service", "views/big-data/ServiceView"),
            route("collection/manual", "manualData", "views/big-data/manual/ManualDataView"),
            route(
                "analysis/intelligent-analytics",
                "intelligentAnalytics",
                "views/big-data/analysis/IntelligentAnalyticsView",
            ),
        ]),
        route("/smart-operation", "smartOperation", "views/SmartOperationView").with_children(vec![
            route("environment", "environment", "views/smart-operation/EnvironmentView"),
            route("equipment", "equipment", "views/smart-operation/EquipmentView"),
            route("records", "records", "views/smart-operation/RecordsView"),
        ]),
        route("/digital-planting", "digitalPlanting", "views/DigitalPlantingView").with_children(vec![
            route("planting", "planting", "views/digital-planting/PlantingView"),
            route("standard", "standard", "views/digital-planting/StandardView"),
            route("irrigation", "irrigation", "views/digital-planting/IrrigationView"),
        ]),
        route("/product-trace", "productTrace", "views/ProductTraceView").with_children(vec![
            route("planting", "tracePlanting", "views/product-trace/PlantingTraceView"),
            route("processing", "traceProcessing", "views/product-trace/ProcessingTraceView"),
            route("logistics", "traceLogistics", "views/product-trace/LogisticsTraceView"),
            route("certification", "traceCertification", "views/product-trace/CertificationView"),
        ]),
        route("/services", "services", "views/ServicesView").with_children(vec![
            route("", "servicesHome", "views/ServicesView"),
            route("about", "servicesAbout", "views/services/AboutView"),
            route("knowledge", "servicesKnowledge", "views/services/KnowledgeView"),
            route("farmer", "servicesFarmer", "views/services/FarmerView"),
            route("experts", "servicesExperts", "views/services/ExpertsView"),
            route("message", "servicesMessage", "views/services/MessageView"),
            route("qa", "servicesQA", "views/services/QAView"),
            route("video", "servicesVideo", "views/services/VideoView"),
            route("visualization", "servicesVisualization", "views/services/VisualizationView"),
        ]),
        route("/science", "science", "views/ScienceView").with_children(vec![
            route("", "scienceHome", "views/ScienceView"),
            route("development", "scienceDevelopment", "views/science/DevelopmentView"),
            route("greenhouse", "scienceGreenhouse", "views/science/GreenhouseView"),
            route("knowledge", "scienceKnowledge", "views/science/KnowledgeView"),
            route("culture", "scienceCulture", "views/science/CultureView"),
            route("machinery", "scienceMachinery", "views/science/MachineryView"),
            route("materials", "scienceMaterials", "views/science/MaterialsView"),
            route("videos", "scienceVideos", "views/science/VideosView"),
        ]),
        route("/education", "education", "views/EducationView"),
        route("/shop", "shop", "views/ShopView"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::RouteTable;

    #[test]
    fn test_app_table_is_valid() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert_eq!(table.len(), 56);
    }

    #[test]
    fn test_eager_components() {
        let table = RouteTable::new(app_routes()).unwrap();
        let eager: Vec<_> = table
            .flatten()
            .into_iter()
            .filter(|r| !r.lazy)
            .map(|r| r.name)
            .collect();
        assert_eq!(eager, vec!["home", "collection"]);
    }
}
